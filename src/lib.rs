//! Card arrangement for board canvases: row, column, grid and cluster
//! layouts for sets of variable-sized cards.
//!
//! Pure geometry — no rendering, no shared state, `no_std` compatible
//! (needs `alloc`). Give it the measured size of every card and an anchor
//! point, get back one centre position per card, in input order.
//!
//! # Modules
//!
//! - [`geometry`] — Points, sizes, card geometry records, output positions
//! - [`strategy`] — The strategy selector and its stable string keys
//! - [`config`] — Gap and pitch constants, with board presets
//! - [`arrange`](mod@arrange) — Strategy functions and dispatch
//! - [`oracle`] — Size oracle contract and geometry snapshots
//! - [`anchor`] — Pointer / viewport-centre anchor resolution
//! - `svg` — SVG rendering of arrangements (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenarrange::{arrange, CardGeometry, Point, Strategy};
//!
//! let cards = [
//!     CardGeometry::new("a", 300.0, 140.0),
//!     CardGeometry::new("b", 300.0, 140.0),
//!     CardGeometry::new("c", 300.0, 140.0),
//!     CardGeometry::new("d", 300.0, 140.0),
//! ];
//! let positions = arrange(Strategy::Cluster, &cards, Point::new(100.0, 100.0));
//!
//! assert_eq!(positions.len(), 4);
//! assert_eq!((positions[0].x, positions[0].y), (150.0, 100.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

whereat::define_at_crate_info!();

pub mod anchor;
pub mod arrange;
pub mod config;
pub mod geometry;
pub mod oracle;
pub mod strategy;
#[cfg(feature = "svg")]
pub mod svg;

pub use anchor::{Viewport, resolve_anchor};
pub use arrange::{
    PositionSink, arrange, arrange_by_key, cluster, grid, grid_horizontal_packed,
    grid_top_aligned_overlap, grid_vertical_columns, horizontal, vertical,
};
pub use config::{ArrangeConfig, GridPitch, MIN_CARD_HEIGHT, NOMINAL_CARD_WIDTH};
pub use geometry::{CardGeometry, Point, Position, Rect, Size, bounding_box};
pub use oracle::{CardMetrics, SizeOracle, StandardOracle, snapshot};
pub use strategy::{ArrangeError, Strategy};
