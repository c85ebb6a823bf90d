//! Spacing and pitch constants for every strategy.
//!
//! The defaults reproduce the graph-library board. The lightweight-canvas
//! board used tighter row/column gaps; [`ArrangeConfig::compact`] carries
//! those so hosts can pick one explicitly instead of diverging silently.
//!
//! # Example
//!
//! ```
//! use zenarrange::{ArrangeConfig, CardGeometry, GridPitch, Point, Strategy};
//!
//! let config = ArrangeConfig::new()
//!     .gap(40.0)
//!     .grid_pitch(GridPitch::Fixed(180.0));
//!
//! let cards = [CardGeometry::new("a", 300.0, 140.0), CardGeometry::new("b", 300.0, 140.0)];
//! let positions = config.arrange(Strategy::Horizontal, &cards, Point::new(0.0, 0.0));
//!
//! // 300 + 40 + 300 = 640 wide, centred on the anchor.
//! assert_eq!(positions[0].x, -170.0);
//! assert_eq!(positions[1].x, 170.0);
//! ```

use crate::geometry::Size;

/// Nominal card width used by the host for standard cards.
pub const NOMINAL_CARD_WIDTH: f64 = 300.0;

/// Minimum rendered card height.
pub const MIN_CARD_HEIGHT: f64 = 140.0;

/// Cell pitch for [`Strategy::Grid`](crate::Strategy::Grid).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPitch {
    /// Same pitch on both axes, independent of card sizes.
    Fixed(f64),
    /// Widest card + `spacing` horizontally, tallest card + `spacing`
    /// vertically. Still uniform across cells.
    ContentAware { spacing: f64 },
}

impl GridPitch {
    /// The 180px pitch used for tool-driven layouts.
    pub const TOOL: Self = Self::Fixed(180.0);
}

/// Constants consumed by the strategy functions.
///
/// Built with [`ArrangeConfig::new`] and adjusted with the chained setters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrangeConfig {
    /// Edge-to-edge gap for Vertical and Horizontal.
    pub gap: f64,
    /// Cell pitch for Grid.
    pub grid_pitch: GridPitch,
    /// Column cap for the bounded grids.
    pub max_columns: usize,
    /// GridVerticalColumns: centre-to-centre column distance.
    pub column_pitch: f64,
    /// GridVerticalColumns: edge-to-edge gap between stacked cards.
    pub column_gap: f64,
    /// GridHorizontalPacked: centre-to-centre column distance.
    pub row_pitch: f64,
    /// GridHorizontalPacked: gap between a row's tallest card and the next row.
    pub row_padding: f64,
    /// GridTopAlignedOverlap: column pitch as a multiple of the widest card.
    pub overlap_width_factor: f64,
    /// GridTopAlignedOverlap: distance between the tops of cards in a column.
    pub overlap_top_pitch: f64,
    /// Cluster ring radius.
    pub cluster_radius: f64,
    /// Substituted for a width or height of exactly zero.
    pub fallback: Size,
}

impl ArrangeConfig {
    /// Graph-library board constants.
    pub const fn new() -> Self {
        Self {
            // 20% of the nominal card width
            gap: 60.0,
            grid_pitch: GridPitch::ContentAware { spacing: 60.0 },
            max_columns: 6,
            column_pitch: 350.0,
            column_gap: 80.0,
            // nominal width + 60px gutter
            row_pitch: 360.0,
            row_padding: 95.0,
            overlap_width_factor: 1.05,
            overlap_top_pitch: 120.0,
            cluster_radius: 50.0,
            fallback: Size::new(NOMINAL_CARD_WIDTH, MIN_CARD_HEIGHT),
        }
    }

    /// Lightweight-canvas board constants: 20px row and column gaps.
    pub const fn compact() -> Self {
        let mut config = Self::new();
        config.gap = 20.0;
        config.grid_pitch = GridPitch::ContentAware { spacing: 20.0 };
        config
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn grid_pitch(mut self, pitch: GridPitch) -> Self {
        self.grid_pitch = pitch;
        self
    }

    /// Set the column cap for the bounded grids. Clamped to at least 1.
    pub fn max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns.max(1);
        self
    }

    /// Set GridVerticalColumns column pitch and in-column gap.
    pub fn columns(mut self, pitch: f64, gap: f64) -> Self {
        self.column_pitch = pitch;
        self.column_gap = gap;
        self
    }

    /// Set GridHorizontalPacked column pitch and row padding.
    pub fn rows(mut self, pitch: f64, padding: f64) -> Self {
        self.row_pitch = pitch;
        self.row_padding = padding;
        self
    }

    /// Set GridTopAlignedOverlap width factor and top-to-top pitch.
    pub fn overlap(mut self, width_factor: f64, top_pitch: f64) -> Self {
        self.overlap_width_factor = width_factor;
        self.overlap_top_pitch = top_pitch;
        self
    }

    pub fn cluster_radius(mut self, radius: f64) -> Self {
        self.cluster_radius = radius;
        self
    }

    /// Set the size substituted for zero-sized axes.
    pub fn fallback(mut self, fallback: Size) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self::new()
    }
}
