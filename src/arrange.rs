//! Strategy functions and dispatch.
//!
//! Every function here is pure: the output depends only on the arguments,
//! comes back in input order, and nothing is cached between calls. Card
//! sizes go through [`CardGeometry::effective_size`] first, so a zero axis
//! takes the configured fallback while NaN and infinities propagate.
//!
//! # Example
//!
//! ```
//! use zenarrange::{arrange, CardGeometry, Point, Strategy};
//!
//! let cards = [
//!     CardGeometry::new("a", 200.0, 100.0),
//!     CardGeometry::new("b", 200.0, 140.0),
//! ];
//! let positions = arrange(Strategy::Vertical, &cards, Point::new(0.0, 0.0));
//!
//! // 100 + 60 + 140 = 300 tall, so the stack starts at y = -150.
//! assert_eq!((positions[0].x, positions[0].y), (0.0, -100.0));
//! assert_eq!((positions[1].x, positions[1].y), (0.0, 80.0));
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use num_traits::Float;
use whereat::{At, at};

use crate::config::{ArrangeConfig, GridPitch};
use crate::geometry::{CardGeometry, Point, Position, Size};
use crate::strategy::{ArrangeError, Strategy};

/// Receives a finished arrangement.
///
/// The whole batch arrives in one call so the host can apply it as a single
/// visual update. Implemented for closures taking `&[Position]`.
pub trait PositionSink {
    fn apply(&mut self, positions: &[Position]);
}

impl<F: FnMut(&[Position])> PositionSink for F {
    fn apply(&mut self, positions: &[Position]) {
        self(positions)
    }
}

/// Arrange `cards` around `anchor` with the default constants.
pub fn arrange(strategy: Strategy, cards: &[CardGeometry], anchor: Point) -> Vec<Position> {
    ArrangeConfig::new().arrange(strategy, cards, anchor)
}

/// Arrange by stable key (`"vertical"`, `"grid-v"`, ...).
pub fn arrange_by_key(
    key: &str,
    cards: &[CardGeometry],
    anchor: Point,
    config: &ArrangeConfig,
) -> Result<Vec<Position>, At<ArrangeError>> {
    let strategy = Strategy::from_key(key).map_err(|e| at!(e))?;
    Ok(config.arrange(strategy, cards, anchor))
}

impl ArrangeConfig {
    /// Compute one position per card using `strategy`.
    ///
    /// An empty slice yields an empty vector.
    pub fn arrange(
        &self,
        strategy: Strategy,
        cards: &[CardGeometry],
        anchor: Point,
    ) -> Vec<Position> {
        if cards.is_empty() {
            #[cfg(feature = "log")]
            log::trace!("arrange {strategy}: no cards, nothing to do");
            return Vec::new();
        }
        #[cfg(feature = "log")]
        log::debug!(
            "arrange {strategy}: {} cards around ({}, {})",
            cards.len(),
            anchor.x,
            anchor.y
        );
        match strategy {
            Strategy::Vertical => vertical(cards, anchor, self),
            Strategy::Horizontal => horizontal(cards, anchor, self),
            Strategy::Grid => grid(cards, anchor, self),
            Strategy::GridVerticalColumns => grid_vertical_columns(cards, anchor, self),
            Strategy::GridHorizontalPacked => grid_horizontal_packed(cards, anchor, self),
            Strategy::GridTopAlignedOverlap => grid_top_aligned_overlap(cards, anchor, self),
            Strategy::Cluster => cluster(cards, anchor, self),
        }
    }

    /// Arrange and hand the result to `sink`.
    ///
    /// The sink is not called for an empty selection. Returns the number of
    /// positions applied.
    pub fn arrange_into<S: PositionSink + ?Sized>(
        &self,
        strategy: Strategy,
        cards: &[CardGeometry],
        anchor: Point,
        sink: &mut S,
    ) -> usize {
        let positions = self.arrange(strategy, cards, anchor);
        if !positions.is_empty() {
            sink.apply(&positions);
        }
        positions.len()
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Single column centred on `anchor`, cards `config.gap` apart edge to edge.
pub fn vertical(cards: &[CardGeometry], anchor: Point, config: &ArrangeConfig) -> Vec<Position> {
    let sizes = effective_sizes(cards, config);
    let total = sizes.iter().map(|s| s.height).sum::<f64>() + config.gap * gaps(cards.len());
    let mut top = anchor.y - total / 2.0;
    cards
        .iter()
        .zip(sizes)
        .map(|(card, size)| {
            let y = top + size.height / 2.0;
            top += size.height + config.gap;
            Position::new(card.id.clone(), anchor.x, y)
        })
        .collect()
}

/// Single row centred on `anchor.x`; every centre sits on `anchor.y`.
pub fn horizontal(cards: &[CardGeometry], anchor: Point, config: &ArrangeConfig) -> Vec<Position> {
    let sizes = effective_sizes(cards, config);
    let total = sizes.iter().map(|s| s.width).sum::<f64>() + config.gap * gaps(cards.len());
    let mut left = anchor.x - total / 2.0;
    cards
        .iter()
        .zip(sizes)
        .map(|(card, size)| {
            let x = left + size.width / 2.0;
            left += size.width + config.gap;
            Position::new(card.id.clone(), x, anchor.y)
        })
        .collect()
}

/// `ceil(sqrt(n))` columns, row-major, uniform pitch, centred on `anchor`.
pub fn grid(cards: &[CardGeometry], anchor: Point, config: &ArrangeConfig) -> Vec<Position> {
    let n = cards.len();
    let cols = ceil_sqrt(n);
    let rows = n.div_ceil(cols);
    let (pitch_x, pitch_y) = match config.grid_pitch {
        GridPitch::Fixed(pitch) => (pitch, pitch),
        GridPitch::ContentAware { spacing } => {
            let largest = largest_size(&effective_sizes(cards, config));
            (largest.width + spacing, largest.height + spacing)
        }
    };
    let x0 = centered_start(anchor.x, cols, pitch_x);
    let y0 = centered_start(anchor.y, rows, pitch_y);
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let (row, col) = (i / cols, i % cols);
            Position::new(
                card.id.clone(),
                x0 + col as f64 * pitch_x,
                y0 + row as f64 * pitch_y,
            )
        })
        .collect()
}

/// Up to `max_columns` columns, each taking a contiguous run of cards.
///
/// Columns share the top line `anchor.y`; inside a column each card starts
/// `config.column_gap` below the previous card's bottom edge.
pub fn grid_vertical_columns(
    cards: &[CardGeometry],
    anchor: Point,
    config: &ArrangeConfig,
) -> Vec<Position> {
    let n = cards.len();
    let cols = bounded_columns(n, config);
    let per_col = n.div_ceil(cols);
    let x0 = centered_start(anchor.x, cols, config.column_pitch);
    let mut tops = vec![anchor.y; cols];
    cards
        .iter()
        .zip(effective_sizes(cards, config))
        .enumerate()
        .map(|(i, (card, size))| {
            let col = i / per_col;
            let top = tops[col];
            tops[col] = top + size.height + config.column_gap;
            Position::new(
                card.id.clone(),
                x0 + col as f64 * config.column_pitch,
                top + size.height / 2.0,
            )
        })
        .collect()
}

/// Up to `max_columns` columns filled row by row.
///
/// Each row is as tall as its tallest card, rows are `config.row_padding`
/// apart, and the first row's top edge is `anchor.y`. Cards are top-aligned
/// within their row.
pub fn grid_horizontal_packed(
    cards: &[CardGeometry],
    anchor: Point,
    config: &ArrangeConfig,
) -> Vec<Position> {
    let n = cards.len();
    let cols = bounded_columns(n, config);
    let rows = n.div_ceil(cols);
    let sizes = effective_sizes(cards, config);

    let mut row_heights = vec![0.0_f64; rows];
    for (i, size) in sizes.iter().enumerate() {
        let h = &mut row_heights[i / cols];
        *h = max_or_nan(*h, size.height);
    }
    let mut row_tops = Vec::with_capacity(rows);
    let mut top = anchor.y;
    for height in &row_heights {
        row_tops.push(top);
        top += height + config.row_padding;
    }

    let x0 = centered_start(anchor.x, cols, config.row_pitch);
    cards
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(i, (card, size))| {
            let (row, col) = (i / cols, i % cols);
            Position::new(
                card.id.clone(),
                x0 + col as f64 * config.row_pitch,
                row_tops[row] + size.height / 2.0,
            )
        })
        .collect()
}

/// Kanban-style overlapping columns.
///
/// `min(max_columns, n)` columns, cell `index = row * cols + col`. Card tops
/// in a column are `config.overlap_top_pitch` apart whatever the card
/// heights, so a card taller than the pitch covers the next one by
/// `height - pitch` and leaves only its header visible. The first row's top
/// edge is `anchor.y`.
pub fn grid_top_aligned_overlap(
    cards: &[CardGeometry],
    anchor: Point,
    config: &ArrangeConfig,
) -> Vec<Position> {
    let n = cards.len();
    let cols = n.min(config.max_columns.max(1));
    let sizes = effective_sizes(cards, config);
    let pitch_x = largest_size(&sizes).width * config.overlap_width_factor;
    let x0 = centered_start(anchor.x, cols, pitch_x);
    cards
        .iter()
        .zip(sizes)
        .enumerate()
        .map(|(i, (card, size))| {
            let (row, col) = (i / cols, i % cols);
            let top = anchor.y + row as f64 * config.overlap_top_pitch;
            Position::new(
                card.id.clone(),
                x0 + col as f64 * pitch_x,
                top + size.height / 2.0,
            )
        })
        .collect()
}

/// Ring of radius `config.cluster_radius`, card `i` at angle `i / n · 2π`.
pub fn cluster(cards: &[CardGeometry], anchor: Point, config: &ArrangeConfig) -> Vec<Position> {
    let n = cards.len() as f64;
    let r = config.cluster_radius;
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let angle = i as f64 / n * TAU;
            Position::new(
                card.id.clone(),
                anchor.x + r * Float::cos(angle),
                anchor.y + r * Float::sin(angle),
            )
        })
        .collect()
}

// ============================================================================
// Internal helpers
// ============================================================================

fn effective_sizes(cards: &[CardGeometry], config: &ArrangeConfig) -> Vec<Size> {
    cards
        .iter()
        .map(|c| c.effective_size(config.fallback))
        .collect()
}

/// Number of gaps between `n` cards, as a float.
fn gaps(n: usize) -> f64 {
    n.saturating_sub(1) as f64
}

fn ceil_sqrt(n: usize) -> usize {
    (Float::ceil(Float::sqrt(n as f64)) as usize).max(1)
}

fn bounded_columns(n: usize, config: &ArrangeConfig) -> usize {
    ceil_sqrt(n).min(config.max_columns.max(1))
}

/// First cell centre of `count` cells `pitch` apart, centred on `center`.
fn centered_start(center: f64, count: usize, pitch: f64) -> f64 {
    center - gaps(count) * pitch / 2.0
}

fn largest_size(sizes: &[Size]) -> Size {
    sizes.iter().fold(Size::new(0.0, 0.0), |acc, s| {
        Size::new(
            max_or_nan(acc.width, s.width),
            max_or_nan(acc.height, s.height),
        )
    })
}

/// `f64::max`, except that NaN wins.
fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}
