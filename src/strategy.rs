//! Strategy selector and its stable string keys.

use core::fmt;
use core::str::FromStr;

/// Which layout to compute.
///
/// The string keys ([`key`](Self::key)) are stable: keyboard shortcut and
/// command palette layers dispatch by them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Single column, centre-aligned on the anchor.
    #[cfg_attr(feature = "serde", serde(rename = "vertical"))]
    Vertical,
    /// Single row, every card's centre on `anchor.y`.
    #[cfg_attr(feature = "serde", serde(rename = "horizontal"))]
    Horizontal,
    /// Square-ish grid with a uniform cell pitch, centred on the anchor.
    #[cfg_attr(feature = "serde", serde(rename = "grid"))]
    Grid,
    /// Up to six columns filled in contiguous blocks, packed by height.
    #[cfg_attr(feature = "serde", serde(rename = "grid-v"))]
    GridVerticalColumns,
    /// Up to six columns filled row by row, rows as tall as their tallest card.
    #[cfg_attr(feature = "serde", serde(rename = "grid-h"))]
    GridHorizontalPacked,
    /// Kanban-style columns where each card covers all but the header of
    /// the card below it.
    #[cfg_attr(feature = "serde", serde(rename = "grid-top"))]
    GridTopAlignedOverlap,
    /// Small ring around the anchor.
    #[cfg_attr(feature = "serde", serde(rename = "cluster"))]
    Cluster,
}

impl Strategy {
    /// Every strategy, in key-table order.
    pub const ALL: [Self; 7] = [
        Self::Vertical,
        Self::Horizontal,
        Self::Grid,
        Self::GridVerticalColumns,
        Self::GridHorizontalPacked,
        Self::GridTopAlignedOverlap,
        Self::Cluster,
    ];

    /// Stable dispatch key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Grid => "grid",
            Self::GridVerticalColumns => "grid-v",
            Self::GridHorizontalPacked => "grid-h",
            Self::GridTopAlignedOverlap => "grid-top",
            Self::Cluster => "cluster",
        }
    }

    /// Look up a strategy by key. Surrounding whitespace and ASCII case are
    /// ignored.
    pub fn from_key(key: &str) -> Result<Self, ArrangeError> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.key().eq_ignore_ascii_case(key))
            .ok_or(ArrangeError::UnknownStrategy)
    }

    /// Whether the strategy overlaps cards at any card size.
    ///
    /// [`GridTopAlignedOverlap`](Self::GridTopAlignedOverlap) does so on
    /// purpose and [`Cluster`](Self::Cluster) whenever cards are larger than
    /// its radius. The others keep cards apart only while the pitch fits the
    /// cards: [`Grid`](Self::Grid) on a fixed pitch such as `GridPitch::TOOL`
    /// (180px) overlaps standard 300px cards, and the bounded grids overlap
    /// a card wider than `column_pitch` or `row_pitch`.
    pub const fn allows_overlap(self) -> bool {
        matches!(self, Self::GridTopAlignedOverlap | Self::Cluster)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strategy {
    type Err = ArrangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// Arrangement dispatch error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrangeError {
    /// The key does not name any [`Strategy`].
    UnknownStrategy,
}

impl fmt::Display for ArrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy => f.write_str(
                "unknown arrangement strategy (expected one of: vertical, horizontal, grid, grid-v, grid-h, grid-top, cluster)",
            ),
        }
    }
}

impl core::error::Error for ArrangeError {}
