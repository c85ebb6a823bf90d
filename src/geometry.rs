//! Geometry primitives shared by every arrangement strategy.
//!
//! Board coordinates are `f64` pixels with `y` growing downward. Cards are
//! positioned by the **centre** of their bounding box; [`Rect`] is the
//! top-left based box used for bounds and overlap checks.

use alloc::string::String;

/// A point in board coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The board origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f64 {
        num_traits::Float::hypot(self.x - other.x, self.y - other.y)
    }
}

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both axes are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        valid_extent(self.width) && valid_extent(self.height)
    }

    /// Replace each invalid axis (non-finite or non-positive) with the
    /// matching axis of `fallback`.
    pub fn or_fallback(self, fallback: Size) -> Self {
        Self {
            width: if valid_extent(self.width) {
                self.width
            } else {
                fallback.width
            },
            height: if valid_extent(self.height) {
                self.height
            } else {
                fallback.height
            },
        }
    }
}

fn valid_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of `size` centred on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            x: center.x - size.width / 2.0,
            y: center.y - size.height / 2.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest rect containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Signed vertical overlap with `below`: positive when the two boxes
    /// share rows, negative for the gap between them.
    pub fn vertical_overlap(&self, below: &Rect) -> f64 {
        self.bottom() - below.y
    }

    /// Signed horizontal overlap with `right`, same convention as
    /// [`vertical_overlap`](Self::vertical_overlap).
    pub fn horizontal_overlap(&self, right: &Rect) -> f64 {
        self.right() - right.x
    }

    /// Whether the interiors of the two rects intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The narrow view of a card the engine works on.
///
/// Built fresh by the caller right before each arrangement call, usually
/// through [`oracle::snapshot`](crate::oracle::snapshot). `id` must be unique
/// within one call; duplicates are not detected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardGeometry {
    pub id: String,
    /// Rendered width in pixels.
    pub width: f64,
    /// Rendered height in pixels.
    pub height: f64,
}

impl CardGeometry {
    /// Create a card geometry record.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size used by the strategies: an axis of exactly `0.0` takes the
    /// matching axis of `fallback`. Everything else passes through untouched,
    /// including NaN and infinities.
    pub fn effective_size(&self, fallback: Size) -> Size {
        Size {
            width: if self.width == 0.0 {
                fallback.width
            } else {
                self.width
            },
            height: if self.height == 0.0 {
                fallback.height
            } else {
                self.height
            },
        }
    }

    /// Box this card occupies when centred at `position`, sized the way
    /// the strategies size it (see [`effective_size`](Self::effective_size)).
    pub fn bounds_at(&self, position: &Position, fallback: Size) -> Rect {
        Rect::centered(position.center(), self.effective_size(fallback))
    }
}

/// Engine output: the new centre of one card.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub id: String,
    /// Centre x in board coordinates.
    pub x: f64,
    /// Centre y in board coordinates.
    pub y: f64,
}

impl Position {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Top-left corner for a card of `size`, for sinks that position by
    /// corner instead of centre.
    pub fn top_left(&self, size: Size) -> Point {
        Point::new(self.x - size.width / 2.0, self.y - size.height / 2.0)
    }
}

/// Bounding box around every card at its computed position.
///
/// Pairs `cards` and `positions` by index. Zero axes take `fallback`, as in
/// the strategies. Returns `None` when either is empty.
pub fn bounding_box(
    cards: &[CardGeometry],
    positions: &[Position],
    fallback: Size,
) -> Option<Rect> {
    cards
        .iter()
        .zip(positions)
        .map(|(card, pos)| card.bounds_at(pos, fallback))
        .reduce(|acc, r| acc.union(&r))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::vec;

    pub(crate) const FALLBACK: Size = Size::new(300.0, 140.0);

    // ── Size ────────────────────────────────────────────────────────────

    #[test]
    fn size_fallback_per_axis() {
        let fallback = Size::new(300.0, 140.0);
        assert_eq!(
            Size::new(0.0, 90.0).or_fallback(fallback),
            Size::new(300.0, 90.0)
        );
        assert_eq!(
            Size::new(120.0, f64::NAN).or_fallback(fallback),
            Size::new(120.0, 140.0)
        );
        assert_eq!(
            Size::new(-5.0, f64::INFINITY).or_fallback(fallback),
            fallback
        );
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(1.0, 1.0).is_valid());
        assert!(!Size::new(0.0, 1.0).is_valid());
        assert!(!Size::new(1.0, f64::NAN).is_valid());
    }

    // ── Rect ────────────────────────────────────────────────────────────

    #[test]
    fn centered_rect() {
        let r = Rect::centered(Point::new(100.0, 50.0), Size::new(40.0, 20.0));
        assert_eq!(r, Rect::new(80.0, 40.0, 40.0, 20.0));
        assert_eq!(r.center(), Point::new(100.0, 50.0));
    }

    #[test]
    fn union_covers_both() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, -5.0, 5.0, 5.0);
        assert_eq!(a.union(&b), Rect::new(0.0, -5.0, 25.0, 15.0));
    }

    #[test]
    fn overlap_is_signed() {
        let top = Rect::new(0.0, 0.0, 10.0, 100.0);
        let overlapping = Rect::new(0.0, 70.0, 10.0, 10.0);
        let apart = Rect::new(0.0, 160.0, 10.0, 10.0);
        assert_eq!(top.vertical_overlap(&overlapping), 30.0);
        assert_eq!(top.vertical_overlap(&apart), -60.0);
        assert!(top.intersects(&overlapping));
        assert!(!top.intersects(&apart));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert_eq!(a.horizontal_overlap(&b), 0.0);
    }

    // ── CardGeometry ────────────────────────────────────────────────────

    #[test]
    fn effective_size_only_replaces_zero() {
        let fallback = Size::new(300.0, 140.0);
        let zero_w = CardGeometry::new("a", 0.0, 80.0);
        assert_eq!(zero_w.effective_size(fallback), Size::new(300.0, 80.0));

        let nan = CardGeometry::new("b", f64::NAN, 80.0);
        assert!(nan.effective_size(fallback).width.is_nan());
    }

    #[test]
    fn bounds_at_position() {
        let card = CardGeometry::new("a", 200.0, 100.0);
        let r = card.bounds_at(&Position::new("a", 0.0, -100.0), FALLBACK);
        assert_eq!(r, Rect::new(-100.0, -150.0, 200.0, 100.0));
    }

    #[test]
    fn bounds_at_zero_height_uses_fallback() {
        let card = CardGeometry::new("a", 200.0, 0.0);
        let r = card.bounds_at(&Position::new("a", 0.0, 0.0), FALLBACK);
        assert_eq!(r, Rect::new(-100.0, -70.0, 200.0, 140.0));
    }

    #[test]
    fn position_top_left() {
        let p = Position::new("a", 50.0, 50.0);
        assert_eq!(p.top_left(Size::new(20.0, 10.0)), Point::new(40.0, 45.0));
    }

    #[test]
    fn bounding_box_of_arrangement() {
        let cards = vec![
            CardGeometry::new("a", 10.0, 10.0),
            CardGeometry::new("b", 20.0, 20.0),
        ];
        let positions = vec![Position::new("a", 0.0, 0.0), Position::new("b", 20.0, 0.0)];
        assert_eq!(
            bounding_box(&cards, &positions, FALLBACK),
            Some(Rect::new(-5.0, -10.0, 35.0, 20.0))
        );
        assert_eq!(bounding_box(&[], &[], FALLBACK), None);
    }

    #[test]
    fn point_distance() {
        assert_eq!(Point::new(3.0, 4.0).distance(Point::ORIGIN), 5.0);
    }
}
