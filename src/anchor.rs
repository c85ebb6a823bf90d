//! Anchor resolution: where an arrangement is centred.
//!
//! Pointer-driven invocations anchor on the last pointer position. Keyboard
//! invocations with no recent pointer activity fall back to the centre of
//! the visible board area.

use crate::geometry::{Point, Rect};

/// The visible part of the board.
///
/// `width`/`height` are the screen size of the view in pixels. `pan` is the
/// screen position of the board origin and `zoom` the screen pixels per
/// board pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pan: Point,
    pub zoom: f64,
}

impl Viewport {
    /// Unpanned, unzoomed view of the given screen size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pan: Point::ORIGIN,
            zoom: 1.0,
        }
    }

    pub fn pan(mut self, pan: Point) -> Self {
        self.pan = pan;
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Zoom actually applied; anything non-finite or non-positive counts as 1.
    fn effective_zoom(&self) -> f64 {
        if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            1.0
        }
    }

    /// Convert a screen position to board coordinates.
    pub fn screen_to_board(&self, screen: Point) -> Point {
        let zoom = self.effective_zoom();
        Point::new((screen.x - self.pan.x) / zoom, (screen.y - self.pan.y) / zoom)
    }

    /// Convert a board position to screen coordinates.
    pub fn board_to_screen(&self, board: Point) -> Point {
        let zoom = self.effective_zoom();
        Point::new(board.x * zoom + self.pan.x, board.y * zoom + self.pan.y)
    }

    /// Visible board area.
    pub fn visible_board(&self) -> Rect {
        let zoom = self.effective_zoom();
        let origin = self.screen_to_board(Point::ORIGIN);
        Rect::new(origin.x, origin.y, self.width / zoom, self.height / zoom)
    }

    /// Centre of the view in board coordinates.
    pub fn center(&self) -> Point {
        self.screen_to_board(Point::new(self.width / 2.0, self.height / 2.0))
    }
}

/// Pick the anchor for an arrangement: the pointer (in board coordinates)
/// when there is one, otherwise the viewport centre.
pub fn resolve_anchor(pointer: Option<Point>, viewport: &Viewport) -> Point {
    pointer.unwrap_or_else(|| viewport.center())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_viewport_center() {
        let v = Viewport::new(800.0, 600.0);
        assert_eq!(v.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn panned_and_zoomed_center() {
        let v = Viewport::new(800.0, 600.0)
            .pan(Point::new(-200.0, 100.0))
            .zoom(2.0);
        // Screen centre (400, 300) → ((400 + 200) / 2, (300 - 100) / 2)
        assert_eq!(v.center(), Point::new(300.0, 100.0));
    }

    #[test]
    fn screen_board_inverse() {
        let v = Viewport::new(800.0, 600.0)
            .pan(Point::new(30.0, -40.0))
            .zoom(0.5);
        let board = Point::new(123.0, -456.0);
        assert_eq!(v.screen_to_board(v.board_to_screen(board)), board);
    }

    #[test]
    fn bad_zoom_treated_as_one() {
        let v = Viewport::new(100.0, 100.0).zoom(0.0);
        assert_eq!(v.center(), Point::new(50.0, 50.0));
        let v = Viewport::new(100.0, 100.0).zoom(f64::NAN);
        assert_eq!(v.visible_board(), Rect::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn visible_board_area() {
        let v = Viewport::new(800.0, 600.0)
            .pan(Point::new(100.0, 100.0))
            .zoom(2.0);
        assert_eq!(v.visible_board(), Rect::new(-50.0, -50.0, 400.0, 300.0));
        assert_eq!(v.visible_board().center(), v.center());
    }

    #[test]
    fn pointer_wins_over_viewport() {
        let v = Viewport::new(800.0, 600.0);
        assert_eq!(
            resolve_anchor(Some(Point::new(5.0, 6.0)), &v),
            Point::new(5.0, 6.0)
        );
        assert_eq!(resolve_anchor(None, &v), Point::new(400.0, 300.0));
    }
}
