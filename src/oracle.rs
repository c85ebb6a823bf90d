//! Size oracle contract and geometry snapshots.
//!
//! The engine never measures cards. Callers supply a [`SizeOracle`] that
//! reports each card's current rendered size, and [`snapshot`] turns a
//! selection into the `CardGeometry` slice for one arrangement call. This
//! is the boundary where unmeasured or invalid sizes are replaced by
//! defaults; past it, the strategies trust the numbers they get.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{MIN_CARD_HEIGHT, NOMINAL_CARD_WIDTH};
use crate::geometry::{CardGeometry, Size};

/// Reports the current rendered size of a card.
///
/// `None` means the card cannot be measured right now (for instance it has
/// not been rendered yet). Implemented for closures `Fn(&C) -> Option<Size>`.
pub trait SizeOracle<C: ?Sized> {
    fn measure(&self, card: &C) -> Option<Size>;
}

impl<C: ?Sized, F: Fn(&C) -> Option<Size>> SizeOracle<C> for F {
    fn measure(&self, card: &C) -> Option<Size> {
        self(card)
    }
}

/// Measure every card in `cards` and build the geometry for one call.
///
/// Each item pairs a card id with the card. Per axis, a missing measurement,
/// a non-finite value or a non-positive value becomes the matching axis of
/// `fallback`. Order is preserved.
///
/// ```
/// use zenarrange::{Size, oracle::snapshot};
///
/// let heights = [("a", Some(90.0)), ("b", None)];
/// let geometry = snapshot(
///     heights.iter().map(|(id, h)| (*id, h)),
///     &|h: &Option<f64>| h.map(|h| Size::new(300.0, h)),
///     Size::new(300.0, 140.0),
/// );
/// assert_eq!(geometry[0].height, 90.0);
/// assert_eq!(geometry[1].height, 140.0);
/// ```
pub fn snapshot<'a, C, O, I, S>(cards: I, oracle: &O, fallback: Size) -> Vec<CardGeometry>
where
    C: ?Sized + 'a,
    O: SizeOracle<C> + ?Sized,
    I: IntoIterator<Item = (S, &'a C)>,
    S: Into<String>,
{
    cards
        .into_iter()
        .map(|(id, card)| {
            let size = oracle
                .measure(card)
                .unwrap_or(fallback)
                .or_fallback(fallback);
            CardGeometry::new(id, size.width, size.height)
        })
        .collect()
}

/// What the host knows about a card's rendered content.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CardMetrics {
    /// Text, annotation and other fixed-width cards.
    Text {
        /// Height of the wrapped text as measured off-screen, if available.
        text_height: Option<f64>,
        /// Vertical padding for this card type (header, margins).
        padding: f64,
    },
    /// Image cards.
    Image {
        /// Stored display size, if the card was resized by the user.
        display: Option<Size>,
        /// Pixel size of the underlying image.
        natural: Size,
    },
}

/// The host's standard measuring rules.
///
/// Text cards are `card_width` wide and at least `min_height` tall. Image
/// cards use their stored display size, or their natural size scaled down
/// (never up) to `card_width` with the aspect ratio kept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StandardOracle {
    pub card_width: f64,
    pub min_height: f64,
}

impl StandardOracle {
    pub const fn new() -> Self {
        Self {
            card_width: NOMINAL_CARD_WIDTH,
            min_height: MIN_CARD_HEIGHT,
        }
    }

    /// Size to substitute when a card can't be measured.
    pub const fn fallback(&self) -> Size {
        Size::new(self.card_width, self.min_height)
    }
}

impl Default for StandardOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeOracle<CardMetrics> for StandardOracle {
    fn measure(&self, card: &CardMetrics) -> Option<Size> {
        match *card {
            CardMetrics::Text {
                text_height,
                padding,
            } => {
                let height = match text_height {
                    Some(h) if h.is_finite() => (h + padding).max(self.min_height),
                    _ => self.min_height,
                };
                Some(Size::new(self.card_width, height))
            }
            CardMetrics::Image { display, natural } => match display {
                Some(d) if d.is_valid() => Some(d),
                _ if natural.is_valid() => Some(fit_width(natural, self.card_width)),
                _ => None,
            },
        }
    }
}

/// Scale `natural` down to `max_width`, keeping the aspect ratio. Sizes that
/// already fit are returned unchanged.
fn fit_width(natural: Size, max_width: f64) -> Size {
    if natural.width <= max_width {
        return natural;
    }
    Size::new(max_width, natural.height * max_width / natural.width)
}
