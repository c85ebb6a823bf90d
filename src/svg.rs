//! SVG visualization of arrangements.
//!
//! Renders each card's box at its computed centre, labelled with its id,
//! plus a cross-hair at the anchor. Cards whose boxes intersect another
//! card are drawn in a separate style so intended overlap
//! (`grid-top`) is easy to tell apart from accidental overlap.
//!
//! # Example
//!
//! ```
//! use zenarrange::{arrange, ArrangeConfig, CardGeometry, Point, Strategy};
//! use zenarrange::svg::render_arrangement_svg;
//!
//! let cards = [CardGeometry::new("a", 300.0, 140.0), CardGeometry::new("b", 300.0, 200.0)];
//! let anchor = Point::new(0.0, 0.0);
//! let positions = arrange(Strategy::Vertical, &cards, anchor);
//!
//! let svg = render_arrangement_svg(&cards, &positions, anchor, &ArrangeConfig::new());
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::config::ArrangeConfig;
use crate::geometry::{CardGeometry, Point, Position, Rect, Size, bounding_box};
use crate::strategy::Strategy;

/// Maximum pixel width of one panel.
const MAX_PANEL_W: f64 = 480.0;
/// Maximum pixel height of one panel.
const MAX_PANEL_H: f64 = 320.0;
/// Vertical gap between gallery panels.
const PANEL_GAP: f64 = 40.0;
/// Horizontal margin.
const MARGIN_X: f64 = 30.0;
/// Top and bottom margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of the label line above each panel.
const LABEL_H: f64 = 22.0;
/// Board-space padding kept around the arranged cards.
const BOARD_PAD: f64 = 40.0;
/// Half-length of the anchor cross-hair arms, in screen pixels.
const CROSS_ARM: f64 = 6.0;

/// One panel of the document.
struct Panel<'a> {
    label: String,
    cards: &'a [CardGeometry],
    positions: Vec<Position>,
    anchor: Point,
    fallback: Size,
}

/// Render one arrangement as a complete SVG document.
///
/// Pairs `cards` and `positions` by index. Zero-sized cards are drawn at
/// `config.fallback`, the size they were laid out with.
pub fn render_arrangement_svg(
    cards: &[CardGeometry],
    positions: &[Position],
    anchor: Point,
    config: &ArrangeConfig,
) -> String {
    let panel = Panel {
        label: format!("{} cards", positions.len().min(cards.len())),
        cards,
        positions: positions.to_vec(),
        anchor,
        fallback: config.fallback,
    };
    render_panels(&[panel])
}

/// Render every strategy for the same input, one labelled panel per
/// strategy, stacked top to bottom.
pub fn render_strategy_gallery_svg(
    cards: &[CardGeometry],
    anchor: Point,
    config: &ArrangeConfig,
) -> String {
    let panels: Vec<Panel<'_>> = Strategy::ALL
        .into_iter()
        .map(|strategy| Panel {
            label: format!("{strategy}  ({} cards)", cards.len()),
            cards,
            positions: config.arrange(strategy, cards, anchor),
            anchor,
            fallback: config.fallback,
        })
        .collect();
    render_panels(&panels)
}

/// Board area shown in a panel: every card plus the anchor, padded.
fn panel_bounds(panel: &Panel<'_>) -> Rect {
    let anchor_box = Rect::new(panel.anchor.x, panel.anchor.y, 0.0, 0.0);
    let content = bounding_box(panel.cards, &panel.positions, panel.fallback)
        .map_or(anchor_box, |b| b.union(&anchor_box));
    Rect::new(
        content.x - BOARD_PAD,
        content.y - BOARD_PAD,
        content.width + 2.0 * BOARD_PAD,
        content.height + 2.0 * BOARD_PAD,
    )
}

/// Scale a board area to fit within MAX_PANEL_W × MAX_PANEL_H.
/// Returns (panel width, panel height, scale).
fn scale_to_fit(area: &Rect) -> (f64, f64, f64) {
    let (w, h) = (area.width, area.height);
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return (MAX_PANEL_W, MAX_PANEL_H, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Indices of cards whose box intersects at least one other card's box.
fn overlapping(cards: &[CardGeometry], positions: &[Position], fallback: Size) -> Vec<bool> {
    let boxes: Vec<Rect> = cards
        .iter()
        .zip(positions)
        .map(|(c, p)| c.bounds_at(p, fallback))
        .collect();
    (0..boxes.len())
        .map(|i| {
            boxes
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && boxes[i].intersects(other))
        })
        .collect()
}

fn render_panels(panels: &[Panel<'_>]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = 2.0 * MARGIN_TOP
        + panels.len() as f64 * (LABEL_H + MAX_PANEL_H)
        + (panels.len() - 1) as f64 * PANEL_GAP;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .card-id { font-size: 10px; fill: #1d3f5e; }
  .board { fill: #f4f4f4; stroke: #999; stroke-width: 1; }
  .card { fill: #6ba3d6; fill-opacity: 0.75; stroke: #2c6faa; stroke-width: 1; }
  .card.overlap { fill: #e0a458; stroke: #a8651f; }
  .anchor { stroke: #c0392b; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .card-id { fill: #dbe9f6; }
    .board { fill: #2d2d2d; stroke: #555; }
    .card { fill: #3a72a4; stroke: #5a9fd4; }
    .card.overlap { fill: #8a5a22; stroke: #d08a3c; }
    .anchor { stroke: #ff6b5b; }
  }
</style>
"##,
    );

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let area = panel_bounds(panel);
        let (pw, ph, scale) = scale_to_fit(&area);
        let panel_x = center_x - pw / 2.0;
        let panel_y = y;
        let to_screen = |p: Point| {
            (
                panel_x + (p.x - area.x) * scale,
                panel_y + (p.y - area.y) * scale,
            )
        };

        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="board" rx="2"/>"#,
            panel_x, panel_y, pw, ph
        ));
        svg.push('\n');

        let overlaps = overlapping(panel.cards, &panel.positions, panel.fallback);
        for ((card, pos), overlap) in panel.cards.iter().zip(&panel.positions).zip(overlaps) {
            let b = card.bounds_at(pos, panel.fallback);
            let (x, y) = to_screen(Point::new(b.x, b.y));
            let class = if overlap { "card overlap" } else { "card" };
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}" rx="1"/>"#,
                x,
                y,
                b.width * scale,
                b.height * scale,
                class
            ));
            svg.push('\n');
            // Ids sit in the header strip so overlapping cards stay readable.
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" class="card-id">{}</text>"#,
                x + 3.0,
                y + 11.0,
                escape_xml(&card.id)
            ));
            svg.push('\n');
        }

        let (ax, ay) = to_screen(panel.anchor);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" class="anchor"/>"#,
            ax - CROSS_ARM,
            ay,
            ax + CROSS_ARM,
            ay
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" class="anchor"/>"#,
            ax,
            ay - CROSS_ARM,
            ax,
            ay + CROSS_ARM
        ));
        svg.push('\n');

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
