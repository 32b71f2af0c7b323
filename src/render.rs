//! Painting a [`LayoutResult`] onto a Floem paint context.
//!
//! Border styles reduce to rings of edges, each with a top-left and a
//! bottom-right shade. [`border_edges`] computes them without a renderer;
//! [`paint`] strokes them.

use floem::context::PaintCx;
use floem::kurbo::{Line, Point, Rect, RoundedRect, Shape, Stroke};
use floem::peniko::Gradient;
use floem_renderer::Renderer;

use crate::appearance::{Appearance, BorderStyle, Orientation};
use crate::color::Rgba;
use crate::constants::{CONTROL_DARK, CONTROL_DARK_DARK, CONTROL_LIGHT, CONTROL_LIGHT_LIGHT};
use crate::layout::{LayoutResult, TickLabel};
use crate::text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dashed,
    Dotted,
}

impl Dash {
    fn stroke(self) -> Stroke {
        let stroke = Stroke::new(1.0);
        match self {
            Dash::Solid => stroke,
            Dash::Dashed => stroke.with_dashes(0.0, [3.0, 1.0]),
            Dash::Dotted => stroke.with_dashes(0.0, [1.0, 1.0]),
        }
    }
}

/// One 1px ring of a border, `inset` pixels inside the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeRing {
    pub inset: f64,
    pub top_left: Rgba,
    pub bottom_right: Rgba,
    pub dash: Dash,
}

impl EdgeRing {
    fn new(inset: f64, top_left: Rgba, bottom_right: Rgba) -> Self {
        Self {
            inset,
            top_left,
            bottom_right,
            dash: Dash::Solid,
        }
    }

    fn flat(color: Rgba, dash: Dash) -> Self {
        Self {
            dash,
            ..Self::new(0.0, color, color)
        }
    }

    /// Edges centred on pixel rows: (top-left pair, bottom-right pair).
    pub fn lines(&self, bounds: Rect) -> ([Line; 2], [Line; 2]) {
        let x0 = bounds.x0 + self.inset + 0.5;
        let y0 = bounds.y0 + self.inset + 0.5;
        let x1 = bounds.x1 - self.inset - 0.5;
        let y1 = bounds.y1 - self.inset - 0.5;
        (
            [Line::new((x0, y0), (x1, y0)), Line::new((x0, y0), (x0, y1))],
            [Line::new((x0, y1), (x1, y1)), Line::new((x1, y0), (x1, y1))],
        )
    }
}

const RAISED_OUTER: (Rgba, Rgba) = (CONTROL_LIGHT, CONTROL_DARK_DARK);
const RAISED_INNER: (Rgba, Rgba) = (CONTROL_LIGHT_LIGHT, CONTROL_DARK);
const SUNKEN_OUTER: (Rgba, Rgba) = (CONTROL_DARK, CONTROL_LIGHT_LIGHT);
const SUNKEN_INNER: (Rgba, Rgba) = (CONTROL_DARK_DARK, CONTROL_LIGHT);

/// Rings for `style`, outermost first. `Adjust` carries no edges.
pub fn border_edges(style: BorderStyle, color: Rgba) -> Vec<EdgeRing> {
    let ring = |inset: f64, (top_left, bottom_right): (Rgba, Rgba)| {
        EdgeRing::new(inset, top_left, bottom_right)
    };
    match style {
        BorderStyle::None | BorderStyle::Adjust => Vec::new(),
        BorderStyle::Solid => vec![EdgeRing::flat(color, Dash::Solid)],
        BorderStyle::Dashed => vec![EdgeRing::flat(color, Dash::Dashed)],
        BorderStyle::Dotted => vec![EdgeRing::flat(color, Dash::Dotted)],
        BorderStyle::Inset => vec![ring(0.0, (color.darken(0.5), color.lighten(0.5)))],
        BorderStyle::Outset => vec![ring(0.0, (color.lighten(0.5), color.darken(0.5)))],
        BorderStyle::Flat => vec![EdgeRing::flat(CONTROL_DARK, Dash::Solid)],
        BorderStyle::RaisedOuter => vec![ring(0.0, RAISED_OUTER)],
        BorderStyle::RaisedInner => vec![ring(0.0, RAISED_INNER)],
        BorderStyle::SunkenOuter => vec![ring(0.0, SUNKEN_OUTER)],
        BorderStyle::SunkenInner => vec![ring(0.0, SUNKEN_INNER)],
        BorderStyle::Raised => vec![ring(0.0, RAISED_OUTER), ring(1.0, RAISED_INNER)],
        BorderStyle::Sunken => vec![ring(0.0, SUNKEN_OUTER), ring(1.0, SUNKEN_INNER)],
        BorderStyle::Etched => vec![ring(0.0, SUNKEN_OUTER), ring(1.0, RAISED_INNER)],
        BorderStyle::Bump => vec![ring(0.0, RAISED_OUTER), ring(1.0, SUNKEN_INNER)],
    }
}

/// Capsule with fully rounded ends.
fn pill(rect: Rect) -> RoundedRect {
    rect.to_rounded_rect(rect.width().min(rect.height()) * 0.5)
}

/// Paint every layer of the track bar.
pub fn paint(cx: &mut PaintCx, layout: &LayoutResult, appearance: &Appearance, focused: bool) {
    if !appearance.background.is_transparent() {
        cx.fill(&layout.bounds, appearance.background.to_color(), 0.0);
    }

    let Some(tracker) = layout.tracker else {
        paint_border(cx, layout.bounds, appearance);
        return;
    };

    let tick_stroke = Stroke::new(1.0);
    let tick_color = appearance.tick_color.to_color();
    for line in layout.leading_ticks.iter().chain(&layout.trailing_ticks) {
        cx.stroke(line, tick_color, &tick_stroke);
    }
    for label in layout.leading_labels.iter().chain(&layout.trailing_labels) {
        paint_label(cx, label, appearance);
    }

    if let Some(track_line) = layout.track_line {
        let color = appearance.track_line_color.to_color();
        cx.fill(&pill(track_line), color, 0.0);
    }
    paint_tracker(cx, tracker, appearance);

    paint_border(cx, layout.bounds, appearance);

    if focused {
        let ring = EdgeRing::flat(Rgba::BLACK, Dash::Dotted);
        let stroke = ring.dash.stroke();
        let (top_left, bottom_right) = ring.lines(layout.focus);
        for line in top_left.iter().chain(&bottom_right) {
            cx.stroke(line, ring.top_left.to_color(), &stroke);
        }
    }
}

fn paint_label(cx: &mut PaintCx, label: &TickLabel, appearance: &Appearance) {
    let text_layout = text::label_layout(&label.text, appearance.font_size, appearance.fore_color);
    let size = text_layout.size();
    let origin = Point::new(
        label.anchor.x - size.width * 0.5,
        label.anchor.y - size.height * 0.5,
    );
    cx.draw_text(&text_layout, origin);
}

/// Glossy capsule: light toward the leading cross edge, base color at the far one.
fn paint_tracker(cx: &mut PaintCx, tracker: Rect, appearance: &Appearance) {
    let base = appearance.tracker_color;
    let shape = pill(tracker);
    let (start, end) = match appearance.orientation {
        Orientation::Horizontal => (
            Point::new(tracker.center().x, tracker.y0),
            Point::new(tracker.center().x, tracker.y1),
        ),
        Orientation::Vertical => (
            Point::new(tracker.x0, tracker.center().y),
            Point::new(tracker.x1, tracker.center().y),
        ),
    };
    let gradient = Gradient::new_linear(start, end)
        .with_stops([base.lighten(0.45).to_color(), base.to_color()]);
    // vello's rect fast path only handles solid colors
    let path = shape.to_path(0.1);
    cx.fill(&path, &gradient, 0.0);
    cx.stroke(&shape, base.darken(0.25).to_color(), &Stroke::new(1.0));
}

fn paint_border(cx: &mut PaintCx, bounds: Rect, appearance: &Appearance) {
    for ring in border_edges(appearance.border_style, appearance.border_color) {
        let stroke = ring.dash.stroke();
        let (top_left, bottom_right) = ring.lines(bounds);
        for line in &top_left {
            cx.stroke(line, ring.top_left.to_color(), &stroke);
        }
        for line in &bottom_right {
            cx.stroke(line, ring.bottom_right.to_color(), &stroke);
        }
    }
}
