//! Layout engine: turns size, range, and appearance into drawable geometry.
//!
//! Bands are stacked across the value axis starting at the cross-axis
//! indent: leading labels, leading ticks, the tracker band, trailing ticks,
//! trailing labels. The tracker moves along the value axis inside the
//! working rectangle (the bounds minus the indent).

use floem::kurbo::{Line, Point, Rect, Size};

use crate::appearance::{Appearance, Orientation};
use crate::constants;
use crate::range::RangeState;

/// Text measurement supplied by the host toolkit.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size;
}

/// A label and the point its text is centred on.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    pub anchor: Point,
}

/// A tick position along the value axis and the value it marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStop {
    pub offset: f64,
    pub value: i32,
}

/// Geometry of one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub orientation: Orientation,
    pub bounds: Rect,
    pub working: Rect,
    /// `None` when the range is degenerate.
    pub tracker: Option<Rect>,
    pub track_line: Option<Rect>,
    pub leading_ticks: Vec<Line>,
    pub trailing_ticks: Vec<Line>,
    pub leading_labels: Vec<TickLabel>,
    pub trailing_labels: Vec<TickLabel>,
    pub focus: Rect,
    /// Size the widget wants across the value axis.
    pub fit_extent: f64,
}

impl LayoutResult {
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// True when `pos` lands on the tracker.
    pub fn hit_tracker(&self, pos: Point) -> bool {
        self.tracker.is_some_and(|r| r.contains(pos))
    }
}

/// Number of loop ticks before the explicit final tick.
///
/// When the span is an exact multiple of `frequency` the last loop tick
/// would coincide with the final tick, so it is dropped.
pub fn tick_count(span: i64, frequency: i32) -> i64 {
    let frequency = frequency.max(1) as i64;
    let mut count = span / frequency;
    if span % frequency == 0 {
        count -= 1;
    }
    count
}

/// Tick stops along a line running from `origin` to `far`.
///
/// `origin` marks `minimum`; the last stop always sits on `far` and marks
/// `maximum`. Stops packed tighter than one pixel are thinned to every
/// `k`-th one, which still covers the whole line. Empty for a degenerate
/// range.
pub fn tick_stops(origin: f64, far: f64, range: &RangeState, frequency: i32) -> Vec<TickStop> {
    let span = range.span();
    if span <= 0 {
        return Vec::new();
    }
    let frequency = frequency.max(1);
    let count = tick_count(span, frequency);
    let spacing = (far - origin) * frequency as f64 / span as f64;
    let stride = pixel_stride(spacing, count);
    let stop = |i: i64| TickStop {
        offset: origin + spacing * i as f64,
        value: (range.minimum() as i64 + frequency as i64 * i) as i32,
    };

    let mut stops: Vec<TickStop> = (0..=count).step_by(stride).map(stop).collect();
    stops.push(TickStop {
        offset: far,
        value: range.maximum(),
    });
    stops
}

/// Index step that keeps adjacent stops at least one pixel apart.
fn pixel_stride(spacing: f64, count: i64) -> usize {
    let spacing = spacing.abs();
    if spacing >= 1.0 {
        1
    } else if spacing > 0.0 {
        (1.0 / spacing).ceil() as usize
    } else {
        count as usize + 1
    }
}

/// Space the widget needs across its value axis.
pub fn fit_extent(range: &RangeState, appearance: &Appearance, measure: &dyn TextMeasure) -> f64 {
    let text_area = label_extent(range, appearance, measure);
    let tick = appearance.tick_height as f64;
    let mut used = appearance.cross_indent() as f64;
    if appearance.label_placement.has_leading() {
        used += text_area;
    }
    if appearance.tick_placement.has_leading() {
        used += tick + constants::TICK_GAP;
    }
    used += appearance.tracker_size.height as f64;
    if appearance.tick_placement.has_trailing() {
        used += constants::TICK_GAP + tick;
    }
    if appearance.label_placement.has_trailing() {
        used += text_area;
    }
    used += appearance.cross_indent() as f64;
    used.floor()
}

/// Size of the widest label across the value axis. The maximum's text
/// stands in for every label.
fn label_extent(range: &RangeState, appearance: &Appearance, measure: &dyn TextMeasure) -> f64 {
    let size = measure.measure(&range.maximum().to_string(), appearance.font_size);
    match appearance.orientation {
        Orientation::Horizontal => size.height,
        Orientation::Vertical => size.width,
    }
}

/// Build a rect from spans along the value axis (`main`) and across it.
fn oriented(orientation: Orientation, main: (f64, f64), cross: (f64, f64)) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect::new(main.0, cross.0, main.1, cross.1),
        Orientation::Vertical => Rect::new(cross.0, main.0, cross.1, main.1),
    }
}

/// Compute the full layout for a widget of `size`.
pub fn compute_layout(
    size: Size,
    range: &RangeState,
    appearance: &Appearance,
    measure: &dyn TextMeasure,
) -> LayoutResult {
    let orientation = appearance.orientation;
    let width = size.width.max(0.0).floor();
    let height = size.height.max(0.0).floor();
    let bounds = Rect::new(0.0, 0.0, width, height);
    let indent = appearance.indent;
    let working = Rect::new(
        indent.width as f64,
        indent.height as f64,
        width - indent.width as f64,
        height - indent.height as f64,
    );

    let mut layout = LayoutResult {
        orientation,
        bounds,
        working,
        focus: bounds.inflate(-constants::FOCUS_INSET, -constants::FOCUS_INSET),
        fit_extent: fit_extent(range, appearance, measure),
        ..Default::default()
    };

    if range.is_degenerate() {
        tracing::trace!("degenerate range, layout keeps border only");
        return layout;
    }

    let tracker_w = appearance.tracker_size.width as f64;
    let tracker_h = appearance.tracker_size.height as f64;
    let tick_h = appearance.tick_height as f64;
    let line_h = appearance.track_line_height as f64;
    let text_area = label_extent(range, appearance, measure);

    // Value-axis extent of the working area, and its ticked sub-span.
    let (work_start, work_end) = match orientation {
        Orientation::Horizontal => (working.x0, working.x1),
        Orientation::Vertical => (working.y0, working.y1),
    };
    let inner = (work_start + tracker_w * 0.5, work_end - tracker_w * 0.5);
    // Ticks run from minimum at `origin` to maximum at `far`; vertical bars grow upward.
    let (origin, far) = match orientation {
        Orientation::Horizontal => inner,
        Orientation::Vertical => (inner.1, inner.0),
    };

    let stops = tick_stops(origin, far, range, appearance.tick_frequency);
    let mut pos = appearance.cross_indent() as f64;

    if appearance.label_placement.has_leading() {
        layout.leading_labels = labels(orientation, (pos, pos + text_area), &stops);
        pos += text_area;
    }
    if appearance.tick_placement.has_leading() {
        layout.leading_ticks = ticks(orientation, (pos, pos + tick_h), &stops);
        pos += tick_h + constants::TICK_GAP;
    }

    let tracker_main = tracker_start(orientation, working, range, tracker_w);
    layout.tracker = Some(oriented(
        orientation,
        (tracker_main, tracker_main + tracker_w),
        (pos, pos + tracker_h),
    ));
    let line_start = pos + tracker_h * 0.5 - line_h * 0.5;
    layout.track_line = Some(oriented(
        orientation,
        (work_start, work_end),
        (line_start, line_start + line_h),
    ));
    pos += tracker_h;

    if appearance.tick_placement.has_trailing() {
        pos += constants::TICK_GAP;
        layout.trailing_ticks = ticks(orientation, (pos, pos + tick_h), &stops);
        pos += tick_h;
    }
    if appearance.label_placement.has_trailing() {
        layout.trailing_labels = labels(orientation, (pos, pos + text_area), &stops);
    }

    tracing::trace!(?size, tracker = ?layout.tracker, "layout pass");
    layout
}

/// Leading edge of the tracker along the value axis.
///
/// Horizontal positions use integer division over whole pixels; vertical
/// positions are fractional and measured up from the working bottom.
fn tracker_start(
    orientation: Orientation,
    working: Rect,
    range: &RangeState,
    tracker_w: f64,
) -> f64 {
    let offset = range.value() as i64 - range.minimum() as i64;
    match orientation {
        Orientation::Horizontal => {
            let usable = working.width() as i64 - tracker_w as i64;
            working.x0 + (usable * offset / range.span()) as f64
        }
        Orientation::Vertical => {
            let travel = (working.height() - tracker_w) * offset as f64 / range.span() as f64;
            working.y1 - travel - tracker_w
        }
    }
}

fn ticks(orientation: Orientation, cross: (f64, f64), stops: &[TickStop]) -> Vec<Line> {
    stops
        .iter()
        .map(|stop| match orientation {
            Orientation::Horizontal => Line::new((stop.offset, cross.0), (stop.offset, cross.1)),
            Orientation::Vertical => Line::new((cross.0, stop.offset), (cross.1, stop.offset)),
        })
        .collect()
}

fn labels(orientation: Orientation, cross: (f64, f64), stops: &[TickStop]) -> Vec<TickLabel> {
    let middle = (cross.0 + cross.1) * 0.5;
    stops
        .iter()
        .map(|stop| TickLabel {
            text: stop.value.to_string(),
            anchor: match orientation {
                Orientation::Horizontal => Point::new(stop.offset, middle),
                Orientation::Vertical => Point::new(middle, stop.offset),
            },
        })
        .collect()
}
