//! Toolkit-independent track bar.
//!
//! [`TrackBarCore`] owns the value model, the appearance, the most recent
//! layout, and the drag session. A host binding feeds it sizes and events
//! through [`Paintable`] and [`Interactive`] and reads back the layout to
//! draw.

use std::rc::Rc;

use floem::kurbo::{Point, Size};

use crate::appearance::{Appearance, Orientation};
use crate::events::{Observers, TrackBarEvent};
use crate::interaction::{
    self, CaptureGuard, DragState, KeyAction, NavKey, PointerCapture, PointerGeometry,
};
use crate::layout::{self, LayoutResult, TextMeasure};
use crate::range::RangeState;

/// Drawing side of the widget.
pub trait Paintable {
    /// Recompute the layout for `size` and keep it for hit-testing.
    fn relayout(&mut self, size: Size, measure: &dyn TextMeasure) -> &LayoutResult;

    /// Returns and clears the pending repaint request.
    fn take_invalidated(&mut self) -> bool;
}

/// Input side of the widget. Each method returns whether the event was consumed.
pub trait Interactive {
    fn pointer_down(&mut self, pos: Point) -> bool;
    fn pointer_move(&mut self, pos: Point) -> bool;
    fn pointer_up(&mut self) -> bool;
    fn key_down(&mut self, key: NavKey) -> bool;
    /// Abandon any drag in progress.
    fn cancel(&mut self);
}

/// Capture host for cores that run without a toolkit.
struct NoCapture;

impl PointerCapture for NoCapture {
    fn set_captured(&self, _captured: bool) {}
}

pub struct TrackBarCore {
    range: RangeState,
    appearance: Appearance,
    layout: Option<LayoutResult>,
    drag: DragState,
    capture: Rc<dyn PointerCapture>,
    observers: Observers,
    invalidated: bool,
    layout_dirty: bool,
}

impl Default for TrackBarCore {
    fn default() -> Self {
        Self::new(RangeState::default(), Appearance::default())
    }
}

impl TrackBarCore {
    pub fn new(range: RangeState, appearance: Appearance) -> Self {
        Self {
            range,
            appearance: appearance.normalized(),
            layout: None,
            drag: DragState::Idle,
            capture: Rc::new(NoCapture),
            observers: Observers::default(),
            invalidated: true,
            layout_dirty: true,
        }
    }

    /// Route pointer capture to the host.
    pub fn with_capture(mut self, capture: Rc<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    pub fn subscribe(&mut self, observer: impl Fn(&TrackBarEvent) + 'static) {
        self.observers.subscribe(observer);
    }

    pub fn range(&self) -> &RangeState {
        &self.range
    }

    pub fn value(&self) -> i32 {
        self.range.value()
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Most recent layout, if any pass has run.
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// True when a change since the last layout pass may move geometry.
    pub fn needs_layout(&self) -> bool {
        self.layout_dirty
    }

    fn invalidate(&mut self) {
        self.invalidated = true;
    }

    fn relayout_needed(&mut self) {
        self.layout_dirty = true;
        self.invalidated = true;
    }

    /// Programmatic set: raises only `ValueChanged`, and only on change.
    pub fn set_value(&mut self, value: i32) {
        if self.range.set_value(value) {
            self.notify_value();
            self.relayout_needed();
        }
    }

    /// Bound setters raise no event. They return whether the value was
    /// clamped, so a binding can push the new value out.
    pub fn set_minimum(&mut self, minimum: i32) -> bool {
        self.relayout_needed();
        self.range.set_minimum(minimum)
    }

    pub fn set_maximum(&mut self, maximum: i32) -> bool {
        self.relayout_needed();
        self.range.set_maximum(maximum)
    }

    pub fn set_range(&mut self, minimum: i32, maximum: i32) -> bool {
        self.relayout_needed();
        self.range.set_range(minimum, maximum)
    }

    pub fn set_small_change(&mut self, step: i32) {
        self.range.set_small_change(step);
    }

    pub fn set_large_change(&mut self, step: i32) {
        self.range.set_large_change(step);
    }

    /// Always raises `ValueChanged`, even when already at the maximum.
    pub fn increment(&mut self, step: i32) {
        self.range.increment(step);
        self.notify_value();
        self.relayout_needed();
    }

    /// Always raises `ValueChanged`, even when already at the minimum.
    pub fn decrement(&mut self, step: i32) {
        self.range.decrement(step);
        self.notify_value();
        self.relayout_needed();
    }

    fn notify_value(&self) {
        let value = self.range.value();
        self.observers.emit(TrackBarEvent::ValueChanged(value));
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance.normalized();
        self.relayout_needed();
    }

    /// Edit the appearance in place; the result is re-normalized.
    pub fn update_appearance(&mut self, f: impl FnOnce(&mut Appearance)) {
        f(&mut self.appearance);
        self.appearance = std::mem::take(&mut self.appearance).normalized();
        self.relayout_needed();
    }

    /// Restore the default look, keeping orientation and auto-size.
    pub fn reset_appearance(&mut self) {
        let orientation = self.appearance.orientation;
        let auto_size = self.appearance.auto_size;
        self.set_appearance(Appearance {
            orientation,
            auto_size,
            ..Appearance::default()
        });
    }

    /// Size across the value axis for auto-sizing.
    pub fn fit_extent(&self, measure: &dyn TextMeasure) -> f64 {
        layout::fit_extent(&self.range, &self.appearance, measure)
    }

    fn geometry(&self) -> Option<PointerGeometry> {
        let layout = self.layout.as_ref()?;
        Some(PointerGeometry::new(
            layout.size(),
            &self.appearance,
            &self.range,
        ))
    }

    /// Apply a pointer-driven offset and raise `Scroll` then `ValueChanged`.
    fn apply_offset(&mut self, offset: i64) {
        let min = self.range.minimum() as i64;
        let max = self.range.maximum() as i64;
        let target = (min + offset).clamp(min, max) as i32;
        self.invalidate();
        if self.range.set_value(target) {
            self.layout_dirty = true;
            tracing::trace!(value = self.range.value(), "pointer moved value");
            self.observers.emit(TrackBarEvent::Scroll);
            self.notify_value();
        }
    }
}

impl Paintable for TrackBarCore {
    fn relayout(&mut self, size: Size, measure: &dyn TextMeasure) -> &LayoutResult {
        self.layout_dirty = false;
        let result = layout::compute_layout(size, &self.range, &self.appearance, measure);
        self.layout.insert(result)
    }

    fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }
}

impl Interactive for TrackBarCore {
    fn pointer_down(&mut self, pos: Point) -> bool {
        let Some(layout) = self.layout.as_ref() else {
            tracing::trace!("pointer down before first layout, ignored");
            return false;
        };
        if layout.hit_tracker(pos) {
            if !self.drag.is_dragging() {
                let tracker = layout.tracker.unwrap_or_default();
                let grab_offset = match self.appearance.orientation {
                    Orientation::Horizontal => pos.x - tracker.x0,
                    Orientation::Vertical => pos.y - tracker.y0,
                };
                tracing::debug!(grab_offset, "drag started");
                self.drag = DragState::Dragging {
                    grab_offset,
                    capture: CaptureGuard::acquire(self.capture.clone()),
                };
            }
            return true;
        }

        let Some(geometry) = self.geometry() else {
            return false;
        };
        let offset = geometry.jump_offset(pos);
        tracing::debug!(?pos, offset, "jump to pointer");
        self.apply_offset(offset);
        true
    }

    fn pointer_move(&mut self, pos: Point) -> bool {
        let DragState::Dragging { grab_offset, .. } = self.drag else {
            return false;
        };
        let Some(geometry) = self.geometry() else {
            return false;
        };
        self.apply_offset(geometry.drag_offset(pos, grab_offset));
        true
    }

    fn pointer_up(&mut self) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.drag = DragState::Idle;
        tracing::debug!(value = self.range.value(), "drag ended");
        true
    }

    fn key_down(&mut self, key: NavKey) -> bool {
        match interaction::key_action(key, &self.range) {
            KeyAction::Increment(step) => self.increment(step),
            KeyAction::Decrement(step) => self.decrement(step),
            KeyAction::Set(value) => self.set_value(value),
        }
        self.invalidate();
        true
    }

    fn cancel(&mut self) {
        if self.drag.is_dragging() {
            tracing::debug!("drag cancelled");
            self.drag = DragState::Idle;
        }
    }
}

impl std::fmt::Debug for TrackBarCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackBarCore")
            .field("range", &self.range)
            .field("appearance", &self.appearance)
            .field("drag", &self.drag)
            .field("observers", &self.observers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::appearance::{Extent, Placement};
    use crate::layout::tests::measure;

    #[derive(Default)]
    struct RecordingCapture {
        captured: Cell<bool>,
        acquired: Cell<u32>,
        released: Cell<u32>,
    }

    impl PointerCapture for RecordingCapture {
        fn set_captured(&self, captured: bool) {
            let counter = if captured {
                &self.acquired
            } else {
                &self.released
            };
            counter.set(counter.get() + 1);
            self.captured.set(captured);
        }
    }

    struct Harness {
        core: TrackBarCore,
        events: Rc<RefCell<Vec<TrackBarEvent>>>,
        capture: Rc<RecordingCapture>,
    }

    impl Harness {
        fn new(orientation: Orientation, size: Size) -> Self {
            let capture = Rc::new(RecordingCapture::default());
            let appearance = Appearance {
                orientation,
                tracker_size: Extent::new(20, 20),
                indent: Extent::new(0, 0),
                tick_placement: Placement::None,
                label_placement: Placement::None,
                ..Default::default()
            };
            let mut core = TrackBarCore::new(RangeState::new(0, 100), appearance)
                .with_capture(capture.clone());
            let events = Rc::new(RefCell::new(Vec::new()));
            let sink = events.clone();
            core.subscribe(move |e| sink.borrow_mut().push(*e));
            core.relayout(size, &measure());
            Self {
                core,
                events,
                capture,
            }
        }

        fn drain(&self) -> Vec<TrackBarEvent> {
            self.events.borrow_mut().drain(..).collect()
        }
    }

    #[test]
    fn programmatic_set_fires_value_changed_only_on_change() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.take_invalidated();
        h.core.set_value(40);
        h.core.set_value(40);
        h.core.set_value(500);
        assert_eq!(
            h.drain(),
            vec![
                TrackBarEvent::ValueChanged(40),
                TrackBarEvent::ValueChanged(100),
            ]
        );
        assert!(h.core.take_invalidated());
        assert!(!h.core.take_invalidated());
    }

    #[test]
    fn increment_notifies_even_when_saturated() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.set_value(100);
        h.drain();
        h.core.increment(3);
        assert_eq!(h.core.value(), 100);
        assert_eq!(h.drain(), vec![TrackBarEvent::ValueChanged(100)]);
    }

    #[test]
    fn keys_drive_value() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.set_large_change(10);
        h.core.set_value(50);
        h.core.key_down(NavKey::Home);
        assert_eq!(h.core.value(), 100);
        h.core.key_down(NavKey::End);
        assert_eq!(h.core.value(), 0);
        h.core.key_down(NavKey::PageUp);
        h.core.key_down(NavKey::Right);
        assert_eq!(h.core.value(), 11);
        h.core.key_down(NavKey::Down);
        h.core.key_down(NavKey::PageDown);
        assert_eq!(h.core.value(), 0);
        assert!(!h.drain().contains(&TrackBarEvent::Scroll));
    }

    #[test]
    fn drag_sequence() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.set_value(50);
        h.core.relayout(Size::new(200.0, 20.0), &measure());
        h.drain();

        // tracker spans 90..110
        assert!(h.core.pointer_down(Point::new(95.0, 10.0)));
        assert!(h.core.is_dragging());
        assert!(h.capture.captured.get());
        assert_eq!(h.core.value(), 50);
        assert!(h.drain().is_empty());

        // leading edge moves to 135 -> 135 * 100 / 180 = 75
        assert!(h.core.pointer_move(Point::new(140.0, 10.0)));
        assert_eq!(h.core.value(), 75);
        assert_eq!(
            h.drain(),
            vec![TrackBarEvent::Scroll, TrackBarEvent::ValueChanged(75)]
        );

        // same spot again: nothing to report
        h.core.pointer_move(Point::new(140.0, 10.0));
        assert!(h.drain().is_empty());

        assert!(h.core.pointer_up());
        assert!(!h.core.is_dragging());
        assert!(!h.capture.captured.get());
        assert_eq!(h.capture.released.get(), 1);
        assert_eq!(h.core.value(), 75);
        assert!(h.drain().is_empty());

        assert!(!h.core.pointer_move(Point::new(10.0, 10.0)));
        assert_eq!(h.core.value(), 75);
    }

    #[test]
    fn second_press_while_dragging_keeps_session() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.pointer_down(Point::new(5.0, 10.0));
        h.core.pointer_down(Point::new(6.0, 10.0));
        assert_eq!(h.capture.acquired.get(), 1);
    }

    #[test]
    fn click_outside_tracker_jumps() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.drain();
        assert!(h.core.pointer_down(Point::new(190.0, 10.0)));
        assert_eq!(h.core.value(), 100);
        assert!(!h.core.is_dragging());
        assert_eq!(h.capture.acquired.get(), 0);
        assert_eq!(
            h.drain(),
            vec![TrackBarEvent::Scroll, TrackBarEvent::ValueChanged(100)]
        );

        // leading dead zone
        h.core.relayout(Size::new(200.0, 20.0), &measure());
        h.core.pointer_down(Point::new(3.0, 10.0));
        assert_eq!(h.core.value(), 0);
    }

    #[test]
    fn vertical_drag_from_bottom() {
        let mut h = Harness::new(Orientation::Vertical, Size::new(20.0, 200.0));
        // value 0: tracker spans 180..200
        assert!(h.core.pointer_down(Point::new(10.0, 190.0)));
        assert!(h.core.is_dragging());
        h.drain();
        // (200 - 90 + 10 - 10) * 100 / 200 = 55
        h.core.pointer_move(Point::new(10.0, 90.0));
        assert_eq!(h.core.value(), 55);
        // overshoot past the top clamps to the maximum
        h.core.pointer_move(Point::new(10.0, -5.0));
        assert_eq!(h.core.value(), 100);
        h.core.pointer_up();
        assert_eq!(h.capture.released.get(), 1);
    }

    #[test]
    fn cancel_releases_capture() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.pointer_down(Point::new(5.0, 10.0));
        assert!(h.capture.captured.get());
        h.core.cancel();
        assert!(!h.capture.captured.get());
        assert!(!h.core.pointer_up());
    }

    #[test]
    fn dropping_core_mid_drag_releases_capture() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.pointer_down(Point::new(5.0, 10.0));
        let capture = h.capture.clone();
        drop(h);
        assert!(!capture.captured.get());
    }

    #[test]
    fn pointer_ignored_before_layout() {
        let mut core = TrackBarCore::default();
        assert!(!core.pointer_down(Point::new(1.0, 1.0)));
        assert!(core.layout().is_none());
    }

    #[test]
    fn degenerate_range_never_drags() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.set_range(7, 7);
        h.core.relayout(Size::new(200.0, 20.0), &measure());
        h.drain();
        h.core.pointer_down(Point::new(5.0, 10.0));
        assert!(!h.core.is_dragging());
        assert_eq!(h.core.value(), 7);
        assert!(h.drain().is_empty());
    }

    #[test]
    fn narrowing_range_reports_clamp_without_events() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        h.core.set_range(0, 30);
        h.core.set_value(25);
        h.drain();
        assert!(h.core.set_range(0, 20));
        assert_eq!(h.core.value(), 20);
        assert!(!h.core.set_range(0, 50));
        assert!(!h.core.set_minimum(10));
        assert!(h.core.set_minimum(22));
        assert!(h.core.set_maximum(21));
        assert_eq!(h.core.value(), 21);
        assert!(h.drain().is_empty());
    }

    #[test]
    fn bound_changes_mark_layout_dirty() {
        let mut h = Harness::new(Orientation::Horizontal, Size::new(200.0, 20.0));
        assert!(!h.core.needs_layout());
        h.core.set_maximum(40);
        assert!(h.core.needs_layout());
        h.core.relayout(Size::new(200.0, 20.0), &measure());
        assert!(!h.core.needs_layout());
    }

    #[test]
    fn reset_appearance_keeps_orientation() {
        let mut core = TrackBarCore::default();
        core.update_appearance(|a| {
            a.orientation = Orientation::Vertical;
            a.tick_height = 0;
            a.tracker_color = crate::Rgba::BLACK;
        });
        assert_eq!(core.appearance().tick_height, 1);
        core.reset_appearance();
        assert_eq!(core.appearance().orientation, Orientation::Vertical);
        assert_eq!(
            core.appearance().tracker_color,
            crate::constants::TRACKER_COLOR
        );
    }
}
