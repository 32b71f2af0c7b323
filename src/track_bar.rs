//! Floem binding for [`TrackBarCore`].
//!
//! Forwards pointer, key, and focus events to the core, keeps the value
//! signal in sync both ways, and auto-sizes the axis across the track.

use std::cell::Cell;
use std::rc::Rc;

use floem::keyboard::{Key, NamedKey};
use floem::kurbo::{Rect, Size};
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::style::Style;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};

use crate::appearance::{Appearance, Orientation};
use crate::controller::{Interactive, Paintable, TrackBarCore};
use crate::events::TrackBarEvent;
use crate::interaction::{NavKey, PointerCapture};
use crate::range::RangeState;
use crate::render;
use crate::text::FloemTextMeasure;

enum TrackBarUpdate {
    Value(i32),
    Range(i32, i32),
}

/// Records capture requests; the view claims pointer focus when set.
#[derive(Default)]
struct ActiveFlag {
    captured: Cell<bool>,
}

impl PointerCapture for ActiveFlag {
    fn set_captured(&self, captured: bool) {
        self.captured.set(captured);
    }
}

pub struct TrackBar {
    id: ViewId,
    value: RwSignal<i32>,
    core: TrackBarCore,
    capture: Rc<ActiveFlag>,
    focused: bool,
    size: Size,
    /// Cross-axis extent last handed to the style pass.
    fit: Option<f64>,
}

/// Creates a track bar bound to `value`.
///
/// Dragging, clicking, and keyboard input write the new value back to the
/// signal; external writes move the tracker.
pub fn track_bar(value: RwSignal<i32>) -> TrackBar {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = value.get();
        id.update_state(TrackBarUpdate::Value(v));
    });

    let capture = Rc::new(ActiveFlag::default());
    let mut core = TrackBarCore::new(RangeState::default(), Appearance::default())
        .with_capture(capture.clone());
    core.set_value(value.get_untracked());
    core.subscribe(move |event| {
        if let TrackBarEvent::ValueChanged(v) = *event {
            if value.get_untracked() != v {
                value.set(v);
            }
        }
    });

    TrackBar {
        id,
        value,
        core,
        capture,
        focused: false,
        size: Size::ZERO,
        fit: None,
    }
    .keyboard_navigable()
    .style(|s| s.cursor(floem::style::CursorStyle::Pointer))
}

impl TrackBar {
    /// Set the bounds; the current value is clamped into them.
    pub fn range(mut self, minimum: i32, maximum: i32) -> Self {
        if self.core.set_range(minimum, maximum) {
            self.push_value();
        }
        self
    }

    /// Track reactive bounds from `range_fn`.
    pub fn range_fn(self, range_fn: impl Fn() -> (i32, i32) + 'static) -> Self {
        let id = self.id;
        create_effect(move |_| {
            let (min, max) = range_fn();
            id.update_state(TrackBarUpdate::Range(min, max));
        });
        self
    }

    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.core.set_appearance(appearance);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.core.update_appearance(|a| a.orientation = orientation);
        self
    }

    pub fn small_change(mut self, step: i32) -> Self {
        self.core.set_small_change(step);
        self
    }

    pub fn large_change(mut self, step: i32) -> Self {
        self.core.set_large_change(step);
        self
    }

    /// Called after each user drag or click that moved the value.
    pub fn on_scroll(mut self, f: impl Fn() + 'static) -> Self {
        self.core.subscribe(move |event| {
            if *event == TrackBarEvent::Scroll {
                f();
            }
        });
        self
    }

    pub fn on_value_changed(mut self, f: impl Fn(i32) + 'static) -> Self {
        self.core.subscribe(move |event| {
            if let TrackBarEvent::ValueChanged(v) = *event {
                f(v);
            }
        });
        self
    }

    /// Write a value clamped by a bound change back to the signal.
    fn push_value(&self) {
        let v = self.core.value();
        if self.value.get_untracked() != v {
            self.value.set(v);
        }
    }

    fn refresh(&mut self) {
        if self.core.needs_layout() {
            self.id.request_layout();
        }
        if self.core.take_invalidated() {
            self.id.request_paint();
        }
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(NavKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(NavKey::Right),
        Key::Named(NamedKey::ArrowUp) => Some(NavKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(NavKey::Down),
        Key::Named(NamedKey::PageUp) => Some(NavKey::PageUp),
        Key::Named(NamedKey::PageDown) => Some(NavKey::PageDown),
        Key::Named(NamedKey::Home) => Some(NavKey::Home),
        Key::Named(NamedKey::End) => Some(NavKey::End),
        _ => None,
    }
}

impl View for TrackBar {
    fn id(&self) -> ViewId {
        self.id
    }

    fn view_style(&self) -> Option<Style> {
        let fit = self.fit?;
        let style = Style::new();
        Some(match self.core.appearance().orientation {
            Orientation::Horizontal => style.height(fit),
            Orientation::Vertical => style.width(fit),
        })
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<TrackBarUpdate>() {
            match *update {
                TrackBarUpdate::Value(v) => self.core.set_value(v),
                TrackBarUpdate::Range(min, max) => {
                    if self.core.set_range(min, max) {
                        self.push_value();
                    }
                }
            }
            self.refresh();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        let consumed = match event {
            Event::PointerDown(e) if e.button.is_primary() => {
                let consumed = self.core.pointer_down(e.pos);
                if self.capture.captured.get() {
                    cx.update_active(self.id());
                }
                consumed
            }
            Event::PointerMove(e) => self.core.pointer_move(e.pos),
            Event::PointerUp(_) => self.core.pointer_up(),
            Event::KeyDown(e) => match nav_key(&e.key.logical_key) {
                Some(key) => self.core.key_down(key),
                None => false,
            },
            Event::FocusGained => {
                self.focused = true;
                self.id.request_paint();
                false
            }
            Event::FocusLost => {
                self.focused = false;
                self.core.cancel();
                self.id.request_paint();
                false
            }
            _ => false,
        };
        self.refresh();
        if consumed {
            EventPropagation::Stop
        } else {
            EventPropagation::Continue
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = Size::new(layout.size.width as f64, layout.size.height as f64);
        let fit = self.core.relayout(self.size, &FloemTextMeasure).fit_extent;
        if self.core.appearance().auto_size {
            if self.fit != Some(fit) {
                self.fit = Some(fit);
                self.id.request_style();
            }
        } else if self.fit.take().is_some() {
            self.id.request_style();
        }
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        if self.size.width == 0.0 || self.size.height == 0.0 {
            return;
        }
        if self.core.needs_layout() {
            self.core.relayout(self.size, &FloemTextMeasure);
        }
        self.core.take_invalidated();
        if let Some(layout) = self.core.layout() {
            render::paint(cx, layout, self.core.appearance(), self.focused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(nav_key(&Key::Named(NamedKey::Home)), Some(NavKey::Home));
        assert_eq!(
            nav_key(&Key::Named(NamedKey::ArrowDown)),
            Some(NavKey::Down)
        );
        assert_eq!(
            nav_key(&Key::Named(NamedKey::PageUp)),
            Some(NavKey::PageUp)
        );
        assert_eq!(nav_key(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn active_flag_tracks_capture() {
        let flag = Rc::new(ActiveFlag::default());
        let mut core = TrackBarCore::default().with_capture(flag.clone());
        core.relayout(Size::new(200.0, 40.0), &crate::layout::tests::measure());
        let tracker = core.layout().and_then(|l| l.tracker).unwrap();
        core.pointer_down(tracker.center());
        assert!(flag.captured.get());
        core.pointer_up();
        assert!(!flag.captured.get());
    }
}
