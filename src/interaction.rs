//! Pointer and keyboard interaction.
//!
//! Pointer positions map back to value offsets by inverting the layout's
//! interpolation. Positions within half a tracker of either end saturate to
//! that end, so both extremes stay reachable.

use std::rc::Rc;

use floem::kurbo::{Point, Size};

use crate::appearance::{Appearance, Extent, Orientation};
use crate::range::RangeState;

/// Exclusive pointer capture, provided by the host.
pub trait PointerCapture {
    fn set_captured(&self, captured: bool);
}

/// Holds pointer capture for as long as it lives.
pub struct CaptureGuard {
    host: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    pub fn acquire(host: Rc<dyn PointerCapture>) -> Self {
        host.set_captured(true);
        Self { host }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.host.set_captured(false);
    }
}

impl std::fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CaptureGuard")
    }
}

/// Drag state machine. Leaving `Dragging` drops the guard, releasing capture.
#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer distance from the tracker's leading edge at grab time.
        grab_offset: f64,
        capture: CaptureGuard,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Navigation keys the track bar responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Increment(i32),
    Decrement(i32),
    Set(i32),
}

/// Home jumps to the maximum and End to the minimum.
pub fn key_action(key: NavKey, range: &RangeState) -> KeyAction {
    match key {
        NavKey::Left | NavKey::Down => KeyAction::Decrement(range.small_change()),
        NavKey::Right | NavKey::Up => KeyAction::Increment(range.small_change()),
        NavKey::PageUp => KeyAction::Increment(range.large_change()),
        NavKey::PageDown => KeyAction::Decrement(range.large_change()),
        NavKey::Home => KeyAction::Set(range.maximum()),
        NavKey::End => KeyAction::Set(range.minimum()),
    }
}

/// Inputs of the pointer-to-value mapping.
#[derive(Debug, Clone, Copy)]
pub struct PointerGeometry {
    pub orientation: Orientation,
    pub size: Size,
    pub indent: Extent,
    pub tracker_width: f64,
    pub span: i64,
}

impl PointerGeometry {
    pub fn new(size: Size, appearance: &Appearance, range: &RangeState) -> Self {
        Self {
            orientation: appearance.orientation,
            size: Size::new(size.width.floor(), size.height.floor()),
            indent: appearance.indent,
            tracker_width: appearance.tracker_size.width as f64,
            span: range.span(),
        }
    }

    /// Offset from the minimum for a click outside the tracker.
    pub fn jump_offset(&self, pos: Point) -> i64 {
        let span = self.span as f64;
        let half = self.tracker_width * 0.5;
        match self.orientation {
            Orientation::Horizontal => {
                let w = self.size.width;
                let iw = self.indent.width as f64;
                let travel = w - 2.0 * iw - self.tracker_width;
                if pos.x + half >= w - iw {
                    self.span
                } else if pos.x - half <= iw {
                    0
                } else {
                    round_half_up((pos.x - iw - half) * span / travel)
                }
            }
            Orientation::Vertical => {
                let h = self.size.height;
                let ih = self.indent.height as f64;
                let travel = h - 2.0 * ih - self.tracker_width;
                if pos.y + half >= h - ih {
                    0
                } else if pos.y - half <= ih {
                    self.span
                } else {
                    round_half_up((h - pos.y - ih - half) * span / travel)
                }
            }
        }
    }

    /// Offset from the minimum while dragging with `grab` recorded at pointer-down.
    ///
    /// The vertical mapping measures its dead zones from the pointer plus half
    /// a tracker and divides by the full working height, unlike the horizontal
    /// one. Kept as is; see the tests.
    pub fn drag_offset(&self, pos: Point, grab: f64) -> i64 {
        let span = self.span as f64;
        let half = self.tracker_width * 0.5;
        match self.orientation {
            Orientation::Horizontal => {
                let w = self.size.width;
                let iw = self.indent.width as f64;
                let travel = w - 2.0 * iw - self.tracker_width;
                if pos.x + self.tracker_width - grab >= w - iw {
                    self.span
                } else if pos.x - grab <= iw {
                    0
                } else {
                    round_half_up((pos.x - grab - iw) * span / travel)
                }
            }
            Orientation::Vertical => {
                let h = self.size.height;
                let ih = self.indent.height as f64;
                if pos.y + half >= h - ih {
                    0
                } else if pos.y + half <= ih {
                    self.span
                } else {
                    round_half_up((h - pos.y + half - grab - ih) * span / (h - 2.0 * ih))
                }
            }
        }
    }
}

/// Add one half and truncate toward zero.
fn round_half_up(x: f64) -> i64 {
    (x + 0.5) as i64
}
