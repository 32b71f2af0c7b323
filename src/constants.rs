//! Sizing, color, and styling defaults for the track bar.

use crate::color::Rgba;

/// Tracker extent along the value axis
pub const TRACKER_WIDTH: i32 = 16;

/// Tracker extent across the value axis
pub const TRACKER_HEIGHT: i32 = 16;

/// Horizontal padding between the widget edge and the working area
pub const INDENT_WIDTH: i32 = 6;

/// Vertical padding between the widget edge and the working area
pub const INDENT_HEIGHT: i32 = 6;

/// Tick mark length
pub const TICK_HEIGHT: i32 = 4;

/// Value delta between tick marks
pub const TICK_FREQUENCY: i32 = 1;

/// Track line thickness
pub const TRACK_LINE_HEIGHT: i32 = 3;

/// Gap between the tracker band and a tick line
pub const TICK_GAP: f64 = 1.0;

/// Label font size (8.25pt at 96 dpi)
pub const LABEL_FONT: f32 = 11.0;

/// Focus rectangle inset from the widget bounds
pub const FOCUS_INSET: f64 = 2.0;

/// Default value step for arrow keys
pub const SMALL_CHANGE: i32 = 1;

/// Default value step for page keys
pub const LARGE_CHANGE: i32 = 2;

pub const DEFAULT_MINIMUM: i32 = 0;
pub const DEFAULT_MAXIMUM: i32 = 10;

pub const TRACKER_COLOR: Rgba = Rgba::rgb(24, 130, 198);
pub const TRACK_LINE_COLOR: Rgba = Rgba::rgb(90, 93, 90);
pub const TICK_COLOR: Rgba = Rgba::rgb(148, 146, 148);
pub const FORE_COLOR: Rgba = Rgba::rgb(123, 125, 123);
pub const BORDER_COLOR: Rgba = Rgba::rgb(180, 180, 180);
pub const BACKGROUND: Rgba = Rgba::TRANSPARENT;

/// Shades used by the 3D border styles
pub const CONTROL_LIGHT: Rgba = Rgba::rgb(227, 227, 227);
pub const CONTROL_LIGHT_LIGHT: Rgba = Rgba::rgb(255, 255, 255);
pub const CONTROL_DARK: Rgba = Rgba::rgb(160, 160, 160);
pub const CONTROL_DARK_DARK: Rgba = Rgba::rgb(105, 105, 105);
