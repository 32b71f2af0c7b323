//! Appearance configuration: orientation, sizes, placements, colors.
//!
//! An [`Appearance`] can be built in code through its setters or loaded from
//! TOML. Both paths apply the same clamping, so a loaded config satisfies
//! the same invariants as one built by hand.

use serde::Deserialize;

use crate::color::Rgba;
use crate::constants;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Which sides of the tracker band carry tick marks or labels.
///
/// Leading is top for a horizontal bar and left for a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    None,
    Leading,
    #[default]
    Trailing,
    Both,
}

impl Placement {
    pub fn has_leading(self) -> bool {
        matches!(self, Placement::Leading | Placement::Both)
    }

    pub fn has_trailing(self) -> bool {
        matches!(self, Placement::Trailing | Placement::Both)
    }
}

/// Border drawn around the widget bounds.
///
/// The first group strokes with the border color; the 3D group uses fixed
/// light and dark shades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    None,
    Dashed,
    Dotted,
    Inset,
    Outset,
    Solid,
    Adjust,
    Bump,
    Etched,
    Flat,
    Raised,
    RaisedInner,
    RaisedOuter,
    Sunken,
    SunkenInner,
    SunkenOuter,
}

/// Integer width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub orientation: Orientation,
    /// `width` runs along the value axis, `height` across it.
    pub tracker_size: Extent,
    /// `width` pads left and right, `height` pads top and bottom.
    pub indent: Extent,
    pub track_line_height: i32,
    pub tick_height: i32,
    pub tick_frequency: i32,
    pub tick_placement: Placement,
    pub label_placement: Placement,
    pub border_style: BorderStyle,
    pub border_color: Rgba,
    pub tracker_color: Rgba,
    pub track_line_color: Rgba,
    pub tick_color: Rgba,
    pub fore_color: Rgba,
    pub background: Rgba,
    pub font_size: f32,
    pub auto_size: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            tracker_size: Extent::new(constants::TRACKER_WIDTH, constants::TRACKER_HEIGHT),
            indent: Extent::new(constants::INDENT_WIDTH, constants::INDENT_HEIGHT),
            track_line_height: constants::TRACK_LINE_HEIGHT,
            tick_height: constants::TICK_HEIGHT,
            tick_frequency: constants::TICK_FREQUENCY,
            tick_placement: Placement::Trailing,
            label_placement: Placement::Trailing,
            border_style: BorderStyle::None,
            border_color: constants::BORDER_COLOR,
            tracker_color: constants::TRACKER_COLOR,
            track_line_color: constants::TRACK_LINE_COLOR,
            tick_color: constants::TICK_COLOR,
            fore_color: constants::FORE_COLOR,
            background: constants::BACKGROUND,
            font_size: constants::LABEL_FONT,
            auto_size: true,
        }
    }
}

impl Appearance {
    /// Parse a TOML table; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let parsed: Appearance = toml::from_str(text)?;
        Ok(parsed.normalized())
    }

    /// Apply every setter's clamping rule to the raw fields.
    pub fn normalized(mut self) -> Self {
        let tracker = self.tracker_size;
        self.set_tracker_size(tracker.width, tracker.height);
        let indent = self.indent;
        self.set_indent(indent.width, indent.height);
        self.set_track_line_height(self.track_line_height);
        self.set_tick_height(self.tick_height);
        self.set_tick_frequency(self.tick_frequency);
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            self.font_size = constants::LABEL_FONT;
        }
        self
    }

    /// A width larger than the height raises the height to match.
    pub fn set_tracker_size(&mut self, width: i32, height: i32) {
        let width = width.max(1);
        self.tracker_size = Extent::new(width, height.max(width));
        // The track line may not outgrow the tracker.
        self.set_track_line_height(self.track_line_height);
    }

    pub fn set_indent(&mut self, width: i32, height: i32) {
        self.indent = Extent::new(width.max(0), height.max(0));
    }

    /// Clamped to `1..=tracker height`.
    pub fn set_track_line_height(&mut self, height: i32) {
        self.track_line_height = height.clamp(1, self.tracker_size.height.max(1));
    }

    pub fn set_tick_height(&mut self, height: i32) {
        self.tick_height = height.max(1);
    }

    pub fn set_tick_frequency(&mut self, frequency: i32) {
        self.tick_frequency = frequency.max(1);
    }

    /// Indent across the value axis, where layout starts stacking.
    pub(crate) fn cross_indent(&self) -> i32 {
        match self.orientation {
            Orientation::Horizontal => self.indent.height,
            Orientation::Vertical => self.indent.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_height_never_below_width() {
        let mut a = Appearance::default();
        a.set_tracker_size(30, 10);
        assert_eq!(a.tracker_size, Extent::new(30, 30));
        a.set_tracker_size(8, 24);
        assert_eq!(a.tracker_size, Extent::new(8, 24));
    }

    #[test]
    fn track_line_limited_by_tracker() {
        let mut a = Appearance::default();
        a.set_track_line_height(40);
        assert_eq!(a.track_line_height, a.tracker_size.height);
        a.set_track_line_height(0);
        assert_eq!(a.track_line_height, 1);
        a.set_track_line_height(12);
        a.set_tracker_size(6, 6);
        assert_eq!(a.track_line_height, 6);
    }

    #[test]
    fn sizes_floor_at_their_minimums() {
        let mut a = Appearance::default();
        a.set_indent(-3, -1);
        a.set_tick_height(0);
        a.set_tick_frequency(-5);
        assert_eq!(a.indent, Extent::new(0, 0));
        assert_eq!(a.tick_height, 1);
        assert_eq!(a.tick_frequency, 1);
    }

    #[test]
    fn placement_sides() {
        assert!(Placement::Both.has_leading());
        assert!(Placement::Both.has_trailing());
        assert!(Placement::Leading.has_leading());
        assert!(!Placement::Leading.has_trailing());
        assert!(!Placement::None.has_leading());
        assert!(!Placement::None.has_trailing());
    }

    #[test]
    fn loads_partial_toml_over_defaults() {
        let a = Appearance::from_toml_str(
            r##"
            orientation = "vertical"
            tick_frequency = 0
            label_placement = "both"
            border_style = "raised_inner"
            tracker_color = "#FF8800"
            tracker_size = { width = 20, height = 12 }
            "##,
        )
        .unwrap();
        assert_eq!(a.orientation, Orientation::Vertical);
        assert_eq!(a.tick_frequency, 1);
        assert_eq!(a.label_placement, Placement::Both);
        assert_eq!(a.border_style, BorderStyle::RaisedInner);
        assert_eq!(a.tracker_color, Rgba::rgb(255, 136, 0));
        assert_eq!(a.tracker_size, Extent::new(20, 20));
        assert_eq!(a.tick_height, constants::TICK_HEIGHT);
        assert_eq!(a.cross_indent(), a.indent.width);
    }

    #[test]
    fn rejects_bad_color() {
        let text = r#"tick_color = "blue""#;
        let err = Appearance::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("blue"));
    }

    #[test]
    fn rejects_unknown_border() {
        let text = r#"border_style = "wavy""#;
        assert!(Appearance::from_toml_str(text).is_err());
    }
}
