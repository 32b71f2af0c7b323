//! Label text through Floem's text system.

use floem::kurbo::Size;
use floem::text::{Attrs, AttrsList, TextLayout, Weight};

use crate::color::Rgba;
use crate::layout::TextMeasure;

/// Bold label layout at `font_size`.
pub(crate) fn label_layout(text: &str, font_size: f32, color: Rgba) -> TextLayout {
    let attrs = Attrs::new()
        .font_size(font_size)
        .weight(Weight::BOLD)
        .color(color.to_color());
    let mut layout = TextLayout::new();
    layout.set_text(text, AttrsList::new(attrs));
    layout
}

/// Measures labels with the same attributes they are painted with.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloemTextMeasure;

impl TextMeasure for FloemTextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Size {
        label_layout(text, font_size, Rgba::BLACK).size()
    }
}
