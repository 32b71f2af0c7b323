//! # floem-trackbar
//!
//! An owner-drawn track bar (slider) widget for [Floem](https://github.com/lapce/floem).
//!
//! Draws tick marks, tick labels, a track line, a capsule tracker, and one
//! of several border styles. Value, layout, and pointer logic live in
//! [`TrackBarCore`], which does not need a window and can drive other hosts
//! through the [`Paintable`] and [`Interactive`] traits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_trackbar::track_bar;
//!
//! let value = RwSignal::new(3);
//! let _bar = track_bar(value).range(0, 20);
//! // Place `_bar` in your Floem view tree.
//! ```

mod appearance;
mod color;
mod constants;
mod controller;
mod error;
mod events;
mod interaction;
mod layout;
mod range;
mod render;
mod text;
mod track_bar;

pub use appearance::{Appearance, BorderStyle, Extent, Orientation, Placement};
pub use color::Rgba;
pub use controller::{Interactive, Paintable, TrackBarCore};
pub use error::ConfigError;
pub use events::{Observers, TrackBarEvent};
pub use interaction::{CaptureGuard, DragState, KeyAction, NavKey, PointerCapture};
pub use layout::{compute_layout, fit_extent, tick_count, LayoutResult, TextMeasure, TickLabel};
pub use range::RangeState;
pub use render::{border_edges, Dash, EdgeRing};
pub use text::FloemTextMeasure;
pub use track_bar::{track_bar, TrackBar};
