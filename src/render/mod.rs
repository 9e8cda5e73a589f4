//! Painter-based chart rendering, independent of any particular backend.

mod canvas_chart;
mod surface;

pub use canvas_chart::{draw_chart, hover_tooltip};
pub use surface::{DrawSurface, StrokeStyle, TextAnchor};
