mod app;
mod painter_surface;
mod plot_layers;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_render;
mod ui_text;

pub use app::FundingSimApp;
pub use painter_surface::{CanvasView, PainterSurface};
pub use ui_plot_view::PlotView;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
