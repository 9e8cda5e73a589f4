//! Chart visualization configuration

use eframe::egui::Color32;

/// Styling for the interactive `egui_plot` renderer.
pub struct PlotConfig {
    pub series_line_width: f32,
    pub zero_line_color: Color32,
    pub zero_line_width: f32,
    pub zero_line_dash: f32,
    /// Vertical cursor line at the hovered point
    pub hover_line_color: Color32,
    /// Target number of labelled time marks across the X axis
    pub x_axis_mark_target: f64,
    /// Lines with unreadable colors (e.g. OKX black) get this outline
    pub min_line_luminance: u8,
    pub fallback_line_color: Color32,

    // --- SEMANTIC COLORS ---
    pub color_text_primary: Color32,
    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
    pub color_hidden_series: Color32,
    pub color_positive: Color32,
    pub color_negative: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    series_line_width: 2.0,
    zero_line_color: Color32::from_rgba_premultiplied(77, 77, 77, 77), // white @ 30%
    zero_line_width: 1.0,
    zero_line_dash: 5.0,
    hover_line_color: Color32::from_gray(90),
    x_axis_mark_target: 8.0,
    min_line_luminance: 24,
    fallback_line_color: Color32::from_gray(200),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
    color_hidden_series: Color32::from_gray(136), // #888
    color_positive: Color32::from_rgb(100, 255, 100),
    color_negative: Color32::from_rgb(255, 80, 80),
};

/// Space reserved around the plot area of the canvas chart (pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Styling for the fixed-layout canvas renderer.
pub struct CanvasStyle {
    pub padding: Padding,
    pub background: Color32,
    pub grid_color: Color32,
    pub grid_width: f32,
    pub zero_line_color: Color32,
    pub zero_line_dash: f32,
    pub axis_color: Color32,
    pub axis_width: f32,
    pub label_color: Color32,
    pub label_font_size: f32,
    /// Gap between the axis and its tick labels
    pub label_offset: f64,
    pub axis_title: &'static str,
    /// Distance of the rotated Y-axis title from the left edge
    pub axis_title_inset: f64,
    pub series_line_width: f32,
    pub min_canvas_width: f32,
}

pub const CANVAS_STYLE: CanvasStyle = CanvasStyle {
    padding: Padding {
        top: 40.0,
        right: 200.0,
        bottom: 60.0,
        left: 80.0,
    },
    background: Color32::from_rgba_premultiplied(14, 14, 14, 230), // rgba(15,15,15,0.9)
    grid_color: Color32::from_rgba_premultiplied(26, 26, 26, 26),  // white @ 10%
    grid_width: 1.0,
    zero_line_color: Color32::from_rgba_premultiplied(77, 77, 77, 77),
    zero_line_dash: 5.0,
    axis_color: Color32::from_rgba_premultiplied(128, 128, 128, 128), // white @ 50%
    axis_width: 2.0,
    label_color: Color32::from_rgba_premultiplied(179, 179, 179, 179), // white @ 70%
    label_font_size: 12.0,
    label_offset: 10.0,
    axis_title: "Funding (bps)",
    axis_title_inset: 20.0,
    series_line_width: 2.0,
    min_canvas_width: 800.0,
};
