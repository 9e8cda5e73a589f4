use eframe::egui::Color32;

/// Where a text label sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Right edge, vertically centered (Y tick labels)
    RightCenter,
    /// Horizontally centered, top edge (X tick labels)
    CenterTop,
    /// Centered both ways (rotated axis title)
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: Color32,
    /// Dash and gap length in pixels; `None` draws a solid line
    pub dash: Option<f32>,
}

impl StrokeStyle {
    pub const fn solid(width: f32, color: Color32) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub const fn dashed(width: f32, color: Color32, dash: f32) -> Self {
        Self {
            width,
            color,
            dash: Some(dash),
        }
    }
}

/// Minimal immediate-mode drawing target. Coordinates are pixels, y grows downwards.
pub trait DrawSurface {
    /// Top-left corner of the drawable area.
    fn origin(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Width and height in pixels.
    fn size(&self) -> (f64, f64);

    fn fill_rect(&mut self, min: (f64, f64), max: (f64, f64), color: Color32);

    /// Strokes an open polyline (`move_to` the first point, `line_to` the rest).
    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: StrokeStyle);

    /// Draws `text` at `pos`. `angle` is in radians, clockwise.
    fn text(
        &mut self,
        pos: (f64, f64),
        text: &str,
        anchor: TextAnchor,
        angle: f32,
        font_size: f32,
        color: Color32,
    );
}
