use chrono::Local;
use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Id, LayerId, Order, Painter, Pos2, Rect, Sense, Shape,
    Stroke, Ui, epaint::TextShape, pos2, vec2,
};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use crate::config::{CANVAS_STYLE, PLOT_CONFIG};
use crate::domain::SeriesSet;
use crate::models::VisibleSeries;
use crate::render::{DrawSurface, StrokeStyle, TextAnchor, draw_chart, hover_tooltip};
use crate::ui::plot_layers::tooltip_body;

/// `DrawSurface` over an egui painter, clipped to `rect`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }
}

fn to_pos((x, y): (f64, f64)) -> Pos2 {
    pos2(x as f32, y as f32)
}

impl DrawSurface for PainterSurface<'_> {
    fn origin(&self) -> (f64, f64) {
        (self.rect.left() as f64, self.rect.top() as f64)
    }

    fn size(&self) -> (f64, f64) {
        (self.rect.width() as f64, self.rect.height() as f64)
    }

    fn fill_rect(&mut self, min: (f64, f64), max: (f64, f64), color: Color32) {
        self.painter.rect_filled(
            Rect::from_min_max(to_pos(min), to_pos(max)),
            CornerRadius::ZERO,
            color,
        );
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let path: Vec<Pos2> = points.iter().copied().map(to_pos).collect();
        let egui_stroke = Stroke::new(stroke.width, stroke.color);
        match stroke.dash {
            Some(dash) => {
                self.painter
                    .extend(Shape::dashed_line(&path, egui_stroke, dash, dash));
            }
            None => {
                self.painter.add(Shape::line(path, egui_stroke));
            }
        }
    }

    fn text(
        &mut self,
        pos: (f64, f64),
        text: &str,
        anchor: TextAnchor,
        angle: f32,
        font_size: f32,
        color: Color32,
    ) {
        let font = FontId::proportional(font_size);
        if angle == 0.0 {
            let align = match anchor {
                TextAnchor::RightCenter => Align2::RIGHT_CENTER,
                TextAnchor::CenterTop => Align2::CENTER_TOP,
                TextAnchor::Center => Align2::CENTER_CENTER,
            };
            self.painter.text(to_pos(pos), align, text, font, color);
            return;
        }

        // Rotated text: the galley rotates around its top-left corner, so offset
        // that corner so the requested anchor ends up at `pos`.
        let galley = self.painter.layout_no_wrap(text.to_string(), font, color);
        let size = galley.size();
        let local_anchor = match anchor {
            TextAnchor::RightCenter => vec2(size.x, size.y / 2.0),
            TextAnchor::CenterTop => vec2(size.x / 2.0, 0.0),
            TextAnchor::Center => size / 2.0,
        };
        let (sin, cos) = angle.sin_cos();
        let rotated = vec2(
            local_anchor.x * cos - local_anchor.y * sin,
            local_anchor.x * sin + local_anchor.y * cos,
        );
        let top_left = to_pos(pos) - rotated;
        self.painter
            .add(TextShape::new(top_left, galley, color).with_angle(angle));
    }
}

/// Fixed-layout chart painted straight onto the panel, with the same hover readout as the plot.
#[derive(Default)]
pub struct CanvasView;

impl CanvasView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, series: &SeriesSet, visibility: &VisibleSeries) {
        let available = ui.available_size();
        let size = vec2(available.x.max(CANVAS_STYLE.min_canvas_width), available.y);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());

        let mut surface = PainterSurface::new(&painter, response.rect);
        let Some(viewport) = draw_chart(&mut surface, series, visibility, &CANVAS_STYLE, &Local)
        else {
            return;
        };

        let Some(hover) = response.hover_pos() else {
            return;
        };
        let pointer = (hover.x as f64, hover.y as f64);
        let Some(tooltip) = hover_tooltip(&viewport, series, visibility, pointer, &Local) else {
            return;
        };

        let x = viewport.x(tooltip.time_ms as f64) as f32;
        painter.line_segment(
            [
                pos2(x, viewport.top() as f32),
                pos2(x, viewport.bottom() as f32),
            ],
            Stroke::new(1.0, PLOT_CONFIG.hover_line_color),
        );

        let tooltip_layer = LayerId::new(Order::Tooltip, Id::new("canvas_tooltip"));
        #[allow(deprecated)]
        show_tooltip_at_pointer(
            ui.ctx(),
            tooltip_layer,
            Id::new("canvas_tooltip_body"),
            |ui: &mut Ui| tooltip_body(ui, &tooltip),
        );
    }
}
