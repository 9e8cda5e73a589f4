use {
    crate::{config::PLOT_CONFIG, ui::UI_CONFIG},
    eframe::egui::{
        Color32, CornerRadius, Rect, Response, RichText, Sense, Stroke, StrokeKind, TextStyle, Ui,
        Vec2, WidgetInfo, WidgetType, pos2,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

/// Positive funding in green, negative in red, zero neutral.
pub fn get_funding_color(value: f64) -> Color32 {
    if value > 0.0 {
        PLOT_CONFIG.color_positive
    } else if value < 0.0 {
        PLOT_CONFIG.color_negative
    } else {
        PLOT_CONFIG.color_text_neutral
    }
}

/// True when a series color would vanish against the dark chart background.
pub fn is_too_dark(color: Color32) -> bool {
    color.r().max(color.g()).max(color.b()) < PLOT_CONFIG.min_line_luminance
}

pub(crate) trait UiStyleExt {
    /// Legend row: color swatch plus upper-case name. Dimmed when hidden. Clickable.
    fn legend_entry(&mut self, name: &str, color: Color32, visible: bool) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn legend_entry(&mut self, name: &str, color: Color32, visible: bool) -> Response {
        let [swatch_w, swatch_h] = UI_CONFIG.legend_swatch;
        let padding = Vec2::new(4.0, 3.0);
        let text_color = if visible {
            PLOT_CONFIG.color_text_primary
        } else {
            PLOT_CONFIG.color_hidden_series
        };
        let font_id = TextStyle::Body.resolve(self.style());
        let galley = self
            .painter()
            .layout_no_wrap(name.to_string(), font_id, text_color);

        let desired = Vec2::new(
            swatch_w + padding.x * 3.0 + galley.size().x,
            galley.size().y.max(swatch_h) + padding.y * 2.0,
        );
        let (rect, response) = self.allocate_exact_size(desired, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Checkbox, true, visible, name));

        if self.is_rect_visible(rect) {
            if response.hovered() {
                self.painter().rect(
                    rect,
                    CornerRadius::same(4),
                    self.style().visuals.widgets.hovered.bg_fill,
                    Stroke::NONE,
                    StrokeKind::Inside,
                );
            }

            let swatch_color = if visible {
                color
            } else {
                PLOT_CONFIG.color_hidden_series
            };
            let swatch = Rect::from_center_size(
                pos2(rect.left() + padding.x + swatch_w / 2.0, rect.center().y),
                Vec2::new(swatch_w, swatch_h),
            );
            self.painter().rect_filled(swatch, CornerRadius::ZERO, swatch_color);
            if is_too_dark(swatch_color) {
                self.painter().rect_stroke(
                    swatch,
                    CornerRadius::ZERO,
                    Stroke::new(1.0, PLOT_CONFIG.fallback_line_color),
                    StrokeKind::Outside,
                );
            }

            let text_pos = pos2(
                swatch.right() + padding.x * 2.0,
                rect.center().y - galley.size().y / 2.0,
            );
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExchangeId;

    #[test]
    fn okx_black_counts_as_too_dark() {
        assert!(is_too_dark(ExchangeId::Okx.color()));
        assert!(!is_too_dark(ExchangeId::Binance.color()));
        assert!(!is_too_dark(ExchangeId::Cryptocom.color()));
    }

    #[test]
    fn funding_sign_picks_color() {
        assert_eq!(get_funding_color(0.3), PLOT_CONFIG.color_positive);
        assert_eq!(get_funding_color(-0.3), PLOT_CONFIG.color_negative);
        assert_eq!(get_funding_color(0.0), PLOT_CONFIG.color_text_neutral);
    }
}
