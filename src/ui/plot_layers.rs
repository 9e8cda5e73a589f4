use chrono::Local;
use eframe::egui::{Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{HLine, Line, LineStyle, PlotPoints, PlotUi, VLine};

use crate::config::PLOT_CONFIG;
use crate::domain::SeriesSet;
use crate::models::{Tooltip as FundingTooltip, VisibleSeries, nearest_point};
use crate::ui::styles::is_too_dark;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub series: &'a SeriesSet,
    pub visibility: &'a VisibleSeries,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. ZERO LINE
// ============================================================================
pub struct ZeroLineLayer;

impl PlotLayer for ZeroLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new("", 0.0)
                .color(PLOT_CONFIG.zero_line_color)
                .width(PLOT_CONFIG.zero_line_width)
                .style(LineStyle::Dashed {
                    length: PLOT_CONFIG.zero_line_dash,
                }),
        );
    }
}

// ============================================================================
// 2. SERIES LINES (one per visible exchange)
// ============================================================================
pub struct SeriesLinesLayer;

impl PlotLayer for SeriesLinesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for exchange in ctx.visibility.iter() {
            let points: Vec<[f64; 2]> = ctx
                .series
                .series(exchange)
                .map(|(t, v)| [t as f64, v])
                .collect();
            if points.is_empty() {
                continue;
            }

            let color = exchange.color();
            // Black lines get a light halo so they stay visible on the dark background
            if is_too_dark(color) {
                plot_ui.line(
                    Line::new("", PlotPoints::new(points.clone()))
                        .color(PLOT_CONFIG.fallback_line_color)
                        .width(PLOT_CONFIG.series_line_width + 2.0),
                );
            }
            plot_ui.line(
                Line::new(exchange.display_name(), PlotPoints::new(points))
                    .color(color)
                    .width(PLOT_CONFIG.series_line_width),
            );
        }
    }
}

// ============================================================================
// 3. HOVER (cursor line + tooltip of the nearest point)
// ============================================================================
pub struct HoverLayer;

impl PlotLayer for HoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(pointer) = plot_ui.pointer_coordinate() else {
            return;
        };
        let Some(point) = nearest_point(&ctx.series.points, pointer.x) else {
            return;
        };

        plot_ui.vline(
            VLine::new("", point.time_ms as f64)
                .color(PLOT_CONFIG.hover_line_color)
                .width(1.0),
        );

        let tooltip = FundingTooltip::compose(point, ctx.visibility, &Local);
        let tooltip_layer = LayerId::new(Tooltip, Id::new("funding_tooltip"));

        #[allow(deprecated)]
        show_tooltip_at_pointer(
            plot_ui.ctx(),
            tooltip_layer,
            Id::new("funding_tooltip_body"),
            |ui: &mut Ui| tooltip_body(ui, &tooltip),
        );
    }
}

/// Header plus one colored row per visible exchange. Shared by both renderers.
pub(crate) fn tooltip_body(ui: &mut Ui, tooltip: &FundingTooltip) {
    ui.label(
        RichText::new(&tooltip.title)
            .strong()
            .color(PLOT_CONFIG.color_text_primary),
    );
    if !tooltip.rows.is_empty() {
        ui.separator();
    }
    for row in &tooltip.rows {
        let color = if is_too_dark(row.color) {
            PLOT_CONFIG.fallback_line_color
        } else {
            row.color
        };
        ui.label(RichText::new(&row.text).small().color(color));
    }
}
