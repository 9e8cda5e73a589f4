use eframe::egui::{
    CentralPanel, Context, Direction, Layout, RichText, SidePanel, TopBottomPanel, Ui,
};

use crate::config::{PLOT_CONFIG, RendererKind};
use crate::ui::app::FundingSimApp;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlsPanel, LegendPanel, Panel};
use crate::ui::{UI_CONFIG, UI_TEXT};
use crate::utils::{TimeUtils, format_duration};

impl FundingSimApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                let events = ui
                    .horizontal(|ui| {
                        ControlsPanel::new(&self.sim, &mut self.renderer).render(ui)
                    })
                    .inner;
                if self.apply_events(events) {
                    ctx.request_repaint();
                }
            });
    }

    pub(super) fn render_legend_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.side_panel_frame();

        SidePanel::right("legend_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                let events = LegendPanel::new(&self.sim).render(ui);
                self.apply_events(events);
            });
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();

        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_series(ui);
                });
            });
    }

    fn render_status_series(&self, ui: &mut Ui) {
        let Some(series) = self.sim.series() else {
            return;
        };
        let req = &series.request;

        ui.metric(
            &UI_TEXT.sb_points,
            &format!(
                "{} @ {} over {}",
                series.len(),
                TimeUtils::interval_to_string(req.interval_ms),
                format_duration(req.end_time_ms - req.start_time_ms)
            ),
            PLOT_CONFIG.color_text_neutral,
        );
        ui.separator();
        ui.metric(
            &UI_TEXT.sb_seed,
            &req.random_seed.to_string(),
            PLOT_CONFIG.color_text_neutral,
        );
        ui.separator();
        ui.metric(
            &UI_TEXT.sb_visible,
            &self.sim.visibility.len().to_string(),
            PLOT_CONFIG.color_text_neutral,
        );
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            self.refresh_on_resize(ui.available_size());

            let Some(series) = self.sim.series() else {
                return;
            };

            if series.is_empty() {
                let message = if self.sim.simulated {
                    &UI_TEXT.cp_no_points
                } else {
                    &UI_TEXT.cp_simulation_off
                };
                ui.with_layout(Layout::centered_and_justified(Direction::TopDown), |ui| {
                    ui.label(RichText::new(message).color(PLOT_CONFIG.color_text_subdued));
                });
                return;
            }

            ui.label(
                RichText::new(format!("{} {}", self.sim.asset, UI_TEXT.plot_title))
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );

            match self.renderer {
                RendererKind::Plot => {
                    self.plot_view.show_my_plot(ui, series, &self.sim.visibility);
                }
                RendererKind::Canvas => {
                    self.canvas_view.show(ui, series, &self.sim.visibility);
                }
            }
        });
    }
}
