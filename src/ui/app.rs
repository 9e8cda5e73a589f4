use eframe::egui::{Context, Vec2, Visuals};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::config::RendererKind;
use crate::engine::{SimulatorState, UiEvent};
use crate::ui::UI_CONFIG;
use crate::ui::painter_surface::CanvasView;
use crate::ui::ui_plot_view::PlotView;
use crate::utils::SystemClock;

/// Main application. Only user preferences persist; the series is rebuilt on start.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct FundingSimApp {
    pub(crate) sim: SimulatorState,
    pub(crate) renderer: RendererKind,

    #[serde(skip)]
    pub(crate) plot_view: PlotView,
    #[serde(skip)]
    pub(crate) canvas_view: CanvasView,
    #[serde(skip)]
    pub(crate) last_chart_size: Option<Vec2>,
    #[serde(skip)]
    clock: SystemClock,
}

impl Default for FundingSimApp {
    fn default() -> Self {
        Self {
            sim: SimulatorState::default(),
            renderer: RendererKind::default(),
            plot_view: PlotView::new(),
            canvas_view: CanvasView::new(),
            last_chart_size: None,
            clock: SystemClock,
        }
    }
}

impl FundingSimApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: FundingSimApp = match cc.storage {
            Some(storage) if !args.reset_state => {
                eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
            }
            _ => Self::default(),
        };

        if let Some(range) = args.range {
            app.sim.range = range;
        }
        if let Some(asset) = args.asset {
            app.sim.asset = asset;
        }
        if let Some(renderer) = args.renderer {
            app.renderer = renderer;
        }

        log::info!(
            "Starting: {} over {} (seed {}, {} series visible)",
            app.sim.asset,
            app.sim.range,
            app.sim.random_seed,
            app.sim.visibility.len()
        );

        app
    }

    /// Routes events to the simulator. Returns true if anything was regenerated.
    pub(crate) fn apply_events(&mut self, events: Vec<UiEvent>) -> bool {
        let mut regenerated = false;
        for event in events {
            #[cfg(debug_assertions)]
            log::info!("UI event: {:?}", event);
            regenerated |= self.sim.handle(event, &self.clock);
        }
        regenerated
    }

    /// Regenerates when the chart area changed size. The window end moves to "now" as well.
    pub(crate) fn refresh_on_resize(&mut self, size: Vec2) {
        let changed = self
            .last_chart_size
            .is_some_and(|last| (last - size).length() > 0.5);
        self.last_chart_size = Some(size);
        if changed {
            self.apply_events(vec![UiEvent::Refresh]);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

impl eframe::App for FundingSimApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        ctx.style_mut(|s| s.interaction.selectable_labels = false);

        if self.sim.needs_generation() {
            self.apply_events(vec![UiEvent::Refresh]);
        }

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_legend_panel(ctx);
        self.render_central_panel(ctx);
    }
}
