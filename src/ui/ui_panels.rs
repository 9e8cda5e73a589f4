use eframe::egui::{Button, ComboBox, RichText, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::config::{ASSETS, ExchangeId, RendererKind, TimeRange};
use crate::engine::{SimulatorState, UiEvent};
use crate::ui::UI_TEXT;
use crate::ui::styles::{UiStyleExt, get_funding_color};

/// A piece of UI that reports what the user did as events instead of mutating state.
pub(crate) trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Top toolbar: asset, range, simulated flag, randomize and renderer choice.
pub struct ControlsPanel<'a> {
    state: &'a SimulatorState,
    renderer: &'a mut RendererKind,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(state: &'a SimulatorState, renderer: &'a mut RendererKind) -> Self {
        Self { state, renderer }
    }
}

impl Panel for ControlsPanel<'_> {
    type Event = UiEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<UiEvent> {
        let mut events = Vec::new();

        ui.label(&UI_TEXT.tb_asset);
        ComboBox::from_id_salt("asset_select")
            .selected_text(&self.state.asset)
            .show_ui(ui, |ui| {
                for &symbol in ASSETS.symbols {
                    if ui
                        .selectable_label(self.state.asset == symbol, symbol)
                        .clicked()
                        && self.state.asset != symbol
                    {
                        events.push(UiEvent::AssetChanged(symbol.to_string()));
                    }
                }
            });

        ui.label(&UI_TEXT.tb_range);
        ComboBox::from_id_salt("range_select")
            .selected_text(self.state.range.label())
            .show_ui(ui, |ui| {
                for range in TimeRange::iter() {
                    if ui
                        .selectable_label(self.state.range == range, range.label())
                        .clicked()
                        && self.state.range != range
                    {
                        events.push(UiEvent::RangeChanged(range));
                    }
                }
            });

        ui.separator();

        let mut simulated = self.state.simulated;
        if ui.checkbox(&mut simulated, &UI_TEXT.tb_simulated).changed() {
            events.push(UiEvent::SimulatedToggled(simulated));
        }

        if ui
            .add_enabled(self.state.simulated, Button::new(&UI_TEXT.tb_randomize))
            .clicked()
        {
            events.push(UiEvent::Randomize);
        }

        ui.separator();

        ui.label(&UI_TEXT.tb_renderer);
        for kind in RendererKind::iter() {
            ui.selectable_value(self.renderer, kind, kind.to_string());
        }

        events
    }
}

/// Clickable legend. Each entry toggles its exchange.
pub struct LegendPanel<'a> {
    state: &'a SimulatorState,
}

impl<'a> LegendPanel<'a> {
    pub fn new(state: &'a SimulatorState) -> Self {
        Self { state }
    }

    fn last_value(&self, id: ExchangeId) -> Option<f64> {
        self.state.series()?.points.last()?.value(id)
    }
}

impl Panel for LegendPanel<'_> {
    type Event = UiEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<UiEvent> {
        let mut events = Vec::new();

        ui.label_subheader(&UI_TEXT.legend_heading);
        ui.label_subdued(&UI_TEXT.legend_hint);
        ui.separator();

        ScrollArea::vertical()
            .id_salt("legend_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for id in ExchangeId::iter() {
                    let visible = self.state.visibility.is_visible(id);
                    ui.horizontal(|ui| {
                        if ui
                            .legend_entry(&id.display_name(), id.color(), visible)
                            .clicked()
                        {
                            events.push(UiEvent::ToggleSeries(id));
                        }
                        if let Some(value) = self.last_value(id).filter(|_| visible) {
                            ui.label(
                                RichText::new(format!("{value:+.2}"))
                                    .small()
                                    .color(get_funding_color(value)),
                            );
                        }
                    });
                }
            });

        events
    }
}
