use serde::{Deserialize, Serialize};

use crate::config::{ASSETS, ExchangeId, TimeRange};
use crate::domain::{SeriesRequest, SeriesSet};
use crate::models::VisibleSeries;
use crate::utils::Clock;

use super::generator::generate_data;

/// Everything the UI can ask the simulator to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    AssetChanged(String),
    RangeChanged(TimeRange),
    SimulatedToggled(bool),
    Randomize,
    ToggleSeries(ExchangeId),
    /// Re-run with current parameters (first frame, resize, "now" moved on)
    Refresh,
}

/// UI-owned simulator state. Parameters persist; the generated set is rebuilt on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorState {
    pub asset: String,
    pub range: TimeRange,
    pub simulated: bool,
    pub random_seed: i64,
    pub visibility: VisibleSeries,

    #[serde(skip)]
    series: Option<SeriesSet>,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            asset: ASSETS.default_symbol.to_string(),
            range: TimeRange::default(),
            simulated: true,
            random_seed: 0,
            visibility: VisibleSeries::default(),
            series: None,
        }
    }
}

impl SimulatorState {
    /// Applies an event. Returns true when the series set was regenerated.
    pub fn handle(&mut self, event: UiEvent, clock: &dyn Clock) -> bool {
        match event {
            UiEvent::AssetChanged(asset) => {
                self.asset = asset;
            }
            UiEvent::RangeChanged(range) => {
                self.range = range;
            }
            UiEvent::SimulatedToggled(on) => {
                self.simulated = on;
            }
            UiEvent::Randomize => {
                // Any distinct value works; the wall clock guarantees a fresh one per click
                self.random_seed = clock.now_ms();
                log::info!("Randomized: seed {}", self.random_seed);
            }
            UiEvent::ToggleSeries(id) => {
                self.visibility.toggle(id);
                return false;
            }
            UiEvent::Refresh => {}
        }
        self.regenerate(clock);
        true
    }

    /// Request for the current parameters, with the window ending at `clock` now.
    pub fn request(&self, clock: &dyn Clock) -> SeriesRequest {
        SeriesRequest::for_range(self.asset.clone(), self.range, clock.now_ms(), self.random_seed)
    }

    fn regenerate(&mut self, clock: &dyn Clock) {
        let request = self.request(clock);
        self.series = Some(if self.simulated {
            generate_data(&request)
        } else {
            SeriesSet::empty(request)
        });
    }

    pub fn series(&self) -> Option<&SeriesSet> {
        self.series.as_ref()
    }

    pub fn needs_generation(&self) -> bool {
        self.series.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn starts_without_series_and_all_visible() {
        let state = SimulatorState::default();
        assert!(state.needs_generation());
        assert_eq!(state.random_seed, 0);
        assert_eq!(state.asset, "BTC");
        assert!(state.visibility.iter().count() > 0);
    }

    #[test]
    fn refresh_generates_window_ending_now() {
        let mut state = SimulatorState::default();
        assert!(state.handle(UiEvent::Refresh, &FixedClock(NOW)));
        let series = state.series().unwrap();
        assert_eq!(series.len(), 48);
        assert_eq!(series.request.end_time_ms, NOW);
    }

    #[test]
    fn randomize_takes_seed_from_clock() {
        let mut state = SimulatorState::default();
        state.handle(UiEvent::Refresh, &FixedClock(NOW));
        let before = state.series().cloned().unwrap();

        state.handle(UiEvent::Randomize, &FixedClock(NOW));
        assert_eq!(state.random_seed, NOW);
        assert_ne!(state.series().unwrap().points, before.points);
    }

    #[test]
    fn toggle_does_not_regenerate() {
        let mut state = SimulatorState::default();
        state.handle(UiEvent::Refresh, &FixedClock(NOW));
        let before = state.series().cloned();

        let regenerated = state.handle(UiEvent::ToggleSeries(ExchangeId::Okx), &FixedClock(NOW + 1));
        assert!(!regenerated);
        assert!(!state.visibility.is_visible(ExchangeId::Okx));
        assert_eq!(state.series().cloned(), before);
    }

    #[test]
    fn asset_and_range_changes_regenerate() {
        let mut state = SimulatorState::default();
        state.handle(UiEvent::AssetChanged("ETH".into()), &FixedClock(NOW));
        assert_eq!(state.series().unwrap().request.asset, "ETH");

        state.handle(UiEvent::RangeChanged(TimeRange::H24), &FixedClock(NOW));
        assert_eq!(state.series().unwrap().len(), 288);
    }

    #[test]
    fn simulated_off_yields_empty_set() {
        let mut state = SimulatorState::default();
        state.handle(UiEvent::SimulatedToggled(false), &FixedClock(NOW));
        assert!(state.series().unwrap().is_empty());

        state.handle(UiEvent::SimulatedToggled(true), &FixedClock(NOW));
        assert!(!state.series().unwrap().is_empty());
    }

    #[test]
    fn persisted_state_skips_series() {
        let mut state = SimulatorState::default();
        state.handle(UiEvent::Randomize, &FixedClock(NOW));
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("points"));

        let restored: SimulatorState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.random_seed, NOW);
        assert!(restored.needs_generation());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let restored: SimulatorState = serde_json::from_str(r#"{"asset":"SOL"}"#).unwrap();
        assert_eq!(restored.asset, "SOL");
        assert_eq!(restored.random_seed, 0);
        assert_eq!(restored.range, TimeRange::H4);
    }
}
