use chrono::Local;
use eframe::egui::{Ui, Vec2b};
use egui_plot::{Axis, AxisHints, GridInput, GridMark, HPlacement, Plot, VPlacement};

use crate::config::{PLOT_CONFIG, SIMULATOR};
use crate::domain::SeriesSet;
use crate::models::VisibleSeries;
use crate::ui::UI_TEXT;
use crate::ui::plot_layers::{HoverLayer, LayerContext, PlotLayer, SeriesLinesLayer, ZeroLineLayer};
use crate::utils::{TimeUtils, integer_ticks};

/// Candidate spacings for labelled time marks, smallest first.
const TIME_STEPS_MS: [i64; 11] = [
    TimeUtils::MS_IN_5_MIN,
    TimeUtils::MS_IN_5_MIN * 3,
    TimeUtils::MS_IN_MIN * 30,
    TimeUtils::MS_IN_H,
    TimeUtils::MS_IN_2_H,
    TimeUtils::MS_IN_4_H,
    TimeUtils::MS_IN_H * 6,
    TimeUtils::MS_IN_12_H,
    TimeUtils::MS_IN_D,
    TimeUtils::MS_IN_D * 2,
    TimeUtils::MS_IN_W,
];

/// Smallest candidate step giving at most `target` marks across `span_ms`.
fn pick_time_step(span_ms: f64, target: f64) -> i64 {
    let wanted = span_ms / target.max(1.0);
    TIME_STEPS_MS
        .iter()
        .copied()
        .find(|&step| step as f64 >= wanted)
        .unwrap_or(TimeUtils::MS_IN_W)
}

/// Grid marks at whole multiples of a step picked from the visible span.
fn time_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let step = pick_time_step(max - min, PLOT_CONFIG.x_axis_mark_target);
    let first = (min / step as f64).ceil() as i64;
    let last = (max / step as f64).floor() as i64;
    (first..=last)
        .map(|i| GridMark {
            value: (i * step) as f64,
            step_size: step as f64,
        })
        .collect()
}

fn value_grid_marks(_input: GridInput) -> Vec<GridMark> {
    let bounds = SIMULATOR.bounds;
    integer_ticks(bounds.min, bounds.max)
        .map(|v| GridMark {
            value: v as f64,
            step_size: 1.0,
        })
        .collect()
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(|mark, _range| TimeUtils::format_clock(mark.value as i64, &Local))
        .placement(VPlacement::Bottom)
}

fn create_value_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|mark, _range| format!("{:.0}", mark.value))
        .placement(HPlacement::Left)
}

/// Interactive chart: X is epoch milliseconds, Y is funding in bps, fixed to the walk bounds.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn new() -> Self {
        Self
    }

    pub fn show_my_plot(&mut self, ui: &mut Ui, series: &SeriesSet, visibility: &VisibleSeries) {
        let Some((min_time, max_time)) = series.time_domain() else {
            return;
        };
        let bounds = SIMULATOR.bounds;

        Plot::new("funding_plot")
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_value_axis()])
            .label_formatter(|_, _| String::new())
            .x_grid_spacer(time_grid_marks)
            .y_grid_spacer(value_grid_marks)
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_drag(Vec2b { x: false, y: false })
            .allow_zoom(Vec2b { x: false, y: false })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(min_time as f64..=max_time as f64);
                plot_ui.set_plot_bounds_y(bounds.min..=bounds.max);

                let ctx = LayerContext { series, visibility };

                let layers: [&dyn PlotLayer; 3] = [&ZeroLineLayer, &SeriesLinesLayer, &HoverLayer];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_hours_gets_half_hour_marks() {
        let step = pick_time_step(TimeUtils::MS_IN_4_H as f64, 8.0);
        assert_eq!(step, TimeUtils::MS_IN_MIN * 30);
    }

    #[test]
    fn thirty_days_gets_weekly_marks() {
        let step = pick_time_step(TimeUtils::MS_IN_30_D as f64, 8.0);
        assert_eq!(step, TimeUtils::MS_IN_W);
    }

    #[test]
    fn huge_span_falls_back_to_largest_step() {
        let step = pick_time_step(TimeUtils::MS_IN_30_D as f64 * 100.0, 8.0);
        assert_eq!(step, TimeUtils::MS_IN_W);
    }
}
