use std::f32::consts::FRAC_PI_2;

use chrono::TimeZone;

use crate::config::SIMULATOR;
use crate::config::plot::CanvasStyle;
use crate::domain::SeriesSet;
use crate::models::{ChartViewport, Tooltip, VisibleSeries, nearest_point};
use crate::utils::{TimeUtils, integer_ticks};

use super::surface::{DrawSurface, StrokeStyle, TextAnchor};

/// Draws the full funding chart onto `surface`.
///
/// Returns the viewport used, so hover handling maps pixels with exactly the
/// same transform. `None` when there is nothing to plot (background only).
pub fn draw_chart<S, Tz>(
    surface: &mut S,
    series: &SeriesSet,
    visible: &VisibleSeries,
    style: &CanvasStyle,
    tz: &Tz,
) -> Option<ChartViewport>
where
    S: DrawSurface + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (ox, oy) = surface.origin();
    let (width, height) = surface.size();
    surface.fill_rect((ox, oy), (ox + width, oy + height), style.background);

    let vp = ChartViewport::for_series((width, height), style.padding, series)?.with_origin(ox, oy);
    let (left, right, top, bottom) = (vp.left(), vp.right(), vp.top(), vp.bottom());

    let grid = StrokeStyle::solid(style.grid_width, style.grid_color);
    let value_ticks: Vec<i64> = integer_ticks(vp.bounds.min, vp.bounds.max).collect();
    let time_ticks: Vec<i64> = time_tick_marks(vp.min_time as i64, vp.max_time as i64).collect();

    for &v in &value_ticks {
        let y = vp.y(v as f64);
        surface.stroke_path(&[(left, y), (right, y)], grid);
    }
    for &t in &time_ticks {
        let x = vp.x(t as f64);
        surface.stroke_path(&[(x, top), (x, bottom)], grid);
    }

    let y0 = vp.y(0.0);
    surface.stroke_path(
        &[(left, y0), (right, y0)],
        StrokeStyle::dashed(style.grid_width, style.zero_line_color, style.zero_line_dash),
    );

    // Axes: left, then bottom
    surface.stroke_path(
        &[(left, top), (left, bottom), (right, bottom)],
        StrokeStyle::solid(style.axis_width, style.axis_color),
    );

    for &v in &value_ticks {
        surface.text(
            (left - style.label_offset, vp.y(v as f64)),
            &v.to_string(),
            TextAnchor::RightCenter,
            0.0,
            style.label_font_size,
            style.label_color,
        );
    }
    surface.text(
        (ox + style.axis_title_inset, oy + height / 2.0),
        style.axis_title,
        TextAnchor::Center,
        -FRAC_PI_2,
        style.label_font_size,
        style.label_color,
    );
    for &t in &time_ticks {
        surface.text(
            (vp.x(t as f64), bottom + style.label_offset),
            &TimeUtils::format_clock(t, tz),
            TextAnchor::CenterTop,
            0.0,
            style.label_font_size,
            style.label_color,
        );
    }

    for exchange in visible.iter() {
        let path: Vec<(f64, f64)> = series
            .series(exchange)
            .map(|(t, v)| (vp.x(t as f64), vp.y(v)))
            .collect();
        if path.is_empty() {
            continue;
        }
        surface.stroke_path(
            &path,
            StrokeStyle::solid(style.series_line_width, exchange.color()),
        );
    }

    Some(vp)
}

/// Tooltip for a pointer position, `None` outside the plot area.
pub fn hover_tooltip<Tz>(
    vp: &ChartViewport,
    series: &SeriesSet,
    visible: &VisibleSeries,
    pointer: (f64, f64),
    tz: &Tz,
) -> Option<Tooltip>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !vp.contains(pointer.0, pointer.1) {
        return None;
    }
    let point = nearest_point(&series.points, vp.time_at(pointer.0))?;
    Some(Tooltip::compose(point, visible, tz))
}

fn time_tick_marks(min_time: i64, max_time: i64) -> impl Iterator<Item = i64> {
    (min_time..=max_time).step_by(SIMULATOR.time_tick_ms as usize)
}
