use chrono::TimeZone;
use eframe::egui::Color32;

use crate::config::ExchangeId;
use crate::domain::SeriesPoint;
use crate::utils::TimeUtils;

use super::visibility::VisibleSeries;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub exchange: ExchangeId,
    pub value: f64,
    pub color: Color32,
    pub text: String,
}

/// Hover readout for one point: its time plus one row per visible series.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub time_ms: i64,
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

impl Tooltip {
    pub fn compose<Tz: TimeZone>(point: &SeriesPoint, visible: &VisibleSeries, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let rows = visible
            .iter()
            .filter_map(|exchange| {
                let value = point.value(exchange)?;
                Some(TooltipRow {
                    exchange,
                    value,
                    color: exchange.color(),
                    text: format!("{}: {:.2} bps", exchange.display_name(), value),
                })
            })
            .collect();

        Self {
            time_ms: point.time_ms,
            title: TimeUtils::format_clock(point.time_ms, tz),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn point() -> SeriesPoint {
        SeriesPoint {
            time_ms: 1_700_000_000_000,
            values: BTreeMap::from([
                (ExchangeId::Binance, 1.234),
                (ExchangeId::Okx, -0.5),
                (ExchangeId::Kuma, 4.999),
            ]),
        }
    }

    #[test]
    fn rows_only_for_visible_series() {
        let visible = VisibleSeries::only([ExchangeId::Okx, ExchangeId::Binance]);
        let tip = Tooltip::compose(&point(), &visible, &Utc);
        assert_eq!(tip.title, "22:13");
        let texts: Vec<&str> = tip.rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["BINANCE: 1.23 bps", "OKX: -0.50 bps"]);
    }

    #[test]
    fn rows_carry_exchange_color() {
        let tip = Tooltip::compose(&point(), &VisibleSeries::only([ExchangeId::Kuma]), &Utc);
        assert_eq!(tip.rows[0].color, ExchangeId::Kuma.color());
        assert_eq!(tip.rows[0].text, "KUMA: 5.00 bps");
    }

    #[test]
    fn nothing_visible_gives_header_only() {
        let tip = Tooltip::compose(&point(), &VisibleSeries::none(), &Utc);
        assert!(tip.rows.is_empty());
        assert_eq!(tip.time_ms, 1_700_000_000_000);
    }

    #[test]
    fn missing_values_are_skipped() {
        // Bybit is visible by default but absent from this point
        let tip = Tooltip::compose(&point(), &VisibleSeries::default(), &Utc);
        assert_eq!(tip.rows.len(), 3);
    }
}
