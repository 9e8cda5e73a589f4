use std::io::Write;

use anyhow::{Context, Result};
use csv::Writer as CsvWriter;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::config::{ExchangeId, ExportFormat};
use crate::domain::SeriesSet;

/// Writes `series` in `format`, restricted to `exchanges` (catalog order kept by the caller).
pub fn write_series<W: Write>(
    out: W,
    series: &SeriesSet,
    exchanges: &[ExchangeId],
    format: ExportFormat,
) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(out, series, exchanges),
        ExportFormat::Json => write_json(out, series, exchanges),
        ExportFormat::Table => write_table(out, series, exchanges),
    }
}

/// One row per timestamp: `time_ms` then one column per exchange.
pub fn write_csv<W: Write>(out: W, series: &SeriesSet, exchanges: &[ExchangeId]) -> Result<()> {
    let mut wtr = CsvWriter::from_writer(out);

    let header = std::iter::once("time_ms").chain(exchanges.iter().map(|e| e.as_str()));
    wtr.write_record(header)?;

    for point in &series.points {
        let mut row = Vec::with_capacity(exchanges.len() + 1);
        row.push(point.time_ms.to_string());
        row.extend(
            exchanges
                .iter()
                .map(|&e| point.value(e).map(|v| v.to_string()).unwrap_or_default()),
        );
        wtr.write_record(&row)?;
    }
    wtr.flush().context("flushing csv output")?;
    Ok(())
}

#[derive(Serialize)]
struct ExchangeMeta {
    id: ExchangeId,
    name: String,
    color: String,
}

#[derive(Serialize)]
struct JsonPoint<'a> {
    time_ms: i64,
    values: Vec<(&'a str, f64)>,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    asset: &'a str,
    start_time_ms: i64,
    end_time_ms: i64,
    interval_ms: i64,
    random_seed: i64,
    exchanges: Vec<ExchangeMeta>,
    points: Vec<JsonPoint<'a>>,
}

/// Request parameters, exchange metadata and the points as pretty JSON.
pub fn write_json<W: Write>(mut out: W, series: &SeriesSet, exchanges: &[ExchangeId]) -> Result<()> {
    let req = &series.request;
    let doc = JsonExport {
        asset: &req.asset,
        start_time_ms: req.start_time_ms,
        end_time_ms: req.end_time_ms,
        interval_ms: req.interval_ms,
        random_seed: req.random_seed,
        exchanges: exchanges
            .iter()
            .map(|&id| ExchangeMeta {
                id,
                name: id.display_name(),
                color: id.color_hex(),
            })
            .collect(),
        points: series
            .points
            .iter()
            .map(|p| JsonPoint {
                time_ms: p.time_ms,
                values: exchanges
                    .iter()
                    .filter_map(|&e| Some((e.as_str(), p.value(e)?)))
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut out, &doc)?;
    writeln!(out)?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ExchangeSummary {
    #[tabled(rename = "Exchange")]
    pub name: String,
    #[tabled(rename = "Min (bps)", display_with = "fmt_bps")]
    pub min: f64,
    #[tabled(rename = "Max (bps)", display_with = "fmt_bps")]
    pub max: f64,
    #[tabled(rename = "Last (bps)", display_with = "fmt_bps")]
    pub last: f64,
}

fn fmt_bps(v: &f64) -> String {
    format!("{v:.2}")
}

/// Per-exchange min/max/last. Exchanges with no points are left out.
pub fn summarize(series: &SeriesSet, exchanges: &[ExchangeId]) -> Vec<ExchangeSummary> {
    exchanges
        .iter()
        .filter_map(|&e| {
            let (min, max) = match series.series(e).map(|(_, v)| v).minmax_by(f64::total_cmp) {
                MinMaxResult::NoElements => return None,
                MinMaxResult::OneElement(v) => (v, v),
                MinMaxResult::MinMax(lo, hi) => (lo, hi),
            };
            let (_, last) = series.series(e).last()?;
            Some(ExchangeSummary {
                name: e.display_name(),
                min,
                max,
                last,
            })
        })
        .collect()
}

pub fn write_table<W: Write>(mut out: W, series: &SeriesSet, exchanges: &[ExchangeId]) -> Result<()> {
    let req = &series.request;
    writeln!(
        out,
        "{} | {} points | seed {}",
        req.asset,
        series.len(),
        req.random_seed
    )?;
    let mut table = Table::new(summarize(series, exchanges));
    table.with(Style::rounded());
    writeln!(out, "{table}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::generate_data_for;
    use approx::assert_relative_eq;

    const T0: i64 = 1_700_000_000_000;

    fn sample() -> SeriesSet {
        generate_data_for("BTC", T0, T0 + 15 * 60 * 1000, 0)
    }

    fn render(format: ExportFormat, exchanges: &[ExchangeId]) -> String {
        let mut buf = Vec::new();
        write_series(&mut buf, &sample(), exchanges, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_has_header_and_row_per_point() {
        let text = render(ExportFormat::Csv, &[ExchangeId::Binance, ExchangeId::Okx]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "time_ms,binance,okx");
        assert_eq!(lines.len(), 1 + 3);
        assert!(lines[1].starts_with(&T0.to_string()));
    }

    #[test]
    fn csv_values_read_back_exactly() {
        let series = sample();
        let mut buf = Vec::new();
        write_csv(&mut buf, &series, &[ExchangeId::Aster]).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let values: Vec<f64> = rdr
            .records()
            .map(|r| r.unwrap()[1].parse().unwrap())
            .collect();
        let expected: Vec<f64> = series.series(ExchangeId::Aster).map(|(_, v)| v).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn json_carries_request_and_colors() {
        let text = render(ExportFormat::Json, &[ExchangeId::Binance]);
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["asset"], "BTC");
        assert_eq!(doc["start_time_ms"], T0);
        assert_eq!(doc["exchanges"][0]["id"], "binance");
        assert_eq!(doc["exchanges"][0]["color"], "#F3BA2F");
        assert_eq!(doc["points"].as_array().unwrap().len(), 3);
        assert_eq!(doc["points"][0]["values"][0][0], "binance");
    }

    #[test]
    fn summary_tracks_min_max_last() {
        let series = sample();
        let summary = summarize(&series, &[ExchangeId::Aster]);
        assert_eq!(summary.len(), 1);
        // Reference walk for BTC/aster at T0
        assert_relative_eq!(summary[0].min, -0.5112461419753087);
        assert_relative_eq!(summary[0].max, -0.3994898834019205);
        assert_relative_eq!(summary[0].last, -0.5112461419753087);
    }

    #[test]
    fn summary_of_empty_set_is_empty() {
        let empty = generate_data_for("BTC", T0, T0, 0);
        assert!(summarize(&empty, &[ExchangeId::Okx]).is_empty());
    }

    #[test]
    fn table_lists_selected_exchanges() {
        let text = render(ExportFormat::Table, &[ExchangeId::Kucoin, ExchangeId::Drift]);
        assert!(text.starts_with("BTC | 3 points | seed 0"));
        assert!(text.contains("KUCOIN"));
        assert!(text.contains("DRIFT"));
        assert!(!text.contains("OKX"));
    }
}
