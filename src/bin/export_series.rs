use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;

use funding_sim::config::{ExchangeId, ExportFormat, TimeRange};
use funding_sim::data::write_series;
use funding_sim::domain::SeriesRequest;
use funding_sim::engine::{generate_data, sanitize_random_seed};
use funding_sim::utils::{Clock, SystemClock, TimeUtils};

/// Generate a synthetic funding-rate series set and write it to a file or stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ExportArgs {
    /// Asset symbol hashed into every series seed
    #[arg(long, default_value = "BTC")]
    asset: String,

    /// Look-back window: 4h, 12h, 24h, 3d, 7d, 14d or 30d
    #[arg(long, default_value = "4h", value_parser = TimeRange::from_str)]
    range: TimeRange,

    /// Window end (epoch ms). Defaults to now.
    #[arg(long)]
    end_ms: Option<i64>,

    /// Extra seed added to every series (may be negative). Non-finite values count as 0.
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<f64>,

    /// csv, json or table
    #[arg(long, default_value = "csv", value_parser = ExportFormat::from_str)]
    format: ExportFormat,

    /// Comma-separated exchange ids. Defaults to the whole catalog.
    #[arg(long, value_delimiter = ',', value_parser = ExchangeId::from_str)]
    exchanges: Vec<ExchangeId>,

    /// Output file. Defaults to stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ExportArgs::parse();

    let end_ms = args.end_ms.unwrap_or_else(|| SystemClock.now_ms());
    let random_seed = sanitize_random_seed(args.seed);
    let request = SeriesRequest::for_range(args.asset.clone(), args.range, end_ms, random_seed);

    let mut exchanges = if args.exchanges.is_empty() {
        ExchangeId::iter().collect()
    } else {
        args.exchanges
    };
    exchanges.sort();
    exchanges.dedup();

    log::info!(
        "Exporting {} over {} ({} points @ {}) as {}",
        request.asset,
        args.range,
        request.num_points(),
        TimeUtils::interval_to_string(request.interval_ms),
        args.format
    );

    let series = generate_data(&request);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_series(&mut out, &series, &exchanges, args.format)?;
            out.flush()?;
            log::info!("Wrote {} rows to {}", series.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_series(stdout.lock(), &series, &exchanges, args.format)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
