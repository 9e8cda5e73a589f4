// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries)
pub use config::{ExchangeId, PERSISTENCE, RendererKind, TimeRange};
pub use domain::{SeriesPoint, SeriesRequest, SeriesSet};
pub use engine::{SimulatorState, UiEvent, generate_data};
pub use ui::FundingSimApp;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Ignore saved preferences and start from defaults
    #[arg(long, default_value_t = false)]
    pub reset_state: bool,

    /// Override the saved asset (e.g. ETH)
    #[arg(long)]
    pub asset: Option<String>,

    /// Override the saved look-back window (4h, 12h, 24h, 3d, 7d, 14d, 30d)
    #[arg(long, value_parser = <TimeRange as std::str::FromStr>::from_str)]
    pub range: Option<TimeRange>,

    /// Override the saved renderer (plot or canvas)
    #[arg(long, value_parser = <RendererKind as std::str::FromStr>::from_str)]
    pub renderer: Option<RendererKind>,
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> FundingSimApp {
    FundingSimApp::new(cc, args)
}
