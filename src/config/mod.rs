//! Configuration module for the funding simulator.

mod catalog;
mod persistence;
mod simulator;
mod types;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use catalog::{ASSETS, AssetCatalog, ExchangeId};
pub use persistence::PERSISTENCE;
pub use plot::{CANVAS_STYLE, PLOT_CONFIG};
pub use simulator::{LOG_PERFORMANCE, SIMULATOR, WalkBounds};
pub use types::{ExportFormat, RendererKind, TimeRange};
