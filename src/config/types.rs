//! Small enums shared by the UI, the engine and the exporter.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::utils::TimeUtils;

/// Look-back window of the chart. The window always ends at "now".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Default,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeRange {
    #[default]
    #[strum(serialize = "4h")]
    H4,
    #[strum(serialize = "12h")]
    H12,
    #[strum(serialize = "24h")]
    H24,
    #[strum(serialize = "3d")]
    D3,
    #[strum(serialize = "7d")]
    D7,
    #[strum(serialize = "14d")]
    D14,
    #[strum(serialize = "30d")]
    D30,
}

impl TimeRange {
    pub fn duration_ms(self) -> i64 {
        match self {
            Self::H4 => TimeUtils::MS_IN_4_H,
            Self::H12 => TimeUtils::MS_IN_12_H,
            Self::H24 => TimeUtils::MS_IN_D,
            Self::D3 => TimeUtils::MS_IN_3_D,
            Self::D7 => TimeUtils::MS_IN_W,
            Self::D14 => TimeUtils::MS_IN_2_W,
            Self::D30 => TimeUtils::MS_IN_30_D,
        }
    }

    /// `(start, end)` of the window ending at `now_ms`.
    pub fn window_ending_at(self, now_ms: i64) -> (i64, i64) {
        (now_ms.saturating_sub(self.duration_ms()), now_ms)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::H4 => "4 Hours",
            Self::H12 => "12 Hours",
            Self::H24 => "24 Hours",
            Self::D3 => "3 Days",
            Self::D7 => "7 Days",
            Self::D14 => "14 Days",
            Self::D30 => "30 Days",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which renderer draws the chart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    Default,
)]
#[strum(ascii_case_insensitive)]
pub enum RendererKind {
    /// `egui_plot` chart with axis formatting and hover readout.
    #[default]
    #[strum(to_string = "Plot")]
    Plot,
    /// Fixed-layout painter chart.
    #[strum(to_string = "Canvas")]
    Canvas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    /// Per-exchange summary table
    Table,
}
