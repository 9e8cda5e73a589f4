//! Synthetic series generation parameters

use crate::utils::TimeUtils;

/// Closed value range of every generated series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkBounds {
    pub min: f64,
    pub max: f64,
}

impl WalkBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for WalkBounds {
    fn default() -> Self {
        SIMULATOR.bounds
    }
}

pub struct LcgConfig {
    pub multiplier: i64,
    pub increment: i64,
    pub modulus: i64,
}

pub struct SimulatorConfig {
    /// Spacing between generated points
    pub interval_ms: i64,
    /// Funding values (bps) are clamped to this range
    pub bounds: WalkBounds,
    /// Each step moves by `(u - 0.5) * step_scale`, u uniform in [0, 1)
    pub step_scale: f64,
    pub lcg: LcgConfig,
    /// Separator between asset, exchange and start time in the seed text
    pub seed_separator: char,
    /// Vertical gridline spacing on the canvas chart
    pub time_tick_ms: i64,
    /// Slow-regeneration warning threshold (microseconds)
    pub slow_generation_micros: u128,
    /// Upper limit on points per request (about 347 days at 5 min)
    pub max_points: usize,
}

pub const SIMULATOR: SimulatorConfig = SimulatorConfig {
    interval_ms: TimeUtils::MS_IN_5_MIN,
    bounds: WalkBounds::new(-5.0, 5.0),
    step_scale: 0.5,
    lcg: LcgConfig {
        multiplier: 9301,
        increment: 49297,
        modulus: 233280,
    },
    seed_separator: '_',
    time_tick_ms: TimeUtils::MS_IN_2_H,
    slow_generation_micros: 20_000,
    max_points: 100_000,
};

// Log slow blocks wrapped in trace_time!
pub const LOG_PERFORMANCE: bool = cfg!(debug_assertions);
