use chrono::{DateTime, TimeZone, Utc};

/// Monotonic instant that also exists on wasm32.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_5_MIN: i64 = Self::MS_IN_MIN * 5;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_2_H: i64 = Self::MS_IN_H * 2;
    pub const MS_IN_4_H: i64 = Self::MS_IN_H * 4;
    pub const MS_IN_12_H: i64 = Self::MS_IN_H * 12;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    pub const MS_IN_3_D: i64 = Self::MS_IN_D * 3;
    pub const MS_IN_W: i64 = Self::MS_IN_D * 7;
    pub const MS_IN_2_W: i64 = Self::MS_IN_W * 2;
    pub const MS_IN_30_D: i64 = Self::MS_IN_D * 30;
    pub const CLOCK_FORMAT: &str = "%H:%M";

    /// Convert interval in milliseconds to shorthand (e.g. `5m`, `2h`).
    pub fn interval_to_string(interval_ms: i64) -> &'static str {
        match interval_ms {
            Self::MS_IN_S => "1s",
            Self::MS_IN_MIN => "1m",
            Self::MS_IN_5_MIN => "5m",
            Self::MS_IN_H => "1h",
            Self::MS_IN_2_H => "2h",
            Self::MS_IN_4_H => "4h",
            Self::MS_IN_12_H => "12h",
            Self::MS_IN_D => "1d",
            Self::MS_IN_3_D => "3d",
            Self::MS_IN_W => "1w",
            Self::MS_IN_2_W => "2w",
            Self::MS_IN_30_D => "30d",
            _ => "unknown",
        }
    }

    /// `HH:MM` wall clock of an epoch timestamp in the given zone.
    /// Out-of-range timestamps render as `--:--` rather than panicking.
    pub fn format_clock<Tz: TimeZone>(epoch_ms: i64, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
            Some(dt) => dt
                .with_timezone(tz)
                .format(Self::CLOCK_FORMAT)
                .to_string(),
            None => "--:--".to_string(),
        }
    }
}

/// Source of "now". Injected so generation stays pure.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock. `web_time` keeps this working on wasm32 too.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        web_time::SystemTime::now()
            .duration_since(web_time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}
