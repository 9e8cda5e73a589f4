//! Stable per-series seeds.

use crate::config::{ExchangeId, SIMULATOR};

/// Polynomial (x31) hash of `"{asset}_{series_id}_{start_time_ms}"` over UTF-16 code units,
/// wrapped to i32, returned as its absolute value.
pub fn derive_seed(asset: &str, series_id: &str, start_time_ms: i64) -> u32 {
    let sep = SIMULATOR.seed_separator;
    let text = format!("{asset}{sep}{series_id}{sep}{start_time_ms}");
    text.encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Seed of one exchange's walk for one request.
/// Negative random seeds lower the seed; the sum may go negative.
pub fn combined_seed(asset: &str, exchange: ExchangeId, start_time_ms: i64, random_seed: i64) -> i64 {
    i64::from(derive_seed(asset, exchange.as_str(), start_time_ms)).wrapping_add(random_seed)
}

/// Float seed to integer seed. NaN and infinities become 0, fractions are truncated
/// toward zero.
fn sanitize_seed(raw: f64) -> i64 {
    if raw.is_finite() { raw.trunc() as i64 } else { 0 }
}

/// Missing seeds behave like 0.
pub fn sanitize_random_seed(raw: Option<f64>) -> i64 {
    raw.map_or(0, sanitize_seed)
}
