/// Linearly maps a value from one range to another while preserving its relative proportion.
/// A degenerate input range maps everything to `out_min`.
#[inline]
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span.abs() <= f64::EPSILON {
        return out_min;
    }
    let t = (val - in_min) / span;
    out_min + t * (out_max - out_min)
}

/// Inclusive integer ticks covering `[min, max]`, e.g. `-5..=5` for the funding axis.
pub(crate) fn integer_ticks(min: f64, max: f64) -> impl Iterator<Item = i64> {
    (min.ceil() as i64)..=(max.floor() as i64)
}
