use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{ExchangeId, SIMULATOR, TimeRange};

/// One sample of every tracked exchange at a single timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time_ms: i64,
    pub values: BTreeMap<ExchangeId, f64>,
}

impl SeriesPoint {
    pub fn value(&self, id: ExchangeId) -> Option<f64> {
        self.values.get(&id).copied()
    }
}

/// Parameters of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub asset: String,
    pub start_time_ms: i64,
    pub end_time_ms: i64,
    /// Distinguishes one "randomize" press from another. 0 until the user randomizes.
    pub random_seed: i64,
    pub interval_ms: i64,
}

impl SeriesRequest {
    pub fn new(asset: impl Into<String>, start_time_ms: i64, end_time_ms: i64, random_seed: i64) -> Self {
        Self {
            asset: asset.into(),
            start_time_ms,
            end_time_ms,
            random_seed,
            interval_ms: SIMULATOR.interval_ms,
        }
    }

    /// Request covering `range` and ending at `now_ms`.
    pub fn for_range(asset: impl Into<String>, range: TimeRange, now_ms: i64, random_seed: i64) -> Self {
        let (start, end) = range.window_ending_at(now_ms);
        Self::new(asset, start, end, random_seed)
    }

    /// `floor((end - start) / interval)`, never negative and capped at
    /// `SIMULATOR.max_points`.
    pub fn num_points(&self) -> usize {
        if self.interval_ms <= 0 || self.end_time_ms <= self.start_time_ms {
            return 0;
        }
        let span = self.end_time_ms.saturating_sub(self.start_time_ms);
        usize::try_from(span / self.interval_ms)
            .unwrap_or(usize::MAX)
            .min(SIMULATOR.max_points)
    }

    pub fn time_at(&self, index: usize) -> i64 {
        self.start_time_ms + index as i64 * self.interval_ms
    }
}

/// A full generated chart: points in time order, `interval_ms` apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub request: SeriesRequest,
    pub points: Vec<SeriesPoint>,
}

impl SeriesSet {
    pub fn empty(request: SeriesRequest) -> Self {
        Self {
            request,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(first, last)` timestamps, `None` when empty.
    pub fn time_domain(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.time_ms, self.points.last()?.time_ms))
    }

    /// `(time_ms, value)` pairs of one exchange, in time order.
    pub fn series(&self, id: ExchangeId) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.points
            .iter()
            .filter_map(move |p| p.value(id).map(|v| (p.time_ms, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_points_floors_the_span() {
        let req = SeriesRequest::new("BTC", 0, 5 * 300_000 + 299_999, 0);
        assert_eq!(req.num_points(), 5);
    }

    #[test]
    fn inverted_or_empty_range_has_no_points() {
        assert_eq!(SeriesRequest::new("BTC", 1000, 1000, 0).num_points(), 0);
        assert_eq!(SeriesRequest::new("BTC", 1000, 0, 0).num_points(), 0);
    }

    #[test]
    fn non_positive_interval_has_no_points() {
        let mut req = SeriesRequest::new("BTC", 0, 10_000_000, 0);
        req.interval_ms = 0;
        assert_eq!(req.num_points(), 0);
    }

    #[test]
    fn huge_span_is_capped() {
        let req = SeriesRequest::new("BTC", i64::MIN, i64::MAX, 0);
        assert_eq!(req.num_points(), SIMULATOR.max_points);
        assert_eq!(req.time_at(req.num_points() - 1), i64::MIN + 99_999 * 300_000);
    }

    #[test]
    fn longest_range_fits_under_cap() {
        let req = SeriesRequest::for_range("BTC", TimeRange::D30, 1_700_000_000_000, 0);
        assert_eq!(req.num_points(), 8_640);
    }

    #[test]
    fn range_request_spans_window() {
        let req = SeriesRequest::for_range("ETH", TimeRange::H4, 1_700_000_000_000, 9);
        assert_eq!(req.end_time_ms - req.start_time_ms, 4 * 3_600_000);
        assert_eq!(req.num_points(), 48);
        assert_eq!(req.random_seed, 9);
        assert_eq!(req.time_at(2), req.start_time_ms + 600_000);
    }

    #[test]
    fn empty_set_has_no_domain() {
        let set = SeriesSet::empty(SeriesRequest::new("BTC", 0, 0, 0));
        assert!(set.is_empty());
        assert_eq!(set.time_domain(), None);
    }
}
