use crate::domain::SeriesPoint;

/// Index of the point whose time is closest to `query_time_ms`.
/// Linear scan with strict `<`: ties resolve to the earliest point.
pub fn nearest_index(points: &[SeriesPoint], query_time_ms: f64) -> Option<usize> {
    let distance = |p: &SeriesPoint| (p.time_ms as f64 - query_time_ms).abs();

    let (first, rest) = points.split_first()?;
    let mut best = 0;
    let mut min_dist = distance(first);
    for (i, point) in rest.iter().enumerate() {
        let dist = distance(point);
        if dist < min_dist {
            min_dist = dist;
            best = i + 1;
        }
    }
    Some(best)
}

pub fn nearest_point(points: &[SeriesPoint], query_time_ms: f64) -> Option<&SeriesPoint> {
    nearest_index(points, query_time_ms).map(|i| &points[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn points(times: &[i64]) -> Vec<SeriesPoint> {
        times
            .iter()
            .map(|&time_ms| SeriesPoint {
                time_ms,
                values: BTreeMap::new(),
            })
            .collect()
    }

    #[test]
    fn picks_closest_time() {
        let series = points(&[0, 300_000, 600_000]);
        assert_eq!(nearest_point(&series, 250_000.0).map(|p| p.time_ms), Some(300_000));
        assert_eq!(nearest_point(&series, 100_000.0).map(|p| p.time_ms), Some(0));
    }

    #[test]
    fn tie_goes_to_earliest() {
        let series = points(&[0, 300_000, 600_000]);
        assert_eq!(nearest_index(&series, 150_000.0), Some(0));
        assert_eq!(nearest_index(&series, 450_000.0), Some(1));
    }

    #[test]
    fn outside_domain_clamps_to_ends() {
        let series = points(&[0, 300_000, 600_000]);
        assert_eq!(nearest_index(&series, -1e9), Some(0));
        assert_eq!(nearest_index(&series, 1e12), Some(2));
    }

    #[test]
    fn empty_series_has_no_nearest() {
        assert!(nearest_point(&[], 0.0).is_none());
    }

    #[test]
    fn nan_query_falls_back_to_first() {
        let series = points(&[10, 20]);
        assert_eq!(nearest_index(&series, f64::NAN), Some(0));
    }
}
