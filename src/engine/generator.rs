use strum::IntoEnumIterator;

use crate::config::{ExchangeId, SIMULATOR, WalkBounds};
use crate::domain::{SeriesPoint, SeriesRequest, SeriesSet};

use super::seed::combined_seed;
use super::walk::random_walk;

/// Builds the full chart for a request: one independent walk per catalog exchange,
/// sampled every `interval_ms` from `start_time_ms`.
pub fn generate_data(request: &SeriesRequest) -> SeriesSet {
    let num_points = request.num_points();
    if num_points == 0 {
        return SeriesSet::empty(request.clone());
    }

    crate::trace_time!("Generate series set", SIMULATOR.slow_generation_micros, {
        let bounds = WalkBounds::default();

        // Each walk is computed once and indexed per point. Regenerating per point
        // would reseed the RNG and repeat the first value.
        let walks: Vec<(ExchangeId, Vec<f64>)> = ExchangeId::iter()
            .map(|id| {
                let seed = combined_seed(
                    &request.asset,
                    id,
                    request.start_time_ms,
                    request.random_seed,
                );
                (id, random_walk(seed, num_points, bounds))
            })
            .collect();

        let points = (0..num_points)
            .map(|i| SeriesPoint {
                time_ms: request.time_at(i),
                values: walks.iter().map(|(id, walk)| (*id, walk[i])).collect(),
            })
            .collect();

        log::debug!(
            "Generated {} points x {} series for {} (seed {})",
            num_points,
            walks.len(),
            request.asset,
            request.random_seed
        );

        SeriesSet {
            request: request.clone(),
            points,
        }
    })
}

/// Convenience wrapper taking the request fields directly.
pub fn generate_data_for(asset: &str, start_time_ms: i64, end_time_ms: i64, random_seed: i64) -> SeriesSet {
    generate_data(&SeriesRequest::new(asset, start_time_ms, end_time_ms, random_seed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn five_intervals_give_five_points() {
        let set = generate_data_for("BTC", T0, T0 + 5 * 300_000, 0);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_data_for("ETH", T0, T0 + 86_400_000, 1_700_000_123_456);
        let b = generate_data_for("ETH", T0, T0 + 86_400_000, 1_700_000_123_456);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn values_stay_in_bounds() {
        let set = generate_data_for("SOL", T0, T0 + 7 * 86_400_000, 77);
        assert!(
            set.points
                .iter()
                .flat_map(|p| p.values.values())
                .all(|v| (-5.0..=5.0).contains(v))
        );
    }

    #[test]
    fn times_are_evenly_spaced_from_start() {
        let set = generate_data_for("BTC", T0, T0 + 12 * 3_600_000, 0);
        assert_eq!(set.points[0].time_ms, T0);
        assert!(
            set.points
                .windows(2)
                .all(|w| w[1].time_ms - w[0].time_ms == 300_000)
        );
    }

    #[test]
    fn every_point_carries_every_exchange() {
        let set = generate_data_for("DOGE", T0, T0 + 3_600_000, 0);
        assert!(set.points.iter().all(|p| p.values.len() == ExchangeId::COUNT));
    }

    #[test]
    fn random_seed_changes_output() {
        for (asset, seed_a, seed_b) in [
            ("BTC", 1_700_000_000_001, 1_700_000_555_555),
            ("ETH", 0, 1_699_999_999_999),
            ("AVAX", 123_456_789, 987_654_321),
        ] {
            let a = generate_data_for(asset, T0, T0 + 4 * 3_600_000, seed_a);
            let b = generate_data_for(asset, T0, T0 + 4 * 3_600_000, seed_b);
            assert_ne!(a.points, b.points, "seed ignored for {asset}");
        }
    }

    #[test]
    fn negative_random_seeds_are_distinct() {
        let a = generate_data_for("BTC", 0, 3_000_000, -3);
        let b = generate_data_for("BTC", 0, 3_000_000, -7);
        assert_eq!(a.len(), 10);
        assert_ne!(a.points, b.points);
        assert_ne!(a.points, generate_data_for("BTC", 0, 3_000_000, 0).points);

        let expected = random_walk(1_735_115_894, 10, WalkBounds::default());
        let actual: Vec<f64> = a.series(ExchangeId::Binance).map(|(_, v)| v).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn series_matches_standalone_walk() {
        let set = generate_data_for("BTC", T0, T0 + 3 * 300_000, 0);
        let expected = random_walk(
            combined_seed("BTC", ExchangeId::Aster, T0, 0),
            3,
            WalkBounds::default(),
        );
        let actual: Vec<f64> = set.series(ExchangeId::Aster).map(|(_, v)| v).collect();
        assert_eq!(actual, expected);
        assert_eq!(
            actual,
            vec![-0.3994898834019205, -0.4187564300411523, -0.5112461419753087]
        );
    }

    #[test]
    fn invalid_range_is_empty_not_error() {
        assert!(generate_data_for("BTC", T0, T0, 0).is_empty());
        assert!(generate_data_for("BTC", T0, T0 - 1, 0).is_empty());
        assert!(generate_data_for("BTC", T0, T0 + 299_999, 0).is_empty());
    }
}
