use crate::config::{SIMULATOR, WalkBounds};

use super::rng::SeededRng;

/// Bounded random walk of exactly `num_points` values.
///
/// The first draw places the walk uniformly inside `bounds`; every emitted value
/// (the first one included) is that position plus one more clamped step.
pub fn random_walk(seed: i64, num_points: usize, bounds: WalkBounds) -> Vec<f64> {
    let mut rng = SeededRng::new(seed);
    let mut current = rng.next_f64() * bounds.span() + bounds.min;

    (0..num_points)
        .map(|_| {
            let delta = (rng.next_f64() - 0.5) * SIMULATOR.step_scale;
            current = bounds.clamp(current + delta);
            current
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_one_reference_values() {
        let walk = random_walk(1, 3, WalkBounds::default());
        assert_eq!(
            walk,
            vec![-2.465417095336077, -2.544266546639232, -2.3173525377229085]
        );
    }

    #[test]
    fn seed_zero_reference_values() {
        let walk = random_walk(0, 2, WalkBounds::default());
        assert_eq!(walk, vec![-2.782077331961591, -2.758691272290809]);
    }

    #[test]
    fn first_value_is_already_stepped() {
        // Raw placement for seed 1 is 58598/233280 * 10 - 5; the first output differs from it.
        let placement = 58598.0 / 233280.0 * 10.0 - 5.0;
        let walk = random_walk(1, 1, WalkBounds::default());
        assert_eq!(walk.len(), 1);
        assert_ne!(walk[0], placement);
    }

    #[test]
    fn zero_points_is_empty() {
        assert!(random_walk(42, 0, WalkBounds::default()).is_empty());
    }

    #[test]
    fn stays_within_bounds() {
        let bounds = WalkBounds::new(-0.3, 0.3);
        let walk = random_walk(123_456, 20_000, bounds);
        assert!(walk.iter().all(|v| bounds.contains(*v)));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = random_walk(1_356_671_060, 500, WalkBounds::default());
        let b = random_walk(1_356_671_060, 500, WalkBounds::default());
        assert_eq!(
            a.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn steps_are_small() {
        let walk = random_walk(99, 1_000, WalkBounds::default());
        assert!(walk.windows(2).all(|w| (w[1] - w[0]).abs() <= SIMULATOR.step_scale / 2.0));
    }
}
