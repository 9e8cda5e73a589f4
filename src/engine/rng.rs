use crate::config::SIMULATOR;

/// Linear-congruential generator: `state = (state * 9301 + 49297) mod 233280`,
/// yielding `state / 233280` in `[0, 1)`.
///
/// The state is reduced with `rem_euclid(233280)` before multiplying, so any `i64`
/// seed (negative included) is accepted without overflow. Seeds in `[0, 233280)`
/// follow the plain recurrence exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    pub fn new(seed: i64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        let lcg = &SIMULATOR.lcg;
        self.state =
            (self.state.rem_euclid(lcg.modulus) * lcg.multiplier + lcg.increment) % lcg.modulus;
        self.state as f64 / lcg.modulus as f64
    }
}
