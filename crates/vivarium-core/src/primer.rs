//! The pseudo-random primer walk
//!
//! One resolution pass seeds a `Primer` from a host-supplied random
//! draw and then threads it through every weighted trial in order.
//! Each trial advances the walk with `value = (value + now) % 65537`
//! before testing `value % 10000 < threshold`, so later trials depend
//! on the walk position left by earlier ones. The same seed and `now`
//! reproduce the entire boolean sequence bit for bit on any platform.

use serde::{Deserialize, Serialize};

/// Walk modulus. Prime; fixed by the protocol together with
/// [`TRIAL_SCALE`]; changing either changes every derived probability.
pub const PRIMER_MODULUS: i64 = 65537;

/// Trial thresholds are expressed in parts per this scale
pub const TRIAL_SCALE: i64 = 10_000;

/// The evolving integer driving one resolution pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primer {
    value: i64,
}

impl Primer {
    /// Seed a new walk. The seed is reduced into `[0, 65537)`.
    pub fn new(seed: i64) -> Self {
        Self {
            value: seed.rem_euclid(PRIMER_MODULUS),
        }
    }

    /// Current walk value
    ///
    /// Before any trial this is the reduced seed; the base-currency
    /// quantity of a chest resolution is computed from it.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Advance the walk, then test it against a threshold
    ///
    /// `now` must be held constant across all trials of one pass;
    /// only the primer evolves between trials. `threshold` is in
    /// parts per ten thousand.
    pub fn roll_and_test(&mut self, now: i64, threshold: i64) -> bool {
        self.value = (self.value + now) % PRIMER_MODULUS;
        self.value % TRIAL_SCALE < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        // (0 + 100) % 65537 = 100; 100 % 10000 = 100 < 500
        let mut primer = Primer::new(0);
        assert!(primer.roll_and_test(100, 500));
        assert_eq!(primer.value(), 100);
    }

    #[test]
    fn test_determinism() {
        let mut a = Primer::new(31337);
        let mut b = Primer::new(31337);
        for _ in 0..100 {
            assert_eq!(a.roll_and_test(1_550_000_000, 2000), b.roll_and_test(1_550_000_000, 2000));
            assert_eq!(a.value(), b.value());
        }
    }

    #[test]
    fn test_value_stays_in_range() {
        let mut primer = Primer::new(65536);
        for _ in 0..1000 {
            primer.roll_and_test(1_550_000_000, 500);
            assert!(primer.value() >= 0 && primer.value() < PRIMER_MODULUS);
        }
    }

    #[test]
    fn test_seed_reduced() {
        assert_eq!(Primer::new(PRIMER_MODULUS + 5).value(), 5);
        assert_eq!(Primer::new(-1).value(), PRIMER_MODULUS - 1);
    }
}
