//! Host randomness source
//!
//! Uses a simple xorshift64 algorithm for reproducibility across
//! platforms. This models the platform's per-action `random(bound)`
//! draw: it picks reward delays, seeds each resolution pass's primer,
//! and supplies the trailing throwaway draw after a consumption.
//! Never substitute a non-deterministic source in engine logic.

use serde::{Deserialize, Serialize};

/// A deterministic host random number generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostRng {
    state: u64,
}

impl HostRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // xorshift requires non-zero state
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG from a saved state
    pub fn from_state(state: u64) -> Self {
        Self::new(state)
    }

    /// Get the current state (useful for saving/loading)
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Generate the next raw u64 value
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64 algorithm
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Draw an integer in `[0, bound)`
    pub fn next_below(&mut self, bound: i64) -> i64 {
        debug_assert!(bound > 0);
        (self.next_u64() % bound.max(1) as u64) as i64
    }
}

impl Default for HostRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut a = HostRng::new(42);
        let mut b = HostRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_bounds() {
        let mut rng = HostRng::new(42);
        for _ in 0..1000 {
            let v = rng.next_below(3);
            assert!((0..3).contains(&v));
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = HostRng::new(7);
        rng.next_u64();
        let mut restored = HostRng::from_state(rng.state());
        assert_eq!(restored.next_u64(), rng.next_u64());
    }
}
