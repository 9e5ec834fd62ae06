//! Integer-second simulation clock
//!
//! Stands in for the platform's `now()`: monotonic, non-decreasing,
//! advanced explicitly by the host between actions. All protocol
//! arithmetic (cooldown windows, reward delays) is plain integer
//! seconds.

use serde::{Deserialize, Serialize};

/// Seconds per hour
pub const HOUR: i64 = 3600;

/// Seconds per day; the daily-chest cooldown window
pub const DAY: i64 = 24 * HOUR;

/// Monotonic simulation clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    now: i64,
}

impl SimClock {
    /// Create a clock at second zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock at a specific second
    pub fn at(now: i64) -> Self {
        Self { now }
    }

    /// Current timestamp in seconds
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Advance the clock; time never moves backwards
    pub fn advance(&mut self, secs: i64) {
        debug_assert!(secs >= 0);
        self.now += secs.max(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), 0);
        clock.advance(HOUR);
        assert_eq!(clock.now(), 3600);
        clock.advance(DAY);
        assert_eq!(clock.now(), 3600 + 86_400);
    }

    #[test]
    fn test_at() {
        assert_eq!(SimClock::at(1_550_000_000).now(), 1_550_000_000);
    }
}
