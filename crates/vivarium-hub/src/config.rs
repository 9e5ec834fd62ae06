//! Hub configuration
//!
//! Carries the externally supplied life-state thresholds and the two
//! tunable windows of the chest protocol. Defaults match the live
//! protocol values.

use crate::clock::DAY;
use serde::{Deserialize, Serialize};
use vivarium_core::LifeThresholds;

/// World configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Life-state derivation thresholds (supplied by the platform)
    pub life: LifeThresholds,
    /// Minimum seconds between free daily-chest grants
    pub daily_chest_cooldown: i64,
    /// Reward delay is drawn as `1 + random(spread)` seconds, so the
    /// exact resolution moment cannot be predicted or front-run
    pub reward_delay_spread: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            life: LifeThresholds::default(),
            daily_chest_cooldown: DAY,
            reward_delay_spread: 3,
        }
    }
}
