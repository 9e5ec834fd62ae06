//! The deferred reward scheduler
//!
//! A scheduled reward is the record that exists between chest-open
//! and chest-reward execution. It is fire-once: `take_due` removes a
//! reward from the queue as it hands it out, and players cannot
//! cancel or re-enter one. Rewards with equal due times execute in
//! scheduling order.

use serde::{Deserialize, Serialize};
use vivarium_core::PlayerId;

/// One pending chest-reward resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledReward {
    /// The player whose chest will be resolved
    pub player: PlayerId,
    /// Threshold/quantity multiplier for the resolution
    pub modifier: i64,
    /// Why the reward was scheduled (audit tag, e.g. "openchest")
    pub reason: String,
}

/// Queue of pending rewards ordered by due time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    /// (due_at, reward), kept sorted by due time
    pending: Vec<(i64, ScheduledReward)>,
}

impl Scheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reward to run at `due_at`
    pub fn schedule(&mut self, due_at: i64, reward: ScheduledReward) {
        self.pending.push((due_at, reward));
        self.pending.sort_by_key(|(due, _)| *due);
    }

    /// Remove and return every reward due at or before `now`
    pub fn take_due(&mut self, now: i64) -> Vec<ScheduledReward> {
        let due: Vec<ScheduledReward> = self
            .pending
            .iter()
            .filter(|(due_at, _)| *due_at <= now)
            .map(|(_, reward)| reward.clone())
            .collect();
        self.pending.retain(|(due_at, _)| *due_at > now);
        due
    }

    /// Number of pending rewards
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
