//! Vivarium Hub - Sequential action orchestration over the core engine
//!
//! The hub owns the world: account and pet stores, the simulation
//! clock, the host randomness source, and the deferred-reward
//! scheduler. It exposes the player-facing and privileged actions and
//! enforces authorization on each.
//!
//! ## Execution model
//!
//! One logical thread, strictly sequential: every action runs to
//! completion before the next one observes its writes, and every
//! action is atomic: it commits all of its mutations or none of
//! them. Suspension exists only at the coarse grain of a scheduled
//! future call: `open_chest` schedules a reward resolution that runs
//! seconds later under [`Hub::advance`], and that resolution
//! re-validates everything it depends on, because the world may have
//! changed in between.
//!
//! ## Key components
//!
//! - [`Hub`]: owns the stores and runs the actions
//! - [`Caller`]: authorization boundary (player vs. privileged system)
//! - [`Scheduler`]: fire-once deferred reward queue
//! - [`SimClock`] / [`HostRng`]: the platform's time and randomness,
//!   modeled deterministically

mod caller;
mod clock;
mod config;
mod error;
mod hub;
mod rng;
mod scheduler;

pub use caller::Caller;
pub use clock::{SimClock, DAY, HOUR};
pub use config::Config;
pub use error::{Error, Result};
pub use hub::{Hub, RewardOutcome};
pub use rng::HostRng;
pub use scheduler::{ScheduledReward, Scheduler};
