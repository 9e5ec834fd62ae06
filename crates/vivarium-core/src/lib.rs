//! Vivarium Core - Deterministic loot and inventory engine
//!
//! This crate provides the pure, host-independent pieces of the
//! collectible-pet economy:
//! - Identity newtypes for players and pets (`PlayerId`, `PetId`)
//! - The immutable item catalog (`ItemKind`) and cooldown keys (`ActionKind`)
//! - The pseudo-random primer walk driving reward trials (`Primer`)
//! - The ordered weighted drop table and its pure roller (`DropTable`)
//! - The account ledger with non-negative balances (`Account`, `AccountStore`)
//! - Pet records with life/sleep derivation (`Pet`, `PetStore`)
//!
//! Everything here is a pure function of its inputs: given the same
//! seed and timestamps, every resolution produces the same grants on
//! every platform. Host concerns (clock, randomness source, action
//! authorization, scheduling) live in `vivarium-hub`.

mod drop_table;
mod error;
mod identity;
mod item;
mod ledger;
mod pet;
mod primer;

pub use drop_table::{DropTable, Grant, TrialEntry};
pub use error::{Error, Result};
pub use identity::{PetId, PlayerId};
pub use item::{ActionKind, ItemKind};
pub use ledger::{Account, AccountStore};
pub use pet::{LifeState, LifeThresholds, Pet, PetStore, MAX_DAILY_ENERGY_DRINKS};
pub use primer::{Primer, PRIMER_MODULUS, TRIAL_SCALE};
