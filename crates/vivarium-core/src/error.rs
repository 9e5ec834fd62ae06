//! Error types for vivarium-core
//!
//! Every variant is terminal for the current action: nothing is
//! retried internally, and a failing action must leave no partial
//! state change behind. The only retry semantics in the system are
//! the player invoking the action again once the violated condition
//! (balance, cooldown, cap, life state) has changed.

use crate::identity::{PetId, PlayerId};
use crate::item::ItemKind;
use thiserror::Error;

/// Core error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The acting player has no account record
    #[error("{0} is not signed up")]
    AccountNotFound(PlayerId),

    /// A pet's owning account is missing
    #[error("pet owner {0} is not signed up")]
    OwnerAccountMissing(PlayerId),

    /// No pet record under this ID
    #[error("no such pet: {0}")]
    PetNotFound(PetId),

    /// A grant with a non-positive quantity
    #[error("invalid item grant: {quantity} x {item}")]
    InvalidItem { item: ItemKind, quantity: i64 },

    /// Crediting would exceed the numeric balance domain
    #[error("balance overflow for {item}")]
    BalanceOverflow { item: ItemKind },

    /// Opening or resolving requires at least one owned chest
    #[error("player has no chest to open")]
    NoChestToOpen,

    /// Debit larger than the current balance
    #[error("insufficient balance of {item}")]
    InsufficientBalance { item: ItemKind },

    /// The pet's life or sleep state forbids consumption
    #[error("pet cannot consume: {reason}")]
    PetNotConsumable { reason: &'static str },

    /// The per-day energy drink cap was reached
    #[error("only 10 energy drinks per day")]
    DailyCapExceeded,

    /// The item has no implemented consumption effect
    #[error("consuming {0} is not implemented")]
    NotImplemented(ItemKind),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
