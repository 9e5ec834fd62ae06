//! The account ledger
//!
//! Per-player item balances and per-action cooldown stamps. The one
//! invariant everything else leans on: a balance is a non-negative
//! integer at every observable point. `credit_many` is all-or-nothing;
//! it validates the entire grant list against projected balances
//! before touching real state, so a failure partway through a list
//! can never leave a partial credit behind.

use crate::drop_table::Grant;
use crate::error::{Error, Result};
use crate::identity::PlayerId;
use crate::item::{ActionKind, ItemKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One player's balances and action stamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The owning player
    pub id: PlayerId,
    /// Item kind -> owned quantity (absent reads as zero)
    balances: IndexMap<ItemKind, i64>,
    /// Action kind -> timestamp it was last performed
    actions: IndexMap<ActionKind, i64>,
}

impl Account {
    /// Create an empty account
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            balances: IndexMap::new(),
            actions: IndexMap::new(),
        }
    }

    /// Current balance for an item kind
    pub fn balance(&self, item: ItemKind) -> i64 {
        self.balances.get(&item).copied().unwrap_or(0)
    }

    /// Iterate over all non-zero balances in insertion order
    pub fn balances(&self) -> impl Iterator<Item = (ItemKind, i64)> + '_ {
        self.balances.iter().map(|(item, qty)| (*item, *qty))
    }

    /// Add `quantity` units of an item
    ///
    /// Fails with `InvalidItem` for non-positive quantities and with
    /// `BalanceOverflow` if the i64 domain would be exceeded. On
    /// failure the balance is unchanged.
    pub fn credit(&mut self, item: ItemKind, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(Error::InvalidItem { item, quantity });
        }
        let next = self
            .balance(item)
            .checked_add(quantity)
            .ok_or(Error::BalanceOverflow { item })?;
        self.balances.insert(item, next);
        Ok(())
    }

    /// Apply a whole grant list atomically
    ///
    /// Validates every entry against projected balances first (kinds
    /// appearing more than once in the list are summed during
    /// validation), then applies. Either all grants land or none do.
    pub fn credit_many(&mut self, grants: &[Grant]) -> Result<()> {
        let mut projected: IndexMap<ItemKind, i64> = IndexMap::new();
        for grant in grants {
            if grant.quantity <= 0 {
                return Err(Error::InvalidItem {
                    item: grant.item,
                    quantity: grant.quantity,
                });
            }
            let current = projected
                .get(&grant.item)
                .copied()
                .unwrap_or_else(|| self.balance(grant.item));
            let next = current
                .checked_add(grant.quantity)
                .ok_or(Error::BalanceOverflow { item: grant.item })?;
            projected.insert(grant.item, next);
        }

        for (item, next) in projected {
            self.balances.insert(item, next);
        }
        Ok(())
    }

    /// Remove `quantity` units of an item
    ///
    /// Fails with `InsufficientBalance` if the balance would go
    /// negative; the balance is unchanged on failure.
    pub fn debit(&mut self, item: ItemKind, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(Error::InvalidItem { item, quantity });
        }
        let current = self.balance(item);
        if current < quantity {
            return Err(Error::InsufficientBalance { item });
        }
        self.balances.insert(item, current - quantity);
        Ok(())
    }

    /// Timestamp an action was last performed, if ever
    pub fn last_action(&self, action: ActionKind) -> Option<i64> {
        self.actions.get(&action).copied()
    }

    /// Whether at least `window` time units have passed since the
    /// action was last performed
    ///
    /// An action that was never performed is always eligible, whatever
    /// the current clock value. Read-only: stamping the action is the
    /// caller's move, made only on the branch that actually grants the
    /// gated benefit.
    pub fn cooldown_elapsed(&self, action: ActionKind, now: i64, window: i64) -> bool {
        match self.last_action(action) {
            Some(last) => now - last >= window,
            None => true,
        }
    }

    /// Record that an action was performed at `now`
    pub fn stamp_action(&mut self, action: ActionKind, now: i64) {
        self.actions.insert(action, now);
    }
}

/// Keyed repository of all accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountStore {
    accounts: IndexMap<PlayerId, Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account (or return the existing one) for a player
    pub fn create(&mut self, id: PlayerId) -> &mut Account {
        self.accounts.entry(id).or_insert_with(|| Account::new(id))
    }

    /// Get an account by player ID
    pub fn get(&self, id: PlayerId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Get a mutable reference to an account
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// Whether a player has an account
    pub fn contains(&self, id: PlayerId) -> bool {
        self.accounts.contains_key(&id)
    }

    /// Write a (possibly mutated) account back into the store
    ///
    /// Actions that need multi-step atomicity clone an account,
    /// mutate the clone, and commit it here only once every check
    /// has passed.
    pub fn replace(&mut self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Iterate over all accounts
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(PlayerId::new(1))
    }

    #[test]
    fn test_credit_and_debit() {
        let mut acc = account();
        acc.credit(ItemKind::Candy, 5).unwrap();
        assert_eq!(acc.balance(ItemKind::Candy), 5);
        acc.debit(ItemKind::Candy, 3).unwrap();
        assert_eq!(acc.balance(ItemKind::Candy), 2);
    }

    #[test]
    fn test_credit_rejects_non_positive() {
        let mut acc = account();
        assert_eq!(
            acc.credit(ItemKind::Candy, 0),
            Err(Error::InvalidItem {
                item: ItemKind::Candy,
                quantity: 0
            })
        );
        assert!(acc.credit(ItemKind::Candy, -4).is_err());
        assert_eq!(acc.balance(ItemKind::Candy), 0);
    }

    #[test]
    fn test_debit_never_goes_negative() {
        let mut acc = account();
        acc.credit(ItemKind::Chest, 1).unwrap();
        assert_eq!(
            acc.debit(ItemKind::Chest, 2),
            Err(Error::InsufficientBalance {
                item: ItemKind::Chest
            })
        );
        assert_eq!(acc.balance(ItemKind::Chest), 1);
        assert!(acc.debit(ItemKind::EnergyDrink, 1).is_err());
    }

    #[test]
    fn test_credit_overflow_guard() {
        let mut acc = account();
        acc.credit(ItemKind::Candy, i64::MAX - 1).unwrap();
        assert_eq!(
            acc.credit(ItemKind::Candy, 2),
            Err(Error::BalanceOverflow {
                item: ItemKind::Candy
            })
        );
        assert_eq!(acc.balance(ItemKind::Candy), i64::MAX - 1);
    }

    #[test]
    fn test_credit_many_is_atomic() {
        let mut acc = account();
        acc.credit(ItemKind::Candy, 10).unwrap();
        let grants = [
            Grant::new(ItemKind::Candy, 3),
            Grant::new(ItemKind::Chest, 0), // invalid
            Grant::new(ItemKind::EnergyDrink, 1),
        ];
        assert!(acc.credit_many(&grants).is_err());
        assert_eq!(acc.balance(ItemKind::Candy), 10);
        assert_eq!(acc.balance(ItemKind::EnergyDrink), 0);
    }

    #[test]
    fn test_credit_many_sums_duplicate_kinds() {
        let mut acc = account();
        let grants = [
            Grant::new(ItemKind::BronzeXpScroll, 1),
            Grant::new(ItemKind::BronzeXpScroll, 1),
        ];
        acc.credit_many(&grants).unwrap();
        assert_eq!(acc.balance(ItemKind::BronzeXpScroll), 2);

        // duplicates must also be summed while validating overflow
        let mut acc = account();
        acc.credit(ItemKind::Candy, i64::MAX - 1).unwrap();
        let grants = [Grant::new(ItemKind::Candy, 1), Grant::new(ItemKind::Candy, 1)];
        assert!(acc.credit_many(&grants).is_err());
        assert_eq!(acc.balance(ItemKind::Candy), i64::MAX - 1);
    }

    #[test]
    fn test_cooldown_boundary_is_exact() {
        let mut acc = account();
        acc.stamp_action(ActionKind::OpenDailyChest, 1000);
        assert!(!acc.cooldown_elapsed(ActionKind::OpenDailyChest, 1000 + 86_399, 86_400));
        assert!(acc.cooldown_elapsed(ActionKind::OpenDailyChest, 1000 + 86_400, 86_400));
    }

    #[test]
    fn test_unstamped_action_is_always_eligible() {
        let acc = account();
        assert_eq!(acc.last_action(ActionKind::OpenDailyChest), None);
        assert!(acc.cooldown_elapsed(ActionKind::OpenDailyChest, 0, 86_400));
        assert!(acc.cooldown_elapsed(ActionKind::OpenDailyChest, 5, 86_400));
    }

    #[test]
    fn test_store() {
        let mut store = AccountStore::new();
        let id = PlayerId::new(9);
        store.create(id).credit(ItemKind::Candy, 2).unwrap();
        assert!(store.contains(id));
        assert_eq!(store.get(id).unwrap().balance(ItemKind::Candy), 2);

        let mut clone = store.get(id).unwrap().clone();
        clone.credit(ItemKind::Candy, 1).unwrap();
        store.replace(clone);
        assert_eq!(store.get(id).unwrap().balance(ItemKind::Candy), 3);
        assert_eq!(store.len(), 1);
    }
}
