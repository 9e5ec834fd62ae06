//! Hub - owner of the world state and the exposed actions
//!
//! The hub owns the account and pet stores, the clock, the host
//! randomness, and the scheduler, and runs every action to completion
//! before the next one starts. Actions are atomic: multi-step
//! mutations happen on a cloned record that is committed back into
//! its store only after every check has passed, so a failing action
//! leaves nothing behind.
//!
//! Chest opening is two-phase. `open_chest` only reserves: it grants
//! or verifies a chest and schedules the resolution a few seconds
//! out. The debit and the reward roll happen together at resolution
//! time, which re-validates the account and the chest balance because
//! arbitrary actions may have run in between.

use crate::caller::Caller;
use crate::clock::SimClock;
use crate::config::Config;
use crate::error::Result;
use crate::rng::HostRng;
use crate::scheduler::{ScheduledReward, Scheduler};
use serde::{Deserialize, Serialize};
use vivarium_core::{
    Account, AccountStore, ActionKind, DropTable, Error as CoreError, Grant, ItemKind, LifeState,
    Pet, PetId, PetStore, PlayerId, PRIMER_MODULUS, MAX_DAILY_ENERGY_DRINKS,
};

/// Outcome of one scheduled reward execution
#[derive(Debug)]
pub struct RewardOutcome {
    /// The reward that fired
    pub reward: ScheduledReward,
    /// The grants credited, or why the resolution aborted
    pub result: Result<Vec<Grant>>,
}

/// Central coordinator that owns the world and runs the actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    accounts: AccountStore,
    pets: PetStore,
    clock: SimClock,
    rng: HostRng,
    scheduler: Scheduler,
    config: Config,
}

impl Hub {
    /// Create a hub with the default configuration and RNG seed
    pub fn new() -> Self {
        Self::with_seed(HostRng::default().state())
    }

    /// Create a hub with a specific host RNG seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(Config::default(), seed)
    }

    /// Create a hub with a specific configuration and RNG seed
    pub fn with_config(config: Config, seed: u64) -> Self {
        Self {
            accounts: AccountStore::new(),
            pets: PetStore::new(),
            clock: SimClock::new(),
            rng: HostRng::new(seed),
            scheduler: Scheduler::new(),
            config,
        }
    }

    /// Current timestamp in seconds
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Look up an account
    pub fn account(&self, player: PlayerId) -> Option<&Account> {
        self.accounts.get(player)
    }

    /// Look up a pet
    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(id)
    }

    /// Number of rewards waiting to resolve
    pub fn pending_rewards(&self) -> usize {
        self.scheduler.len()
    }

    /// Sign a player up, creating an empty account
    ///
    /// Signup proper belongs to the surrounding platform; this is the
    /// boundary through which it hands the engine an account record.
    pub fn sign_up(&mut self, player: PlayerId) -> &mut Account {
        self.accounts.create(player)
    }

    /// Adopt a pet for a signed-up player
    pub fn adopt_pet(&mut self, owner: PlayerId) -> Result<PetId> {
        if !self.accounts.contains(owner) {
            return Err(CoreError::AccountNotFound(owner).into());
        }
        let now = self.clock.now();
        Ok(self.pets.create(owner, now).id)
    }

    /// Open a chest: grant or verify, then schedule the resolution
    ///
    /// If the daily cooldown has elapsed the player gets one chest
    /// free and the cooldown is stamped; otherwise they must already
    /// own one. Opening never consumes the chest here; the debit
    /// happens when the scheduled resolution fires.
    pub fn open_chest(&mut self, caller: Caller, player: PlayerId) -> Result<()> {
        caller.require(player)?;

        let now = self.clock.now();
        let account = self
            .accounts
            .get(player)
            .ok_or(CoreError::AccountNotFound(player))?;
        let daily_elapsed = account.cooldown_elapsed(
            ActionKind::OpenDailyChest,
            now,
            self.config.daily_chest_cooldown,
        );
        let owns_chest = account.balance(ItemKind::Chest) >= 1;

        if daily_elapsed {
            // free daily chest, issued as a privileged self-call
            self.issue_item(Caller::System, player, ItemKind::Chest, 1, "dailychest")?;
            self.accounts
                .get_mut(player)
                .ok_or(CoreError::AccountNotFound(player))?
                .stamp_action(ActionKind::OpenDailyChest, now);
        } else if !owns_chest {
            return Err(CoreError::NoChestToOpen.into());
        }

        // randomized short delay so the resolution moment cannot be
        // predicted and front-run
        let delay = 1 + self.rng.next_below(self.config.reward_delay_spread);
        self.scheduler.schedule(
            now + delay,
            ScheduledReward {
                player,
                modifier: 1,
                reason: "openchest".to_string(),
            },
        );
        Ok(())
    }

    /// Credit one item to a player [privileged]
    pub fn issue_item(
        &mut self,
        caller: Caller,
        player: PlayerId,
        item: ItemKind,
        quantity: i64,
        _reason: &str,
    ) -> Result<()> {
        caller.require_system()?;
        let account = self
            .accounts
            .get_mut(player)
            .ok_or(CoreError::AccountNotFound(player))?;
        account.credit(item, quantity)?;
        Ok(())
    }

    /// Credit a grant list to a player, all-or-nothing [privileged]
    pub fn issue_items(
        &mut self,
        caller: Caller,
        player: PlayerId,
        grants: &[Grant],
        _reason: &str,
    ) -> Result<()> {
        caller.require_system()?;
        let account = self
            .accounts
            .get_mut(player)
            .ok_or(CoreError::AccountNotFound(player))?;
        account.credit_many(grants)?;
        Ok(())
    }

    /// Resolve a scheduled chest reward [privileged, scheduled-only]
    ///
    /// Re-validates everything the open step observed: the account
    /// must still exist and must still hold a chest (`NoChestToOpen`
    /// otherwise, since the balance may have changed after scheduling).
    /// The chest debit and the reward credits commit together.
    pub fn resolve_chest_reward(
        &mut self,
        caller: Caller,
        player: PlayerId,
        modifier: i64,
        _reason: &str,
    ) -> Result<Vec<Grant>> {
        caller.require_system()?;

        let mut account = self
            .accounts
            .get(player)
            .ok_or(CoreError::AccountNotFound(player))?
            .clone();
        if account.balance(ItemKind::Chest) < 1 {
            return Err(CoreError::NoChestToOpen.into());
        }

        let seed = self.rng.next_below(PRIMER_MODULUS);
        let now = self.clock.now();
        let grants = DropTable::chest().resolve(seed, now, modifier);

        account.debit(ItemKind::Chest, 1)?;
        account.credit_many(&grants)?;
        self.accounts.replace(account);
        Ok(grants)
    }

    /// Consume one unit of an item on behalf of a pet
    ///
    /// The gate: a dead pet consumes nothing except the revive tome,
    /// and a sleeping pet consumes nothing at all. On acceptance the
    /// owner's ledger is debited one unit and the item's effect is
    /// applied; unsupported kinds are rejected explicitly rather than
    /// silently ignored.
    pub fn consume_item(&mut self, caller: Caller, pet_id: PetId, item: ItemKind) -> Result<()> {
        let mut pet = self
            .pets
            .get(pet_id)
            .ok_or(CoreError::PetNotFound(pet_id))?
            .clone();
        caller.require(pet.owner)?;

        let now = self.clock.now();
        let alive = pet.life_state(&self.config.life, now) == LifeState::Alive;
        if !alive && item != ItemKind::ReviveTome {
            return Err(CoreError::PetNotConsumable {
                reason: "dead pets consume nothing",
            }
            .into());
        }
        if pet.is_sleeping() {
            return Err(CoreError::PetNotConsumable {
                reason: "pet is sleeping",
            }
            .into());
        }

        let mut account = self
            .accounts
            .get(pet.owner)
            .ok_or(CoreError::OwnerAccountMissing(pet.owner))?
            .clone();
        account.debit(item, 1)?;

        match item {
            ItemKind::EnergyDrink => {
                if pet.energy_drinks >= MAX_DAILY_ENERGY_DRINKS {
                    return Err(CoreError::DailyCapExceeded.into());
                }
                pet.energy_drinks += 1;
                pet.energy_used = 0;
            }
            other => return Err(CoreError::NotImplemented(other).into()),
        }

        // commit both records, then the reserved state-advance draw
        // that keeps the host stream evolving across unrelated actions
        self.accounts.replace(account);
        self.pets.replace(pet);
        let _ = self.rng.next_below(10);
        Ok(())
    }

    /// Advance the clock, executing every scheduled reward as it
    /// comes due (in due order, ties in scheduling order)
    pub fn advance(&mut self, secs: i64) -> Vec<RewardOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..secs {
            self.clock.advance(1);
            let now = self.clock.now();
            for reward in self.scheduler.take_due(now) {
                let result = self.resolve_chest_reward(
                    Caller::System,
                    reward.player,
                    reward.modifier,
                    &reward.reason,
                );
                outcomes.push(RewardOutcome { reward, result });
            }
        }
        outcomes
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}
