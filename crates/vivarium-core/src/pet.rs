//! Pet records and the state the consumption gate reads
//!
//! Life state is derived, never stored: a pet is dead once its last
//! feeding is further in the past than the configured starvation
//! window. Sleep is derived from the ordering of the bed/awake
//! timestamps. This module only derives; the feeding and sleeping
//! actions themselves belong to the surrounding platform.

use crate::identity::{PetId, PlayerId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Energy drinks one pet may consume per day
pub const MAX_DAILY_ENERGY_DRINKS: u8 = 10;

/// Whether a pet is currently alive or dead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Externally configured thresholds for the life-state derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeThresholds {
    /// Seconds a pet survives without being fed
    pub starvation_window: i64,
}

impl Default for LifeThresholds {
    fn default() -> Self {
        Self {
            // three days unfed
            starvation_window: 3 * 86_400,
        }
    }
}

/// A single pet
///
/// The owner field is a relation, not ownership: the account record
/// lives in its own store. The consumption gate mutates only the two
/// energy counters; every other field is read-only from this engine's
/// perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub owner: PlayerId,
    pub created_at: i64,
    pub last_fed_at: i64,
    pub last_awake_at: i64,
    pub last_bed_at: i64,
    /// Energy drinks consumed today
    pub energy_drinks: u8,
    /// Depletion counter reset by a successful energy drink
    pub energy_used: u8,
}

impl Pet {
    /// Create a freshly adopted pet, all timestamps stamped to `now`
    pub fn new(id: PetId, owner: PlayerId, now: i64) -> Self {
        Self {
            id,
            owner,
            created_at: now,
            last_fed_at: now,
            last_awake_at: now,
            last_bed_at: now,
            energy_drinks: 0,
            energy_used: 0,
        }
    }

    /// A pet is sleeping while its last bedtime is newer than its
    /// last wake-up
    pub fn is_sleeping(&self) -> bool {
        self.last_bed_at > self.last_awake_at
    }

    /// Derive the life state from the configured starvation window
    pub fn life_state(&self, thresholds: &LifeThresholds, now: i64) -> LifeState {
        if now - self.last_fed_at >= thresholds.starvation_window {
            LifeState::Dead
        } else {
            LifeState::Alive
        }
    }
}

/// Keyed repository of all pets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetStore {
    pets: IndexMap<PetId, Pet>,
    next_id: u64,
}

impl PetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new pet for an owner and add it to the store
    pub fn create(&mut self, owner: PlayerId, now: i64) -> &mut Pet {
        let id = PetId::new(self.next_id);
        self.next_id += 1;
        self.pets.insert(id, Pet::new(id, owner, now));
        self.pets.get_mut(&id).unwrap()
    }

    /// Get a pet by ID
    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(&id)
    }

    /// Get a mutable reference to a pet
    pub fn get_mut(&mut self, id: PetId) -> Option<&mut Pet> {
        self.pets.get_mut(&id)
    }

    /// Write a (possibly mutated) pet back into the store
    pub fn replace(&mut self, pet: Pet) {
        self.pets.insert(pet.id, pet);
    }

    /// Iterate over all pets
    pub fn iter(&self) -> impl Iterator<Item = &Pet> {
        self.pets.values()
    }

    /// Number of pets
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_derivation() {
        let mut pet = Pet::new(PetId::new(1), PlayerId::new(1), 100);
        assert!(!pet.is_sleeping());
        pet.last_bed_at = 200;
        assert!(pet.is_sleeping());
        pet.last_awake_at = 300;
        assert!(!pet.is_sleeping());
    }

    #[test]
    fn test_life_state_boundary() {
        let thresholds = LifeThresholds {
            starvation_window: 1000,
        };
        let pet = Pet::new(PetId::new(1), PlayerId::new(1), 0);
        assert_eq!(pet.life_state(&thresholds, 999), LifeState::Alive);
        assert_eq!(pet.life_state(&thresholds, 1000), LifeState::Dead);
    }

    #[test]
    fn test_store_assigns_ids() {
        let mut store = PetStore::new();
        let owner = PlayerId::new(5);
        let first = store.create(owner, 10).id;
        let second = store.create(owner, 10).id;
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(first).unwrap().owner, owner);
    }
}
