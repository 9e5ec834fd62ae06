//! The item catalog and cooldown-gated action keys
//!
//! `ItemKind` is the fixed set of countable resources the ledger can
//! hold. The catalog is defined here once and referenced by value
//! everywhere; the engine never invents kinds at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A countable resource kind (currency, consumable, chest, scroll)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Base currency, always granted by a chest resolution
    Candy,
    /// Consumable container that yields a scheduled reward bundle
    Chest,
    EnergyDrink,
    SmallHpPotion,
    MediumHpPotion,
    LargeHpPotion,
    TotalHpPotion,
    AttackElixir,
    SuperAttackElixir,
    DefenseElixir,
    SuperDefenseElixir,
    HpElixir,
    SuperHpElixir,
    BronzeXpScroll,
    SilverXpScroll,
    GoldXpScroll,
    /// The one item a dead pet is still allowed to consume
    ReviveTome,
}

impl ItemKind {
    /// Get the catalog symbol as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Candy => "candy",
            ItemKind::Chest => "chest",
            ItemKind::EnergyDrink => "energy_drink",
            ItemKind::SmallHpPotion => "small_hp_potion",
            ItemKind::MediumHpPotion => "medium_hp_potion",
            ItemKind::LargeHpPotion => "large_hp_potion",
            ItemKind::TotalHpPotion => "total_hp_potion",
            ItemKind::AttackElixir => "attack_elixir",
            ItemKind::SuperAttackElixir => "super_attack_elixir",
            ItemKind::DefenseElixir => "defense_elixir",
            ItemKind::SuperDefenseElixir => "super_defense_elixir",
            ItemKind::HpElixir => "hp_elixir",
            ItemKind::SuperHpElixir => "super_hp_elixir",
            ItemKind::BronzeXpScroll => "bronze_xp_scroll",
            ItemKind::SilverXpScroll => "silver_xp_scroll",
            ItemKind::GoldXpScroll => "gold_xp_scroll",
            ItemKind::ReviveTome => "revive_tome",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cooldown-gated benefit tracked per account
///
/// The ledger keeps the last-performed timestamp per action kind;
/// the window itself is supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// The free daily chest grant
    OpenDailyChest,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::OpenDailyChest => write!(f, "open_daily_chest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_kind_display() {
        assert_eq!(ItemKind::Candy.as_str(), "candy");
        assert_eq!(format!("{}", ItemKind::ReviveTome), "revive_tome");
    }
}
