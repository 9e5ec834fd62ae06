//! Daily Chest Demo
//!
//! Walks through one day of the economy: sign up, adopt a pet, open
//! the free daily chest, watch the scheduled reward resolve, consume
//! an energy drink, and come back the next day for another chest.

use vivarium_core::{ItemKind, PlayerId};
use vivarium_hub::{Caller, Hub, DAY};

fn main() {
    println!("=== Vivarium Daily Chest Demo ===\n");

    let mut hub = Hub::with_seed(42);
    let player = PlayerId::new(1);
    hub.sign_up(player);
    let pet = hub.adopt_pet(player).expect("player is signed up");
    println!("Signed up {} and adopted {}\n", player, pet);

    // Day one: the free daily chest
    hub.open_chest(Caller::Player(player), player)
        .expect("first open is always free");
    println!(
        "Opened the daily chest; {} reward(s) pending resolution",
        hub.pending_rewards()
    );

    // the reward lands 1-3 seconds out
    for outcome in hub.advance(3) {
        match &outcome.result {
            Ok(grants) => {
                println!("Reward for {} resolved:", outcome.reward.player);
                for grant in grants {
                    println!("  {} x {}", grant.quantity, grant.item);
                }
            }
            Err(err) => println!("Reward aborted: {}", err),
        }
    }

    let drinks = hub
        .account(player)
        .map(|a| a.balance(ItemKind::EnergyDrink))
        .unwrap_or(0);
    if drinks > 0 {
        hub.consume_item(Caller::Player(player), pet, ItemKind::EnergyDrink)
            .expect("pet is alive and awake");
        println!(
            "\n{} drank an energy drink ({} today)",
            pet,
            hub.pet(pet).unwrap().energy_drinks
        );
    }

    println!("\nBalances after day one:");
    for (item, quantity) in hub.account(player).unwrap().balances() {
        println!("  {:>3} x {}", quantity, item);
    }

    // Day two: the cooldown has elapsed, the free chest is back
    hub.advance(DAY);
    hub.open_chest(Caller::Player(player), player)
        .expect("cooldown elapsed");
    println!(
        "\nDay two: free chest granted again, {} reward(s) pending",
        hub.pending_rewards()
    );
}
