//! Stat deltas and experience for each built-in action.
//!
//! Deltas are expressed as an [`ItemEffect`] so actions and items share the
//! same conversion into [`StatChange`](petterm_types::StatChange) lists.

use petterm_types::{CareAction, ItemEffect};

/// Experience for falling asleep.
pub const SLEEP_XP: u64 = 5;

/// Experience for waking up.
pub const WAKE_XP: u64 = 5;

/// Stat deltas applied on waking.
pub const WAKE_EFFECT: ItemEffect = ItemEffect {
    hunger: -5,
    happiness: 8,
    health: 5,
    cleanliness: -2,
    energy: 80,
};

/// Stat deltas applied by a successful action.
pub const fn stat_effect(action: CareAction) -> ItemEffect {
    match action {
        CareAction::Feed => ItemEffect {
            hunger: 25,
            happiness: 4,
            health: 2,
            cleanliness: -4,
            energy: -2,
        },
        CareAction::Play => ItemEffect {
            hunger: -5,
            happiness: 23,
            health: 1,
            cleanliness: -4,
            energy: -20,
        },
        CareAction::Clean => ItemEffect {
            hunger: -2,
            happiness: 5,
            health: 3,
            cleanliness: 35,
            energy: -3,
        },
        CareAction::Heal => ItemEffect {
            hunger: -3,
            happiness: 2,
            health: 30,
            cleanliness: 5,
            energy: -5,
        },
    }
}

/// Experience granted by a successful action.
pub const fn xp_reward(action: CareAction) -> u64 {
    match action {
        CareAction::Feed => 10,
        CareAction::Play => 15,
        CareAction::Clean => 8,
        CareAction::Heal => 20,
    }
}

/// Past participle used in the success message: "Buddy enjoyed being fed!".
pub const fn past_tense(action: CareAction) -> &'static str {
    match action {
        CareAction::Feed => "fed",
        CareAction::Play => "played with",
        CareAction::Clean => "cleaned",
        CareAction::Heal => "healed",
    }
}
