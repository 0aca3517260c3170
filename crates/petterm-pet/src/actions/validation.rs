//! Guards for the built-in actions.
//!
//! Checks run in order and the first failure wins:
//! 1. Sleep -- a sleeping pet refuses every guarded action
//! 2. Saturation or prerequisite -- the stat the action targets
//!
//! A guard failure is a [`Rejection`], never an error.

use petterm_types::{CareAction, PetStats, Rejection};

/// Hunger at or above which the pet refuses food.
pub const FULL_HUNGER: u32 = 95;

/// Energy below which the pet refuses to play.
pub const MIN_PLAY_ENERGY: u32 = 15;

/// Cleanliness at or above which cleaning is refused.
pub const CLEAN_ENOUGH: u32 = 95;

/// Health at or above which healing is refused.
pub const HEALTHY_ENOUGH: u32 = 90;

/// Check whether `action` may run against the given state.
pub const fn validate(action: CareAction, stats: &PetStats, is_sleeping: bool) -> Result<(), Rejection> {
    if is_sleeping {
        return Err(Rejection::Sleeping);
    }
    match action {
        CareAction::Feed if stats.hunger >= FULL_HUNGER => Err(Rejection::TooFull),
        CareAction::Play if stats.energy < MIN_PLAY_ENERGY => Err(Rejection::TooTired),
        CareAction::Clean if stats.cleanliness >= CLEAN_ENOUGH => Err(Rejection::AlreadyClean),
        CareAction::Heal if stats.health >= HEALTHY_ENOUGH => Err(Rejection::AlreadyHealthy),
        _ => Ok(()),
    }
}

/// Player-facing text for a rejection.
pub fn rejection_message(rejection: Rejection, name: &str) -> String {
    match rejection {
        Rejection::Sleeping => format!("{name} is sleeping! Wake them up first."),
        Rejection::TooFull => format!("{name} is too full to eat more!"),
        Rejection::TooTired => format!("{name} is too tired to play! Let them rest."),
        Rejection::AlreadyClean => format!("{name} is already very clean!"),
        Rejection::AlreadyHealthy => format!("{name} is already very healthy!"),
        Rejection::ItemNotOwned => String::from("You don't have this item!"),
        Rejection::UnknownItem => String::from("Unknown item!"),
        Rejection::InsufficientFunds => String::from("Not enough coins!"),
        Rejection::InvalidQuantity => String::from("Quantity must be at least 1."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(f: impl FnOnce(&mut PetStats)) -> PetStats {
        let mut stats = PetStats {
            hunger: 50,
            happiness: 50,
            health: 50,
            cleanliness: 50,
            energy: 50,
        };
        f(&mut stats);
        stats
    }

    #[test]
    fn sleeping_blocks_everything_first() {
        let stats = with(|s| s.hunger = 100);
        assert_eq!(validate(CareAction::Feed, &stats, true), Err(Rejection::Sleeping));
        assert_eq!(validate(CareAction::Heal, &stats, true), Err(Rejection::Sleeping));
    }

    #[test]
    fn saturation_boundaries() {
        assert_eq!(validate(CareAction::Feed, &with(|s| s.hunger = 94), false), Ok(()));
        assert_eq!(validate(CareAction::Feed, &with(|s| s.hunger = 95), false), Err(Rejection::TooFull));
        assert_eq!(
            validate(CareAction::Clean, &with(|s| s.cleanliness = 95), false),
            Err(Rejection::AlreadyClean)
        );
        assert_eq!(validate(CareAction::Heal, &with(|s| s.health = 89), false), Ok(()));
        assert_eq!(
            validate(CareAction::Heal, &with(|s| s.health = 90), false),
            Err(Rejection::AlreadyHealthy)
        );
    }

    #[test]
    fn play_needs_energy() {
        assert_eq!(validate(CareAction::Play, &with(|s| s.energy = 15), false), Ok(()));
        assert_eq!(validate(CareAction::Play, &with(|s| s.energy = 14), false), Err(Rejection::TooTired));
    }

    #[test]
    fn messages_use_the_name() {
        assert_eq!(rejection_message(Rejection::TooFull, "Rex"), "Rex is too full to eat more!");
    }
}
