//! Enumeration types for the pet simulation.
//!
//! Every enum serializes as a lowercase (`snake_case`) tag so the persisted
//! save document stays readable and stable across releases.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// The kind of animal a pet is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Species {
    /// A cat. The default species.
    Cat,
    /// A dog.
    Dog,
    /// A rabbit.
    Rabbit,
    /// A hamster.
    Hamster,
    /// A bird.
    Bird,
    /// A dragon.
    Dragon,
}

impl Species {
    /// Every species, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Cat,
        Self::Dog,
        Self::Rabbit,
        Self::Hamster,
        Self::Bird,
        Self::Dragon,
    ];

    /// Capitalised display name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Dog => "Dog",
            Self::Rabbit => "Rabbit",
            Self::Hamster => "Hamster",
            Self::Bird => "Bird",
            Self::Dragon => "Dragon",
        }
    }

    /// Emoji shown next to the pet's name.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Cat => "🐱",
            Self::Dog => "🐕",
            Self::Rabbit => "🐰",
            Self::Hamster => "🐹",
            Self::Bird => "🐦",
            Self::Dragon => "🐉",
        }
    }

    /// Flavour text: what this species likes to eat.
    pub const fn favorite_food(self) -> &'static str {
        match self {
            Self::Cat => "Fish",
            Self::Dog => "Bone",
            Self::Rabbit => "Carrot",
            Self::Hamster => "Sunflower seeds",
            Self::Bird => "Seeds",
            Self::Dragon => "Gems",
        }
    }

    /// Flavour text: what this species likes to do.
    pub const fn favorite_activity(self) -> &'static str {
        match self {
            Self::Cat => "Chasing laser",
            Self::Dog => "Fetch",
            Self::Rabbit => "Hopping",
            Self::Hamster => "Running on wheel",
            Self::Bird => "Singing",
            Self::Dragon => "Flying",
        }
    }

    /// Lowercase tag, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Dog => "dog",
            Self::Rabbit => "rabbit",
            Self::Hamster => "hamster",
            Self::Bird => "bird",
            Self::Dragon => "dragon",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    /// What kind of value was being parsed (e.g. "species").
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for Species {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|species| species.as_str() == wanted)
            .ok_or_else(|| UnknownVariant {
                kind: "species",
                value: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// A pet's mood, derived from its stats after every successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Mood {
    /// Comfortable and content.
    Happy,
    /// Needs some attention.
    Sad,
    /// Health is critically low.
    Sick,
    /// Hungry or badly neglected.
    Angry,
    /// Asleep or out of energy.
    Sleepy,
    /// Everything is great and energy is high.
    Excited,
}

impl Mood {
    /// Emoji used by the status screen.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Sick => "🤒",
            Self::Angry => "😠",
            Self::Sleepy => "😴",
            Self::Excited => "🤩",
        }
    }

    /// Short phrase completing "{name} ...".
    pub const fn description(self) -> &'static str {
        match self {
            Self::Happy => "is feeling wonderful!",
            Self::Sad => "needs some attention.",
            Self::Sick => "needs medicine and rest.",
            Self::Angry => "is not happy right now.",
            Self::Sleepy => "is very tired.",
            Self::Excited => "is full of energy!",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Sick => "sick",
            Self::Angry => "angry",
            Self::Sleepy => "sleepy",
            Self::Excited => "excited",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// One of the five bounded pet statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Stat {
    /// Fullness. Higher is better.
    Hunger,
    /// Happiness.
    Happiness,
    /// Health.
    Health,
    /// Cleanliness.
    Cleanliness,
    /// Energy.
    Energy,
}

impl Stat {
    /// All stats in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Hunger,
        Self::Happiness,
        Self::Health,
        Self::Cleanliness,
        Self::Energy,
    ];

    /// Capitalised label used in change lists and warnings.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hunger => "Hunger",
            Self::Happiness => "Happiness",
            Self::Health => "Health",
            Self::Cleanliness => "Cleanliness",
            Self::Energy => "Energy",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ItemType {
    /// Restores hunger.
    Food,
    /// Raises happiness, costs energy.
    Toy,
    /// Restores cleanliness.
    Cleaning,
    /// Restores health.
    Medicine,
}

impl ItemType {
    /// All categories in shop order.
    pub const ALL: [Self; 4] = [Self::Food, Self::Toy, Self::Cleaning, Self::Medicine];

    /// Heading used by the shop and inventory screens.
    pub const fn category_name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Toy => "Toys",
            Self::Cleaning => "Cleaning",
            Self::Medicine => "Medicine",
        }
    }

    /// Coin reason credited when an item of this category is used.
    pub const fn use_reward_reason(self) -> CoinReason {
        match self {
            Self::Food => CoinReason::Feed,
            Self::Toy => CoinReason::Play,
            Self::Cleaning => CoinReason::Clean,
            Self::Medicine => CoinReason::Heal,
        }
    }
}

/// How rare a catalog item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Everyday items.
    Common,
    /// Better than average.
    Rare,
    /// Special-occasion items.
    Epic,
    /// One of a kind.
    Legendary,
}

// ---------------------------------------------------------------------------
// Coins
// ---------------------------------------------------------------------------

/// Why coins entered or left the wallet.
///
/// Tags written by older releases that no longer exist read back as
/// [`CoinReason::Other`] instead of invalidating the whole save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CoinReason {
    /// Used a food item.
    Feed,
    /// Used a toy.
    Play,
    /// Used a cleaning item.
    Clean,
    /// Used a medicine item.
    Heal,
    /// Sleep reward tier.
    Sleep,
    /// The pet gained a level.
    LevelUp,
    /// Reward for an unclassified commit.
    GitCommitNormal,
    /// Reward for a feature commit.
    GitCommitFeature,
    /// Reward for a bug-fix commit.
    GitCommitBugFix,
    /// Reward for a refactor commit.
    GitCommitRefactor,
    /// Flat bonus for a commit touching at least 100 lines.
    GitLargeBonus,
    /// Streak bonus for a streak of 2 to 6 days.
    GitStreakDaily,
    /// Streak bonus for a streak of 7 to 29 days.
    #[serde(rename = "git_streak_7")]
    GitStreak7,
    /// Streak bonus for a streak of 30 days or more.
    #[serde(rename = "git_streak_30")]
    GitStreak30,
    /// Coins spent in the shop.
    Purchase,
    /// Any tag this release does not recognise.
    #[serde(other)]
    Other,
}

// ---------------------------------------------------------------------------
// Commits
// ---------------------------------------------------------------------------

/// Classification of a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CommitType {
    /// Fixes a bug. Checked first.
    BugFix,
    /// Adds a feature.
    Feature,
    /// Restructures or cleans up code.
    Refactor,
    /// Anything else.
    Normal,
}

impl CommitType {
    /// Human-readable label.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BugFix => "Bug Fix",
            Self::Feature => "Feature",
            Self::Refactor => "Refactor",
            Self::Normal => "Normal",
        }
    }

    /// Ledger reason used when crediting this commit's base reward.
    pub const fn coin_reason(self) -> CoinReason {
        match self {
            Self::BugFix => CoinReason::GitCommitBugFix,
            Self::Feature => CoinReason::GitCommitFeature,
            Self::Refactor => CoinReason::GitCommitRefactor,
            Self::Normal => CoinReason::GitCommitNormal,
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Actions and care
// ---------------------------------------------------------------------------

/// A care action the planner can perform by using an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CareAction {
    /// Use a food item.
    Feed,
    /// Use a toy.
    Play,
    /// Use a cleaning item.
    Clean,
    /// Use a medicine item.
    Heal,
}

impl CareAction {
    /// Category of the items that perform this action.
    pub const fn item_type(self) -> ItemType {
        match self {
            Self::Feed => ItemType::Food,
            Self::Play => ItemType::Toy,
            Self::Clean => ItemType::Cleaning,
            Self::Heal => ItemType::Medicine,
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Clean => "clean",
            Self::Heal => "heal",
        };
        f.write_str(name)
    }
}

/// Why an action was refused.
///
/// A rejection is an expected outcome, never an error: the pet is left
/// untouched and the caller gets a human-readable message alongside this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Rejection {
    /// The pet is asleep.
    Sleeping,
    /// Hunger is already at 95 or more.
    TooFull,
    /// Energy is below 15.
    TooTired,
    /// Cleanliness is already at 95 or more.
    AlreadyClean,
    /// Health is already at 90 or more.
    AlreadyHealthy,
    /// The item is in the catalog but not in the inventory.
    ItemNotOwned,
    /// The item id is not in the catalog.
    UnknownItem,
    /// The wallet cannot cover the price.
    InsufficientFunds,
    /// A purchase asked for zero items.
    InvalidQuantity,
}

// ---------------------------------------------------------------------------
// Progression and time
// ---------------------------------------------------------------------------

/// Title band for a pet's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum LevelTitle {
    /// Levels 1 to 5.
    Baby,
    /// Levels 6 to 10.
    Young,
    /// Levels 11 to 20.
    Adult,
    /// Levels 21 to 30.
    Expert,
    /// Levels 31 to 50.
    Master,
    /// Above level 50.
    Legend,
}

impl fmt::Display for LevelTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Baby => "Baby",
            Self::Young => "Young",
            Self::Adult => "Adult",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Legend => "Legend",
        };
        f.write_str(name)
    }
}

/// How worrying an absence of the given length is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DecaySeverity {
    /// Less than an hour.
    None,
    /// Less than six hours.
    Low,
    /// Less than a day.
    Medium,
    /// Less than three days.
    High,
    /// Three days or more.
    Critical,
}
