//! The item catalog: every item that can be owned, used or bought.
//!
//! The catalog is a value, built once by the caller and passed by reference
//! to anything that needs item definitions. Lookup is by id; iteration order
//! is the shop's display order.

use petterm_types::{ItemDefinition, ItemEffect, ItemType, Rarity};

/// Static description of one catalog row.
struct Row {
    id: &'static str,
    name: &'static str,
    item_type: ItemType,
    rarity: Rarity,
    emoji: &'static str,
    description: &'static str,
    effect: ItemEffect,
    xp_reward: u64,
    price: u64,
}

const fn effect(hunger: i32, happiness: i32, health: i32, cleanliness: i32, energy: i32) -> ItemEffect {
    ItemEffect {
        hunger,
        happiness,
        health,
        cleanliness,
        energy,
    }
}

const STANDARD_ROWS: [Row; 18] = [
    // Food
    Row {
        id: "fish",
        name: "Fresh Fish",
        item_type: ItemType::Food,
        rarity: Rarity::Common,
        emoji: "🐟",
        description: "A delicious fish. Restores hunger well.",
        effect: effect(30, 5, 2, 0, 0),
        xp_reward: 10,
        price: 10,
    },
    Row {
        id: "premium_food",
        name: "Premium Pet Food",
        item_type: ItemType::Food,
        rarity: Rarity::Common,
        emoji: "🥫",
        description: "Nutritious pet food. Good for daily feeding.",
        effect: effect(20, 3, 1, 0, 0),
        xp_reward: 8,
        price: 5,
    },
    Row {
        id: "steak",
        name: "Juicy Steak",
        item_type: ItemType::Food,
        rarity: Rarity::Rare,
        emoji: "🥩",
        description: "A high-quality steak. Very filling!",
        effect: effect(40, 10, 3, 0, 0),
        xp_reward: 15,
        price: 25,
    },
    Row {
        id: "treat",
        name: "Yummy Treat",
        item_type: ItemType::Food,
        rarity: Rarity::Common,
        emoji: "🦴",
        description: "A small snack. Not very filling but makes pets happy!",
        effect: effect(10, 15, -2, 0, 0),
        xp_reward: 8,
        price: 8,
    },
    Row {
        id: "cake",
        name: "Birthday Cake",
        item_type: ItemType::Food,
        rarity: Rarity::Epic,
        emoji: "🎂",
        description: "A special cake for celebrations!",
        effect: effect(25, 30, -5, 0, 5),
        xp_reward: 25,
        price: 50,
    },
    // Toys
    Row {
        id: "ball",
        name: "Tennis Ball",
        item_type: ItemType::Toy,
        rarity: Rarity::Common,
        emoji: "🎾",
        description: "A simple ball for playing fetch.",
        effect: effect(0, 20, 0, 0, -15),
        xp_reward: 12,
        price: 15,
    },
    Row {
        id: "frisbee",
        name: "Frisbee",
        item_type: ItemType::Toy,
        rarity: Rarity::Common,
        emoji: "🥏",
        description: "Great for outdoor play!",
        effect: effect(0, 25, 2, 0, -20),
        xp_reward: 15,
        price: 20,
    },
    Row {
        id: "laser_pointer",
        name: "Laser Pointer",
        item_type: ItemType::Toy,
        rarity: Rarity::Rare,
        emoji: "🔴",
        description: "Endless entertainment for curious pets!",
        effect: effect(0, 35, 0, 0, -10),
        xp_reward: 20,
        price: 30,
    },
    Row {
        id: "squeaky_toy",
        name: "Squeaky Toy",
        item_type: ItemType::Toy,
        rarity: Rarity::Common,
        emoji: "🦖",
        description: "Makes funny noises when chewed.",
        effect: effect(0, 18, 0, 0, -12),
        xp_reward: 10,
        price: 12,
    },
    Row {
        id: "stuffed_animal",
        name: "Stuffed Animal",
        item_type: ItemType::Toy,
        rarity: Rarity::Rare,
        emoji: "🧸",
        description: "A soft toy for snuggling.",
        effect: effect(0, 15, 0, 0, 5),
        xp_reward: 12,
        price: 25,
    },
    // Cleaning
    Row {
        id: "soap",
        name: "Pet Soap",
        item_type: ItemType::Cleaning,
        rarity: Rarity::Common,
        emoji: "🧼",
        description: "Basic soap for cleaning your pet.",
        effect: effect(0, -3, 0, 35, 0),
        xp_reward: 8,
        price: 10,
    },
    Row {
        id: "shampoo",
        name: "Fancy Shampoo",
        item_type: ItemType::Cleaning,
        rarity: Rarity::Rare,
        emoji: "🧴",
        description: "Smells great and cleans thoroughly!",
        effect: effect(0, 5, 0, 50, 0),
        xp_reward: 12,
        price: 20,
    },
    Row {
        id: "brush",
        name: "Grooming Brush",
        item_type: ItemType::Cleaning,
        rarity: Rarity::Common,
        emoji: "🪮",
        description: "Keep your pet looking neat and tidy.",
        effect: effect(0, 8, 0, 20, 0),
        xp_reward: 6,
        price: 8,
    },
    Row {
        id: "perfume",
        name: "Pet Perfume",
        item_type: ItemType::Cleaning,
        rarity: Rarity::Epic,
        emoji: "🌸",
        description: "Makes your pet smell wonderful!",
        effect: effect(0, 15, 0, 40, 0),
        xp_reward: 15,
        price: 40,
    },
    // Medicine
    Row {
        id: "bandage",
        name: "Bandage",
        item_type: ItemType::Medicine,
        rarity: Rarity::Common,
        emoji: "🩹",
        description: "A simple bandage for minor injuries.",
        effect: effect(0, 0, 20, 0, 0),
        xp_reward: 15,
        price: 15,
    },
    Row {
        id: "medicine",
        name: "Medicine",
        item_type: ItemType::Medicine,
        rarity: Rarity::Rare,
        emoji: "💊",
        description: "Tastes bad but works well!",
        effect: effect(0, -5, 40, 0, 0),
        xp_reward: 20,
        price: 30,
    },
    Row {
        id: "elixir",
        name: "Health Elixir",
        item_type: ItemType::Medicine,
        rarity: Rarity::Epic,
        emoji: "🧪",
        description: "A magical potion that restores health completely!",
        effect: effect(0, 5, 60, 0, 0),
        xp_reward: 30,
        price: 50,
    },
    Row {
        id: "golden_apple",
        name: "Golden Apple",
        item_type: ItemType::Medicine,
        rarity: Rarity::Legendary,
        emoji: "🍎",
        description: "A legendary fruit that restores all stats!",
        effect: effect(30, 20, 100, 20, 20),
        xp_reward: 100,
        price: 200,
    },
];

impl Row {
    fn definition(&self) -> ItemDefinition {
        ItemDefinition {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            item_type: self.item_type,
            rarity: self.rarity,
            description: self.description.to_owned(),
            emoji: self.emoji.to_owned(),
            effect: self.effect,
            xp_reward: self.xp_reward,
            price: Some(self.price),
        }
    }
}

/// An ordered, id-unique set of item definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    /// The eighteen items the game ships with.
    pub fn standard() -> Self {
        Self {
            items: STANDARD_ROWS.iter().map(Row::definition).collect(),
        }
    }

    /// Build a catalog from arbitrary definitions. Later duplicates of an id
    /// are ignored.
    pub fn from_items(items: impl IntoIterator<Item = ItemDefinition>) -> Self {
        let mut unique: Vec<ItemDefinition> = Vec::new();
        for item in items {
            if !unique.iter().any(|existing| existing.id == item.id) {
                unique.push(item);
            }
        }
        Self { items: unique }
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Every item in display order.
    pub fn all(&self) -> &[ItemDefinition] {
        &self.items
    }

    /// Items of one category in display order.
    pub fn by_type(&self, item_type: ItemType) -> impl Iterator<Item = &ItemDefinition> {
        self.items
            .iter()
            .filter(move |item| item.item_type == item_type)
    }

    /// Items that can be bought.
    pub fn purchasable(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter().filter(|item| item.price.is_some())
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
