//! Automatic care: need assessment, one-click care, restocking and hints.
//!
//! The planner never bypasses the pet's own rules. Every step goes through
//! [`Pet::use_item`] and every restock through [`Pet::buy`], so inventory,
//! coins and stats stay consistent even when a step fails.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use petterm_types::{
    AutoPurchaseResult, CareAction, CareActionResult, CareNeed, CareResult, PetStats,
    PurchasedItem, Stat, StatTransition,
};

use crate::catalog::ItemCatalog;
use crate::config::CareThresholds;
use crate::error::PetError;
use crate::pet::Pet;

/// Coins above which a low inventory earns a shop hint.
const PLENTIFUL_COINS: u64 = 100;

/// Energy below which a sleeping pet is best left alone.
const RESTING_ENERGY: u32 = 80;

/// One need rule: the stat it watches and the item that fixes it.
struct NeedRule {
    stat: Stat,
    action: CareAction,
    item_id: &'static str,
    priority: u32,
}

const NEED_RULES: [NeedRule; 4] = [
    NeedRule {
        stat: Stat::Hunger,
        action: CareAction::Feed,
        item_id: "fish",
        priority: 100,
    },
    NeedRule {
        stat: Stat::Health,
        action: CareAction::Heal,
        item_id: "medicine",
        priority: 90,
    },
    NeedRule {
        stat: Stat::Happiness,
        action: CareAction::Play,
        item_id: "ball",
        priority: 70,
    },
    NeedRule {
        stat: Stat::Cleanliness,
        action: CareAction::Clean,
        item_id: "soap",
        priority: 60,
    },
];

/// Items tried, in order, when the preferred item is not in the inventory.
const fn fallbacks(action: CareAction) -> &'static [&'static str] {
    match action {
        CareAction::Feed => &["premium_food", "treat"],
        CareAction::Play => &["squeaky_toy", "frisbee"],
        CareAction::Clean => &["shampoo"],
        CareAction::Heal => &["bandage"],
    }
}

/// A restocking rule: keep at least `min_quantity` when `coins` reach
/// `required_coins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPurchaseRule {
    /// Catalog id.
    pub item_id: &'static str,
    /// Stock below which the rule fires.
    pub min_quantity: u32,
    /// Balance needed before the rule fires.
    pub required_coins: u64,
    /// Unit price paid.
    pub price: u64,
}

/// Restocking rules in the order they are applied.
pub const AUTO_PURCHASE_RULES: [AutoPurchaseRule; 4] = [
    AutoPurchaseRule {
        item_id: "fish",
        min_quantity: 2,
        required_coins: 20,
        price: 10,
    },
    AutoPurchaseRule {
        item_id: "ball",
        min_quantity: 1,
        required_coins: 25,
        price: 15,
    },
    AutoPurchaseRule {
        item_id: "soap",
        min_quantity: 1,
        required_coins: 15,
        price: 10,
    },
    AutoPurchaseRule {
        item_id: "medicine",
        min_quantity: 1,
        required_coins: 35,
        price: 30,
    },
];

/// Plans and runs automatic care for a pet.
#[derive(Debug, Clone)]
pub struct CarePlanner<'a> {
    catalog: &'a ItemCatalog,
    thresholds: CareThresholds,
    auto_purchase: bool,
}

impl<'a> CarePlanner<'a> {
    /// Create a planner. Restocking only happens when `auto_purchase` is set.
    pub const fn new(catalog: &'a ItemCatalog, thresholds: CareThresholds, auto_purchase: bool) -> Self {
        Self {
            catalog,
            thresholds,
            auto_purchase,
        }
    }

    /// Thresholds in use.
    pub const fn thresholds(&self) -> &CareThresholds {
        &self.thresholds
    }

    const fn threshold(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hunger => self.thresholds.hunger,
            Stat::Happiness => self.thresholds.happiness,
            Stat::Health => self.thresholds.health,
            Stat::Cleanliness => self.thresholds.cleanliness,
            Stat::Energy => self.thresholds.energy,
        }
    }

    fn item_name(&self, item_id: &str) -> String {
        self.catalog
            .get(item_id)
            .map_or_else(|| item_id.to_owned(), |item| item.name.clone())
    }

    /// Stats below their thresholds, highest priority first. A sleeping pet
    /// has no needs.
    pub fn assess_needs(&self, stats: &PetStats, is_sleeping: bool) -> Vec<CareNeed> {
        if is_sleeping {
            return Vec::new();
        }
        let mut needs: Vec<CareNeed> = NEED_RULES
            .iter()
            .filter(|rule| stats.get(rule.stat) < self.threshold(rule.stat))
            .map(|rule| CareNeed {
                stat: rule.stat,
                threshold: self.threshold(rule.stat),
                action: rule.action,
                item_id: rule.item_id.to_owned(),
                item_name: self.item_name(rule.item_id),
                priority: rule.priority,
            })
            .collect();
        needs.sort_by(|a, b| b.priority.cmp(&a.priority));
        needs
    }

    /// Address every current need with one item each.
    ///
    /// Needs are assessed once up front. A step that fails is recorded and
    /// the next one still runs.
    pub fn one_click_care(&self, pet: &mut Pet, now: DateTime<Utc>) -> Result<CareResult, PetError> {
        let stats_before = *pet.stats();
        let needs = self.assess_needs(&stats_before, pet.is_sleeping());
        let mut actions_taken = Vec::with_capacity(needs.len());
        let mut items_used: u32 = 0;

        for need in &needs {
            let step = self.care_step(pet, need, now)?;
            if step.success {
                items_used = items_used.saturating_add(1);
            }
            actions_taken.push(step);
        }

        let result = CareResult {
            success: actions_taken.iter().any(|step| step.success),
            actions_taken,
            stats_before,
            stats_after: *pet.stats(),
            coins_spent: 0,
            items_used,
        };
        info!(needs = needs.len(), items_used, "one-click care finished");
        Ok(result)
    }

    fn care_step(&self, pet: &mut Pet, need: &CareNeed, now: DateTime<Utc>) -> Result<CareActionResult, PetError> {
        let chosen = if pet.quantity(&need.item_id) > 0 {
            Some(need.item_id.clone())
        } else {
            fallbacks(need.action)
                .iter()
                .find(|id| pet.quantity(id) > 0)
                .map(|id| (*id).to_owned())
        };

        let Some(item_id) = chosen else {
            debug!(item = %need.item_id, "no item for care step");
            return Ok(CareActionResult {
                action: need.action,
                item_id: need.item_id.clone(),
                item_name: need.item_name.clone(),
                success: false,
                stat_changes: Vec::new(),
                reason: Some(format!("No {} available. Visit the shop!", need.item_name)),
            });
        };

        let from = pet.stats().get(need.stat);
        let outcome = pet.use_item(self.catalog, &item_id, now)?;
        let to = pet.stats().get(need.stat);
        Ok(CareActionResult {
            action: need.action,
            item_name: self.item_name(&item_id),
            item_id,
            success: outcome.success,
            stat_changes: vec![StatTransition {
                stat: need.stat,
                from,
                to,
            }],
            reason: (!outcome.success).then_some(outcome.message),
        })
    }

    /// Top up low stock according to [`AUTO_PURCHASE_RULES`].
    ///
    /// Eligibility is judged against the balance at the start of the run;
    /// quantities against what is left after earlier rules. Does nothing
    /// unless restocking is enabled.
    pub fn auto_purchase(&self, pet: &mut Pet, now: DateTime<Utc>) -> Result<AutoPurchaseResult, PetError> {
        if !self.auto_purchase {
            return Ok(AutoPurchaseResult::default());
        }
        let coins = pet.coins();
        let mut result = AutoPurchaseResult::default();

        for rule in &AUTO_PURCHASE_RULES {
            if pet.quantity(rule.item_id) >= rule.min_quantity || coins < rule.required_coins {
                continue;
            }
            let affordable = coins
                .saturating_sub(result.total_cost)
                .checked_div(rule.price)
                .unwrap_or(0);
            let cap = u64::from(rule.min_quantity.saturating_mul(2));
            let quantity = u32::try_from(affordable.min(cap)).unwrap_or(0);
            if quantity == 0 {
                continue;
            }
            let cost = rule.price.saturating_mul(u64::from(quantity));
            pet.buy(rule.item_id, quantity, cost, now)?;
            result.total_cost = result.total_cost.saturating_add(cost);
            result.items.push(PurchasedItem {
                item_id: rule.item_id.to_owned(),
                item_name: self.item_name(rule.item_id),
                quantity,
                cost,
            });
        }

        result.purchased = !result.items.is_empty();
        if result.purchased {
            info!(stacks = result.items.len(), total_cost = result.total_cost, "auto-purchase");
        }
        Ok(result)
    }

    /// False when some rule would fire on stock but the balance cannot
    /// cover it.
    pub fn can_afford_auto_care(pet: &Pet) -> bool {
        AUTO_PURCHASE_RULES
            .iter()
            .all(|rule| pet.quantity(rule.item_id) >= rule.min_quantity || pet.coins() >= rule.required_coins)
    }

    /// Short hints about what to do next.
    pub fn suggestions(&self, pet: &Pet) -> Vec<String> {
        let mut hints = Vec::new();
        let stats = pet.stats();

        if pet.needs_care() {
            hints.push(String::from("💡 Use 'pet care' for one-click care"));
        }
        if pet.coins() > PLENTIFUL_COINS
            && (pet.quantity("fish") < 2 || pet.quantity("ball") < 1 || pet.quantity("soap") < 1)
        {
            hints.push(String::from("💡 Coins plentiful, visit shop: 'pet shop'"));
        }
        if pet.git_streak() == 0 && pet.git_commit_count() == 0 {
            hints.push(String::from("💡 Make git commits to improve pet stats!"));
        }
        if pet.is_sleeping() && stats.energy < RESTING_ENERGY {
            hints.push(String::from("💡 Let your pet sleep to restore energy"));
        } else if !pet.is_sleeping() && stats.energy < self.thresholds.energy {
            hints.push(String::from("💡 Your pet is tired. Try 'pet sleep'"));
        }
        hints
    }
}
