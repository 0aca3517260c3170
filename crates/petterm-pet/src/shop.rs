//! The item shop: prices, affordability and purchases.
//!
//! Every catalog item with a price is for sale. A purchase debits the wallet
//! and credits the inventory in one step, or does neither.

use chrono::{DateTime, Utc};
use tracing::info;

use petterm_types::{ItemDefinition, ItemType, PurchaseResult, PurchasedItem, Rejection};

use crate::actions::validation::rejection_message;
use crate::catalog::ItemCatalog;
use crate::error::PetError;
use crate::pet::Pet;

/// Read-only view of the catalog's purchasable items.
#[derive(Debug, Clone, Copy)]
pub struct Shop<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> Shop<'a> {
    /// Open a shop over `catalog`.
    pub const fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Price of one unit, if the item is for sale.
    pub fn price(&self, item_id: &str) -> Option<u64> {
        self.catalog.get(item_id).and_then(|item| item.price)
    }

    /// Total price of `quantity` units, `None` if not for sale or the total
    /// overflows.
    pub fn total_price(&self, item_id: &str, quantity: u32) -> Option<u64> {
        self.price(item_id)?.checked_mul(u64::from(quantity))
    }

    /// Whether `coins` cover `quantity` units.
    pub fn can_afford(&self, item_id: &str, quantity: u32, coins: u64) -> bool {
        self.total_price(item_id, quantity)
            .is_some_and(|total| total <= coins)
    }

    /// Largest quantity `coins` can pay for. Zero for items not for sale.
    pub fn max_affordable(&self, item_id: &str, coins: u64) -> u64 {
        self.price(item_id)
            .and_then(|price| coins.checked_div(price))
            .unwrap_or(0)
    }

    /// Items for sale, grouped by category in shop order. Empty categories
    /// are left out.
    pub fn listing(&self) -> Vec<(ItemType, Vec<&'a ItemDefinition>)> {
        ItemType::ALL
            .into_iter()
            .map(|item_type| {
                let items: Vec<&'a ItemDefinition> = self
                    .catalog
                    .purchasable()
                    .filter(|item| item.item_type == item_type)
                    .collect();
                (item_type, items)
            })
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }

    /// Buy `quantity` of `item_id` for `pet`.
    ///
    /// Zero quantities, unknown items and short wallets are rejections with
    /// nothing changed.
    pub fn purchase(
        &self,
        pet: &mut Pet,
        item_id: &str,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<PurchaseResult, PetError> {
        let balance = pet.coins();
        let reject = |rejection: Rejection, message: String| PurchaseResult {
            success: false,
            message,
            purchased: None,
            balance,
            rejection: Some(rejection),
        };

        if quantity == 0 {
            return Ok(reject(
                Rejection::InvalidQuantity,
                rejection_message(Rejection::InvalidQuantity, pet.name()),
            ));
        }
        let Some(item) = self.catalog.get(item_id).filter(|item| item.price.is_some()) else {
            return Ok(reject(
                Rejection::UnknownItem,
                format!("'{item_id}' is not sold here."),
            ));
        };
        let Some(cost) = self.total_price(item_id, quantity) else {
            return Ok(reject(
                Rejection::InsufficientFunds,
                rejection_message(Rejection::InsufficientFunds, pet.name()),
            ));
        };
        if cost > balance {
            return Ok(reject(
                Rejection::InsufficientFunds,
                format!("Not enough coins! {} x{quantity} costs {cost}, you have {balance}.", item.name),
            ));
        }

        pet.buy(item_id, quantity, cost, now)?;
        info!(item_id, quantity, cost, balance = pet.coins(), "item purchased");
        Ok(PurchaseResult {
            success: true,
            message: format!("Bought {} {} x{quantity} for {cost} coins.", item.emoji, item.name),
            purchased: Some(PurchasedItem {
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                quantity,
                cost,
            }),
            balance: pet.coins(),
            rejection: None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use petterm_types::{CoinReason, Species};

    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn prices_and_affordability() {
        let catalog = ItemCatalog::standard();
        let shop = Shop::new(&catalog);
        assert_eq!(shop.price("fish"), Some(10));
        assert_eq!(shop.price("nope"), None);
        assert!(shop.can_afford("fish", 5, 50));
        assert!(!shop.can_afford("fish", 6, 50));
        assert_eq!(shop.max_affordable("steak", 60), 2);
        assert_eq!(shop.max_affordable("nope", 60), 0);
    }

    #[test]
    fn listing_groups_by_category() {
        let catalog = ItemCatalog::standard();
        let listing = Shop::new(&catalog).listing();
        let types: Vec<ItemType> = listing.iter().map(|(t, _)| *t).collect();
        assert_eq!(types, ItemType::ALL.to_vec());
        let total: usize = listing.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, 18);
    }

    #[test]
    fn purchase_debits_and_credits() {
        let catalog = ItemCatalog::standard();
        let shop = Shop::new(&catalog);
        let mut pet = Pet::adopt("Buddy", Species::Cat, now());

        let result = shop.purchase(&mut pet, "fish", 3, now()).unwrap();
        assert!(result.success);
        assert_eq!(result.balance, 20);
        assert_eq!(pet.quantity("fish"), 6);
        let last = pet.coin_history().last().unwrap();
        assert_eq!(last.amount, -30);
        assert_eq!(last.reason, CoinReason::Purchase);
    }

    #[test]
    fn purchase_rejections_change_nothing() {
        let catalog = ItemCatalog::standard();
        let shop = Shop::new(&catalog);
        let mut pet = Pet::adopt("Buddy", Species::Cat, now());
        let before = pet.clone();

        let zero = shop.purchase(&mut pet, "fish", 0, now()).unwrap();
        assert_eq!(zero.rejection, Some(Rejection::InvalidQuantity));

        let unknown = shop.purchase(&mut pet, "unicorn", 1, now()).unwrap();
        assert_eq!(unknown.rejection, Some(Rejection::UnknownItem));

        let broke = shop.purchase(&mut pet, "golden_apple", 1, now()).unwrap();
        assert_eq!(broke.rejection, Some(Rejection::InsufficientFunds));
        assert_eq!(broke.balance, 50);

        let huge = shop.purchase(&mut pet, "golden_apple", u32::MAX, now()).unwrap();
        assert!(!huge.success);

        assert_eq!(pet, before);
    }
}
