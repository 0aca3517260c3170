//! Inventory operations over the pet's item stacks.
//!
//! The inventory is a map from catalog id to a positive quantity. A stack
//! that reaches zero is removed, so `has_item` and the persisted list never
//! see empty stacks. All arithmetic is checked.

use std::collections::BTreeMap;

use crate::error::PetError;

/// Quantity of `item_id` held, zero if absent.
pub fn quantity(inventory: &BTreeMap<String, u32>, item_id: &str) -> u32 {
    inventory.get(item_id).copied().unwrap_or(0)
}

/// Whether at least one of `item_id` is held.
pub fn has_item(inventory: &BTreeMap<String, u32>, item_id: &str) -> bool {
    quantity(inventory, item_id) > 0
}

/// Add `amount` of `item_id`. Adding zero is a no-op.
pub fn add_item(
    inventory: &mut BTreeMap<String, u32>,
    item_id: &str,
    amount: u32,
) -> Result<(), PetError> {
    if amount == 0 {
        return Ok(());
    }
    let current = quantity(inventory, item_id);
    let updated = current
        .checked_add(amount)
        .ok_or_else(|| PetError::ArithmeticOverflow {
            context: format!("stack of {item_id} overflowed"),
        })?;
    inventory.insert(item_id.to_owned(), updated);
    Ok(())
}

/// Remove `amount` of `item_id`, dropping the stack when it empties.
///
/// Fails without modifying anything if fewer than `amount` are held.
pub fn remove_item(
    inventory: &mut BTreeMap<String, u32>,
    item_id: &str,
    amount: u32,
) -> Result<(), PetError> {
    let available = quantity(inventory, item_id);
    let remaining = available
        .checked_sub(amount)
        .ok_or_else(|| PetError::InsufficientItems {
            item_id: item_id.to_owned(),
            requested: amount,
            available,
        })?;
    if remaining == 0 {
        inventory.remove(item_id);
    } else {
        inventory.insert(item_id.to_owned(), remaining);
    }
    Ok(())
}

/// Total number of items across all stacks.
pub fn total_items(inventory: &BTreeMap<String, u32>) -> u64 {
    inventory
        .values()
        .map(|qty| u64::from(*qty))
        .fold(0, u64::saturating_add)
}

/// Items every newly adopted pet starts with.
pub fn starting_inventory() -> BTreeMap<String, u32> {
    [("fish", 3), ("ball", 2), ("soap", 2), ("medicine", 1)]
        .into_iter()
        .map(|(id, qty)| (String::from(id), qty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_query() {
        let mut inv = BTreeMap::new();
        assert!(add_item(&mut inv, "fish", 2).is_ok());
        assert!(add_item(&mut inv, "fish", 1).is_ok());
        assert_eq!(quantity(&inv, "fish"), 3);
        assert!(has_item(&inv, "fish"));
        assert!(!has_item(&inv, "cake"));
    }

    #[test]
    fn add_zero_creates_no_stack() {
        let mut inv = BTreeMap::new();
        assert!(add_item(&mut inv, "fish", 0).is_ok());
        assert!(inv.is_empty());
    }

    #[test]
    fn add_overflow_is_an_error() {
        let mut inv = BTreeMap::new();
        inv.insert(String::from("fish"), u32::MAX);
        let result = add_item(&mut inv, "fish", 1);
        assert!(matches!(result, Err(PetError::ArithmeticOverflow { .. })));
        assert_eq!(quantity(&inv, "fish"), u32::MAX);
    }

    #[test]
    fn removing_last_item_drops_the_stack() {
        let mut inv = starting_inventory();
        assert!(remove_item(&mut inv, "medicine", 1).is_ok());
        assert!(!inv.contains_key("medicine"));
    }

    #[test]
    fn over_removal_fails_and_leaves_stack() {
        let mut inv = starting_inventory();
        let result = remove_item(&mut inv, "soap", 3);
        assert_eq!(
            result,
            Err(PetError::InsufficientItems {
                item_id: String::from("soap"),
                requested: 3,
                available: 2,
            })
        );
        assert_eq!(quantity(&inv, "soap"), 2);
    }

    #[test]
    fn starting_inventory_contents() {
        let inv = starting_inventory();
        assert_eq!(quantity(&inv, "fish"), 3);
        assert_eq!(quantity(&inv, "ball"), 2);
        assert_eq!(quantity(&inv, "soap"), 2);
        assert_eq!(quantity(&inv, "medicine"), 1);
        assert_eq!(total_items(&inv), 8);
    }
}
