//! # Catalog Store
//!
//! The mutable list of sellable items, in insertion order.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Catalog Operations                          │
//! │                                                                 │
//! │  add_item(name, category, qty, price) ──► validate, id = max+1  │
//! │  delete_item(id) ─────────────────────► retain(), idempotent    │
//! │  items() / item(id) / get(id) ────────► read-only access        │
//! │  search(term) ────────────────────────► filtered view           │
//! │  low_stock(threshold) ────────────────► filtered view           │
//! │  decrement_stock(id, units) ──────────► checkout only           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id Assignment
//! Ids are `max(existing ids, 0) + 1`. After deleting the highest-id
//! item its id CAN be reused by a later add; ids are only guaranteed
//! unique among items currently in the catalog.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Item;
use crate::validation::{validate_category, validate_item_name, validate_price, validate_quantity};

/// The set of sellable items with stock levels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog { items: Vec::new() }
    }

    /// Creates a catalog from pre-built items (seed/demo data).
    pub fn from_items(items: Vec<Item>) -> Self {
        Catalog { items }
    }

    /// Adds a new item and returns a reference to it.
    ///
    /// ## Behavior
    /// - All four fields are validated *before* anything is touched; a
    ///   rejected add leaves the catalog exactly as it was
    /// - Name and category are stored trimmed
    /// - The new id is `max(existing ids, 0) + 1`
    ///
    /// ## Errors
    /// [`CoreError::Validation`] when name/category are empty or
    /// quantity/price are negative.
    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        price: Money,
    ) -> CoreResult<&Item> {
        let name = validate_item_name(name)?;
        let category = validate_category(category)?;
        validate_quantity(quantity)?;
        validate_price(price)?;

        let id = self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1;

        let slot = self.items.len();
        self.items.push(Item {
            id,
            name,
            category,
            quantity,
            price_cents: price.cents(),
        });

        Ok(&self.items[slot])
    }

    /// Removes the item with the given id, if present.
    ///
    /// Idempotent: deleting an absent id is not an error. Returns whether
    /// an item was actually removed.
    pub fn delete_item(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Returns all items in insertion order.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    #[inline]
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by id, failing with [`CoreError::ItemNotFound`].
    pub fn get(&self, id: u32) -> CoreResult<&Item> {
        self.item(id).ok_or(CoreError::ItemNotFound(id))
    }

    /// Case-insensitive substring search over name OR category.
    ///
    /// Non-mutating filtered view; an empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Item> {
        let term = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&term)
                    || item.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Items with quantity strictly below `threshold`.
    pub fn low_stock(&self, threshold: i64) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.is_low_stock(threshold))
            .collect()
    }

    /// Number of items in the catalog.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of on-hand units across all items (dashboard / test helper).
    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Decrements an item's stock by `units` at checkout.
    ///
    /// No stock re-validation happens here: cart quantities were bounded
    /// by stock when they were added, and checkout applies the decrement
    /// as committed (spec'd behavior; quantity can in principle reach
    /// zero but not go below it through the cart path).
    pub(crate) fn decrement_stock(&mut self, id: u32, units: i64) -> CoreResult<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ItemNotFound(id))?;
        item.quantity -= units;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_item("Laptop", "Electronics", 10, Money::from_cents(99_999))
            .unwrap();
        catalog
            .add_item("Coffee Beans", "Food", 50, Money::from_cents(1_299))
            .unwrap();
        catalog
            .add_item("Office Chair", "Furniture", 25, Money::from_cents(19_999))
            .unwrap();
        catalog
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let catalog = seeded();
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_trims_fields() {
        let mut catalog = Catalog::new();
        let item = catalog
            .add_item("  Notebook ", " Stationery ", 100, Money::from_cents(299))
            .unwrap();
        assert_eq!(item.name, "Notebook");
        assert_eq!(item.category, "Stationery");
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut catalog = seeded();

        assert!(catalog
            .add_item("", "Food", 5, Money::from_cents(100))
            .is_err());
        assert!(catalog
            .add_item("Tea", "", 5, Money::from_cents(100))
            .is_err());
        assert!(catalog
            .add_item("Tea", "Food", -5, Money::from_cents(100))
            .is_err());
        assert!(catalog
            .add_item("Tea", "Food", 5, Money::from_cents(-100))
            .is_err());

        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_id_follows_max_not_len() {
        let mut catalog = seeded();
        catalog.delete_item(2);

        // len is 2 but max id is 3, so the next id must be 4
        let item = catalog
            .add_item("Desk Lamp", "Furniture", 30, Money::from_cents(4_999))
            .unwrap();
        assert_eq!(item.id, 4);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut catalog = seeded();

        assert!(catalog.delete_item(1));
        assert!(!catalog.delete_item(1));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.item(1).is_none());
    }

    #[test]
    fn test_get_not_found() {
        let catalog = seeded();
        assert!(matches!(catalog.get(99), Err(CoreError::ItemNotFound(99))));
    }

    #[test]
    fn test_search_matches_name_or_category_case_insensitive() {
        let catalog = seeded();

        let by_name = catalog.search("laptop");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Laptop");

        let by_category = catalog.search("FURN");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].name, "Office Chair");

        assert_eq!(catalog.search("").len(), 3);
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_low_stock_strict_threshold() {
        let catalog = seeded();

        let low = catalog.low_stock(20);
        assert_eq!(low.len(), 1); // only the Laptop (10)

        let low = catalog.low_stock(25);
        assert_eq!(low.len(), 1); // Office Chair (25) still not below 25

        let low = catalog.low_stock(26);
        assert_eq!(low.len(), 2);
    }

    #[test]
    fn test_decrement_stock() {
        let mut catalog = seeded();
        catalog.decrement_stock(1, 3).unwrap();
        assert_eq!(catalog.get(1).unwrap().quantity, 7);

        assert!(catalog.decrement_stock(99, 1).is_err());
    }
}
