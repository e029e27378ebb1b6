//! # Cart
//!
//! The in-progress sale: an ordered list of item-quantity lines, bounded
//! by catalog stock.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                            │
//! │                                                                 │
//! │  UI Action              Operation              State Change     │
//! │  ─────────              ─────────              ────────────     │
//! │  Click item card ─────► add_item() ──────────► push / qty+1     │
//! │  Click "+" ───────────► increase_quantity() ─► lines[i].qty+1   │
//! │  Click "-" ───────────► decrease_quantity() ─► lines[i].qty-1   │
//! │  Click "×" ───────────► remove_line() ───────► lines.remove(i)  │
//! │  Click "Clear" ───────► clear() ─────────────► lines.clear()    │
//! │                                                                 │
//! │  Every +1 is checked against the item's CURRENT catalog stock.  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positional Addressing
//! Lines are addressed by their current position, matching how a fully
//! redrawn cart list indexes its rows. A renderer must use post-redraw
//! indices; a stale index past the end fails with
//! [`CoreError::LineNotFound`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Item};

/// The transient selection of items for an in-progress sale.
///
/// ## Invariants
/// - At most one line per catalog item (re-adding increments quantity)
/// - Every line quantity is >= 1
/// - A quantity increment is only accepted while the resulting quantity
///   stays within the item's catalog stock at the time of the action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a catalog item to the cart.
    ///
    /// ## Behavior
    /// - Item already in cart: increments that line's quantity, but only
    ///   if the result stays within the item's *current* catalog stock
    /// - Item not in cart: inserts a new quantity-1 line holding a frozen
    ///   copy of the item's name and price (same stock check, so a
    ///   zero-stock item never enters the cart)
    ///
    /// ## Errors
    /// [`CoreError::InsufficientStock`] at the stock bound; the cart is
    /// left unchanged.
    pub fn add_item(&mut self, item: &Item) -> CoreResult<()> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            if line.quantity + 1 > item.quantity {
                return Err(CoreError::InsufficientStock {
                    name: item.name.clone(),
                    available: item.quantity,
                    requested: line.quantity + 1,
                });
            }
            line.quantity += 1;
            return Ok(());
        }

        if item.quantity < 1 {
            return Err(CoreError::InsufficientStock {
                name: item.name.clone(),
                available: item.quantity,
                requested: 1,
            });
        }

        self.lines.push(CartLine::from_item(item));
        Ok(())
    }

    /// Increments the quantity of the line at `index`.
    ///
    /// The stock check consults the *live* catalog entry, not the frozen
    /// line snapshot, so catalog edits made after add-to-cart are honored.
    ///
    /// ## Errors
    /// - [`CoreError::LineNotFound`] for an out-of-range index
    /// - [`CoreError::ItemNotFound`] if the item was deleted from the
    ///   catalog after it entered the cart
    /// - [`CoreError::InsufficientStock`] at the stock bound
    pub fn increase_quantity(&mut self, index: usize, catalog: &Catalog) -> CoreResult<()> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CoreError::LineNotFound { index, len })?;

        let item = catalog.get(line.item_id)?;
        if line.quantity + 1 > item.quantity {
            return Err(CoreError::InsufficientStock {
                name: item.name.clone(),
                available: item.quantity,
                requested: line.quantity + 1,
            });
        }

        line.quantity += 1;
        Ok(())
    }

    /// Decrements the quantity of the line at `index`, flooring at 1.
    ///
    /// Decrementing a quantity-1 line is a deliberate no-op; lines only
    /// leave the cart through [`remove_line`](Cart::remove_line) or
    /// [`clear`](Cart::clear).
    pub fn decrease_quantity(&mut self, index: usize) -> CoreResult<()> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CoreError::LineNotFound { index, len })?;

        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Ok(())
    }

    /// Removes the line at `index` entirely, regardless of quantity.
    pub fn remove_line(&mut self, index: usize) -> CoreResult<CartLine> {
        if index >= self.lines.len() {
            return Err(CoreError::LineNotFound {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Returns the lines in order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Subtotal over the frozen line prices.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |sum, line| sum + line.line_total())
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_item("Laptop", "Electronics", 10, Money::from_cents(99_999))
            .unwrap();
        catalog
            .add_item("Notebook", "Stationery", 1, Money::from_cents(299))
            .unwrap();
        catalog
            .add_item("Sold Out", "Misc", 0, Money::from_cents(500))
            .unwrap();
        catalog
    }

    fn add(cart: &mut Cart, catalog: &Catalog, id: u32) -> CoreResult<()> {
        let item = catalog.get(id).unwrap().clone();
        cart.add_item(&item)
    }

    #[test]
    fn test_add_creates_then_increments() {
        let catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 1).unwrap();
        add(&mut cart, &catalog, 1).unwrap();
        add(&mut cart, &catalog, 1).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.subtotal(), Money::from_cents(299_997));
    }

    #[test]
    fn test_add_respects_stock_bound() {
        let catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 2).unwrap(); // stock is 1
        let err = add(&mut cart, &catalog, 2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 1,
                requested: 2,
                ..
            }
        ));
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_add_zero_stock_item_fails() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let err = add(&mut cart, &catalog, 3).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increase_checks_live_catalog() {
        let mut catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 2).unwrap(); // Notebook, stock 1
        assert!(matches!(
            cart.increase_quantity(0, &catalog),
            Err(CoreError::InsufficientStock { .. })
        ));

        // The catalog entry can vanish between add-to-cart and the "+".
        catalog.delete_item(2);
        let err = cart.increase_quantity(0, &catalog).unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(2)));
    }

    #[test]
    fn test_increase_out_of_range_index() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let err = cart.increase_quantity(0, &catalog).unwrap_err();
        assert!(matches!(err, CoreError::LineNotFound { index: 0, len: 0 }));
    }

    #[test]
    fn test_decrease_floors_at_one() {
        let catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 1).unwrap();
        add(&mut cart, &catalog, 1).unwrap();

        cart.decrease_quantity(0).unwrap();
        assert_eq!(cart.lines()[0].quantity, 1);

        // Quantity-1 decrement is a no-op, the line stays.
        cart.decrease_quantity(0).unwrap();
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_line() {
        let catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 1).unwrap();
        add(&mut cart, &catalog, 2).unwrap();

        let removed = cart.remove_line(0).unwrap();
        assert_eq!(removed.name, "Laptop");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].name, "Notebook");

        assert!(cart.remove_line(5).is_err());
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();

        add(&mut cart, &catalog, 1).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
