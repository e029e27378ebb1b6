//! # Domain Types
//!
//! Core domain types used throughout Vela POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌────────────────┐  ┌────────────────┐  ┌──────────────────┐   │
//! │  │     Item       │  │   CartLine     │  │   Transaction    │   │
//! │  │  ────────────  │  │  ────────────  │  │  ──────────────  │   │
//! │  │  id (u32)      │  │  item_id       │  │  id (u32)        │   │
//! │  │  name          │  │  name (frozen) │  │  timestamp       │   │
//! │  │  category      │  │  unit_price    │  │  username        │   │
//! │  │  quantity      │  │    (frozen)    │  │  lines (frozen)  │   │
//! │  │  price_cents   │  │  quantity      │  │  subtotal/net    │   │
//! │  └────────────────┘  └────────────────┘  └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A [`CartLine`] freezes the item's name and unit price at the moment it
//! enters the cart, and a [`Transaction`] freezes its lines at checkout.
//! Later catalog edits never rewrite an in-progress cart display or a
//! recorded sale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A sellable catalog item with its current stock level.
///
/// ## Identity
/// `id` is a small sequential integer assigned by the catalog as
/// `max(existing ids) + 1`, unique among items currently in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier within the catalog.
    pub id: u32,

    /// Display name shown in inventory tables and on the POS grid.
    pub name: String,

    /// Free-form category ("Electronics", "Food", ...).
    pub category: String,

    /// Units currently on hand. Decremented by checkout.
    pub quantity: i64,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Item {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether this item belongs on the low-stock panel.
    ///
    /// Strictly less than the threshold: quantity 20 at threshold 20 is
    /// not low stock.
    #[inline]
    pub fn is_low_stock(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One item-quantity pair in the cart.
///
/// ## Design Notes
/// - `item_id`: reference back to the live catalog entry (stock checks
///   always consult the *current* catalog quantity, not a copy)
/// - `name` / `unit_price_cents`: frozen copies taken when the line was
///   created, so the cart display stays consistent if the catalog item
///   is edited underneath it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Id of the catalog item this line refers to.
    pub item_id: u32,

    /// Item name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart; always >= 1 and never above the item's catalog
    /// quantity at the time the last increment was accepted.
    pub quantity: i64,

    /// When this line was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line from a catalog item with quantity 1.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the catalog price changes
    /// afterwards, this line keeps charging the original price.
    pub fn from_item(item: &Item) -> Self {
        CartLine {
            item_id: item.id,
            name: item.name.clone(),
            unit_price_cents: item.price_cents,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total (frozen unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A line item inside a committed transaction.
///
/// Pure snapshot data: the item name and unit price as they were at
/// checkout. Holds no reference back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLine {
    /// Item name at time of sale (frozen).
    pub item_name: String,

    /// Units sold.
    pub quantity: i64,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Line amount (unit price × quantity) in cents.
    pub amount_cents: i64,
}

impl TransactionLine {
    /// Returns the line amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

/// A completed sale.
///
/// Immutable once created: the ledger only ever prepends transactions,
/// never mutates or deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sequential transaction id (1-based).
    pub id: u32,

    /// When the sale was committed.
    pub timestamp: DateTime<Utc>,

    /// Cashier who committed the sale.
    pub username: String,

    /// Frozen cart contents at checkout time, in cart order.
    pub lines: Vec<TransactionLine>,

    /// Sum of line amounts in cents.
    pub subtotal_cents: i64,

    /// Discount applied at checkout, in cents. Never negative.
    pub discount_cents: i64,

    /// `subtotal - discount` in cents. May be negative when the discount
    /// exceeded the subtotal; recorded as-is.
    pub net_cents: i64,
}

impl Transaction {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    /// Returns the discount as Money.
    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    /// Returns the net amount as Money.
    #[inline]
    pub fn net_amount(&self) -> Money {
        Money::from_cents(self.net_cents)
    }

    /// Number of distinct lines on the receipt.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units sold across all lines.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
