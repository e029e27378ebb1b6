//! # Checkout Engine
//!
//! Totals computation and the atomic commit that turns a cart into a
//! ledger transaction.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      process_transaction                        │
//! │                                                                 │
//! │  1. Reject empty cart ───────────────► EmptyCart                │
//! │  2. Resolve EVERY line's catalog item ► ItemNotFound (no        │
//! │     before touching anything            mutation happened)      │
//! │  3. Build the immutable snapshot:                               │
//! │       id = ledger len + 1, timestamp, username,                 │
//! │       lines, subtotal, discount, net = subtotal - discount      │
//! │  4. Apply ALL catalog decrements                                │
//! │  5. Prepend to ledger                                           │
//! │  6. Clear the cart                                              │
//! │                                                                 │
//! │  Steps 4-6 cannot fail once step 2 has passed: the whole        │
//! │  operation either happens completely or not at all.             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display Total vs. Committed Net
//! [`compute_totals`] clamps the on-screen total at zero;
//! [`process_transaction`] records `subtotal - discount` unclamped, so an
//! over-subtotal discount yields a negative net amount in the ledger.
//! That asymmetry is intentional and preserved as-is.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::ledger::Ledger;
use crate::money::Money;
use crate::types::{Transaction, TransactionLine};

// =============================================================================
// Totals
// =============================================================================

/// Display totals for the in-progress sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum over cart lines of frozen unit price × quantity, in cents.
    pub subtotal_cents: i64,

    /// Parsed discount in cents; bad input reads as zero.
    pub discount_cents: i64,

    /// `max(0, subtotal - discount)` in cents — display clamp only.
    pub total_cents: i64,
}

/// Computes display totals from the cart and the raw discount field.
///
/// `discount_input` is the untrimmed text of the discount box; anything
/// that doesn't parse as a non-negative decimal counts as zero.
///
/// ## Example
/// ```rust
/// use vela_core::{Cart, Catalog, Money, checkout};
///
/// let mut catalog = Catalog::new();
/// let id = catalog
///     .add_item("Laptop", "Electronics", 10, Money::from_cents(99_999))
///     .unwrap()
///     .id;
///
/// let mut cart = Cart::new();
/// for _ in 0..3 {
///     let item = catalog.get(id).unwrap().clone();
///     cart.add_item(&item).unwrap();
/// }
///
/// let totals = checkout::compute_totals(&cart, "50");
/// assert_eq!(totals.subtotal_cents, 299_997);
/// assert_eq!(totals.discount_cents, 5_000);
/// assert_eq!(totals.total_cents, 294_997);
/// ```
pub fn compute_totals(cart: &Cart, discount_input: &str) -> Totals {
    let subtotal = cart.subtotal();
    let discount = Money::parse_or_zero(discount_input);
    let total = (subtotal - discount).clamp_non_negative();

    Totals {
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        total_cents: total.cents(),
    }
}

// =============================================================================
// Transaction Commit
// =============================================================================

/// Commits the cart as a transaction: snapshot, stock decrement, ledger
/// prepend, cart clear — as one logical unit.
///
/// ## Atomicity
/// All cart lines are resolved against the catalog before any mutation.
/// If any line's item is gone, the operation fails with
/// [`CoreError::ItemNotFound`] and catalog, cart, and ledger are exactly
/// as they were. Stock is NOT re-validated here: cart quantities were
/// bounded when each increment was accepted.
///
/// Returns a copy of the committed transaction (receipt data); the
/// original lives at the head of the ledger.
///
/// ## Errors
/// - [`CoreError::EmptyCart`] when the cart has no lines
/// - [`CoreError::ItemNotFound`] when a line's catalog entry was deleted
///   between add-to-cart and checkout
pub fn process_transaction(
    catalog: &mut Catalog,
    cart: &mut Cart,
    ledger: &mut Ledger,
    discount: Money,
    username: &str,
) -> CoreResult<Transaction> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    // Phase 1: resolve everything fallible up front.
    for line in cart.lines() {
        catalog.get(line.item_id)?;
    }

    let lines: Vec<TransactionLine> = cart
        .lines()
        .iter()
        .map(|line| TransactionLine {
            item_name: line.name.clone(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            amount_cents: line.line_total().cents(),
        })
        .collect();

    let subtotal = cart.subtotal();
    let transaction = Transaction {
        id: ledger.next_id(),
        timestamp: Utc::now(),
        username: username.to_string(),
        lines,
        subtotal_cents: subtotal.cents(),
        discount_cents: discount.cents(),
        // Unclamped: a discount above the subtotal records a negative net.
        net_cents: (subtotal - discount).cents(),
    };

    // Phase 2: apply all effects; nothing below can fail.
    for line in cart.lines() {
        catalog
            .decrement_stock(line.item_id, line.quantity)
            .expect("resolved in phase 1");
    }

    let receipt = transaction.clone();
    ledger.record(transaction);
    cart.clear();

    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================
