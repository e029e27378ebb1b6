//! # vela-core: Pure Business Logic for Vela POS
//!
//! This crate is the **heart** of Vela POS. It contains all business logic
//! as pure data structures and functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Vela POS Architecture                         │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │              Embedding application (renderer)               │   │
//! │  │    Inventory UI ──► POS/Cart UI ──► Transactions UI         │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ snapshots / operations              │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                      vela-store                             │   │
//! │  │    SessionStore: permission gate, mutex boundary, logging   │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ vela-core (THIS CRATE) ★                    │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────┐ ┌────────┐ ┌──────────┐  │   │
//! │  │  │  money  │ │ catalog │ │ cart │ │ ledger │ │ checkout │  │   │
//! │  │  └─────────┘ └─────────┘ └──────┘ └────────┘ └──────────┘  │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • NO RENDERING           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, CartLine, Transaction, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//! - [`catalog`] - The mutable list of sellable items
//! - [`cart`] - The in-progress sale, bounded by catalog stock
//! - [`ledger`] - Append-only, most-recent-first sale history
//! - [`checkout`] - Totals computation and atomic transaction commit
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: catalog, cart, and ledger are plain values owned
//!    by the caller; nothing in this crate is global.
//! 2. **Integer Money**: all monetary values are cents (i64), never floats.
//! 3. **Explicit Errors**: every failure is a typed [`CoreError`]; a failed
//!    operation leaves all state untouched.
//!
//! ## Example Usage
//!
//! ```rust
//! use vela_core::{Catalog, Cart, Ledger, Money, checkout};
//!
//! let mut catalog = Catalog::new();
//! let id = catalog
//!     .add_item("Laptop", "Electronics", 10, Money::from_cents(99_999))
//!     .unwrap()
//!     .id;
//!
//! let mut cart = Cart::new();
//! let item = catalog.get(id).unwrap().clone();
//! cart.add_item(&item).unwrap();
//!
//! let mut ledger = Ledger::new();
//! let tx = checkout::process_transaction(
//!     &mut catalog,
//!     &mut cart,
//!     &mut ledger,
//!     Money::zero(),
//!     "demo",
//! )
//! .unwrap();
//!
//! assert_eq!(tx.net_cents, 99_999);
//! assert_eq!(catalog.get(id).unwrap().quantity, 9);
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vela_core::Money` instead of
// `use vela_core::money::Money`

pub use cart::Cart;
pub use catalog::Catalog;
pub use checkout::Totals;
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::Ledger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Stock level below which an item counts as "low stock" on the dashboard.
///
/// Strictly-less-than comparison: an item with exactly this quantity is
/// not low stock. Query helpers accept an explicit threshold for callers
/// that want a different cutoff.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// Default number of ledger entries shown in the "recent transactions"
/// dashboard panel.
pub const RECENT_TRANSACTIONS: usize = 5;
