//! # Session Store
//!
//! The catalog + cart + ledger triple owned by one session, plus the
//! operations a renderer drives.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   SessionStore Operations                       │
//! │                                                                 │
//! │  Renderer Action        Operation            Gate               │
//! │  ───────────────        ─────────            ────               │
//! │  Submit item form ────► add_item()           Create_Item        │
//! │  Click Delete ────────► delete_item()        Delete_Item        │
//! │  Click item card ─────► add_to_cart()        -                  │
//! │  Click +/-/× ─────────► increase/decrease/   -                  │
//! │                         remove_from_cart()                      │
//! │  Edit discount box ───► compute_totals()     -                  │
//! │  Click Checkout ──────► checkout()           -                  │
//! │  Open dashboard ──────► dashboard_summary()  -                  │
//! │                                                                 │
//! │  The gate runs BEFORE validation: a denied caller learns        │
//! │  nothing about whether their input was otherwise valid.         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Reads
//! Every read returns owned copies, never references into the store, so
//! a renderer can redraw fully after any mutation without holding the
//! lock. Mutation and rendering are completely decoupled.

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, info, warn};
use vela_core::{
    checkout, Cart, CartLine, Catalog, CoreError, Item, Ledger, Money, Totals, Transaction,
    LOW_STOCK_THRESHOLD, RECENT_TRANSACTIONS,
};

use crate::error::{StoreError, StoreResult};
use crate::seed;
use crate::session::{Permission, Session};

// =============================================================================
// Dashboard Summary
// =============================================================================

/// One consistent snapshot of everything the dashboard landing page
/// shows. Taken under the store lock, so the counts, revenue, and lists
/// can never disagree with each other.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of items in the catalog.
    pub total_items: usize,

    /// Number of recorded transactions.
    pub total_transactions: usize,

    /// Sum of net amounts over the whole ledger, in cents.
    pub total_revenue_cents: i64,

    /// The most recent transactions (up to [`RECENT_TRANSACTIONS`]).
    pub recent_transactions: Vec<Transaction>,

    /// Items below [`LOW_STOCK_THRESHOLD`].
    pub low_stock_items: Vec<Item>,
}

// =============================================================================
// Session Store
// =============================================================================

/// The mutable state of one session: who is acting, what is for sale,
/// what is in the cart, and what has been sold.
#[derive(Debug)]
pub struct SessionStore {
    session: Session,
    catalog: Catalog,
    cart: Cart,
    ledger: Ledger,
}

impl SessionStore {
    /// Creates a store with an empty catalog and ledger.
    pub fn new(session: Session) -> Self {
        SessionStore {
            session,
            catalog: Catalog::new(),
            cart: Cart::new(),
            ledger: Ledger::new(),
        }
    }

    /// Creates a store pre-populated with the demo catalog and ledger.
    pub fn with_demo_data(session: Session) -> Self {
        SessionStore {
            session,
            catalog: seed::demo_catalog(),
            cart: Cart::new(),
            ledger: seed::demo_ledger(),
        }
    }

    /// The session this store acts for.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The permission gate. Denied operations fail with a distinct
    /// access-denied outcome before any input validation runs.
    fn require(&self, permission: Permission) -> StoreResult<()> {
        if self.session.has_permission(permission) {
            Ok(())
        } else {
            warn!(
                username = %self.session.username,
                permission = %permission,
                "operation denied by permission gate"
            );
            Err(StoreError::access_denied(permission))
        }
    }

    // -------------------------------------------------------------------------
    // Catalog operations
    // -------------------------------------------------------------------------

    /// Adds a catalog item. Gated on `Create_Item`.
    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        quantity: i64,
        price: Money,
    ) -> StoreResult<Item> {
        debug!(name, category, quantity, %price, "add_item");
        self.require(Permission::CreateItem)?;

        let item = self.catalog.add_item(name, category, quantity, price)?.clone();
        info!(item_id = item.id, name = %item.name, "item added");
        Ok(item)
    }

    /// Deletes a catalog item. Gated on `Delete_Item`; idempotent once
    /// past the gate.
    pub fn delete_item(&mut self, id: u32) -> StoreResult<()> {
        debug!(item_id = id, "delete_item");
        self.require(Permission::DeleteItem)?;

        if self.catalog.delete_item(id) {
            info!(item_id = id, "item deleted");
        }
        Ok(())
    }

    /// Full catalog snapshot in insertion order.
    pub fn list_items(&self) -> Vec<Item> {
        self.catalog.items().to_vec()
    }

    /// Single-item lookup.
    pub fn find_item(&self, id: u32) -> StoreResult<Item> {
        Ok(self.catalog.get(id)?.clone())
    }

    /// Case-insensitive name/category search (POS grid filter).
    pub fn search_items(&self, term: &str) -> Vec<Item> {
        self.catalog.search(term).into_iter().cloned().collect()
    }

    /// Items below the given threshold (dashboard low-stock panel).
    pub fn low_stock_items(&self, threshold: i64) -> Vec<Item> {
        self.catalog
            .low_stock(threshold)
            .into_iter()
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Cart operations
    // -------------------------------------------------------------------------

    /// Adds one unit of the given catalog item to the cart.
    pub fn add_to_cart(&mut self, item_id: u32) -> StoreResult<()> {
        debug!(item_id, "add_to_cart");
        let item = self.catalog.get(item_id)?.clone();
        self.cart.add_item(&item)?;
        Ok(())
    }

    /// Increments the cart line at `index` (stock-checked).
    pub fn increase_quantity(&mut self, index: usize) -> StoreResult<()> {
        debug!(index, "increase_quantity");
        self.cart.increase_quantity(index, &self.catalog)?;
        Ok(())
    }

    /// Decrements the cart line at `index`, flooring at quantity 1.
    pub fn decrease_quantity(&mut self, index: usize) -> StoreResult<()> {
        debug!(index, "decrease_quantity");
        self.cart.decrease_quantity(index)?;
        Ok(())
    }

    /// Removes the cart line at `index`.
    pub fn remove_from_cart(&mut self, index: usize) -> StoreResult<()> {
        debug!(index, "remove_from_cart");
        self.cart.remove_line(index)?;
        Ok(())
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
    }

    /// Cart snapshot in line order.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lines().to_vec()
    }

    /// Display totals for the current cart and discount box contents.
    pub fn compute_totals(&self, discount_input: &str) -> Totals {
        checkout::compute_totals(&self.cart, discount_input)
    }

    // -------------------------------------------------------------------------
    // Checkout
    // -------------------------------------------------------------------------

    /// Commits the cart as a transaction under this session's username.
    ///
    /// `discount_input` is parsed leniently like the display path;
    /// unparseable or negative input means no discount. Returns the
    /// committed transaction for the receipt view.
    pub fn checkout(&mut self, discount_input: &str) -> StoreResult<Transaction> {
        debug!(discount_input, "checkout");

        let discount = Money::parse_or_zero(discount_input);
        let transaction = checkout::process_transaction(
            &mut self.catalog,
            &mut self.cart,
            &mut self.ledger,
            discount,
            &self.session.username,
        )?;

        info!(
            transaction_id = transaction.id,
            net = %transaction.net_amount(),
            lines = transaction.line_count(),
            "transaction committed"
        );
        Ok(transaction)
    }

    // -------------------------------------------------------------------------
    // Ledger queries
    // -------------------------------------------------------------------------

    /// Full ledger snapshot, most recent first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.ledger.transactions().to_vec()
    }

    /// The `n` most recent transactions.
    pub fn recent_transactions(&self, n: usize) -> Vec<Transaction> {
        self.ledger.recent(n).to_vec()
    }

    /// Single-transaction lookup (the "view transaction" detail panel).
    pub fn transaction(&self, id: u32) -> StoreResult<Transaction> {
        self.ledger
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::TransactionNotFound(id).into())
    }

    /// Sum of net amounts over the whole ledger.
    pub fn total_revenue(&self) -> Money {
        self.ledger.total_revenue()
    }

    /// One consistent dashboard snapshot.
    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_items: self.catalog.len(),
            total_transactions: self.ledger.len(),
            total_revenue_cents: self.ledger.total_revenue().cents(),
            recent_transactions: self.ledger.recent(RECENT_TRANSACTIONS).to_vec(),
            low_stock_items: self
                .catalog
                .low_stock(LOW_STOCK_THRESHOLD)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

// =============================================================================
// Store State
// =============================================================================

/// Shared handle to a [`SessionStore`].
///
/// ## Thread Safety
/// Uses `Arc<Mutex<SessionStore>>`:
/// - `Arc`: shared ownership across handler threads
/// - `Mutex`: ONE lock over the catalog+cart+ledger triple, so no
///   concurrent checkout can corrupt stock levels
///
/// ## Why Not RwLock?
/// Operations are quick and most of them mutate. A RwLock would add
/// complexity with minimal benefit.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<SessionStore>>,
}

impl StoreState {
    /// Wraps a store for shared use.
    pub fn new(store: SessionStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let items = state.with_store(|store| store.list_items());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&SessionStore) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.add_to_cart(item_id))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut SessionStore) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn admin_session() -> Session {
        Session {
            username: "shawaiz".to_string(),
            tenant_name: "Acme Retail".to_string(),
            roles: vec!["Admin".to_string()],
            permissions: [
                Permission::CreateItem,
                Permission::ReadItem,
                Permission::UpdateItem,
                Permission::DeleteItem,
            ]
            .into_iter()
            .collect(),
        }
    }

    fn cashier_session() -> Session {
        Session {
            username: "mustafa".to_string(),
            tenant_name: "Acme Retail".to_string(),
            roles: vec!["Cashier".to_string()],
            permissions: [Permission::ReadItem].into_iter().collect(),
        }
    }

    #[test]
    fn test_gate_denies_before_validation() {
        let mut store = SessionStore::with_demo_data(cashier_session());

        // Input is invalid too, but the gate must answer first.
        let err = store.add_item("", "", -1, Money::from_cents(-1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);

        let err = store.delete_item(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::AccessDenied);
        assert_eq!(store.list_items().len(), 6);
    }

    #[test]
    fn test_add_and_delete_item_with_permission() {
        let mut store = SessionStore::with_demo_data(admin_session());

        let item = store
            .add_item("Monitor", "Electronics", 12, Money::from_cents(24_999))
            .unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(store.list_items().len(), 7);

        store.delete_item(7).unwrap();
        store.delete_item(7).unwrap(); // idempotent
        assert_eq!(store.list_items().len(), 6);
    }

    #[test]
    fn test_validation_error_reaches_caller() {
        let mut store = SessionStore::with_demo_data(admin_session());

        let err = store
            .add_item("", "Food", 5, Money::from_cents(100))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(store.list_items().len(), 6);
    }

    #[test]
    fn test_cart_flow_and_checkout() {
        let mut store = SessionStore::with_demo_data(admin_session());

        for _ in 0..3 {
            store.add_to_cart(1).unwrap();
        }
        assert_eq!(store.cart_lines().len(), 1);
        assert_eq!(store.cart_lines()[0].quantity, 3);

        let totals = store.compute_totals("50");
        assert_eq!(totals.subtotal_cents, 299_997);
        assert_eq!(totals.total_cents, 294_997);

        let tx = store.checkout("50").unwrap();
        assert_eq!(tx.id, 3); // demo ledger already has two entries
        assert_eq!(tx.username, "shawaiz");
        assert_eq!(tx.net_cents, 294_997);

        assert_eq!(store.find_item(1).unwrap().quantity, 7);
        assert!(store.cart_lines().is_empty());
        assert_eq!(store.recent_transactions(1)[0].id, 3);
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut store = SessionStore::with_demo_data(admin_session());
        let err = store.checkout("").unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_dashboard_summary_consistency() {
        let store = SessionStore::with_demo_data(admin_session());
        let summary = store.dashboard_summary();

        assert_eq!(summary.total_items, 6);
        assert_eq!(summary.total_transactions, 2);
        assert_eq!(summary.total_revenue_cents, 117_596);
        assert_eq!(summary.recent_transactions.len(), 2);
        // Laptop (10) and Smartphone (15) are below the threshold of 20.
        assert_eq!(summary.low_stock_items.len(), 2);
    }

    #[test]
    fn test_store_state_round_trip() {
        let state = StoreState::new(SessionStore::with_demo_data(admin_session()));

        state
            .with_store_mut(|store| store.add_to_cart(2))
            .unwrap();
        let lines = state.with_store(|store| store.cart_lines());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Coffee Beans");
    }
}
