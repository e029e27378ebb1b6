//! # Transaction Ledger
//!
//! Append-only history of completed sales, ordered most-recent-first.
//!
//! The ledger is the only component that never shrinks: transactions are
//! prepended by checkout and are immutable afterwards. There is no void,
//! refund, or delete operation.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Transaction;

/// Immutable, prepend-ordered history of completed sales.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    /// Creates a ledger from pre-recorded transactions (seed/demo data).
    ///
    /// The input must already be most-recent-first.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Ledger { transactions }
    }

    /// Id for the next transaction: `len + 1`.
    ///
    /// Collision-free only because the ledger never prunes. If a delete
    /// operation is ever added, this must become a monotonic counter.
    #[inline]
    pub fn next_id(&self) -> u32 {
        self.transactions.len() as u32 + 1
    }

    /// Prepends a committed transaction (most-recent-first ordering).
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    /// All transactions, most recent first.
    #[inline]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The `n` most recent transactions.
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..n.min(self.transactions.len())]
    }

    /// Looks up a transaction by id (the "view transaction" detail panel).
    pub fn get(&self, id: u32) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Sum of net amounts over the whole ledger.
    pub fn total_revenue(&self) -> Money {
        self.transactions
            .iter()
            .fold(Money::zero(), |sum, tx| sum + tx.net_amount())
    }

    /// Number of recorded transactions.
    #[inline]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Checks if the ledger is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
