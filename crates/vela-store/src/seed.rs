//! # Seed Data
//!
//! Demo catalog and ledger fixtures for development and tests.
//!
//! A freshly embedded store usually starts from these so the dashboard
//! has something to show before any real activity: six items across four
//! categories and two pre-recorded sales.

use chrono::{TimeZone, Utc};
use vela_core::{Catalog, Item, Ledger, Money, Transaction, TransactionLine};

/// The six demo items.
const DEMO_ITEMS: &[(&str, &str, i64, i64)] = &[
    ("Laptop", "Electronics", 10, 99_999),
    ("Coffee Beans", "Food", 50, 1_299),
    ("Office Chair", "Furniture", 25, 19_999),
    ("Notebook", "Stationery", 100, 299),
    ("Smartphone", "Electronics", 15, 69_999),
    ("Desk Lamp", "Furniture", 30, 4_999),
];

/// Builds the demo catalog (ids 1-6, insertion order as listed).
pub fn demo_catalog() -> Catalog {
    let items = DEMO_ITEMS
        .iter()
        .enumerate()
        .map(|(index, &(name, category, quantity, price_cents))| Item {
            id: index as u32 + 1,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price_cents,
        })
        .collect();
    Catalog::from_items(items)
}

/// Builds the demo ledger: two historical sales, most recent first.
pub fn demo_ledger() -> Ledger {
    let first = Transaction {
        id: 1,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        username: "shawaiz".to_string(),
        lines: vec![
            TransactionLine {
                item_name: "Laptop".to_string(),
                quantity: 1,
                unit_price_cents: 99_999,
                amount_cents: 99_999,
            },
            TransactionLine {
                item_name: "Notebook".to_string(),
                quantity: 67,
                unit_price_cents: 299,
                amount_cents: 19_999,
            },
        ],
        subtotal_cents: 119_998,
        discount_cents: 5_000,
        net_cents: 114_998,
    };

    let second = Transaction {
        id: 2,
        timestamp: Utc.with_ymd_and_hms(2024, 1, 14, 14, 20, 0).unwrap(),
        username: "mustafa".to_string(),
        lines: vec![TransactionLine {
            item_name: "Coffee Beans".to_string(),
            quantity: 2,
            unit_price_cents: 1_299,
            amount_cents: 2_598,
        }],
        subtotal_cents: 2_598,
        discount_cents: 0,
        net_cents: 2_598,
    };

    // Transaction 1 is the newer of the two.
    Ledger::from_transactions(vec![first, second])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(1).unwrap().name, "Laptop");
        assert_eq!(catalog.get(6).unwrap().price_cents, 4_999);
    }

    #[test]
    fn test_demo_ledger_ordering_and_revenue() {
        let ledger = demo_ledger();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.transactions()[0].id, 1);
        assert!(ledger.transactions()[0].timestamp > ledger.transactions()[1].timestamp);
        assert_eq!(ledger.total_revenue(), Money::from_cents(117_596));
        assert_eq!(ledger.next_id(), 3);
    }
}
