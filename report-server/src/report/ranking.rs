//! Revenue-ranked breakdowns over three dimensions
//!
//! Categories and products rank window-scoped line items by
//! `unit_price × quantity`; payment methods rank transactions by grand total.
//! Every ranking truncates to the top 10 and computes each entry's share of
//! the returned set's revenue (not of the window's grand total — the admin
//! panel has always normalized against the displayed set).

use std::collections::{HashMap, HashSet};

use chrono_tz::Tz;
use rust_decimal::Decimal;

use shared::models::{DateWindow, RankedEntry};

use crate::db::{SalesStore, StoreResult};
use crate::utils::time;

use super::summary::{to_decimal, to_f64};

/// Breakdowns are bounded to this many entries
pub const TOP_N: usize = 10;

/// Revenue accumulator for one grouping key
#[derive(Debug, Default)]
struct Group {
    label: String,
    transactions: HashSet<i64>,
    quantity: i64,
    revenue: Decimal,
}

/// Top categories by line-item revenue
pub async fn top_categories(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<Vec<RankedEntry>> {
    rank_line_items(store, window, tz, |row| {
        (row.category_id.to_string(), row.category_name.clone())
    })
    .await
}

/// Top products by line-item revenue
pub async fn top_products(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<Vec<RankedEntry>> {
    rank_line_items(store, window, tz, |row| {
        (row.product_id.to_string(), row.product_name.clone())
    })
    .await
}

async fn rank_line_items(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
    key_of: impl Fn(&crate::db::LineItemRow) -> (String, String),
) -> StoreResult<Vec<RankedEntry>> {
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let start = time::day_start_millis(window.start, tz);
    let end = time::day_end_millis(window.end, tz);
    let rows = store.line_items_in(start, end).await?;

    let mut groups: HashMap<String, Group> = HashMap::new();
    for row in &rows {
        let (key, label) = key_of(row);
        let group = groups.entry(key).or_default();
        group.label = label;
        group.transactions.insert(row.transaction_id);
        group.quantity += row.quantity;
        group.revenue += to_decimal(row.unit_price) * Decimal::from(row.quantity);
    }

    Ok(finalize(groups))
}

/// Payment method breakdown over transaction grand totals
pub async fn payment_methods(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<Vec<RankedEntry>> {
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let start = time::day_start_millis(window.start, tz);
    let end = time::day_end_millis(window.end, tz);
    let transactions = store.transactions_in(start, end).await?;

    let mut groups: HashMap<String, Group> = HashMap::new();
    for tx in &transactions {
        let raw = tx
            .payment_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let key = raw.unwrap_or("unknown").to_string();
        let group = groups.entry(key).or_default();
        group.label = payment_label(raw);
        group.transactions.insert(tx.id);
        group.quantity += 1;
        group.revenue += to_decimal(tx.grand_total);
    }

    Ok(finalize(groups))
}

/// Display label for a raw payment type
///
/// Underscores become spaces and each word is capitalized; an absent or
/// empty type labels as "unknown".
fn payment_label(raw: Option<&str>) -> String {
    match raw {
        None => "unknown".to_string(),
        Some(s) => s
            .replace('_', " ")
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Sort descending by revenue, truncate to the top N, compute shares
///
/// Ties break on ascending key so the order is deterministic across runs.
fn finalize(groups: HashMap<String, Group>) -> Vec<RankedEntry> {
    let mut ranked: Vec<(String, Group)> = groups.into_iter().collect();
    ranked.sort_by(|(key_a, a), (key_b, b)| {
        b.revenue.cmp(&a.revenue).then_with(|| key_a.cmp(key_b))
    });
    ranked.truncate(TOP_N);

    let total: Decimal = ranked.iter().map(|(_, g)| g.revenue).sum();
    ranked
        .into_iter()
        .map(|(key, group)| {
            let share_pct = if total > Decimal::ZERO {
                to_f64(group.revenue) / to_f64(total) * 100.0
            } else {
                0.0
            };
            RankedEntry {
                key,
                label: group.label,
                order_count: group.transactions.len() as i64,
                quantity: group.quantity,
                revenue: to_f64(group.revenue),
                share_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use chrono_tz::UTC;
    use shared::models::{Category, LineItem, PaymentStatus, Product, Transaction};

    use crate::db::MemoryStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate, hour: i64) -> i64 {
        time::day_start_millis(date, UTC) + hour * 3600 * 1000
    }

    fn window() -> DateWindow {
        DateWindow::new(d(2024, 1, 1), d(2024, 1, 31))
    }

    fn tx(id: i64, grand_total: f64, payment_type: Option<&str>) -> Transaction {
        Transaction {
            id,
            created_at: at(d(2024, 1, 10), 12),
            grand_total,
            payment_status: PaymentStatus::Paid,
            payment_type: payment_type.map(str::to_string),
            customer_id: None,
        }
    }

    /// Three categories with revenue 600/300/100 spread over products
    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
            store.add_category(Category {
                id,
                name: name.into(),
            });
        }
        for (id, name, category_id) in [
            (10, "a-one", 1),
            (11, "a-two", 1),
            (20, "b-one", 2),
            (30, "c-one", 3),
        ] {
            store.add_product(Product {
                id,
                name: name.into(),
                category_id,
                thumbnail_ref: None,
            });
        }
        store.add_transaction(tx(1, 500.0, Some("cash")));
        store.add_transaction(tx(2, 500.0, Some("bank_transfer")));
        // Category A: 400 + 200 = 600, B: 300, C: 100
        for (id, tx_id, product_id, quantity, unit_price) in [
            (100, 1, 10, 2, 200.0),
            (101, 2, 11, 1, 200.0),
            (102, 1, 20, 3, 100.0),
            (103, 2, 30, 1, 100.0),
        ] {
            store.add_line_item(LineItem {
                id,
                transaction_id: tx_id,
                product_id,
                quantity,
                unit_price,
            });
        }
        store
    }

    #[tokio::test]
    async fn test_category_ranking_and_shares() {
        let store = seeded_store();
        let ranked = top_categories(&store, &window(), UTC).await.unwrap();

        let labels: Vec<&str> = ranked.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        let revenues: Vec<f64> = ranked.iter().map(|e| e.revenue).collect();
        assert_eq!(revenues, vec![600.0, 300.0, 100.0]);
        let shares: Vec<f64> = ranked.iter().map(|e| e.share_pct).collect();
        assert_eq!(shares, vec![60.0, 30.0, 10.0]);

        let share_sum: f64 = ranked.iter().map(|e| e.share_pct).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);

        // Category A was sold in both transactions
        assert_eq!(ranked[0].order_count, 2);
        assert_eq!(ranked[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_product_ranking() {
        let store = seeded_store();
        let ranked = top_products(&store, &window(), UTC).await.unwrap();

        assert_eq!(ranked[0].label, "a-one");
        assert_eq!(ranked[0].revenue, 400.0);
        assert_eq!(ranked.len(), 4);
    }

    #[tokio::test]
    async fn test_payment_methods_and_labels() {
        let store = seeded_store();
        let ranked = payment_methods(&store, &window(), UTC).await.unwrap();

        // Equal revenue: tie broken by ascending key
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].key, "bank_transfer");
        assert_eq!(ranked[0].label, "Bank Transfer");
        assert_eq!(ranked[1].label, "Cash");
        assert_eq!(ranked[0].share_pct, 50.0);
    }

    #[tokio::test]
    async fn test_missing_payment_type_labels_unknown() {
        let mut store = MemoryStore::new();
        store.add_transaction(tx(1, 100.0, None));
        store.add_transaction(tx(2, 50.0, Some("  ")));

        let ranked = payment_methods(&store, &window(), UTC).await.unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].key, "unknown");
        assert_eq!(ranked[0].label, "unknown");
        assert_eq!(ranked[0].revenue, 150.0);
        assert_eq!(ranked[0].order_count, 2);
    }

    #[tokio::test]
    async fn test_truncates_to_top_ten() {
        let mut store = MemoryStore::new();
        for id in 1..=12 {
            let method = format!("method_{id:02}");
            store.add_transaction(tx(id, id as f64, Some(&method)));
        }

        let ranked = payment_methods(&store, &window(), UTC).await.unwrap();
        assert_eq!(ranked.len(), TOP_N);
        // Highest revenue first; the two cheapest methods fell off
        assert_eq!(ranked[0].key, "method_12");
        assert!(!ranked.iter().any(|e| e.key == "method_01"));
        assert!(!ranked.iter().any(|e| e.key == "method_02"));

        // Shares normalize against the returned set
        let share_sum: f64 = ranked.iter().map(|e| e.share_pct).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_empty_window_returns_nothing() {
        let store = seeded_store();
        let inverted = DateWindow::new(d(2024, 2, 1), d(2024, 1, 1));
        assert!(
            top_categories(&store, &inverted, UTC)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            payment_methods(&store, &inverted, UTC)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_payment_label() {
        assert_eq!(payment_label(Some("bank_transfer")), "Bank Transfer");
        assert_eq!(payment_label(Some("cash")), "Cash");
        assert_eq!(payment_label(Some("cash_on_delivery")), "Cash On Delivery");
        assert_eq!(payment_label(None), "unknown");
    }
}
