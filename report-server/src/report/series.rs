//! Daily time series for charting
//!
//! Buckets are keyed by calendar date in the business timezone and carry only
//! the days that actually have data — gap days are not zero-filled, the chart
//! layer densifies the axis if it needs to.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;

use shared::models::{DailyBucket, DateWindow, NewCustomerPoint};

use crate::db::{SalesStore, StoreResult};
use crate::utils::time;

use super::summary::{to_decimal, to_f64};

/// Per-day order count and revenue, ascending by date
pub async fn daily_sales(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<Vec<DailyBucket>> {
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let start = time::day_start_millis(window.start, tz);
    let end = time::day_end_millis(window.end, tz);
    let transactions = store.transactions_in(start, end).await?;

    let mut buckets: BTreeMap<NaiveDate, (i64, Decimal)> = BTreeMap::new();
    for tx in &transactions {
        let date = time::millis_to_date(tx.created_at, tz);
        let entry = buckets.entry(date).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += to_decimal(tx.grand_total);
    }

    Ok(buckets
        .into_iter()
        .map(|(date, (order_count, revenue))| DailyBucket {
            date,
            order_count,
            revenue: to_f64(revenue),
        })
        .collect())
}

/// Per-day new-customer registrations with a running cumulative total
pub async fn daily_new_customers(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<Vec<NewCustomerPoint>> {
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let start = time::day_start_millis(window.start, tz);
    let end = time::day_end_millis(window.end, tz);
    let customers = store.customers_registered_in(start, end).await?;

    let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for customer in &customers {
        *counts
            .entry(time::millis_to_date(customer.created_at, tz))
            .or_insert(0) += 1;
    }

    let mut cumulative = 0;
    Ok(counts
        .into_iter()
        .map(|(date, count)| {
            cumulative += count;
            NewCustomerPoint {
                date,
                count,
                cumulative,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::UTC;
    use shared::models::{Customer, PaymentStatus, Transaction};

    use crate::db::MemoryStore;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate, hour: i64) -> i64 {
        time::day_start_millis(date, UTC) + hour * 3600 * 1000
    }

    fn tx(id: i64, created_at: i64, grand_total: f64) -> Transaction {
        Transaction {
            id,
            created_at,
            grand_total,
            payment_status: PaymentStatus::Paid,
            payment_type: None,
            customer_id: None,
        }
    }

    #[tokio::test]
    async fn test_sparse_buckets_no_zero_fill() {
        let mut store = MemoryStore::new();
        store.add_transaction(tx(1, at(d(2024, 1, 2), 9), 10.0));
        store.add_transaction(tx(2, at(d(2024, 1, 2), 18), 15.0));
        store.add_transaction(tx(3, at(d(2024, 1, 5), 12), 30.0));

        let window = DateWindow::new(d(2024, 1, 1), d(2024, 1, 7));
        let buckets = daily_sales(&store, &window, UTC).await.unwrap();

        // Only Jan 2 and Jan 5 appear; Jan 1/3/4/6/7 are absent
        assert_eq!(buckets.len(), 2);
        assert_eq!(
            buckets[0],
            DailyBucket {
                date: d(2024, 1, 2),
                order_count: 2,
                revenue: 25.0,
            }
        );
        assert_eq!(
            buckets[1],
            DailyBucket {
                date: d(2024, 1, 5),
                order_count: 1,
                revenue: 30.0,
            }
        );
    }

    #[tokio::test]
    async fn test_buckets_ascending_regardless_of_insert_order() {
        let mut store = MemoryStore::new();
        store.add_transaction(tx(1, at(d(2024, 3, 9), 10), 1.0));
        store.add_transaction(tx(2, at(d(2024, 3, 1), 10), 2.0));
        store.add_transaction(tx(3, at(d(2024, 3, 5), 10), 3.0));

        let window = DateWindow::new(d(2024, 3, 1), d(2024, 3, 31));
        let buckets = daily_sales(&store, &window, UTC).await.unwrap();
        let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
        assert_eq!(dates, vec![d(2024, 3, 1), d(2024, 3, 5), d(2024, 3, 9)]);
    }

    #[tokio::test]
    async fn test_new_customers_cumulative() {
        let mut store = MemoryStore::new();
        for (id, date, hour) in [
            (1, d(2024, 1, 2), 8),
            (2, d(2024, 1, 2), 20),
            (3, d(2024, 1, 6), 9),
            (4, d(2024, 1, 9), 9),
            (5, d(2024, 1, 9), 10),
            (6, d(2024, 1, 9), 11),
        ] {
            store.add_customer(Customer {
                id,
                created_at: at(date, hour),
            });
        }

        let window = DateWindow::new(d(2024, 1, 1), d(2024, 1, 31));
        let points = daily_new_customers(&store, &window, UTC).await.unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].count, 2);
        assert_eq!(points[0].cumulative, 2);
        assert_eq!(points[1].count, 1);
        assert_eq!(points[1].cumulative, 3);
        assert_eq!(points[2].count, 3);
        assert_eq!(points[2].cumulative, 6);
    }

    #[tokio::test]
    async fn test_empty_window_yields_no_buckets() {
        let mut store = MemoryStore::new();
        store.add_transaction(tx(1, at(d(2024, 1, 2), 9), 10.0));

        let inverted = DateWindow::new(d(2024, 2, 1), d(2024, 1, 1));
        assert!(daily_sales(&store, &inverted, UTC).await.unwrap().is_empty());
        assert!(
            daily_new_customers(&store, &inverted, UTC)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
