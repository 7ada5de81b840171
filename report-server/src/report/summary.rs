//! Scalar metrics per window and period-over-period deltas
//!
//! Sums accumulate in `Decimal` and are exposed as `f64` in the report
//! payload, the same discipline the rest of the codebase uses for money.

use std::collections::HashSet;

use chrono_tz::Tz;
use rust_decimal::prelude::*;

use shared::models::{DateWindow, PaymentStatus, PeriodComparison, PeriodSummary};

use crate::db::{SalesStore, StoreResult};
use crate::utils::time;

/// Compute the scalar summary for one window
///
/// Revenue counts every transaction regardless of payment status; the
/// paid/unpaid split is on top of that. An empty (inverted) window
/// short-circuits to the zero summary without touching the store.
pub async fn summarize(
    store: &dyn SalesStore,
    window: &DateWindow,
    tz: Tz,
) -> StoreResult<PeriodSummary> {
    if window.is_empty() {
        return Ok(PeriodSummary::default());
    }

    let start = time::day_start_millis(window.start, tz);
    let end = time::day_end_millis(window.end, tz);
    let transactions = store.transactions_in(start, end).await?;

    let mut revenue = Decimal::ZERO;
    let mut paid = Decimal::ZERO;
    let mut unpaid = Decimal::ZERO;
    let mut customers: HashSet<i64> = HashSet::new();

    for tx in &transactions {
        let total = to_decimal(tx.grand_total);
        revenue += total;
        match tx.payment_status {
            PaymentStatus::Paid => paid += total,
            PaymentStatus::Unpaid => unpaid += total,
            _ => {}
        }
        if let Some(customer_id) = tx.customer_id {
            customers.insert(customer_id);
        }
    }

    let order_count = transactions.len() as i64;
    let avg_order_value = if order_count > 0 {
        to_f64(revenue / Decimal::from(order_count))
    } else {
        0.0
    };

    Ok(PeriodSummary {
        order_count,
        revenue: to_f64(revenue),
        unique_customers: customers.len() as i64,
        avg_order_value,
        paid_amount: to_f64(paid),
        unpaid_amount: to_f64(unpaid),
    })
}

/// Percentage delta between two values
///
/// A zero (or degenerate) previous value reports +100% no matter what the
/// current value is, matching the admin panel's long-standing display rule.
pub fn delta_pct(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        100.0
    }
}

/// Merge two period summaries into a comparison with trend deltas
pub fn compare(current: PeriodSummary, previous: PeriodSummary) -> PeriodComparison {
    let order_count_delta_pct = delta_pct(current.order_count as f64, previous.order_count as f64);
    let revenue_delta_pct = delta_pct(current.revenue, previous.revenue);
    PeriodComparison {
        current,
        previous,
        order_count_delta_pct,
        revenue_delta_pct,
    }
}

pub(crate) fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

pub(crate) fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
