//! Report assembly
//!
//! Resolves the requested window, fans the seven sub-queries out
//! concurrently, and merges the results into one immutable
//! [`SalesReport`]. A failed sub-query degrades only its own section to the
//! zero/empty default; the failure goes to the log, never into the payload,
//! and nothing is retried — resubmitting the form is the retry mechanism.

use chrono_tz::Tz;

use shared::models::{DisplayTotals, SalesReport};

use crate::db::{SalesStore, StoreResult};
use crate::utils::time;

use super::range::{self, RangeInput};
use super::{currency, ranking, series, summary};

/// Build the full analytics report for one filter input
pub async fn assemble(
    store: &dyn SalesStore,
    input: &RangeInput,
    tz: Tz,
    currency_code: &str,
) -> SalesReport {
    let today = time::today_in(tz);
    let window = range::resolve_window(input, today);
    let previous = range::previous_window(&window);

    tracing::debug!(
        start = %window.start,
        end = %window.end,
        previous_start = %previous.start,
        previous_end = %previous.end,
        "Assembling sales report"
    );

    let (
        current_summary,
        previous_summary,
        daily_sales,
        new_customers,
        top_categories,
        top_products,
        payment_methods,
    ) = tokio::join!(
        summary::summarize(store, &window, tz),
        summary::summarize(store, &previous, tz),
        series::daily_sales(store, &window, tz),
        series::daily_new_customers(store, &window, tz),
        ranking::top_categories(store, &window, tz),
        ranking::top_products(store, &window, tz),
        ranking::payment_methods(store, &window, tz),
    );

    let current_summary = or_default(current_summary, "summary");
    let previous_summary = or_default(previous_summary, "previous summary");
    let comparison = summary::compare(current_summary, previous_summary);

    let totals_display = DisplayTotals {
        revenue: currency::format(comparison.current.revenue, currency_code),
        avg_order_value: currency::format(comparison.current.avg_order_value, currency_code),
        paid_amount: currency::format(comparison.current.paid_amount, currency_code),
        unpaid_amount: currency::format(comparison.current.unpaid_amount, currency_code),
    };

    SalesReport {
        window,
        previous_window: previous,
        comparison,
        daily_sales: or_default(daily_sales, "daily sales"),
        new_customers: or_default(new_customers, "new customers"),
        top_categories: or_default(top_categories, "category ranking"),
        top_products: or_default(top_products, "product ranking"),
        payment_methods: or_default(payment_methods, "payment ranking"),
        currency: currency_code.to_string(),
        totals_display,
    }
}

/// Contain a sub-query failure at its boundary
fn or_default<T: Default>(result: StoreResult<T>, sub_report: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, sub_report, "Sub-query failed, degrading to empty default");
            T::default()
        }
    }
}
