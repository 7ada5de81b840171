//! Report values
//!
//! Everything here is derived per request from the store snapshot and handed
//! to the rendering layer as plain serializable data. Nothing is persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range used as the scope of an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// An inverted window aggregates to zero everywhere downstream
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days covered, both boundaries inclusive.
    /// Negative for inverted windows.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Scalar summary of one window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub order_count: i64,
    /// Sum of grand totals regardless of payment status
    pub revenue: f64,
    /// Distinct non-null customer ids
    pub unique_customers: i64,
    /// `revenue / order_count`, 0 when there are no orders
    pub avg_order_value: f64,
    pub paid_amount: f64,
    pub unpaid_amount: f64,
}

/// Current window summary against the immediately-preceding window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub current: PeriodSummary,
    pub previous: PeriodSummary,
    pub order_count_delta_pct: f64,
    pub revenue_delta_pct: f64,
}

/// One calendar day's order count and revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub order_count: i64,
    pub revenue: f64,
}

/// One calendar day's new-customer registrations with a running total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomerPoint {
    pub date: NaiveDate,
    pub count: i64,
    pub cumulative: i64,
}

/// One entry of a revenue-ranked breakdown (category, product, or payment method)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Grouping key (id for categories/products, raw type for payment methods)
    pub key: String,
    /// Display label
    pub label: String,
    /// Distinct transactions contributing to this entry
    pub order_count: i64,
    /// Summed item quantity (equals order_count for payment methods)
    pub quantity: i64,
    pub revenue: f64,
    /// Share of the returned top-N set's revenue, in percent
    pub share_pct: f64,
}

/// Currency-formatted totals for direct display
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayTotals {
    pub revenue: String,
    pub avg_order_value: String,
    pub paid_amount: String,
    pub unpaid_amount: String,
}

/// The assembled analytics report for one filter input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReport {
    pub window: DateWindow,
    pub previous_window: DateWindow,
    pub comparison: PeriodComparison,
    pub daily_sales: Vec<DailyBucket>,
    pub new_customers: Vec<NewCustomerPoint>,
    pub top_categories: Vec<RankedEntry>,
    pub top_products: Vec<RankedEntry>,
    pub payment_methods: Vec<RankedEntry>,
    /// Currency the display totals are rendered in
    pub currency: String,
    pub totals_display: DisplayTotals,
}
