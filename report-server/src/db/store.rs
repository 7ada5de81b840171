//! Read-only query capability consumed by the reporting engine

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::models::{Customer, Transaction};

/// Store-boundary error
///
/// A failed or timed-out query surfaces as `Unavailable`; the report layer
/// contains it at the sub-aggregation boundary and never propagates it to
/// the HTTP caller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store queries
pub type StoreResult<T> = Result<T, StoreError>;

/// Window-scoped line item joined with its product and category
///
/// The join shape keeps the engine free of catalog lookups; stores backed by
/// a relational engine produce this row with a single three-way join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemRow {
    pub transaction_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub category_id: i64,
    pub category_name: String,
    pub quantity: i64,
    pub unit_price: f64,
}

/// Read-only queries against the external order/catalog store
///
/// All ranges are `[start_millis, end_millis)` Unix-millis half-open
/// intervals; callers derive them from calendar dates in the business
/// timezone, so a window is inclusive of its end date through 23:59:59.999.
///
/// Exactly one attempt is made per query per report request; the store owns
/// any internal timeout policy.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Transactions whose `created_at` falls within the range
    async fn transactions_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<Transaction>>;

    /// Line items of transactions within the range, joined with catalog data
    async fn line_items_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<LineItemRow>>;

    /// Customer accounts registered within the range
    ///
    /// Implementations must return customer-role accounts only; staff
    /// accounts never count towards acquisition metrics.
    async fn customers_registered_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<Customer>>;
}
