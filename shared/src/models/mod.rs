//! Data models
//!
//! - Read-only sales entities owned by the external order/catalog store
//!   ([`Transaction`], [`LineItem`], [`Product`], [`Category`], [`Customer`])
//! - Derived report values, recreated per request and never persisted
//!   ([`SalesReport`] and its parts)

mod catalog;
mod customer;
mod report;
mod transaction;

pub use catalog::{Category, LineItem, Product};
pub use customer::Customer;
pub use report::{
    DailyBucket, DateWindow, DisplayTotals, NewCustomerPoint, PeriodComparison, PeriodSummary,
    RankedEntry, SalesReport,
};
pub use transaction::{PaymentStatus, Transaction};
