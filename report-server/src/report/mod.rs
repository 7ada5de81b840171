//! Sales analytics core
//!
//! Turns a date filter plus the store snapshot into one immutable
//! [`shared::models::SalesReport`]:
//!
//! - [`range`] — filter token → concrete window + preceding comparison window
//! - [`summary`] — scalar metrics per window and percentage deltas
//! - [`series`] — daily sales buckets and new-customer acquisition series
//! - [`ranking`] — top-N revenue breakdowns (category, product, payment method)
//! - [`currency`] — monetary display formatting
//! - [`assembler`] — fan-out/fan-in orchestration with failure containment
//!
//! Data flows one way: range → (window) → summary/series/ranking → assembler.

pub mod assembler;
pub mod currency;
pub mod range;
pub mod ranking;
pub mod series;
pub mod summary;

pub use assembler::assemble;
pub use range::{DateFilter, RangeInput};
