//! Catalog models (products, categories, order line items)

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Sellable product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Reference to the product thumbnail, if any (served by the upload layer)
    #[serde(default)]
    pub thumbnail_ref: Option<String>,
}

/// One line of a transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Positive quantity
    pub quantity: i64,
    /// Non-negative unit price at sale time
    pub unit_price: f64,
}
