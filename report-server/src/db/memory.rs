//! In-memory sales store
//!
//! Snapshot-backed [`SalesStore`] implementation. The demo binary loads a
//! JSON snapshot at startup (`DATA_SNAPSHOT` env var); tests seed it through
//! the builder methods.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use shared::models::{Category, Customer, LineItem, Product, Transaction};

use super::store::{LineItemRow, SalesStore, StoreError, StoreResult};

/// Serializable snapshot of the external store's relevant tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Customer-role accounts only; staff accounts are filtered out upstream
    #[serde(default)]
    pub customers: Vec<Customer>,
}

/// Vec-backed store over one immutable snapshot
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Snapshot,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Load a snapshot from a JSON file
    pub fn from_snapshot_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Unavailable(format!("read {}: {}", path.display(), e)))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Unavailable(format!("parse {}: {}", path.display(), e)))?;
        Ok(Self::from_snapshot(snapshot))
    }

    // ==================== Seeding (tests, demo data) ====================

    pub fn add_transaction(&mut self, tx: Transaction) -> &mut Self {
        self.snapshot.transactions.push(tx);
        self
    }

    pub fn add_line_item(&mut self, item: LineItem) -> &mut Self {
        self.snapshot.line_items.push(item);
        self
    }

    pub fn add_product(&mut self, product: Product) -> &mut Self {
        self.snapshot.products.push(product);
        self
    }

    pub fn add_category(&mut self, category: Category) -> &mut Self {
        self.snapshot.categories.push(category);
        self
    }

    pub fn add_customer(&mut self, customer: Customer) -> &mut Self {
        self.snapshot.customers.push(customer);
        self
    }

    pub fn transaction_count(&self) -> usize {
        self.snapshot.transactions.len()
    }
}

#[async_trait]
impl SalesStore for MemoryStore {
    async fn transactions_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<Transaction>> {
        Ok(self
            .snapshot
            .transactions
            .iter()
            .filter(|t| t.created_at >= start_millis && t.created_at < end_millis)
            .cloned()
            .collect())
    }

    async fn line_items_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<LineItemRow>> {
        let products: HashMap<i64, &Product> =
            self.snapshot.products.iter().map(|p| (p.id, p)).collect();
        let categories: HashMap<i64, &Category> =
            self.snapshot.categories.iter().map(|c| (c.id, c)).collect();
        let in_window: HashSet<i64> = self
            .snapshot
            .transactions
            .iter()
            .filter(|t| t.created_at >= start_millis && t.created_at < end_millis)
            .map(|t| t.id)
            .collect();

        let rows = self
            .snapshot
            .line_items
            .iter()
            .filter(|li| in_window.contains(&li.transaction_id))
            .map(|li| {
                let product = products.get(&li.product_id);
                let category = product.and_then(|p| categories.get(&p.category_id));
                LineItemRow {
                    transaction_id: li.transaction_id,
                    product_id: li.product_id,
                    product_name: product
                        .map(|p| p.name.clone())
                        .unwrap_or_else(|| format!("product #{}", li.product_id)),
                    category_id: product.map(|p| p.category_id).unwrap_or(0),
                    category_name: category
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "Uncategorized".to_string()),
                    quantity: li.quantity,
                    unit_price: li.unit_price,
                }
            })
            .collect();
        Ok(rows)
    }

    async fn customers_registered_in(
        &self,
        start_millis: i64,
        end_millis: i64,
    ) -> StoreResult<Vec<Customer>> {
        Ok(self
            .snapshot
            .customers
            .iter()
            .filter(|c| c.created_at >= start_millis && c.created_at < end_millis)
            .cloned()
            .collect())
    }
}
