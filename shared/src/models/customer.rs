//! Customer model

use serde::{Deserialize, Serialize};

/// Registered customer account
///
/// Only the registration timestamp matters for reporting (new-customer
/// acquisition counts); purchases are linked through `Transaction.customer_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Registration time (Unix millis)
    pub created_at: i64,
}
