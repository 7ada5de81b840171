//! Transaction (order) model

use serde::{Deserialize, Serialize};

/// Payment status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    Pending,
    Refunded,
    Failed,
}

impl PaymentStatus {
    /// Lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::Pending => "pending",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
        }
    }
}

/// A completed checkout (order header)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// When the order was placed (Unix millis)
    pub created_at: i64,
    /// Order total, non-negative
    pub grand_total: f64,
    pub payment_status: PaymentStatus,
    /// Free-text payment method label (e.g. "bank_transfer"); may be absent
    pub payment_type: Option<String>,
    /// Purchasing customer; guest checkouts have none
    pub customer_id: Option<i64>,
}
