//! Shared types for the storefront reporting service
//!
//! Common types used across crates: the read-only sales entities, the
//! derived report values, and the unified error system.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
