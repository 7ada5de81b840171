//! report-server — sales analytics backend for the storefront admin panel
//!
//! # Module structure
//!
//! ```text
//! report-server/src/
//! ├── core/          # Configuration, shared state
//! ├── db/            # External store boundary (SalesStore) + in-memory impl
//! ├── report/        # Analytics core: range, summary, series, ranking,
//! │                  # currency, assembler
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Time conversion, logging, result alias
//! ```
//!
//! Each report is a pure function of the filter input and the store snapshot
//! at request time; no mutable state is shared between requests.

pub mod api;
pub mod core;
pub mod db;
pub mod report;
pub mod utils;

// Re-export common types
pub use crate::core::{AppState, Config};
pub use db::{MemoryStore, SalesStore, StoreError};
pub use utils::{AppError, AppResult};
