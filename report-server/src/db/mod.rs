//! External store boundary
//!
//! The order/catalog store is an external collaborator; the engine only
//! depends on the read-only query capability defined by [`SalesStore`].
//! [`MemoryStore`] is the snapshot-backed implementation used by the demo
//! binary and the test suite.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{LineItemRow, SalesStore, StoreError, StoreResult};
