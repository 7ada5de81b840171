//! Utility module — time conversion, logging, shared result alias

pub mod logger;
pub mod result;
pub mod time;

pub use result::AppResult;
pub use shared::error::{ApiResponse, AppError, ErrorCode};
