//! Utilities
//!
//! - [`AppError`] / [`AppResult`] (from `shared::error`)
//! - logging setup, date parsing, input validation

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
