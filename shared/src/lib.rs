//! Shared types for the Tempe workspace
//!
//! Wire models, the unified error type, and the pure bookkeeping rules used
//! by both the server and the client: pricing, the stock ledger, the sale
//! stock guard, payroll accumulation and the profit report.

pub mod error;
pub mod guard;
pub mod ledger;
pub mod models;
pub mod payroll;
pub mod pricing;
pub mod report;
pub mod util;

// Re-exports
pub use axum::Json;
pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use http;
pub use serde::{Deserialize, Serialize};
