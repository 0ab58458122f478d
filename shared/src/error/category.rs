//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Production errors
/// - 3xxx: Sales errors
/// - 4xxx: Return errors
/// - 5xxx: Expense errors
/// - 6xxx: Employee errors
/// - 7xxx: Payroll errors
/// - 8xxx, 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Auth,
    Production,
    Sales,
    Return,
    Expense,
    Employee,
    Payroll,
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Production,
            3000..4000 => Self::Sales,
            4000..5000 => Self::Return,
            5000..6000 => Self::Expense,
            6000..7000 => Self::Employee,
            7000..8000 => Self::Payroll,
            _ => Self::System,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Production => "production",
            Self::Sales => "sales",
            Self::Return => "return",
            Self::Expense => "expense",
            Self::Employee => "employee",
            Self::Payroll => "payroll",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
