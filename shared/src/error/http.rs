//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::ProductionNotFound
            | Self::SaleNotFound
            | Self::EmployeeNotFound
            | Self::PayrollNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::ProductionDateExists
            | Self::ProductionExpired
            | Self::WorkerLocked
            | Self::PayrollAlreadyVerified
            | Self::PayrollAlreadyPaid => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 422 Unprocessable: stock and payroll rules
            Self::InsufficientStock
            | Self::ProductionBelowConsumed
            | Self::ReturnExceedsSold
            | Self::PayrollNotVerified
            | Self::PayrollTotalMismatch
            | Self::PayrollEmployeeMismatch
            | Self::PayrollNothingToPay
            | Self::PayrollZeroWage => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::ValueOutOfRange
            | Self::WorkerInactive
            | Self::EmptySale
            | Self::EmptyReturn
            | Self::ExpenseCategoryReserved => StatusCode::BAD_REQUEST,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
