//! Unified error codes for the Tempe workspace
//!
//! This module defines all error codes used across tempe-server and tempe-client.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Production errors
//! - 3xxx: Sales errors
//! - 4xxx: Return errors
//! - 5xxx: Expense errors
//! - 6xxx: Employee errors
//! - 7xxx: Payroll errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the client can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    NotAuthenticated = 1001,
    InvalidCredentials = 1002,
    TokenExpired = 1003,
    TokenInvalid = 1004,

    // ==================== 2xxx: Production ====================
    ProductionNotFound = 2001,
    /// A batch already exists for the date
    ProductionDateExists = 2002,
    /// Batch was marked expired and is read-only
    ProductionExpired = 2003,
    /// Worker was already paid for the batch
    WorkerLocked = 2004,
    /// Worker is inactive or unknown
    WorkerInactive = 2005,
    /// New quantity is below what the batch already gave out
    ProductionBelowConsumed = 2006,

    // ==================== 3xxx: Sales ====================
    SaleNotFound = 3001,
    /// Requested pieces exceed the batch balance
    InsufficientStock = 3002,
    /// Sale carries no pieces
    EmptySale = 3003,

    // ==================== 4xxx: Returns ====================
    /// Returned pieces exceed what was sold
    ReturnExceedsSold = 4001,
    /// Return carries no pieces
    EmptyReturn = 4002,

    // ==================== 5xxx: Expenses ====================
    /// Category is reserved for payroll settlements
    ExpenseCategoryReserved = 5001,

    // ==================== 6xxx: Employee ====================
    EmployeeNotFound = 6001,

    // ==================== 7xxx: Payroll ====================
    PayrollNotFound = 7001,
    PayrollAlreadyVerified = 7002,
    PayrollAlreadyPaid = 7003,
    PayrollNotVerified = 7004,
    /// Client total differs from the sum of the entries
    PayrollTotalMismatch = 7005,
    /// Entries belong to a different employee
    PayrollEmployeeMismatch = 7006,
    /// Nothing payable in the request
    PayrollNothingToPay = 7007,
    /// Employee has no daily wage set
    PayrollZeroWage = 7008,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of the code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validasi gagal",
            ErrorCode::NotFound => "Data tidak ditemukan",
            ErrorCode::AlreadyExists => "Data sudah ada",
            ErrorCode::ValueOutOfRange => "Nilai di luar batas",

            // Auth
            ErrorCode::NotAuthenticated => "Silakan login terlebih dahulu",
            ErrorCode::InvalidCredentials => "Username atau password salah",
            ErrorCode::TokenExpired => "Sesi login telah berakhir",
            ErrorCode::TokenInvalid => "Sesi login tidak valid, silakan login ulang",

            // Production
            ErrorCode::ProductionNotFound => "Data produksi tidak ditemukan",
            ErrorCode::ProductionDateExists => "Data produksi untuk tanggal ini sudah ada",
            ErrorCode::ProductionExpired => "Produksi sudah ditandai expired",
            ErrorCode::WorkerLocked => "Pekerja sudah digaji untuk produksi ini",
            ErrorCode::WorkerInactive => "Karyawan tidak aktif",
            ErrorCode::ProductionBelowConsumed => {
                "Jumlah produksi lebih kecil dari stok yang sudah keluar"
            }

            // Sales
            ErrorCode::SaleNotFound => "Penjualan tidak ditemukan",
            ErrorCode::InsufficientStock => "Stok tidak mencukupi",
            ErrorCode::EmptySale => "Jumlah tempe belum diisi",

            // Returns
            ErrorCode::ReturnExceedsSold => "Jumlah return melebihi jumlah terjual",
            ErrorCode::EmptyReturn => "Jumlah return belum diisi",

            // Expenses
            ErrorCode::ExpenseCategoryReserved => "Kategori gaji hanya dicatat lewat pembayaran gaji",

            // Employee
            ErrorCode::EmployeeNotFound => "Karyawan tidak ditemukan",

            // Payroll
            ErrorCode::PayrollNotFound => "Data gaji tidak ditemukan",
            ErrorCode::PayrollAlreadyVerified => "Gaji sudah diverifikasi",
            ErrorCode::PayrollAlreadyPaid => "Gaji sudah dibayar",
            ErrorCode::PayrollNotVerified => "Gaji belum diverifikasi",
            ErrorCode::PayrollTotalMismatch => "Total pembayaran tidak sesuai",
            ErrorCode::PayrollEmployeeMismatch => "Data gaji bukan milik karyawan ini",
            ErrorCode::PayrollNothingToPay => "Tidak ada tagihan gaji",
            ErrorCode::PayrollZeroWage => "Gaji harian karyawan belum diatur",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Production
            2001 => Ok(ErrorCode::ProductionNotFound),
            2002 => Ok(ErrorCode::ProductionDateExists),
            2003 => Ok(ErrorCode::ProductionExpired),
            2004 => Ok(ErrorCode::WorkerLocked),
            2005 => Ok(ErrorCode::WorkerInactive),
            2006 => Ok(ErrorCode::ProductionBelowConsumed),

            // Sales
            3001 => Ok(ErrorCode::SaleNotFound),
            3002 => Ok(ErrorCode::InsufficientStock),
            3003 => Ok(ErrorCode::EmptySale),

            // Returns
            4001 => Ok(ErrorCode::ReturnExceedsSold),
            4002 => Ok(ErrorCode::EmptyReturn),

            // Expenses
            5001 => Ok(ErrorCode::ExpenseCategoryReserved),

            // Employee
            6001 => Ok(ErrorCode::EmployeeNotFound),

            // Payroll
            7001 => Ok(ErrorCode::PayrollNotFound),
            7002 => Ok(ErrorCode::PayrollAlreadyVerified),
            7003 => Ok(ErrorCode::PayrollAlreadyPaid),
            7004 => Ok(ErrorCode::PayrollNotVerified),
            7005 => Ok(ErrorCode::PayrollTotalMismatch),
            7006 => Ok(ErrorCode::PayrollEmployeeMismatch),
            7007 => Ok(ErrorCode::PayrollNothingToPay),
            7008 => Ok(ErrorCode::PayrollZeroWage),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::InsufficientStock.code(), 3002);
        assert_eq!(ErrorCode::PayrollAlreadyPaid.code(), 7003);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_u16() {
        assert_eq!(ErrorCode::try_from(2002), Ok(ErrorCode::ProductionDateExists));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::ReturnExceedsSold));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::WorkerLocked.to_string(), "E2004");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::SaleNotFound).unwrap();
        assert_eq!(json, "3001");
        let code: ErrorCode = serde_json::from_str("7005").unwrap();
        assert_eq!(code, ErrorCode::PayrollTotalMismatch);
        assert!(serde_json::from_str::<ErrorCode>("65000").is_err());
    }
}
