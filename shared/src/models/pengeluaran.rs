//! Expense Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ExpenseCategory {
    /// Soybean
    Kedelai,
    Plastik,
    /// Yeast
    Ragi,
    /// Water
    Air,
    /// Electricity
    Listrik,
    /// Payroll settlement, written only by the batch payment
    Gaji,
}

impl ExpenseCategory {
    /// Categories a user may post directly
    pub const MANUAL: [ExpenseCategory; 5] = [
        Self::Kedelai,
        Self::Plastik,
        Self::Ragi,
        Self::Air,
        Self::Listrik,
    ];

    pub fn is_system(&self) -> bool {
        matches!(self, Self::Gaji)
    }
}

/// Expense entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Pengeluaran {
    pub id: i64,
    pub tanggal: NaiveDate,
    pub kategori_pengeluaran: ExpenseCategory,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub jumlah: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub keterangan: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PengeluaranCreate {
    pub tanggal: NaiveDate,
    pub kategori_pengeluaran: ExpenseCategory,
    pub jumlah: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub keterangan: String,
}
