//! Payroll Entry Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One worker's wage for one production batch
///
/// `nominal` stays 0 until the entry is verified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Gaji {
    pub id: i64,
    pub karyawan_id: i64,
    pub nama_karyawan: String,
    pub produksi_id: i64,
    pub tanggal_produksi: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub nominal: i64,
    /// The employee's current daily wage, shown while `nominal` is 0
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub nominal_standar: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub status_bayar: bool,
    pub tanggal_bayar: Option<NaiveDate>,
}

/// Batch payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayarBatchRequest {
    pub ids: Vec<i64>,
    pub total_nominal: i64,
    pub nama_karyawan: String,
    /// Defaults to today
    #[serde(default)]
    pub tanggal: Option<NaiveDate>,
}

/// Batch payment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayarBatchResponse {
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub dibayar: usize,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_nominal: i64,
    pub pengeluaran_id: i64,
}
