//! Dashboard and Profit Report Models

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Figures for one day on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub tanggal: Option<NaiveDate>,
    /// Pieces produced
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_produksi_hari_ini: i64,
    /// Omzet: sales minus returns
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_penjualan_hari_ini: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_pengeluaran_hari_ini: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub laba_hari_ini: i64,
}

/// Report grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    #[default]
    Daily,
    Monthly,
}

/// One row of the profit report
///
/// `tanggal` is `YYYY-MM-DD` for daily rows and `YYYY-MM` for monthly rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaporanLabaItem {
    pub tanggal: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub omzet: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub pengeluaran: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub laba: i64,
}
