//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};

/// Employee (production worker)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Karyawan {
    pub id: i64,
    pub nama: String,
    /// Phone number or staff number
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub nomor: String,
    /// Daily wage in rupiah
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub gaji_harian: i64,
    #[serde(default = "default_active", deserialize_with = "serde_helpers::bool_true")]
    pub status_aktif: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KaryawanCreate {
    pub nama: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub nomor: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub gaji_harian: i64,
    #[serde(default = "default_active", deserialize_with = "serde_helpers::bool_true")]
    pub status_aktif: bool,
}

fn default_active() -> bool {
    true
}

/// Update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KaryawanUpdate {
    pub nama: Option<String>,
    pub nomor: Option<String>,
    pub gaji_harian: Option<i64>,
    pub status_aktif: Option<bool>,
}
