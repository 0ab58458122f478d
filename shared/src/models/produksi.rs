//! Production Batch Model

use super::{VariantQty, serde_helpers};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily production batch (one per date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Produksi {
    pub id: i64,
    pub tanggal: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub kedelai_kg: f64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub jumlah_pekerja: i64,
    /// Worker (karyawan) ids
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub pekerja: Vec<i64>,
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub nama_pekerja: Vec<String>,
    /// Workers already paid for this batch; they can no longer be removed
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub paid_karyawan_ids: Vec<i64>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stat_exp: bool,
    pub tanggal_exp: Option<NaiveDate>,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

impl Produksi {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(
            self.tempe_3k_produksi,
            self.tempe_5k_produksi,
            self.tempe_10k_produksi,
        )
    }
}

/// Create production payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduksiCreate {
    pub tanggal: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub kedelai_kg: f64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_produksi: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub pekerja: Vec<i64>,
}

impl ProduksiCreate {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(
            self.tempe_3k_produksi,
            self.tempe_5k_produksi,
            self.tempe_10k_produksi,
        )
    }
}

/// Edit production payload (the date is fixed once recorded)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProduksiUpdate {
    pub kedelai_kg: Option<f64>,
    pub tempe_3k_produksi: Option<i64>,
    pub tempe_5k_produksi: Option<i64>,
    pub tempe_10k_produksi: Option<i64>,
    pub pekerja: Option<Vec<i64>>,
}

impl ProduksiUpdate {
    /// Quantities after applying this update on top of `current`
    pub fn qty_over(&self, current: VariantQty) -> VariantQty {
        VariantQty::new(
            self.tempe_3k_produksi.unwrap_or(current.pcs_3k),
            self.tempe_5k_produksi.unwrap_or(current.pcs_5k),
            self.tempe_10k_produksi.unwrap_or(current.pcs_10k),
        )
    }
}

/// Mark-expired payload (`stat_exp` must be true; expiry cannot be undone)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduksiExpire {
    pub stat_exp: bool,
    /// Defaults to today
    #[serde(default)]
    pub tanggal_exp: Option<NaiveDate>,
}
