//! Stock Ledger Views

use super::{VariantQty, serde_helpers};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a spoilage entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum SpoilageSource {
    /// Balance written off when the batch was marked expired
    Expired,
    /// Goods returned after the batch had expired
    Return,
}

/// Spoilage (stock written off) against a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StokRusak {
    pub id: i64,
    pub produksi_id: i64,
    pub tanggal: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rusak_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rusak_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rusak_10k: i64,
    pub sumber: SpoilageSource,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

impl StokRusak {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(self.rusak_3k, self.rusak_5k, self.rusak_10k)
    }
}

/// Current stock on hand (`/stok/mon`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StokSummary {
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stok_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_pcs: i64,
    pub last_updated: Option<NaiveDate>,
}

/// One calendar day of the ledger (`/stok/produk`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStockRow {
    pub tanggal: NaiveDate,
    /// The batch produced on this day is expired
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stat_exp: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub prod_stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub prod_stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub prod_stok_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sell_stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sell_stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sell_stok_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub res_stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub res_stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub res_stok_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rsk_stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rsk_stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rsk_stok_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sisa_stok_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sisa_stok_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sisa_stok_10k: i64,
}

impl DailyStockRow {
    pub fn produced(&self) -> VariantQty {
        VariantQty::new(self.prod_stok_3k, self.prod_stok_5k, self.prod_stok_10k)
    }

    pub fn sold(&self) -> VariantQty {
        VariantQty::new(self.sell_stok_3k, self.sell_stok_5k, self.sell_stok_10k)
    }

    pub fn returned(&self) -> VariantQty {
        VariantQty::new(self.res_stok_3k, self.res_stok_5k, self.res_stok_10k)
    }

    pub fn spoiled(&self) -> VariantQty {
        VariantQty::new(self.rsk_stok_3k, self.rsk_stok_5k, self.rsk_stok_10k)
    }

    pub fn remaining(&self) -> VariantQty {
        VariantQty::new(self.sisa_stok_3k, self.sisa_stok_5k, self.sisa_stok_10k)
    }
}

/// Balance of one production batch (`/stok/batch`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchStock {
    pub produksi_id: i64,
    /// Production date of the batch
    pub tanggal: NaiveDate,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub stat_exp: bool,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub produksi: VariantQty,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub terjual: VariantQty,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub retur: VariantQty,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub rusak: VariantQty,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub sisa: VariantQty,
}

impl BatchStock {
    /// Pieces that already left the batch: sold − returned + spoiled
    pub fn consumed(&self) -> VariantQty {
        self.terjual - self.retur + self.rusak
    }
}
