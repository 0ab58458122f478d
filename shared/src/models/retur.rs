//! Sale Return Model

use super::{VariantQty, serde_helpers};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goods returned against a sale
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReturnPenjualan {
    pub id: i64,
    pub tanggal: NaiveDate,
    pub penjualan_id: i64,
    /// Buyer of the referenced sale
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub pembeli: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub keterangan: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

impl ReturnPenjualan {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(
            self.tempe_3k_return,
            self.tempe_5k_return,
            self.tempe_10k_return,
        )
    }
}

/// Create return payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnPenjualanCreate {
    pub tanggal: NaiveDate,
    pub penjualan_id: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_return: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub keterangan: String,
}

impl ReturnPenjualanCreate {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(
            self.tempe_3k_return,
            self.tempe_5k_return,
            self.tempe_10k_return,
        )
    }
}
