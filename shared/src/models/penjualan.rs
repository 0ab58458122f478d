//! Sale Model

use super::{VariantQty, serde_helpers};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Buyer category, decides the unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum BuyerCategory {
    /// Retail
    #[default]
    Eceran,
    /// Wholesale
    Grosir,
}

/// Payment status of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PaymentStatus {
    /// Paid
    #[default]
    Lunas,
    /// On credit
    Tempo,
}

impl PaymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Lunas => Self::Tempo,
            Self::Tempo => Self::Lunas,
        }
    }
}

/// Sale entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Penjualan {
    pub id: i64,
    pub tanggal: NaiveDate,
    pub produksi_id: i64,
    /// Date of the batch the goods came from
    pub tanggal_produksi: NaiveDate,
    pub pembeli: String,
    pub kategori_pembeli: BuyerCategory,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub subtotal_3k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub subtotal_5k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub subtotal_10k: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub total_penjualan: i64,
    pub status_pembayaran: PaymentStatus,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub created_at: i64,
}

impl Penjualan {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(self.tempe_3k_pcs, self.tempe_5k_pcs, self.tempe_10k_pcs)
    }
}

/// Create sale payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenjualanCreate {
    pub tanggal: NaiveDate,
    pub tanggal_produksi: NaiveDate,
    pub pembeli: String,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub kategori_pembeli: BuyerCategory,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_3k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_5k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub tempe_10k_pcs: i64,
    #[serde(default, deserialize_with = "serde_helpers::null_default")]
    pub status_pembayaran: PaymentStatus,
}

impl PenjualanCreate {
    pub fn qty(&self) -> VariantQty {
        VariantQty::new(self.tempe_3k_pcs, self.tempe_5k_pcs, self.tempe_10k_pcs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_status() {
        assert_eq!(PaymentStatus::Lunas.toggled(), PaymentStatus::Tempo);
        assert_eq!(PaymentStatus::Lunas.toggled().toggled(), PaymentStatus::Lunas);
    }

    #[test]
    fn create_payload_defaults_missing_quantities() {
        let json = r#"{
            "tanggal": "2024-05-02",
            "tanggal_produksi": "2024-05-01",
            "pembeli": "Bu Sri",
            "kategori_pembeli": "Grosir",
            "tempe_5k_pcs": 12
        }"#;
        let create: PenjualanCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.kategori_pembeli, BuyerCategory::Grosir);
        assert_eq!(create.status_pembayaran, PaymentStatus::Lunas);
        assert_eq!(create.qty(), VariantQty::new(0, 12, 0));
    }
}
