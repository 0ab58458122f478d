//! Sale form state
//!
//! Quantities are clamped to what the selected batch still holds, using the
//! batch list fetched when the form opened. The server checks again on
//! submit, so a stale list can still be refused there.

use chrono::NaiveDate;
use shared::guard::{self, StockGuard};
use shared::models::{
    BatchStock, BuyerCategory, PaymentStatus, PenjualanCreate, ProductVariant, VariantQty,
};
use shared::pricing;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Pilih tanggal produksi terlebih dahulu")]
    NoBatch,
    #[error("Produksi tanggal {0} tidak ditemukan")]
    UnknownDate(NaiveDate),
    #[error("Produksi tanggal {0} sudah kedaluwarsa")]
    Expired(NaiveDate),
    #[error("Nama pembeli wajib diisi")]
    MissingBuyer,
    #[error("Isi jumlah minimal satu varian")]
    Empty,
}

#[derive(Debug, Clone)]
pub struct SaleDraft {
    history: Vec<BatchStock>,
    selected: Option<StockGuard>,
    qty: VariantQty,
    pub tanggal: NaiveDate,
    pub pembeli: String,
    pub kategori_pembeli: BuyerCategory,
    pub status_pembayaran: PaymentStatus,
}

impl SaleDraft {
    /// Empty form dated `tanggal` over the fetched batch list
    pub fn new(history: Vec<BatchStock>, tanggal: NaiveDate) -> Self {
        Self {
            history,
            selected: None,
            qty: VariantQty::ZERO,
            tanggal,
            pembeli: String::new(),
            kategori_pembeli: BuyerCategory::default(),
            status_pembayaran: PaymentStatus::default(),
        }
    }

    /// Production dates offered in the picker (expired batches left out)
    pub fn selectable_dates(&self) -> Vec<NaiveDate> {
        guard::selectable_dates(&self.history)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected.as_ref().map(|g| g.tanggal)
    }

    /// Pick the batch to sell from; entered quantities are clamped to it
    pub fn select_batch(&mut self, tanggal: NaiveDate) -> Result<Vec<String>, DraftError> {
        let guard =
            StockGuard::lookup(&self.history, tanggal).ok_or(DraftError::UnknownDate(tanggal))?;
        if guard.expired {
            return Err(DraftError::Expired(tanggal));
        }
        self.selected = Some(guard);

        let mut warnings = Vec::new();
        for variant in ProductVariant::ALL {
            if let Some(w) = self.set_quantity(variant, self.qty.get(variant)) {
                warnings.push(w);
            }
        }
        Ok(warnings)
    }

    /// Set one quantity input; returns a warning when it had to be reduced
    ///
    /// Before a batch is picked there is nothing to clamp against, so only
    /// negatives are corrected.
    pub fn set_quantity(&mut self, variant: ProductVariant, requested: i64) -> Option<String> {
        match &self.selected {
            Some(guard) => {
                let clamped = guard.clamp(variant, requested);
                self.qty.set(variant, clamped.value);
                clamped.warning
            }
            None => {
                self.qty.set(variant, requested.max(0));
                None
            }
        }
    }

    pub fn quantities(&self) -> VariantQty {
        self.qty
    }

    /// Pieces left in the selected batch for `variant`
    pub fn remaining(&self, variant: ProductVariant) -> Option<i64> {
        self.selected.as_ref().map(|g| g.available(variant))
    }

    /// Rupiah per variant at the chosen buyer category
    pub fn preview_subtotals(&self) -> VariantQty {
        pricing::subtotals(self.kategori_pembeli, &self.qty)
    }

    pub fn preview_total(&self) -> i64 {
        pricing::total(self.kategori_pembeli, &self.qty)
    }

    /// Request body for `POST /api/penjualan`
    pub fn to_request(&self) -> Result<PenjualanCreate, DraftError> {
        let batch = self.selected.as_ref().ok_or(DraftError::NoBatch)?;
        if self.pembeli.trim().is_empty() {
            return Err(DraftError::MissingBuyer);
        }
        if self.qty.is_empty() {
            return Err(DraftError::Empty);
        }
        Ok(PenjualanCreate {
            tanggal: self.tanggal,
            tanggal_produksi: batch.tanggal,
            pembeli: self.pembeli.trim().to_string(),
            kategori_pembeli: self.kategori_pembeli,
            tempe_3k_pcs: self.qty.pcs_3k,
            tempe_5k_pcs: self.qty.pcs_5k,
            tempe_10k_pcs: self.qty.pcs_10k,
            status_pembayaran: self.status_pembayaran,
        })
    }

    /// Clear the form after a successful submit, with a fresh batch list
    pub fn reset(&mut self, history: Vec<BatchStock>) {
        *self = Self::new(history, self.tanggal);
    }
}
