//! Stock guard for the sale form
//!
//! The form clamps quantity inputs to what the selected batch still holds.
//! The server runs [`StockGuard::check`] on every sale regardless of what the
//! form did.

use crate::models::{BatchStock, ProductVariant, VariantQty};
use chrono::NaiveDate;
use std::fmt;

/// Remaining stock of one selected batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockGuard {
    pub tanggal: NaiveDate,
    pub remaining: VariantQty,
    pub expired: bool,
}

/// Result of clamping one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clamped {
    pub value: i64,
    /// Present when the input was reduced
    pub warning: Option<String>,
}

/// A requested quantity the batch cannot cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortage {
    pub variant: ProductVariant,
    pub requested: i64,
    pub available: i64,
}

impl fmt::Display for Shortage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stok tempe {} tidak mencukupi: diminta {} pcs, tersisa {} pcs",
            self.variant, self.requested, self.available
        )
    }
}

impl std::error::Error for Shortage {}

impl StockGuard {
    pub fn for_batch(batch: &BatchStock) -> Self {
        Self {
            tanggal: batch.tanggal,
            remaining: batch.sisa,
            expired: batch.stat_exp,
        }
    }

    /// Guard for the batch produced on `tanggal`, if there is one
    pub fn lookup(history: &[BatchStock], tanggal: NaiveDate) -> Option<Self> {
        history
            .iter()
            .find(|b| b.tanggal == tanggal)
            .map(Self::for_batch)
    }

    /// Pieces still available for `variant`; an expired batch has none
    pub fn available(&self, variant: ProductVariant) -> i64 {
        if self.expired {
            0
        } else {
            self.remaining.get(variant).max(0)
        }
    }

    pub fn clamp(&self, variant: ProductVariant, requested: i64) -> Clamped {
        let requested = requested.max(0);
        let available = self.available(variant);
        if requested > available {
            Clamped {
                value: available,
                warning: Some(format!(
                    "Stok tempe {} hanya tersisa {} pcs",
                    variant, available
                )),
            }
        } else {
            Clamped {
                value: requested,
                warning: None,
            }
        }
    }

    /// Every variant of `qty` fits in the batch
    pub fn check(&self, qty: &VariantQty) -> Result<(), Shortage> {
        for variant in ProductVariant::ALL {
            let requested = qty.get(variant);
            let available = self.available(variant);
            if requested > available {
                return Err(Shortage {
                    variant,
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }
}

/// Production dates a sale may draw from: not expired, newest first
pub fn selectable_dates(history: &[BatchStock]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = history
        .iter()
        .filter(|b| !b.stat_exp)
        .map(|b| b.tanggal)
        .collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::fixtures::date;

    fn batch(tanggal: &str, sisa: VariantQty, stat_exp: bool) -> BatchStock {
        BatchStock {
            produksi_id: 1,
            tanggal: date(tanggal),
            stat_exp,
            produksi: sisa,
            terjual: VariantQty::ZERO,
            retur: VariantQty::ZERO,
            rusak: VariantQty::ZERO,
            sisa,
        }
    }

    #[test]
    fn clamp_reduces_and_warns() {
        let guard = StockGuard::for_batch(&batch("2024-05-01", VariantQty::new(4, 10, 0), false));

        let c = guard.clamp(ProductVariant::Small, 9);
        assert_eq!(c.value, 4);
        assert!(c.warning.unwrap().contains("4 pcs"));

        let c = guard.clamp(ProductVariant::Medium, 10);
        assert_eq!(c.value, 10);
        assert!(c.warning.is_none());
    }

    #[test]
    fn clamp_negative_input_to_zero() {
        let guard = StockGuard::for_batch(&batch("2024-05-01", VariantQty::new(4, 0, 0), false));
        let c = guard.clamp(ProductVariant::Small, -3);
        assert_eq!(c.value, 0);
        assert!(c.warning.is_none());
    }

    #[test]
    fn check_reports_first_shortage() {
        let guard = StockGuard::for_batch(&batch("2024-05-01", VariantQty::new(4, 1, 0), false));
        assert!(guard.check(&VariantQty::new(4, 1, 0)).is_ok());

        let err = guard.check(&VariantQty::new(1, 2, 1)).unwrap_err();
        assert_eq!(err.variant, ProductVariant::Medium);
        assert_eq!(err.requested, 2);
        assert_eq!(err.available, 1);
    }

    #[test]
    fn expired_batch_has_nothing_available() {
        let guard = StockGuard::for_batch(&batch("2024-05-01", VariantQty::new(4, 1, 0), true));
        assert_eq!(guard.clamp(ProductVariant::Small, 2).value, 0);
        assert!(guard.check(&VariantQty::new(1, 0, 0)).is_err());
    }

    #[test]
    fn selectable_dates_skip_expired() {
        let history = vec![
            batch("2024-05-01", VariantQty::new(1, 0, 0), false),
            batch("2024-05-03", VariantQty::new(1, 0, 0), true),
            batch("2024-05-02", VariantQty::new(1, 0, 0), false),
        ];
        assert_eq!(
            selectable_dates(&history),
            vec![date("2024-05-02"), date("2024-05-01")]
        );
        assert!(StockGuard::lookup(&history, date("2024-05-03")).unwrap().expired);
        assert!(StockGuard::lookup(&history, date("2024-06-01")).is_none());
    }
}
