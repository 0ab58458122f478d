//! Unit prices and sale totals
//!
//! Totals are always derived from quantities. Returns are priced with the
//! buyer category of the sale they come back from.

use crate::models::{BuyerCategory, ProductVariant, VariantQty};

/// Price of one piece in rupiah
pub const fn unit_price(category: BuyerCategory, variant: ProductVariant) -> i64 {
    match (category, variant) {
        (BuyerCategory::Eceran, ProductVariant::Small) => 3_000,
        (BuyerCategory::Eceran, ProductVariant::Medium) => 5_000,
        (BuyerCategory::Eceran, ProductVariant::Large) => 10_000,
        (BuyerCategory::Grosir, ProductVariant::Small) => 2_500,
        (BuyerCategory::Grosir, ProductVariant::Medium) => 4_000,
        (BuyerCategory::Grosir, ProductVariant::Large) => 10_000,
    }
}

/// Rupiah per variant
///
/// Saturates instead of wrapping; the server bounds quantities well below
/// the point where that matters.
pub fn subtotals(category: BuyerCategory, qty: &VariantQty) -> VariantQty {
    qty.map(|variant, pcs| pcs.saturating_mul(unit_price(category, variant)))
}

pub fn total(category: BuyerCategory, qty: &VariantQty) -> i64 {
    subtotals(category, qty).total()
}

/// Sale total, or `None` when it does not fit in an `i64`
pub fn checked_total(category: BuyerCategory, qty: &VariantQty) -> Option<i64> {
    ProductVariant::ALL.into_iter().try_fold(0i64, |acc, variant| {
        qty.get(variant)
            .checked_mul(unit_price(category, variant))
            .and_then(|sub| acc.checked_add(sub))
    })
}
