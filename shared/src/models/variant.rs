//! Product variants and per-variant quantities

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Tempe size sold by the business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductVariant {
    #[serde(rename = "3k")]
    Small,
    #[serde(rename = "5k")]
    Medium,
    #[serde(rename = "10k")]
    Large,
}

impl ProductVariant {
    pub const ALL: [ProductVariant; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Wire label, also used in user-facing messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Small => "3k",
            Self::Medium => "5k",
            Self::Large => "10k",
        }
    }
}

impl fmt::Display for ProductVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pieces (or rupiah) per variant
///
/// Every ledger movement is expressed as one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantQty {
    #[serde(rename = "3k", default, deserialize_with = "serde_helpers::null_default")]
    pub pcs_3k: i64,
    #[serde(rename = "5k", default, deserialize_with = "serde_helpers::null_default")]
    pub pcs_5k: i64,
    #[serde(rename = "10k", default, deserialize_with = "serde_helpers::null_default")]
    pub pcs_10k: i64,
}

impl VariantQty {
    pub const ZERO: VariantQty = VariantQty::new(0, 0, 0);

    pub const fn new(pcs_3k: i64, pcs_5k: i64, pcs_10k: i64) -> Self {
        Self {
            pcs_3k,
            pcs_5k,
            pcs_10k,
        }
    }

    pub fn get(&self, variant: ProductVariant) -> i64 {
        match variant {
            ProductVariant::Small => self.pcs_3k,
            ProductVariant::Medium => self.pcs_5k,
            ProductVariant::Large => self.pcs_10k,
        }
    }

    pub fn set(&mut self, variant: ProductVariant, value: i64) {
        match variant {
            ProductVariant::Small => self.pcs_3k = value,
            ProductVariant::Medium => self.pcs_5k = value,
            ProductVariant::Large => self.pcs_10k = value,
        }
    }

    /// Sum over the variants, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        self.pcs_3k
            .saturating_add(self.pcs_5k)
            .saturating_add(self.pcs_10k)
    }

    pub fn is_empty(&self) -> bool {
        self.pcs_3k == 0 && self.pcs_5k == 0 && self.pcs_10k == 0
    }

    /// First variant holding a negative value
    pub fn first_negative(&self) -> Option<ProductVariant> {
        ProductVariant::ALL.into_iter().find(|v| self.get(*v) < 0)
    }

    /// First variant holding more than `limit`
    pub fn first_above(&self, limit: i64) -> Option<ProductVariant> {
        ProductVariant::ALL.into_iter().find(|v| self.get(*v) > limit)
    }

    /// Apply `f` to every variant
    pub fn map(&self, mut f: impl FnMut(ProductVariant, i64) -> i64) -> Self {
        let mut out = Self::ZERO;
        for v in ProductVariant::ALL {
            out.set(v, f(v, self.get(v)));
        }
        out
    }
}

impl Add for VariantQty {
    type Output = VariantQty;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.pcs_3k + rhs.pcs_3k,
            self.pcs_5k + rhs.pcs_5k,
            self.pcs_10k + rhs.pcs_10k,
        )
    }
}

impl Sub for VariantQty {
    type Output = VariantQty;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.pcs_3k - rhs.pcs_3k,
            self.pcs_5k - rhs.pcs_5k,
            self.pcs_10k - rhs.pcs_10k,
        )
    }
}

impl Neg for VariantQty {
    type Output = VariantQty;

    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl AddAssign for VariantQty {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for VariantQty {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for VariantQty {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_per_variant() {
        let a = VariantQty::new(10, 5, 2);
        let b = VariantQty::new(3, 5, 0);
        assert_eq!(a - b, VariantQty::new(7, 0, 2));
        assert_eq!(a + b, VariantQty::new(13, 10, 2));
        assert_eq!((a - b).total(), 9);
        assert_eq!(-b, VariantQty::new(-3, -5, 0));
    }

    #[test]
    fn first_negative_reports_variant() {
        assert_eq!(VariantQty::new(1, -1, -2).first_negative(), Some(ProductVariant::Medium));
        assert_eq!(VariantQty::new(0, 0, 0).first_negative(), None);
        assert_eq!(VariantQty::new(5, 0, 9).first_above(5), Some(ProductVariant::Large));
    }

    #[test]
    fn serializes_with_size_labels() {
        let json = serde_json::to_value(VariantQty::new(1, 2, 3)).unwrap();
        assert_eq!(json, serde_json::json!({"3k": 1, "5k": 2, "10k": 3}));
        let back: VariantQty = serde_json::from_str(r#"{"5k": 4}"#).unwrap();
        assert_eq!(back, VariantQty::new(0, 4, 0));
    }

    #[test]
    fn sum_of_quantities() {
        let total: VariantQty = [VariantQty::new(1, 0, 0), VariantQty::new(0, 2, 3)]
            .into_iter()
            .sum();
        assert_eq!(total, VariantQty::new(1, 2, 3));
    }
}
