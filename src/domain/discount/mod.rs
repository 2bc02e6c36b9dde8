//! Discount statistics over a set of products.
//!
//! Each product contributes the discount of its first variant. Products
//! without a positive compare-at price count as 0% and are ignored by every
//! statistic, so an empty list and a list with no discounted products produce
//! the same result.

use serde::Serialize;

use crate::shop::Product;

/// Aggregated discount figures, in whole percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiscountStats {
    pub max: i64,
    pub min: i64,
    pub average: i64,
    pub discounted_count: usize,
}

impl DiscountStats {
    /// Aggregate a list of per-product percentages.
    ///
    /// Only strictly positive entries are considered.
    pub fn from_percentages<I>(percentages: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let discounts: Vec<i64> = percentages.into_iter().filter(|p| *p > 0).collect();

        if discounts.is_empty() {
            return Self::default();
        }

        let sum: i64 = discounts.iter().sum();
        let mean = sum as f64 / discounts.len() as f64;

        Self {
            max: discounts.iter().copied().max().unwrap_or(0),
            min: discounts.iter().copied().min().unwrap_or(0),
            average: round_half_up(mean),
            discounted_count: discounts.len(),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.discounted_count > 0
    }

    /// `"true"` when any product is discounted, `""` otherwise
    pub fn has_discount_flag(&self) -> &'static str {
        if self.has_discount() {
            "true"
        } else {
            ""
        }
    }

    pub fn max_label(&self) -> String {
        format!("{}%", self.max)
    }

    pub fn min_label(&self) -> String {
        format!("{}%", self.min)
    }

    pub fn average_label(&self) -> String {
        format!("{}%", self.average)
    }

    /// `"{min}%"` when every discount is the same, `"{min}-{max}%"` otherwise
    pub fn range_label(&self) -> String {
        if self.min == self.max {
            format!("{}%", self.min)
        } else {
            format!("{}-{}%", self.min, self.max)
        }
    }
}

/// Discount of a single product's first variant, in whole percent.
///
/// Returns 0 when there is no variant or no positive compare-at price. A
/// compare-at price below the selling price yields a negative value.
pub fn discount_percentage(product: &Product) -> i64 {
    let Some(variant) = product.first_variant() else {
        return 0;
    };

    match variant.compare_at_price {
        Some(compare_at) if compare_at > 0.0 => {
            round_half_up((compare_at - variant.price) / compare_at * 100.0)
        }
        _ => 0,
    }
}

/// Compute discount statistics for a list of products
pub fn compute_discounts(products: &[Product]) -> DiscountStats {
    DiscountStats::from_percentages(products.iter().map(discount_percentage))
}

/// Round to the nearest integer, with halves going up (`-2.5` → `-2`)
fn round_half_up(value: f64) -> i64 {
    if value.is_finite() {
        (value + 0.5).floor() as i64
    } else {
        0
    }
}
