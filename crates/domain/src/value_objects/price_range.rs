use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price interval `[lower_price, upper_price]` over which a position deploys
/// capital. The ordering of the bounds is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower_price: Price,
    pub upper_price: Price,
}

impl PriceRange {
    pub fn new(lower: Price, upper: Price) -> Self {
        Self {
            lower_price: lower,
            upper_price: upper,
        }
    }

    /// Both bounds rounded to `dp` decimal places.
    pub fn rounded(&self, dp: u32) -> Self {
        Self::new(self.lower_price.round_dp(dp), self.upper_price.round_dp(dp))
    }

    /// `upper - lower`; negative when the bounds are inverted, `None` when
    /// the difference does not fit in a `Decimal`.
    pub fn width(&self) -> Option<Decimal> {
        self.upper_price.value.checked_sub(self.lower_price.value)
    }

    pub fn is_well_formed(&self) -> bool {
        self.lower_price.value <= self.upper_price.value
    }
}
