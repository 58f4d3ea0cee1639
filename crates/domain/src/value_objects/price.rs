use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Reads a price from a JSON leaf. Accepts numbers and numeric strings
    /// (`"1.5"`, `"2e-3"`); anything else yields `None`.
    ///
    /// Finite values outside the `Decimal` range are clamped: magnitudes
    /// below `1e-28` become zero and those above [`Decimal::MAX`] saturate.
    pub fn from_json(value: &Value) -> Option<Self> {
        let decimal = match value {
            // serde_json prints floats in shortest round-trip form, so 2.345
            // parses as exactly 2.345 rather than its binary approximation.
            Value::Number(n) => {
                parse_decimal(&n.to_string()).or_else(|| n.as_f64().and_then(clamp_f64))
            }
            Value::String(s) => parse_decimal(s)
                .or_else(|| s.trim().parse::<f64>().ok().and_then(clamp_f64)),
            _ => None,
        };
        decimal.map(Self::new)
    }

    /// Whether the value sits at the edge of the representable range.
    pub fn is_saturated(&self) -> bool {
        self.value == Decimal::MAX || self.value == Decimal::MIN
    }

    /// Rounds half away from zero, so `2.345` becomes `2.35`.
    pub fn round_dp(&self, dp: u32) -> Self {
        Self {
            value: self
                .value
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

fn clamp_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    if value.abs() < 1e-28 {
        return Some(Decimal::ZERO);
    }
    let max = Decimal::MAX.to_f64()?;
    if value >= max {
        Some(Decimal::MAX)
    } else if value <= -max {
        Some(Decimal::MIN)
    } else {
        Decimal::from_f64(value)
    }
}
