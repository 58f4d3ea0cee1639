use crate::enums::OverviewField;
use crate::value_objects::FieldValue;
use serde::Serialize;
use serde_json::{Map, Value};

/// Aggregate balances of a vault: deployed liquidity, uncollected fees and
/// idle leftovers per token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityOverview {
    pub sum_token0: FieldValue,
    pub sum_token1: FieldValue,
    pub liquidity0: FieldValue,
    pub liquidity1: FieldValue,
    pub unclaimed_fee0: FieldValue,
    pub unclaimed_fee1: FieldValue,
    pub leftover0: FieldValue,
    pub leftover1: FieldValue,
}

impl LiquidityOverview {
    pub fn from_section(section: &Map<String, Value>) -> Self {
        let get = |field: OverviewField| FieldValue::lookup(section, field.key());
        Self {
            sum_token0: get(OverviewField::SumToken0),
            sum_token1: get(OverviewField::SumToken1),
            liquidity0: get(OverviewField::Liquidity0),
            liquidity1: get(OverviewField::Liquidity1),
            unclaimed_fee0: get(OverviewField::UnclaimedFee0),
            unclaimed_fee1: get(OverviewField::UnclaimedFee1),
            leftover0: get(OverviewField::Leftover0),
            leftover1: get(OverviewField::Leftover1),
        }
    }

    pub fn field(&self, field: OverviewField) -> &FieldValue {
        match field {
            OverviewField::SumToken0 => &self.sum_token0,
            OverviewField::SumToken1 => &self.sum_token1,
            OverviewField::Liquidity0 => &self.liquidity0,
            OverviewField::Liquidity1 => &self.liquidity1,
            OverviewField::UnclaimedFee0 => &self.unclaimed_fee0,
            OverviewField::UnclaimedFee1 => &self.unclaimed_fee1,
            OverviewField::Leftover0 => &self.leftover0,
            OverviewField::Leftover1 => &self.leftover1,
        }
    }

    /// Rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = (OverviewField, &FieldValue)> {
        OverviewField::ALL.into_iter().map(|f| (f, self.field(f)))
    }
}
