use crate::enums::VaultField;
use crate::value_objects::FieldValue;
use serde::Serialize;
use serde_json::{Map, Value};

/// Static description of a vault and its token pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultData {
    pub vault_address: FieldValue,
    pub token0_address: FieldValue,
    pub token0_decimals: FieldValue,
    pub token0_symbol: FieldValue,
    pub token1_address: FieldValue,
    pub token1_decimals: FieldValue,
    pub token1_symbol: FieldValue,
    pub fee_tier: FieldValue,
}

impl VaultData {
    pub fn from_section(section: &Map<String, Value>) -> Self {
        let get = |field: VaultField| FieldValue::lookup(section, field.key());
        Self {
            vault_address: get(VaultField::VaultAddress),
            token0_address: get(VaultField::Token0Address),
            token0_decimals: get(VaultField::Token0Decimals),
            token0_symbol: get(VaultField::Token0Symbol),
            token1_address: get(VaultField::Token1Address),
            token1_decimals: get(VaultField::Token1Decimals),
            token1_symbol: get(VaultField::Token1Symbol),
            fee_tier: get(VaultField::FeeTier),
        }
    }

    pub fn field(&self, field: VaultField) -> &FieldValue {
        match field {
            VaultField::VaultAddress => &self.vault_address,
            VaultField::Token0Address => &self.token0_address,
            VaultField::Token0Decimals => &self.token0_decimals,
            VaultField::Token0Symbol => &self.token0_symbol,
            VaultField::Token1Address => &self.token1_address,
            VaultField::Token1Decimals => &self.token1_decimals,
            VaultField::Token1Symbol => &self.token1_symbol,
            VaultField::FeeTier => &self.fee_tier,
        }
    }

    /// `"TOKEN0/TOKEN1"` when both symbols are reported.
    pub fn pair_label(&self) -> Option<String> {
        if self.token0_symbol.is_missing() || self.token1_symbol.is_missing() {
            return None;
        }
        Some(format!("{}/{}", self.token0_symbol, self.token1_symbol))
    }
}
