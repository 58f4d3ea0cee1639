//! Raw status documents and the typed snapshot parsed from them.

use crate::entities::{LiquidityOverview, LiquidityPositions, VaultData};
use crate::enums::SectionKind;
use serde::Serialize;
use serde_json::{Map, Value};

/// Body returned by a status endpoint.
///
/// Always a JSON object; a body that decodes to any other JSON value is kept
/// as an empty document so that every section is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StatusDocument(Map<String, Value>);

impl StatusDocument {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_section(&self, kind: SectionKind) -> bool {
        self.section(kind).is_some()
    }

    /// The section object, if present and an object.
    pub fn section(&self, kind: SectionKind) -> Option<&Map<String, Value>> {
        self.0.get(kind.key()).and_then(Value::as_object)
    }

    pub fn snapshot(&self) -> VaultSnapshot {
        VaultSnapshot {
            vault_data: self.section(SectionKind::VaultData).map(VaultData::from_section),
            liquidity_overview: self
                .section(SectionKind::LiquidityOverview)
                .map(LiquidityOverview::from_section),
            liquidity_positions: self
                .section(SectionKind::LiquidityPositions)
                .map(LiquidityPositions::from_section),
        }
    }
}

impl From<Map<String, Value>> for StatusDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self::new(map)
    }
}

/// Immutable view of one fetch; each section is `None` when the API omitted it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VaultSnapshot {
    pub vault_data: Option<VaultData>,
    pub liquidity_overview: Option<LiquidityOverview>,
    pub liquidity_positions: Option<LiquidityPositions>,
}

impl VaultSnapshot {
    pub fn has_section(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::VaultData => self.vault_data.is_some(),
            SectionKind::LiquidityOverview => self.liquidity_overview.is_some(),
            SectionKind::LiquidityPositions => self.liquidity_positions.is_some(),
        }
    }
}
