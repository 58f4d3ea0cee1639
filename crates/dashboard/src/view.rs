//! View model: what a dashboard shows, independent of output format.

use crate::chart::{BarChart, PRICE_DECIMALS};
use crate::config::EndpointConfig;
use chrono::{DateTime, Utc};
use lp_vault_data::FetchOutcome;
use lp_vault_domain::entities::{LiquidityOverview, LiquidityPositions, Position, VaultData};
use lp_vault_domain::value_objects::{FieldValue, PriceRange, UNAVAILABLE};
use lp_vault_domain::{SectionKind, VaultField, VaultSnapshot};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub tabs: Vec<TabView>,
}

/// Everything shown for one endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub label: String,
    pub url: String,
    /// Fetch failure; when set, `sections` is empty.
    pub error: Option<String>,
    pub retrieved_at: Option<DateTime<Utc>>,
    pub from_cache: bool,
    /// Token pair, e.g. `WETH/USDC`, when the vault reports both symbols.
    pub pair: Option<String>,
    pub sections: Vec<SectionView>,
}

impl TabView {
    /// Maps a fetch outcome onto the sections configured for `endpoint`.
    /// Sections missing from the document are skipped.
    pub fn build(endpoint: &EndpointConfig, outcome: FetchOutcome) -> Self {
        let snapshot = outcome.document.snapshot();
        Self {
            label: endpoint.label.clone(),
            url: endpoint.url.clone(),
            error: outcome.error.map(|e| e.to_string()),
            retrieved_at: outcome.retrieved_at,
            from_cache: outcome.from_cache,
            pair: snapshot.vault_data.as_ref().and_then(VaultData::pair_label),
            sections: sections_for(&snapshot, &endpoint.sections, &endpoint.vault_fields),
        }
    }
}

/// Renders the requested sections in order, skipping those the snapshot lacks.
pub fn sections_for(
    snapshot: &VaultSnapshot,
    kinds: &[SectionKind],
    vault_fields: &[VaultField],
) -> Vec<SectionView> {
    kinds
        .iter()
        .filter_map(|kind| match kind {
            SectionKind::VaultData => snapshot
                .vault_data
                .as_ref()
                .map(|v| vault_data_section(v, vault_fields)),
            SectionKind::LiquidityOverview => {
                snapshot.liquidity_overview.as_ref().map(overview_section)
            }
            SectionKind::LiquidityPositions => {
                snapshot.liquidity_positions.as_ref().map(positions_section)
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "camelCase")]
pub enum SectionView {
    VaultData { rows: Vec<KeyValueRow> },
    LiquidityOverview { rows: Vec<KeyValueRow> },
    LiquidityPositions(PositionsView),
}

impl SectionView {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::VaultData { .. } => SectionKind::VaultData,
            Self::LiquidityOverview { .. } => SectionKind::LiquidityOverview,
            Self::LiquidityPositions(_) => SectionKind::LiquidityPositions,
        }
    }

    pub fn title(&self) -> &'static str {
        self.kind().title()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValueRow {
    pub label: String,
    pub value: FieldValue,
}

impl KeyValueRow {
    fn new(label: &str, value: &FieldValue) -> Self {
        Self {
            label: label.to_string(),
            value: value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionsView {
    pub chart: BarChart,
    /// `None` when the section carries no usable `positions` list.
    pub details: Option<Vec<PositionDetail>>,
}

/// Text listing of one position below the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionDetail {
    pub label: String,
    /// Bounds rounded for display.
    pub range: Option<PriceRange>,
    pub amount0: FieldValue,
    pub amount1: FieldValue,
}

impl PositionDetail {
    pub fn from_position(position: &Position) -> Self {
        Self {
            label: position.label(),
            range: position.range().map(|r| r.rounded(PRICE_DECIMALS)),
            amount0: position.amount0.clone(),
            amount1: position.amount1.clone(),
        }
    }

    /// `Range: X - Y`, or the placeholder when a bound is missing.
    pub fn range_text(&self) -> String {
        match &self.range {
            Some(range) => format!("Range: {} - {}", range.lower_price, range.upper_price),
            None => format!("Range: {UNAVAILABLE}"),
        }
    }
}

pub fn vault_data_section(vault: &VaultData, fields: &[VaultField]) -> SectionView {
    SectionView::VaultData {
        rows: fields
            .iter()
            .map(|f| KeyValueRow::new(f.label(), vault.field(*f)))
            .collect(),
    }
}

pub fn overview_section(overview: &LiquidityOverview) -> SectionView {
    SectionView::LiquidityOverview {
        rows: overview
            .rows()
            .map(|(f, value)| KeyValueRow::new(f.label(), value))
            .collect(),
    }
}

pub fn positions_section(positions: &LiquidityPositions) -> SectionView {
    let list = positions.positions.as_deref().unwrap_or_default();
    SectionView::LiquidityPositions(PositionsView {
        chart: BarChart::from_positions(list),
        details: positions
            .positions
            .as_ref()
            .map(|list| list.iter().map(PositionDetail::from_position).collect()),
    })
}
