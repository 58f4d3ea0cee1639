//! Horizontal bar chart of open liquidity ranges.

use lp_vault_domain::entities::Position;
use lp_vault_domain::value_objects::{Price, PriceRange};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt::Write;
use tracing::warn;

/// Decimal places shown for range bounds.
pub const PRICE_DECIMALS: u32 = 2;

/// One bar: anchored at `base`, `length` wide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarGeometry {
    pub label: String,
    pub base: Decimal,
    pub length: Decimal,
    pub hover: String,
}

impl BarGeometry {
    /// Geometry of a position with both bounds reported, rounded to
    /// [`PRICE_DECIMALS`]. `None` when a bound is missing or the bounds are
    /// too far apart to measure.
    pub fn from_position(position: &Position) -> Option<Self> {
        let range = position.range()?.rounded(PRICE_DECIMALS);
        if !range.is_well_formed() {
            warn!(
                position = position.index,
                lower = %range.lower_price,
                upper = %range.upper_price,
                "Range lower bound is above its upper bound"
            );
        }
        if range.lower_price.is_saturated() || range.upper_price.is_saturated() {
            warn!(position = position.index, "Range bound clamped to the largest price");
        }
        let Some(length) = range.width() else {
            warn!(
                position = position.index,
                lower = %range.lower_price,
                upper = %range.upper_price,
                "Range width overflows, skipping bar"
            );
            return None;
        };
        Some(Self {
            label: position.label(),
            base: range.lower_price.value,
            length,
            hover: hover_text(&range, position),
        })
    }

    pub fn end(&self) -> Decimal {
        self.base.saturating_add(self.length)
    }

    /// The `(base, base + length)` interval as a price range.
    pub fn interval(&self) -> PriceRange {
        PriceRange::new(Price::new(self.base), Price::new(self.end()))
    }

    fn span(&self) -> (Decimal, Decimal) {
        let end = self.end();
        (self.base.min(end), self.base.max(end))
    }
}

fn hover_text(range: &PriceRange, position: &Position) -> String {
    format!(
        "Range: {} - {} | Amount 0: {} | Amount 1: {}",
        range.lower_price, range.upper_price, position.amount0, position.amount1
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_axis_title: String,
    pub bars: Vec<BarGeometry>,
}

impl BarChart {
    pub const TITLE: &'static str = "Open Ranges";
    pub const X_AXIS_TITLE: &'static str = "Price";

    /// One bar per position with a complete range, in list order.
    pub fn from_positions(positions: &[Position]) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            x_axis_title: Self::X_AXIS_TITLE.to_string(),
            bars: positions.iter().filter_map(BarGeometry::from_position).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Smallest and largest price covered by any bar.
    pub fn x_extent(&self) -> Option<(Decimal, Decimal)> {
        self.bars.iter().map(BarGeometry::span).reduce(|(lo, hi), (l, h)| {
            (lo.min(l), hi.max(h))
        })
    }

    /// Draws the chart with a plot area `width` cells wide; each bar is
    /// followed by its hover annotation.
    pub fn render_ascii(&self, width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);

        let Some((min, max)) = self.x_extent() else {
            let _ = writeln!(out, "(no open ranges)");
            return out;
        };

        let width = width.max(10);
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0);
        // Columns are placed in f64: the extent may not fit in a Decimal.
        let lo = min.to_f64().unwrap_or_default();
        let span = max.to_f64().unwrap_or_default() - lo;
        let last = width - 1;
        let column = |value: Decimal| -> usize {
            if !span.is_finite() || span <= 0.0 {
                return 0;
            }
            let offset = value.to_f64().unwrap_or(lo) - lo;
            (offset / span * last as f64).round().clamp(0.0, last as f64) as usize
        };

        for bar in &self.bars {
            let (lo, hi) = bar.span();
            let (start, end) = (column(lo), column(hi));
            let mut cells = String::with_capacity(width * 3);
            for col in 0..width {
                cells.push(if (start..=end).contains(&col) { '█' } else { ' ' });
            }
            let _ = writeln!(out, "{:<label_width$} │{cells}│ {}", bar.label, bar.hover);
        }

        let _ = writeln!(out, "{:<label_width$} └{}┘", "", "─".repeat(width));
        let _ = writeln!(
            out,
            "{:<label_width$}  {}",
            "",
            axis_labels(&min.to_string(), &max.to_string(), &self.x_axis_title, width)
        );
        out
    }
}

/// `min`, centered axis title and `max` spread over `width` cells.
fn axis_labels(min: &str, max: &str, title: &str, width: usize) -> String {
    let used = min.len() + max.len();
    let gap = width.saturating_sub(used);
    if gap >= title.len() + 2 {
        let left = (gap - title.len()) / 2;
        let right = gap - title.len() - left;
        format!("{min}{}{title}{}{max}", " ".repeat(left), " ".repeat(right))
    } else {
        format!("{min}{}{max} ({title})", " ".repeat(gap.max(1)))
    }
}
