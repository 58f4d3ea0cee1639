//! Output formats for a [`DashboardView`].

use crate::error::RenderError;
use crate::view::{DashboardView, KeyValueRow, PositionsView, SectionView, TabView};
use prettytable::{Table, format, row};
use std::fmt::Write;

/// Turns a view into printable output. Implementations hold no state
/// between calls: the same view always yields the same output.
pub trait Renderer {
    /// Renders the whole dashboard.
    ///
    /// # Errors
    /// Returns an error if the output cannot be produced.
    fn render(&self, view: &DashboardView) -> Result<String, RenderError>;
}

/// Plain-text dashboard for terminals.
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    /// Width of the chart plot area in cells.
    pub chart_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { chart_width: 50 }
    }
}

impl TextRenderer {
    pub fn new(chart_width: usize) -> Self {
        Self { chart_width }
    }

    fn render_tab(&self, out: &mut String, tab: &TabView) -> Result<(), RenderError> {
        let header = format!("[ {} ]", tab.label);
        let mut meta = Vec::new();
        if let Some(pair) = &tab.pair {
            meta.push(pair.clone());
        }
        if let Some(at) = tab.retrieved_at {
            let cached = if tab.from_cache { " (cached)" } else { "" };
            meta.push(format!("updated {}{cached}", at.format("%Y-%m-%d %H:%M:%S UTC")));
        }
        if meta.is_empty() {
            writeln!(out, "{header}")?;
        } else {
            writeln!(out, "{header}  {}", meta.join(" · "))?;
        }
        writeln!(out, "{}", "-".repeat(header.chars().count()))?;

        if let Some(error) = &tab.error {
            writeln!(out, "❌ {error}")?;
            return Ok(());
        }

        for section in &tab.sections {
            writeln!(out)?;
            writeln!(out, "{}", section.title())?;
            match section {
                SectionView::VaultData { rows } | SectionView::LiquidityOverview { rows } => {
                    write!(out, "{}", key_value_table(rows))?;
                }
                SectionView::LiquidityPositions(view) => self.render_positions(out, view)?,
            }
        }
        Ok(())
    }

    fn render_positions(&self, out: &mut String, view: &PositionsView) -> Result<(), RenderError> {
        let Some(details) = &view.details else {
            writeln!(out, "Positions: {}", lp_vault_domain::value_objects::UNAVAILABLE)?;
            return Ok(());
        };

        write!(out, "{}", view.chart.render_ascii(self.chart_width))?;
        writeln!(out)?;
        for detail in details {
            writeln!(out, "{}", detail.range_text())?;
            writeln!(out, "Amount 0: {}", detail.amount0)?;
            writeln!(out, "Amount 1: {}", detail.amount1)?;
            writeln!(out, "---")?;
        }
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &DashboardView) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(out, "{}", view.title)?;
        writeln!(out, "{}", "=".repeat(view.title.chars().count()))?;
        for tab in &view.tabs {
            writeln!(out)?;
            self.render_tab(&mut out, tab)?;
        }
        Ok(out)
    }
}

fn key_value_table(rows: &[KeyValueRow]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for r in rows {
        table.add_row(row![format!("{}:", r.label), r.value]);
    }
    table.to_string()
}

/// Pretty-printed JSON of the view model.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &DashboardView) -> Result<String, RenderError> {
        let mut out = serde_json::to_string_pretty(view)?;
        out.push('\n');
        Ok(out)
    }
}
