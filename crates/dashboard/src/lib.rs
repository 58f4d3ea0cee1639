//! Vault status dashboard.
//!
//! This crate provides:
//! - Configuration of the polled endpoints (one tab each)
//! - The view model built from fetched status documents
//! - Bar-chart geometry for open liquidity ranges
//! - Text and JSON renderers
//! - Orchestration of fetches across endpoints

/// Prelude module for convenient imports.
pub mod prelude;

/// Bar chart of open ranges.
pub mod chart;
/// Configuration.
pub mod config;
/// Fetch-and-map orchestration.
pub mod dashboard;
/// Error types.
pub mod error;
/// Output formats.
pub mod render;
/// View model.
pub mod view;

pub use config::{DashboardConfig, EndpointConfig};
pub use dashboard::Dashboard;
pub use error::{ConfigError, RenderError};
pub use render::{JsonRenderer, Renderer, TextRenderer};
pub use view::DashboardView;
