//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use lp_vault_dashboard::prelude::*;
//! ```

// Chart
pub use crate::chart::{BarChart, BarGeometry, PRICE_DECIMALS};

// Configuration
pub use crate::config::{DEFAULT_LABELS, DashboardConfig, EndpointConfig, default_label};

// Orchestration
pub use crate::dashboard::Dashboard;

// Errors
pub use crate::error::{ConfigError, RenderError};

// Rendering
pub use crate::render::{JsonRenderer, Renderer, TextRenderer};

// View model
pub use crate::view::{
    DashboardView, KeyValueRow, PositionDetail, PositionsView, SectionView, TabView,
};

// Fetching
pub use lp_vault_data::{HttpStatusProvider, StatusFetcher, StatusProvider};
