//! Error types for configuration and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or unreadable dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("No endpoints configured")]
    NoEndpoints,

    #[error("Endpoint #{index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("Duplicate endpoint label: {0}")]
    DuplicateLabel(String),

    #[error("Endpoint {label} has an invalid URL {url:?}: expected http:// or https://")]
    InvalidUrl { label: String, url: String },

    #[error("Endpoint {label} renders no sections")]
    NoSections { label: String },

    #[error("Invalid api_endpoints key {0:?}: expected endpoint_<n>")]
    InvalidEndpointKey(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("No endpoint labeled {0:?}")]
    UnknownTab(String),
}

/// Failure to render a dashboard view.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize dashboard: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format dashboard: {0}")]
    Format(#[from] std::fmt::Error),
}
