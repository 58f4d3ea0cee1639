//! Dashboard configuration loaded from TOML.

use crate::error::ConfigError;
use lp_vault_domain::{SectionKind, VaultField};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Tab labels used when endpoints are given without one.
pub const DEFAULT_LABELS: [&str; 4] = ["Bullish", "Bearish", "Hodl", "Block"];

fn default_title() -> String {
    "Brokkr LP Vaults Current State".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_sections() -> Vec<SectionKind> {
    SectionKind::ALL.to_vec()
}

fn default_vault_fields() -> Vec<VaultField> {
    VaultField::STANDARD.to_vec()
}

/// Label for the endpoint at 1-based position `n`.
pub fn default_label(n: usize) -> String {
    DEFAULT_LABELS
        .get(n.wrapping_sub(1))
        .map_or_else(|| format!("Endpoint {n}"), |label| (*label).to_string())
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,

    /// How long a fetched document is reused.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Bound on a single HTTP request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Redraw period of `watch`.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Endpoints in tab order.
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,

    /// Secrets-style table `endpoint_1 = "https://..."`, used when
    /// `endpoints` is empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub api_endpoints: BTreeMap<String, String>,
}

/// One polled endpoint, shown as one tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub label: String,
    pub url: String,

    /// Sections to render, in order.
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionKind>,

    /// Vault fields to list under "Vault Data".
    #[serde(default = "default_vault_fields")]
    pub vault_fields: Vec<VaultField>,
}

impl EndpointConfig {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            sections: default_sections(),
            vault_fields: default_vault_fields(),
        }
    }

    #[must_use]
    pub fn with_sections(mut self, sections: Vec<SectionKind>) -> Self {
        self.sections = sections;
        self
    }

    #[must_use]
    pub fn with_vault_fields(mut self, fields: Vec<VaultField>) -> Self {
        self.vault_fields = fields;
        self
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.label.trim().is_empty() {
            return Err(ConfigError::EmptyLabel { index });
        }
        let url = self.url.trim();
        let has_scheme = url.starts_with("http://") || url.starts_with("https://");
        if !has_scheme || url.len() <= "https://".len() {
            return Err(ConfigError::InvalidUrl {
                label: self.label.clone(),
                url: self.url.clone(),
            });
        }
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections {
                label: self.label.clone(),
            });
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            cache_ttl_secs: default_cache_ttl_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            refresh_interval_secs: default_refresh_interval_secs(),
            endpoints: Vec::new(),
            api_endpoints: BTreeMap::new(),
        }
    }
}

impl DashboardConfig {
    /// Loads, resolves and validates a configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.resolved()
    }

    /// Builds a configuration from bare URLs, labeled in order with
    /// [`DEFAULT_LABELS`].
    pub fn from_urls(urls: impl IntoIterator<Item = String>) -> Self {
        let endpoints = urls
            .into_iter()
            .enumerate()
            .map(|(i, url)| EndpointConfig::new(default_label(i + 1), url))
            .collect();
        Self {
            endpoints,
            ..Self::default()
        }
    }

    /// Expands `api_endpoints` when no explicit endpoint list is given,
    /// then validates.
    ///
    /// # Errors
    /// Returns an error if the result is invalid.
    pub fn resolved(mut self) -> Result<Self, ConfigError> {
        if self.endpoints.is_empty() && !self.api_endpoints.is_empty() {
            let mut numbered = Vec::with_capacity(self.api_endpoints.len());
            for (key, url) in &self.api_endpoints {
                let n = key
                    .strip_prefix("endpoint_")
                    .and_then(|n| n.parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ConfigError::InvalidEndpointKey(key.clone()))?;
                numbered.push((n, url.clone()));
            }
            // BTreeMap order is lexicographic; endpoint_10 must follow endpoint_9.
            numbered.sort_by_key(|(n, _)| *n);
            self.endpoints = numbered
                .into_iter()
                .map(|(n, url)| EndpointConfig::new(default_label(n), url))
                .collect();
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks every invariant of the configuration.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache_ttl_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_secs",
                reason: "must be greater than 0".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            endpoint.validate(i + 1)?;
            if !seen.insert(endpoint.label.trim().to_lowercase()) {
                return Err(ConfigError::DuplicateLabel(endpoint.label.clone()));
            }
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Endpoints to show: all of them, or the one whose label matches `tab`
    /// case-insensitively.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownTab`] if no label matches.
    pub fn select(&self, tab: Option<&str>) -> Result<Vec<&EndpointConfig>, ConfigError> {
        match tab {
            None => Ok(self.endpoints.iter().collect()),
            Some(tab) => {
                let wanted = tab.trim();
                let selected: Vec<_> = self
                    .endpoints
                    .iter()
                    .filter(|e| e.label.trim().eq_ignore_ascii_case(wanted))
                    .collect();
                if selected.is_empty() {
                    Err(ConfigError::UnknownTab(tab.to_string()))
                } else {
                    Ok(selected)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config: DashboardConfig = toml::from_str(
            r#"
            title = "Vaults"
            cache_ttl_secs = 120

            [[endpoints]]
            label = "Bullish"
            url = "https://api.example.com/bullish"
            sections = ["liquidityOverview", "liquidityPositions"]

            [[endpoints]]
            label = "Bearish"
            url = "https://api.example.com/bearish"
            vault_fields = ["vaultAddress", "feeTier"]
            "#,
        )
        .unwrap();
        let config = config.resolved().unwrap();

        assert_eq!(config.title, "Vaults");
        assert_eq!(config.cache_ttl(), Duration::from_secs(120));
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.endpoints.len(), 2);
        assert_eq!(
            config.endpoints[0].sections,
            vec![SectionKind::LiquidityOverview, SectionKind::LiquidityPositions]
        );
        assert_eq!(config.endpoints[0].vault_fields, VaultField::STANDARD.to_vec());
        assert_eq!(
            config.endpoints[1].vault_fields,
            vec![VaultField::VaultAddress, VaultField::FeeTier]
        );
        assert_eq!(config.endpoints[1].sections, SectionKind::ALL.to_vec());
    }

    #[test]
    fn test_api_endpoints_table() {
        let config: DashboardConfig = toml::from_str(
            r#"
            [api_endpoints]
            endpoint_2 = "https://api.example.com/2"
            endpoint_1 = "https://api.example.com/1"
            endpoint_10 = "https://api.example.com/10"
            endpoint_4 = "https://api.example.com/4"
            "#,
        )
        .unwrap();
        let config = config.resolved().unwrap();
        let labels: Vec<_> = config.endpoints.iter().map(|e| e.label.as_str()).collect();

        assert_eq!(labels, vec!["Bullish", "Bearish", "Block", "Endpoint 10"]);
        assert_eq!(config.endpoints[0].url, "https://api.example.com/1");
    }

    #[test]
    fn test_invalid_api_endpoint_key() {
        let mut config = DashboardConfig::default();
        config
            .api_endpoints
            .insert("primary".to_string(), "https://a.example".to_string());
        assert!(matches!(
            config.resolved(),
            Err(ConfigError::InvalidEndpointKey(_))
        ));
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            DashboardConfig::default().validate(),
            Err(ConfigError::NoEndpoints)
        ));

        let bad_url = DashboardConfig::from_urls(vec!["ftp://vault".to_string()]);
        assert!(matches!(bad_url.validate(), Err(ConfigError::InvalidUrl { .. })));

        let duplicate = DashboardConfig {
            endpoints: vec![
                EndpointConfig::new("Hodl", "https://a.example"),
                EndpointConfig::new("hodl", "https://b.example"),
            ],
            ..DashboardConfig::default()
        };
        assert!(matches!(
            duplicate.validate(),
            Err(ConfigError::DuplicateLabel(_))
        ));

        let zero_ttl = DashboardConfig {
            cache_ttl_secs: 0,
            ..DashboardConfig::from_urls(vec!["https://a.example".to_string()])
        };
        assert!(matches!(
            zero_ttl.validate(),
            Err(ConfigError::InvalidValue { field: "cache_ttl_secs", .. })
        ));

        let no_sections = DashboardConfig {
            endpoints: vec![EndpointConfig::new("A", "https://a.example").with_sections(vec![])],
            ..DashboardConfig::default()
        };
        assert!(matches!(
            no_sections.validate(),
            Err(ConfigError::NoSections { .. })
        ));
    }

    #[test]
    fn test_from_urls_labels() {
        let config = DashboardConfig::from_urls(
            (1..=5).map(|i| format!("https://api.example.com/{i}")),
        );
        let labels: Vec<_> = config.endpoints.iter().map(|e| e.label.clone()).collect();
        assert_eq!(labels, vec!["Bullish", "Bearish", "Hodl", "Block", "Endpoint 5"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_select_tab() {
        let config = DashboardConfig::from_urls(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ]);

        assert_eq!(config.select(None).unwrap().len(), 2);
        let selected = config.select(Some("bearish")).unwrap();
        assert_eq!(selected[0].url, "https://b.example");
        assert!(matches!(
            config.select(Some("Moon")),
            Err(ConfigError::UnknownTab(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[endpoints]]\nlabel = \"Hodl\"\nurl = \"http://localhost:8080/status\""
        )
        .unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.endpoints[0].label, "Hodl");

        let missing = DashboardConfig::load("/nonexistent/lp-vault.toml");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoints = 3").unwrap();
        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
