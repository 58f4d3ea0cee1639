//! Endpoint orchestration: fetch every tab, then map to a view.

use crate::config::{DashboardConfig, EndpointConfig};
use crate::error::ConfigError;
use crate::view::{DashboardView, TabView};
use futures::future::join_all;
use lp_vault_data::{FetchError, HttpStatusProvider, StatusFetcher, StatusProvider};
use std::time::Instant;
use tracing::{debug, info};

/// One dashboard: a configuration plus the cached fetcher serving it.
#[derive(Debug)]
pub struct Dashboard<P> {
    config: DashboardConfig,
    fetcher: StatusFetcher<P>,
}

impl Dashboard<HttpStatusProvider> {
    /// Builds an HTTP-backed dashboard honoring the configured timeout and
    /// cache TTL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: DashboardConfig) -> Result<Self, FetchError> {
        let provider = HttpStatusProvider::with_timeout(config.request_timeout())?;
        let fetcher = StatusFetcher::new(provider, config.cache_ttl());
        Ok(Self::new(config, fetcher))
    }
}

impl<P: StatusProvider> Dashboard<P> {
    pub fn new(config: DashboardConfig, fetcher: StatusFetcher<P>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &StatusFetcher<P> {
        &self.fetcher
    }

    /// Fetches the selected tabs concurrently and builds the view. Tabs keep
    /// configuration order; a failing endpoint only affects its own tab.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownTab`] if `tab` matches no endpoint.
    pub async fn build_view(&self, tab: Option<&str>) -> Result<DashboardView, ConfigError> {
        let endpoints = self.config.select(tab)?;
        let started = Instant::now();

        let tabs = join_all(endpoints.into_iter().map(|e| self.build_tab(e))).await;

        let failed = tabs.iter().filter(|t| t.error.is_some()).count();
        info!(
            tabs = tabs.len(),
            failed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dashboard view built"
        );
        Ok(DashboardView {
            title: self.config.title.clone(),
            tabs,
        })
    }

    async fn build_tab(&self, endpoint: &EndpointConfig) -> TabView {
        let outcome = self.fetcher.fetch(&endpoint.url).await;
        debug!(
            label = %endpoint.label,
            from_cache = outcome.from_cache,
            ok = outcome.is_ok(),
            "Fetched tab"
        );
        TabView::build(endpoint, outcome)
    }
}
