//! Application state shared across handlers.

use std::sync::Arc;

use vivarium_shipping::{RateError, RatesClient};

use crate::catalog::{CatalogLoadError, FileCatalog};
use crate::config::StorefrontConfig;

/// Error building application state at startup.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Rates(#[from] RateError),
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
}

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the rates client, the catalog, and
/// configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    rates: RatesClient,
    catalog: FileCatalog,
}

impl AppState {
    /// Create application state from configuration, loading the catalog
    /// documents and building the rates client.
    ///
    /// # Errors
    ///
    /// Returns an error if the rates client cannot be built (bad
    /// credential format) or the catalog documents do not load.
    pub fn new(config: StorefrontConfig) -> Result<Self, StateError> {
        let rates = RatesClient::new(&config.shipping.secureship)?;
        let catalog = FileCatalog::load(&config.data_dir)?;

        Ok(Self::from_parts(config, rates, catalog))
    }

    /// Assemble state from pre-built parts (used by tests).
    #[must_use]
    pub fn from_parts(config: StorefrontConfig, rates: RatesClient, catalog: FileCatalog) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                rates,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the SecureShip rates client.
    #[must_use]
    pub fn rates(&self) -> &RatesClient {
        &self.inner.rates
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &FileCatalog {
        &self.inner.catalog
    }
}
