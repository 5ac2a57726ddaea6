//! Application state shared across handlers.

use std::sync::Arc;

use shipping_protection_core::ShippingProtectionDefaults;

use crate::config::ApiConfig;
use crate::shopify::{AdminClient, AdminShopifyError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Nothing in it changes after
/// startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    shopify: AdminClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Admin API HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, AdminShopifyError> {
        let shopify = AdminClient::new(&config.shopify)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, shopify }),
        })
    }

    /// Get a reference to the bucket product defaults.
    #[must_use]
    pub fn defaults(&self) -> &ShippingProtectionDefaults {
        self.inner.config.defaults()
    }

    /// Get a reference to the Shopify Admin API client.
    #[must_use]
    pub fn shopify(&self) -> &AdminClient {
        &self.inner.shopify
    }
}
