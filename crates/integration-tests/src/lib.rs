//! Integration tests for the shipping protection API.
//!
//! # Running Tests
//!
//! These tests talk to a running server backed by a real (development)
//! Shopify store, and create products there. They are ignored by default.
//!
//! ```bash
//! cargo run -p shipping-protection-api &
//! SHIPPING_PROTECTION_BASE_URL=http://127.0.0.1:3002 \
//!     cargo test -p shipping-protection-integration-tests -- --ignored
//! ```

use reqwest::{Client, Response};
use serde_json::Value;

/// Base URL of the server under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("SHIPPING_PROTECTION_BASE_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3002".to_string())
}

/// HTTP client plus the server it talks to.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Context for the server at [`base_url`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: base_url(),
        }
    }

    /// `GET` a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn get(&self, path: &str) -> reqwest::Result<Response> {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
    }

    /// `POST` a JSON body to a path relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Result<Response> {
        self.client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A tag no existing product carries, so each run starts from an empty bucket family.
#[must_use]
pub fn unique_tag() -> String {
    format!("shipping-protection-it-{}", uuid::Uuid::new_v4().simple())
}
