//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the Shopify Admin API access token.** The token can
//! create, publish and modify any product in the store.
//!
//! # Architecture
//!
//! - Operations implement `graphql_client::GraphQLQuery` so every document,
//!   its variables and its response shape live together in `queries`
//! - Direct API calls to Shopify (no local state, no caching)
//! - Mutations return their `userErrors` to the caller, which decides how
//!   to report them
//!
//! # Example
//!
//! ```rust,ignore
//! use shipping_protection_api::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! let buckets = client.get_products_by_tag("shipping-protection").await?;
//! let publications = client.get_publications().await?;
//! ```

mod admin;
pub mod types;

pub use admin::AdminClient;
#[cfg(test)]
pub(crate) use admin::test_support;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
