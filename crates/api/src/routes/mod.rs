//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                    - Health check
//!
//! # Shipping protection
//! POST /shipping-protection?tag=                  - Create variants in a bucket product
//! GET  /shipping-protection/products?tag=         - Bucket products by tag
//! GET  /shipping-protection/products/{id}         - One bucket product
//! GET  /shipping-protection/variants?field=&value= - First variant matching a field
//! GET  /shipping-protection/variants/{id}         - One variant
//! ```

use axum::Router;

use crate::state::AppState;

pub mod shipping_protection;

/// Build the application router (without state).
pub fn routes() -> Router<AppState> {
    Router::new().nest("/shipping-protection", shipping_protection::router())
}
