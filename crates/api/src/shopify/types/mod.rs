//! Domain types for the Shopify Admin API.
//!
//! These types are the service's own view of Shopify resources. Raw GraphQL
//! response shapes live in `admin::queries` and are converted into these.

mod common;
mod product;
mod variant;

pub use common::*;
pub use product::*;
pub use variant::*;
