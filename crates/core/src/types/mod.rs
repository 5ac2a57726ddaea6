//! Core types for shipping protection.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod defaults;
pub mod gid;
pub mod inventory;

pub use defaults::{
    PRODUCT_SEARCH_LIMIT, PUBLICATION_FETCH_LIMIT, ShippingProtectionDefaults,
    VARIANT_BUCKET_CAPACITY,
};
pub use gid::{GidError, GidType, ShopifyGid};
pub use inventory::InventoryPolicy;
