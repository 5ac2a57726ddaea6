//! Shipping Protection Core - Shared types library.
//!
//! This crate provides the types shared by the shipping protection API and
//! its integration tests:
//! - `api` - HTTP service backed by the Shopify Admin API
//! - `integration-tests` - End-to-end checks against a running service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, inventory policy, and the defaults used
//!   when a shipping protection product has to be created

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
