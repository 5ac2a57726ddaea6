//! Shipping protection API library.
//!
//! Sells shipping protection as Shopify product variants. Variants are kept
//! in tagged "bucket" products of up to 100 variants each; this crate creates
//! buckets as they fill up and exposes the create/read endpoints over HTTP.
//!
//! # Security
//!
//! This crate holds a Shopify Admin API access token with HIGH PRIVILEGE
//! access to the store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod shopify;
pub mod state;
