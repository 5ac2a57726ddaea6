//! Business logic services.
//!
//! # Services
//!
//! - `shipping_protection` - Variant bucket selection and the create/read flows
//! - `validation` - Mutation `userErrors` checks

pub mod shipping_protection;
pub mod validation;

pub use shipping_protection::{
    ProductLookup, ProductLookupParams, ShippingProtectionError, ShippingProtectionService,
    VariantLookup, VariantLookupParams,
};
pub use validation::validate_user_errors;
