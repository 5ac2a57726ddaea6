//! Product domain types for the shipping protection bucket products.

use serde::{Deserialize, Serialize};
use shipping_protection_core::VARIANT_BUCKET_CAPACITY;

use super::common::{MetafieldInput, UserError};

// =============================================================================
// Product Types
// =============================================================================

/// An option name/value pair selected by a variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    /// Option name (e.g., "Coverage").
    pub name: String,
    /// Option value (e.g., "Standard").
    pub value: String,
}

/// Options selected by one of a product's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOptions {
    /// Option name/value pairs.
    pub selected_options: Vec<SelectedOption>,
}

/// A `{ nodes: [...] }` list of variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantNodes {
    /// Variants, first only.
    pub nodes: Vec<VariantOptions>,
}

/// A `{ count }` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantsCount {
    /// Number of variants.
    pub count: i64,
}

/// A product used as a shipping protection variant bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingProtectionProduct {
    /// Product ID.
    pub id: String,
    /// Product title.
    pub title: String,
    /// Whether the product only has Shopify's auto-generated default variant.
    pub has_only_default_variant: bool,
    /// The product's first variant and its selected options.
    pub variants: VariantNodes,
    /// Number of variants the product currently holds.
    pub variants_count: VariantsCount,
}

impl ShippingProtectionProduct {
    /// Whether the bucket can take another variant.
    #[must_use]
    pub const fn has_capacity(&self) -> bool {
        self.variants_count.count < VARIANT_BUCKET_CAPACITY
    }
}

// =============================================================================
// Product Inputs
// =============================================================================

/// A value for a product option being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValueCreateInput {
    /// Option value name.
    pub name: String,
}

/// A product option being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCreateInput {
    /// Option name.
    pub name: String,
    /// Option values.
    pub values: Vec<OptionValueCreateInput>,
}

impl OptionCreateInput {
    /// An option with exactly one value.
    #[must_use]
    pub fn single(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            values: vec![OptionValueCreateInput {
                name: value.to_owned(),
            }],
        }
    }
}

/// Input for `productCreate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    /// Product title.
    pub title: String,
    /// Product tags.
    pub tags: Vec<String>,
    /// HTML description.
    pub description_html: String,
    /// Options created with the product.
    pub product_options: Vec<OptionCreateInput>,
    /// Metafields created with the product.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<MetafieldInput>,
    /// Product type/category.
    pub product_type: String,
}

// =============================================================================
// Mutation Payloads
// =============================================================================

/// Result of `productCreate`.
#[derive(Debug, Clone)]
pub struct ProductCreatePayload {
    /// The created product, if any.
    pub product: Option<ShippingProtectionProduct>,
    /// Validation errors reported by Shopify.
    pub user_errors: Vec<UserError>,
}

/// Result of `productOptionsCreate`.
#[derive(Debug, Clone)]
pub struct ProductOptionsCreatePayload {
    /// Validation errors reported by Shopify.
    pub user_errors: Vec<UserError>,
}
