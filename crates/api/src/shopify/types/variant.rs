//! Product variant domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shipping_protection_core::InventoryPolicy;

use super::common::{MetafieldInput, UserError};

/// A shipping protection variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProtectionVariant {
    /// Variant ID.
    pub id: String,
    /// Variant title (combination of option values).
    pub title: String,
    /// Current price.
    pub price: Decimal,
}

/// Option value selected by a variant being created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOptionValueInput {
    /// Name of the option the value belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_name: Option<String>,
    /// Option value.
    pub name: String,
}

/// Inventory item settings of a variant being created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemInput {
    /// SKU code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Whether Shopify tracks inventory for the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracked: Option<bool>,
    /// Whether the item requires shipping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_shipping: Option<bool>,
}

/// A variant to create with `productVariantsBulkCreate`.
///
/// The commonly used fields are typed; any other Shopify
/// `ProductVariantsBulkInput` field is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariantsBulkInput {
    /// Variant price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Compare-at price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,
    /// Option values identifying the variant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<VariantOptionValueInput>,
    /// Inventory policy. Always sent as `CONTINUE` by this service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_policy: Option<InventoryPolicy>,
    /// Inventory item settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_item: Option<InventoryItemInput>,
    /// Whether the variant is taxable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxable: Option<bool>,
    /// Barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    /// Metafields created with the variant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<MetafieldInput>,
    /// Remaining input fields, passed to Shopify as given.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProductVariantsBulkInput {
    /// The same input with overselling allowed.
    #[must_use]
    pub fn continue_selling(self) -> Self {
        Self {
            inventory_policy: Some(InventoryPolicy::Continue),
            ..self
        }
    }
}

/// Result of `productVariantsBulkCreate`.
#[derive(Debug, Clone)]
pub struct VariantsCreatePayload {
    /// The first created variant, if any.
    pub variant: Option<ShippingProtectionVariant>,
    /// Validation errors reported by Shopify.
    pub user_errors: Vec<UserError>,
}
