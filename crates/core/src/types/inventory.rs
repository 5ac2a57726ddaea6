//! Inventory policy for product variants.

use serde::{Deserialize, Serialize};

/// Whether a variant can be sold once its tracked inventory reaches zero.
///
/// Maps to Shopify's `ProductVariantInventoryPolicy` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryPolicy {
    /// Stop selling at zero inventory.
    #[default]
    Deny,
    /// Keep selling at zero inventory (oversell allowed).
    Continue,
}
