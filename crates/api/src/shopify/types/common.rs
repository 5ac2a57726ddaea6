//! Common domain types shared across Shopify Admin API operations.

use serde::{Deserialize, Serialize};

// =============================================================================
// User Errors
// =============================================================================

/// A field-level validation error returned alongside a mutation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field (e.g., `["variants", "0", "price"]`).
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable error message.
    pub message: String,
}

impl UserError {
    /// The field path joined with dots, if Shopify reported one.
    #[must_use]
    pub fn field_path(&self) -> Option<String> {
        self.field
            .as_ref()
            .filter(|segments| !segments.is_empty())
            .map(|segments| segments.join("."))
    }
}

// =============================================================================
// Publication Types
// =============================================================================

/// A sales channel a product can be published to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Publication ID.
    pub id: String,
    /// Channel name (e.g., "Online Store").
    #[serde(default)]
    pub name: Option<String>,
}

// =============================================================================
// Metafield Types
// =============================================================================

/// Input for creating a metafield alongside a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldInput {
    /// Namespace for the metafield.
    pub namespace: String,
    /// Key within the namespace.
    pub key: String,
    /// The metafield type (e.g., `single_line_text_field`, `number_integer`).
    #[serde(rename = "type")]
    pub type_: String,
    /// The value to store.
    pub value: String,
}

impl MetafieldInput {
    /// The `seo.hidden` metafield that keeps a product out of storefront search.
    #[must_use]
    pub fn seo_hidden() -> Self {
        Self {
            namespace: "seo".to_string(),
            key: "hidden".to_string(),
            type_: "number_integer".to_string(),
            value: "1".to_string(),
        }
    }
}
