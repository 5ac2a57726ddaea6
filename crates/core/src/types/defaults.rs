//! Defaults for the auto-created shipping protection product.
//!
//! A shipping protection product is a "variant bucket": it collects the
//! per-order protection variants until it holds [`VARIANT_BUCKET_CAPACITY`]
//! of them, after which a new product is created from these defaults.

use serde::{Deserialize, Serialize};

/// Number of variants a bucket product may hold before a new one is created.
pub const VARIANT_BUCKET_CAPACITY: i64 = 100;

/// Number of products fetched when searching buckets by tag.
pub const PRODUCT_SEARCH_LIMIT: i64 = 100;

/// Number of publications (sales channels) a new variant's product is published to.
pub const PUBLICATION_FETCH_LIMIT: i64 = 10;

/// Values used when the service has to create a bucket product.
///
/// Injected through configuration so deployments can override them without
/// code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingProtectionDefaults {
    /// Tag used to find bucket products when the caller gives none.
    pub tag: String,
    /// Title of a newly created bucket product.
    pub title: String,
    /// HTML description of a newly created bucket product.
    pub description_html: String,
    /// Name of the single product option.
    pub option_name: String,
    /// Value of the single product option.
    pub option_value: String,
    /// Add the `seo.hidden` metafield so storefront search skips the product.
    pub hide_from_search: bool,
}

impl ShippingProtectionDefaults {
    /// Default bucket tag.
    pub const TAG: &'static str = "shipping-protection";
    /// Default bucket title.
    pub const TITLE: &'static str = "Shipping Protection";
    /// Default bucket description.
    pub const DESCRIPTION_HTML: &'static str =
        "<p>Protects your order against loss, theft, and damage in transit.</p>";
    /// Default option name.
    pub const OPTION_NAME: &'static str = "Coverage";
    /// Default option value.
    pub const OPTION_VALUE: &'static str = "Standard";

    /// Resolve the tag for a request: the caller's tag unless it is blank.
    #[must_use]
    pub fn resolve_tag<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .unwrap_or(&self.tag)
    }
}

impl Default for ShippingProtectionDefaults {
    fn default() -> Self {
        Self {
            tag: Self::TAG.to_owned(),
            title: Self::TITLE.to_owned(),
            description_html: Self::DESCRIPTION_HTML.to_owned(),
            option_name: Self::OPTION_NAME.to_owned(),
            option_value: Self::OPTION_VALUE.to_owned(),
            hide_from_search: true,
        }
    }
}
