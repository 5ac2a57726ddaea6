//! Shipping protection service.
//!
//! Shipping protection is sold as product variants. Variants are collected in
//! "bucket" products that are found by tag; a bucket takes new variants until
//! it holds 100 of them, after which a fresh bucket product is created.
//!
//! Creating a variant runs a fixed sequence of Admin API calls:
//! 1. Find the first bucket with room, or create one
//! 2. Give the bucket its option if it only has the default variant
//! 3. Publish the bucket to every sales channel
//! 4. Create the variants
//!
//! Each step stops the sequence on failure. Steps already applied stay
//! applied.

use serde::Deserialize;
use shipping_protection_core::{GidError, GidType, ShippingProtectionDefaults, ShopifyGid};
use tracing::{info, instrument};

use super::validation::validate_user_errors;
use crate::shopify::{
    AdminClient, AdminShopifyError, CreateProductInput, MetafieldInput, OptionCreateInput,
    ProductVariantsBulkInput, ShippingProtectionProduct, ShippingProtectionVariant,
};

const CREATE_PRODUCT_CONTEXT: &str = "Error occurred during creating shipping protection product";
const CREATE_OPTION_CONTEXT: &str =
    "Error occurred during creating shipping protection product option";
const PUBLISH_CONTEXT: &str = "Error occurred publishing product";
const CREATE_VARIANT_CONTEXT: &str = "Error occurred during creating shipping protection variant";

const MISSING_PRODUCT_LOOKUP: &str = "You did not provide an id or tag";
const MISSING_VARIANT_LOOKUP: &str = "Invalid shipping protection ID or query";

/// Errors that can occur in the shipping protection service.
#[derive(Debug, thiserror::Error)]
pub enum ShippingProtectionError {
    /// Admin API call failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// A mutation reported user errors; only the first is kept.
    #[error("{context}: {message}{}", format_field(.field.as_deref()))]
    UserErrors {
        /// What the service was doing.
        context: &'static str,
        /// Dotted path of the offending input field.
        field: Option<String>,
        /// Shopify's message.
        message: String,
    },

    /// The request named nothing to look up.
    #[error("{0}")]
    MissingLookup(&'static str),

    /// An ID could not be normalized to a global ID.
    #[error(transparent)]
    InvalidId(#[from] GidError),

    /// The create request carried no variants.
    #[error("At least one shipping protection variant is required")]
    EmptyVariantInput,

    /// `productCreate` succeeded without returning a product.
    #[error("Invalid product ID")]
    InvalidProductId,

    /// No product has the requested ID.
    #[error("Shipping protection product not found")]
    ProductNotFound,

    /// No variant has the requested ID.
    #[error("Shipping protection variant not found")]
    VariantNotFound,
}

fn format_field(field: Option<&str>) -> String {
    field.map_or_else(String::new, |f| format!(" (field: {f})"))
}

// =============================================================================
// Lookups
// =============================================================================

/// Raw product lookup parameters from the path and query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductLookupParams {
    /// Product ID (numeric or global).
    pub id: Option<String>,
    /// Bucket tag.
    pub tag: Option<String>,
}

/// How to find shipping protection products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    /// One product by global ID.
    ById(ShopifyGid),
    /// Every product carrying a tag.
    ByTag(String),
}

impl TryFrom<ProductLookupParams> for ProductLookup {
    type Error = ShippingProtectionError;

    fn try_from(params: ProductLookupParams) -> Result<Self, Self::Error> {
        if let Some(id) = non_blank(params.id) {
            return Ok(Self::ById(ShopifyGid::parse(&id, GidType::Product)?));
        }

        non_blank(params.tag)
            .map(Self::ByTag)
            .ok_or(ShippingProtectionError::MissingLookup(MISSING_PRODUCT_LOOKUP))
    }
}

/// Raw variant lookup parameters from the path and query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantLookupParams {
    /// Variant ID (numeric or global).
    pub id: Option<String>,
    /// Search field (e.g., `sku`).
    pub field: Option<String>,
    /// Value the field must match.
    pub value: Option<String>,
}

/// How to find a shipping protection variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantLookup {
    /// One variant by global ID.
    ById(ShopifyGid),
    /// The first variant whose `field` matches `value`.
    ByField {
        /// Search field.
        field: String,
        /// Value to match.
        value: String,
    },
}

impl TryFrom<VariantLookupParams> for VariantLookup {
    type Error = ShippingProtectionError;

    fn try_from(params: VariantLookupParams) -> Result<Self, Self::Error> {
        if let Some(id) = non_blank(params.id) {
            return Ok(Self::ById(ShopifyGid::parse(&id, GidType::ProductVariant)?));
        }

        match (non_blank(params.field), non_blank(params.value)) {
            (Some(field), Some(value)) => Ok(Self::ByField { field, value }),
            _ => Err(ShippingProtectionError::MissingLookup(
                MISSING_VARIANT_LOOKUP,
            )),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

// =============================================================================
// Service
// =============================================================================

/// Shipping protection service, built per request.
pub struct ShippingProtectionService<'a> {
    shopify: &'a AdminClient,
    defaults: &'a ShippingProtectionDefaults,
}

impl<'a> ShippingProtectionService<'a> {
    /// Create a new shipping protection service.
    #[must_use]
    pub const fn new(shopify: &'a AdminClient, defaults: &'a ShippingProtectionDefaults) -> Self {
        Self { shopify, defaults }
    }

    /// Create shipping protection variants in the first bucket with room.
    ///
    /// `tag` selects the bucket family; a missing or blank tag falls back to
    /// the configured default. Returns the first created variant, or `None`
    /// if Shopify created none.
    ///
    /// # Errors
    ///
    /// Returns an error if `variants` is empty, if any Admin API call fails,
    /// or if any mutation reports user errors. Nothing done by earlier steps
    /// is undone.
    #[instrument(skip(self, variants), fields(variants = variants.len()))]
    pub async fn create_variant(
        &self,
        tag: Option<&str>,
        variants: Vec<ProductVariantsBulkInput>,
    ) -> Result<Option<ShippingProtectionVariant>, ShippingProtectionError> {
        if variants.is_empty() {
            return Err(ShippingProtectionError::EmptyVariantInput);
        }

        let tag = self.defaults.resolve_tag(tag);
        let product = self.select_bucket(tag).await?;

        if product.has_only_default_variant {
            self.create_default_option(&product.id).await?;
        }

        self.publish(&product.id).await?;

        let payload = self.shopify.create_variants(&product.id, variants).await?;
        validate_user_errors(&payload.user_errors, CREATE_VARIANT_CONTEXT)?;

        if let Some(variant) = &payload.variant {
            info!(product_id = %product.id, variant_id = %variant.id, "Created shipping protection variant");
        }

        Ok(payload.variant)
    }

    /// Find shipping protection products.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` if an ID lookup matches nothing, or an error
    /// if the Admin API call fails.
    #[instrument(skip(self))]
    pub async fn find_products(
        &self,
        lookup: ProductLookup,
    ) -> Result<Vec<ShippingProtectionProduct>, ShippingProtectionError> {
        match lookup {
            ProductLookup::ById(id) => {
                let product = self
                    .shopify
                    .get_product(id.as_str())
                    .await?
                    .ok_or(ShippingProtectionError::ProductNotFound)?;
                Ok(vec![product])
            }
            ProductLookup::ByTag(tag) => Ok(self.shopify.get_products_by_tag(&tag).await?),
        }
    }

    /// Find one shipping protection variant.
    ///
    /// A field search that matches nothing is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `VariantNotFound` if an ID lookup matches nothing, or an error
    /// if the Admin API call fails.
    #[instrument(skip(self))]
    pub async fn find_variant(
        &self,
        lookup: VariantLookup,
    ) -> Result<Option<ShippingProtectionVariant>, ShippingProtectionError> {
        match lookup {
            VariantLookup::ById(id) => {
                let variant = self
                    .shopify
                    .get_variant(id.as_str())
                    .await?
                    .ok_or(ShippingProtectionError::VariantNotFound)?;
                Ok(Some(variant))
            }
            VariantLookup::ByField { field, value } => Ok(self
                .shopify
                .get_first_variant_by_field(&field, &value)
                .await?),
        }
    }

    /// First bucket under `tag` with room for a variant, created if needed.
    async fn select_bucket(
        &self,
        tag: &str,
    ) -> Result<ShippingProtectionProduct, ShippingProtectionError> {
        let buckets = self.shopify.get_products_by_tag(tag).await?;
        let total = buckets.len();

        if let Some(product) = buckets.into_iter().find(ShippingProtectionProduct::has_capacity) {
            info!(
                product_id = %product.id,
                variants_count = product.variants_count.count,
                "Using existing shipping protection product"
            );
            return Ok(product);
        }

        info!(tag, full_buckets = total, "No shipping protection product with room, creating one");
        self.create_bucket().await
    }

    /// New bucket product with the default title, tag and option.
    #[instrument(skip(self))]
    async fn create_bucket(&self) -> Result<ShippingProtectionProduct, ShippingProtectionError> {
        let defaults = self.defaults;
        let metafields = if defaults.hide_from_search {
            vec![MetafieldInput::seo_hidden()]
        } else {
            vec![]
        };

        let payload = self
            .shopify
            .create_product(CreateProductInput {
                title: defaults.title.clone(),
                tags: vec![defaults.tag.clone()],
                description_html: defaults.description_html.clone(),
                product_options: vec![OptionCreateInput::single(
                    &defaults.option_name,
                    &defaults.option_value,
                )],
                metafields,
                product_type: defaults.tag.clone(),
            })
            .await?;
        validate_user_errors(&payload.user_errors, CREATE_PRODUCT_CONTEXT)?;

        let product = payload
            .product
            .ok_or(ShippingProtectionError::InvalidProductId)?;
        info!(product_id = %product.id, "Created shipping protection product");

        Ok(product)
    }

    async fn create_default_option(&self, product_id: &str) -> Result<(), ShippingProtectionError> {
        let payload = self
            .shopify
            .create_default_option(
                product_id,
                &self.defaults.option_name,
                &self.defaults.option_value,
            )
            .await?;
        validate_user_errors(&payload.user_errors, CREATE_OPTION_CONTEXT)
    }

    async fn publish(&self, product_id: &str) -> Result<(), ShippingProtectionError> {
        let publications = self.shopify.get_publications().await?;
        let user_errors = self
            .shopify
            .publish_product(product_id, &publications)
            .await?;
        validate_user_errors(&user_errors, PUBLISH_CONTEXT)
    }
}
