//! Variant operations for the Admin API.

use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError, missing_payload,
    queries::{GetProductVariant, GetProductVariants, ProductVariantsBulkCreate},
};
use crate::shopify::types::{
    ProductVariantsBulkInput, ShippingProtectionVariant, VariantsCreatePayload,
};

impl AdminClient {
    /// Create variants on a product.
    ///
    /// Every input is sent with inventory policy `CONTINUE` so protection
    /// never goes out of stock. Only the first created variant is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the mutation payload is
    /// missing.
    #[instrument(skip(self, variants), fields(variants = variants.len()))]
    pub async fn create_variants(
        &self,
        product_id: &str,
        variants: Vec<ProductVariantsBulkInput>,
    ) -> Result<VariantsCreatePayload, AdminShopifyError> {
        let variables = super::queries::product_variants_bulk_create::Variables {
            product_id: product_id.to_string(),
            variants: variants
                .into_iter()
                .map(ProductVariantsBulkInput::continue_selling)
                .collect(),
        };

        let response = self.execute::<ProductVariantsBulkCreate>(variables).await?;
        let payload = response
            .product_variants_bulk_create
            .ok_or_else(|| missing_payload("productVariantsBulkCreate"))?;

        Ok(VariantsCreatePayload {
            variant: payload
                .product_variants
                .and_then(|variants| variants.into_iter().next()),
            user_errors: payload.user_errors,
        })
    }

    /// Get a variant by ID.
    ///
    /// # Arguments
    ///
    /// * `id` - Shopify variant ID (e.g., `gid://shopify/ProductVariant/123`)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(variant_id = %id))]
    pub async fn get_variant(
        &self,
        id: &str,
    ) -> Result<Option<ShippingProtectionVariant>, AdminShopifyError> {
        let variables = super::queries::get_product_variant::Variables { id: id.to_string() };

        let response = self.execute::<GetProductVariant>(variables).await?;

        Ok(response.product_variant)
    }

    /// Get the first variant whose `field` matches `value` (e.g., `sku:SP-250`).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_first_variant_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> Result<Option<ShippingProtectionVariant>, AdminShopifyError> {
        let variables = super::queries::get_product_variants::Variables {
            first: 1,
            query: format!("{field}:{value}"),
        };

        let response = self.execute::<GetProductVariants>(variables).await?;

        Ok(response.product_variants.nodes.into_iter().next())
    }
}
