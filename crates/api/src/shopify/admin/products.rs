//! Bucket product operations for the Admin API.

use shipping_protection_core::PRODUCT_SEARCH_LIMIT;
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError,
    conversions::convert_product,
    missing_payload,
    queries::{GetProduct, GetProducts, ProductCreate, ProductOptionsCreate},
};
use crate::shopify::types::{
    CreateProductInput, OptionCreateInput, ProductCreatePayload, ProductOptionsCreatePayload,
    ShippingProtectionProduct,
};

impl AdminClient {
    /// Get a product by ID.
    ///
    /// # Arguments
    ///
    /// * `id` - Shopify product ID (e.g., `gid://shopify/Product/123`)
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(
        &self,
        id: &str,
    ) -> Result<Option<ShippingProtectionProduct>, AdminShopifyError> {
        let variables = super::queries::get_product::Variables { id: id.to_string() };

        let response = self.execute::<GetProduct>(variables).await?;

        Ok(response.product.map(convert_product))
    }

    /// Get the bucket products carrying a tag.
    ///
    /// Returns at most the first 100 matches, in the order Shopify lists them.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_products_by_tag(
        &self,
        tag: &str,
    ) -> Result<Vec<ShippingProtectionProduct>, AdminShopifyError> {
        let variables = super::queries::get_products::Variables {
            first: PRODUCT_SEARCH_LIMIT,
            query: format!("tag:{tag}"),
        };

        let response = self.execute::<GetProducts>(variables).await?;

        Ok(response
            .products
            .nodes
            .into_iter()
            .map(convert_product)
            .collect())
    }

    /// Create a new bucket product.
    ///
    /// User errors are returned in the payload, not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the mutation payload is
    /// missing.
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_product(
        &self,
        input: CreateProductInput,
    ) -> Result<ProductCreatePayload, AdminShopifyError> {
        let variables = super::queries::product_create::Variables { input };

        let response = self.execute::<ProductCreate>(variables).await?;
        let payload = response
            .product_create
            .ok_or_else(|| missing_payload("productCreate"))?;

        Ok(ProductCreatePayload {
            product: payload.product.map(convert_product),
            user_errors: payload.user_errors,
        })
    }

    /// Add a single-valued option to a product.
    ///
    /// Used on products that still only carry Shopify's default variant, so
    /// the variants created afterwards have an option to hang their values on.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the mutation payload is
    /// missing.
    #[instrument(skip(self))]
    pub async fn create_default_option(
        &self,
        product_id: &str,
        option_name: &str,
        option_value: &str,
    ) -> Result<ProductOptionsCreatePayload, AdminShopifyError> {
        let variables = super::queries::product_options_create::Variables {
            product_id: product_id.to_string(),
            options: vec![OptionCreateInput::single(option_name, option_value)],
        };

        let response = self.execute::<ProductOptionsCreate>(variables).await?;
        let payload = response
            .product_options_create
            .ok_or_else(|| missing_payload("productOptionsCreate"))?;

        Ok(ProductOptionsCreatePayload {
            user_errors: payload.user_errors,
        })
    }
}
