//! Shipping protection route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::{
    ProductLookup, ProductLookupParams, ShippingProtectionService, VariantLookup,
    VariantLookupParams,
};
use crate::shopify::{ProductVariantsBulkInput, ShippingProtectionProduct, ShippingProtectionVariant};
use crate::state::AppState;

/// Build the shipping protection router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_variant))
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/variants", get(find_variant))
        .route("/variants/{id}", get(get_variant))
}

/// Query parameters for creating variants.
#[derive(Debug, Default, Deserialize)]
pub struct CreateVariantQuery {
    /// Bucket tag; the configured default is used when absent.
    pub tag: Option<String>,
}

/// Create shipping protection variants.
///
/// The body is the array of variants to create. Responds with the first
/// created variant, or `null`.
async fn create_variant(
    State(state): State<AppState>,
    Query(query): Query<CreateVariantQuery>,
    body: Result<Json<Vec<ProductVariantsBulkInput>>, JsonRejection>,
) -> Result<Json<Option<ShippingProtectionVariant>>, AppError> {
    let Json(variants) = body?;

    let variant = ShippingProtectionService::new(state.shopify(), state.defaults())
        .create_variant(query.tag.as_deref(), variants)
        .await?;

    Ok(Json(variant))
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductLookupParams>,
) -> Result<Json<Vec<ShippingProtectionProduct>>, AppError> {
    find_products(&state, params).await
}

async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ProductLookupParams>,
) -> Result<Json<Vec<ShippingProtectionProduct>>, AppError> {
    find_products(
        &state,
        ProductLookupParams {
            id: Some(id),
            ..params
        },
    )
    .await
}

async fn find_products(
    state: &AppState,
    params: ProductLookupParams,
) -> Result<Json<Vec<ShippingProtectionProduct>>, AppError> {
    let lookup = ProductLookup::try_from(params)?;

    let products = ShippingProtectionService::new(state.shopify(), state.defaults())
        .find_products(lookup)
        .await?;

    Ok(Json(products))
}

async fn find_variant(
    State(state): State<AppState>,
    Query(params): Query<VariantLookupParams>,
) -> Result<Json<Option<ShippingProtectionVariant>>, AppError> {
    lookup_variant(&state, params).await
}

async fn get_variant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<VariantLookupParams>,
) -> Result<Json<Option<ShippingProtectionVariant>>, AppError> {
    lookup_variant(
        &state,
        VariantLookupParams {
            id: Some(id),
            ..params
        },
    )
    .await
}

async fn lookup_variant(
    state: &AppState,
    params: VariantLookupParams,
) -> Result<Json<Option<ShippingProtectionVariant>>, AppError> {
    let lookup = VariantLookup::try_from(params)?;

    let variant = ShippingProtectionService::new(state.shopify(), state.defaults())
        .find_variant(lookup)
        .await?;

    Ok(Json(variant))
}
