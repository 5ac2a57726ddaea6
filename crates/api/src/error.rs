//! Unified error handling for the shipping protection API.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::ShippingProtectionError;

/// Application-level error type for the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shipping protection operation failed.
    #[error(transparent)]
    ShippingProtection(#[from] ShippingProtectionError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::ShippingProtection(err) => match err {
                ShippingProtectionError::Shopify(_) => StatusCode::BAD_GATEWAY,
                ShippingProtectionError::ProductNotFound
                | ShippingProtectionError::VariantNotFound => StatusCode::NOT_FOUND,
                ShippingProtectionError::UserErrors { .. }
                | ShippingProtectionError::MissingLookup(_)
                | ShippingProtectionError::InvalidId(_)
                | ShippingProtectionError::EmptyVariantInput
                | ShippingProtectionError::InvalidProductId => StatusCode::BAD_REQUEST,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::ShippingProtection(ShippingProtectionError::Shopify(_))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors with Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Shipping protection request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let message = match &self {
            Self::ShippingProtection(ShippingProtectionError::Shopify(_)) => {
                "External service error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use shipping_protection_core::{GidType, ShopifyGid};

    use super::*;
    use crate::shopify::AdminShopifyError;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        let err = AppError::from(ShippingProtectionError::MissingLookup(
            "You did not provide an id or tag",
        ));
        assert_eq!(err.to_string(), "You did not provide an id or tag");
    }

    #[test]
    fn test_app_error_status_codes() {
        let invalid_id = ShopifyGid::parse("abc", GidType::Product).unwrap_err();

        assert_eq!(
            AppError::from(ShippingProtectionError::ProductNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ShippingProtectionError::VariantNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(ShippingProtectionError::InvalidId(invalid_id)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ShippingProtectionError::InvalidProductId).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(ShippingProtectionError::Shopify(
                AdminShopifyError::RateLimited(2)
            ))
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[tokio::test]
    async fn test_user_errors_body_carries_context() {
        let err = AppError::from(ShippingProtectionError::UserErrors {
            context: "Error occurred publishing product",
            field: Some("input.0.publicationId".to_string()),
            message: "Publication does not exist".to_string(),
        });

        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Error occurred publishing product: Publication does not exist (field: input.0.publicationId)"
        );
    }

    #[tokio::test]
    async fn test_shopify_errors_are_not_exposed() {
        let err = AppError::from(ShippingProtectionError::Shopify(
            AdminShopifyError::Unauthorized("Invalid or expired access token".to_string()),
        ));

        let (status, body) = body_json(err).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "External service error" }));
    }
}
