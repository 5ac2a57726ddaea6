//! Mutation result validation.

use super::ShippingProtectionError;
use crate::shopify::UserError;

/// Fail if a mutation reported user errors.
///
/// Only the first error is surfaced, prefixed with `context`.
///
/// # Errors
///
/// Returns `ShippingProtectionError::UserErrors` when `user_errors` is not
/// empty.
pub fn validate_user_errors(
    user_errors: &[UserError],
    context: &'static str,
) -> Result<(), ShippingProtectionError> {
    let Some(first) = user_errors.first() else {
        return Ok(());
    };

    let field = first.field_path();
    tracing::warn!(
        context,
        field = field.as_deref(),
        message = %first.message,
        total = user_errors.len(),
        "Shopify rejected mutation"
    );

    Err(ShippingProtectionError::UserErrors {
        context,
        field,
        message: first.message.clone(),
    })
}
