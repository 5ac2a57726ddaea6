//! Shopify global IDs.
//!
//! The Admin API addresses every resource with a global ID of the form
//! `gid://shopify/<Type>/<id>`. HTTP callers may pass either the bare numeric
//! ID or the full global ID; [`ShopifyGid::parse`] normalizes both.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Prefix shared by every Shopify global ID.
pub const GID_PREFIX: &str = "gid://shopify/";

/// Resource types addressed by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GidType {
    /// A product (bucket).
    Product,
    /// A product variant.
    ProductVariant,
}

impl GidType {
    /// Type tag as it appears inside a global ID.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "Product",
            Self::ProductVariant => "ProductVariant",
        }
    }
}

impl fmt::Display for GidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when parsing a [`ShopifyGid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GidError {
    /// The input string is empty.
    #[error("{expected} ID cannot be empty")]
    Empty {
        /// Resource type the caller asked for.
        expected: GidType,
    },
    /// The global ID names a different resource type.
    #[error("expected a {expected} ID, got a {found} ID")]
    WrongType {
        /// Resource type the caller asked for.
        expected: GidType,
        /// Type tag found in the global ID.
        found: String,
    },
    /// The input is neither a numeric ID nor a well-formed global ID.
    #[error("invalid {expected} ID: {value}")]
    Malformed {
        /// Resource type the caller asked for.
        expected: GidType,
        /// The rejected input.
        value: String,
    },
}

/// A canonical Shopify global ID for a known resource type.
///
/// ## Examples
///
/// ```
/// use shipping_protection_core::{GidType, ShopifyGid};
///
/// let gid = ShopifyGid::parse("123", GidType::Product).unwrap();
/// assert_eq!(gid.as_str(), "gid://shopify/Product/123");
///
/// let same = ShopifyGid::parse("gid://shopify/Product/123", GidType::Product).unwrap();
/// assert_eq!(gid, same);
///
/// assert!(ShopifyGid::parse("gid://shopify/ProductVariant/9", GidType::Product).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShopifyGid {
    kind: GidType,
    value: String,
}

impl ShopifyGid {
    /// Parse a bare numeric ID or a full global ID of the given type.
    ///
    /// Surrounding whitespace is ignored. Query strings Shopify sometimes
    /// appends to global IDs (`?...`) are kept as part of the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is a global ID for another resource type
    /// - Is a bare ID that is not all ASCII digits
    /// - Is a global ID with an empty or non-numeric tail
    pub fn parse(raw: &str, kind: GidType) -> Result<Self, GidError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(GidError::Empty { expected: kind });
        }

        let Some(rest) = raw.strip_prefix(GID_PREFIX) else {
            if !is_numeric(raw) {
                return Err(GidError::Malformed {
                    expected: kind,
                    value: raw.to_owned(),
                });
            }
            return Ok(Self {
                kind,
                value: format!("{GID_PREFIX}{}/{raw}", kind.as_str()),
            });
        };

        let (type_tag, id) = rest.split_once('/').ok_or_else(|| GidError::Malformed {
            expected: kind,
            value: raw.to_owned(),
        })?;

        if type_tag != kind.as_str() {
            return Err(GidError::WrongType {
                expected: kind,
                found: type_tag.to_owned(),
            });
        }

        let numeric = id.split_once('?').map_or(id, |(head, _)| head);
        if !is_numeric(numeric) {
            return Err(GidError::Malformed {
                expected: kind,
                value: raw.to_owned(),
            });
        }

        Ok(Self {
            kind,
            value: raw.to_owned(),
        })
    }

    /// Resource type of this ID.
    #[must_use]
    pub const fn kind(&self) -> GidType {
        self.kind
    }

    /// Returns the global ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes the `ShopifyGid` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.value
    }

    /// The numeric tail of the global ID (`123` for `gid://shopify/Product/123`).
    #[must_use]
    pub fn numeric_id(&self) -> &str {
        let tail = self.value.rsplit('/').next().unwrap_or_default();
        tail.split_once('?').map_or(tail, |(head, _)| head)
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for ShopifyGid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for ShopifyGid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl AsRef<str> for ShopifyGid {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<ShopifyGid> for String {
    fn from(gid: ShopifyGid) -> Self {
        gid.value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_numeric_id() {
        let gid = ShopifyGid::parse("8123456789", GidType::Product).unwrap();
        assert_eq!(gid.as_str(), "gid://shopify/Product/8123456789");
        assert_eq!(gid.kind(), GidType::Product);
        assert_eq!(gid.numeric_id(), "8123456789");
    }

    #[test]
    fn test_parse_full_gid_passes_through() {
        let gid = ShopifyGid::parse("gid://shopify/ProductVariant/42", GidType::ProductVariant)
            .unwrap();
        assert_eq!(gid.as_str(), "gid://shopify/ProductVariant/42");
        assert_eq!(gid.numeric_id(), "42");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let gid = ShopifyGid::parse("  7 ", GidType::ProductVariant).unwrap();
        assert_eq!(gid.as_str(), "gid://shopify/ProductVariant/7");
    }

    #[test]
    fn test_parse_keeps_query_suffix() {
        let gid =
            ShopifyGid::parse("gid://shopify/Product/5?variant=1", GidType::Product).unwrap();
        assert_eq!(gid.as_str(), "gid://shopify/Product/5?variant=1");
        assert_eq!(gid.numeric_id(), "5");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            ShopifyGid::parse("", GidType::Product),
            Err(GidError::Empty {
                expected: GidType::Product
            })
        );
        assert!(matches!(
            ShopifyGid::parse("   ", GidType::Product),
            Err(GidError::Empty { .. })
        ));
    }

    #[test]
    fn test_parse_wrong_type() {
        let err = ShopifyGid::parse("gid://shopify/Product/1", GidType::ProductVariant)
            .unwrap_err();
        assert_eq!(
            err,
            GidError::WrongType {
                expected: GidType::ProductVariant,
                found: "Product".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "expected a ProductVariant ID, got a Product ID"
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            ShopifyGid::parse("abc", GidType::Product),
            Err(GidError::Malformed { .. })
        ));
        assert!(matches!(
            ShopifyGid::parse("gid://shopify/Product", GidType::Product),
            Err(GidError::Malformed { .. })
        ));
        assert!(matches!(
            ShopifyGid::parse("gid://shopify/Product/", GidType::Product),
            Err(GidError::Malformed { .. })
        ));
        assert!(matches!(
            ShopifyGid::parse("gid://shopify/Product/x1", GidType::Product),
            Err(GidError::Malformed { .. })
        ));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let gid = ShopifyGid::parse("3", GidType::Product).unwrap();
        assert_eq!(
            serde_json::to_string(&gid).unwrap(),
            "\"gid://shopify/Product/3\""
        );
    }
}
