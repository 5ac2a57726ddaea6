//! Conversions from raw Admin API response shapes to domain types.

use super::queries::BucketProductNode;
use crate::shopify::types::{
    SelectedOption, ShippingProtectionProduct, VariantNodes, VariantOptions, VariantsCount,
};

/// Convert a `BucketProduct` fragment into a domain product.
///
/// A missing `variantsCount` is treated as zero variants.
pub fn convert_product(node: BucketProductNode) -> ShippingProtectionProduct {
    let nodes = node
        .variants
        .nodes
        .into_iter()
        .map(|variant| VariantOptions {
            selected_options: variant
                .selected_options
                .into_iter()
                .map(|o| SelectedOption {
                    name: o.name,
                    value: o.value,
                })
                .collect(),
        })
        .collect();

    ShippingProtectionProduct {
        id: node.id,
        title: node.title,
        has_only_default_variant: node.has_only_default_variant,
        variants: VariantNodes { nodes },
        variants_count: VariantsCount {
            count: node.variants_count.map_or(0, |c| c.count),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_convert_product_takes_first_variant_options() {
        let node: BucketProductNode = serde_json::from_value(json!({
            "id": "gid://shopify/Product/10",
            "title": "Shipping Protection",
            "hasOnlyDefaultVariant": false,
            "variants": {
                "nodes": [
                    { "selectedOptions": [{ "name": "Coverage", "value": "Standard" }] }
                ]
            },
            "variantsCount": { "count": 12 }
        }))
        .unwrap();

        let product = convert_product(node);
        assert_eq!(product.id, "gid://shopify/Product/10");
        assert_eq!(product.variants_count.count, 12);
        assert_eq!(
            product.variants.nodes[0].selected_options,
            vec![SelectedOption {
                name: "Coverage".into(),
                value: "Standard".into(),
            }]
        );
    }

    #[test]
    fn test_convert_product_without_variants_count() {
        let node: BucketProductNode = serde_json::from_value(json!({
            "id": "gid://shopify/Product/11",
            "title": "Shipping Protection",
            "hasOnlyDefaultVariant": true,
            "variants": { "nodes": [] },
            "variantsCount": null
        }))
        .unwrap();

        let product = convert_product(node);
        assert_eq!(product.variants_count.count, 0);
        assert!(product.variants.nodes.is_empty());
        assert!(product.has_only_default_variant);
    }
}
