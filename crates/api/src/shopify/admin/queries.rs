//! GraphQL operations for the Shopify Admin API.
//!
//! Each operation implements `graphql_client::GraphQLQuery`, pairing its
//! document with the variables it sends and the data it expects back. The
//! per-operation modules mirror the layout `graphql_client` generates
//! (`get_product::Variables`, `get_product::ResponseData`).

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::shopify::types::{
    CreateProductInput, OptionCreateInput, ProductVariantsBulkInput, Publication,
    ShippingProtectionVariant, UserError,
};

/// Declare a unit struct implementing `GraphQLQuery` for one document.
///
/// The struct name doubles as the GraphQL operation name, so it must match
/// the name used in the document.
macro_rules! admin_operation {
    ($(#[$meta:meta])* $name:ident, $module:ident, $document:expr) => {
        $(#[$meta])*
        pub struct $name;

        impl GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $document,
                    operation_name: stringify!($name),
                }
            }
        }
    };
}

/// Selection shared by every query returning a bucket product.
macro_rules! bucket_product_fragment {
    () => {
        "
fragment BucketProduct on Product {
  id
  title
  hasOnlyDefaultVariant
  variants(first: 1) {
    nodes {
      selectedOptions {
        name
        value
      }
    }
  }
  variantsCount {
    count
  }
}
"
    };
}

// =============================================================================
// Shared response shapes
// =============================================================================

/// A `{ nodes: [...] }` connection.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

/// A `{ count }` object (e.g., `variantsCount`).
#[derive(Debug, Clone, Deserialize)]
pub struct Count {
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOptionsNode {
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionNode>,
}

/// `BucketProduct` fragment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketProductNode {
    pub id: String,
    pub title: String,
    pub has_only_default_variant: bool,
    pub variants: Connection<VariantOptionsNode>,
    pub variants_count: Option<Count>,
}

// =============================================================================
// Product queries
// =============================================================================

admin_operation!(
    /// Fetch one bucket product by global ID.
    GetProduct,
    get_product,
    concat!(
        "query GetProduct($id: ID!) {
  product(id: $id) {
    ...BucketProduct
  }
}
",
        bucket_product_fragment!()
    )
);

pub mod get_product {
    use super::{BucketProductNode, Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<BucketProductNode>,
    }
}

admin_operation!(
    /// Search bucket products (e.g., `tag:shipping-protection`).
    GetProducts,
    get_products,
    concat!(
        "query GetProducts($first: Int!, $query: String!) {
  products(first: $first, query: $query) {
    nodes {
      ...BucketProduct
    }
  }
}
",
        bucket_product_fragment!()
    )
);

pub mod get_products {
    use super::{BucketProductNode, Connection, Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub query: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Connection<BucketProductNode>,
    }
}

// =============================================================================
// Product mutations
// =============================================================================

admin_operation!(
    /// Create a bucket product with its option and metafields.
    ProductCreate,
    product_create,
    concat!(
        "mutation ProductCreate($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      ...BucketProduct
    }
    userErrors {
      field
      message
    }
  }
}
",
        bucket_product_fragment!()
    )
);

pub mod product_create {
    use super::{BucketProductNode, CreateProductInput, Deserialize, Serialize, UserError};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CreateProductInput,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_create: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        pub product: Option<BucketProductNode>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

admin_operation!(
    /// Add options to a product that only has its default variant.
    ProductOptionsCreate,
    product_options_create,
    "mutation ProductOptionsCreate($productId: ID!, $options: [OptionCreateInput!]!) {
  productOptionsCreate(productId: $productId, options: $options) {
    userErrors {
      field
      message
    }
  }
}
"
);

pub mod product_options_create {
    use super::{Deserialize, OptionCreateInput, Serialize, UserError};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub product_id: String,
        pub options: Vec<OptionCreateInput>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_options_create: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

// =============================================================================
// Publications
// =============================================================================

admin_operation!(
    /// List sales channels.
    GetPublications,
    get_publications,
    "query GetPublications($first: Int!) {
  publications(first: $first) {
    nodes {
      id
      name
    }
  }
}
"
);

pub mod get_publications {
    use super::{Connection, Deserialize, Publication, Serialize};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub publications: Connection<Publication>,
    }
}

admin_operation!(
    /// Publish a resource to the given sales channels.
    PublishablePublish,
    publishable_publish,
    "mutation PublishablePublish($id: ID!, $input: [PublicationInput!]!) {
  publishablePublish(id: $id, input: $input) {
    userErrors {
      field
      message
    }
  }
}
"
);

pub mod publishable_publish {
    use super::{Deserialize, Serialize, UserError};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
        pub input: Vec<PublicationInput>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PublicationInput {
        pub publication_id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub publishable_publish: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

// =============================================================================
// Variants
// =============================================================================

admin_operation!(
    /// Create variants on a bucket product.
    ProductVariantsBulkCreate,
    product_variants_bulk_create,
    "mutation ProductVariantsBulkCreate($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
  productVariantsBulkCreate(productId: $productId, variants: $variants) {
    productVariants {
      id
      title
      price
    }
    userErrors {
      field
      message
    }
  }
}
"
);

pub mod product_variants_bulk_create {
    use super::{
        Deserialize, ProductVariantsBulkInput, Serialize, ShippingProtectionVariant, UserError,
    };

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub product_id: String,
        pub variants: Vec<ProductVariantsBulkInput>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_variants_bulk_create: Option<Payload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Payload {
        #[serde(default)]
        pub product_variants: Option<Vec<ShippingProtectionVariant>>,
        #[serde(default)]
        pub user_errors: Vec<UserError>,
    }
}

admin_operation!(
    /// Fetch one variant by global ID.
    GetProductVariant,
    get_product_variant,
    "query GetProductVariant($id: ID!) {
  productVariant(id: $id) {
    id
    title
    price
  }
}
"
);

pub mod get_product_variant {
    use super::{Deserialize, Serialize, ShippingProtectionVariant};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_variant: Option<ShippingProtectionVariant>,
    }
}

admin_operation!(
    /// Search variants (e.g., `sku:SP-250`).
    GetProductVariants,
    get_product_variants,
    "query GetProductVariants($first: Int!, $query: String!) {
  productVariants(first: $first, query: $query) {
    nodes {
      id
      title
      price
    }
  }
}
"
);

pub mod get_product_variants {
    use super::{Connection, Deserialize, Serialize, ShippingProtectionVariant};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub query: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_variants: Connection<ShippingProtectionVariant>,
    }
}
