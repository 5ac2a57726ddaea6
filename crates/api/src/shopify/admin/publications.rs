//! Sales channel publication operations for the Admin API.

use shipping_protection_core::PUBLICATION_FETCH_LIMIT;
use tracing::instrument;

use super::{
    AdminClient, AdminShopifyError, missing_payload,
    queries::{GetPublications, PublishablePublish, publishable_publish::PublicationInput},
};
use crate::shopify::types::{Publication, UserError};

impl AdminClient {
    /// List the store's publications (sales channels).
    ///
    /// Returns at most the first 10.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_publications(&self) -> Result<Vec<Publication>, AdminShopifyError> {
        let variables = super::queries::get_publications::Variables {
            first: PUBLICATION_FETCH_LIMIT,
        };

        let response = self.execute::<GetPublications>(variables).await?;

        Ok(response.publications.nodes)
    }

    /// Publish a product to every given publication.
    ///
    /// Returns the mutation's user errors; an empty list means success.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the mutation payload is
    /// missing.
    #[instrument(skip(self, publications), fields(publications = publications.len()))]
    pub async fn publish_product(
        &self,
        product_id: &str,
        publications: &[Publication],
    ) -> Result<Vec<UserError>, AdminShopifyError> {
        let variables = super::queries::publishable_publish::Variables {
            id: product_id.to_string(),
            input: publications
                .iter()
                .map(|p| PublicationInput {
                    publication_id: p.id.clone(),
                })
                .collect(),
        };

        let response = self.execute::<PublishablePublish>(variables).await?;
        let payload = response
            .publishable_publish
            .ok_or_else(|| missing_payload("publishablePublish"))?;

        Ok(payload.user_errors)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use wiremock::MockServer;

    use super::super::test_support::{operation, requests_for, shopify_config};
    use super::*;

    #[tokio::test]
    async fn test_get_publications_requests_first_ten() {
        let server = MockServer::start().await;
        operation(
            "GetPublications",
            json!({
                "publications": {
                    "nodes": [
                        { "id": "gid://shopify/Publication/1", "name": "Online Store" },
                        { "id": "gid://shopify/Publication/2", "name": "Point of Sale" }
                    ]
                }
            }),
        )
        .mount(&server)
        .await;

        let client = AdminClient::new(&shopify_config(&server)).unwrap();
        let publications = client.get_publications().await.unwrap();

        assert_eq!(publications.len(), 2);
        assert_eq!(publications[0].name.as_deref(), Some("Online Store"));

        let sent = requests_for(&server, "GetPublications").await;
        assert_eq!(sent[0]["variables"]["first"], 10);
    }

    #[tokio::test]
    async fn test_publish_product_sends_every_publication() {
        let server = MockServer::start().await;
        operation(
            "PublishablePublish",
            json!({ "publishablePublish": { "userErrors": [] } }),
        )
        .expect(1)
        .mount(&server)
        .await;

        let publications = vec![
            Publication {
                id: "gid://shopify/Publication/1".into(),
                name: None,
            },
            Publication {
                id: "gid://shopify/Publication/2".into(),
                name: None,
            },
        ];

        let client = AdminClient::new(&shopify_config(&server)).unwrap();
        let user_errors = client
            .publish_product("gid://shopify/Product/5", &publications)
            .await
            .unwrap();

        assert!(user_errors.is_empty());
        let sent = requests_for(&server, "PublishablePublish").await;
        assert_eq!(
            sent[0]["variables"],
            json!({
                "id": "gid://shopify/Product/5",
                "input": [
                    { "publicationId": "gid://shopify/Publication/1" },
                    { "publicationId": "gid://shopify/Publication/2" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_publish_product_returns_user_errors() {
        let server = MockServer::start().await;
        operation(
            "PublishablePublish",
            json!({
                "publishablePublish": {
                    "userErrors": [{ "field": ["input", "0", "publicationId"], "message": "Publication does not exist" }]
                }
            }),
        )
        .mount(&server)
        .await;

        let client = AdminClient::new(&shopify_config(&server)).unwrap();
        let user_errors = client
            .publish_product("gid://shopify/Product/5", &[])
            .await
            .unwrap();

        assert_eq!(user_errors.len(), 1);
        assert_eq!(user_errors[0].field_path().as_deref(), Some("input.0.publicationId"));
    }
}
