//! Browser listing query service backed by the fetch bridge.

use dirview_host::{
    decode_listing_response, ClientConfig, DecodedListing, GraphqlRequest, ListingQueryFuture,
    ListingQueryService, NavigationKey, QueryError,
};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Listing query service that POSTs the GraphQL document to the configured endpoint.
pub struct WebListingQueryService {
    endpoint: String,
}

impl WebListingQueryService {
    /// Creates a service targeting `config.api_endpoint`.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            endpoint: config.api_endpoint.clone(),
        }
    }

    /// Returns the endpoint this service posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ListingQueryService for WebListingQueryService {
    fn query_listing<'a>(
        &'a self,
        key: &'a NavigationKey,
    ) -> ListingQueryFuture<'a, Result<DecodedListing, QueryError>> {
        Box::pin(async move {
            let body = GraphqlRequest::listing(key.variables()).to_json()?;
            let response = bridge::graphql_post(&self.endpoint, &body)
                .await
                .map_err(QueryError::Transport)?;
            decode_listing_response(response.status, &response.body)
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use dirview_host::SortDirective;
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_surface_transport_failure() {
        let service = WebListingQueryService::new(&ClientConfig::default());
        assert_eq!(service.endpoint(), "/_goserve/api/graphql");

        let key = NavigationKey::new("/movies/", SortDirective::default());
        let err = block_on(service.query_listing(&key)).expect_err("no fetch natively");
        assert!(matches!(err, QueryError::Transport(ref message) if message.contains("wasm32")));
    }
}
