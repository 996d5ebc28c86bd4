//! Browser capability bridge for the listing query transport.
//!
//! Target-specific glue lives under `interop`; this module exposes the stable crate-internal API
//! used by [`crate::query`].

mod interop;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Status and body text of a completed HTTP exchange.
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) async fn graphql_post(endpoint: &str, body: &str) -> Result<HttpResponse, String> {
    interop::graphql_post(endpoint, body).await
}
