//! Shared transport interop for the bridge.
//!
//! Routes calls to the target-specific implementation behind a uniform API.

use super::HttpResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn graphql_post(endpoint: &str, body: &str) -> Result<HttpResponse, String> {
    imp::graphql_post(endpoint, body).await
}
