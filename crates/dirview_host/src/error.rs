//! Typed errors for listing resolution and client configuration.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while resolving a navigation key into a page.
pub enum QueryError {
    /// The request path could not be percent-decoded.
    #[error("invalid request path `{raw}`: {reason}")]
    InvalidPath {
        /// Path as received from the location bar.
        raw: String,
        /// Decoder failure.
        reason: String,
    },
    /// The request did not complete or its body could not be read.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend answered with a classified error body.
    #[error("backend error {code}: {message}")]
    Backend {
        /// HTTP status code reported by the backend.
        code: u16,
        /// Backend message.
        message: String,
    },
    /// The query executed but reported GraphQL errors.
    #[error("query errors: {}", .0.join("; "))]
    Graphql(Vec<String>),
    /// The body was not the expected JSON document.
    #[error("undecodable response: {0}")]
    Decode(String),
    /// The document decoded but violates the item model.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// No query transport is available in this build.
    #[error("listing query unavailable: {0}")]
    Unavailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Invalid client configuration value.
pub enum ConfigError {
    /// The GraphQL endpoint is empty.
    #[error("api endpoint must not be empty")]
    EmptyEndpoint,
    /// The mount prefix would shadow every page route.
    #[error("mount prefix `{0}` must name a path below `/`")]
    RootMountPrefix(String),
}
