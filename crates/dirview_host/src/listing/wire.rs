//! GraphQL request document and response decoding for the listing query.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::navigation::QueryVariables;
use super::types::{ItemDescriptor, ItemKind, ParentDescriptor, ResolvedPage, SubtitleDescriptor};
use crate::error::QueryError;

/// Operation name of [`LISTING_QUERY`].
pub const LISTING_OPERATION: &str = "FileListQuery";

/// Listing query: stats the request path with its parent and subtitle siblings, and lists it.
pub const LISTING_QUERY: &str = r#"query FileListQuery($path: String = "/", $sort: String = "-mtime") {
  self: stat(path: $path) {
    name
    path
    type
    mime
    parent {
      name
      path
      hasIndex
    }
    subtitles: siblings(nameLikeMe: true, nameLike: "*.srt") {
      path
    }
  }
  containing: list(path: $path, sort: $sort) {
    name
    path
    type
    mime
    hasIndex
  }
}"#;

const NOT_FOUND_CODE: u16 = 404;
const NOT_FOUND_MESSAGE_PREFIX: &str = "error 404";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// JSON body POSTed to the GraphQL endpoint.
pub struct GraphqlRequest {
    /// Query document.
    pub query: &'static str,
    /// Operation to execute.
    pub operation_name: &'static str,
    /// Bound variables.
    pub variables: QueryVariables,
}

impl GraphqlRequest {
    /// Builds the listing request for `variables`.
    pub fn listing(variables: QueryVariables) -> Self {
        Self {
            query: LISTING_QUERY,
            operation_name: LISTING_OPERATION,
            variables,
        }
    }

    /// Serializes the request body.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Decode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, QueryError> {
        serde_json::to_string(self).map_err(|err| QueryError::Decode(err.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct GraphqlEnvelope {
    data: Option<WireListing>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct WireListing {
    #[serde(rename = "self")]
    self_item: Option<WireItem>,
    #[serde(default)]
    containing: Option<Vec<WireItem>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    name: Option<String>,
    path: Option<String>,
    #[serde(rename = "type")]
    kind: Option<ItemKind>,
    mime: Option<String>,
    has_index: Option<bool>,
    parent: Option<WireParent>,
    subtitles: Option<Vec<WireSubtitle>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireParent {
    name: Option<String>,
    path: Option<String>,
    has_index: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct WireSubtitle {
    path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated listing response.
pub struct DecodedListing {
    /// Page ready for the view layer.
    pub page: ResolvedPage,
    /// Paths dropped from `containing` because an earlier entry already used them.
    pub duplicate_paths: Vec<String>,
}

/// Decodes a raw HTTP response from the GraphQL endpoint into a validated listing.
///
/// Not-found outcomes (a `404`-classified error, or a `null` self item) resolve to
/// [`ResolvedPage::not_found`] rather than an error.
///
/// # Errors
///
/// Returns [`QueryError::Backend`] or [`QueryError::Graphql`] for reported failures,
/// [`QueryError::Decode`] for bodies that are not JSON of the expected shape, and
/// [`QueryError::Malformed`] when items violate the descriptor model.
pub fn decode_listing_response(status: u16, body: &str) -> Result<DecodedListing, QueryError> {
    if !(200..300).contains(&status) {
        return decode_error_body(status, body);
    }

    let envelope: GraphqlEnvelope =
        serde_json::from_str(body).map_err(|err| QueryError::Decode(err.to_string()))?;

    if !envelope.errors.is_empty() {
        if envelope.errors.iter().any(|err| is_not_found(&err.message)) {
            return Ok(not_found());
        }
        return Err(QueryError::Graphql(
            envelope.errors.into_iter().map(|err| err.message).collect(),
        ));
    }

    let listing = envelope
        .data
        .ok_or_else(|| QueryError::Malformed("response carries neither data nor errors".into()))?;
    listing.validate()
}

fn decode_error_body(status: u16, body: &str) -> Result<DecodedListing, QueryError> {
    let parsed = serde_json::from_str::<BackendErrorBody>(body).ok();
    let (code, message) = match parsed {
        Some(err) if err.code != 0 => (err.code, err.message),
        Some(err) => (status, err.message),
        None => (status, body.trim().to_string()),
    };

    if code == NOT_FOUND_CODE || is_not_found(&message) {
        return Ok(not_found());
    }
    Err(QueryError::Backend { code, message })
}

fn is_not_found(message: &str) -> bool {
    message.starts_with(NOT_FOUND_MESSAGE_PREFIX)
}

fn not_found() -> DecodedListing {
    DecodedListing {
        page: ResolvedPage::not_found(),
        duplicate_paths: Vec::new(),
    }
}

impl WireListing {
    fn validate(self) -> Result<DecodedListing, QueryError> {
        let Some(self_item) = self.self_item else {
            return Ok(not_found());
        };
        let self_item = self_item.into_descriptor("self")?;

        let mut seen = HashSet::new();
        let mut containing = Vec::new();
        let mut duplicate_paths = Vec::new();
        for (idx, item) in self.containing.unwrap_or_default().into_iter().enumerate() {
            let item = item.into_descriptor(&format!("containing[{idx}]"))?;
            if seen.insert(item.path.clone()) {
                containing.push(item);
            } else {
                duplicate_paths.push(item.path);
            }
        }

        Ok(DecodedListing {
            page: ResolvedPage {
                self_item: Some(self_item),
                containing,
            },
            duplicate_paths,
        })
    }
}

impl WireItem {
    fn into_descriptor(self, field: &str) -> Result<ItemDescriptor, QueryError> {
        let path = required(self.path, field, "path")?;
        let name = required(self.name, field, "name")?;
        let parent = self
            .parent
            .map(|parent| parent.into_descriptor(&format!("{field}.parent")))
            .transpose()?;
        let subtitles = self
            .subtitles
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(idx, subtitle)| {
                required(subtitle.path, &format!("{field}.subtitles[{idx}]"), "path")
                    .map(|path| SubtitleDescriptor { path })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ItemDescriptor {
            name,
            path,
            kind: self.kind.unwrap_or(ItemKind::Other),
            mime: self.mime.filter(|mime| !mime.is_empty()),
            has_index: self.has_index.unwrap_or(false),
            parent,
            subtitles,
        })
    }
}

impl WireParent {
    fn into_descriptor(self, field: &str) -> Result<ParentDescriptor, QueryError> {
        Ok(ParentDescriptor {
            name: self.name.unwrap_or_default(),
            path: required(self.path, field, "path")?,
            has_index: self.has_index.unwrap_or(false),
        })
    }
}

fn required(value: Option<String>, field: &str, attr: &str) -> Result<String, QueryError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(QueryError::Malformed(format!("{field} is missing `{attr}`"))),
    }
}
