//! Request normalization: turns raw location state into a resolver lookup key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::QueryError;

/// Path resolved when the location carries none.
pub const DEFAULT_PATH: &str = "/";
/// Sort applied when the request carries none: most recently modified first.
pub const DEFAULT_SORT: &str = "-mtime";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Listing attribute a sort key orders by.
pub enum SortField {
    /// Case-insensitive file name.
    Name,
    /// Modification time.
    Mtime,
    /// Entry kind.
    Type,
}

impl SortField {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "name" => Some(Self::Name),
            "mtime" => Some(Self::Mtime),
            "type" => Some(Self::Type),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One comma-separated component of a sort directive.
pub struct SortKey {
    /// Attribute to order by.
    pub field: SortField,
    /// `true` when the key carried a `-` prefix.
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported sort key `{key}` in `{directive}`")]
/// Sort directive the backend would refuse.
pub struct UnsupportedSortKey {
    /// Full directive as requested.
    pub directive: String,
    /// First offending key.
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Backend-interpreted ordering for a directory listing.
pub struct SortDirective(String);

impl Default for SortDirective {
    fn default() -> Self {
        Self(DEFAULT_SORT.to_string())
    }
}

impl SortDirective {
    /// Builds a directive from a query parameter; absent or blank selects [`DEFAULT_SORT`].
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSortKey`] when any key is outside the `name`/`mtime`/`type` grammar.
    pub fn from_param(raw: Option<&str>) -> Result<Self, UnsupportedSortKey> {
        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(Self::default()),
        };
        let directive = Self(raw.to_string());
        directive.keys()?;
        Ok(directive)
    }

    /// Returns the directive as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the directive into ordered sort keys.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedSortKey`] for the first key that is empty or names an unknown field.
    pub fn keys(&self) -> Result<Vec<SortKey>, UnsupportedSortKey> {
        self.0
            .split(',')
            .map(|token| {
                let (descending, name) = match token.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, token),
                };
                SortField::parse(name)
                    .map(|field| SortKey { field, descending })
                    .ok_or_else(|| UnsupportedSortKey {
                        directive: self.0.clone(),
                        key: token.to_string(),
                    })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Fully-resolved lookup key for one navigation.
pub struct NavigationKey {
    /// Percent-decoded request path.
    pub path: String,
    /// Effective sort directive.
    pub sort: SortDirective,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of [`NavigationKey::from_request`].
pub struct NormalizedRequest {
    /// Key to resolve.
    pub key: NavigationKey,
    /// Requested sort that was replaced by the default, if any.
    pub rejected_sort: Option<UnsupportedSortKey>,
}

impl NavigationKey {
    /// Builds a key from explicit values without normalization.
    pub fn new(path: impl Into<String>, sort: SortDirective) -> Self {
        Self {
            path: path.into(),
            sort,
        }
    }

    /// Normalizes raw location state into a lookup key.
    ///
    /// Absent or empty paths become `/`, absent or empty sorts become `-mtime`, and the path is
    /// percent-decoded. A sort outside the backend grammar is replaced by the default and
    /// reported in [`NormalizedRequest::rejected_sort`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPath`] when the decoded path is not valid UTF-8.
    pub fn from_request(
        path: Option<&str>,
        sort: Option<&str>,
    ) -> Result<NormalizedRequest, QueryError> {
        let raw_path = match path {
            Some(path) if !path.is_empty() => path,
            _ => DEFAULT_PATH,
        };
        let decoded = urlencoding::decode(raw_path).map_err(|err| QueryError::InvalidPath {
            raw: raw_path.to_string(),
            reason: err.to_string(),
        })?;

        let (sort, rejected_sort) = match SortDirective::from_param(sort) {
            Ok(sort) => (sort, None),
            Err(rejected) => (SortDirective::default(), Some(rejected)),
        };

        Ok(NormalizedRequest {
            key: Self::new(decoded.into_owned(), sort),
            rejected_sort,
        })
    }

    /// Returns the GraphQL variables for this key.
    pub fn variables(&self) -> QueryVariables {
        QueryVariables {
            path: self.path.clone(),
            sort: self.sort.as_str().to_string(),
        }
    }
}

/// Percent-encodes each segment of `path`, keeping the `/` separators.
///
/// Links built with this survive the decoding in [`NavigationKey::from_request`] unchanged, even
/// for names containing `%`, `#`, or `?`.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Variables bound into the listing query document.
pub struct QueryVariables {
    /// Path to stat and list.
    pub path: String,
    /// Sort directive for the listing.
    pub sort: String,
}
