//! Resolver state for the current navigation.

use dirview_host::{NavigationKey, QueryError, ResolvedPage};

/// Monotonic identifier of one issued listing query.
pub type RequestTicket = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Lifecycle of the page resolve for the current navigation key.
pub enum ResolveStatus {
    /// No navigation has been dispatched yet.
    #[default]
    Idle,
    /// A query for `key` is in flight.
    Loading {
        /// Key being resolved.
        key: NavigationKey,
    },
    /// The query for `key` completed.
    Loaded {
        /// Key that was resolved.
        key: NavigationKey,
        /// Resolved page, possibly not-found.
        page: ResolvedPage,
    },
    /// The navigation could not be resolved.
    Failed {
        /// Key that failed, absent when the location itself could not be normalized.
        key: Option<NavigationKey>,
        /// Failure cause.
        error: QueryError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Reducer-owned resolver state.
pub struct ResolveState {
    /// Current lifecycle status.
    pub status: ResolveStatus,
    /// Ticket of the latest issued query; responses carrying any other ticket are stale.
    pub ticket: RequestTicket,
}

impl ResolveState {
    /// Returns the resolved page once loaded.
    pub fn page(&self) -> Option<&ResolvedPage> {
        match &self.status {
            ResolveStatus::Loaded { page, .. } => Some(page),
            _ => None,
        }
    }

    /// Returns the key of the current navigation, if any.
    pub fn key(&self) -> Option<&NavigationKey> {
        match &self.status {
            ResolveStatus::Idle => None,
            ResolveStatus::Loading { key } | ResolveStatus::Loaded { key, .. } => Some(key),
            ResolveStatus::Failed { key, .. } => key.as_ref(),
        }
    }

    /// Returns `true` while a query is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, ResolveStatus::Loading { .. })
    }
}
