//! Reducer actions, side-effect intents, and transition logic for the page resolver.

use dirview_host::{DecodedListing, NavigationKey, QueryError};

use crate::model::{RequestTicket, ResolveState, ResolveStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_resolve`].
pub enum ResolveAction {
    /// The location changed; resolve `key` from scratch.
    Navigate(NavigationKey),
    /// A listing query completed.
    Resolved {
        /// Ticket the query was issued with.
        ticket: RequestTicket,
        /// Query outcome.
        result: Result<DecodedListing, QueryError>,
    },
    /// The location could not be normalized into a key.
    RejectNavigation(QueryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by the reducer and executed by the runtime.
pub enum ResolveEffect {
    /// Run the listing query for `key` and report back with `ticket`.
    IssueQuery {
        /// Ticket to echo in [`ResolveAction::Resolved`].
        ticket: RequestTicket,
        /// Key to resolve.
        key: NavigationKey,
    },
    /// A response arrived for a superseded query and was dropped.
    DiscardStale {
        /// Ticket of the dropped response.
        ticket: RequestTicket,
        /// Ticket of the latest query.
        latest: RequestTicket,
    },
    /// The backend listed paths more than once; later copies were dropped.
    ReportDuplicates {
        /// Key whose listing carried duplicates.
        key: NavigationKey,
        /// Dropped paths.
        paths: Vec<String>,
    },
    /// Resolution failed.
    ReportFailure {
        /// Key that failed, if one was formed.
        key: Option<NavigationKey>,
        /// Failure cause.
        error: QueryError,
    },
}

/// Applies `action` to `state` and returns the side effects to run.
///
/// Every navigation issues a fresh query under a new ticket. Only the response matching the
/// latest ticket is applied, so a superseded in-flight query can never overwrite a newer page.
pub fn reduce_resolve(state: &mut ResolveState, action: ResolveAction) -> Vec<ResolveEffect> {
    match action {
        ResolveAction::Navigate(key) => {
            state.ticket += 1;
            state.status = ResolveStatus::Loading { key: key.clone() };
            vec![ResolveEffect::IssueQuery {
                ticket: state.ticket,
                key,
            }]
        }
        ResolveAction::Resolved { ticket, result } => {
            let key = match &state.status {
                ResolveStatus::Loading { key } if ticket == state.ticket => key.clone(),
                _ => {
                    return vec![ResolveEffect::DiscardStale {
                        ticket,
                        latest: state.ticket,
                    }]
                }
            };

            match result {
                Ok(DecodedListing {
                    page,
                    duplicate_paths,
                }) => {
                    state.status = ResolveStatus::Loaded {
                        key: key.clone(),
                        page,
                    };
                    if duplicate_paths.is_empty() {
                        Vec::new()
                    } else {
                        vec![ResolveEffect::ReportDuplicates {
                            key,
                            paths: duplicate_paths,
                        }]
                    }
                }
                Err(error) => {
                    state.status = ResolveStatus::Failed {
                        key: Some(key.clone()),
                        error: error.clone(),
                    };
                    vec![ResolveEffect::ReportFailure {
                        key: Some(key),
                        error,
                    }]
                }
            }
        }
        ResolveAction::RejectNavigation(error) => {
            state.ticket += 1;
            state.status = ResolveStatus::Failed {
                key: None,
                error: error.clone(),
            };
            vec![ResolveEffect::ReportFailure { key: None, error }]
        }
    }
}
