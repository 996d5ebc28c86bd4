//! Listing query service contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::navigation::NavigationKey;
use super::types::ResolvedPage;
use super::wire::DecodedListing;
use crate::error::QueryError;

/// Object-safe boxed future used by [`ListingQueryService`].
pub type ListingQueryFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that resolves a navigation key against the file-serving backend.
pub trait ListingQueryService {
    /// Runs the listing query for `key` and returns the validated result.
    fn query_listing<'a>(
        &'a self,
        key: &'a NavigationKey,
    ) -> ListingQueryFuture<'a, Result<DecodedListing, QueryError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Query service for builds without a transport.
pub struct NoopListingQueryService;

impl ListingQueryService for NoopListingQueryService {
    fn query_listing<'a>(
        &'a self,
        _key: &'a NavigationKey,
    ) -> ListingQueryFuture<'a, Result<DecodedListing, QueryError>> {
        Box::pin(async { Err(QueryError::Unavailable("query_listing")) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory query service serving fixture pages by path.
///
/// Paths without a fixture resolve to [`ResolvedPage::not_found`]. Every call is recorded so
/// callers can assert which keys were resolved.
pub struct MemoryListingQueryService {
    pages: Rc<RefCell<HashMap<String, ResolvedPage>>>,
    failures: Rc<RefCell<HashMap<String, QueryError>>>,
    requests: Rc<RefCell<Vec<NavigationKey>>>,
}

impl MemoryListingQueryService {
    /// Registers the page served for `path`.
    pub fn insert_page(&self, path: impl Into<String>, page: ResolvedPage) {
        self.pages.borrow_mut().insert(path.into(), page);
    }

    /// Makes every query for `path` fail with `error`.
    pub fn fail_path(&self, path: impl Into<String>, error: QueryError) {
        self.failures.borrow_mut().insert(path.into(), error);
    }

    /// Returns the keys queried so far, oldest first.
    pub fn requests(&self) -> Vec<NavigationKey> {
        self.requests.borrow().clone()
    }
}

impl ListingQueryService for MemoryListingQueryService {
    fn query_listing<'a>(
        &'a self,
        key: &'a NavigationKey,
    ) -> ListingQueryFuture<'a, Result<DecodedListing, QueryError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(key.clone());
            if let Some(error) = self.failures.borrow().get(&key.path) {
                return Err(error.clone());
            }
            let page = self
                .pages
                .borrow()
                .get(&key.path)
                .cloned()
                .unwrap_or_else(ResolvedPage::not_found);
            Ok(DecodedListing {
                page,
                duplicate_paths: Vec::new(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::listing::navigation::SortDirective;
    use crate::listing::types::{ItemDescriptor, ItemKind};

    fn root_page() -> ResolvedPage {
        ResolvedPage {
            self_item: Some(ItemDescriptor {
                name: "/".into(),
                path: "/".into(),
                kind: ItemKind::Directory,
                mime: None,
                has_index: false,
                parent: None,
                subtitles: Vec::new(),
            }),
            containing: Vec::new(),
        }
    }

    #[test]
    fn noop_service_reports_unavailable() {
        let service = NoopListingQueryService;
        let service_obj: &dyn ListingQueryService = &service;
        let key = NavigationKey::new("/", SortDirective::default());

        let err = block_on(service_obj.query_listing(&key)).expect_err("unavailable");
        assert_eq!(err, QueryError::Unavailable("query_listing"));
    }

    #[test]
    fn memory_service_serves_fixtures_and_records_requests() {
        let service = MemoryListingQueryService::default();
        service.insert_page("/", root_page());
        service.fail_path("/broken", QueryError::Transport("offline".into()));

        let root = NavigationKey::new("/", SortDirective::default());
        let missing = NavigationKey::new("/missing", SortDirective::default());
        let broken = NavigationKey::new("/broken", SortDirective::default());

        let served = block_on(service.query_listing(&root)).expect("root");
        assert_eq!(served.page, root_page());
        let not_found = block_on(service.query_listing(&missing)).expect("missing");
        assert_eq!(not_found.page, ResolvedPage::not_found());
        let err = block_on(service.query_listing(&broken)).expect_err("broken");
        assert_eq!(err, QueryError::Transport("offline".into()));

        assert_eq!(service.requests(), vec![root, missing, broken]);
    }
}
