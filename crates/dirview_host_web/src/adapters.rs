use dirview_host::{
    ClientConfig, DecodedListing, ItemDescriptor, ItemKind, ListingQueryFuture,
    ListingQueryService, MemoryListingQueryService, NavigationKey, ParentDescriptor, QueryError,
    ResolvedPage, SubtitleDescriptor, VIDEO_MP4_MIME,
};

use crate::WebListingQueryService;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `dirview_host_web` adapters.
pub enum HostStrategy {
    /// Fetch-backed adapters talking to the real backend.
    Browser,
    /// In-memory fixture adapters for working on the UI without a backend.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "host-stub",
    }
}

/// Adapter enum that erases the concrete transport behind [`ListingQueryService`].
#[derive(Debug, Clone)]
pub enum ListingQueryServiceAdapter {
    /// Fetch-backed GraphQL transport.
    Browser(WebListingQueryService),
    /// Fixture tree served from memory.
    Stub(MemoryListingQueryService),
}

impl ListingQueryService for ListingQueryServiceAdapter {
    fn query_listing<'a>(
        &'a self,
        key: &'a NavigationKey,
    ) -> ListingQueryFuture<'a, Result<DecodedListing, QueryError>> {
        match self {
            Self::Browser(service) => service.query_listing(key),
            Self::Stub(service) => service.query_listing(key),
        }
    }
}

/// Builds the listing query service for the selected host strategy.
pub fn listing_query_service(config: &ClientConfig) -> ListingQueryServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ListingQueryServiceAdapter::Browser(WebListingQueryService::new(config))
        }
        HostStrategy::Stub => ListingQueryServiceAdapter::Stub(stub_listing_service()),
    }
}

fn item(name: &str, path: &str, kind: ItemKind) -> ItemDescriptor {
    ItemDescriptor {
        name: name.to_string(),
        path: path.to_string(),
        kind,
        mime: None,
        has_index: false,
        parent: None,
        subtitles: Vec::new(),
    }
}

fn parent(name: &str, path: &str) -> Option<ParentDescriptor> {
    Some(ParentDescriptor {
        name: name.to_string(),
        path: path.to_string(),
        has_index: false,
    })
}

/// Fixture tree served by the `host-stub` strategy.
///
/// ```text
/// /
/// ├── movies/
/// │   ├── trailer.mp4   (+ trailer.srt, trailer.en.srt)
/// │   └── trailer.srt
/// ├── site/             (serves its own index.html)
/// └── notes.txt
/// ```
pub fn stub_listing_service() -> MemoryListingQueryService {
    let service = MemoryListingQueryService::default();

    let mut movies = item("movies", "/movies", ItemKind::Directory);
    let mut site = item("site", "/site", ItemKind::Directory);
    site.has_index = true;
    let mut notes = item("notes.txt", "/notes.txt", ItemKind::File);
    notes.mime = Some("text/plain; charset=utf-8".to_string());

    let mut root = item("/", "/", ItemKind::Directory);
    root.parent = parent("/", "/");
    service.insert_page(
        "/",
        ResolvedPage {
            self_item: Some(root),
            containing: vec![movies.clone(), site, notes],
        },
    );

    let mut trailer = item("trailer.mp4", "/movies/trailer.mp4", ItemKind::File);
    trailer.mime = Some(VIDEO_MP4_MIME.to_string());
    let mut subtitle = item("trailer.srt", "/movies/trailer.srt", ItemKind::File);
    subtitle.mime = Some("application/x-subrip".to_string());

    movies.parent = parent("/", "/");
    service.insert_page(
        "/movies",
        ResolvedPage {
            self_item: Some(movies),
            containing: vec![trailer.clone(), subtitle],
        },
    );

    trailer.parent = parent("movies", "/movies");
    trailer.subtitles = vec![
        SubtitleDescriptor {
            path: "/movies/trailer.srt".to_string(),
        },
        SubtitleDescriptor {
            path: "/movies/trailer.en.srt".to_string(),
        },
    ];
    service.insert_page(
        "/movies/trailer.mp4",
        ResolvedPage {
            self_item: Some(trailer),
            containing: Vec::new(),
        },
    );

    service
}

#[cfg(test)]
mod tests {
    use dirview_host::SortDirective;
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn default_build_selects_browser_transport() {
        #[cfg(not(feature = "host-stub"))]
        {
            assert_eq!(selected_host_strategy(), HostStrategy::Browser);
            assert_eq!(host_strategy_name(), "browser");
            assert!(matches!(
                listing_query_service(&ClientConfig::default()),
                ListingQueryServiceAdapter::Browser(_)
            ));
        }
    }

    #[test]
    fn stub_tree_serves_listing_and_media_pages() {
        let service = ListingQueryServiceAdapter::Stub(stub_listing_service());

        let root_key = NavigationKey::new("/", SortDirective::default());
        let root = block_on(service.query_listing(&root_key)).expect("root");
        let names: Vec<_> = root
            .page
            .containing
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["movies", "site", "notes.txt"]);

        let trailer = block_on(service.query_listing(&NavigationKey::new(
            "/movies/trailer.mp4",
            SortDirective::default(),
        )))
        .expect("trailer")
        .page
        .self_item
        .expect("trailer item");
        assert!(trailer.is_playable());
        assert_eq!(trailer.subtitles.len(), 2);
    }
}
