//! Render-ready view models derived from a resolved page.
//!
//! Components only render these values; every policy decision (navigation mode, labels, titles,
//! default subtitle track, page mode) is made here so it can be tested without a DOM.

use dirview_host::{encode_path, ItemDescriptor, ParentDescriptor, ResolvedPage, SUBTITLE_VTT_QUERY};

/// Body class applied on the media preview page.
pub const VIDEO_PAGE_CLASS: &str = "page-video";
/// Body class applied on the directory listing page.
pub const DIRECTORY_PAGE_CLASS: &str = "page-directory";
/// Label of the "go up" control.
pub const GO_UP_LABEL: &str = "<";
/// Placeholder label and language for subtitle tracks.
pub const SUBTITLE_PLACEHOLDER: &str = "Subtitle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a link navigates.
pub enum LinkMode {
    /// Client-side route change handled by the router.
    InApp,
    /// Regular document navigation (download, or a directory with its own index page).
    FullPage,
}

impl LinkMode {
    /// `rel` attribute of the rendered anchor; `external` keeps the router from intercepting it.
    pub fn rel(self) -> Option<&'static str> {
        match self {
            Self::InApp => None,
            Self::FullPage => Some("external"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A navigable link with its resolved mode and label.
pub struct LinkTarget {
    /// Percent-encoded navigation target.
    pub href: String,
    /// Visible label.
    pub label: String,
    /// Navigation mode.
    pub mode: LinkMode,
    /// Whether the target opens in the media preview page.
    pub streamable: bool,
}

/// Navigation mode for a directory: directories serving their own index need a full load.
pub fn directory_link_mode(has_index: bool) -> LinkMode {
    if has_index {
        LinkMode::FullPage
    } else {
        LinkMode::InApp
    }
}

/// Resolves the link for one listing entry.
pub fn list_entry_link(item: &ItemDescriptor) -> LinkTarget {
    if item.is_directory() {
        return LinkTarget {
            href: encode_path(&item.path),
            label: format!("{}/", item.name),
            mode: directory_link_mode(item.has_index),
            streamable: false,
        };
    }

    let streamable = item.is_video();
    LinkTarget {
        href: encode_path(&item.path),
        label: item.name.clone(),
        mode: if streamable {
            LinkMode::InApp
        } else {
            LinkMode::FullPage
        },
        streamable,
    }
}

fn parent_link(parent: &ParentDescriptor) -> LinkTarget {
    LinkTarget {
        href: encode_path(&parent.path),
        label: GO_UP_LABEL.to_string(),
        mode: directory_link_mode(parent.has_index),
        streamable: false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Header bar: "go up" slot and title.
pub struct HeaderModel {
    /// "Go up" control; `None` renders the empty placeholder.
    pub up: Option<LinkTarget>,
    /// Title text.
    pub title: String,
}

/// Builds the header for `item`.
pub fn header_model(item: &ItemDescriptor) -> HeaderModel {
    let up = if item.is_root() {
        None
    } else {
        item.parent.as_ref().map(parent_link)
    };
    let suffix = if item.is_directory() { "/" } else { "" };
    HeaderModel {
        up,
        title: format!("{}{suffix}", item.display_name()),
    }
}

fn index_title(item: &ItemDescriptor) -> String {
    format!("Index of {}/", item.display_name())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Directory listing body.
pub struct ListingModel {
    /// Listing heading.
    pub heading: String,
    /// One link per child, in backend order; `href` doubles as the entry key.
    pub entries: Vec<LinkTarget>,
}

/// Builds the listing for `self_item` and its children without reordering them.
pub fn listing_model(self_item: &ItemDescriptor, containing: &[ItemDescriptor]) -> ListingModel {
    ListingModel {
        heading: index_title(self_item),
        entries: containing.iter().map(list_entry_link).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Source element of the media player.
pub struct MediaSource {
    /// Percent-encoded media URL.
    pub src: String,
    /// Content type.
    pub mime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Subtitle track element of the media player.
pub struct SubtitleTrack {
    /// Percent-encoded WebVTT URL.
    pub src: String,
    /// Track label.
    pub label: &'static str,
    /// Track language.
    pub srclang: &'static str,
    /// Whether this is the default active track.
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Media player body.
pub struct MediaModel {
    /// Single playable source.
    pub source: MediaSource,
    /// Subtitle tracks; only the first is default.
    pub tracks: Vec<SubtitleTrack>,
}

/// Builds the player for a playable `item`.
pub fn media_model(item: &ItemDescriptor) -> MediaModel {
    // TODO: derive label and srclang from the subtitle file name (e.g. `movie.en.srt`).
    let tracks = item
        .subtitles
        .iter()
        .enumerate()
        .map(|(idx, subtitle)| SubtitleTrack {
            src: format!("{}{}", encode_path(&subtitle.path), SUBTITLE_VTT_QUERY),
            label: SUBTITLE_PLACEHOLDER,
            srclang: SUBTITLE_PLACEHOLDER,
            is_default: idx == 0,
        })
        .collect();

    MediaModel {
        source: MediaSource {
            src: encode_path(&item.path),
            mime: item.mime.clone().unwrap_or_default(),
        },
        tracks,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Media preview page.
pub struct MediaPage {
    /// Document title.
    pub title: String,
    /// Body class.
    pub body_class: &'static str,
    /// Header bar.
    pub header: HeaderModel,
    /// Player.
    pub media: MediaModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Directory listing page.
pub struct ListingPage {
    /// Document title.
    pub title: String,
    /// Body class.
    pub body_class: &'static str,
    /// Header bar.
    pub header: HeaderModel,
    /// Listing.
    pub listing: ListingModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Composed page for the current resolve.
pub enum PageModel {
    /// Nothing to render: not loaded yet, not found, or failed.
    Empty,
    /// Video preview.
    Media(MediaPage),
    /// Directory listing (also the fallback for non-playable files).
    Listing(ListingPage),
}

/// Chooses and configures the page mode for a resolved page.
pub fn compose_page(page: Option<&ResolvedPage>) -> PageModel {
    let Some(item) = page.and_then(|page| page.self_item.as_ref()) else {
        return PageModel::Empty;
    };

    if item.is_playable() {
        return PageModel::Media(MediaPage {
            title: item.name.clone(),
            body_class: VIDEO_PAGE_CLASS,
            header: header_model(item),
            media: media_model(item),
        });
    }

    let containing = page.map(|page| page.containing.as_slice()).unwrap_or(&[]);
    PageModel::Listing(ListingPage {
        title: index_title(item),
        body_class: DIRECTORY_PAGE_CLASS,
        header: header_model(item),
        listing: listing_model(item, containing),
    })
}

#[cfg(test)]
mod tests {
    use dirview_host::{ItemKind, NavigationKey, SubtitleDescriptor, VIDEO_MP4_MIME};
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(name: &str, path: &str, kind: ItemKind) -> ItemDescriptor {
        ItemDescriptor {
            name: name.into(),
            path: path.into(),
            kind,
            mime: None,
            has_index: false,
            parent: None,
            subtitles: Vec::new(),
        }
    }

    fn dir(name: &str, path: &str, has_index: bool) -> ItemDescriptor {
        ItemDescriptor {
            has_index,
            ..item(name, path, ItemKind::Directory)
        }
    }

    fn video(name: &str, path: &str) -> ItemDescriptor {
        ItemDescriptor {
            mime: Some(VIDEO_MP4_MIME.into()),
            ..item(name, path, ItemKind::File)
        }
    }

    fn parent(path: &str, has_index: bool) -> Option<ParentDescriptor> {
        Some(ParentDescriptor {
            name: path.trim_start_matches('/').into(),
            path: path.into(),
            has_index,
        })
    }

    #[test]
    fn missing_self_composes_empty_page() {
        assert_eq!(compose_page(None), PageModel::Empty);

        let orphan_children = ResolvedPage {
            self_item: None,
            containing: vec![item("a.txt", "/a.txt", ItemKind::File)],
        };
        assert_eq!(compose_page(Some(&orphan_children)), PageModel::Empty);
    }

    #[test]
    fn root_header_never_links_up() {
        let mut root = dir("/", "/", false);
        root.parent = parent("/elsewhere", true);

        let header = header_model(&root);
        assert_eq!(header.up, None);
        assert_eq!(header.title, "/");
    }

    #[test]
    fn header_up_link_follows_parent_index_flag() {
        let mut nested = dir("season1", "/shows/season1", false);
        nested.parent = parent("/shows", true);
        let up = header_model(&nested).up.expect("up link");
        assert_eq!(up.mode, LinkMode::FullPage);
        assert_eq!(up.href, "/shows");
        assert_eq!(up.label, "<");

        nested.parent = parent("/shows", false);
        assert_eq!(
            header_model(&nested).up.expect("up link").mode,
            LinkMode::InApp
        );
    }

    #[test]
    fn header_without_parent_keeps_placeholder() {
        let orphan = dir("lost", "/lost", false);
        assert_eq!(header_model(&orphan).up, None);
    }

    #[test]
    fn header_title_suffixes_directories_only() {
        let movies = dir("movies", "/movies", false);
        assert_eq!(header_model(&movies).title, "movies/");
        let clip = video("clip.mp4", "/clip.mp4");
        assert_eq!(header_model(&clip).title, "clip.mp4");
    }

    #[test]
    fn entry_link_policy_precedence() {
        let indexed = list_entry_link(&dir("site", "/site", true));
        assert_eq!(indexed.mode, LinkMode::FullPage);
        assert_eq!(indexed.label, "site/");

        let plain_dir = list_entry_link(&dir("movies", "/movies", false));
        assert_eq!(plain_dir.mode, LinkMode::InApp);
        assert_eq!(plain_dir.label, "movies/");

        let clip = list_entry_link(&video("clip.mp4", "/clip.mp4"));
        assert_eq!(clip.mode, LinkMode::InApp);
        assert_eq!(clip.label, "clip.mp4");
        assert!(clip.streamable);

        let mut notes = item("notes.txt", "/notes.txt", ItemKind::File);
        notes.mime = Some("text/plain".into());
        let download = list_entry_link(&notes);
        assert_eq!(download.mode, LinkMode::FullPage);
        assert_eq!(download.label, "notes.txt");
        assert!(!download.streamable);

        let other = list_entry_link(&item("fifo", "/fifo", ItemKind::Other));
        assert_eq!(other.mode, LinkMode::FullPage);
    }

    #[test]
    fn media_tracks_mark_only_first_default() {
        let mut clip = video("clip.mp4", "/clip.mp4");
        clip.subtitles = vec![
            SubtitleDescriptor {
                path: "/a.srt".into(),
            },
            SubtitleDescriptor {
                path: "/b.srt".into(),
            },
        ];

        let media = media_model(&clip);
        assert_eq!(
            media.source,
            MediaSource {
                src: "/clip.mp4".into(),
                mime: "video/mp4".into(),
            }
        );
        assert_eq!(media.tracks.len(), 2);
        assert!(media.tracks[0].is_default);
        assert!(!media.tracks[1].is_default);
        assert_eq!(media.tracks[0].src, "/a.srt?mode=vtt");
        assert_eq!(media.tracks[1].src, "/b.srt?mode=vtt");
    }

    #[test]
    fn full_page_links_are_marked_external() {
        assert_eq!(LinkMode::FullPage.rel(), Some("external"));
        assert_eq!(LinkMode::InApp.rel(), None);

        let indexed = list_entry_link(&dir("site", "/site", true));
        assert_eq!(indexed.mode.rel(), Some("external"));

        let mut nested = dir("docs", "/site/docs", false);
        nested.parent = parent("/site", true);
        let up = header_model(&nested).up.expect("up link");
        assert_eq!(up.mode.rel(), Some("external"));
    }

    fn resolved_path(href: &str) -> String {
        NavigationKey::from_request(Some(href), None)
            .expect("normalize")
            .key
            .path
    }

    #[test]
    fn hrefs_resolve_back_to_listed_paths() {
        for path in ["/100%25 done.mp4", "/a#b.mp4", "/café.mp4", "/what?.mp4"] {
            let clip = video("clip", path);
            let link = list_entry_link(&clip);
            assert!(!link.href.contains('#') && !link.href.contains('?'));
            assert_eq!(resolved_path(&link.href), path);
        }

        let odd_dir = dir("50% off", "/50% off", false);
        assert_eq!(resolved_path(&list_entry_link(&odd_dir).href), "/50% off");

        let mut nested = video("clip.mp4", "/a#b/clip.mp4");
        nested.parent = parent("/a#b", false);
        let up = header_model(&nested).up.expect("up link");
        assert_eq!(resolved_path(&up.href), "/a#b");
    }

    #[test]
    fn media_urls_are_encoded() {
        let mut clip = video("x.mp4", "/a#b/x.mp4");
        clip.subtitles = vec![SubtitleDescriptor {
            path: "/a#b/x.srt".into(),
        }];

        let media = media_model(&clip);
        assert_eq!(media.source.src, "/a%23b/x.mp4");
        assert_eq!(media.tracks[0].src, "/a%23b/x.srt?mode=vtt");
    }

    #[test]
    fn media_without_subtitles_has_no_tracks() {
        let clip = video("clip.mp4", "/clip.mp4");
        assert!(media_model(&clip).tracks.is_empty());
    }

    #[test]
    fn playable_file_composes_media_page() {
        let mut clip = video("clip.mp4", "/movies/clip.mp4");
        clip.parent = parent("/movies", false);
        let page = ResolvedPage {
            self_item: Some(clip),
            containing: Vec::new(),
        };

        let PageModel::Media(media) = compose_page(Some(&page)) else {
            panic!("expected media page");
        };
        assert_eq!(media.title, "clip.mp4");
        assert_eq!(media.body_class, "page-video");
        assert_eq!(media.header.up.expect("up").href, "/movies");
    }

    #[test]
    fn video_mime_on_non_file_stays_a_listing() {
        let mut odd = dir("weird.mp4", "/weird.mp4", false);
        odd.mime = Some(VIDEO_MP4_MIME.into());
        let page = ResolvedPage {
            self_item: Some(odd),
            containing: Vec::new(),
        };
        assert!(matches!(compose_page(Some(&page)), PageModel::Listing(_)));
    }

    #[test]
    fn listing_title_uses_empty_name_for_root() {
        let root = ResolvedPage {
            self_item: Some(dir("/", "/", false)),
            containing: Vec::new(),
        };
        let PageModel::Listing(listing) = compose_page(Some(&root)) else {
            panic!("expected listing page");
        };
        assert_eq!(listing.title, "Index of /");
        assert_eq!(listing.listing.heading, "Index of /");
        assert_eq!(listing.body_class, "page-directory");

        let movies = ResolvedPage {
            self_item: Some(dir("movies", "/movies", false)),
            containing: Vec::new(),
        };
        let PageModel::Listing(listing) = compose_page(Some(&movies)) else {
            panic!("expected listing page");
        };
        assert_eq!(listing.title, "Index of movies/");
    }

    #[test]
    fn listing_preserves_backend_order() {
        let containing = vec![
            item("zeta.txt", "/zeta.txt", ItemKind::File),
            dir("alpha", "/alpha", false),
            video("mid.mp4", "/mid.mp4"),
        ];
        let root = dir("/", "/", false);

        let hrefs: Vec<_> = listing_model(&root, &containing)
            .entries
            .into_iter()
            .map(|entry| entry.href)
            .collect();
        assert_eq!(hrefs, vec!["/zeta.txt", "/alpha", "/mid.mp4"]);
    }
}
