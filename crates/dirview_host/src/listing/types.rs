//! Item descriptors shared by the resolver, view models, and host adapters.

use serde::{Deserialize, Serialize};

/// Content type that switches an item into the media preview page.
pub const VIDEO_MP4_MIME: &str = "video/mp4";
/// Display name the backend reports for the served root.
pub const ROOT_NAME: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// File-system entry kind reported by the backend.
pub enum ItemKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Anything else the backend can stat (sockets, devices, broken links).
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Back-reference from a resolved item to its containing directory.
pub struct ParentDescriptor {
    /// Display name of the parent.
    pub name: String,
    /// Navigation target of the parent.
    pub path: String,
    /// Whether the parent directory serves its own index page.
    pub has_index: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Subtitle file associated with a playable media item.
pub struct SubtitleDescriptor {
    /// Path of the subtitle file.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One file-system entry as exposed by the backend.
pub struct ItemDescriptor {
    /// Display name (`/` for the root).
    pub name: String,
    /// Canonical path; unique within one resolved page.
    pub path: String,
    /// File, directory, or other.
    pub kind: ItemKind,
    /// Content type, absent when the backend reports none.
    pub mime: Option<String>,
    /// Whether a directory serves its own index page.
    pub has_index: bool,
    /// Containing directory, only materialized on the resolved "self" item.
    pub parent: Option<ParentDescriptor>,
    /// Subtitle siblings, only meaningful for playable video.
    pub subtitles: Vec<SubtitleDescriptor>,
}

impl ItemDescriptor {
    /// Returns `true` for the served root.
    pub fn is_root(&self) -> bool {
        self.name == ROOT_NAME
    }

    /// Returns `true` for directories.
    pub fn is_directory(&self) -> bool {
        self.kind == ItemKind::Directory
    }

    /// Returns `true` when the item carries the `video/mp4` content type.
    pub fn is_video(&self) -> bool {
        self.mime.as_deref() == Some(VIDEO_MP4_MIME)
    }

    /// Returns `true` when the item should open in the media preview page.
    pub fn is_playable(&self) -> bool {
        self.kind == ItemKind::File && self.is_video()
    }

    /// Returns the name used in titles and headings: empty for the root.
    pub fn display_name(&self) -> &str {
        if self.is_root() {
            ""
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Result of resolving one navigation key against the backend.
pub struct ResolvedPage {
    /// The item addressed by the request path; `None` when the backend has no such path.
    pub self_item: Option<ItemDescriptor>,
    /// Directory children in backend order.
    pub containing: Vec<ItemDescriptor>,
}

impl ResolvedPage {
    /// Page for a path the backend could not resolve.
    pub fn not_found() -> Self {
        Self::default()
    }
}
