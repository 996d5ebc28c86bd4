//! Typed host-domain contracts for the directory-listing client.
//!
//! This crate is the API-first boundary between the view runtime and the file-serving backend.
//! It owns the item descriptor model, request normalization, the GraphQL document and its
//! response decoding, client configuration, and the object-safe [`ListingQueryService`] trait.
//! Concrete browser transport lives in `dirview_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod listing;

pub use config::{ClientConfig, DEFAULT_API_ENDPOINT, DEFAULT_MOUNT_PREFIX, SUBTITLE_VTT_QUERY};
pub use error::{ConfigError, QueryError};
pub use listing::{
    decode_listing_response, encode_path, DecodedListing, GraphqlRequest, ItemDescriptor,
    ItemKind, ListingQueryFuture, ListingQueryService, MemoryListingQueryService, NavigationKey,
    NoopListingQueryService, NormalizedRequest, ParentDescriptor, QueryVariables, ResolvedPage,
    SortDirective, SortField, SortKey, SubtitleDescriptor, UnsupportedSortKey, DEFAULT_PATH,
    DEFAULT_SORT, LISTING_OPERATION, LISTING_QUERY, ROOT_NAME, VIDEO_MP4_MIME,
};
