//! Listing-domain contracts: descriptors, request normalization, wire decoding, and services.

mod navigation;
mod service;
mod types;
mod wire;

pub use navigation::{
    encode_path, NavigationKey, NormalizedRequest, QueryVariables, SortDirective, SortField,
    SortKey, UnsupportedSortKey, DEFAULT_PATH, DEFAULT_SORT,
};
pub use service::{
    ListingQueryFuture, ListingQueryService, MemoryListingQueryService, NoopListingQueryService,
};
pub use types::{
    ItemDescriptor, ItemKind, ParentDescriptor, ResolvedPage, SubtitleDescriptor, ROOT_NAME,
    VIDEO_MP4_MIME,
};
pub use wire::{
    decode_listing_response, DecodedListing, GraphqlRequest, LISTING_OPERATION, LISTING_QUERY,
};
