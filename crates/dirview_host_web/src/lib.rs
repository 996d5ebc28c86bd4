//! Browser (`wasm32`) implementations of [`dirview_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the listing query transport. The
//! fetch glue lives in `bridge/`, split into a wasm implementation and a native fallback shim so
//! the crate builds and tests on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod query;

pub use adapters::{
    host_strategy_name, listing_query_service, selected_host_strategy, stub_listing_service,
    HostStrategy, ListingQueryServiceAdapter,
};
pub use query::WebListingQueryService;
