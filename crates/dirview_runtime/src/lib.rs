//! Page-resolution runtime for the directory-listing client.
//!
//! The reducer in [`reducer`] drives the resolve lifecycle for each navigation, [`view_model`]
//! turns a resolved page into render-ready values, and [`components`] renders them with Leptos.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod components;
mod effect_executor;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod view_model;

pub use components::{IncorrectLink, PathPreview};
pub use model::{RequestTicket, ResolveState, ResolveStatus};
pub use reducer::{reduce_resolve, ResolveAction, ResolveEffect};
pub use runtime_context::{use_resolver, ResolverContext, ResolverProvider, ResolverServices};
pub use view_model::{compose_page, LinkMode, LinkTarget, PageModel};
