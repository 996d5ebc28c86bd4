//! Page composition and the views it chooses between.

mod file_list;
mod header;
mod links;
mod video_player;

use leptos::*;
use leptos_meta::{Body, Title};
use leptos_router::A;

use self::{file_list::FileList, header::Header, links::ItemLink, video_player::VideoPlayer};

use crate::{
    runtime_context::use_resolver,
    view_model::{
        compose_page, HeaderModel, LinkTarget, ListingModel, ListingPage, MediaModel, MediaPage,
        PageModel,
    },
};

#[component]
/// Renders the page for the current resolve: a media preview, a listing, or nothing.
///
/// Nothing is rendered while the query is in flight, when the path does not exist, or when the
/// resolve failed.
pub fn PathPreview() -> impl IntoView {
    let resolver = use_resolver();
    let page = create_memo(move |_| resolver.state.with(|state| compose_page(state.page())));

    // TODO: give failed resolves their own error panel instead of the empty page.
    move || match page.get() {
        PageModel::Empty => ().into_view(),
        PageModel::Media(media) => view! { <MediaPreviewPage page=media /> }.into_view(),
        PageModel::Listing(listing) => view! { <ListingPreviewPage page=listing /> }.into_view(),
    }
}

#[component]
fn MediaPreviewPage(page: MediaPage) -> impl IntoView {
    let MediaPage {
        title,
        body_class,
        header,
        media,
    } = page;

    view! {
        <Title text=title />
        <Body class=body_class />
        <div class="video-container">
            <Header model=header />
            <VideoPlayer media=media />
        </div>
    }
}

#[component]
fn ListingPreviewPage(page: ListingPage) -> impl IntoView {
    let ListingPage {
        title,
        body_class,
        header,
        listing,
    } = page;

    view! {
        <Title text=title />
        <Body class=body_class />
        <section>
            <Header model=header />
            <FileList listing=listing />
        </section>
    }
}

#[component]
/// Fixed notice for page routes under the reserved API/asset mount prefix.
pub fn IncorrectLink() -> impl IntoView {
    view! { <div class="incorrect-link">"Incorrect link"</div> }
}
