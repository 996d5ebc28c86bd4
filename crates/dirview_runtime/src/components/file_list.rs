use super::*;

#[component]
pub(super) fn FileList(listing: ListingModel) -> impl IntoView {
    let ListingModel { heading, entries } = listing;

    view! {
        <div class="filelist">
            <h1>{heading}</h1>
            <ul class="listing">
                <For each=move || entries.clone() key=|entry| entry.href.clone() let:entry>
                    <li>
                        <ItemLink target=entry />
                    </li>
                </For>
            </ul>
        </div>
    }
}
