use super::*;

#[component]
pub(super) fn Header(model: HeaderModel) -> impl IntoView {
    let HeaderModel { up, title } = model;
    let prev = match up {
        Some(target) => view! { <ItemLink target=target class="prev" /> }.into_view(),
        None => view! { <span class="prev"></span> }.into_view(),
    };

    view! {
        <header class="header">
            {prev}
            <h1>{title}</h1>
            // account slot
            <span class="user"></span>
        </header>
    }
}
