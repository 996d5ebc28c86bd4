use super::*;

/// Renders `target` as a router link or a plain document link depending on its mode.
///
/// Document links carry [`crate::view_model::LinkMode::rel`] so the router does not intercept
/// them.
#[component]
pub(super) fn ItemLink(target: LinkTarget, #[prop(optional)] class: &'static str) -> impl IntoView {
    let LinkTarget {
        href,
        label,
        mode,
        streamable,
    } = target;
    let class = match (class, streamable) {
        ("", true) => "media".to_string(),
        (class, true) => format!("{class} media"),
        (class, false) => class.to_string(),
    };

    match mode.rel() {
        None => view! { <A href=href class=class>{label}</A> }.into_view(),
        Some(rel) => view! { <a href=href class=class rel=rel>{label}</a> }.into_view(),
    }
}
