use super::*;

#[component]
pub(super) fn VideoPlayer(media: MediaModel) -> impl IntoView {
    let MediaModel { source, tracks } = media;

    view! {
        <video controls=true>
            <source src=source.src type=source.mime />
            {tracks
                .into_iter()
                .map(|track| {
                    view! {
                        <track
                            kind="subtitles"
                            src=track.src
                            srclang=track.srclang
                            label=track.label
                            default=track.is_default
                        />
                    }
                })
                .collect_view()}
        </video>
    }
}
