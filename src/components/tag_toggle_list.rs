//! Tag Toggle List Component
//!
//! Active tags rendered as chips; clicking a chip flips membership.

use leptos::prelude::*;

use client_form_core::Tag;

/// Chip list for selecting tags
///
/// Props:
/// - tags: tags offered for selection
/// - is_selected: whether the client currently has the tag with this id
/// - on_toggle: called with the clicked tag
#[component]
pub fn TagToggleList(
    #[prop(into)] tags: Signal<Vec<Tag>>,
    #[prop(into)] is_selected: Callback<u64, bool>,
    #[prop(into)] on_toggle: Callback<Tag>,
) -> impl IntoView {
    view! {
        <div class="tag-toggle-list">
            <Show
                when=move || !tags.get().is_empty()
                fallback=|| view! { <span class="empty-hint">"No active tags"</span> }
            >
                <For
                    each=move || tags.get()
                    key=|tag| tag.id
                    children=move |tag| {
                        let tag_id = tag.id;
                        let name = tag.name.clone();
                        view! {
                            <button
                                type="button"
                                class=move || if is_selected.run(tag_id) { "tag-chip active" } else { "tag-chip" }
                                on:click=move |_| on_toggle.run(tag.clone())
                            >
                                {name}
                            </button>
                        }
                    }
                />
            </Show>
        </div>
    }
}
