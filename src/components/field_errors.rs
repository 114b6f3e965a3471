//! Field Errors Component

use leptos::prelude::*;

/// Validation messages under a form field
#[component]
pub fn FieldErrors(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <ul class="field-errors">
            {move || messages.get().into_iter().map(|message| view! {
                <li class="field-error">{message}</li>
            }).collect_view()}
        </ul>
    }
}
