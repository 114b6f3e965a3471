//! Client Launcher Component
//!
//! List-mode view: start a new client or open an existing one by UUID.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ClientLauncher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (uuid_input, set_uuid_input) = signal(String::new());

    let open_existing = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let uuid = uuid_input.get().trim().to_string();
        if uuid.is_empty() { return; }
        set_uuid_input.set(String::new());
        ctx.open_form(Some(uuid));
    };

    view! {
        <div class="client-launcher">
            <button class="primary-btn" on:click=move |_| ctx.open_form(None)>
                "New client"
            </button>

            <form class="open-client-form" on:submit=open_existing>
                <input
                    type="text"
                    placeholder="Client UUID..."
                    prop:value=move || uuid_input.get()
                    on:input=move |ev| set_uuid_input.set(event_target_value(&ev))
                />
                <button type="submit">"Edit"</button>
            </form>
        </div>
    }
}
