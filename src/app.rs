//! Client Form Frontend App
//!
//! Host view: switches between the launcher and the client form and renders
//! notifications on top of both.

use leptos::prelude::*;

use client_form_core::Notification;

use crate::components::{AlertDialog, ClientForm, ClientLauncher};
use crate::config::load_config;
use crate::context::{AppContext, VIEW_FORM, VIEW_LIST};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (option, set_option) = signal(VIEW_LIST);
    let (uuid, set_uuid) = signal::<Option<String>>(None);
    let notice = RwSignal::new(None::<Notification>);

    // Provide context to all children
    let ctx = AppContext::new(load_config(), (option, set_option), (uuid, set_uuid), notice);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Clients"</h1>

                {move || if option.get() == VIEW_FORM {
                    view! {
                        <ClientForm
                            option=Signal::derive(move || Some(option.get()))
                            uuid=uuid
                            on_uuid_change={move |uuid: Option<String>| ctx.set_uuid(uuid)}
                            on_option_change={move |option: i32| ctx.set_option(option)}
                        />
                    }.into_any()
                } else {
                    view! { <ClientLauncher /> }.into_any()
                }}
            </main>

            <AlertDialog notice=notice />
        </div>
    }
}
