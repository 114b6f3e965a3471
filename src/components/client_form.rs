//! Client Form Component
//!
//! Create/edit form for a client and its tags. All state lives in a
//! `ClientFormController`; a revision counter bumped by the controller's
//! observer drives re-rendering.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use tracing::debug;

use client_form_core::{
    client_form_config, fields, ClientFormController, ClientFormState, HostIntent, Rule, SubmitOutcome, Tag,
};

use crate::commands::HttpBackend;
use crate::components::{FieldErrors, SignalNotifier, TagToggleList};
use crate::context::AppContext;
use crate::timer::BrowserDelay;

/// Client create/edit form
///
/// The client and tag catalog are loaded once, when the form mounts; the host
/// remounts the form to edit a different client.
///
/// Props:
/// - option: view mode the host opened the form under
/// - uuid: identifier of the client to edit, `None` for a new client
/// - on_uuid_change: receives the identifier the host should edit next
/// - on_option_change: receives the view mode the host should switch to
#[component]
pub fn ClientForm(
    #[prop(into)] option: Signal<Option<i32>>,
    #[prop(into)] uuid: Signal<Option<String>>,
    #[prop(into)] on_uuid_change: Callback<Option<String>>,
    #[prop(into)] on_option_change: Callback<i32>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = ctx.config();

    let (revision, set_revision) = signal(0u32);

    let backend = Rc::new(HttpBackend::new(&config.api));
    let controller = ClientFormController::new(
        client_form_config(),
        config.form.clone(),
        backend.clone(),
        backend,
        Rc::new(SignalNotifier::new(ctx.notice)),
        Rc::new(BrowserDelay),
    )
    .with_observer(move || set_revision.update(|r| *r = r.wrapping_add(1)));
    let controller = StoredValue::new_local(Rc::new(controller));

    // Field set exists now; load the client and tag catalog
    let loader = controller.get_value();
    let initial_uuid = uuid.get_untracked();
    debug!(option = ?option.get_untracked(), uuid = ?initial_uuid, "client form mounted");
    spawn_local(async move {
        loader.load_all(initial_uuid.as_deref()).await;
    });

    // Reactive reads of controller state
    let read = move |f: fn(&ClientFormState) -> bool| {
        let _ = revision.get();
        controller.with_value(|c| c.with_state(f))
    };
    let text = move |field: &'static str| {
        let _ = revision.get();
        controller.with_value(|c| c.with_state(|s| s.form().text(field)))
    };
    let errors = move |field: &'static str| -> Vec<String> {
        let _ = revision.get();
        controller.with_value(|c| {
            c.with_state(|s| {
                if !s.form().is_touched(field) && !s.is_form_invalid() {
                    return Vec::new();
                }
                s.form()
                    .violations()
                    .field(field)
                    .map(|rules| rules.iter().map(Rule::message).collect())
                    .unwrap_or_default()
            })
        })
    };

    let input_text = move |field: &'static str, value: String| {
        controller.get_value().input(field, Value::String(value));
    };
    let touch = move |field: &'static str| controller.get_value().touch(field);

    let tags = Signal::derive(move || {
        let _ = revision.get();
        controller.with_value(|c| c.with_state(|s| s.tags().to_vec()))
    });
    let is_selected = move |tag_id: u64| {
        let _ = revision.get();
        controller.with_value(|c| c.with_state(|s| s.has_tag(tag_id)))
    };
    let on_toggle = move |tag: Tag| {
        controller.get_value().toggle_tag(&tag);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            if let SubmitOutcome::Saved(intents) = controller.submit().await {
                for intent in intents {
                    match intent {
                        HostIntent::SetUuid(uuid) => on_uuid_change.run(uuid),
                        HostIntent::SetOption(option) => on_option_change.run(option),
                    }
                }
            }
        });
    };

    let list_option = config.form.list_view_option;
    let cancel = move |_| {
        on_uuid_change.run(None);
        on_option_change.run(list_option);
    };

    view! {
        <form class="client-form" on:submit=submit novalidate=true>
            <div class="client-form-header">
                <span class="client-form-title">
                    {move || if read(ClientFormState::is_editing) { "Edit client" } else { "New client" }}
                </span>
                <Show when=move || read(ClientFormState::is_loading)>
                    <span class="loading-hint">"Loading..."</span>
                </Show>
            </div>

            <Show when=move || read(ClientFormState::is_form_invalid)>
                <div class="form-alert">"Please fix the highlighted fields"</div>
            </Show>

            // Name
            <div class="editor-section">
                <label class="editor-label">"Name"</label>
                <input
                    type="text"
                    class="name-edit-input"
                    maxlength="100"
                    prop:value=move || text(fields::NAME)
                    on:input=move |ev| input_text(fields::NAME, event_target_value(&ev))
                    on:blur=move |_| touch(fields::NAME)
                />
                <FieldErrors messages=Signal::derive(move || errors(fields::NAME)) />
            </div>

            // Email
            <div class="editor-section">
                <label class="editor-label">"Email"</label>
                <input
                    type="email"
                    class="email-edit-input"
                    prop:value=move || text(fields::EMAIL)
                    on:input=move |ev| input_text(fields::EMAIL, event_target_value(&ev))
                    on:blur=move |_| touch(fields::EMAIL)
                />
                <FieldErrors messages=Signal::derive(move || errors(fields::EMAIL)) />
            </div>

            // Active
            <div class="editor-section">
                <label class="editor-label checkbox-label">
                    <input
                        type="checkbox"
                        prop:checked=move || {
                            let _ = revision.get();
                            controller.with_value(|c| c.with_state(|s| s.form().flag(fields::ACTIVE)))
                        }
                        on:change=move |ev| {
                            controller.get_value().input(fields::ACTIVE, Value::Bool(event_target_checked(&ev)));
                        }
                    />
                    "Active"
                </label>
            </div>

            // Tags
            <div class="editor-section">
                <label class="editor-label">"Tags"</label>
                <TagToggleList tags=tags is_selected=is_selected on_toggle=on_toggle />
            </div>

            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=cancel>"Cancel"</button>
                <button type="submit" class="primary-btn">"Save"</button>
            </div>
        </form>
    }
}
