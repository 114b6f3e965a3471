//! Alert Dialog Component
//!
//! Modal success/error message with a single dismiss button.

use leptos::prelude::*;

use client_form_core::{Notification, NotificationKind, Notifier};

/// `Notifier` that writes into the signal the dialog renders
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    slot: RwSignal<Option<Notification>>,
}

impl SignalNotifier {
    pub fn new(slot: RwSignal<Option<Notification>>) -> Self {
        Self { slot }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, notification: Notification) {
        self.slot.set(Some(notification));
    }
}

/// Modal showing the current notification, if any
#[component]
pub fn AlertDialog(notice: RwSignal<Option<Notification>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|notification| {
            let class = match notification.kind {
                NotificationKind::Success => "alert-dialog success",
                NotificationKind::Error => "alert-dialog error",
            };
            view! {
                <div class="modal-overlay" on:click=move |_| notice.set(None)>
                    <div class=class on:click=|ev| ev.stop_propagation()>
                        <h2 class="alert-title">{notification.title}</h2>
                        <p class="alert-message">{notification.message}</p>
                        <button class="confirm-btn" on:click=move |_| notice.set(None)>
                            "OK"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
