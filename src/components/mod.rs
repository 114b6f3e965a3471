//! UI Components
//!
//! Reusable Leptos components.

mod alert_dialog;
mod client_form;
mod client_launcher;
mod field_errors;
mod tag_toggle_list;

pub use alert_dialog::{AlertDialog, SignalNotifier};
pub use client_form::ClientForm;
pub use client_launcher::ClientLauncher;
pub use field_errors::FieldErrors;
pub use tag_toggle_list::TagToggleList;
