//! Client Form Core
//!
//! Headless side of the client form:
//! - models: backend payloads (client, tag, association, response envelope)
//! - form: field configuration, validation rules, value holder
//! - client_form: synchronous state transitions
//! - controller: async load/submit flow over injected collaborators

mod api;
mod client_form;
mod controller;
mod error;
mod form;
mod models;
mod notification;
mod settings;

pub use api::{ClientApi, Delay, Notifier, TagApi};
pub use client_form::{client_form_config, fields, ClientFormState, TagToggle, NAME_MAX_LEN, NAME_MIN_LEN};
pub use controller::{ClientFormController, SubmitOutcome};
pub use error::{ApiError, ApiResult, FormError};
pub use form::{validate, FieldSpec, FormConfig, FormState, Rule, Violations};
pub use models::{ApiResponse, Client, ClientTag, Tag, STATUS_SUCCESS};
pub use notification::{HostIntent, Notification, NotificationKind};
pub use settings::FormSettings;
