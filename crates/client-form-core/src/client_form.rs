//! Client Form State
//!
//! Synchronous state transitions of the client form: applying backend
//! responses, toggling tag membership and preparing/finishing a submission.
//! The async controller drives these; the UI only reads them.

use serde_json::{json, Value};

use crate::error::FormError;
use crate::form::{FormConfig, FormState, Rule};
use crate::models::{ApiResponse, Client, ClientTag, Tag};
use crate::notification::{HostIntent, Notification};
use crate::settings::FormSettings;

/// Field names, matching the JSON keys of [`Client`]
pub mod fields {
    pub const ID: &str = "id";
    pub const UUID: &str = "uuid";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ACTIVE: &str = "active";
    pub const CLIENT_TAGS: &str = "clientTags";
}

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;

/// Field set for the client form
pub fn client_form_config() -> FormConfig {
    FormConfig::new()
        .field(
            fields::NAME,
            json!(""),
            [Rule::Required, Rule::MaxLength(NAME_MAX_LEN), Rule::MinLength(NAME_MIN_LEN)],
        )
        .field(fields::ID, Value::Null, [])
        .field(fields::UUID, Value::Null, [])
        .field(fields::EMAIL, json!(""), [Rule::Required, Rule::Email])
        .field(fields::CLIENT_TAGS, json!([]), [])
        .field(fields::ACTIVE, json!(true), [])
}

/// Result of toggling a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagToggle {
    Added,
    Removed,
}

/// Everything the client form holds between events
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFormState {
    form: FormState,
    client: Client,
    tags: Vec<Tag>,
    loading: bool,
    form_invalid: bool,
}

impl ClientFormState {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FormState::new(config),
            client: Client::default(),
            tags: Vec::new(),
            loading: false,
            form_invalid: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Active tags offered for selection, in backend order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_form_invalid(&self) -> bool {
        self.form_invalid
    }

    pub fn clear_invalid(&mut self) {
        self.form_invalid = false;
    }

    /// Whether the form edits an existing client
    pub fn is_editing(&self) -> bool {
        self.client.is_persisted() || !self.form.value(fields::ID).map_or(true, Value::is_null)
    }

    /// Take over a fetched client; ignored unless the status is SUCCESS
    pub fn apply_client_response(&mut self, response: ApiResponse<Client>) -> bool {
        match response.into_success() {
            Some(client) => {
                self.form.patch(&client);
                self.client = client;
                true
            }
            None => false,
        }
    }

    /// Append the active tags of a catalog response; returns how many were kept
    pub fn apply_tags_response(&mut self, response: ApiResponse<Vec<Tag>>) -> usize {
        let Some(catalog) = response.into_success() else {
            return 0;
        };
        let before = self.tags.len();
        self.tags.extend(catalog.into_iter().filter(|tag| tag.active));
        self.tags.len() - before
    }

    pub fn has_tag(&self, tag_id: u64) -> bool {
        self.client.client_tags.iter().any(|ct| ct.tag_id == tag_id)
    }

    /// Add the association for `tag` if missing, remove it otherwise
    pub fn toggle_tag(&mut self, tag: &Tag) -> TagToggle {
        let associations = &mut self.client.client_tags;
        match associations.iter().position(|ct| ct.tag_id == tag.id) {
            Some(index) => {
                associations.remove(index);
                TagToggle::Removed
            }
            None => {
                associations.push(ClientTag::new(tag.id, self.client.id));
                TagToggle::Added
            }
        }
    }

    /// Validate and build the payload to send
    ///
    /// On invalid input the transient invalid flag is raised and every field
    /// is marked touched. On success the local client becomes the raw form value.
    pub fn prepare_submission(&mut self) -> Result<Client, FormError> {
        let associations =
            serde_json::to_value(&self.client.client_tags).unwrap_or_else(|_| Value::Array(Vec::new()));
        self.form.set_value(fields::CLIENT_TAGS, associations);

        let violations = self.form.violations();
        if !violations.is_empty() {
            self.form_invalid = true;
            self.form.touch_all();
            return Err(FormError::Invalid(violations));
        }

        let payload: Client = self.form.raw_value()?;
        self.client = payload.clone();
        Ok(payload)
    }

    /// Wrap up after the backend accepted the payload
    pub fn complete_submission(&mut self, settings: &FormSettings) -> (Notification, [HostIntent; 2]) {
        let notification = Notification::client_saved(self.client.is_persisted());
        self.form.reset();
        self.client = Client::default();
        let intents = [
            HostIntent::SetUuid(None),
            HostIntent::SetOption(settings.list_view_option),
        ];
        (notification, intents)
    }
}
