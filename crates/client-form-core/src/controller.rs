//! Client Form Controller
//!
//! Async orchestration of the client form. Owns the state and the
//! collaborators it was constructed with; runs on a single thread.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::{ClientApi, Delay, Notifier, TagApi};
use crate::client_form::{ClientFormState, TagToggle};
use crate::error::{ApiError, FormError};
use crate::form::FormConfig;
use crate::models::Tag;
use crate::notification::{HostIntent, Notification};
use crate::settings::FormSettings;

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Backend accepted the client; the host should apply these intents
    Saved([HostIntent; 2]),
    /// Never sent: the form did not produce a payload
    Rejected(FormError),
    /// Sent, but the backend call failed
    Failed(ApiError),
}

pub struct ClientFormController {
    state: RefCell<ClientFormState>,
    settings: FormSettings,
    clients: Rc<dyn ClientApi>,
    tags: Rc<dyn TagApi>,
    notifier: Rc<dyn Notifier>,
    delay: Rc<dyn Delay>,
    observer: Option<Box<dyn Fn()>>,
}

impl ClientFormController {
    pub fn new(
        config: FormConfig,
        settings: FormSettings,
        clients: Rc<dyn ClientApi>,
        tags: Rc<dyn TagApi>,
        notifier: Rc<dyn Notifier>,
        delay: Rc<dyn Delay>,
    ) -> Self {
        Self {
            state: RefCell::new(ClientFormState::new(config)),
            settings,
            clients,
            tags,
            notifier,
            delay,
            observer: None,
        }
    }

    /// Register a hook run after every state change
    pub fn with_observer(mut self, observer: impl Fn() + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Read the current state
    pub fn with_state<R>(&self, f: impl FnOnce(&ClientFormState) -> R) -> R {
        let state = self.state.borrow();
        f(&state)
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(ClientFormState::is_loading)
    }

    pub fn is_form_invalid(&self) -> bool {
        self.with_state(ClientFormState::is_form_invalid)
    }

    fn update<R>(&self, f: impl FnOnce(&mut ClientFormState) -> R) -> R {
        let result = f(&mut *self.state.borrow_mut());
        if let Some(observer) = &self.observer {
            observer();
        }
        result
    }

    /// User typed into a field
    pub fn input(&self, field: &str, value: Value) {
        self.update(|s| s.form_mut().input(field, value));
    }

    /// User left a field
    pub fn touch(&self, field: &str) {
        self.update(|s| s.form_mut().touch(field));
    }

    pub fn toggle_tag(&self, tag: &Tag) -> TagToggle {
        let toggle = self.update(|s| s.toggle_tag(tag));
        debug!(tag_id = tag.id, ?toggle, "toggled client tag");
        toggle
    }

    /// Fetch the client (when `uuid` is given) and the tag catalog
    ///
    /// Both requests run concurrently; the loading flag stays up until both
    /// have answered. Failures leave the form at its defaults.
    pub async fn load_all(&self, uuid: Option<&str>) {
        self.update(|s| s.set_loading(true));

        let uuid = uuid.filter(|u| !u.is_empty());
        let client_request = async {
            match uuid {
                Some(uuid) => Some(self.clients.get_client(uuid).await),
                None => None,
            }
        };
        let (client, catalog) = futures::join!(client_request, self.tags.list_tags());

        match client {
            Some(Ok(response)) => {
                let status = response.status.clone();
                if !self.update(|s| s.apply_client_response(response)) {
                    debug!(uuid, %status, "client not loaded");
                }
            }
            Some(Err(err)) => warn!(uuid, error = %err, "loading client failed"),
            None => {}
        }

        match catalog {
            Ok(response) => {
                let kept = self.update(|s| s.apply_tags_response(response));
                debug!(kept, "loaded active tags");
            }
            Err(err) => warn!(error = %err, "loading tags failed"),
        }

        self.update(|s| s.set_loading(false));
    }

    /// Validate and send the form
    ///
    /// An invalid form raises the invalid flag, waits out the configured delay,
    /// clears the flag and returns without touching the backend.
    pub async fn submit(&self) -> SubmitOutcome {
        let client = match self.update(|s| s.prepare_submission()) {
            Ok(client) => client,
            Err(FormError::Invalid(violations)) => {
                debug!(fields = violations.len(), "client form invalid, submit blocked");
                self.delay.sleep(self.settings.invalid_flash()).await;
                self.update(|s| s.clear_invalid());
                return SubmitOutcome::Rejected(FormError::Invalid(violations));
            }
            Err(err) => {
                warn!(error = %err, "client form produced no payload");
                self.notifier.notify(Notification::client_save_failed());
                return SubmitOutcome::Rejected(err);
            }
        };

        let result = match self.clients.save_client(&client).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => Err(ApiError::Rejected(
                response.message.unwrap_or(response.status),
            )),
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                let (notification, intents) = self.update(|s| s.complete_submission(&self.settings));
                info!(id = ?client.id, "client saved");
                self.notifier.notify(notification);
                SubmitOutcome::Saved(intents)
            }
            Err(err) => {
                warn!(id = ?client.id, error = %err, "saving client failed");
                self.notifier.notify(Notification::client_save_failed());
                SubmitOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use serde_json::json;

    use crate::client_form::{client_form_config, fields};
    use crate::error::ApiResult;
    use crate::models::{ApiResponse, Client, ClientTag};
    use crate::notification::NotificationKind;

    #[derive(Default)]
    struct FakeClients {
        stored: Option<Client>,
        fail_save: bool,
        reject_save: bool,
        offline: bool,
        fetched: RefCell<Vec<String>>,
        saved: RefCell<Vec<Client>>,
    }

    #[async_trait(?Send)]
    impl ClientApi for FakeClients {
        async fn get_client(&self, uuid: &str) -> ApiResult<ApiResponse<Client>> {
            self.fetched.borrow_mut().push(uuid.to_string());
            if self.offline {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(match &self.stored {
                Some(client) if client.uuid.as_deref() == Some(uuid) => ApiResponse::success(client.clone()),
                _ => ApiResponse::failure("NOT_FOUND", "no such client"),
            })
        }

        async fn save_client(&self, client: &Client) -> ApiResult<ApiResponse<Client>> {
            self.saved.borrow_mut().push(client.clone());
            if self.fail_save {
                return Err(ApiError::Status(500));
            }
            if self.reject_save {
                return Ok(ApiResponse::failure("DUPLICATE", "email already registered"));
            }
            Ok(ApiResponse::success(client.clone()))
        }
    }

    #[derive(Default)]
    struct FakeTags {
        catalog: Vec<Tag>,
        offline: bool,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl TagApi for FakeTags {
        async fn list_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.offline {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(ApiResponse::success(self.catalog.clone()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        seen: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.borrow_mut().push(notification);
        }
    }

    #[derive(Default)]
    struct GatedDelay {
        requested: RefCell<Vec<Duration>>,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl Delay for GatedDelay {
        async fn sleep(&self, duration: Duration) {
            self.requested.borrow_mut().push(duration);
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
    }

    struct Harness {
        controller: ClientFormController,
        clients: Rc<FakeClients>,
        notifier: Rc<RecordingNotifier>,
        delay: Rc<GatedDelay>,
        changes: Rc<Cell<u32>>,
    }

    fn harness(clients: FakeClients, tags: FakeTags) -> Harness {
        let clients = Rc::new(clients);
        let notifier = Rc::new(RecordingNotifier::default());
        let delay = Rc::new(GatedDelay::default());
        let changes = Rc::new(Cell::new(0));
        let counter = changes.clone();
        let controller = ClientFormController::new(
            client_form_config(),
            FormSettings::default(),
            clients.clone(),
            Rc::new(tags),
            notifier.clone(),
            delay.clone(),
        )
        .with_observer(move || counter.set(counter.get() + 1));
        Harness {
            controller,
            clients,
            notifier,
            delay,
            changes,
        }
    }

    fn stored_client() -> Client {
        Client {
            id: Some(10),
            uuid: Some("abc-123".to_string()),
            name: "Carlos Dias".to_string(),
            email: "carlos@example.com".to_string(),
            active: true,
            client_tags: vec![ClientTag::new(1, Some(10))],
        }
    }

    fn catalog() -> Vec<Tag> {
        vec![
            Tag::new(1, "vip", true),
            Tag::new(2, "archived", false),
            Tag::new(3, "wholesale", true),
        ]
    }

    #[tokio::test]
    async fn test_load_new_client_fetches_tags_only() {
        let h = harness(
            FakeClients::default(),
            FakeTags {
                catalog: catalog(),
                ..Default::default()
            },
        );
        h.controller.load_all(None).await;

        assert!(h.clients.fetched.borrow().is_empty());
        let ids: Vec<_> = h.controller.with_state(|s| s.tags().iter().map(|t| t.id).collect());
        assert_eq!(ids, [1, 3]);
        assert!(!h.controller.is_loading());
    }

    #[tokio::test]
    async fn test_empty_uuid_is_treated_as_new_client() {
        let h = harness(FakeClients::default(), FakeTags::default());
        h.controller.load_all(Some("")).await;
        assert!(h.clients.fetched.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_load_existing_client_patches_form() {
        let h = harness(
            FakeClients {
                stored: Some(stored_client()),
                ..Default::default()
            },
            FakeTags::default(),
        );
        h.controller.load_all(Some("abc-123")).await;

        h.controller.with_state(|s| {
            assert_eq!(s.form().text(fields::NAME), "Carlos Dias");
            assert_eq!(s.form().value(fields::ID), Some(&json!(10)));
            assert!(s.has_tag(1));
            assert!(s.is_editing());
        });
    }

    #[tokio::test]
    async fn test_load_unknown_client_keeps_defaults() {
        let h = harness(
            FakeClients {
                stored: Some(stored_client()),
                ..Default::default()
            },
            FakeTags::default(),
        );
        h.controller.load_all(Some("other")).await;

        assert_eq!(h.clients.fetched.borrow().as_slice(), ["other".to_string()]);
        h.controller.with_state(|s| {
            assert_eq!(s.form().values(), &client_form_config().initial_values());
            assert!(!s.is_editing());
        });
    }

    #[tokio::test]
    async fn test_load_transport_errors_leave_defaults() {
        let h = harness(
            FakeClients {
                stored: Some(stored_client()),
                offline: true,
                ..Default::default()
            },
            FakeTags {
                catalog: catalog(),
                offline: true,
                ..Default::default()
            },
        );
        h.controller.load_all(Some("abc-123")).await;

        assert_eq!(h.clients.fetched.borrow().as_slice(), ["abc-123".to_string()]);
        assert!(!h.controller.is_loading());
        h.controller.with_state(|s| {
            assert_eq!(s.form().values(), &client_form_config().initial_values());
            assert!(s.tags().is_empty());
            assert!(!s.is_editing());
        });
        assert!(h.notifier.seen.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_loading_flag_tracks_in_flight_requests() {
        let (release, gate) = oneshot::channel();
        let h = harness(
            FakeClients::default(),
            FakeTags {
                catalog: catalog(),
                gate: RefCell::new(Some(gate)),
                ..Default::default()
            },
        );

        let mut load = Box::pin(h.controller.load_all(None));
        assert!(futures::poll!(load.as_mut()).is_pending());
        assert!(h.controller.is_loading());

        release.send(()).unwrap();
        load.await;
        assert!(!h.controller.is_loading());
        assert_eq!(h.controller.with_state(|s| s.tags().len()), 2);
    }

    #[tokio::test]
    async fn test_invalid_submit_skips_backend_and_flag_expires() {
        let h = harness(FakeClients::default(), FakeTags::default());
        let (release, gate) = oneshot::channel();
        *h.delay.gate.borrow_mut() = Some(gate);
        h.controller.input(fields::NAME, json!("Ana Lima"));

        let mut submit = Box::pin(h.controller.submit());
        assert!(futures::poll!(submit.as_mut()).is_pending());
        assert!(h.controller.is_form_invalid());

        release.send(()).unwrap();
        let outcome = submit.await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::Invalid(_))));
        assert!(!h.controller.is_form_invalid());
        assert!(h.clients.saved.borrow().is_empty());
        assert!(h.notifier.seen.borrow().is_empty());
        assert_eq!(h.delay.requested.borrow().as_slice(), [Duration::from_secs(3)]);
    }

    #[tokio::test]
    async fn test_create_success() {
        let h = harness(FakeClients::default(), FakeTags::default());
        h.controller.input(fields::NAME, json!("Ana Lima"));
        h.controller.input(fields::EMAIL, json!("ana@example.com"));
        h.controller.toggle_tag(&Tag::new(3, "wholesale", true));

        let outcome = h.controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Saved([HostIntent::SetUuid(None), HostIntent::SetOption(1)])
        );
        let saved = h.clients.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].client_tags, vec![ClientTag::new(3, None)]);

        let seen = h.notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Success);
        assert!(seen[0].message.contains("registered"));
        h.controller.with_state(|s| {
            assert!(s.form().is_pristine());
            assert_eq!(s.form().text(fields::EMAIL), "");
        });
    }

    #[tokio::test]
    async fn test_update_success_wording() {
        let h = harness(
            FakeClients {
                stored: Some(stored_client()),
                ..Default::default()
            },
            FakeTags::default(),
        );
        h.controller.load_all(Some("abc-123")).await;
        h.controller.submit().await;

        assert_eq!(h.clients.saved.borrow()[0].id, Some(10));
        assert!(h.notifier.seen.borrow()[0].message.contains("updated"));
    }

    #[tokio::test]
    async fn test_save_failure_keeps_input() {
        let h = harness(
            FakeClients {
                fail_save: true,
                ..Default::default()
            },
            FakeTags::default(),
        );
        h.controller.input(fields::NAME, json!("Ana Lima"));
        h.controller.input(fields::EMAIL, json!("ana@example.com"));

        let outcome = h.controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(ApiError::Status(500)));
        assert_eq!(h.notifier.seen.borrow()[0].kind, NotificationKind::Error);
        h.controller.with_state(|s| {
            assert_eq!(s.form().text(fields::NAME), "Ana Lima");
            assert!(s.form().is_dirty());
        });
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_failed_save() {
        let h = harness(
            FakeClients {
                reject_save: true,
                ..Default::default()
            },
            FakeTags::default(),
        );
        h.controller.input(fields::NAME, json!("Ana Lima"));
        h.controller.input(fields::EMAIL, json!("ana@example.com"));
        h.controller.toggle_tag(&Tag::new(3, "wholesale", true));

        let outcome = h.controller.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ApiError::Rejected("email already registered".to_string()))
        );
        assert_eq!(h.clients.saved.borrow().len(), 1);
        let seen = h.notifier.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Error);
        h.controller.with_state(|s| {
            assert_eq!(s.form().text(fields::NAME), "Ana Lima");
            assert_eq!(s.form().text(fields::EMAIL), "ana@example.com");
            assert!(s.form().is_dirty());
            assert!(s.has_tag(3));
        });
    }

    #[tokio::test]
    async fn test_observer_runs_on_every_change() {
        let h = harness(FakeClients::default(), FakeTags::default());
        h.controller.input(fields::NAME, json!("A"));
        h.controller.touch(fields::NAME);
        h.controller.toggle_tag(&Tag::new(1, "vip", true));
        assert_eq!(h.changes.get(), 3);
    }
}
