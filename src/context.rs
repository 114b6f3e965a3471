//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use client_form_core::Notification;

use crate::config::AppConfig;

/// View mode showing the client launcher
pub const VIEW_LIST: i32 = 1;
/// View mode showing the client form
pub const VIEW_FORM: i32 = 2;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Current view mode - read
    pub option: ReadSignal<i32>,
    /// Current view mode - write
    set_option: WriteSignal<i32>,
    /// Client being edited (None = new client) - read
    pub uuid: ReadSignal<Option<String>>,
    /// Client being edited (None = new client) - write
    set_uuid: WriteSignal<Option<String>>,
    /// Notification currently shown in the alert dialog
    pub notice: RwSignal<Option<Notification>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        option: (ReadSignal<i32>, WriteSignal<i32>),
        uuid: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        notice: RwSignal<Option<Notification>>,
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            option: option.0,
            set_option: option.1,
            uuid: uuid.0,
            set_uuid: uuid.1,
            notice,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn set_option(&self, option: i32) {
        self.set_option.set(option);
    }

    pub fn set_uuid(&self, uuid: Option<String>) {
        self.set_uuid.set(uuid);
    }

    /// Switch to the form, editing `uuid` or creating a new client
    pub fn open_form(&self, uuid: Option<String>) {
        self.set_uuid(uuid);
        self.set_option(VIEW_FORM);
    }
}
