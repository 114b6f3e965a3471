//! Form Settings
//!
//! Tunables read from the application config file.

use std::time::Duration;

use serde::Deserialize;

/// Behaviour knobs for the client form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// How long the invalid-form banner stays up, in milliseconds
    pub invalid_flash_ms: u64,
    /// View mode the host switches to after a save
    pub list_view_option: i32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            invalid_flash_ms: 3_000,
            list_view_option: 1,
        }
    }
}

impl FormSettings {
    pub fn invalid_flash(&self) -> Duration {
        Duration::from_millis(self.invalid_flash_ms)
    }
}
