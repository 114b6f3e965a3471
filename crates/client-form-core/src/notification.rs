//! Notifications and Host Intents
//!
//! What the form tells the user, and what it asks the embedding view to do.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A modal message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Confirmation after a save; wording depends on whether the client existed
    pub fn client_saved(was_persisted: bool) -> Self {
        let verb = if was_persisted { "updated" } else { "registered" };
        Self {
            kind: NotificationKind::Success,
            title: "Success".to_string(),
            message: format!("Client {} successfully", verb),
        }
    }

    pub fn client_save_failed() -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: "An error occurred while saving the client. Try again or contact support!"
                .to_string(),
        }
    }
}

/// Command for the host view after a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIntent {
    /// Replace the identifier of the client being edited
    SetUuid(Option<String>),
    /// Switch the host's view mode
    SetOption(i32),
}
