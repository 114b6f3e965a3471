//! Client Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};

/// Status marker the backend uses for a successful call
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// A customer record with its tag associations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// Database id, absent until persisted
    pub id: Option<u64>,
    /// External unique identifier
    pub uuid: Option<String>,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// Tag associations, at most one per tag id
    pub client_tags: Vec<ClientTag>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            id: None,
            uuid: None,
            name: String::new(),
            email: String::new(),
            active: true,
            client_tags: Vec::new(),
        }
    }
}

impl Client {
    /// Whether the client already exists on the backend
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Membership of a client in a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTag {
    pub tag_id: u64,
    pub client_id: Option<u64>,
}

impl ClientTag {
    pub fn new(tag_id: u64, client_id: Option<u64>) -> Self {
        Self { tag_id, client_id }
    }
}

/// A tag that clients can be attached to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub active: bool,
}

impl Tag {
    pub fn new(id: u64, name: impl Into<String>, active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            active,
        }
    }
}

/// Response envelope returned by every backend call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Payload of a successful response, `None` otherwise
    pub fn into_success(self) -> Option<T> {
        if self.is_success() {
            self.data
        } else {
            None
        }
    }
}
