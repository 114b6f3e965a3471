//! Collaborator Traits
//!
//! Abstract interfaces the controller is constructed with. Implementations
//! may talk REST or stay in memory.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{ApiResponse, Client, Tag};
use crate::notification::Notification;

/// Client endpoints of the backend
#[async_trait(?Send)]
pub trait ClientApi {
    /// Fetch a client by its external identifier
    async fn get_client(&self, uuid: &str) -> ApiResult<ApiResponse<Client>>;

    /// Create the client, or update it when it carries an id
    async fn save_client(&self, client: &Client) -> ApiResult<ApiResponse<Client>>;
}

/// Tag endpoints of the backend
#[async_trait(?Send)]
pub trait TagApi {
    /// Full tag catalog, active and inactive
    async fn list_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>>;
}

/// Shows notifications to the user
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Timer used for the transient invalid flag
#[async_trait(?Send)]
pub trait Delay {
    async fn sleep(&self, duration: Duration);
}
