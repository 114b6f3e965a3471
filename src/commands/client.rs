//! Client Commands
//!
//! Fetch and save client records.

use async_trait::async_trait;
use tracing::debug;

use client_form_core::{ApiResponse, ApiResult, Client, ClientApi};

use super::{decode, transport, HttpBackend};

#[async_trait(?Send)]
impl ClientApi for HttpBackend {
    async fn get_client(&self, uuid: &str) -> ApiResult<ApiResponse<Client>> {
        debug!(uuid, "GET client");
        let response = self
            .http
            .get(self.url(&format!("clients/{}", uuid)))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    async fn save_client(&self, client: &Client) -> ApiResult<ApiResponse<Client>> {
        debug!(id = ?client.id, tags = client.client_tags.len(), "POST client");
        let response = self
            .http
            .post(self.url("clients"))
            .json(client)
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
