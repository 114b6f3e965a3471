//! Tag Commands
//!
//! Frontend binding for the tag catalog.

use async_trait::async_trait;

use client_form_core::{ApiResponse, ApiResult, Tag, TagApi};

use super::{decode, transport, HttpBackend};

#[async_trait(?Send)]
impl TagApi for HttpBackend {
    async fn list_tags(&self) -> ApiResult<ApiResponse<Vec<Tag>>> {
        let response = self
            .http
            .get(self.url("tags"))
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}
