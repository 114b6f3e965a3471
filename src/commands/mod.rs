//! Backend Bindings
//!
//! REST wrappers for the backend, organized by domain. `HttpBackend`
//! implements the collaborator traits the client form controller expects.

mod client;
mod tag;

use serde::de::DeserializeOwned;

use client_form_core::{ApiError, ApiResult};

use crate::config::ApiConfig;

/// REST client for the client and tag endpoints
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Reject non-2xx answers, then decode the JSON body
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
