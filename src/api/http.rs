//! Fetch-backed transport
//!
//! reqwest on wasm32 goes through the browser's fetch API.

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::Client;

use super::{ApiRequest, ApiResponse, Transport};
use crate::config::RestConfig;
use crate::error::{ApiError, ApiResult};

pub struct HttpTransport {
    client: Client,
    config: RestConfig,
}

impl HttpTransport {
    pub fn new(config: RestConfig) -> Self {
        Self { client: Client::new(), config }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.endpoint(&request.path)?;
        let mut builder = self
            .client
            .request(request.method, url)
            .header(CACHE_CONTROL, "no-cache");
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
