//! REST Client
//!
//! Uniform CRUD calls against `rest/<resource>`, generic over the resource
//! and over how requests are actually carried.

mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub use http::HttpTransport;
pub use reqwest::Method;

use crate::config::RestConfig;
use crate::error::{ApiError, ApiResult};
use crate::resources::Resource;

/// A request relative to the REST root
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// e.g. `party` or `party/3`
    pub path: String,
    pub body: Option<String>,
}

/// Raw response, whatever its status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries requests to the backend.
///
/// Only transport-level failures are errors here; status handling is left to
/// [`Api`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// CRUD client over a [`Transport`]
pub struct Api<T> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /<resource>`
    pub async fn list<R: Resource>(&self) -> ApiResult<Vec<R::Row>> {
        let body = self.call(Method::GET, R::PATH.to_string(), None).await?;
        decode(&body)
    }

    /// `GET /<resource>/{id}`
    pub async fn read<R: Resource>(&self, id: u32) -> ApiResult<R::Record> {
        let body = self.call(Method::GET, item_path::<R>(id), None).await?;
        decode(&body)
    }

    /// `POST /<resource>`
    pub async fn create<R: Resource>(&self, record: &R::Record) -> ApiResult<R::Record> {
        let body = self.call(Method::POST, R::PATH.to_string(), Some(encode(record)?)).await?;
        decode(&body)
    }

    /// `PUT /<resource>`
    pub async fn update<R: Resource>(&self, record: &R::Record) -> ApiResult<R::Record> {
        let body = self.call(Method::PUT, R::PATH.to_string(), Some(encode(record)?)).await?;
        decode(&body)
    }

    /// `DELETE /<resource>/{id}`; the acknowledgement body is ignored
    pub async fn delete<R: Resource>(&self, id: u32) -> ApiResult<()> {
        self.call(Method::DELETE, item_path::<R>(id), None).await?;
        Ok(())
    }

    async fn call(&self, method: Method, path: String, body: Option<String>) -> ApiResult<String> {
        log::debug!("[API] {} {}", method, path);
        let response = self.transport.send(ApiRequest { method, path, body }).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(ApiError::from_status(response.status, response.body))
        }
    }
}

impl Api<HttpTransport> {
    /// Client for the page the app is running in.
    pub fn from_document() -> ApiResult<Self> {
        Ok(Self::new(HttpTransport::new(RestConfig::from_document()?)))
    }
}

fn item_path<R: Resource>(id: u32) -> String {
    format!("{}/{}", R::PATH, id)
}

fn encode<S: Serialize>(record: &S) -> ApiResult<String> {
    serde_json::to_string(record).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<D: DeserializeOwned>(body: &str) -> ApiResult<D> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
