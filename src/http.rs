//! Shared HTTP client bound to the configured API origin.

use std::sync::Arc;

use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Payload of the backend `GET /health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// Whether the backend reached its graph database
    #[serde(default)]
    pub neo4j: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Cheap to clone; every clone targets the same origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClient {
    base_url: Arc<str>,
}

fn is_absolute_url(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = path.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    rest.starts_with("//")
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: Arc::from(config.base_url()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base origin.
    ///
    /// Absolute URLs are returned untouched. Relative paths are joined with a
    /// single `/`.
    pub fn url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        if path.is_empty() {
            return self.base_url.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;
        decode(&url, response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Encode {
                url: url.clone(),
                message: e.to_string(),
            })?
            .send()
            .await
            .map_err(|e| network_error(&url, &e))?;
        decode(&url, response).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }
}

fn network_error(url: &str, err: &gloo::net::Error) -> ApiError {
    ApiError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
