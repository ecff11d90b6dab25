//! REST client for the Lookbook API.
//!
//! Every request carries a `t=<millis>` query parameter so intermediaries
//! never serve a cached feed. Success bodies are unwrapped from their
//! `{ "data": ... }` envelope; failures are classified into [`ClientError`].

use std::time::Duration;

use lookbook_core::look::LookPayload;
use lookbook_core::product::Product;
use lookbook_core::types::ResourceId;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for one Lookbook API deployment.
#[derive(Debug, Clone)]
pub struct LookbookApi {
    client: reqwest::Client,
    api_url: String,
}

impl LookbookApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Reuse an existing [`reqwest::Client`] (and its connection pool).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /looks`. References are returned unnormalized.
    pub async fn list_looks(&self) -> Result<Vec<LookPayload>, ClientError> {
        self.get_data("/looks").await
    }

    /// `GET /looks/{id}`
    pub async fn get_look(&self, id: &ResourceId) -> Result<LookPayload, ClientError> {
        self.get_data(&format!("/looks/{id}")).await
    }

    /// `GET /products`
    pub async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        self.get_data("/products").await
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: &ResourceId) -> Result<Product, ClientError> {
        self.get_data(&format!("/products/{id}")).await
    }

    // ---- private helpers ----

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.api_url);
        let cache_buster = chrono::Utc::now().timestamp_millis();

        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(&[("t", cache_buster)])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let envelope = response
            .json::<DataEnvelope<T>>()
            .await
            .map_err(|e| ClientError::Transient(format!("Undecodable response from {path}: {e}")))?;
        Ok(envelope.data)
    }

    /// Map a non-2xx response onto the error taxonomy, using the server's
    /// `message` when the body carries one.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Transient(format!("HTTP {}: {message}", status.as_u16())),
        })
    }
}
