//! HTTP client for the inventory REST API.
//!
//! Every request carries JSON headers; every failure is one of the three
//! [`ApiError`] kinds so callers can log the detail and surface a
//! notification without inspecting strings.

use contracts::inventory::EntityKind;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response; the body is kept as diagnostic text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (network, DNS, CORS).
    #[error("network error: {0}")]
    Transport(String),

    /// 2xx response whose body was empty or not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/{}", self.config.base_url, kind.collection())
    }

    pub fn item_url(&self, kind: EntityKind, id: u64) -> String {
        format!("{}/{}/{}", self.config.base_url, kind.collection(), id)
    }

    pub async fn get_list<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.collection_url(kind);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    pub async fn get_one<T: DeserializeOwned>(
        &self,
        kind: EntityKind,
        id: u64,
    ) -> Result<T, ApiError> {
        let url = self.item_url(kind, id);
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    pub async fn create(
        &self,
        kind: EntityKind,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.collection_url(kind);
        log::debug!("POST {}", url);
        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    pub async fn update(
        &self,
        kind: EntityKind,
        id: u64,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.item_url(kind, id);
        log::debug!("PUT {}", url);
        let response = Request::put(&url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Decode(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }

    /// DELETE does not decode the response body; many servers answer 204.
    pub async fn delete(&self, kind: EntityKind, id: u64) -> Result<(), ApiError> {
        let url = self.item_url(kind, id);
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !response.ok() {
            return Err(http_error(response).await);
        }
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(http_error(response).await);
    }
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Http { status, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("https://api.test/api"))
    }

    #[test]
    fn collection_url_uses_plural_segment() {
        assert_eq!(
            client().collection_url(EntityKind::Product),
            "https://api.test/api/productos"
        );
    }

    #[test]
    fn item_url_appends_id() {
        assert_eq!(
            client().item_url(EntityKind::User, 7),
            "https://api.test/api/usuarios/7"
        );
    }

    #[test]
    fn errors_carry_diagnostic_detail() {
        let e = ApiError::Http {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(e.to_string(), "HTTP 500: boom");
        assert!(ApiError::Decode("EOF".into()).to_string().contains("EOF"));
    }
}
