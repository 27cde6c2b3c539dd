//! Fetch-and-decode of the application info document.

use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{InfoResponse, INFO_PATH};
use tracing::{debug, warn};
use url::Url;

pub mod error;

pub use error::FetchError;

/// Statuses at or above this are application-level failures.
const FIRST_ERROR_STATUS: u16 = 400;

/// Source of the info document. The HTTP implementation is [`HttpInfoSource`].
#[async_trait]
pub trait InfoSource: Send + Sync {
    async fn fetch_info(&self, endpoint: &Url) -> Result<InfoResponse, FetchError>;
}

/// Resolves [`INFO_PATH`] against `base_url` the way a page-relative link would.
pub fn resolve_info_endpoint(base_url: &str) -> Result<Url, FetchError> {
    let base = Url::parse(base_url.trim())
        .map_err(|err| FetchError::Endpoint(format!("'{base_url}': {err}")))?;
    if base.cannot_be_a_base() {
        return Err(FetchError::Endpoint(format!(
            "'{base_url}' cannot be used as a base url"
        )));
    }
    base.join(INFO_PATH)
        .map_err(|err| FetchError::Endpoint(format!("'{base_url}' + '{INFO_PATH}': {err}")))
}

#[derive(Debug, Clone, Default)]
pub struct HttpInfoSource {
    http: Client,
}

impl HttpInfoSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InfoSource for HttpInfoSource {
    async fn fetch_info(&self, endpoint: &Url) -> Result<InfoResponse, FetchError> {
        let response = self
            .http
            .get(endpoint.clone())
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        if status >= FIRST_ERROR_STATUS {
            warn!(endpoint = %endpoint, status, "info endpoint returned error status");
            return Err(FetchError::HttpStatus { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let info: InfoResponse =
            serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))?;
        debug!(endpoint = %endpoint, app_name = %info.app_name, "decoded info response");
        Ok(info)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
