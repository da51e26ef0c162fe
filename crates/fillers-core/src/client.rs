//! Shared HTTP client
//!
//! Thin wrapper around `reqwest` used by both the filler-list scraper and
//! the TVDB client. It maps HTTP status codes onto [`FillerError`] and does
//! not retry: a failed request is reported as-is.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{FillerError, Result};

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client returning page text or decoded JSON
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the body of `url` as text.
    ///
    /// # Errors
    /// - `FillerError::NotFound` - Server returned 404
    /// - `FillerError::Unauthorized` - Server returned 401
    /// - `FillerError::HttpError` - Network error or any other 4xx/5xx status
    /// - `FillerError::UnexpectedStatus` - Any other non-2xx status, e.g. 304
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let response = check_status(response, url)?;
        Ok(response.text().await?)
    }

    /// GET `url` with query parameters and an optional bearer token, decoding
    /// the JSON body.
    pub async fn get_json<T>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        bearer: Option<&str>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url, ?query, "GET json");
        let mut request = self.client.get(url).query(query);
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        let response = check_status(request.send().await?, url)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST a JSON body to `url`, decoding the JSON response.
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url, "POST json");
        let response = self.client.post(url).json(body).send().await?;
        let response = check_status(response, url)?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn check_status(response: reqwest::Response, url: &str) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    // No retry on any status
    match status {
        reqwest::StatusCode::NOT_FOUND => Err(FillerError::NotFound(url.to_string())),
        reqwest::StatusCode::UNAUTHORIZED => Err(FillerError::Unauthorized(url.to_string())),
        _ => match response.error_for_status() {
            Err(e) => Err(FillerError::HttpError(e)),
            // 1xx and unfollowed 3xx carry no page to parse
            Ok(_) => Err(FillerError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        },
    }
}
