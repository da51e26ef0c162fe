//! TheTVDB v4 client
//!
//! Looks up the season structure of a series: search by name, then read
//! the aired-order seasons and count their episodes.

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::{debug, info};

use crate::client::HttpClient;
use crate::error::{FillerError, Result};
use crate::types::SeriesMatch;

/// Base URL of the TVDB v4 API
pub const TVDB_API_BASE: &str = "https://api4.thetvdb.com/v4";

/// Season type id of the aired (broadcast) order
const AIRED_ORDER_TYPE_ID: u32 = 1;

/// Configuration for [`TvdbClient`]
#[derive(Debug, Clone)]
pub struct TvdbConfig {
    /// API key exchanged for a bearer token on first use
    pub api_token: String,
    /// API root, without trailing slash
    pub base_url: String,
}

impl TvdbConfig {
    /// Configuration against the public API.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            base_url: TVDB_API_BASE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Deserialize)]
struct SeriesExtended {
    #[serde(default)]
    seasons: Option<Vec<SeasonRecord>>,
}

#[derive(Debug, Deserialize)]
struct SeasonRecord {
    id: u64,
    number: u32,
    #[serde(rename = "type")]
    kind: SeasonType,
}

#[derive(Debug, Deserialize)]
struct SeasonType {
    id: u32,
}

#[derive(Debug, Deserialize)]
struct SeasonExtended {
    #[serde(default)]
    episodes: Option<Vec<IgnoredAny>>,
}

/// Client for the subset of TVDB needed to count episodes per season
#[derive(Debug, Clone)]
pub struct TvdbClient {
    client: HttpClient,
    config: TvdbConfig,
    token: Option<String>,
}

impl TvdbClient {
    /// Create a client with its own HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: TvdbConfig) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?, config))
    }

    /// Create a client sharing an existing HTTP client.
    pub fn with_client(client: HttpClient, mut config: TvdbConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            client,
            config,
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Exchange the API key for a bearer token.
    ///
    /// # Errors
    /// `FillerError::Unauthorized` if TVDB rejects the key
    pub async fn login(&mut self) -> Result<()> {
        let body = serde_json::json!({ "apikey": self.config.api_token });
        let login: Envelope<LoginData> = self.client.post_json(&self.url("/login"), &body).await?;
        debug!("TVDB login succeeded");
        self.token = Some(login.data.token);
        Ok(())
    }

    async fn bearer(&mut self) -> Result<String> {
        if self.token.is_none() {
            self.login().await?;
        }
        self.token
            .clone()
            .ok_or_else(|| FillerError::Unauthorized("no TVDB token after login".to_string()))
    }

    /// Search TVDB for series matching `query`.
    ///
    /// # Errors
    /// `FillerError::InvalidQuery` if the query is empty or whitespace-only
    pub async fn search_series(&mut self, query: &str) -> Result<Vec<SeriesMatch>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FillerError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let token = self.bearer().await?;
        let results: Envelope<Vec<SeriesMatch>> = self
            .client
            .get_json(
                &self.url("/search"),
                &[("query", trimmed), ("type", "series")],
                Some(&token),
            )
            .await?;

        info!(query = trimmed, results = results.data.len(), "TVDB search");
        Ok(results.data)
    }

    /// Episode count of each aired-order season of a series, in season order.
    ///
    /// Specials (season 0) and alternative orderings are left out.
    pub async fn season_episode_counts(&mut self, tvdb_id: &str) -> Result<Vec<u32>> {
        let token = self.bearer().await?;
        let series: Envelope<SeriesExtended> = self
            .client
            .get_json(
                &self.url(&format!("/series/{}/extended", tvdb_id)),
                &[],
                Some(&token),
            )
            .await?;

        let mut seasons: Vec<SeasonRecord> = series
            .data
            .seasons
            .unwrap_or_default()
            .into_iter()
            .filter(|s| s.kind.id == AIRED_ORDER_TYPE_ID && s.number != 0)
            .collect();
        seasons.sort_by_key(|s| s.number);

        let mut counts = Vec::with_capacity(seasons.len());
        for season in &seasons {
            let extended: Envelope<SeasonExtended> = self
                .client
                .get_json(
                    &self.url(&format!("/seasons/{}/extended", season.id)),
                    &[],
                    Some(&token),
                )
                .await?;
            let count = extended.data.episodes.map_or(0, |e| e.len()) as u32;
            debug!(season = season.number, episodes = count, "TVDB season");
            counts.push(count);
        }

        info!(tvdb_id, seasons = counts.len(), "TVDB season structure");
        Ok(counts)
    }
}
