//! Filler-list scraper
//!
//! Combines the HTTP client with the filler-list parser: given a show name,
//! fetch its page and return the filler episodes in compressed form.

use tracing::info;

use crate::client::HttpClient;
use crate::error::{FillerError, Result};
use crate::parser::{parse_filler_episodes, parse_show_title, show_slug};
use crate::ranges::{compress, CompressedRange};
use crate::types::FillerPage;

/// Base URL of the filler list site
pub const FILLER_LIST_BASE_URL: &str = "https://www.animefillerlist.com";

/// Scraper for animefillerlist.com show pages
///
/// # Example
/// ```no_run
/// use fillers_core::FillerListScraper;
///
/// # async fn example() -> Result<(), fillers_core::FillerError> {
/// let scraper = FillerListScraper::new()?;
/// let fillers = scraper.fetch_fillers("Naruto").await?;
/// println!("{} filler runs", fillers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FillerListScraper {
    client: HttpClient,
    base_url: String,
}

impl FillerListScraper {
    /// Create a new scraper against the public site with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(HttpClient::new()?, FILLER_LIST_BASE_URL))
    }

    /// Create a scraper with a custom client and base URL.
    ///
    /// This is useful for testing or when the site is mirrored elsewhere.
    pub fn with_client(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// URL of the page listing episodes of `show_name`.
    pub fn show_url(&self, show_name: &str) -> String {
        format!("{}/shows/{}", self.base_url, show_slug(show_name))
    }

    /// Fetch a show's page and return its title and compressed fillers.
    ///
    /// # Returns
    /// * `Ok(FillerPage)` with the heading title (if any) and filler episodes
    /// * `Err(FillerError::InvalidQuery)` if the name has no usable characters
    /// * `Err(FillerError::NotFound)` if the site has no page for the show
    pub async fn fetch_page(&self, show_name: &str) -> Result<FillerPage> {
        if show_slug(show_name).is_empty() {
            return Err(FillerError::InvalidQuery(
                "Show name cannot be empty".to_string(),
            ));
        }

        let url = self.show_url(show_name);
        let html = self.client.fetch_text(&url).await?;
        let episodes = parse_filler_episodes(&html)?;
        let title = parse_show_title(&html);

        info!(
            show = show_name,
            title = title.as_deref().unwrap_or(""),
            fillers = episodes.len(),
            "fetched filler list"
        );
        Ok(FillerPage {
            title,
            fillers: compress(episodes),
        })
    }

    /// Fetch the filler episodes of a show, compressed.
    ///
    /// Same errors as [`FillerListScraper::fetch_page`].
    pub async fn fetch_fillers(&self, show_name: &str) -> Result<Vec<CompressedRange>> {
        Ok(self.fetch_page(show_name).await?.fillers)
    }
}
