use anyhow::{bail, Context, Result};
use dialoguer::console::Term;
use dialoguer::Select;
use tracing::info;

use fillers_core::{FillerError, FillerListScraper, HttpClient, SeriesMatch, Show, TvdbClient};

use crate::config::LookupSettings;

/// A looked-up show with the title to print above its report
#[derive(Debug)]
pub struct LookedUpShow {
    pub title: String,
    pub show: Show,
}

/// Build a show from the filler list and TVDB.
///
/// The filler scrape runs as its own task while the TVDB lookup (including
/// the interactive pick) proceeds here. The title comes from the filler-list
/// page heading, falling back to the chosen TVDB series name.
pub async fn look_for(show_name: &str, settings: &LookupSettings) -> Result<LookedUpShow> {
    let http = HttpClient::new()?;

    let scraper = FillerListScraper::with_client(http.clone(), settings.filler_list_url.clone());
    let name = show_name.to_string();
    let page_task = tokio::spawn(async move { scraper.fetch_page(&name).await });

    let mut tvdb = TvdbClient::with_client(http, settings.tvdb.clone());
    let (series_name, counts) = match fetch_seasons(&mut tvdb, show_name, settings.pick).await {
        Ok(found) => found,
        Err(e) => {
            page_task.abort();
            return Err(e);
        }
    };

    let page = page_task
        .await
        .context("filler list task failed")?
        .with_context(|| format!("fetching filler list for '{show_name}'"))?;

    info!(seasons = counts.len(), filler_runs = page.fillers.len(), "lookup complete");
    Ok(LookedUpShow {
        title: page.title.unwrap_or(series_name),
        show: Show::new(counts, page.fillers),
    })
}

/// Search TVDB, settle on one series and read its season sizes.
///
/// Returns the chosen series name along with the episode counts.
async fn fetch_seasons(
    tvdb: &mut TvdbClient,
    show_name: &str,
    pick: Option<usize>,
) -> Result<(String, Vec<u32>)> {
    let matches = tvdb
        .search_series(show_name)
        .await
        .with_context(|| format!("searching TheTVDB for '{show_name}'"))?;

    if matches.is_empty() {
        return Err(FillerError::NoResults(show_name.to_string()).into());
    }

    let index = match select_index(matches.len(), pick)? {
        Some(index) => index,
        None => prompt_for_series(&matches).await?,
    };
    let chosen = &matches[index];
    info!(tvdb_id = %chosen.tvdb_id, name = %chosen.name, "selected series");

    let counts = tvdb
        .season_episode_counts(&chosen.tvdb_id)
        .await
        .with_context(|| format!("reading seasons of '{}'", chosen.name))?;
    Ok((chosen.name.clone(), counts))
}

/// Resolve the search result to use without asking, if possible.
///
/// `pick` is 1-based. Returns `None` when the user has to choose.
fn select_index(len: usize, pick: Option<usize>) -> Result<Option<usize>> {
    match pick {
        Some(n) if n >= 1 && n <= len => Ok(Some(n - 1)),
        Some(n) => bail!("--pick {n} is out of range (1-{len})"),
        None if len == 1 => Ok(Some(0)),
        None => Ok(None),
    }
}

async fn prompt_for_series(matches: &[SeriesMatch]) -> Result<usize> {
    let labels: Vec<String> = matches.iter().map(SeriesMatch::label).collect();

    tokio::task::spawn_blocking(move || {
        Select::new()
            .with_prompt("Pick a show")
            .items(&labels)
            .default(0)
            .interact_on(&Term::stderr())
    })
    .await
    .context("selection prompt failed")?
    .context("reading selection")
}
