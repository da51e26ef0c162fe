//! Filler-list page parser
//!
//! A show page on animefillerlist.com lists every episode in a table, one
//! row per episode. The first cell holds the absolute episode number and
//! the row names the episode type ("Manga Canon", "Filler", "Mixed
//! Canon/Filler", "Anime Canon"). A row that mentions "Canon" anywhere is
//! not filler; every other numbered row is.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::error::{FillerError, Result};

/// Turn a show name into the slug used in filler-list URLs.
///
/// ASCII letters and digits are kept (lowercased); every other run of
/// characters becomes a single `-`.
///
/// # Examples
/// ```
/// use fillers_core::parser::show_slug;
///
/// assert_eq!(show_slug("Naruto Shippuden"), "naruto-shippuden");
/// assert_eq!(show_slug("  Hunter x Hunter (2011) "), "hunter-x-hunter-2011");
/// ```
pub fn show_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Parse the absolute numbers of filler episodes from a show page.
///
/// # Arguments
/// * `html` - Raw HTML content of the show page
///
/// # Returns
/// * `Ok(Vec<u32>)` with filler episode numbers in page order
/// * `Err(FillerError::ElementNotFound)` if the page has no episode table
pub fn parse_filler_episodes(html: &str) -> Result<Vec<u32>> {
    let document = Html::parse_document(html);

    let row_selector = Selector::parse("table tbody tr")
        .map_err(|e| FillerError::ParseError(format!("Invalid selector: {:?}", e)))?;
    let cell_selector = Selector::parse("td:first-child")
        .map_err(|e| FillerError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let mut rows = document.select(&row_selector).peekable();
    if rows.peek().is_none() {
        return Err(FillerError::ElementNotFound("table tbody tr".to_string()));
    }

    let mut fillers = Vec::new();
    for row in rows {
        let Some(cell) = row.select(&cell_selector).next() else {
            continue;
        };

        let row_text = row.text().collect::<String>();
        if row_text.contains("Canon") {
            continue;
        }

        let cell_text = cell.text().collect::<String>();
        match cell_text.trim().parse::<u32>() {
            Ok(number) => fillers.push(number),
            Err(_) => warn!(cell = cell_text.trim(), "skipping row without an episode number"),
        }
    }

    debug!(count = fillers.len(), "parsed filler episodes");
    Ok(fillers)
}

/// Extract the show title from the page heading, if present.
pub fn parse_show_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1").ok()?;
    let heading = document.select(&selector).next()?;

    let title = heading.text().collect::<String>().trim().to_string();
    // Headings read "<Show> Filler List"
    let title = title
        .strip_suffix("Filler List")
        .map(|t| t.trim_end().to_string())
        .unwrap_or(title);

    (!title.is_empty()).then_some(title)
}
