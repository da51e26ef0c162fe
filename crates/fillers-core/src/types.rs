//! Data types shared across the library
//!
//! Inputs the core consumes from outside: show definitions read from disk
//! and series candidates returned by a TVDB search.

use serde::{Deserialize, Serialize};

use crate::error::{FillerError, Result};
use crate::ranges::CompressedRange;
use crate::show::Show;

/// A show described by hand, e.g. in a TOML file:
///
/// ```toml
/// name = "Naruto"
/// seasons = [57, 43, 41, 42, 37]
/// fillers = [26, 97, [101, 107], [136, 221]]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowDefinition {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Episode count of each season, in order
    pub seasons: Vec<u32>,
    /// Filler episodes in absolute numbering, compressed
    #[serde(default)]
    pub fillers: Vec<CompressedRange>,
}

impl ShowDefinition {
    /// Parse a definition from TOML text.
    ///
    /// # Errors
    /// `FillerError::ParseError` if the text is not a valid definition.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| FillerError::ParseError(e.to_string()))
    }

    /// Build the show this definition describes.
    pub fn into_show(self) -> Show {
        Show::new(self.seasons, self.fillers)
    }
}

/// What a filler-list page yields: the show's title and its filler episodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerPage {
    /// Title from the page heading, if it has one
    pub title: Option<String>,
    /// Filler episodes in absolute numbering, compressed
    pub fillers: Vec<CompressedRange>,
}

/// One candidate returned by a TVDB series search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMatch {
    /// TVDB series identifier
    pub tvdb_id: String,
    /// Display name of the series
    pub name: String,
    /// First air date (e.g. "2002-10-03"), if known
    #[serde(default)]
    pub first_air_time: Option<String>,
}

impl SeriesMatch {
    /// Label shown when asking the user to pick a series.
    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.name,
            self.first_air_time.as_deref().unwrap_or("N/A")
        )
    }
}
