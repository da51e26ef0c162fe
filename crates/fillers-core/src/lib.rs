//! Filler Guide Core Library
//!
//! This crate works out which episodes of a show to skip, season by season,
//! given the show's season structure and its filler episodes.
//!
//! # Features
//! - Compress episode sets into singletons and half-open spans, and back
//! - Format episode lists as `"2-4, 7"`
//! - Derive per-season instructions: "skip season", "no filler" or a range
//! - Render the result as a console or markdown table
//! - Scrape filler episodes from animefillerlist.com
//! - Look up season episode counts on TheTVDB

pub mod client;
pub mod error;
pub mod parser;
pub mod ranges;
pub mod report;
pub mod scraper;
pub mod show;
pub mod tvdb;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, HttpClient};
pub use error::{FillerError, Result};
pub use ranges::{compress, decompress, format_ranges, CompressedRange};
pub use report::{Report, ReportRow};
pub use self::scraper::FillerListScraper;
pub use show::{FillerInstruction, Season, Show};
pub use tvdb::{TvdbClient, TvdbConfig};
pub use types::{FillerPage, SeriesMatch, ShowDefinition};
