//! HTML parsers for filler-list pages
//!
//! - `filler_list`: parse a show's episode table into filler episode numbers

pub mod filler_list;

// Re-export main parsing functions
pub use filler_list::{parse_filler_episodes, parse_show_title, show_slug};
