use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use fillers_core::scraper::FILLER_LIST_BASE_URL;
use fillers_core::tvdb::TVDB_API_BASE;

#[derive(Debug, Parser)]
#[command(name = "fillers")]
#[command(about = "Format filler episode data per season", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to save the filler data markdown
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// TheTVDB API key
    #[arg(long, env = "TVDB_API_TOKEN", hide_env_values = true, global = true)]
    pub tvdb_token: Option<String>,

    /// TheTVDB API root
    #[arg(long, env = "TVDB_API_URL", default_value = TVDB_API_BASE, global = true)]
    pub tvdb_url: String,

    /// Filler list site root
    #[arg(long, env = "FILLER_LIST_URL", default_value = FILLER_LIST_BASE_URL, global = true)]
    pub filler_list_url: String,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Scrape fillers and look the season structure up on TheTVDB
    Lookup {
        /// Show name, e.g. "Naruto Shippuden"
        show: String,

        /// Pick the Nth search result instead of asking
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Read a show definition (seasons + fillers) from a TOML file
    File {
        /// Path to the TOML file
        path: PathBuf,
    },
}
