mod cli;
mod config;
mod lookup;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use config::LookupSettings;
use fillers_core::Report;

#[tokio::main]
async fn main() {
    // .env may supply flag values, so it is read before parsing
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "loaded .env");
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let (title, show) = match &cli.command {
        Command::Lookup { show, pick } => {
            let settings = LookupSettings::from_cli(&cli, *pick)?;
            let found = lookup::look_for(show, &settings).await?;
            (Some(found.title), found.show)
        }
        Command::File { path } => {
            let mut definition = config::read_show_definition(path)?;
            (definition.name.take(), definition.into_show())
        }
    };

    let mut report = Report::from_show(&show);
    if let Some(title) = title {
        report = report.with_title(title);
    }
    info!(title = report.title.as_deref(), seasons = report.rows.len(), "report ready");

    match cli.output.as_deref() {
        None => println!("{}", report.to_console()),
        Some(path) => {
            write_markdown(&report, path)?;
            println!("Filler data saved to {}", path.display());
        }
    }

    Ok(())
}

fn write_markdown(report: &Report, path: &Path) -> Result<()> {
    let mut markdown = report.to_markdown();
    markdown.push('\n');
    fs::write(path, markdown).with_context(|| format!("writing {}", path.display()))
}
