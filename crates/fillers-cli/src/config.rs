use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use fillers_core::{ShowDefinition, TvdbConfig};

use crate::cli::Cli;

/// Everything a lookup needs besides the show name
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub tvdb: TvdbConfig,
    pub filler_list_url: String,
    pub pick: Option<usize>,
}

impl LookupSettings {
    pub fn from_cli(cli: &Cli, pick: Option<usize>) -> Result<Self> {
        let Some(token) = cli.tvdb_token.clone().filter(|t| !t.trim().is_empty()) else {
            bail!(
                "TVDB API token not found. \
                 Set TVDB_API_TOKEN (environment or .env file) or pass --tvdb-token"
            );
        };

        Ok(Self {
            tvdb: TvdbConfig {
                api_token: token,
                base_url: cli.tvdb_url.clone(),
            },
            filler_list_url: cli.filler_list_url.clone(),
            pick,
        })
    }
}

/// Load variables from a `.env` file in the working directory or a parent.
///
/// Runs before logging is set up, so the caller logs the returned path.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv_outcome(dotenvy::dotenv())
}

fn dotenv_outcome(result: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Warning: failed to read .env: {e}");
            None
        }
    }
}

pub fn read_show_definition(path: &Path) -> Result<ShowDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading show definition {}", path.display()))?;
    ShowDefinition::from_toml_str(&text)
        .with_context(|| format!("parsing show definition {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("fillers-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_lookup_settings_from_cli() {
        let cli = Cli::try_parse_from([
            "fillers",
            "lookup",
            "Naruto",
            "--tvdb-token",
            "key",
            "--tvdb-url",
            "http://tvdb.test",
            "--filler-list-url",
            "http://fillers.test",
        ])
        .unwrap();

        let settings = LookupSettings::from_cli(&cli, Some(1)).unwrap();
        assert_eq!(settings.tvdb.api_token, "key");
        assert_eq!(settings.tvdb.base_url, "http://tvdb.test");
        assert_eq!(settings.filler_list_url, "http://fillers.test");
        assert_eq!(settings.pick, Some(1));
    }

    #[test]
    fn test_lookup_settings_blank_token() {
        let cli =
            Cli::try_parse_from(["fillers", "lookup", "Naruto", "--tvdb-token", "  "]).unwrap();
        let err = LookupSettings::from_cli(&cli, None).unwrap_err();
        assert!(err.to_string().contains("TVDB_API_TOKEN"));
    }

    #[test]
    fn test_dotenv_file_is_loaded() {
        let var = format!("FILLERS_TEST_DOTENV_{}", std::process::id());
        let path = temp_file("loaded.env", &format!("{var}=from-file\n"));

        let loaded = dotenv_outcome(dotenvy::from_path(&path).map(|()| path.clone()));
        let value = std::env::var(&var);
        fs::remove_file(&path).ok();

        assert_eq!(loaded, Some(path));
        assert_eq!(value.as_deref(), Ok("from-file"));
    }

    #[test]
    fn test_dotenv_missing_file_is_not_reported() {
        let missing = Path::new("/definitely/not/here.env");
        let result = dotenvy::from_path(missing).map(|()| missing.to_path_buf());
        assert_eq!(dotenv_outcome(result), None);
    }

    #[test]
    fn test_read_show_definition() {
        let path = temp_file("ok.toml", "seasons = [5, 3]\nfillers = [2, [6, 9]]\n");
        let definition = read_show_definition(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(definition.seasons, vec![5, 3]);
        let show = definition.into_show();
        assert_eq!(show.seasons()[1].instruction().to_string(), "skip season");
    }

    #[test]
    fn test_read_show_definition_missing_file() {
        let err = read_show_definition(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("reading show definition"));
    }

    #[test]
    fn test_read_show_definition_bad_toml() {
        let path = temp_file("bad.toml", "seasons = \"many\"\n");
        let err = read_show_definition(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(err.to_string().contains("parsing show definition"));
    }
}
