//! Optional TOML configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::CliError;

/// Catalog file used when neither `--db` nor the config names one.
pub(crate) const DEFAULT_DB_FILE: &str = "books_db";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct Config {
    /// Catalog database file.
    #[serde(default)]
    pub database: Option<PathBuf>,
    /// Insert the stock books when the table is first created.
    #[serde(default = "default_true")]
    pub seed: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            seed: true,
        }
    }
}

impl Config {
    /// `--db` beats the config file, which beats `./books_db`.
    pub(crate) fn database_path(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }
}

/// Returns `~/.config/bookstore/config.toml`.
pub(crate) fn config_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("bookstore").join("config.toml")
}

/// Load the config.
///
/// An explicit path must exist and parse. The default location falls back to
/// defaults when the file is missing or corrupt.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<Config, CliError> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("cannot read {}: {}", path.display(), e)))?;
        return parse_config(&contents)
            .map_err(|e| CliError::config(format!("cannot parse {}: {}", path.display(), e)));
    }

    Ok(load_config_or_default(&config_path()))
}

/// Read `path`, returning defaults if missing or corrupt.
fn load_config_or_default(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse config at {}: {}", path.display(), e);
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}
