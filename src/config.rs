use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::util::format::DEFAULT_POSTER_SIZE;

pub const ENV_CATALOG: &str = "CINESCOPE_CATALOG";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "CINESCOPE_SEARCH_DEBOUNCE_MS";
pub const ENV_POSTER_SIZE: &str = "CINESCOPE_POSTER_SIZE";

const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

// ---------------------------------------------------------------------------
// Application settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog file shown instead of the mock trending list.
    pub catalog_path: Option<PathBuf>,
    /// Quiet period before a search keystroke is applied.
    pub search_debounce: Duration,
    /// TMDB poster size segment for bare poster paths.
    pub poster_size: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            poster_size: DEFAULT_POSTER_SIZE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_SEARCH_DEBOUNCE_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidMillis {
                    var: ENV_SEARCH_DEBOUNCE_MS,
                    value: raw.clone(),
                })?;
            config.search_debounce = Duration::from_millis(millis);
        }

        if let Some(size) = lookup(ENV_POSTER_SIZE) {
            let size = size.trim();
            if size.is_empty() {
                return Err(ConfigError::Empty { var: ENV_POSTER_SIZE });
            }
            config.poster_size = size.to_string();
        }

        Ok(config)
    }

    /// A catalog path given on the command line wins over the environment.
    pub fn with_cli_catalog(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.catalog_path = Some(PathBuf::from(path));
        }
        self
    }
}
