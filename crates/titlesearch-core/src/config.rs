//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`APP_SEARCH__DEBOUNCE_MS=150` sets `search.debounce_ms`). Provides helpers to
//! expand `~` and `${VAR}` in configured paths.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_MAX_RESULTS: usize = 200;
pub const DEFAULT_KEYSTROKE_INTERVAL_MS: u64 = 80;

/// Tuning knobs for the search pipeline (`[search]` table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
    pub max_results: usize,
    /// Pacing used when replaying typed text through the pipeline.
    pub keystroke_interval_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_results: DEFAULT_MAX_RESULTS,
            keystroke_interval_ms: DEFAULT_KEYSTROKE_INTERVAL_MS,
        }
    }
}

impl SearchSettings {
    pub fn debounce_window(&self) -> Duration { Duration::from_millis(self.debounce_ms) }

    pub fn keystroke_interval(&self) -> Duration { Duration::from_millis(self.keystroke_interval_ms) }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidConfig("search.max_results must be greater than zero".to_string()));
        }
        Ok(())
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        Self::from_figment(figment)
    }

    /// Wrap an already assembled figment. Validates the `[search]` table.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let config = Self { figment };
        config.search()?.validate()?;
        Ok(config)
    }

    /// `[search]` settings; an absent table yields the defaults.
    pub fn search(&self) -> crate::error::Result<SearchSettings> {
        Ok(self.typed("search")?.unwrap_or_default())
    }

    /// `data.corpus_path`, expanded. `None` when unset.
    pub fn corpus_path(&self) -> crate::error::Result<Option<PathBuf>> {
        Ok(self.typed::<String>("data.corpus_path")?.map(expand_path))
    }

    /// Extract `key` if present; a present but malformed value is `InvalidConfig`.
    fn typed<T>(&self, key: &str) -> crate::error::Result<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        if self.figment.find_value(key).is_err() {
            return Ok(None);
        }
        self.figment
            .extract_inner(key)
            .map(Some)
            .map_err(|e| Error::InvalidConfig(format!("{key}: {e}")))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
