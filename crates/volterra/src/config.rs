//! Configuration loaded from ~/.volterra/config.toml.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use volterra_nav::Market;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8712/api";
pub const DEFAULT_SYMBOL: &str = "SPY";
pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct VolterraConfig {
    pub api_url: String,
    pub default_symbol: String,
    pub default_market: Market,
    pub tick_ms: u64,
}

impl Default for VolterraConfig {
    fn default() -> Self {
        VolterraConfig {
            api_url: DEFAULT_API_URL.to_string(),
            default_symbol: DEFAULT_SYMBOL.to_string(),
            default_market: Market::Us,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// On-disk shape. Every field optional; unknown keys are rejected so typos
/// fail loudly instead of silently using defaults.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    api_url: Option<String>,
    default_symbol: Option<String>,
    default_market: Option<String>,
    tick_ms: Option<u64>,
}

impl VolterraConfig {
    /// Load from the given path. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw(raw)
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&config_path())
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = raw.api_url.unwrap_or(defaults.api_url);
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got {:?}",
                api_url
            )));
        }

        let default_symbol = raw.default_symbol.unwrap_or(defaults.default_symbol);
        if default_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "default_symbol must not be empty".to_string(),
            ));
        }

        let default_market = match raw.default_market {
            Some(code) => Market::from_code(&code).ok_or_else(|| {
                ConfigError::Invalid(format!("unknown default_market {:?}", code))
            })?,
            None => defaults.default_market,
        };

        let tick_ms = raw.tick_ms.unwrap_or(defaults.tick_ms);
        if tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be positive".to_string()));
        }

        Ok(VolterraConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            default_symbol: default_symbol.trim().to_ascii_uppercase(),
            default_market,
            tick_ms,
        })
    }
}

/// Home directory: ~/.volterra, overridable with VOLTERRA_HOME.
pub fn volterra_home() -> PathBuf {
    if let Ok(override_path) = std::env::var("VOLTERRA_HOME") {
        return PathBuf::from(override_path);
    }
    dirs::home_dir()
        .expect("Could not determine home directory")
        .join(".volterra")
}

pub fn config_path() -> PathBuf {
    volterra_home().join("config.toml")
}
