//! Config file handling
//!
//! `config.toml` in the config directory:
//!
//! ```toml
//! [defaults]
//! options = ["--timeout", "30"]
//!
//! [api]
//! endpoint = "https://api.dehashed.com/search"
//! timeout = 30
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::context::Environment;
use crate::errors::{Result, SpookError};

/// SpookSearch configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub config_dir: PathBuf,
    /// Extra arguments inserted before the command line ones
    pub default_options: Vec<String>,
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsSection,
    #[serde(default)]
    api: ApiSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsSection {
    #[serde(default)]
    options: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ApiSection {
    endpoint: Option<String>,
    timeout: Option<f64>,
}

impl Config {
    /// Load configuration from the environment's config directory.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(env: &Environment) -> Result<Self> {
        Self::load_from_dir(&env.config_dir)
    }

    pub fn load_from_dir(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| SpookError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| SpookError::Config(format!("Invalid config TOML: {}", e)))?;

        if let Some(timeout) = file.api.timeout {
            if timeout_duration(timeout).is_none() {
                return Err(SpookError::Config(format!(
                    "api.timeout must be a positive number of seconds, got {}",
                    timeout
                )));
            }
        }

        Ok(Self {
            config_dir: PathBuf::new(),
            default_options: file.defaults.options,
            endpoint: file.api.endpoint,
            timeout: file.api.timeout,
        })
    }

    /// Default config directory when `SPOOKSEARCH_CONFIG_DIR` is unset
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join("spooksearch"))
            .unwrap_or_else(|| PathBuf::from(".spooksearch"))
    }

    /// Insert `default_options` right after the program name so that
    /// anything on the real command line wins.
    pub fn merge_default_options(&self, args: Vec<String>) -> Vec<String> {
        if self.default_options.is_empty() {
            return args;
        }

        let mut merged = Vec::with_capacity(args.len() + self.default_options.len());
        let mut args = args.into_iter();

        if let Some(program) = args.next() {
            merged.push(program);
        }
        merged.extend(self.default_options.iter().cloned());
        merged.extend(args);
        merged
    }
}

/// Convert a timeout in seconds to a `Duration`.
///
/// `None` for zero, negative, NaN, infinite, or values too large to
/// represent.
pub fn timeout_duration(seconds: f64) -> Option<Duration> {
    if seconds <= 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(seconds).ok()
}
