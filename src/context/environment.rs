//! Process environment seen by the CLI

use std::path::PathBuf;

use crate::config::Config;

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub program_name: String,
    pub config_dir: PathBuf,
}

impl Environment {
    /// Read the environment of the current process
    pub fn init() -> Self {
        let config_dir = std::env::var_os("SPOOKSEARCH_CONFIG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(Config::default_config_dir);

        Self {
            config_dir,
            ..Self::default()
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            program_name: "spooksearch".to_string(),
            config_dir: Config::default_config_dir(),
        }
    }
}
