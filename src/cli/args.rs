//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// A string that redacts its value in Debug output to prevent credential leakage
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(pub String);

impl SecretString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "SecretString(\"\")")
        } else {
            write!(f, "SecretString(\"[REDACTED]\")")
        }
    }
}

impl std::str::FromStr for SecretString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SecretString(s.to_string()))
    }
}

/// Dehashed API Client - SpookSearch
#[derive(Parser, Debug, Clone)]
#[command(name = "spooksearch", version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Args {
    /// Your email for API authentication
    #[arg(
        short = 'e',
        long = "email",
        value_name = "EMAIL",
        env = "SPOOKSEARCH_EMAIL",
        required_unless_present_any = ["generate_completions", "generate_manpage"]
    )]
    pub email: Option<String>,

    /// Your Dehashed API key
    #[arg(
        short = 'k',
        long = "api_key",
        visible_alias = "api-key",
        value_name = "API_KEY",
        env = "SPOOKSEARCH_API_KEY",
        hide_env_values = true,
        required_unless_present_any = ["generate_completions", "generate_manpage"]
    )]
    pub api_key: Option<SecretString>,

    /// Path to the text file containing the emails or usernames
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE_PATH",
        required_unless_present_any = ["generate_completions", "generate_manpage"]
    )]
    pub file: Option<PathBuf>,

    // =========================================================================
    // REQUEST
    // =========================================================================

    /// Request timeout in seconds (no timeout by default)
    #[arg(long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Search endpoint to query instead of the public API
    #[arg(long = "endpoint", value_name = "URL", env = "SPOOKSEARCH_ENDPOINT", hide = true)]
    pub endpoint: Option<String>,

    // =========================================================================
    // OUTPUT
    // =========================================================================

    /// Sort JSON keys alphabetically
    #[arg(long = "sort-keys", action = ArgAction::SetTrue)]
    pub sort_keys: bool,

    /// Exit with status 1 if any validation, file, HTTP or network error was reported
    #[arg(long = "check-status", action = ArgAction::SetTrue)]
    pub check_status: bool,

    // =========================================================================
    // TROUBLESHOOTING
    // =========================================================================

    /// Verbose diagnostics on stderr. Repeat for more (-vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Format for diagnostics on stderr
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Debug mode (print full error details)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,

    // =========================================================================
    // GENERATION (hidden)
    // =========================================================================

    /// Generate shell completions for the specified shell
    #[arg(long = "generate-completions", value_name = "SHELL", value_enum, hide = true)]
    pub generate_completions: Option<Shell>,

    /// Generate man page to stdout
    #[arg(long = "generate-manpage", action = ArgAction::SetTrue, hide = true)]
    pub generate_manpage: bool,
}

/// Shell types for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Log format for diagnostics
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON Lines format for parsing
    Json,
}
