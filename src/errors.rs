//! Error types for SpookSearch

use thiserror::Error;

use crate::middleware::auth::AuthError;

/// Main error type for SpookSearch
#[derive(Error, Debug)]
pub enum SpookError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
}

pub type Result<T> = std::result::Result<T, SpookError>;
