//! Authentication middleware
//!
//! The search API only speaks HTTP Basic, with the account email as the
//! username and the API key as the password.

mod basic;

pub use basic::BasicAuth;

use thiserror::Error;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}
