//! HTTP Basic Authentication (RFC 7617)

use std::fmt;

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::AuthError;

/// Account credentials sent with every search request
#[derive(Clone)]
pub struct BasicAuth {
    email: String,
    api_key: String,
}

impl BasicAuth {
    pub fn new(email: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            api_key: api_key.into(),
        }
    }

    /// `Basic base64(email:api_key)`, marked sensitive so it is never logged
    pub fn header_value(&self) -> Result<HeaderValue, AuthError> {
        let credentials = format!("{}:{}", self.email, self.api_key);
        let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());

        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| AuthError::InvalidHeader(e.to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Apply the Authorization header to a request
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(())
    }
}

impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("email", &self.email)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
