//! Per-query result type

use serde_json::Value as JsonValue;

/// What happened to a single search term.
///
/// Every failure is a value here rather than an early return, so one bad
/// query never stops the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// HTTP 200 with a JSON body
    Found(JsonValue),
    /// Any status other than 200
    HttpError { status: u16, reason: String },
    /// The request never produced a usable response (DNS, TLS, timeout,
    /// refused connection, unreadable or non-JSON body)
    Transport(String),
}

impl QueryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    /// Build the outcome for a non-200 status, using the canonical reason
    /// phrase for the code.
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        QueryOutcome::HttpError {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}
