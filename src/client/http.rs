//! Search request building and sending
//!
//! One GET per query term against the search endpoint, authenticated with
//! HTTP Basic. Every failure mode is folded into a [`QueryOutcome`].

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::errors::{Result, SpookError};
use crate::middleware::auth::BasicAuth;
use crate::models::QueryOutcome;

pub const USER_AGENT_STRING: &str = concat!("SpookSearch/", env!("CARGO_PKG_VERSION"));

/// Production search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.dehashed.com/search";

/// Client bound to one endpoint and one set of credentials
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client. `timeout` of `None` keeps reqwest's default (no
    /// overall request timeout).
    pub fn new(endpoint: &str, auth: &BasicAuth, timeout: Option<Duration>) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SpookError::Argument(format!(
                "Unsupported endpoint scheme '{}'",
                endpoint.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        auth.apply(&mut headers)?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT_STRING)
            .default_headers(headers);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for a username search: `<endpoint>?query=username=<term>`
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &format!("username={}", query));
        url
    }

    /// Run one search. Never fails; errors become outcome variants.
    pub async fn search(&self, query: &str) -> QueryOutcome {
        let url = self.search_url(query);
        tracing::debug!(url = %url, "Sending search request");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::info!(query, error = %e, "Search request failed");
                return QueryOutcome::Transport(error_chain(&e));
            }
        };

        let status = response.status();
        tracing::info!(query, status = status.as_u16(), "Search response");

        if status != StatusCode::OK {
            return QueryOutcome::from_status(status);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return QueryOutcome::Transport(error_chain(&e)),
        };

        match serde_json::from_str(&body) {
            Ok(value) => QueryOutcome::Found(value),
            Err(e) => QueryOutcome::Transport(format!("Invalid JSON in response: {}", e)),
        }
    }
}

/// reqwest's top-level message is generic ("error sending request"); the
/// useful part (refused, timed out, dns) lives in the source chain.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
