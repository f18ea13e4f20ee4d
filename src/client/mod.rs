//! HTTP client for the search API

pub mod http;

pub use http::{SearchClient, DEFAULT_ENDPOINT, USER_AGENT_STRING};
