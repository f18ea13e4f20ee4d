//! SpookSearch library interface
//!
//! Batch username search against the Dehashed breach-data API.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and usage text
//! - [`validate`] - Email and API key format checks
//! - [`input`] - Query file loading
//! - [`client`] - Search requests
//! - [`output`] - Result printing
//! - [`core`] - Main execution logic
//! - [`errors`] - Error types (SpookError, Result)
//! - [`status`] - Exit status codes (ExitStatus)

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod core;
pub mod errors;
pub mod input;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod output;
pub mod signals;
pub mod status;
pub mod validate;
