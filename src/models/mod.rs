//! Data models

pub mod types;

pub use types::QueryOutcome;
