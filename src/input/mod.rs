//! Query list loading
//!
//! The input file holds one search term per line. Blank lines are skipped and
//! surrounding whitespace is trimmed.

mod loader;

pub use loader::{load_queries, parse_queries, LoadError};
