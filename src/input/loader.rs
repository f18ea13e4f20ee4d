use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read the query file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: File '{}' not found.", .0.display())]
    NotFound(PathBuf),

    #[error("Unexpected error: {0}")]
    Io(#[source] std::io::Error),
}

/// Split file content into trimmed, non-empty query terms, preserving order.
pub fn parse_queries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read the whole query file and return its terms.
///
/// The file is closed before this returns, so no handle outlives the load.
pub fn load_queries(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(e),
    })?;

    let queries = parse_queries(&content);
    tracing::debug!(path = %path.display(), count = queries.len(), "Loaded queries");
    Ok(queries)
}
