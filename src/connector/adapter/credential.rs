use std::path::Path;

use tracing::{debug, error};

use crate::domain::DomainError;

/// Read a static API key from `path`, trimming surrounding whitespace.
///
/// An unreadable or blank file is an error; callers treat it as fatal at startup.
pub fn read_api_key(path: impl AsRef<Path>) -> Result<String, DomainError> {
    let path = path.as_ref();

    let raw = std::fs::read_to_string(path).map_err(|e| {
        error!("Failed to read search API key from {}: {}", path.display(), e);
        DomainError::IoError(e)
    })?;

    let key = raw.trim();
    if key.is_empty() {
        error!("Search API key file {} is empty", path.display());
        return Err(DomainError::config(format!(
            "API key file {} is empty",
            path.display()
        )));
    }

    debug!("Loaded search API key from {}", path.display());
    Ok(key.to_string())
}
