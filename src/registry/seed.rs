//! Seed file loading

use indexmap::IndexMap;
use std::path::Path;

use super::Registry;
use crate::error::{Result, UsernameError};

/// Load a registry from a JSON object of `username -> owner id`.
///
/// Entries are applied in file order, so of two names differing only in case
/// the later one keeps its owner.
pub fn load_seed(path: &Path) -> Result<Registry> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        UsernameError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let entries: IndexMap<String, String> =
        serde_json::from_str(&content).map_err(|e| UsernameError::parse(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "Loaded username seed file"
    );

    Ok(Registry::from_entries(entries))
}
