//! Fragment loading

use crate::domain::ConfigFragment;
use crate::error::{AssembleError, Result};
use std::fs;
use std::path::Path;

/// Read one TOML file into a fragment.
///
/// A missing or unreadable file is a `Load` error; a file that is not valid
/// TOML is a `Parse` error. Both carry the offending path.
pub fn load_fragment(path: &Path) -> Result<ConfigFragment> {
    let content = fs::read_to_string(path)
        .map_err(|source| AssembleError::Load { path: path.to_path_buf(), source })?;

    let fragment: ConfigFragment = toml::from_str(&content)
        .map_err(|source| AssembleError::Parse { path: path.to_path_buf(), source })?;

    tracing::debug!("Loaded {} top-level keys from {}", fragment.len(), path.display());
    Ok(fragment)
}
