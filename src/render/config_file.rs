//! Assembled config serialization

use crate::domain::MergedConfig;
use crate::error::{AssembleError, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Render the assembled config as a TOML document.
pub fn render(config: &MergedConfig) -> Result<String> {
    Ok(toml::to_string(config)?)
}

/// Write the assembled config to `out_path`, replacing whatever is there.
///
/// The document is rendered before the destination is opened, so a
/// serialization failure leaves an existing file untouched. Missing parent
/// directories are not created.
pub fn save(config: &MergedConfig, out_path: &Path) -> Result<()> {
    let document = render(config)?;

    let save_err =
        |source: std::io::Error| AssembleError::Save { path: out_path.to_path_buf(), source };
    let mut file = File::create(out_path).map_err(save_err)?;
    file.write_all(document.as_bytes()).map_err(save_err)?;
    file.flush().map_err(save_err)?;

    tracing::info!("Wrote {} top-level keys to {}", config.len(), out_path.display());
    Ok(())
}
