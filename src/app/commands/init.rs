use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, MANIFEST_FILE, STARTER_MANIFEST};

/// Result of the init command.
pub enum InitOutcome {
    /// A starter manifest was written at this path.
    Created(PathBuf),
    /// A manifest already exists at this path; nothing was touched.
    AlreadyInitialized(PathBuf),
}

/// Execute the init command.
///
/// Writes a starter `_template.json` into `dir`, refusing to overwrite an
/// existing one.
pub fn execute(dir: &Path) -> Result<InitOutcome, AppError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if manifest_path.exists() {
        return Ok(InitOutcome::AlreadyInitialized(manifest_path));
    }

    fs::write(&manifest_path, STARTER_MANIFEST)?;
    Ok(InitOutcome::Created(manifest_path))
}
