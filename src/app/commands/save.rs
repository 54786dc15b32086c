use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, MANIFEST_FILE, Manifest, TemplateName};
use crate::ports::{Reporter, TemplateRenderer, TemplateStore, ValuePrompter};

/// Execute the save command.
///
/// Validates the manifest in `source_dir`, then archives the whole directory
/// tree under `name`. The manifest must validate before anything is written;
/// an existing artifact with the same name is never overwritten.
pub fn execute<S, P, R, T>(
    ctx: &AppContext<S, P, R, T>,
    source_dir: &Path,
    name: &TemplateName,
) -> Result<PathBuf, AppError>
where
    S: TemplateStore,
    P: ValuePrompter,
    R: Reporter,
    T: TemplateRenderer,
{
    let manifest_path = source_dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(AppError::ManifestMissing);
    }

    ctx.reporter().info("Validating the template config...");
    Manifest::from_json(&fs::read_to_string(&manifest_path)?)?;

    ctx.reporter().info("Compressing the template...");
    ctx.store().pack(source_dir, name)
}
