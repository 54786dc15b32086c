use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, MANIFEST_FILE, Manifest, TemplateName, resolve};
use crate::ports::{Reporter, TemplateRenderer, TemplateStore, ValuePrompter};

/// Execute the generate command.
///
/// Unpacks the template into `output_dir`, collects a value for each
/// declared placeholder in manifest order, renders every affected file in
/// place, and removes the manifest from the output.
///
/// Value collection is the only interactive step; a cancelled prompt aborts
/// the whole generation. A rendering failure aborts further rendering and
/// leaves the partially generated output on disk.
pub fn execute<S, P, R, T>(
    ctx: &AppContext<S, P, R, T>,
    name: &TemplateName,
    output_dir: &Path,
) -> Result<(), AppError>
where
    S: TemplateStore,
    P: ValuePrompter,
    R: Reporter,
    T: TemplateRenderer,
{
    ctx.reporter().info("Uncompressing the template...");
    ctx.store().unpack(name, output_dir)?;

    // Stored archives may have been hand-edited; re-validate before use.
    let manifest_path = output_dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        return Err(AppError::SchemaViolation(format!(
            "template archive has no {MANIFEST_FILE}"
        )));
    }
    let manifest = Manifest::from_json(&fs::read_to_string(&manifest_path)?)?;

    ctx.reporter().info("Processing placeholders...");
    let mut values_by_name = BTreeMap::new();
    for placeholder in &manifest.placeholders {
        let Some(value) = ctx.prompter().collect(placeholder)? else {
            return Err(AppError::Cancelled);
        };
        values_by_name.insert(placeholder.name.clone(), value);
    }

    let plan = resolve(&manifest.placeholders, &values_by_name);
    for (path, context) in &plan {
        let file_path = output_dir.join(path);
        let content = fs::read_to_string(&file_path)
            .map_err(|err| AppError::Render { path: path.clone(), reason: err.to_string() })?;
        let rendered = ctx.renderer().render(&content, context, path)?;
        fs::write(&file_path, rendered)
            .map_err(|err| AppError::Render { path: path.clone(), reason: err.to_string() })?;
    }

    ctx.reporter().info("Cleaning up...");
    fs::remove_file(&manifest_path)?;
    Ok(())
}
