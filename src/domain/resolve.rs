//! Placeholder-to-path resolution.

use std::collections::BTreeMap;

use crate::domain::Placeholder;

/// Per-file mapping of placeholder names to resolved values.
pub type FileContext = BTreeMap<String, String>;

/// Mapping from relative file path to that file's substitution context.
///
/// Covers exactly the paths referenced by at least one declaration. Built
/// once per generation and discarded after rendering.
pub type RenderPlan = BTreeMap<String, FileContext>;

/// Build the render plan for a set of placeholder declarations.
///
/// Declarations are visited in manifest order. Each declaration resolves to
/// the collected value for its name, falling back to its own `default`
/// (which itself defaults to the empty string). When a later declaration
/// repeats a name on a path an earlier one already mapped, the later value
/// wins; that is plain insertion order, documented as the contract.
pub fn resolve(
    placeholders: &[Placeholder],
    values_by_name: &BTreeMap<String, String>,
) -> RenderPlan {
    let mut plan = RenderPlan::new();
    for placeholder in placeholders {
        let value = values_by_name
            .get(&placeholder.name)
            .cloned()
            .unwrap_or_else(|| placeholder.default.clone());
        for path in &placeholder.paths {
            plan.entry(path.clone()).or_default().insert(placeholder.name.clone(), value.clone());
        }
    }
    plan
}
