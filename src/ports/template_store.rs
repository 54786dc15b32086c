use std::path::{Path, PathBuf};

use crate::domain::{AppError, TemplateName};

/// Port for the managed template store.
///
/// The store owns the physical artifacts and treats them as opaque snapshots
/// of a directory tree; it has no knowledge of placeholders.
pub trait TemplateStore {
    /// Whether an artifact with this name is already stored.
    fn exists(&self, name: &TemplateName) -> bool;

    /// Archive the full tree rooted at `source_dir` under `name`.
    ///
    /// Fails with [`AppError::TemplateExists`] if the name is taken; an
    /// existing artifact is never overwritten. Returns the artifact path.
    fn pack(&self, source_dir: &Path, name: &TemplateName) -> Result<PathBuf, AppError>;

    /// Expand the artifact named `name` into `dest_dir`, creating the
    /// destination if absent.
    ///
    /// Fails with [`AppError::TemplateNotFound`] before touching the
    /// destination when no such artifact exists.
    fn unpack(&self, name: &TemplateName, dest_dir: &Path) -> Result<(), AppError>;

    /// Names of all stored templates, lexicographically sorted.
    fn list(&self) -> Result<Vec<String>, AppError>;
}
