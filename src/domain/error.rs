use std::io;

use thiserror::Error;

/// Library-wide error type for tpm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Manifest failed structural validation.
    #[error("Invalid template config: {0}")]
    SchemaViolation(String),

    /// No manifest file in the directory being saved.
    #[error("Missing '_template.json' in the current directory. Try 'tpm init'.")]
    ManifestMissing,

    /// Save targets a name that is already stored.
    #[error("Template '{0}' already exists")]
    TemplateExists(String),

    /// Generate targets a name with no stored artifact.
    #[error("Template '{0}' does not exist")]
    TemplateNotFound(String),

    /// Template name is empty or not filesystem-safe.
    #[error(
        "Invalid template name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidTemplateName(String),

    /// A target file uses template constructs beyond variable substitution.
    #[error("Template syntax '{token}' is not supported in '{path}'")]
    TemplateSyntax { path: String, token: String },

    /// Substitution failed for a target file.
    #[error("Failed to render '{path}': {reason}")]
    Render { path: String, reason: String },

    /// User aborted an interactive step.
    #[error("Aborted.")]
    Cancelled,
}
