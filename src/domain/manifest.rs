use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// File name of the template manifest inside a template's directory tree.
pub const MANIFEST_FILE: &str = "_template.json";

/// Starter manifest written by `tpm init`.
pub const STARTER_MANIFEST: &str = "{\n  \"placeholders\": []\n}\n";

/// Declarative placeholder manifest for a template.
///
/// Stored as `_template.json` at the template root. Unknown keys (such as a
/// `$schema` pointer) are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub placeholders: Vec<Placeholder>,
}

/// A named substitution point declared by the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placeholder {
    /// Substitution key. Unique only among placeholders sharing a target
    /// path; disjoint declarations may reuse a name.
    pub name: String,
    /// Prompt text shown when collecting the value.
    pub prompt: String,
    /// File paths, relative to the generated output root, that receive this
    /// placeholder's value.
    pub paths: Vec<String>,
    /// Pre-filled value offered during collection.
    #[serde(default)]
    pub default: String,
    /// Supplementary prompt text, passed through to the prompter untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_instruction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_instruction: Option<String>,
}

impl Manifest {
    /// Parse and validate a manifest document.
    ///
    /// Typed deserialization is the schema check: any missing required
    /// field, wrong type, or structural mismatch fails with the first
    /// violation encountered.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|err| AppError::SchemaViolation(err.to_string()))
    }
}
