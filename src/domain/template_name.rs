use std::fmt;

use crate::domain::AppError;

/// Validated template name.
///
/// The name doubles as the artifact's file stem in the managed store, so it
/// must be a safe path component: non-empty, no separators or traversal, no
/// leading dot, characters limited to alphanumerics, '-', '_', and '.'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateName(String);

impl TemplateName {
    /// Validate and create a new template name.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidTemplateName(name.to_string()))
        }
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(TemplateName::new("rust-cli").is_ok());
        assert!(TemplateName::new("my_app").is_ok());
        assert!(TemplateName::new("App2.backend").is_ok());
    }

    #[test]
    fn invalid_names() {
        for name in ["", ".", "..", ".hidden", "has/slash", "has\\backslash", "has space", "a\0b"] {
            let result = TemplateName::new(name);
            assert!(
                matches!(result, Err(AppError::InvalidTemplateName(_))),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        let name = TemplateName::new("rust-cli").unwrap();
        assert_eq!(name.to_string(), "rust-cli");
        assert_eq!(name.as_str(), "rust-cli");
    }
}
