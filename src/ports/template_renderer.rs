use crate::domain::{AppError, FileContext};

/// Port for substituting placeholder values into file content.
pub trait TemplateRenderer {
    /// Render `content`, replacing each placeholder marker with its value
    /// from `context`. Markers absent from the context render as empty.
    /// `path` identifies the file in error reports.
    fn render(&self, content: &str, context: &FileContext, path: &str) -> Result<String, AppError>;
}
