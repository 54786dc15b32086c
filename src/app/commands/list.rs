use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Execute the list command: names of all saved templates, sorted.
pub fn execute<S: TemplateStore>(store: &S) -> Result<Vec<String>, AppError> {
    store.list()
}
