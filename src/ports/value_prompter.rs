use crate::domain::{AppError, Placeholder};

/// Port for collecting placeholder values during generation.
///
/// Implementations may be interactive or scripted; the pipeline only relies
/// on this contract.
pub trait ValuePrompter {
    /// Collect a value for one placeholder declaration.
    ///
    /// Returns `Ok(None)` when the user cancels instead of answering.
    fn collect(&self, placeholder: &Placeholder) -> Result<Option<String>, AppError>;
}
