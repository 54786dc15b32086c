/// Port for reporting progress to the user.
///
/// Rendering (styling, destination stream) is the sink's concern.
pub trait Reporter {
    /// Informational progress message.
    fn info(&self, message: &str);

    /// Successful completion message.
    fn success(&self, message: &str);

    /// Error message.
    fn error(&self, message: &str);
}
