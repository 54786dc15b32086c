mod archive_store;
mod console_reporter;
mod dialoguer_prompter;
mod minijinja_renderer;

pub use archive_store::{ArchiveTemplateStore, STORE_DIR_ENV};
pub use console_reporter::ConsoleReporter;
pub use dialoguer_prompter::DialoguerPrompter;
pub use minijinja_renderer::MinijinjaRenderer;
