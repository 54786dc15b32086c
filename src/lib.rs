//! tpm: capture reusable project templates and generate customized projects.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

pub use app::AppContext;
pub use domain::{AppError, MANIFEST_FILE, Manifest, Placeholder, TemplateName};
