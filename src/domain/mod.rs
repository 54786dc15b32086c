pub mod error;
pub mod manifest;
pub mod resolve;
pub mod template_name;

pub use error::AppError;
pub use manifest::{MANIFEST_FILE, Manifest, Placeholder, STARTER_MANIFEST};
pub use resolve::{FileContext, RenderPlan, resolve};
pub use template_name::TemplateName;
