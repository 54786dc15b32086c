use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, FileContext};
use crate::ports::TemplateRenderer;

/// Substitution-only renderer backed by Minijinja.
///
/// Variable markers are the engine's whole surface: control-flow and
/// comment blocks are rejected up front, and markers missing from the
/// context render as empty text.
pub struct MinijinjaRenderer;

impl MinijinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, content: &str, context: &FileContext, path: &str) -> Result<String, AppError> {
        if let Some(token) = disallowed_token(content) {
            return Err(AppError::TemplateSyntax {
                path: path.to_string(),
                token: token.to_string(),
            });
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Lenient);
            env
        });

        env.render_str(content, context).map_err(|err| AppError::Render {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_token(content: &str) -> Option<&'static str> {
    if content.contains("{%") {
        return Some("{%");
    }
    if content.contains("{#") {
        return Some("{#");
    }
    None
}
