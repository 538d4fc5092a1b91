use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::AppError;
use crate::domain::prompt::{TemplateContext, TemplateRenderer};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Template renderer over the templates embedded in the binary, using Minijinja.
///
/// Templates are rendered as plain strings: values are inserted verbatim and
/// callers are responsible for any escaping their output format needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateRenderer;

impl EmbeddedTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, AppError> {
        let source = TEMPLATES_DIR
            .get_file(template_name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::Template {
                template: template_name.to_string(),
                reason: "template not found".to_string(),
            })?;

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(source, &context.variables)
            .map_err(|err| template_render_error(template_name, err))
    }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), reason: err.to_string() }
}
