use std::collections::BTreeMap;

use crate::domain::AppError;

/// Variables handed to a template.
///
/// Ordered so that rendering never depends on hash iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }
}

/// Trait for rendering named templates.
///
/// Keeps the template engine and the template store out of the domain layer.
pub trait TemplateRenderer {
    /// Render the template registered under `template_name` with `context`.
    fn render(&self, template_name: &str, context: &TemplateContext) -> Result<String, AppError>;
}
