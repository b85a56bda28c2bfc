use regex::Regex;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateRenderError {
    #[error("invalid regex for template placeholder: {0}")]
    Regex(String),
}

pub type RenderContext = HashMap<String, String>;

/// The seam towards whatever turns a prompt template plus variables into
/// the final prompt text.
pub trait PromptRenderer {
    fn render(
        &self,
        template: &str,
        variables: &RenderContext,
    ) -> Result<String, TemplateRenderError>;
}

/// Bundled renderer: plain `{{name}}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEngine;

impl PromptRenderer for TemplateEngine {
    fn render(
        &self,
        template: &str,
        variables: &RenderContext,
    ) -> Result<String, TemplateRenderError> {
        render_string(template, variables)
    }
}

/// Render a string template with variable substitution.
///
/// `{{ name }}` is replaced by the value of `name`; surrounding whitespace
/// inside the braces is ignored. Unknown placeholders are left as written so
/// a missing variable stays visible in the output.
pub fn render_string(
    template: &str,
    ctx: &RenderContext,
) -> Result<String, TemplateRenderError> {
    let re = Regex::new(r"\{\{([^{}]+)\}\}")
        .map_err(|e| TemplateRenderError::Regex(e.to_string()))?;

    let result = re.replace_all(template, |caps: &regex::Captures<'_>| {
        let name = caps[1].trim();
        ctx.get(name).cloned().unwrap_or_else(|| caps[0].to_string())
    });

    Ok(result.into_owned())
}

/// Placeholder names used by `template`, in first-seen order.
pub fn placeholder_names(template: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}") else {
        return Vec::new();
    };
    let mut seen = std::collections::HashSet::new();
    let mut names = Vec::new();
    for cap in re.captures_iter(template) {
        let name = &cap[1];
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }
    names
}
