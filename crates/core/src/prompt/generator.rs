//! End-to-end prompt generation: resolve, read, compose, render.

use std::fs;

use tracing::{debug, info, warn};

use crate::config::types::ResolvedConfig;
use crate::path::{FileExists, PathError, PromptPath, StdFileSystem};
use crate::source::{SourceRecord, validate_source};
use crate::templates::engine::placeholder_names;
use crate::templates::{PromptRenderer, RenderContext, TemplateEngine};
use crate::variables::{ToRecord, VariableRecord};

use super::error::PromptError;
use super::factory::PromptVariablesFactory;
use super::resolver::{PromptOptions, PromptTemplateResolver};

/// A rendered prompt and what went into it.
#[derive(Debug, Clone)]
pub struct GeneratedPrompt {
    pub template_path: PromptPath,
    pub variables: VariableRecord,
    pub content: String,
    /// Placeholders in the template with no matching variable.
    pub missing_variables: Vec<String>,
}

pub struct PromptGenerator<R = TemplateEngine, F = StdFileSystem> {
    resolver: PromptTemplateResolver,
    renderer: R,
    fs: F,
}

impl PromptGenerator {
    pub fn from_config(cfg: &ResolvedConfig) -> Self {
        Self {
            resolver: PromptTemplateResolver::new(
                cfg.prompt_base_dir.clone(),
                cfg.schema_base_dir.clone(),
            ),
            renderer: TemplateEngine,
            fs: StdFileSystem,
        }
    }
}

impl<R, F> PromptGenerator<R, F>
where
    R: PromptRenderer,
    F: FileExists,
{
    pub fn new(resolver: PromptTemplateResolver, renderer: R, fs: F) -> Self {
        Self { resolver, renderer, fs }
    }

    /// Generate the prompt for a merged `source`.
    pub fn generate(
        &self,
        source: &SourceRecord,
        options: &PromptOptions,
    ) -> Result<GeneratedPrompt, PromptError> {
        let problems = validate_source(source);
        if !problems.is_empty() {
            return Err(PromptError::IncompleteSource(problems));
        }
        let directive = source
            .directive
            .as_deref()
            .ok_or(PromptError::MissingTemplateParameter("directive"))?;
        let layer =
            source.layer.as_deref().ok_or(PromptError::MissingTemplateParameter("layer"))?;

        let template_path = self.resolver.template_path(
            directive,
            layer,
            source.input_file.as_deref(),
            options,
        )?;
        if !self.fs.exists(template_path.as_path()) {
            return Err(PathError::FileNotFound { path: template_path.to_string() }.into());
        }
        let template = fs::read_to_string(template_path.as_path()).map_err(|e| {
            PromptError::Io { path: template_path.as_path().to_path_buf(), source: e }
        })?;

        let mut source = source.clone();
        if source.schema_file.is_none() {
            if let Some(schema) = self.resolver.default_schema(directive, layer, &self.fs)? {
                debug!(schema = %schema, "using default schema file");
                source.schema_file = Some(schema.to_string());
            }
        }

        let variables = PromptVariablesFactory::build(&source, &self.fs)?.to_record();
        let ctx: RenderContext =
            variables.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let content = self.renderer.render(&template, &ctx)?;

        let missing_variables: Vec<String> = placeholder_names(&template)
            .into_iter()
            .filter(|name| !variables.contains_key(name))
            .collect();
        if !missing_variables.is_empty() {
            warn!(missing = ?missing_variables, "template placeholders left unresolved");
        }
        info!(template = %template_path, variables = variables.len(), "generated prompt");

        Ok(GeneratedPrompt { template_path, variables, content, missing_variables })
    }
}
