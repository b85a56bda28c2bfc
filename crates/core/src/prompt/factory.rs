//! Build the composite prompt variables from a merged source.

use tracing::debug;

use crate::path::FileExists;
use crate::source::{SourceRecord, validate_source};
use crate::variables::{
    CompositePromptVariables, FilePathPromptVariables, StandardPromptVariables,
    StdinPromptVariables, ToRecord, UserPromptVariables, VariableRecord,
};

use super::error::PromptError;

/// `input_text_file` when the input comes from standard input.
pub const STDIN_INPUT_NAME: &str = "stdin";
/// `destination_path` when no source names one.
pub const STDOUT_DESTINATION: &str = "stdout";

pub struct PromptVariablesFactory;

impl PromptVariablesFactory {
    /// Validate `source` and turn it into overlay-ordered variable sets:
    /// standard, file path, stdin, then user variables (highest precedence).
    pub fn build(
        source: &SourceRecord,
        fs: &dyn FileExists,
    ) -> Result<CompositePromptVariables, PromptError> {
        let problems = validate_source(source);
        if !problems.is_empty() {
            return Err(PromptError::IncompleteSource(problems));
        }

        let input = source.input_file.as_deref().unwrap_or(STDIN_INPUT_NAME);
        let destination = source.destination_path.as_deref().unwrap_or(STDOUT_DESTINATION);
        let mut standard =
            StandardPromptVariables::create(input, destination, &VariableRecord::new())?;
        if let Some(directive) = source.directive.as_deref() {
            standard = standard.with_demonstrative_type(directive)?;
        }
        if let Some(layer) = source.layer.as_deref() {
            standard = standard.with_layer_type(layer)?;
        }
        let mut composite = CompositePromptVariables::empty().add(standard);

        if let Some(schema) = source.schema_file.as_deref() {
            composite = composite.add(FilePathPromptVariables::create_checked(schema, fs)?);
        }

        if let Some(content) = source.stdin_content.as_deref() {
            composite = composite.add(StdinPromptVariables::create(content)?);
        }

        let user = UserPromptVariables::create(&source.user_variables)?;
        debug!(
            components = composite.len() + 1,
            user_variables = user.len(),
            "built prompt variables"
        );
        Ok(composite.add(user))
    }

    /// Convenience: build and flatten.
    pub fn build_record(
        source: &SourceRecord,
        fs: &dyn FileExists,
    ) -> Result<VariableRecord, PromptError> {
        Ok(Self::build(source, fs)?.to_record())
    }
}
