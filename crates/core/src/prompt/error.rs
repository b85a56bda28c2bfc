use std::path::PathBuf;

use thiserror::Error;

use crate::path::PathError;
use crate::source::SourceValidationError;
use crate::templates::TemplateRenderError;
use crate::variables::VariableError;

/// Errors raised while turning sources into a rendered prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Every completeness problem found in the merged source.
    #[error("incomplete input: {}", join_messages(.0))]
    IncompleteSource(Vec<SourceValidationError>),

    #[error("missing {0}: both directive and layer are needed to locate a prompt")]
    MissingTemplateParameter(&'static str),

    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Render(#[from] TemplateRenderError),

    #[error("failed to read prompt template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_messages(errors: &[SourceValidationError]) -> String {
    errors.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; ")
}
