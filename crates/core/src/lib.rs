//! Core library for breakdown: validated prompt variables, source merging
//! and the prompt generation pipeline.

pub mod config;
pub mod path;
pub mod prompt;
pub mod source;
pub mod templates;
pub mod variables;

pub use path::{FileExists, PathError, PromptPath, StdFileSystem};
pub use prompt::{GeneratedPrompt, PromptError, PromptGenerator, PromptOptions};
pub use source::{SourceOrigin, SourceRecord, merge_sources, validate_source};
pub use variables::{CompositePromptVariables, ToRecord, VariableError, VariableRecord};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
