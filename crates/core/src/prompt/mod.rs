//! The prompt generation pipeline built on top of [`crate::variables`] and
//! [`crate::source`].

pub mod error;
pub mod factory;
pub mod generator;
pub mod resolver;

pub use error::PromptError;
pub use factory::{PromptVariablesFactory, STDIN_INPUT_NAME, STDOUT_DESTINATION};
pub use generator::{GeneratedPrompt, PromptGenerator};
pub use resolver::{PromptOptions, PromptTemplateResolver, infer_layer};
