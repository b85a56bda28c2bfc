//! Prompt variables: validated names, values, and the collections built
//! from them.
//!
//! Raw strings enter through smart constructors (`create`, `from_*`) that
//! return [`VariableError`] on failure. Every set implements [`ToRecord`], and
//! [`CompositePromptVariables`] overlays several sets into the flat map the
//! template engine consumes.

pub mod collection;
pub mod composite;
pub mod errors;
pub mod file_path;
pub mod names;
pub mod record;
pub mod standard;
pub mod stdin;
pub mod user;
pub mod variable;

pub use collection::{MAX_VARIABLES, PromptVariables};
pub use composite::{Component, CompositePromptVariables};
pub use errors::VariableError;
pub use file_path::FilePathPromptVariables;
pub use names::{FilePathVariableName, StandardVariableName, StdinVariableName};
pub use record::{ToRecord, VariableRecord};
pub use standard::StandardPromptVariables;
pub use stdin::StdinPromptVariables;
pub use user::UserPromptVariables;
pub use variable::{
    FilePathVariable, StandardVariable, StdinVariable, USER_VARIABLE_PREFIX, UserVariable,
};
