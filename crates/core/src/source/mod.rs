//! Raw input sources (defaults, config, stdin, CLI) and how they combine.

pub mod merge;
pub mod types;

pub use merge::{SourceValidationError, merge_sources, validate_source};
pub use types::{SourceMetadata, SourceOrigin, SourceRecord};
