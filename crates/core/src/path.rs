//! Validated paths for prompt templates and schema files.
//!
//! All paths handed to the prompt pipeline go through [`validate_path`]:
//! non-blank, and no `..` anywhere in the raw string.

use std::fmt;
use std::path::Path;

use thiserror::Error;

pub const EMPTY_PATH_REASON: &str = "Path cannot be empty";
pub const TRAVERSAL_REASON: &str = "Path cannot contain '..' for security reasons";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("security violation for path '{path}': {reason}")]
    SecurityViolation { path: String, reason: String },

    #[error("file not found: {path}")]
    FileNotFound { path: String },
}

impl PathError {
    pub fn kind(&self) -> &'static str {
        match self {
            PathError::InvalidPath { .. } => "InvalidPath",
            PathError::SecurityViolation { .. } => "SecurityViolation",
            PathError::FileNotFound { .. } => "FileNotFound",
        }
    }
}

/// Synchronous existence check used by path validation.
///
/// The answer may be stale by the time the path is used.
pub trait FileExists {
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileExists`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileExists for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> FileExists for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Trim and check `raw`, returning the trimmed path.
///
/// Every `ParentDir` component is the literal `..`, and lexical
/// normalization only drops `.` and empty segments, so no normalized form can
/// hold a traversal the raw string does not. The substring check is therefore
/// the whole test, and it also refuses names like `file..md`.
pub fn validate_path(raw: &str) -> Result<&str, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::InvalidPath {
            path: raw.to_string(),
            reason: EMPTY_PATH_REASON.to_string(),
        });
    }
    if raw.contains("..") {
        return Err(PathError::SecurityViolation {
            path: raw.to_string(),
            reason: TRAVERSAL_REASON.to_string(),
        });
    }
    Ok(trimmed)
}

/// A trimmed path free of traversal segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptPath(String);

impl PromptPath {
    pub fn create(path: &str) -> Result<Self, PathError> {
        validate_path(path).map(|p| Self(p.to_string()))
    }

    /// Join `segments` under `base` and validate the result.
    pub fn join(base: &Path, segments: &[&str]) -> Result<Self, PathError> {
        let mut path = base.to_path_buf();
        for segment in segments {
            path.push(segment);
        }
        Self::create(&path.to_string_lossy())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for PromptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for PromptPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
