//! The `schema_file` variable set, with path security checks.

use std::path::Path;

use crate::path::{FileExists, PathError, validate_path};

use super::names::FilePathVariableName;
use super::record::{ToRecord, VariableRecord};
use super::variable::FilePathVariable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePathPromptVariables {
    schema_file: FilePathVariable,
}

impl FilePathPromptVariables {
    /// Validate the path string only; the file is not touched.
    pub fn create(schema_file: &str) -> Result<Self, PathError> {
        let trimmed = validate_path(schema_file)?;
        let schema_file = FilePathVariable::create(FilePathVariableName::SCHEMA_FILE, trimmed)
            .map_err(|e| PathError::InvalidPath {
                path: schema_file.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { schema_file })
    }

    /// Like [`FilePathPromptVariables::create`], then require the file to exist.
    pub fn create_checked(
        schema_file: &str,
        fs: &dyn FileExists,
    ) -> Result<Self, PathError> {
        let vars = Self::create(schema_file)?;
        if !fs.exists(Path::new(vars.schema_file())) {
            return Err(PathError::FileNotFound { path: vars.schema_file().to_string() });
        }
        Ok(vars)
    }

    pub fn schema_file(&self) -> &str {
        self.schema_file.value()
    }
}

impl ToRecord for FilePathPromptVariables {
    fn to_record(&self) -> VariableRecord {
        self.schema_file.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::TRAVERSAL_REASON;

    #[test]
    fn rejects_traversal() {
        let err = FilePathPromptVariables::create("../../etc/passwd").unwrap_err();
        assert_eq!(
            err,
            PathError::SecurityViolation {
                path: "../../etc/passwd".into(),
                reason: TRAVERSAL_REASON.into(),
            }
        );
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(FilePathPromptVariables::create("  ").unwrap_err().kind(), "InvalidPath");
    }

    #[test]
    fn record_uses_trimmed_path() {
        let v = FilePathPromptVariables::create(" schema/base.schema.md ").unwrap();
        assert_eq!(v.to_record()["schema_file"], "schema/base.schema.md");
    }

    #[test]
    fn checked_requires_existing_file() {
        let exists = |p: &Path| p == Path::new("schema/ok.md");
        assert!(FilePathPromptVariables::create_checked("schema/ok.md", &exists).is_ok());
        let err =
            FilePathPromptVariables::create_checked("schema/missing.md", &exists).unwrap_err();
        assert_eq!(err, PathError::FileNotFound { path: "schema/missing.md".into() });
    }
}
