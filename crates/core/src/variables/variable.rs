//! Single validated variables, one type per category.

use super::errors::VariableError;
use super::names::{FilePathVariableName, StandardVariableName, StdinVariableName};
use super::record::{ToRecord, VariableRecord};

/// Prefix used by CLI options that carry user variables (`--uv-name=value`).
pub const USER_VARIABLE_PREFIX: &str = "uv-";

fn require_value<'a>(
    name: &str,
    value: Option<&'a str>,
    reason: &str,
) -> Result<&'a str, VariableError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(VariableError::empty_value(name, reason)),
    }
}

fn single(name: &str, value: &str) -> VariableRecord {
    let mut record = VariableRecord::new();
    record.insert(name.to_string(), value.to_string());
    record
}

/// One of the standard variables (`input_text_file`, `destination_path`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardVariable {
    name: StandardVariableName,
    value: String,
}

impl StandardVariable {
    pub fn create<'a>(
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> Result<Self, VariableError> {
        let name = StandardVariableName::create(name)?;
        let value = require_value(
            name.value(),
            value.into(),
            "Standard variable value cannot be empty",
        )?;
        Ok(Self { name, value: value.to_string() })
    }

    pub fn name(&self) -> &'static str {
        self.name.value()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToRecord for StandardVariable {
    fn to_record(&self) -> VariableRecord {
        single(self.name(), &self.value)
    }
}

/// The `schema_file` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePathVariable {
    name: FilePathVariableName,
    value: String,
}

impl FilePathVariable {
    pub fn create<'a>(
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> Result<Self, VariableError> {
        let name = FilePathVariableName::create(name)?;
        let value =
            require_value(name.value(), value.into(), "File path cannot be empty")?;
        Ok(Self { name, value: value.to_string() })
    }

    pub fn name(&self) -> &'static str {
        self.name.value()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToRecord for FilePathVariable {
    fn to_record(&self) -> VariableRecord {
        single(self.name(), &self.value)
    }
}

/// The `input_text` variable, filled from standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdinVariable {
    name: StdinVariableName,
    value: String,
}

impl StdinVariable {
    pub fn create<'a>(
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> Result<Self, VariableError> {
        let name = StdinVariableName::create(name)?;
        let value =
            require_value(name.value(), value.into(), "Stdin content cannot be empty")?;
        Ok(Self { name, value: value.to_string() })
    }

    pub fn name(&self) -> &'static str {
        self.name.value()
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToRecord for StdinVariable {
    fn to_record(&self) -> VariableRecord {
        single(self.name(), &self.value)
    }
}

/// A user-defined variable with an open name.
///
/// Unlike the other categories an empty value is accepted, since the CLI
/// allows `--uv-name=` to blank out a placeholder. Only a missing value is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserVariable {
    name: String,
    value: String,
}

impl UserVariable {
    pub fn create<'a>(
        name: &str,
        value: impl Into<Option<&'a str>>,
    ) -> Result<Self, VariableError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(VariableError::empty_key());
        }
        let Some(value) = value.into() else {
            return Err(VariableError::NullOrUndefined { variable_name: trimmed.to_string() });
        };
        Ok(Self { name: trimmed.to_string(), value: value.to_string() })
    }

    /// Trimmed name as given, including any `uv-` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name used as the record key: the `uv-` prefix is dropped.
    pub fn key(&self) -> &str {
        match self.name.strip_prefix(USER_VARIABLE_PREFIX) {
            Some(rest) if !rest.is_empty() => rest,
            _ => &self.name,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ToRecord for UserVariable {
    fn to_record(&self) -> VariableRecord {
        single(self.key(), &self.value)
    }
}
