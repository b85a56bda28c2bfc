//! Closed allow-lists of variable names, one type per category.
//!
//! Names are matched exactly: no trimming, case-sensitive. A failed match
//! reports the full allow-list of the category.

use std::fmt;

use super::errors::VariableError;

/// Resolve `name` against `allowed`, returning the canonical entry.
fn lookup(name: &str, allowed: &'static [&'static str]) -> Result<&'static str, VariableError> {
    allowed
        .iter()
        .copied()
        .find(|candidate| *candidate == name)
        .ok_or_else(|| VariableError::invalid_name(name, allowed))
}

/// Name of a standard variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StandardVariableName(&'static str);

impl StandardVariableName {
    pub const INPUT_TEXT_FILE: &'static str = "input_text_file";
    pub const DESTINATION_PATH: &'static str = "destination_path";
    pub const DEMONSTRATIVE_TYPE: &'static str = "demonstrative_type";
    pub const LAYER_TYPE: &'static str = "layer_type";

    pub const VALID_NAMES: &'static [&'static str] = &[
        Self::INPUT_TEXT_FILE,
        Self::DESTINATION_PATH,
        Self::DEMONSTRATIVE_TYPE,
        Self::LAYER_TYPE,
    ];

    pub fn create(name: &str) -> Result<Self, VariableError> {
        lookup(name, Self::VALID_NAMES).map(Self)
    }

    pub fn value(&self) -> &'static str {
        self.0
    }
}

/// Name of a file-path variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilePathVariableName(&'static str);

impl FilePathVariableName {
    pub const SCHEMA_FILE: &'static str = "schema_file";

    pub const VALID_NAMES: &'static [&'static str] = &[Self::SCHEMA_FILE];

    pub fn create(name: &str) -> Result<Self, VariableError> {
        lookup(name, Self::VALID_NAMES).map(Self)
    }

    pub fn value(&self) -> &'static str {
        self.0
    }
}

/// Name of a stdin variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StdinVariableName(&'static str);

impl StdinVariableName {
    pub const INPUT_TEXT: &'static str = "input_text";

    pub const VALID_NAMES: &'static [&'static str] = &[Self::INPUT_TEXT];

    pub fn create(name: &str) -> Result<Self, VariableError> {
        lookup(name, Self::VALID_NAMES).map(Self)
    }

    pub fn value(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StandardVariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for FilePathVariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for StdinVariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("input_text_file")]
    #[case("destination_path")]
    #[case("demonstrative_type")]
    #[case("layer_type")]
    fn standard_accepts_every_allowed_name(#[case] name: &str) {
        let n = StandardVariableName::create(name).unwrap();
        assert_eq!(n.value(), name);
    }

    #[rstest]
    #[case("")]
    #[case("input_text")]
    #[case(" layer_type")]
    #[case("LAYER_TYPE")]
    #[case("schema_file")]
    fn standard_rejects_with_full_allow_list(#[case] name: &str) {
        let err = StandardVariableName::create(name).unwrap_err();
        match err {
            VariableError::InvalidName { name: got, valid_names } => {
                assert_eq!(got, name);
                assert_eq!(valid_names, StandardVariableName::VALID_NAMES);
            }
            other => panic!("expected InvalidName, got {other:?}"),
        }
    }

    #[test]
    fn file_path_allows_only_schema_file() {
        assert_eq!(FilePathVariableName::create("schema_file").unwrap().value(), "schema_file");
        let err = FilePathVariableName::create("input_text_file").unwrap_err();
        assert_eq!(
            err,
            VariableError::InvalidName {
                name: "input_text_file".into(),
                valid_names: vec!["schema_file".into()],
            }
        );
    }

    #[test]
    fn stdin_allows_only_input_text() {
        assert_eq!(StdinVariableName::create("input_text").unwrap().to_string(), "input_text");
        assert!(StdinVariableName::create("input_text ").is_err());
    }
}
