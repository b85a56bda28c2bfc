//! Raw, pre-validation input records tagged with their origin.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Where a [`SourceRecord`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceOrigin {
    Default,
    Config,
    Stdin,
    Cli,
    /// Result of [`crate::source::merge_sources`].
    Merged,
}

impl SourceOrigin {
    /// Merge rank; higher wins. A merged record ranks with the defaults.
    pub fn priority(self) -> u8 {
        match self {
            SourceOrigin::Default | SourceOrigin::Merged => 0,
            SourceOrigin::Config => 1,
            SourceOrigin::Stdin => 2,
            SourceOrigin::Cli => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceOrigin::Default => "DEFAULT",
            SourceOrigin::Config => "CONFIG",
            SourceOrigin::Stdin => "STDIN",
            SourceOrigin::Cli => "CLI",
            SourceOrigin::Merged => "MERGED",
        }
    }
}

impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceMetadata {
    pub origin: SourceOrigin,
    pub timestamp: DateTime<Utc>,
    /// Origin-specific details (config path, profile, argv, ...).
    pub extras: BTreeMap<String, String>,
}

impl SourceMetadata {
    pub fn new(origin: SourceOrigin) -> Self {
        Self { origin, timestamp: Utc::now(), extras: BTreeMap::new() }
    }
}

/// Loosely-typed input from one origin. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub directive: Option<String>,
    pub layer: Option<String>,
    pub input_file: Option<String>,
    pub destination_path: Option<String>,
    pub schema_file: Option<String>,
    pub stdin_content: Option<String>,
    pub user_variables: BTreeMap<String, String>,
    pub metadata: SourceMetadata,
}

impl SourceRecord {
    pub fn new(origin: SourceOrigin) -> Self {
        Self {
            directive: None,
            layer: None,
            input_file: None,
            destination_path: None,
            schema_file: None,
            stdin_content: None,
            user_variables: BTreeMap::new(),
            metadata: SourceMetadata::new(origin),
        }
    }

    /// Built-in fallbacks, the lowest-priority source.
    pub fn defaults() -> Self {
        Self::new(SourceOrigin::Default).with_destination_path("stdout")
    }

    pub fn origin(&self) -> SourceOrigin {
        self.metadata.origin
    }

    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = Some(directive.into());
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_input_file(mut self, input_file: impl Into<String>) -> Self {
        self.input_file = Some(input_file.into());
        self
    }

    pub fn with_destination_path(mut self, destination_path: impl Into<String>) -> Self {
        self.destination_path = Some(destination_path.into());
        self
    }

    pub fn with_schema_file(mut self, schema_file: impl Into<String>) -> Self {
        self.schema_file = Some(schema_file.into());
        self
    }

    pub fn with_stdin_content(mut self, content: impl Into<String>) -> Self {
        self.stdin_content = Some(content.into());
        self
    }

    pub fn with_user_variable(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.user_variables.insert(key.into(), value.into());
        self
    }

    pub fn with_user_variables<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.user_variables.extend(vars);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.extras.insert(key.into(), value.into());
        self
    }
}
