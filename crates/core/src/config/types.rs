use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::Deserialize;

use crate::source::{SourceOrigin, SourceRecord};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub working_dir: String,
    pub prompt_base_dir: String,
    /// Defaults to `{{working_dir}}/schema`.
    pub schema_base_dir: Option<String>,
    /// User variables supplied by the config, overridable from the CLI.
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub working_dir: PathBuf,
    pub prompt_base_dir: PathBuf,
    pub schema_base_dir: PathBuf,
    pub variables: BTreeMap<String, String>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// The CONFIG-origin source for the merge step.
    pub fn to_source(&self) -> SourceRecord {
        SourceRecord::new(SourceOrigin::Config)
            .with_user_variables(self.variables.clone())
            .with_extra("profile", self.active_profile.clone())
            .with_extra("working_dir", self.working_dir.to_string_lossy())
    }
}
