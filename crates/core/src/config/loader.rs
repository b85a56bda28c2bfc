//! Locate, parse and resolve `config.toml` into a [`ResolvedConfig`].

use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use crate::path::{PathError, validate_path};
use crate::variables::{UserPromptVariables, VariableError};

const SUPPORTED_VERSION: u32 = 1;
const DEFAULT_PROFILE: &str = "default";
const WORKING_DIR_PLACEHOLDER: &str = "{{working_dir}}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{name}' not found (available: {})", .available.join(", "))]
    ProfileNotFound { name: String, available: Vec<String> },

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("profile '{profile}': {field} {source}")]
    BadDirectory {
        profile: String,
        field: &'static str,
        #[source]
        source: PathError,
    },

    #[error("profile '{profile}': invalid user variable: {source}")]
    BadVariable {
        profile: String,
        #[source]
        source: VariableError,
    },
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `config_path` (or [`default_config_path`]) and resolve the profile
    /// named by `profile_override`, the file's `profile`, or `default`.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let file = Self::read(&path)?;

        let active = profile_override
            .or(file.profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
            .to_string();
        let Some(profile) = file.profiles.get(&active) else {
            let mut available: Vec<String> = file.profiles.keys().cloned().collect();
            available.sort();
            return Err(ConfigError::ProfileNotFound { name: active, available });
        };

        tracing::debug!(profile = %active, path = %path.display(), "loaded config");
        resolve_profile(&active, profile, &file.logging)
    }

    fn read(path: &Path) -> Result<ConfigFile, ConfigError> {
        let shown = || path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::NotFound(shown()));
        }
        let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(shown(), e))?;
        let file: ConfigFile =
            toml::from_str(&text).map_err(|e| ConfigError::ParseError(shown(), e))?;

        if file.version != SUPPORTED_VERSION {
            return Err(ConfigError::BadVersion(file.version));
        }
        if file.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }
        Ok(file)
    }
}

fn resolve_profile(
    name: &str,
    profile: &Profile,
    logging: &LoggingConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let working_dir = expand_path(&profile.working_dir)?;
    let resolve_dir = |field: &'static str, raw: &str| -> Result<PathBuf, ConfigError> {
        let dir = expand_path(&substitute(raw, &working_dir))?;
        validate_path(&dir.to_string_lossy()).map_err(|source| ConfigError::BadDirectory {
            profile: name.to_string(),
            field,
            source,
        })?;
        Ok(dir)
    };

    let prompt_base_dir = resolve_dir("prompt_base_dir", &profile.prompt_base_dir)?;
    let schema_base_dir = match &profile.schema_base_dir {
        Some(dir) => resolve_dir("schema_base_dir", dir)?,
        None => working_dir.join("schema"),
    };

    // Config variables go through the same rules as `--uv-*` options.
    UserPromptVariables::create(&profile.variables).map_err(|source| {
        ConfigError::BadVariable { profile: name.to_string(), source }
    })?;

    let file = match &logging.file {
        Some(file) => Some(expand_path(&substitute(&file.to_string_lossy(), &working_dir))?),
        None => None,
    };

    Ok(ResolvedConfig {
        active_profile: name.to_string(),
        working_dir,
        prompt_base_dir,
        schema_base_dir,
        variables: profile.variables.clone(),
        logging: LoggingConfig { file, ..logging.clone() },
    })
}

pub fn default_config_path() -> PathBuf {
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config"),
    };
    base.join("breakdown").join("config.toml")
}

fn substitute(raw: &str, working_dir: &Path) -> String {
    raw.replace(WORKING_DIR_PLACEHOLDER, &working_dir.to_string_lossy())
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.into_owned()))
}
