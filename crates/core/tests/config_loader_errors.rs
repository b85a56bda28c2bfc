use breakdown_core::config::loader::{ConfigError, ConfigLoader};
use breakdown_core::path::PathError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn missing_file_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("nope/config.toml");
    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::NotFound(_) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn bad_version_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 2\nprofiles = {}\n");

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::BadVersion(2) => {}
        other => panic!("expected BadVersion(2), got {other:?}"),
    }
}

#[test]
fn no_profiles_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\nprofiles = {}\n");

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::NoProfiles => {}
        other => panic!("expected NoProfiles, got {other:?}"),
    }
}

#[test]
fn malformed_toml_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = = 1\n");

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::ParseError(..) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn profile_not_found_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"
[profiles.default]
working_dir = "/tmp/wd"
prompt_base_dir = "{{working_dir}}/prompts"
"#;
    write_file(&cfg_path, toml);

    let err = ConfigLoader::load(Some(&cfg_path), Some("missing")).unwrap_err();
    assert_eq!(err.to_string(), "profile 'missing' not found (available: default)");
    match err {
        ConfigError::ProfileNotFound { name, available } => {
            assert_eq!(name, "missing");
            assert_eq!(available, vec!["default".to_string()]);
        }
        other => panic!("expected ProfileNotFound, got {other:?}"),
    }
}

#[test]
fn non_string_profile_variable_fails_to_parse() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
working_dir = "/tmp/wd"
prompt_base_dir = "{{working_dir}}/prompts"

[profiles.default.variables]
sprint = 12
"#;
    write_file(&cfg_path, toml);

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::ParseError(..) => {}
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn blank_profile_variable_name_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.work]
working_dir = "/tmp/wd"
prompt_base_dir = "{{working_dir}}/prompts"

[profiles.work.variables]
"  " = "nobody"
"#;
    write_file(&cfg_path, toml);

    let err = ConfigLoader::load(Some(&cfg_path), Some("work")).unwrap_err();
    match err {
        ConfigError::BadVariable { profile, source } => {
            assert_eq!(profile, "work");
            assert_eq!(source.kind(), "EmptyKey");
        }
        other => panic!("expected BadVariable, got {other:?}"),
    }
}

#[test]
fn traversal_in_prompt_dir_fails() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
[profiles.default]
working_dir = "/tmp/wd"
prompt_base_dir = "{{working_dir}}/../elsewhere"
"#;
    write_file(&cfg_path, toml);

    let err = ConfigLoader::load(Some(&cfg_path), None).unwrap_err();
    match err {
        ConfigError::BadDirectory { field, source: PathError::SecurityViolation { .. }, .. } => {
            assert_eq!(field, "prompt_base_dir");
        }
        other => panic!("expected BadDirectory, got {other:?}"),
    }
}
