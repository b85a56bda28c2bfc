use breakdown_core::config::loader::{ConfigLoader, default_config_path};
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            if let Err(e) = logging::init(&rc.logging) {
                println!("FAIL breakdown doctor");
                println!("{e}");
                std::process::exit(1);
            }
            tracing::debug!("doctor: config loaded");
            println!("OK   breakdown doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("working_dir: {}", rc.working_dir.display());
            println!("prompt_base_dir: {}", rc.prompt_base_dir.display());
            println!("schema_base_dir: {}", rc.schema_base_dir.display());
            println!("variables: {}", rc.variables.len());
        }
        Err(e) => {
            println!("FAIL breakdown doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
