use breakdown_core::config::loader::{ConfigLoader, default_config_path};
use breakdown_core::templates::discover_prompt_templates;
use std::path::Path;

use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL breakdown list-prompts");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    if let Err(e) = logging::init(&rc.logging) {
        println!("FAIL breakdown list-prompts");
        println!("{e}");
        std::process::exit(1);
    }

    match discover_prompt_templates(&rc.prompt_base_dir) {
        Ok(list) => {
            if list.is_empty() {
                println!("(no prompts found)");
                return;
            }
            for t in &list {
                println!("{}", t.logical_name);
            }
            println!("-- {} prompts --", list.len());
        }
        Err(e) => {
            println!("FAIL breakdown list-prompts");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
