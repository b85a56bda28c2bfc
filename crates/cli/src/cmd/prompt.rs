use breakdown_core::config::loader::{ConfigLoader, default_config_path};
use breakdown_core::prompt::{PromptGenerator, PromptOptions};
use breakdown_core::source::{SourceOrigin, SourceRecord, merge_sources};
use breakdown_core::variables::{ToRecord, UserPromptVariables};
use serde_json::{Map, Value};
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::PromptArgs;
use crate::logging;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    directive: &str,
    args: &PromptArgs,
    user_options: &Map<String, Value>,
) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL breakdown {directive}");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };
    if let Err(e) = logging::init(&rc.logging) {
        fail(directive, e);
    }

    let cli_source = match cli_source(directive, args, user_options) {
        Ok(s) => s,
        Err(e) => fail(directive, e),
    };

    let mut sources = vec![SourceRecord::defaults(), rc.to_source(), cli_source];
    if args.stdin {
        match read_stdin() {
            Ok(content) => sources.push(
                SourceRecord::new(SourceOrigin::Stdin).with_stdin_content(content),
            ),
            Err(e) => fail(directive, e),
        }
    }
    let merged = merge_sources(sources);

    let options = PromptOptions {
        from_layer: args.from_layer.map(|l| l.as_str().to_string()),
        adaptation: args.adaptation.clone(),
    };

    match PromptGenerator::from_config(&rc).generate(&merged, &options) {
        Ok(prompt) => {
            tracing::debug!(template = %prompt.template_path, "writing prompt to stdout");
            print!("{}", prompt.content);
        }
        Err(e) => fail(directive, e),
    }
}

fn cli_source(
    directive: &str,
    args: &PromptArgs,
    user_options: &Map<String, Value>,
) -> Result<SourceRecord, String> {
    let user = UserPromptVariables::from_options(user_options).map_err(|e| e.to_string())?;

    let mut source = SourceRecord::new(SourceOrigin::Cli)
        .with_directive(directive)
        .with_layer(args.layer.as_str())
        .with_user_variables(user.to_record())
        .with_extra("command", directive);
    if let Some(from) = &args.from {
        source = source.with_input_file(from.clone());
    }
    if let Some(dest) = &args.destination {
        source = source.with_destination_path(dest.clone());
    }
    if let Some(schema) = &args.schema {
        source = source.with_schema_file(schema.to_string_lossy());
    }
    Ok(source)
}

fn read_stdin() -> Result<String, String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("--stdin given but standard input is a terminal".to_string());
    }
    let mut content = String::new();
    stdin
        .read_to_string(&mut content)
        .map_err(|e| format!("failed to read standard input: {e}"))?;
    if content.trim().is_empty() {
        return Err("--stdin given but standard input was empty".to_string());
    }
    Ok(content)
}

fn fail(directive: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("FAIL breakdown {directive}");
    eprintln!("{err}");
    std::process::exit(1);
}
