//! Splitting `--uv-<name>[=<value>]` options out of argv.
//!
//! User variable names are open-ended, so clap cannot declare them. They are
//! removed before parsing and handed to the core as a raw options map.

use breakdown_core::variables::USER_VARIABLE_PREFIX;
use serde_json::{Map, Value};

/// Partition `args` into clap-bound arguments and a raw options map keyed
/// `uv-<name>`.
///
/// The value is taken from `--uv-<name>=<value>`, or else from the next
/// argument when it does not start with `-`. A `--uv-<name>` with neither is
/// recorded as `true`. Everything after a `--` terminator is left to clap.
pub fn split_user_variable_args<I>(args: I) -> (Vec<String>, Map<String, Value>)
where
    I: IntoIterator<Item = String>,
{
    let mut rest = Vec::new();
    let mut options = Map::new();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        if arg == "--" {
            rest.push(arg);
            rest.extend(args);
            break;
        }
        let Some(option) = arg.strip_prefix("--") else {
            rest.push(arg);
            continue;
        };
        if !option.starts_with(USER_VARIABLE_PREFIX) {
            rest.push(arg);
            continue;
        }
        if let Some((key, value)) = option.split_once('=') {
            options.insert(key.to_string(), Value::String(value.to_string()));
            continue;
        }
        let value = match args.next_if(|next| !next.starts_with('-')) {
            Some(next) => Value::String(next),
            None => Value::Bool(true),
        };
        options.insert(option.to_string(), value);
    }

    (rest, options)
}
