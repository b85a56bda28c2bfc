//! Priority merge and completeness check of raw sources.

use thiserror::Error;
use tracing::debug;

use super::types::{SourceOrigin, SourceRecord};

/// Merge `sources` into one record stamped `MERGED`.
///
/// Sources are applied from lowest to highest priority
/// (`DEFAULT < CONFIG < STDIN < CLI`), independent of argument order. Scalar
/// fields take the value of the highest-priority source that sets them; user
/// variables are merged key by key. Sources of equal priority apply in the
/// order given.
#[must_use]
pub fn merge_sources<I>(sources: I) -> SourceRecord
where
    I: IntoIterator<Item = SourceRecord>,
{
    let mut sources: Vec<SourceRecord> = sources.into_iter().collect();
    sources.sort_by_key(|s| s.origin().priority());

    debug!(
        origins = ?sources.iter().map(|s| s.origin().as_str()).collect::<Vec<_>>(),
        "merging sources"
    );

    let mut merged = SourceRecord::new(SourceOrigin::Merged);
    for source in sources {
        overlay(&mut merged.directive, source.directive);
        overlay(&mut merged.layer, source.layer);
        overlay(&mut merged.input_file, source.input_file);
        overlay(&mut merged.destination_path, source.destination_path);
        overlay(&mut merged.schema_file, source.schema_file);
        overlay(&mut merged.stdin_content, source.stdin_content);
        merged.user_variables.extend(source.user_variables);
    }
    merged
}

fn overlay(target: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *target = value;
    }
}

/// A missing piece of input detected by [`validate_source`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct SourceValidationError {
    pub field: String,
    pub message: String,
}

/// Report every completeness problem of `source`, not just the first.
pub fn validate_source(source: &SourceRecord) -> Vec<SourceValidationError> {
    let mut errors = Vec::new();
    if source.directive.is_none() && source.layer.is_none() {
        errors.push(SourceValidationError {
            field: "directive|layer".to_string(),
            message: "Either directive or layer must be specified".to_string(),
        });
    }
    if source.input_file.is_none() && source.stdin_content.is_none() {
        errors.push(SourceValidationError {
            field: "input_file|stdin_content".to_string(),
            message: "Either input file or stdin content must be specified".to_string(),
        });
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(origin: SourceOrigin) -> SourceRecord {
        SourceRecord::new(origin).with_directive(origin.as_str())
    }

    #[test]
    fn cli_wins_regardless_of_order() {
        let orders = [
            [SourceOrigin::Default, SourceOrigin::Config, SourceOrigin::Stdin, SourceOrigin::Cli],
            [SourceOrigin::Cli, SourceOrigin::Stdin, SourceOrigin::Config, SourceOrigin::Default],
            [SourceOrigin::Stdin, SourceOrigin::Cli, SourceOrigin::Default, SourceOrigin::Config],
        ];
        for order in orders {
            let merged = merge_sources(order.map(tagged));
            assert_eq!(merged.directive.as_deref(), Some("CLI"), "order {order:?}");
            assert_eq!(merged.origin(), SourceOrigin::Merged);
        }
    }

    #[test]
    fn lower_priority_fills_gaps() {
        let merged = merge_sources([
            SourceRecord::new(SourceOrigin::Cli).with_layer("task"),
            SourceRecord::new(SourceOrigin::Config).with_layer("issue").with_schema_file("s.md"),
            SourceRecord::defaults(),
        ]);
        assert_eq!(merged.layer.as_deref(), Some("task"));
        assert_eq!(merged.schema_file.as_deref(), Some("s.md"));
        assert_eq!(merged.destination_path.as_deref(), Some("stdout"));
        assert_eq!(merged.input_file, None);
    }

    #[test]
    fn user_variables_merge_per_key() {
        let merged = merge_sources([
            SourceRecord::new(SourceOrigin::Cli).with_user_variable("shared", "cli"),
            SourceRecord::new(SourceOrigin::Config)
                .with_user_variable("shared", "config")
                .with_user_variable("company", "ACME"),
        ]);
        assert_eq!(merged.user_variables["shared"], "cli");
        assert_eq!(merged.user_variables["company"], "ACME");
    }

    #[test]
    fn merged_gets_fresh_metadata() {
        let cli = SourceRecord::new(SourceOrigin::Cli).with_extra("argv", "to project");
        let stamp = cli.metadata.timestamp;
        let merged = merge_sources([cli]);
        assert!(merged.metadata.timestamp >= stamp);
        assert!(merged.metadata.extras.is_empty());
    }

    #[test]
    fn validate_accumulates_all_errors() {
        let errors = validate_source(&SourceRecord::new(SourceOrigin::Cli));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "directive|layer");
        assert_eq!(errors[1].field, "input_file|stdin_content");

        let one = validate_source(&SourceRecord::new(SourceOrigin::Cli).with_layer("task"));
        assert_eq!(one.len(), 1);

        let none = validate_source(
            &SourceRecord::new(SourceOrigin::Cli).with_directive("to").with_stdin_content("x"),
        );
        assert!(none.is_empty());
    }
}
