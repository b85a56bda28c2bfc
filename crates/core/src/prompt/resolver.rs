//! Locate prompt templates and schema files on disk.
//!
//! Layout, relative to the configured base directories:
//!
//! ```text
//! {prompt_base_dir}/{directive}/{layer}/f_{from_layer}[_{adaptation}].md
//! {schema_base_dir}/{directive}/{layer}/base.schema.md
//! ```

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::path::{FileExists, PathError, PromptPath};

/// Layer names recognised when inferring the source layer from a file name.
pub const KNOWN_LAYERS: &[&str] = &["project", "issue", "task"];

const SCHEMA_FILE_NAME: &str = "base.schema.md";

/// Template selection knobs that are not part of the variable sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    /// Layer the input describes; inferred from the input file when absent.
    pub from_layer: Option<String>,
    /// Template variant suffix, e.g. `strict` for `f_project_strict.md`.
    pub adaptation: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PromptTemplateResolver {
    prompt_base_dir: PathBuf,
    schema_base_dir: PathBuf,
}

impl PromptTemplateResolver {
    pub fn new(
        prompt_base_dir: impl Into<PathBuf>,
        schema_base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            prompt_base_dir: prompt_base_dir.into(),
            schema_base_dir: schema_base_dir.into(),
        }
    }

    pub fn template_path(
        &self,
        directive: &str,
        layer: &str,
        input_file: Option<&str>,
        options: &PromptOptions,
    ) -> Result<PromptPath, PathError> {
        let from_layer = options
            .from_layer
            .clone()
            .or_else(|| input_file.and_then(infer_layer))
            .unwrap_or_else(|| layer.to_string());

        let file_name = match options.adaptation.as_deref().map(str::trim) {
            Some(a) if !a.is_empty() => format!("f_{from_layer}_{a}.md"),
            _ => format!("f_{from_layer}.md"),
        };

        let segments = [directive, layer, file_name.as_str()];
        let path = PromptPath::join(&self.prompt_base_dir, &segments)?;
        debug!(template = %path, "resolved prompt template");
        Ok(path)
    }

    /// The conventional schema file for `directive`/`layer`, if it exists.
    pub fn default_schema(
        &self,
        directive: &str,
        layer: &str,
        fs: &dyn FileExists,
    ) -> Result<Option<PromptPath>, PathError> {
        let segments = [directive, layer, SCHEMA_FILE_NAME];
        let path = PromptPath::join(&self.schema_base_dir, &segments)?;
        Ok(fs.exists(path.as_path()).then_some(path))
    }
}

/// First known layer name contained in the file stem of `input_file`.
pub fn infer_layer(input_file: &str) -> Option<String> {
    let stem = Path::new(input_file).file_stem()?.to_string_lossy().to_lowercase();
    KNOWN_LAYERS.iter().find(|layer| stem.contains(**layer)).map(|l| (*l).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PromptTemplateResolver {
        PromptTemplateResolver::new("prompts", "schema")
    }

    #[test]
    fn defaults_from_layer_to_layer() {
        let p = resolver().template_path("to", "project", None, &PromptOptions::default()).unwrap();
        assert!(p.as_path().ends_with("prompts/to/project/f_project.md"));
    }

    #[test]
    fn infers_from_layer_from_input_file() {
        let p = resolver()
            .template_path("to", "task", Some("docs/My-Issue-42.md"), &PromptOptions::default())
            .unwrap();
        assert!(p.as_path().ends_with("to/task/f_issue.md"));
    }

    #[test]
    fn explicit_from_layer_and_adaptation() {
        let options = PromptOptions {
            from_layer: Some("issue".into()),
            adaptation: Some("strict".into()),
        };
        let p = resolver().template_path("summary", "task", Some("project.md"), &options).unwrap();
        assert!(p.as_path().ends_with("summary/task/f_issue_strict.md"));
    }

    #[test]
    fn traversal_in_parameters_is_rejected() {
        let err = resolver()
            .template_path("..", "project", None, &PromptOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), "SecurityViolation");
    }

    #[test]
    fn default_schema_only_when_present() {
        let yes = |_: &Path| true;
        let no = |_: &Path| false;
        let found = resolver().default_schema("to", "issue", &yes).unwrap().unwrap();
        assert!(found.as_path().ends_with("schema/to/issue/base.schema.md"));
        assert!(resolver().default_schema("to", "issue", &no).unwrap().is_none());
    }

    #[test]
    fn infer_layer_checks_stem_only() {
        assert_eq!(infer_layer("project_plan.md").as_deref(), Some("project"));
        assert_eq!(infer_layer("tasks/notes.md"), None);
        assert_eq!(infer_layer("TASK.md").as_deref(), Some("task"));
    }
}
