use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    /// Path relative to the prompt base dir, without extension,
    /// e.g. `to/project/f_issue`.
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("prompt directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read prompt directory {0} : {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// List every prompt template (`*.md`) below `root`, sorted by logical name.
pub fn discover_prompt_templates(
    root: &Path,
) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_template_file(path) {
            continue;
        }
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        out.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(out)
}

fn is_template_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

fn logical_name_from_relative(rel: &Path) -> String {
    let no_ext = rel.with_extension("");
    no_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_name_uses_forward_slashes() {
        let rel = Path::new("to").join("project").join("f_issue.md");
        assert_eq!(logical_name_from_relative(&rel), "to/project/f_issue");
    }

    #[test]
    fn only_markdown_counts() {
        assert!(is_template_file(Path::new("a/f_task.md")));
        assert!(!is_template_file(Path::new("a/base.schema.json")));
        assert!(!is_template_file(Path::new("a/README")));
    }
}
