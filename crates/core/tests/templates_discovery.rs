use breakdown_core::templates::discovery::{TemplateDiscoveryError, discover_prompt_templates};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn discovers_only_md_templates() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("prompts");

    write(&root.join("to/project/f_project.md"), "# to project");
    write(&root.join("to/issue/f_project.md"), "# to issue");
    write(&root.join("summary/task/f_task_strict.md"), "# summary");
    write(&root.join("to/task/notes.txt"), "# nope");
    write(&root.join("defect/issue/f_issue.markdown"), "# nope");

    let got = discover_prompt_templates(&root).expect("discover ok");
    let names: Vec<String> = got.into_iter().map(|t| t.logical_name).collect();

    assert_eq!(
        names,
        vec![
            "summary/task/f_task_strict".to_string(),
            "to/issue/f_project".to_string(),
            "to/project/f_project".to_string(),
        ]
    );
}

#[test]
fn missing_root_is_reported() {
    let tmp = tempdir().unwrap();
    let err = discover_prompt_templates(&tmp.path().join("absent")).unwrap_err();
    assert!(matches!(err, TemplateDiscoveryError::MissingDir(_)));
}
