use breakdown_core::path::{PathError, StdFileSystem};
use breakdown_core::prompt::{
    PromptError, PromptGenerator, PromptOptions, PromptTemplateResolver,
};
use breakdown_core::source::{SourceOrigin, SourceRecord, merge_sources};
use breakdown_core::templates::TemplateEngine;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn generator(root: &Path) -> PromptGenerator {
    PromptGenerator::new(
        PromptTemplateResolver::new(root.join("prompts"), root.join("schema")),
        TemplateEngine,
        StdFileSystem,
    )
}

#[test]
fn generates_prompt_from_merged_sources() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(
        &root.join("prompts/to/project/f_project.md"),
        "From {{input_text_file}} to {{destination_path}} ({{demonstrative_type}}/{{layer_type}}) by {{author}}\n{{input_text}}",
    );

    let merged = merge_sources([
        SourceRecord::defaults(),
        SourceRecord::new(SourceOrigin::Config)
            .with_user_variable("author", "config")
            .with_user_variable("company", "ACME"),
        SourceRecord::new(SourceOrigin::Stdin).with_stdin_content("# Goal"),
        SourceRecord::new(SourceOrigin::Cli)
            .with_directive("to")
            .with_layer("project")
            .with_input_file("project.md")
            .with_user_variable("author", "cli"),
    ]);

    let out = generator(root).generate(&merged, &PromptOptions::default()).unwrap();
    assert_eq!(out.content, "From project.md to stdout (to/project) by cli\n# Goal");
    assert!(out.template_path.as_path().ends_with("to/project/f_project.md"));
    assert_eq!(out.variables["company"], "ACME");
    assert!(out.missing_variables.is_empty());
}

#[test]
fn picks_up_default_schema_and_reports_missing_placeholders() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(&root.join("prompts/summary/issue/f_task.md"), "{{schema_file}} {{unknown}}");
    write(&root.join("schema/summary/issue/base.schema.md"), "schema");

    let source = SourceRecord::new(SourceOrigin::Cli)
        .with_directive("summary")
        .with_layer("issue")
        .with_input_file("notes/task-12.md");

    let out = generator(root).generate(&source, &PromptOptions::default()).unwrap();
    let schema = root.join("schema/summary/issue/base.schema.md");
    assert_eq!(out.variables["schema_file"], schema.to_string_lossy());
    assert_eq!(out.missing_variables, vec!["unknown".to_string()]);
    assert!(out.content.ends_with("{{unknown}}"));
}

#[test]
fn adaptation_selects_variant() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(&root.join("prompts/defect/task/f_issue_strict.md"), "strict");

    let source = SourceRecord::new(SourceOrigin::Cli)
        .with_directive("defect")
        .with_layer("task")
        .with_stdin_content("bug report");
    let options =
        PromptOptions { from_layer: Some("issue".into()), adaptation: Some("strict".into()) };

    let out = generator(root).generate(&source, &options).unwrap();
    assert_eq!(out.content, "strict");
}

#[test]
fn missing_template_is_file_not_found() {
    let tmp = tempdir().unwrap();
    let source = SourceRecord::new(SourceOrigin::Cli)
        .with_directive("to")
        .with_layer("task")
        .with_input_file("in.md");

    match generator(tmp.path()).generate(&source, &PromptOptions::default()) {
        Err(PromptError::Path(PathError::FileNotFound { path })) => {
            assert!(path.ends_with("f_task.md"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn incomplete_source_lists_all_problems() {
    let tmp = tempdir().unwrap();
    let source = SourceRecord::new(SourceOrigin::Cli);

    match generator(tmp.path()).generate(&source, &PromptOptions::default()) {
        Err(PromptError::IncompleteSource(errors)) => {
            assert_eq!(errors.len(), 2);
            let msg = PromptError::IncompleteSource(errors).to_string();
            assert!(msg.contains("directive or layer"));
            assert!(msg.contains("stdin content"));
        }
        other => panic!("expected IncompleteSource, got {other:?}"),
    }
}

#[test]
fn layer_alone_is_not_enough_to_locate_a_template() {
    let tmp = tempdir().unwrap();
    let source =
        SourceRecord::new(SourceOrigin::Cli).with_layer("task").with_input_file("in.md");

    match generator(tmp.path()).generate(&source, &PromptOptions::default()) {
        Err(PromptError::MissingTemplateParameter(name)) => assert_eq!(name, "directive"),
        other => panic!("expected MissingTemplateParameter, got {other:?}"),
    }
}
