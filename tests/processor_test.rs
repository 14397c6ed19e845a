use std::path::PathBuf;

use create_yoshi_app::{
    error::Error,
    processor::{copy_file, write_file, FileAction, FileOperation, Processor},
    project::ValuesMap,
    template::TemplateFile,
};
use tempfile::TempDir;

fn template_file(root: &TempDir, relative: &str, content: &[u8]) -> TemplateFile {
    let source = root.path().join(relative);
    std::fs::create_dir_all(source.parent().unwrap()).unwrap();
    std::fs::write(&source, content).unwrap();
    TemplateFile { source, relative_path: PathBuf::from(relative) }
}

fn values() -> ValuesMap {
    ValuesMap::from([("projectName".to_string(), "demo".to_string())])
}

#[test]
fn test_text_with_placeholders_is_written() {
    let template = TempDir::new().unwrap();
    let file = template_file(&template, "src/index.js", b"export const name = '{{projectName}}';");
    let values = values();
    let output = PathBuf::from("output");

    let result = Processor::new(&output, &values).process(&file).unwrap();

    assert_eq!(result.relative_path, PathBuf::from("src/index.js"));
    assert_eq!(
        result.operation,
        FileOperation::Write {
            target: PathBuf::from("output/src/index.js"),
            content: "export const name = 'demo';".to_string(),
        }
    );
    assert_eq!(result.operation.action(), FileAction::Rendered);
}

#[test]
fn test_text_without_placeholders_is_copied() {
    let template = TempDir::new().unwrap();
    let file = template_file(&template, "LICENSE", b"MIT License");
    let values = values();
    let output = PathBuf::from("output");

    let result = Processor::new(&output, &values).process(&file).unwrap();

    assert_eq!(result.operation, FileOperation::Copy { target: PathBuf::from("output/LICENSE") });
    assert_eq!(result.operation.action().to_string(), "copied");
}

#[test]
fn test_binary_is_copied() {
    let template = TempDir::new().unwrap();
    let file = template_file(&template, "favicon.ico", &[0x00, 0xff, 0xfe, b'{', b'{']);
    let values = values();
    let output = PathBuf::from("output");

    let result = Processor::new(&output, &values).process(&file).unwrap();

    assert_eq!(result.operation.target(), PathBuf::from("output/favicon.ico"));
    assert_eq!(result.operation.action(), FileAction::Copied);
}

#[test]
fn test_unreadable_source() {
    let template = TempDir::new().unwrap();
    let file = TemplateFile {
        source: template.path().join("missing.js"),
        relative_path: PathBuf::from("missing.js"),
    };
    let values = values();
    let output = PathBuf::from("output");

    let result = Processor::new(&output, &values).process(&file);
    assert!(matches!(result, Err(Error::FileSystemError { .. })));
}

#[test]
fn test_write_and_copy_create_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let written = temp_dir.path().join("a/b/c.txt");
    write_file("content", &written).unwrap();
    write_file("content again", &written).unwrap();
    assert_eq!(std::fs::read_to_string(&written).unwrap(), "content again");

    let copied = temp_dir.path().join("x/y/z.txt");
    copy_file(&written, &copied).unwrap();
    assert_eq!(std::fs::read_to_string(&copied).unwrap(), "content again");
}
