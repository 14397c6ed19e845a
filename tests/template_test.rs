use create_yoshi_app::{
    constants::DEFAULT_TEMPLATES_DIR,
    error::Error,
    template::{available_project_types, resolve_template_dir, TemplateTree},
    ProjectSpec, Transpiler,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn spec(project_type: &str, transpiler: Transpiler) -> ProjectSpec {
    ProjectSpec {
        project_name: "demo".to_string(),
        author_name: "A".to_string(),
        author_email: "a@x.com".to_string(),
        organization: "wix".to_string(),
        project_type: project_type.to_string(),
        transpiler,
    }
}

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn relative_paths(tree: &TemplateTree) -> Vec<PathBuf> {
    tree.files().iter().map(|f| f.relative_path.clone()).collect()
}

#[test]
fn test_resolve_template_dir_selects_transpiler_variant() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("client")).unwrap();
    fs::create_dir(temp_dir.path().join("client-typescript")).unwrap();

    let babel = resolve_template_dir(temp_dir.path(), &spec("client", Transpiler::Babel)).unwrap();
    assert_eq!(babel, temp_dir.path().join("client"));

    let typescript =
        resolve_template_dir(temp_dir.path(), &spec("client", Transpiler::Typescript)).unwrap();
    assert_eq!(typescript, temp_dir.path().join("client-typescript"));
}

#[test]
fn test_resolve_template_dir_has_no_fallback() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("server")).unwrap();

    let result = resolve_template_dir(temp_dir.path(), &spec("server", Transpiler::Typescript));
    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));

    let result = resolve_template_dir(temp_dir.path(), &spec("library", Transpiler::Babel));
    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
}

#[test]
fn test_resolve_template_dir_rejects_paths() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("templates/client")).unwrap();
    let templates_root = temp_dir.path().join("templates");

    for project_type in ["..", ".", "../templates/client", "client/../client"] {
        let result = resolve_template_dir(&templates_root, &spec(project_type, Transpiler::Babel));
        assert!(
            matches!(result, Err(Error::TemplateNotFound { .. })),
            "{project_type} should not resolve"
        );
    }
}

#[test]
fn test_available_project_types() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["server", "client-typescript", "client", "component-typescript"] {
        fs::create_dir(temp_dir.path().join(name)).unwrap();
    }
    touch(temp_dir.path(), "README.md", "not a template");

    let project_types = available_project_types(temp_dir.path()).unwrap();
    assert_eq!(project_types, ["client", "component", "server"]);
}

#[test]
fn test_available_project_types_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    let result = available_project_types(temp_dir.path().join("missing"));
    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
}

#[test]
fn test_bundled_templates() {
    let project_types = available_project_types(DEFAULT_TEMPLATES_DIR).unwrap();
    assert_eq!(project_types, ["client", "server"]);

    let tree = TemplateTree::load(Path::new(DEFAULT_TEMPLATES_DIR).join("client-typescript")).unwrap();
    let paths = relative_paths(&tree);
    assert!(paths.contains(&PathBuf::from("package.json")));
    assert!(paths.contains(&PathBuf::from(".gitignore")));
    assert!(paths.contains(&PathBuf::from("src/components/App.tsx")));
}

#[test]
fn test_template_tree_includes_dotfiles_and_nested_files() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "package.json", "{}");
    touch(temp_dir.path(), ".babelrc", "{}");
    touch(temp_dir.path(), "src/.eslintrc", "{}");
    touch(temp_dir.path(), "src/components/App.js", "");
    fs::create_dir(temp_dir.path().join("empty")).unwrap();

    let tree = TemplateTree::load(temp_dir.path()).unwrap();

    assert_eq!(tree.root(), temp_dir.path());
    assert_eq!(tree.len(), 4);
    let paths = relative_paths(&tree);
    for expected in [".babelrc", "package.json", "src/.eslintrc", "src/components/App.js"] {
        assert!(paths.contains(&PathBuf::from(expected)), "missing {expected}");
    }
}

#[test]
fn test_template_tree_honors_ignore_file() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), ".gitignore", "build/**\n*.log\n");
    touch(temp_dir.path(), "index.js", "");
    touch(temp_dir.path(), "build/bundle.js", "");
    touch(temp_dir.path(), "build/nested/chunk.js", "");
    touch(temp_dir.path(), "src/debug.log", "");

    let tree = TemplateTree::load(temp_dir.path()).unwrap();

    assert_eq!(relative_paths(&tree), [PathBuf::from(".gitignore"), PathBuf::from("index.js")]);
}

#[test]
fn test_ignored_directory_is_pruned() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), ".gitignore", "build/\n!build/keep.js\n");
    touch(temp_dir.path(), "index.js", "");
    touch(temp_dir.path(), "build/keep.js", "");
    touch(temp_dir.path(), "build/bundle.js", "");
    touch(temp_dir.path(), "src/build/nested.js", "");

    let tree = TemplateTree::load(temp_dir.path()).unwrap();

    assert_eq!(relative_paths(&tree), [PathBuf::from(".gitignore"), PathBuf::from("index.js")]);
}

#[cfg(unix)]
#[test]
fn test_template_tree_follows_symlinks() {
    use std::os::unix::fs::symlink;

    let shared = TempDir::new().unwrap();
    touch(shared.path(), "util.js", "shared");
    touch(shared.path(), "README.md", "");
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "index.js", "");
    symlink(shared.path(), temp_dir.path().join("lib")).unwrap();
    symlink(shared.path().join("util.js"), temp_dir.path().join("util.js")).unwrap();

    let tree = TemplateTree::load(temp_dir.path()).unwrap();

    assert_eq!(
        relative_paths(&tree),
        [
            PathBuf::from("index.js"),
            PathBuf::from("lib/README.md"),
            PathBuf::from("lib/util.js"),
            PathBuf::from("util.js"),
        ]
    );
    let linked = tree.files().iter().find(|f| f.relative_path == Path::new("lib/util.js")).unwrap();
    assert_eq!(fs::read_to_string(&linked.source).unwrap(), "shared");
}

#[test]
fn test_template_tree_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = TemplateTree::load(temp_dir.path().join("missing"));
    assert!(matches!(result, Err(Error::TemplateNotFound { .. })));
}
