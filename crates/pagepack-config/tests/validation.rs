//! Tests for configuration validation.

use pagepack_config::{
    BuildConfig, ConfigError, ConfigValidator, DiscoveredPages, FsValidator, Output,
    PageDiscovery, ProjectConfig, SchemaValidator, discover_and_compose,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_page(root: &Path, name: &str, files: &[&str]) {
    let dir = root.join("src").join(name);
    fs::create_dir_all(&dir).expect("create page dir");
    for file in files {
        fs::write(dir.join(file), "").expect("write page file");
    }
}

#[test]
fn validate_succeeds_for_complete_pages() {
    let dir = TempDir::new().expect("tempdir");
    write_page(dir.path(), "home", &["index.js", "index.html"]);
    write_page(dir.path(), "about", &["index.js", "index.html"]);

    let build = discover_and_compose(&ProjectConfig::default(), dir.path()).expect("compose");
    assert!(FsValidator::new(dir.path()).validate(&build).is_ok());
}

#[test]
fn validate_catches_entry_removed_after_discovery() {
    let dir = TempDir::new().expect("tempdir");
    write_page(dir.path(), "home", &["index.js", "index.html"]);

    let build = discover_and_compose(&ProjectConfig::default(), dir.path()).expect("compose");
    fs::remove_file(dir.path().join("src/home/index.js")).expect("remove entry");

    match FsValidator::new(dir.path()).validate(&build).unwrap_err() {
        ConfigError::EntryNotFound { path } => assert!(path.ends_with("home/index.js")),
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn validate_catches_missing_template() {
    let dir = TempDir::new().expect("tempdir");
    write_page(dir.path(), "home", &["index.js"]);

    let build = discover_and_compose(&ProjectConfig::default(), dir.path()).expect("compose");
    let err = FsValidator::new(dir.path()).validate(&build).unwrap_err();
    assert!(matches!(err, ConfigError::TemplateNotFound { ref page, .. } if page == "home"));
}

#[test]
fn custom_template_extension_is_checked() {
    let dir = TempDir::new().expect("tempdir");
    write_page(dir.path(), "home", &["index.js", "index.html"]);

    let pages = PageDiscovery::new(dir.path().join("src"))
        .template_extension("ejs")
        .discover()
        .expect("discover");
    let build = BuildConfig::builder(pages).build().expect("build");

    let err = FsValidator::new(dir.path()).validate(&build).unwrap_err();
    match err {
        ConfigError::TemplateNotFound { path, .. } => {
            assert_eq!(path, dir.path().join("src/home/index.ejs"));
        }
        other => panic!("expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn schema_errors_carry_hints() {
    let dir = TempDir::new().expect("tempdir");
    write_page(dir.path(), "home", &["index.js", "index.html"]);
    write_page(dir.path(), "about", &["index.js", "index.html"]);

    let pages = PageDiscovery::new(dir.path().join("src"))
        .discover()
        .expect("discover");
    let build = BuildConfig::builder(pages)
        .output(Output {
            filename: "app.js".to_string(),
            path: PathBuf::from("dist"),
        })
        .build()
        .expect("build");

    let err = SchemaValidator.validate(&build).unwrap_err();
    assert!(err.hint().is_some_and(|hint| hint.contains("[name]")));
}

#[test]
fn empty_build_is_valid() {
    let build = BuildConfig::builder(DiscoveredPages::default())
        .build()
        .expect("build");
    assert!(SchemaValidator.validate(&build).is_ok());
    assert!(FsValidator::new("/nonexistent").validate(&build).is_ok());
}

#[test]
fn project_validate_rejects_empty_extension_list() {
    let mut config = ProjectConfig::default();
    config.pages.script_extensions.clear();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "pages.script_extensions"));
}

#[test]
fn project_validate_rejects_path_like_template_extension() {
    let mut config = ProjectConfig::default();
    config.pages.template_extension = "tpl/html".to_string();
    assert!(config.validate().is_err());
}
