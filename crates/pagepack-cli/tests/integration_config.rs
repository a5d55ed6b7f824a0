//! Integration tests for layered configuration loading.
//!
//! Priority, lowest first: defaults, config file, profile, environment, flags.

use pagepack_cli::cli::{ModeArg, ProjectArgs};
use pagepack_cli::config;
use pagepack_cli::error::CliError;
use pagepack_config::{ConfigError, Mode};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn args_for(dir: &TempDir) -> ProjectArgs {
    ProjectArgs {
        cwd: Some(dir.path().to_path_buf()),
        ..ProjectArgs::default()
    }
}

fn clear_env() {
    unsafe {
        std::env::remove_var("PAGEPACK_MODE");
        std::env::remove_var("PAGEPACK_DEV__PORT");
        std::env::remove_var("PAGEPACK_PAGES__ROOT");
    }
}

#[test]
#[serial]
fn test_defaults_without_config_file() {
    clear_env();
    let temp = TempDir::new().unwrap();

    let project = config::load(&args_for(&temp)).unwrap();
    assert!(project.source.is_none());
    assert_eq!(project.config.mode, Mode::Development);
    assert_eq!(project.pages_root(), temp.path().join("src"));
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagepack.toml"),
        "[pages]\nroot = \"pages\"\n[dev]\nport = 8080\n",
    )
    .unwrap();

    let project = config::load(&args_for(&temp)).unwrap();
    assert_eq!(project.source, Some(temp.path().join("pagepack.toml")));
    assert_eq!(project.config.pages.root, PathBuf::from("pages"));
    assert_eq!(project.config.dev.port, Some(8080));
}

#[test]
#[serial]
fn test_package_json_field_is_loaded() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "name": "site", "pagepack": { "devtool": "eval" } }"#,
    )
    .unwrap();

    let project = config::load(&args_for(&temp)).unwrap();
    assert_eq!(project.config.devtool(), Some("eval"));
}

#[test]
#[serial]
fn test_env_overrides_file_and_profile() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagepack.toml"),
        "[dev]\nport = 8080\n[profiles.ci.dev]\nport = 9000\n",
    )
    .unwrap();

    unsafe { std::env::set_var("PAGEPACK_DEV__PORT", "7000") };
    let args = ProjectArgs {
        profile: Some("ci".to_string()),
        ..args_for(&temp)
    };
    let project = config::load(&args).unwrap();
    clear_env();

    assert_eq!(project.config.dev.port, Some(7000));
}

#[test]
#[serial]
fn test_profile_overrides_file() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagepack.toml"),
        "[dev]\nport = 8080\n[profiles.ci.dev]\nport = 9000\n",
    )
    .unwrap();

    let args = ProjectArgs {
        profile: Some("ci".to_string()),
        ..args_for(&temp)
    };
    let project = config::load(&args).unwrap();
    assert_eq!(project.config.dev.port, Some(9000));
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env();
    let temp = TempDir::new().unwrap();

    unsafe { std::env::set_var("PAGEPACK_MODE", "development") };
    let args = ProjectArgs {
        mode: Some(ModeArg::Production),
        root: Some(PathBuf::from("web")),
        ..args_for(&temp)
    };
    let project = config::load(&args).unwrap();
    clear_env();

    assert_eq!(project.config.mode, Mode::Production);
    assert_eq!(project.config.pages.root, PathBuf::from("web"));
}

#[test]
#[serial]
fn test_mistyped_env_value_is_reported() {
    clear_env();
    let temp = TempDir::new().unwrap();

    unsafe { std::env::set_var("PAGEPACK_DEV__PORT", "not-a-port") };
    let result = config::load(&args_for(&temp));
    clear_env();

    assert!(matches!(result, Err(CliError::InvalidConfig { .. })));
}

#[test]
#[serial]
fn test_unknown_profile_is_reported() {
    clear_env();
    let temp = TempDir::new().unwrap();

    let args = ProjectArgs {
        profile: Some("production".to_string()),
        ..args_for(&temp)
    };
    let result = config::load(&args);
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::ProfileNotFound(_)))
    ));
}

#[test]
#[serial]
fn test_invalid_extension_fails_validation() {
    clear_env();
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagepack.toml"),
        "[pages]\nscript_extensions = [\".js\"]\n",
    )
    .unwrap();

    let result = config::load(&args_for(&temp));
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::InvalidValue { .. }))
    ));
}
