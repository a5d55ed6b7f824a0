use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use pagepack_config::{ConfigDiscovery, Mode, ProjectConfig, read_config_value};
use serde::Serialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::ProjectArgs;
use crate::commands::utils;
use crate::config::LoadedProject;
use crate::error::{CliError, Result, ResultExt};

/// Prefix of environment variables read into the config
pub const ENV_PREFIX: &str = "PAGEPACK_";

/// Separator for nested keys, e.g. `PAGEPACK_DEV__PORT`
pub const ENV_SEPARATOR: &str = "__";

/// Load the project configuration from every source.
///
/// # Errors
///
/// - `CliError::FileNotFound` if `--config` names a missing file
/// - `CliError::InvalidConfig` if a layer holds a mistyped value
/// - `CliError::Config` for unknown profiles and failed validation
pub fn load(args: &ProjectArgs) -> Result<LoadedProject> {
    let cwd = utils::get_cwd()?;
    let root = match &args.cwd {
        Some(dir) => utils::resolve_path(dir, &cwd),
        None => cwd,
    };

    let source = match &args.config {
        Some(path) => {
            let path = utils::resolve_path(path, &root);
            if !fs::metadata(&path).with_path(&path)?.is_file() {
                return Err(CliError::FileNotFound(path));
            }
            Some(path)
        }
        None => ConfigDiscovery::new(&root).find(),
    };

    let mut figment = Figment::new().merge(Serialized::defaults(ProjectConfig::default()));
    if let Some(path) = &source {
        debug!(path = %path.display(), "loading config file");
        figment = merge_file(figment, path)?;
    }

    // The profile sits between the file and the environment, so it has to be
    // materialized before the upper layers are merged on top.
    let file_config: ProjectConfig = figment.extract()?;
    let profiled = file_config.materialize_profile(args.profile.as_deref())?;

    let config: ProjectConfig = Figment::new()
        .merge(Serialized::defaults(profiled))
        .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
        .merge(Serialized::defaults(CliOverrides::from(args)))
        .extract()?;

    config.validate()?;

    Ok(LoadedProject {
        root,
        source,
        config,
    })
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if path.file_name() == Some(OsStr::new("package.json")) {
        let value = read_config_value(path)?;
        return Ok(figment.merge(Serialized::defaults(value)));
    }
    Ok(figment.merge(Toml::file(path)))
}

/// Values set on the command line; unset flags are left out so they do not
/// clobber lower layers.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<Mode>,

    #[serde(skip_serializing_if = "PagesOverrides::is_empty")]
    pages: PagesOverrides,
}

#[derive(Debug, Default, Serialize)]
struct PagesOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<PathBuf>,
}

impl PagesOverrides {
    fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl From<&ProjectArgs> for CliOverrides {
    fn from(args: &ProjectArgs) -> Self {
        Self {
            mode: args.mode.map(Into::into),
            pages: PagesOverrides {
                root: args.root.clone(),
            },
        }
    }
}
