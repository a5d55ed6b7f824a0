//! Check command implementation.
//!
//! Composes the configuration and validates it against the filesystem
//! without printing it.

use pagepack_config::{BuildConfig, ConfigValidator, FsValidator, discover_and_compose};

use crate::cli::CheckArgs;
use crate::commands::utils::display_relative;
use crate::config::{self, LoadedProject};
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate the layered project options
/// 2. Discover pages and compose the build configuration
/// 3. Check structure (output filename, chunk names, unique HTML outputs)
/// 4. Check that every entry module and HTML template exists
///
/// # Errors
///
/// Returns the first failed check.
pub async fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");
    let project = config::load(&args.project)?;
    match &project.source {
        Some(path) => ui::success(&format!(
            "Loaded {}",
            display_relative(path, project.root())
        )),
        None => ui::warning("No pagepack.toml found, using defaults"),
    }

    let build = discover_and_compose(&project.config, project.root())?;
    report_pages(&project, &build);

    ui::info("Checking entries and templates...");
    if let Err(err) = FsValidator::new(project.root()).validate(&build) {
        ui::error("Check failed");
        return Err(err.into());
    }

    ui::success("All checks passed!");
    Ok(())
}

fn report_pages(project: &LoadedProject, build: &BuildConfig) {
    if build.entry().is_empty() {
        ui::warning(&format!(
            "No pages found under {}",
            display_relative(&project.pages_root(), project.root())
        ));
        return;
    }
    ui::success(&format!("Discovered {} page(s)", build.entry().len()));
}
