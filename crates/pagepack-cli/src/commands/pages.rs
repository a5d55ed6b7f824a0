//! Pages command implementation.
//!
//! Runs discovery only; nothing is composed or validated.

use pagepack_config::{ConfigError, DiscoveredPages, PageDiscovery};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::PagesArgs;
use crate::commands::utils::display_relative;
use crate::config;
use crate::error::Result;
use crate::ui;

/// One page in `--json` output
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub name: String,
    pub entry: PathBuf,
    pub template: PathBuf,
    pub output: String,
}

/// Execute the pages command.
///
/// # Errors
///
/// Returns config loading errors and discovery failures.
pub async fn execute(args: PagesArgs) -> Result<()> {
    let project = config::load(&args.project)?;
    let started = Instant::now();

    let pages = PageDiscovery::from_options(project.root(), &project.config.pages, &project.config.html)
        .discover()
        .map_err(ConfigError::from)?;

    let summaries = summarize(&pages);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        ui::warning(&format!(
            "No pages found under {}",
            project.pages_root().display()
        ));
        return Ok(());
    }

    let rows: Vec<_> = summaries
        .iter()
        .map(|page| to_row(page, project.root()))
        .collect();
    ui::print_page_table(&rows);
    ui::success(&format!(
        "Found {} page(s) in {}",
        summaries.len(),
        ui::format_duration(started.elapsed())
    ));
    Ok(())
}

fn summarize(pages: &DiscoveredPages) -> Vec<PageSummary> {
    pages
        .html()
        .iter()
        .filter_map(|directive| {
            let entry = pages.entries().get(&directive.page_name)?;
            Some(PageSummary {
                name: directive.page_name.clone(),
                entry: entry.to_path_buf(),
                template: directive.template_path.clone(),
                output: directive.output_filename.clone(),
            })
        })
        .collect()
}

fn to_row(page: &PageSummary, root: &Path) -> ui::PageRow {
    ui::PageRow {
        name: page.name.clone(),
        entry: display_relative(&page.entry, root),
        output: page.output.clone(),
    }
}
