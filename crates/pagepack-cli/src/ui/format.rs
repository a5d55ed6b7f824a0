//! Formatting utilities for durations and the page listing.

use console::{Alignment, Term, measure_text_width, pad_str};
use owo_colors::OwoColorize;
use std::time::Duration;

use crate::ui::colors_enabled;

/// One line of the `pagepack pages` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    pub name: String,
    pub entry: String,
    pub output: String,
}

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pagepack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{total_ms}ms")
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Print the discovered pages as an aligned table to stderr.
pub fn print_page_table(rows: &[PageRow]) {
    let width = usize::from(Term::stderr().size().1).min(80);
    let name_width = name_column_width(rows);

    if colors_enabled() {
        eprintln!("\n{}", "Pages".bold().underline());
    } else {
        eprintln!("\nPages");
    }
    eprintln!("{}", "─".repeat(width));

    for row in rows {
        let line = format_row(row, name_width);
        if colors_enabled() {
            eprintln!("  {} {}", "▸".blue(), line);
        } else {
            eprintln!("  ▸ {line}");
        }
    }

    eprintln!("{}", "─".repeat(width));
}

/// Width of the widest page name as it appears on the terminal.
fn name_column_width(rows: &[PageRow]) -> usize {
    rows.iter()
        .map(|row| measure_text_width(&row.name))
        .max()
        .unwrap_or(0)
}

fn format_row(row: &PageRow, name_width: usize) -> String {
    format!(
        "{}  {}  → {}",
        pad_str(&row.name, name_width, Alignment::Left, None),
        row.entry,
        row.output
    )
}
