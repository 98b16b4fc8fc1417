//! CLI output formatting for generation runs.
//!
//! One line per root or issue handled, then a summary:
//!
//! ```text
//! ✅ images/street/index.json written with 12 images
//! ⚠️  images/portrait does not exist, skipping
//! ✅ images/zines/Issue 1/index.json written with 24 pages
//! ⚠️  No images in images/zines/drafts, skipping
//!
//! Wrote 2 index files (36 images), 2 skipped
//! ```
//!
//! Paths are shown relative to the base directory when they live under it.
//! In a dry run, "written with" becomes "would be written with" and the
//! summary starts with "Would write".
//!
//! # Architecture
//!
//! `format_*` functions are pure and return strings for testability;
//! `print_*` wrappers write them out. Warnings go to stderr, everything else
//! to stdout.

use crate::generate::{GenerateEvent, GenerateReport};
use std::path::Path;

/// Display `path` relative to `base` when possible.
fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// `1 image`, `3 images`.
fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format one progress event as a single line.
pub fn format_event(event: &GenerateEvent, base: &Path, dry_run: bool) -> String {
    let verb = if dry_run {
        "would be written with"
    } else {
        "written with"
    };
    match event {
        GenerateEvent::StandardWritten { path, count } => format!(
            "\u{2705} {} {} {}",
            display_path(path, base),
            verb,
            count_label(*count, "image")
        ),
        GenerateEvent::ZineWritten { path, count } => format!(
            "\u{2705} {} {} {}",
            display_path(path, base),
            verb,
            count_label(*count, "page")
        ),
        GenerateEvent::MissingRoot { path } => format!(
            "\u{26a0}\u{fe0f}  {} does not exist, skipping",
            display_path(path, base)
        ),
        GenerateEvent::EmptyZine { path } => format!(
            "\u{26a0}\u{fe0f}  No images in {}, skipping",
            display_path(path, base)
        ),
    }
}

/// Print one progress event.
pub fn print_event(event: &GenerateEvent, base: &Path, dry_run: bool) {
    let line = format_event(event, base, dry_run);
    if event.is_warning() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Format the closing summary line.
pub fn format_summary(report: &GenerateReport, dry_run: bool) -> String {
    let lead = if dry_run { "Would write" } else { "Wrote" };
    format!(
        "{} {} ({}), {} skipped",
        lead,
        count_label(report.indexed.len(), "index file"),
        count_label(report.images, "image"),
        report.skipped
    )
}

/// Print the closing summary, preceded by a blank line.
pub fn print_summary(report: &GenerateReport, dry_run: bool) {
    println!();
    println!("{}", format_summary(report, dry_run));
}
