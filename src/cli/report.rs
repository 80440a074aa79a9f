//! Progress and summary output.
//!
//! Progress lines go to stdout as the pipeline runs; warnings and fatal
//! messages go to stderr. Every printer has a `*_to` twin taking a writer so
//! the formatting can be tested.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{GenerationEvent, ItemProgress, ItemStatus};
use crate::tts::INSTALL_HINT;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Warning mark for the error summary.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

const ARROW: &str = "\u{2192}"; // →

/// Streams pipeline events to the terminal.
pub struct ProgressPrinter<'a> {
    root: &'a Path,
}

impl<'a> ProgressPrinter<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    pub fn event(&self, event: &GenerationEvent<'_>) {
        match event {
            GenerationEvent::MissingFile(_) => {
                self.event_to(event, &mut io::stderr().lock());
            }
            _ => self.event_to(event, &mut io::stdout().lock()),
        }
    }

    pub fn event_to<W: Write>(&self, event: &GenerationEvent<'_>, writer: &mut W) {
        match event {
            GenerationEvent::MissingFile(path) => {
                let _ = writeln!(
                    writer,
                    "{} {} not found, skipping",
                    "warning:".bold().yellow(),
                    display_path(self.root, path)
                );
            }
            GenerationEvent::Collected { unique_count } => {
                let _ = writeln!(
                    writer,
                    "Found {} unique {} across all word files",
                    unique_count,
                    if *unique_count == 1 { "text" } else { "texts" }
                );
            }
            GenerationEvent::Item(item) => print_item_to(item, writer),
        }
    }
}

fn print_item_to<W: Write>(item: &ItemProgress<'_>, writer: &mut W) {
    let counter = format!("[{:>3}/{}]", item.index, item.total);
    match &item.status {
        ItemStatus::Skipped => {
            let _ = writeln!(
                writer,
                "  {} {}  {}  \"{}\"",
                counter,
                "skip ".dimmed(),
                item.file_name,
                item.text
            );
        }
        ItemStatus::Fetching => {
            let _ = writeln!(
                writer,
                "  {} {} {}  \"{}\"",
                counter,
                "fetch".cyan(),
                item.file_name,
                item.text
            );
        }
        ItemStatus::Planned => {
            let _ = writeln!(
                writer,
                "  {} {} {}  \"{}\"  {}",
                counter,
                "fetch".cyan(),
                item.file_name,
                item.text,
                "(dry run)".dimmed()
            );
        }
        ItemStatus::Failed(message) => {
            let _ = writeln!(writer, "    {} {}", "ERROR:".bold().red(), message);
        }
    }
}

/// Print the final summary of a command.
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Generate(summary) => print_generate_to(summary, &mut io::stdout().lock()),
        CommandSummary::Unavailable(summary) => {
            print_unavailable_to(&summary.reason, &mut io::stderr().lock())
        }
        CommandSummary::Init(summary) => match summary.created {
            Some(_) => print_init_to(summary, &mut io::stdout().lock()),
            None => print_init_to(summary, &mut io::stderr().lock()),
        },
    }
}

pub fn print_generate_to<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let outcome = &summary.outcome;

    if summary.dry_run {
        let _ = writeln!(
            writer,
            "\nDry run: {} to fetch, {} already present (nothing written)",
            outcome.planned_count, outcome.skipped_count
        );
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} Registry written {} {}  ({} {})",
        SUCCESS_MARK.green(),
        ARROW,
        display_path(&summary.root, &outcome.registry_path),
        outcome.entries.len(),
        if outcome.entries.len() == 1 {
            "entry"
        } else {
            "entries"
        }
    );
    let _ = writeln!(
        writer,
        "{} Audio files      {} {}/",
        SUCCESS_MARK.green(),
        ARROW,
        display_path(&summary.root, &outcome.audio_dir)
    );

    if !outcome.failures.is_empty() {
        let _ = writeln!(
            writer,
            "\n{}  {}",
            WARNING_MARK.yellow(),
            format!(
                "{} error(s) during generation:",
                outcome.failures.len()
            )
            .yellow()
        );
        for failure in &outcome.failures {
            let _ = writeln!(writer, "   \"{}\": {}", failure.text, failure.message);
        }
        let _ = writeln!(writer, "Re-run to retry failed entries.");
    }
}

pub fn print_unavailable_to<W: Write>(reason: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "ERROR:".bold().red(), reason);
    let _ = writeln!(writer, "{}", INSTALL_HINT);
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created.is_some() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

/// Show `path` relative to the project root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
