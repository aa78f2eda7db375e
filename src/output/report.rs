//! Key record and rename report printing.

use console::style;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::fs::{RenameAction, RenameReport};
use crate::keys::{render, KeyRecord};
use crate::output::console::{print_info, print_skipped, print_success, print_warning};

/// Where BlueZ keeps the per-device pairing record.
pub const INFO_FILE_HINT: &str = "/var/lib/bluetooth/<adapter>/<device>/info";

/// Print a key record in the requested format.
///
/// `plain` drops the instructions and rules around the text block.
pub fn print_key_record(record: &KeyRecord, format: OutputFormat, plain: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text if plain => {
            print!("{}", render(record));
        }
        OutputFormat::Text => {
            println!(
                "Copy the entire block below into your {} file:",
                style(INFO_FILE_HINT).bold()
            );
            println!();
            println!("{}", style("-".repeat(50)).dim());
            print!("{}", render(record));
            println!("{}", style("-".repeat(50)).dim());
        }
    }

    Ok(())
}

/// Print every entry of a rename pass followed by a summary.
///
/// Skipped entries are listed only when `verbose` is set. `none_found` is
/// printed when nothing matched the transform.
pub fn print_rename_report(report: &RenameReport, verbose: bool, none_found: &str) {
    print_info(&format!(
        "Scanning directory: {}",
        report.directory.display()
    ));

    for entry in &report.entries {
        match &entry.action {
            RenameAction::Renamed { to } => {
                println!("Renamed: '{}' -> '{}'", entry.name, to);
            }
            RenameAction::Planned { to } => {
                println!("Would rename: '{}' -> '{}'", entry.name, to);
            }
            RenameAction::SkippedConflict { to } => {
                print_warning(&format!(
                    "Skipped '{}': '{}' already exists",
                    entry.name, to
                ));
            }
            RenameAction::Failed { reason } => {
                print_warning(&format!("Failed '{}': {}", entry.name, reason));
            }
            RenameAction::SkippedNoMatch if verbose => {
                print_skipped(&format!("{} (no match)", entry.name));
            }
            RenameAction::SkippedNotFile if verbose => {
                print_skipped(&format!("{} (not a file)", entry.name));
            }
            RenameAction::SkippedNoMatch | RenameAction::SkippedNotFile => {}
        }
    }

    if report.matched() == 0 {
        print_info(none_found);
        return;
    }

    println!();
    println!("{}", style("Summary:").bold());
    if report.dry_run {
        println!("  Would rename: {}", style(report.planned()).green());
    } else {
        println!("  Renamed:   {}", style(report.renamed()).green());
    }
    println!("  Skipped:   {}", report.skipped());
    if report.conflicts() > 0 {
        println!("  Conflicts: {}", style(report.conflicts()).yellow());
    }
    if report.failed() > 0 {
        println!("  Failed:    {}", style(report.failed()).red());
    }

    if report.failed() == 0 && report.conflicts() == 0 {
        print_success("Done");
    }
}
