//! Directory renaming driven by a filename transform.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::fs::naming::validate_filename;

/// Options for a rename pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    /// Report planned renames without touching the filesystem.
    pub dry_run: bool,
    /// Skip directories and other non-file entries.
    pub files_only: bool,
}

/// What happened to one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameAction {
    Renamed { to: String },
    Planned { to: String },
    SkippedNoMatch,
    SkippedNotFile,
    SkippedConflict { to: String },
    Failed { reason: String },
}

/// One directory entry and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub name: String,
    pub action: RenameAction,
}

/// Outcome of a rename pass, in file name order.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub entries: Vec<RenameEntry>,
}

impl RenameReport {
    fn count(&self, pred: impl Fn(&RenameAction) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.action)).count()
    }

    /// Entries actually renamed.
    pub fn renamed(&self) -> usize {
        self.count(|a| matches!(a, RenameAction::Renamed { .. }))
    }

    /// Entries that would be renamed in a dry run.
    pub fn planned(&self) -> usize {
        self.count(|a| matches!(a, RenameAction::Planned { .. }))
    }

    /// Entries left alone because they did not match or were not files.
    pub fn skipped(&self) -> usize {
        self.count(|a| {
            matches!(
                a,
                RenameAction::SkippedNoMatch | RenameAction::SkippedNotFile
            )
        })
    }

    /// Entries whose target name already existed.
    pub fn conflicts(&self) -> usize {
        self.count(|a| matches!(a, RenameAction::SkippedConflict { .. }))
    }

    /// Entries whose rename was attempted and failed.
    pub fn failed(&self) -> usize {
        self.count(|a| matches!(a, RenameAction::Failed { .. }))
    }

    /// Entries the transform applied to, whatever happened next.
    pub fn matched(&self) -> usize {
        self.entries.len() - self.skipped()
    }
}

/// Apply `transform` to every entry name in `dir` and rename the matches.
///
/// Existing targets are never overwritten. A failed rename is recorded in the
/// report and the pass continues with the next entry.
pub fn rename_in_dir<F>(dir: &Path, options: RenameOptions, transform: F) -> Result<RenameReport>
where
    F: Fn(&str) -> Option<String>,
{
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "Directory not found: {}",
            dir.display()
        )));
    }

    let mut dir_entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    dir_entries.sort_by_key(|e| e.file_name());

    tracing::debug!("Scanning {} entries in {}", dir_entries.len(), dir.display());

    let mut report = RenameReport {
        directory: dir.to_path_buf(),
        dry_run: options.dry_run,
        entries: Vec::with_capacity(dir_entries.len()),
    };
    let mut names = NameLedger::default();

    for entry in dir_entries {
        let path = entry.path();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                tracing::debug!("Skipping non-UTF-8 name: {:?}", raw);
                report.entries.push(RenameEntry {
                    name: raw.to_string_lossy().into_owned(),
                    action: RenameAction::SkippedNoMatch,
                });
                continue;
            }
        };

        if options.files_only && !path.is_file() {
            report.entries.push(RenameEntry {
                name,
                action: RenameAction::SkippedNotFile,
            });
            continue;
        }

        let action = match transform(&name) {
            None => RenameAction::SkippedNoMatch,
            Some(new_name) => rename_entry(dir, &name, &path, new_name, options, &mut names),
        };

        report.entries.push(RenameEntry { name, action });
    }

    Ok(report)
}

/// Names taken and freed so far in a pass.
///
/// A dry run never touches the disk, so it relies on this to see the same
/// free and taken names the real run would.
#[derive(Debug, Default)]
struct NameLedger {
    claimed: HashSet<String>,
    vacated: HashSet<String>,
}

impl NameLedger {
    fn is_taken(&self, name: &str, target: &Path) -> bool {
        if self.claimed.contains(name) {
            return true;
        }
        !self.vacated.contains(name) && target.symlink_metadata().is_ok()
    }

    fn record_move(&mut self, from: &str, to: &str) {
        self.vacated.insert(from.to_string());
        self.claimed.insert(to.to_string());
    }
}

fn rename_entry(
    dir: &Path,
    name: &str,
    from: &Path,
    new_name: String,
    options: RenameOptions,
    names: &mut NameLedger,
) -> RenameAction {
    if let Err(e) = validate_filename(&new_name) {
        return RenameAction::Failed {
            reason: e.to_string(),
        };
    }

    let target = dir.join(&new_name);
    if names.is_taken(&new_name, &target) {
        tracing::warn!("Target already exists: {}", target.display());
        return RenameAction::SkippedConflict { to: new_name };
    }

    if options.dry_run {
        names.record_move(name, &new_name);
        return RenameAction::Planned { to: new_name };
    }

    match fs::rename(from, &target) {
        Ok(()) => {
            tracing::info!("Renamed {} -> {}", from.display(), target.display());
            names.record_move(name, &new_name);
            RenameAction::Renamed { to: new_name }
        }
        Err(e) => {
            tracing::warn!("Failed to rename {}: {}", from.display(), e);
            RenameAction::Failed {
                reason: e.to_string(),
            }
        }
    }
}
