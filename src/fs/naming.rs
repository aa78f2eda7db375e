//! Filename transforms for the strip commands.

use regex::Regex;

use crate::error::{Error, Result};

/// Default prefix pattern: track numbers such as `1. ` and `01-01. `.
pub const DEFAULT_PREFIX_PATTERN: &str = r"^\d+(-\d+)?\.\s";

/// Default marker removed from the end of file stems.
pub const DEFAULT_SUFFIX_MARKER: &str = "_apfix";

/// Validate a computed filename before it is used as a rename target.
///
/// Returns an error if the name could escape the directory or is empty.
pub fn validate_filename(name: &str) -> Result<()> {
    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Reserved name not allowed: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(())
}

/// Split a filename into stem and extension, keeping the dot on the extension.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let leading = filename.len() - filename.trim_start_matches('.').len();

    match filename[leading..].rfind('.') {
        Some(pos) => filename.split_at(leading + pos),
        None => (filename, ""),
    }
}

/// Remove a match of `pattern` from the start of a filename.
///
/// A match elsewhere in the name is ignored, whether or not the pattern is
/// anchored. Returns `None` when nothing matched or nothing would be left.
pub fn strip_numeric_prefix(filename: &str, pattern: &Regex) -> Option<String> {
    let m = pattern.find(filename)?;

    if m.start() != 0 || m.end() == 0 || m.end() == filename.len() {
        return None;
    }

    Some(filename[m.end()..].to_string())
}

/// Remove `marker` from the end of a filename's stem, keeping the extension.
///
/// Given `song_apfix.mp3` and `_apfix`, produces `song.mp3`.
pub fn strip_marker_suffix(filename: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }

    let (stem, ext) = split_extension(filename);
    let stem = stem.strip_suffix(marker)?;

    if stem.is_empty() {
        return None;
    }

    Some(format!("{}{}", stem, ext))
}
