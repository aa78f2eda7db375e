//! Filesystem module.
//!
//! Provides:
//! - Filename transforms for prefix and suffix stripping
//! - Directory rename passes with per-entry reporting

pub mod naming;
pub mod rename;

pub use naming::{
    split_extension, strip_marker_suffix, strip_numeric_prefix, validate_filename,
    DEFAULT_PREFIX_PATTERN, DEFAULT_SUFFIX_MARKER,
};
pub use rename::{rename_in_dir, RenameAction, RenameEntry, RenameOptions, RenameReport};
