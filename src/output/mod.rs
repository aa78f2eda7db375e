//! Output module for console output.
//!
//! Provides:
//! - Colored console output
//! - Key record and rename report printing

pub mod console;
pub mod report;

pub use console::{print_error, print_info, print_skipped, print_success, print_warning};
pub use report::{print_key_record, print_rename_report};
