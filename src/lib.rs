//! tidykit - small dual-boot housekeeping utilities
//!
//! # Features
//!
//! - Convert Bluetooth LE long-term keys (LTK, ERand, EDiv octet lists) into a
//!   BlueZ `[LongTermKey]` record
//! - Strip track-number prefixes such as `01-02. ` from filenames
//! - Strip marker suffixes such as `_apfix` from file stems
//!
//! # Example
//!
//! ```
//! use tidykit::keys::{build_record, render};
//!
//! let record = build_record("A1,B2", "01,02", "03,04").unwrap();
//! assert_eq!(
//!     render(&record),
//!     "[LongTermKey]\nKey = A1B2\nRand = 513\nEDiv = 0304\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod keys;
pub mod output;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use error::{Error, FormatError, Result};
pub use fs::{rename_in_dir, RenameOptions, RenameReport};
pub use keys::{build_record, normalize_octets, render, reversed_octet_value, KeyRecord};
