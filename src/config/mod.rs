//! Configuration module for tidykit.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging (see `cli`)
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, Config, KeysConfig, RenameConfig};
pub use modes::OutputFormat;
pub use validation::{
    compile_prefix_pattern, require_input, validate_rename_config, validate_suffix_marker,
};
