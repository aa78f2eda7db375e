//! Configuration validation logic.

use crate::config::loader::RenameConfig;
use crate::error::{Error, Result};
use regex::Regex;

/// Validate the settings used by the strip commands.
pub fn validate_rename_config(rename: &RenameConfig) -> Result<()> {
    compile_prefix_pattern(&rename.prefix_pattern)?;
    validate_suffix_marker(&rename.suffix_marker)?;

    Ok(())
}

/// Compile the prefix pattern, reporting failures against its config field.
pub fn compile_prefix_pattern(pattern: &str) -> Result<Regex> {
    if pattern.is_empty() {
        return Err(Error::MissingConfig("prefix_pattern".to_string()));
    }

    Regex::new(pattern).map_err(|e| Error::ConfigValidation {
        field: "prefix_pattern".to_string(),
        message: e.to_string(),
    })
}

/// Validate the suffix marker.
pub fn validate_suffix_marker(marker: &str) -> Result<()> {
    if marker.is_empty() {
        return Err(Error::MissingConfig("suffix_marker".to_string()));
    }

    if marker.contains('/') || marker.contains('\\') || marker.contains('\0') {
        return Err(Error::ConfigValidation {
            field: "suffix_marker".to_string(),
            message: format!("Marker '{}' contains a path separator or null byte", marker),
        });
    }

    Ok(())
}

/// Return an input value or a missing-input error naming its flag.
pub fn require_input<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str> {
    value.ok_or_else(|| {
        Error::MissingConfig(format!(
            "{} (pass --{} or set keys.{} in the config file)",
            field, field, field
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_rename_config(&RenameConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_prefix_pattern() {
        let mut config = RenameConfig::default();
        config.prefix_pattern = "^(\\d+".to_string();
        assert!(matches!(
            validate_rename_config(&config),
            Err(Error::ConfigValidation { .. })
        ));

        config.prefix_pattern.clear();
        assert!(matches!(
            validate_rename_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_invalid_suffix_marker() {
        assert!(validate_suffix_marker("_apfix").is_ok());
        assert!(validate_suffix_marker("").is_err());
        assert!(validate_suffix_marker("a/b").is_err());
    }

    #[test]
    fn test_require_input() {
        assert_eq!(require_input("ltk", Some("A1")).unwrap(), "A1");
        let err = require_input("erand", None).unwrap_err();
        assert!(err.to_string().contains("--erand"));
    }
}
