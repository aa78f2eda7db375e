//! Error types for tidykit.

use thiserror::Error;

/// Malformed octet input.
///
/// Every variant is a format error: the input has to be corrected and the
/// command re-run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid hex octet '{token}'")]
    InvalidOctet { token: String },

    #[error("Octet token '{token}' has an odd number of hex digits")]
    OddLength { token: String },

    #[error("No octets given for {field}")]
    Empty { field: &'static str },
}

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Key errors
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required input: {0}")]
    MissingConfig(String),

    // Rename errors
    #[error("Rename failed: {0}")]
    Rename(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FORMAT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const RENAME_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

/// Map an error to the process exit code it should end with.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Format(_) => exit_codes::FORMAT_ERROR,
        Error::Config(_)
        | Error::ConfigValidation { .. }
        | Error::MissingConfig(_)
        | Error::TomlParse(_) => exit_codes::CONFIG_ERROR,
        Error::Rename(_) => exit_codes::RENAME_ERROR,
        _ => exit_codes::UNEXPECTED_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_wraps() {
        let err: Error = FormatError::InvalidOctet {
            token: "G1".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "Format error: Invalid hex octet 'G1'");
    }

    #[test]
    fn test_exit_codes() {
        let format = Error::Format(FormatError::Empty { field: "Rand" });
        assert_eq!(exit_code(&format), exit_codes::FORMAT_ERROR);
        assert_eq!(exit_code(&format), 2);

        let toml_err = toml::from_str::<toml::Value>("[keys").unwrap_err();
        assert_eq!(exit_code(&Error::TomlParse(toml_err)), 3);
        assert_eq!(exit_code(&Error::MissingConfig("ltk".to_string())), 3);
        assert_eq!(
            exit_code(&Error::ConfigValidation {
                field: "suffix_marker".to_string(),
                message: "empty".to_string(),
            }),
            3
        );

        assert_eq!(exit_code(&Error::Rename("1 failed".to_string())), 4);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        assert_eq!(exit_code(&Error::Io(io)), 5);
        assert_ne!(exit_code(&Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound))), 0);
    }
}
