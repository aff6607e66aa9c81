//! Error types for the swatch_forge library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for swatch_forge operations
pub type Result<T> = std::result::Result<T, ColorError>;

/// Error types for color parsing, derivation, and configuration
#[derive(Error, Debug)]
pub enum ColorError {
    /// Input did not match `#?[0-9a-fA-F]{6}`
    #[error("Invalid hex color: {input:?}")]
    InvalidHex { input: String },

    /// Input is not a recognized CSS color (hex, name, rgb() or hsl())
    #[error("Unrecognized color: {input:?}")]
    UnknownColor { input: String },

    /// Harmony rule name is not one of the supported rules
    #[error("Unknown harmony rule: {name:?}")]
    UnknownHarmonyRule { name: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration file error at {}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be (de)serialized
    #[error("Configuration format error")]
    ConfigFormat {
        #[source]
        source: serde_json::Error,
    },
}

impl ColorError {
    /// Create an invalid hex error for the given input
    pub fn invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration I/O error with the offending path
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Check if this error was caused by user-supplied color input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ColorError::InvalidHex { .. }
                | ColorError::UnknownColor { .. }
                | ColorError::UnknownHarmonyRule { .. }
                | ColorError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ColorError::InvalidHex { .. } => {
                "Please enter a 6-digit hex color such as #3498db.".to_string()
            }
            ColorError::UnknownColor { input } => {
                format!("\"{}\" is not a color. Try a hex code, a CSS name, rgb() or hsl().", input)
            }
            ColorError::UnknownHarmonyRule { .. } => {
                "Choose complementary, triadic, analogous, monochromatic or split-complementary."
                    .to_string()
            }
            ColorError::InvalidParameter { parameter, .. } => {
                format!("The value for {} is out of range.", parameter)
            }
            ColorError::ConfigIo { .. } | ColorError::ConfigFormat { .. } => {
                "Could not load settings. Defaults will be used instead.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for ColorError {
    fn from(source: serde_json::Error) -> Self {
        Self::ConfigFormat { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_flagged() {
        assert!(ColorError::invalid_hex("nope").is_input_error());
        assert!(ColorError::invalid_parameter("steps", 0).is_input_error());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!ColorError::config_io("cfg.json", io).is_input_error());
    }

    #[test]
    fn test_display_includes_input() {
        let err = ColorError::invalid_hex("not-a-color");
        assert_eq!(err.to_string(), "Invalid hex color: \"not-a-color\"");

        let err = ColorError::invalid_parameter("steps", 0);
        assert_eq!(err.to_string(), "Invalid parameter: steps = 0");
    }

    #[test]
    fn test_user_message_mentions_parameter() {
        let err = ColorError::invalid_parameter("steps", 42);
        assert!(err.user_message().contains("steps"));
    }
}
