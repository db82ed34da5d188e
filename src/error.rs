//! Error types for namedropper

use thiserror::Error;

/// Main error type for namedropper
#[derive(Debug, Error)]
pub enum NameDropperError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported entity kind: {0}")]
    UnsupportedEntityKind(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NameDropperError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NameDropperError::InvalidInput(_) => 2,
            NameDropperError::UnsupportedEntityKind(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NameDropperError::UnsupportedEntityKind(raw) => {
                format!(
                    "Unsupported entity kind: '{}'\n\n\
                    Supported kinds (case-insensitive):\n\
                    • personal (or person)\n\
                    • corporate\n\
                    • geographic",
                    raw
                )
            }
            NameDropperError::InvalidInput(msg) => {
                if msg.contains("document format") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass --format ead or --format tei\n\
                        • Set NAMEDROPPER_FORMAT environment variable\n\
                        • Add format = \"ead\" to .namedropper/config.toml",
                        self
                    )
                } else {
                    self.to_string()
                }
            }
            NameDropperError::Json(e) => {
                format!(
                    "Failed to read authority resource: {}\n\n\
                    Expected JSON like:\n\
                    {{\"type\": \"personal\", \"uri\": \"http://viaf.org/viaf/12345\", \"viafid\": \"12345\"}}",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NameDropperError
pub type Result<T> = std::result::Result<T, NameDropperError>;
