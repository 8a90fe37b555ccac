//! Error types for the model compiler.

use thiserror::Error;

/// Exit code for invalid settings or request documents that fail validation.
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for a compilation that was aborted.
pub const EXIT_COMPILE_ERROR: u8 = 2;
/// Exit code for documents that could not be decoded.
pub const EXIT_DECODE_ERROR: u8 = 3;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for model compilation.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Settings or request failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A query uses a command kind this generator cannot express.
    ///
    /// Aborts the whole run; no partial model is produced.
    #[error("Support for {command} is not implemented (query {query})")]
    UnsupportedCommand { query: String, command: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Create an UnsupportedCommand error.
    pub fn unsupported_command(query: impl Into<String>, command: impl Into<String>) -> Self {
        ModelError::UnsupportedCommand {
            query: query.into(),
            command: command.into(),
        }
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ModelError::Config(_) => EXIT_CONFIG_ERROR,
            ModelError::UnsupportedCommand { .. } => EXIT_COMPILE_ERROR,
            ModelError::Yaml(_) | ModelError::Json(_) => EXIT_DECODE_ERROR,
            ModelError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for model compilation.
pub type Result<T> = std::result::Result<T, ModelError>;
