//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit.

use std::fmt;
use std::io;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file or environment error
    ConfigError,
    /// I/O error
    IoError,
    /// Data file already exists
    AlreadyInitialized,
    /// Server failed to start or crashed
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CATALOG_CLI_CONFIG_ERROR",
            Self::IoError => "CATALOG_CLI_IO_ERROR",
            Self::AlreadyInitialized => "CATALOG_CLI_ALREADY_INITIALIZED",
            Self::ServeFailed => "CATALOG_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Data file already present
    pub fn already_initialized(path: impl fmt::Display) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Data file {} already exists. Use --force to overwrite.", path),
        )
    }

    /// Server failure
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<crate::store::StoreError> for CliError {
    fn from(e: crate::store::StoreError) -> Self {
        Self::io_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("api_key must not be empty");
        assert_eq!(
            err.to_string(),
            "CATALOG_CLI_CONFIG_ERROR: api_key must not be empty"
        );
        assert_eq!(err.code_str(), "CATALOG_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_io_conversion() {
        let err = CliError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        assert_eq!(err.code(), &CliErrorCode::IoError);
        assert_eq!(err.message(), "disk");
    }
}
