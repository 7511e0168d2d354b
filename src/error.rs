//! Error types for engine operations.
//!
//! The engine performs no I/O on its compute paths, so every error surfaced
//! here is a contract violation at the boundary: malformed activity
//! quantities, arithmetically invalid arguments, or a bad configuration file.

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    /// Activity input failed validation (negative or non-finite quantity).
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A caller passed an argument the operation cannot compute with,
    /// e.g. a zero benchmark for a percentage comparison.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration file could not be read, parsed, or contained
    /// out-of-range values.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl EngineError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
