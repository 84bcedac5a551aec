//! Structured error handling for engine-level operations.
//!
//! Calculation failures never surface here: they are recovered per line and
//! recorded in result records. This module covers the few operations that
//! can genuinely refuse to run, such as constructing an engine from invalid
//! configuration.

use thiserror::Error;

/// Error type for Renoplan engine operations
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// Configuration and initialization errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        setting: Option<String>,
    },

    /// Malformed measure records
    #[error("Measure error: {message}")]
    Measure {
        message: String,
        measure_id: Option<String>,
    },

    /// Unusable calculation context
    #[error("Context error: {message}")]
    Context { message: String },
}

impl EngineError {
    /// Get the error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            EngineError::Configuration { .. } => "configuration",
            EngineError::Measure { .. } => "measure",
            EngineError::Context { .. } => "context",
        }
    }

    /// Create a configuration error for a specific setting
    pub fn configuration(message: impl Into<String>, setting: impl Into<String>) -> Self {
        EngineError::Configuration { message: message.into(), setting: Some(setting.into()) }
    }

    /// Create a measure error
    pub fn measure(message: impl Into<String>, measure_id: impl Into<String>) -> Self {
        EngineError::Measure { message: message.into(), measure_id: Some(measure_id.into()) }
    }
}

/// Convenient Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
