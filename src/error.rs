//! Error types and handling for the `tempcast` application

use thiserror::Error;

/// Main error type for the `tempcast` application
#[derive(Error, Debug)]
pub enum TempcastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// The model artifact could not be loaded or deserialized
    #[error("Model load error: {message}")]
    ModelLoad { message: String },

    /// The model artifact could not be fetched from remote storage
    #[error("Artifact fetch error: {message}")]
    Fetch { message: String },

    /// The model rejected or failed an invocation
    #[error("Model invocation failed: {message}")]
    ModelInvocation { message: String },

    /// The model returned output with an unexpected shape
    #[error("Unexpected model output shape: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TempcastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new model load error
    pub fn model_load<S: Into<String>>(message: S) -> Self {
        Self::ModelLoad {
            message: message.into(),
        }
    }

    /// Create a new artifact fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new model invocation error
    pub fn model_invocation<S: Into<String>>(message: S) -> Self {
        Self::ModelInvocation {
            message: message.into(),
        }
    }

    /// Create a new shape mismatch error
    pub fn shape_mismatch<E: Into<String>, A: Into<String>>(expected: E, actual: A) -> Self {
        Self::ShapeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Whether this error occurred while invoking the model, as opposed to
    /// before the model was ever called
    #[must_use]
    pub fn is_prediction_error(&self) -> bool {
        matches!(
            self,
            TempcastError::ModelInvocation { .. } | TempcastError::ShapeMismatch { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TempcastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TempcastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TempcastError::ModelLoad { message } => {
                format!("The model artifact could not be loaded: {message}")
            }
            TempcastError::Fetch { message } => {
                format!("The model artifact could not be downloaded: {message}")
            }
            TempcastError::ModelInvocation { message } => {
                format!("Prediction failed: {message}")
            }
            TempcastError::ShapeMismatch { expected, actual } => {
                format!(
                    "Prediction failed: the model returned {actual} where {expected} was expected"
                )
            }
            TempcastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
