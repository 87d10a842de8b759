use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HazcodeError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Document processing error: {message}")]
    DocumentProcessing { message: String },

    #[error("Invalid path pattern: {pattern} - {message}")]
    Pattern { pattern: String, message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl HazcodeError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn document_processing(message: impl Into<String>) -> Self {
        Self::DocumentProcessing {
            message: message.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::DocumentProcessing { .. } => "DOCUMENT_PROCESSING_ERROR",
            Self::Pattern { .. } => "PATTERN_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }

    /// Whether the caller may fall back to treating the input as literal text
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type HazcodeResult<T> = Result<T, HazcodeError>;

impl From<std::io::Error> for HazcodeError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<config::ConfigError> for HazcodeError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<serde_json::Error> for HazcodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string())
    }
}
