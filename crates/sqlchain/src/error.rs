//! Error types for sqlchain

use thiserror::Error;

/// Result type alias for builder operations
pub type BuildResult<T> = Result<T, BuilderError>;

/// Errors raised while configuring or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// An argument was rejected (unknown operator or boolean connector).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A terminal operation was called without the state it needs
    /// (no table, or no values for INSERT/UPDATE).
    #[error("Precondition not met: {0}")]
    PreconditionNotMet(String),

    /// A structured value could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BuilderError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::PreconditionNotMet(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a precondition error
    pub fn is_precondition_not_met(&self) -> bool {
        matches!(self, Self::PreconditionNotMet(_))
    }
}

impl From<serde_json::Error> for BuilderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
