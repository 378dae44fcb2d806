//! Error types for Proyectar operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Proyectar operations.
///
/// Provides detailed context about failures including unfitted estimators,
/// dimension mismatches, and invalid hyperparameters.
///
/// # Examples
///
/// ```
/// use proyectar::error::ProyectarError;
///
/// let err = ProyectarError::DimensionMismatch {
///     expected: "3x120".to_string(),
///     actual: "3x80".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum ProyectarError {
    /// Transform was called on an estimator that has not been fitted.
    NotFitted {
        /// Operation that required fitted state
        operation: String,
    },

    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter value provided.
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Serialization/deserialization error.
    Serialization(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for ProyectarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProyectarError::NotFitted { operation } => {
                write!(f, "Estimator not fitted: call fit() before {operation}")
            }
            ProyectarError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            ProyectarError::InvalidHyperparameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter: {param} = {value}, expected {constraint}"
                )
            }
            ProyectarError::Io(e) => write!(f, "I/O error: {e}"),
            ProyectarError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            ProyectarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ProyectarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProyectarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProyectarError {
    fn from(err: std::io::Error) -> Self {
        ProyectarError::Io(err)
    }
}

impl From<serde_json::Error> for ProyectarError {
    fn from(err: serde_json::Error) -> Self {
        ProyectarError::Serialization(err.to_string())
    }
}

impl From<&str> for ProyectarError {
    fn from(msg: &str) -> Self {
        ProyectarError::Other(msg.to_string())
    }
}

/// Convenience result type for Proyectar operations.
pub type Result<T> = std::result::Result<T, ProyectarError>;
