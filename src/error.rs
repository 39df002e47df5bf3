//! Error types for Neurona operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Neurona operations.
///
/// # Examples
///
/// ```
/// use neurona::error::NeuronaError;
///
/// let err = NeuronaError::InvalidParameter {
///     param: "half_length".to_string(),
///     value: "-1.0".to_string(),
///     constraint: "must be non-negative".to_string(),
/// };
/// assert!(err.to_string().contains("half_length"));
/// ```
#[derive(Debug)]
pub enum NeuronaError {
    /// Invalid parameter value provided.
    InvalidParameter {
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
}

impl fmt::Display for NeuronaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeuronaError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(f, "Invalid parameter {param} = {value}: {constraint}")
            }
            NeuronaError::Io(err) => write!(f, "I/O error: {err}"),
            NeuronaError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for NeuronaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NeuronaError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NeuronaError {
    fn from(err: std::io::Error) -> Self {
        NeuronaError::Io(err)
    }
}

impl From<serde_json::Error> for NeuronaError {
    fn from(err: serde_json::Error) -> Self {
        NeuronaError::Serialization(err.to_string())
    }
}

/// Convenience result type for Neurona operations.
pub type Result<T> = std::result::Result<T, NeuronaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = NeuronaError::InvalidParameter {
            param: "count".to_string(),
            value: "abc".to_string(),
            constraint: "must be a number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("count"));
        assert!(msg.contains("must be a number"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err: NeuronaError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_serialization_from_serde_json() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: NeuronaError = parse_err.into();
        assert!(matches!(err, NeuronaError::Serialization(_)));
    }
}
