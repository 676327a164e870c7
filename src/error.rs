//! Error types for read request construction.

use thiserror::Error;

use crate::data_type::DataType;

/// Result type alias for request construction.
pub type Result<T> = std::result::Result<T, RequestError>;

/// Errors raised while assembling a read request.
///
/// Every variant is a local, construction-time failure. Nothing is retried:
/// the caller fixes the call sequence and builds again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The builder or request is in a state that cannot satisfy the call.
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Description of the state violation.
        reason: String,
    },

    /// The caller asserted a data type that differs from the accumulated one.
    #[error("Incompatible type {expected}, required {actual}")]
    TypeMismatch {
        /// Type the caller asked for.
        expected: DataType,
        /// Type actually held by the request.
        actual: DataType,
    },

    /// Invalid argument provided.
    #[error("Invalid argument '{parameter}': {reason}")]
    InvalidArgument {
        /// Name of the invalid argument.
        parameter: String,
        /// Description of why the argument is invalid.
        reason: String,
    },
}

impl RequestError {
    /// Creates a new `InvalidState` error.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::RequestError;
    ///
    /// let err = RequestError::invalid_state("no requests added");
    /// assert_eq!(err.to_string(), "Invalid state: no requests added");
    /// ```
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    /// Creates a new `TypeMismatch` error.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::{DataType, RequestError};
    ///
    /// let err = RequestError::type_mismatch(DataType::Bool, DataType::Int16);
    /// ```
    pub fn type_mismatch(expected: DataType, actual: DataType) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Creates a new `InvalidArgument` error.
    ///
    /// # Example
    ///
    /// ```
    /// use plc_read_request::RequestError;
    ///
    /// let err = RequestError::invalid_argument("element_count", "must be greater than 0");
    /// ```
    pub fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for `InvalidState` errors.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Returns `true` for `TypeMismatch` errors.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
