//! Engine error types.
//!
//! The periodization and discounting pipeline itself never fails: unknown
//! profile keys fall back to registry defaults, empty inputs yield empty
//! results and zero-sum shapes normalize to zeros. The variants below exist
//! for the boundary around the engine (period-count checks, input validation,
//! strict key parsing, configuration loading).

use thiserror::Error;

/// Errors raised at the engine boundary.
#[derive(Debug, Error)]
pub enum NpvError {
    /// Period count outside the accepted domain (negative or out of bounds).
    #[error("Invalid period count {value}: {reason}")]
    InvalidPeriodCount {
        /// The rejected value, as supplied by the caller
        value: i64,
        /// Reason for rejection
        reason: String,
    },

    /// Profile key not present in the registry for the given axis.
    #[error("Unknown {axis} profile key '{key}'")]
    UnknownProfile {
        /// Registry the key was looked up in ("benefit" or "cost")
        axis: String,
        /// The unrecognised key
        key: String,
    },

    /// Entity total that is negative or not a finite number.
    #[error("Invalid {field} for entity '{entity_id}': {value}")]
    InvalidTotal {
        /// Entity identifier
        entity_id: String,
        /// Field name ("totalBenefit" or "totalCost")
        field: String,
        /// Offending value
        value: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for engine boundary operations.
pub type NpvResult<T> = Result<T, NpvError>;

impl From<serde_json::Error> for NpvError {
    fn from(err: serde_json::Error) -> Self {
        NpvError::SerializationError(err.to_string())
    }
}

impl NpvError {
    /// Create an InvalidPeriodCount error.
    pub fn invalid_periods(value: i64, reason: impl Into<String>) -> Self {
        NpvError::InvalidPeriodCount {
            value,
            reason: reason.into(),
        }
    }

    /// Create an UnknownProfile error.
    pub fn unknown_profile(axis: impl ToString, key: impl Into<String>) -> Self {
        NpvError::UnknownProfile {
            axis: axis.to_string(),
            key: key.into(),
        }
    }

    /// Create an InvalidTotal error.
    pub fn invalid_total(
        entity_id: impl Into<String>,
        field: impl Into<String>,
        value: f64,
    ) -> Self {
        NpvError::InvalidTotal {
            entity_id: entity_id.into(),
            field: field.into(),
            value,
        }
    }

    /// Check if this error can be fixed by resubmitting different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            NpvError::InvalidPeriodCount { .. }
                | NpvError::UnknownProfile { .. }
                | NpvError::InvalidTotal { .. }
        )
    }

    /// Check if this error was caused by caller-supplied input rather than
    /// configuration or I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NpvError::InvalidPeriodCount { .. } | NpvError::InvalidTotal { .. }
        )
    }
}
