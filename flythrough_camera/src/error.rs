//! Error types for the flythrough camera
//!
//! The camera math has no recoverable failure in normal operation. Every
//! variant here is reachable only when a caller breaks the documented
//! contract (non-unit vectors, `look` parallel to `up`, bad settings).

use std::fmt;

/// Result type for flythrough camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flythrough camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A caller-supplied value broke the input contract
    /// (e.g. `look` not unit length, `look` parallel to `up`)
    PreconditionViolated {
        /// Name of the offending argument
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// Camera settings out of range (see `FlythroughSettings::validate`)
    InvalidSettings(String),
}

impl Error {
    pub(crate) fn precondition(field: &'static str, reason: impl Into<String>) -> Self {
        Error::PreconditionViolated {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PreconditionViolated { field, reason } => {
                write!(f, "Precondition violated on `{}`: {}", field, reason)
            }
            Error::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
