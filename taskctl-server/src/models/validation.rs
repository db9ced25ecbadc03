//! Validation error types

use std::fmt;

/// Input that could not be turned into a domain value
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is missing or empty
    Empty { field: &'static str },

    /// Value does not have the expected shape (e.g. non-numeric id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be decoded as JSON of the expected shape
    InvalidBody { detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidBody { detail } => write!(f, "invalid request body: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}
