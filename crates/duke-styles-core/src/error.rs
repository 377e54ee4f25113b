//! Error types for duke-styles-core

use crate::attribute::Attribute;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving, normalizing or interning a style
///
/// Every error names the offending attribute and value where one exists.
/// None of them leave a registry partially modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No scope supplies the attribute and it has no default
    #[error("No value and no default for attribute `{attribute}`")]
    Config { attribute: Attribute },

    /// Value outside the legal domain of the output format
    #[error("Invalid value {value} for attribute `{attribute}`: expected {expected}")]
    Format {
        attribute: Attribute,
        value: String,
        expected: &'static str,
    },

    /// Style table would exceed the format's distinct-style ceiling
    #[error("Style table full ({limit} styles), cannot add style {key}")]
    CapacityExceeded { limit: usize, key: String },

    /// Intern attempted after the registry was sealed
    #[error("Style registry is sealed, cannot add style {key}")]
    Sealed { key: String },

    /// Registry unusable with the session's output format
    #[error("Style registry rejected: {reason}")]
    Registry { reason: String },
}

/// Broad category of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing value without default, or a misconfigured registry
    Config,
    /// Out-of-domain value
    Format,
    /// Style ceiling reached
    CapacityExceeded,
    /// Registry already sealed
    Sealed,
}

impl Error {
    /// Create a format error for an out-of-domain value
    pub fn format(attribute: Attribute, value: impl ToString, expected: &'static str) -> Self {
        Error::Format {
            attribute,
            value: value.to_string(),
            expected,
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config { .. } | Error::Registry { .. } => ErrorKind::Config,
            Error::Format { .. } => ErrorKind::Format,
            Error::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Error::Sealed { .. } => ErrorKind::Sealed,
        }
    }

    /// Offending attribute, if the error concerns a single attribute
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Error::Config { attribute } | Error::Format { attribute, .. } => Some(*attribute),
            Error::CapacityExceeded { .. } | Error::Sealed { .. } | Error::Registry { .. } => None,
        }
    }
}
