//! Error types for model construction.
//!
//! This module provides [`ModelError`], returned by every fallible
//! constructor, setter and container mutation in the element model. Errors are
//! raised before anything is assigned, so a failed call leaves the target
//! object unchanged.

use thiserror::Error;

use crate::enumeration::DestinationKind;

/// A type alias for `Result<T, ModelError>`.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building the element model.
///
/// # Categories
///
/// - Validation: [`InvalidValue`](Self::InvalidValue),
///   [`PatternMismatch`](Self::PatternMismatch), [`InvalidToken`](Self::InvalidToken),
///   [`InvalidDestination`](Self::InvalidDestination), [`InvalidShortName`](Self::InvalidShortName)
/// - Structure: [`DuplicateName`](Self::DuplicateName), [`NotAPackage`](Self::NotAPackage),
///   [`InvalidMove`](Self::InvalidMove), [`UnknownNode`](Self::UnknownNode),
///   [`Unresolved`](Self::Unresolved)
/// - Value builder input: [`UnknownDiscriminator`](Self::UnknownDiscriminator),
///   [`UnsupportedValue`](Self::UnsupportedValue), [`InvalidTuple`](Self::InvalidTuple)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Invalid value for '{attribute}': expected {expected}, got {actual}")]
    InvalidValue {
        attribute: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Invalid value for '{attribute}': '{value}' does not match the required pattern")]
    PatternMismatch { attribute: &'static str, value: String },

    #[error("Invalid token for {enumeration}: '{token}'")]
    InvalidToken {
        enumeration: &'static str,
        token: String,
    },

    #[error("{reference} cannot point to destination kind {destination}")]
    InvalidDestination {
        reference: &'static str,
        destination: DestinationKind,
    },

    #[error("Invalid short name: '{0}'")]
    InvalidShortName(String),

    #[error("'{container}' already contains an item named '{name}'")]
    DuplicateName { container: String, name: String },

    #[error("Path segment '{path}' names an element, not a package")]
    NotAPackage { path: String },

    #[error("Cannot move package '{package}' into '{target}'")]
    InvalidMove { package: String, target: String },

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Reference '{path}' does not resolve to an object of the required kind")]
    Unresolved { path: String },

    #[error("Unknown value discriminator: {0}")]
    UnknownDiscriminator(String),

    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    #[error("Invalid labeled value: {0}")]
    InvalidTuple(String),
}

impl ModelError {
    /// Create an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid_value(
        attribute: &'static str,
        expected: impl Into<String>,
        actual: impl ToString,
    ) -> Self {
        Self::InvalidValue {
            attribute,
            expected: expected.into(),
            actual: actual.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ModelError::invalid_value("array_size", "a non-negative integer", -1);
        assert_eq!(
            err.to_string(),
            "Invalid value for 'array_size': expected a non-negative integer, got -1"
        );
    }

    #[test]
    fn test_invalid_destination_message() {
        let err = ModelError::InvalidDestination {
            reference: "CompuMethodRef",
            destination: DestinationKind::Unit,
        };
        assert_eq!(err.to_string(), "CompuMethodRef cannot point to destination kind UNIT");
    }
}
