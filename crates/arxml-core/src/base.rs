//! Shared behaviors of model objects.
//!
//! Two concerns live here:
//!
//! - [`IsEmpty`]: the emptiness test the writer uses to decide between an
//!   empty tag and a populated one.
//! - Validation helpers used by constructors and setters. Each helper returns
//!   the validated value or a [`ModelError`] naming the offending attribute;
//!   callers assign only after the helper succeeds.

use std::fmt;

use regex::Regex;

use crate::{
    enumeration::XmlEnum,
    error::{ModelError, Result},
};

/// Emptiness test for model objects without a mandatory short name.
///
/// An object is empty when every attribute is absent or an empty sequence.
/// Attributes carrying a non-null default (such as the interval type of a
/// limit) are left out of the test by the implementing type.
pub trait IsEmpty {
    /// Returns `true` if the object carries no content.
    fn is_empty(&self) -> bool;
}

/// Either a bare integer or a symbolic token.
///
/// Used for attributes whose schema type is a union of an integer and a
/// restricted string, such as alignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerOrToken {
    Integer(u64),
    Token(String),
}

impl fmt::Display for IntegerOrToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Token(token) => write!(f, "{token}"),
        }
    }
}

/// Raw input accepted by [`int_or_pattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegerOrString {
    Integer(i64),
    String(String),
}

impl From<i64> for IntegerOrString {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for IntegerOrString {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for IntegerOrString {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for IntegerOrString {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for IntegerOrString {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Validates a non-negative integer.
///
/// The schema's `PositiveInteger` includes zero.
///
/// # Errors
///
/// Returns [`ModelError::InvalidValue`] if `value` is negative.
pub fn positive_integer(attribute: &'static str, value: i64) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| ModelError::invalid_value(attribute, "a non-negative integer", value))
}

/// Validates a value that is either a non-negative integer or a string
/// fully matching `pattern`.
///
/// # Errors
///
/// Returns [`ModelError::InvalidValue`] for a negative integer and
/// [`ModelError::PatternMismatch`] for a string not matching `pattern`.
pub fn int_or_pattern(
    attribute: &'static str,
    value: IntegerOrString,
    pattern: &Regex,
) -> Result<IntegerOrToken> {
    match value {
        IntegerOrString::Integer(value) => {
            positive_integer(attribute, value).map(IntegerOrToken::Integer)
        }
        IntegerOrString::String(value) => {
            let matches_fully = pattern
                .find(&value)
                .is_some_and(|m| m.start() == 0 && m.end() == value.len());
            if matches_fully {
                Ok(IntegerOrToken::Token(value))
            } else {
                Err(ModelError::PatternMismatch { attribute, value })
            }
        }
    }
}

/// Parses an enumeration token, reporting the attribute on failure.
///
/// # Errors
///
/// Returns [`ModelError::InvalidValue`] listing the accepted tokens.
pub fn parse_token<E: XmlEnum>(attribute: &'static str, token: &str) -> Result<E> {
    E::from_token(token).ok_or_else(|| {
        ModelError::invalid_value(
            attribute,
            format!("one of {}", E::TOKENS.join(", ")),
            token,
        )
    })
}

/// Validates a short name.
///
/// The identifier charset is assumed to be checked by the caller; this only
/// rejects names that would break path derivation.
///
/// # Errors
///
/// Returns [`ModelError::InvalidShortName`] for an empty name or one
/// containing `/`.
pub fn short_name(value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.is_empty() || value.contains('/') {
        return Err(ModelError::InvalidShortName(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::ByteOrder;

    fn alignment_pattern() -> Regex {
        Regex::new(r"[1-9][0-9]*|0[xX][0-9a-fA-F]+|0[bB][01]+|UNSPECIFIED|BOOLEAN").unwrap()
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer("size", 0), Ok(0));
        assert_eq!(positive_integer("size", 8), Ok(8));
        assert!(matches!(
            positive_integer("size", -1),
            Err(ModelError::InvalidValue { attribute: "size", .. })
        ));
    }

    #[test]
    fn test_int_or_pattern_accepts_integers_and_tokens() {
        let pattern = alignment_pattern();
        assert_eq!(
            int_or_pattern("alignment", 16.into(), &pattern),
            Ok(IntegerOrToken::Integer(16))
        );
        assert_eq!(
            int_or_pattern("alignment", "BOOLEAN".into(), &pattern),
            Ok(IntegerOrToken::Token("BOOLEAN".to_string()))
        );
        assert_eq!(
            int_or_pattern("alignment", "0x1f".into(), &pattern),
            Ok(IntegerOrToken::Token("0x1f".to_string()))
        );
    }

    #[test]
    fn test_int_or_pattern_requires_full_match() {
        let pattern = alignment_pattern();
        assert_eq!(
            int_or_pattern("alignment", "BOOLEANX".into(), &pattern),
            Err(ModelError::PatternMismatch {
                attribute: "alignment",
                value: "BOOLEANX".to_string(),
            })
        );
        assert!(int_or_pattern("alignment", (-4).into(), &pattern).is_err());
    }

    #[test]
    fn test_parse_token_names_attribute() {
        assert_eq!(
            parse_token::<ByteOrder>("byte_order", "OPAQUE"),
            Ok(ByteOrder::Opaque)
        );
        let err = parse_token::<ByteOrder>("byte_order", "LITTLE").unwrap_err();
        assert!(err.to_string().contains("'byte_order'"));
        assert!(err.to_string().contains("MOST-SIGNIFICANT-BYTE-FIRST"));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Pkg"), Ok("Pkg".to_string()));
        assert!(short_name("").is_err());
        assert!(short_name("A/B").is_err());
    }
}
