//! Numeric values and their output formats.
//!
//! [`Number`] is the plain integer-or-float payload of a numeric element.
//! [`NumericValue`] adds the [`ValueFormat`] the writer has to honor, so
//! `255` can be written as `255`, `0xff`, `0b11111111` or `2.55e2` depending
//! on what the caller chose.

use std::fmt;

use crate::error::{ModelError, Result};

/// An integer or floating-point number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Returns `true` if the number is stored as an integer.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

macro_rules! number_from {
    ($variant:ident => $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }

            impl From<$source> for NumericValue {
                fn from(value: $source) -> Self {
                    Self::new(value)
                }
            }
        )+
    };
}

number_from!(Integer => i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float => f64: f32, f64);

impl From<Number> for NumericValue {
    fn from(value: Number) -> Self {
        Self::new(value)
    }
}

/// Output format of a [`NumericValue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueFormat {
    /// Plain decimal notation.
    #[default]
    Decimal,
    /// `0x`-prefixed lowercase hexadecimal. Non-negative integers only.
    Hexadecimal,
    /// `0b`-prefixed binary. Non-negative integers only.
    Binary,
    /// Exponent notation, e.g. `1.500000e+03`.
    Scientific,
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Decimal => "decimal",
            Self::Hexadecimal => "hexadecimal",
            Self::Binary => "binary",
            Self::Scientific => "scientific",
        };
        write!(f, "{name}")
    }
}

/// A number together with the format it is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericValue {
    value: Number,
    format: ValueFormat,
}

impl NumericValue {
    /// Creates a decimal-formatted value.
    pub fn new(value: impl Into<Number>) -> Self {
        Self {
            value: value.into(),
            format: ValueFormat::Decimal,
        }
    }

    /// Sets the output format.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] if a hexadecimal or binary format
    /// is requested for a float or a negative integer.
    pub fn with_format(mut self, format: ValueFormat) -> Result<Self> {
        if matches!(format, ValueFormat::Hexadecimal | ValueFormat::Binary) {
            match self.value {
                Number::Integer(value) if value >= 0 => {}
                other => {
                    return Err(ModelError::invalid_value(
                        "format",
                        format!("a non-negative integer for {format} format"),
                        format!("{other:?}"),
                    ));
                }
            }
        }
        self.format = format;
        Ok(self)
    }

    pub fn value(&self) -> Number {
        self.value
    }

    pub fn format(&self) -> ValueFormat {
        self.format
    }

    /// Returns the value as `f64`, for interval checks.
    pub fn as_f64(&self) -> f64 {
        self.value.as_f64()
    }
}
