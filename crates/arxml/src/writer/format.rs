//! Text formatting of numbers and booleans.
//!
//! Floats render without a fractional part when integral, in shortest
//! round-trip decimal form otherwise, and as `INF`, `-INF` or `NaN` when not
//! finite. Numeric values honor their [`ValueFormat`]; scientific notation
//! always carries six fractional digits and a signed exponent.

use arxml_core::{
    base::IntegerOrToken,
    number::{Number, NumericValue, ValueFormat},
};

/// Conversion of a model value into element text.
pub(crate) trait ToXmlText {
    fn to_xml_text(&self) -> String;
}

/// Formats a float.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "INF" } else { "-INF" }.to_string()
    } else if value == 0.0 {
        // Covers -0.0.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Formats a float in exponent notation with six fractional digits and a
/// signed two-digit exponent, e.g. `1.500000e+03`.
fn format_scientific(value: f64) -> String {
    if !value.is_finite() {
        return format_float(value);
    }
    let text = format!("{value:.6e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

pub fn format_number(value: Number) -> String {
    match value {
        Number::Integer(value) => value.to_string(),
        Number::Float(value) => format_float(value),
    }
}

/// Formats a numeric value in its own format.
pub fn format_numeric(value: &NumericValue) -> String {
    match (value.format(), value.value()) {
        (ValueFormat::Decimal, number) => format_number(number),
        (ValueFormat::Hexadecimal, Number::Integer(value)) => format!("0x{value:x}"),
        (ValueFormat::Binary, Number::Integer(value)) => format!("0b{value:b}"),
        (ValueFormat::Scientific, number) => format_scientific(number.as_f64()),
        // Hexadecimal and binary floats are rejected when the format is set.
        (ValueFormat::Hexadecimal | ValueFormat::Binary, Number::Float(value)) => {
            format_float(value)
        }
    }
}

pub fn format_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl ToXmlText for Number {
    fn to_xml_text(&self) -> String {
        format_number(*self)
    }
}

impl ToXmlText for NumericValue {
    fn to_xml_text(&self) -> String {
        format_numeric(self)
    }
}

impl ToXmlText for bool {
    fn to_xml_text(&self) -> String {
        format_bool(*self).to_string()
    }
}

impl ToXmlText for u64 {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl ToXmlText for str {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl ToXmlText for IntegerOrToken {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}
