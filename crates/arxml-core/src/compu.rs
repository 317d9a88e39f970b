//! Computation methods.
//!
//! A [`CompuMethod`] converts between internal and physical values through
//! up to two [`Computation`]s. Each computation is an ordered list of
//! [`CompuScale`]s; a scale covers an interval of the input and maps it
//! either to a constant or through rational coefficients.
//!
//! # Example
//!
//! ```
//! use arxml_core::compu::{CompuMethod, Computation};
//!
//! // physical = 0 + 2 * internal
//! let method = CompuMethod::new("CM_Speed")
//!     .unwrap()
//!     .with_category("LINEAR")
//!     .with_int_to_phys(Computation::linear(2, 0));
//! assert_eq!(method.int_to_phys().map(|c| c.scales().len()), Some(1));
//! ```

use crate::{
    base::{self, IsEmpty},
    constraint::{Limits, ValueConstraint, limits_builders},
    documentation::MultiLanguageOverviewParagraph,
    enumeration::IntervalType,
    error::Result,
    identifiable::{Identifiable, referrable},
    number::{Number, NumericValue},
    reference::UnitRef,
};

/// Conversion between internal and physical values, rendered as
/// `COMPU-METHOD`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompuMethod {
    identifiable: Identifiable,
    display_format: Option<String>,
    unit_ref: Option<UnitRef>,
    int_to_phys: Option<Computation>,
    phys_to_int: Option<Computation>,
}

impl CompuMethod {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            display_format: None,
            unit_ref: None,
            int_to_phys: None,
            phys_to_int: None,
        })
    }

    /// Sets the printf-style display format.
    pub fn with_display_format(mut self, format: impl Into<String>) -> Self {
        self.display_format = Some(format.into());
        self
    }

    pub fn with_unit_ref(mut self, unit_ref: UnitRef) -> Self {
        self.unit_ref = Some(unit_ref);
        self
    }

    pub fn with_int_to_phys(mut self, computation: Computation) -> Self {
        self.int_to_phys = Some(computation);
        self
    }

    pub fn with_phys_to_int(mut self, computation: Computation) -> Self {
        self.phys_to_int = Some(computation);
        self
    }

    pub fn display_format(&self) -> Option<&str> {
        self.display_format.as_deref()
    }

    pub fn unit_ref(&self) -> Option<&UnitRef> {
        self.unit_ref.as_ref()
    }

    /// Internal-to-physical computation, rendered as `COMPU-INTERNAL-TO-PHYS`.
    pub fn int_to_phys(&self) -> Option<&Computation> {
        self.int_to_phys.as_ref()
    }

    /// Physical-to-internal computation, rendered as `COMPU-PHYS-TO-INTERNAL`.
    pub fn phys_to_int(&self) -> Option<&Computation> {
        self.phys_to_int.as_ref()
    }
}

referrable!(CompuMethod, CompuMethod);

/// Ordered scales plus an optional default value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Computation {
    scales: Vec<CompuScale>,
    default_value: Option<CompuConst>,
}

impl Computation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a single-scale computation `offset + scaling_factor * x`.
    ///
    /// The numerator coefficients are `[offset, scaling_factor]`, the
    /// denominator is `[1]`.
    pub fn linear(scaling_factor: impl Into<Number>, offset: impl Into<Number>) -> Self {
        Self::rational(vec![offset.into(), scaling_factor.into()], vec![Number::Integer(1)])
    }

    /// Creates a single-scale computation with the given coefficients.
    pub fn rational(numerator: Vec<Number>, denominator: Vec<Number>) -> Self {
        Self::new().with_scale(CompuScale::new().with_rational(CompuRational::new(numerator, denominator)))
    }

    /// Creates one scale per entry, mapping the single point `value` to the
    /// text constant `text`.
    pub fn value_table<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let scales = entries
            .into_iter()
            .map(|(value, text)| {
                CompuScale::new()
                    .with_lower_limit(value, IntervalType::Closed)
                    .with_upper_limit(value, IntervalType::Closed)
                    .with_const(CompuConst::Text(text.into()))
            })
            .collect();
        Self {
            scales,
            default_value: None,
        }
    }

    pub fn with_scale(mut self, scale: CompuScale) -> Self {
        self.scales.push(scale);
        self
    }

    /// Appends the given scales in order.
    pub fn extend(&mut self, scales: impl IntoIterator<Item = CompuScale>) {
        self.scales.extend(scales);
    }

    pub fn with_default_value(mut self, value: CompuConst) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn scales(&self) -> &[CompuScale] {
        &self.scales
    }

    /// Rendered as `COMPU-DEFAULT-VALUE`.
    pub fn default_value(&self) -> Option<&CompuConst> {
        self.default_value.as_ref()
    }
}

impl IsEmpty for Computation {
    fn is_empty(&self) -> bool {
        self.scales.is_empty() && self.default_value.is_none()
    }
}

/// Constant payload, rendered as `V` or `VT`.
#[derive(Debug, Clone, PartialEq)]
pub enum CompuConst {
    Numeric(NumericValue),
    Text(String),
}

/// Rational coefficients, rendered as `COMPU-RATIONAL-COEFFS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompuRational {
    numerator: Vec<Number>,
    denominator: Vec<Number>,
}

impl CompuRational {
    pub fn new(numerator: Vec<Number>, denominator: Vec<Number>) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &[Number] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[Number] {
        &self.denominator
    }
}

impl IsEmpty for CompuRational {
    fn is_empty(&self) -> bool {
        self.numerator.is_empty() && self.denominator.is_empty()
    }
}

/// Content of a scale. Exactly one kind is populated.
#[derive(Debug, Clone, PartialEq)]
pub enum CompuScaleContent {
    Const(CompuConst),
    Rational(CompuRational),
}

/// One interval of a computation, rendered as `COMPU-SCALE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompuScale {
    label: Option<String>,
    symbol: Option<String>,
    desc: Option<MultiLanguageOverviewParagraph>,
    mask: Option<u64>,
    limits: Limits,
    inverse_value: Option<CompuConst>,
    content: Option<CompuScaleContent>,
}

impl CompuScale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<MultiLanguageOverviewParagraph>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the bit mask.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative mask.
    pub fn with_mask(mut self, mask: i64) -> Result<Self> {
        self.mask = Some(base::positive_integer("mask", mask)?);
        Ok(self)
    }

    pub fn with_inverse_value(mut self, value: CompuConst) -> Self {
        self.inverse_value = Some(value);
        self
    }

    /// Sets a constant content, replacing any rational coefficients.
    pub fn with_const(mut self, value: CompuConst) -> Self {
        self.content = Some(CompuScaleContent::Const(value));
        self
    }

    /// Sets rational coefficients, replacing any constant.
    pub fn with_rational(mut self, rational: CompuRational) -> Self {
        self.content = Some(CompuScaleContent::Rational(rational));
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn desc(&self) -> Option<&MultiLanguageOverviewParagraph> {
        self.desc.as_ref()
    }

    pub fn mask(&self) -> Option<u64> {
        self.mask
    }

    pub fn inverse_value(&self) -> Option<&CompuConst> {
        self.inverse_value.as_ref()
    }

    pub fn content(&self) -> Option<&CompuScaleContent> {
        self.content.as_ref()
    }
}

limits_builders!(CompuScale);

impl IsEmpty for CompuScale {
    fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.symbol.is_none()
            && self.desc.is_none()
            && self.mask.is_none()
            && self.limits.is_empty()
            && self.inverse_value.is_none()
            && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_coefficients() {
        let computation = Computation::linear(2, 0);
        let scale = &computation.scales()[0];
        let Some(CompuScaleContent::Rational(rational)) = scale.content() else {
            panic!("expected rational content");
        };
        assert_eq!(rational.numerator(), &[Number::Integer(0), Number::Integer(2)]);
        assert_eq!(rational.denominator(), &[Number::Integer(1)]);
    }

    #[test]
    fn test_content_is_exclusive() {
        let scale = CompuScale::new()
            .with_const(CompuConst::Text("OFF".to_string()))
            .with_rational(CompuRational::new(vec![Number::Integer(1)], vec![]));
        assert!(matches!(scale.content(), Some(CompuScaleContent::Rational(_))));

        let scale = scale.with_const(CompuConst::Numeric(NumericValue::new(3)));
        assert!(matches!(scale.content(), Some(CompuScaleContent::Const(_))));
    }

    #[test]
    fn test_value_table() {
        let computation = Computation::value_table([(0, "OFF"), (1, "ON")]);
        assert_eq!(computation.scales().len(), 2);
        let on = &computation.scales()[1];
        assert!(on.check_value(1.0));
        assert!(!on.check_value(0.0));
        assert_eq!(
            on.content(),
            Some(&CompuScaleContent::Const(CompuConst::Text("ON".to_string())))
        );
    }

    #[test]
    fn test_emptiness() {
        assert!(Computation::new().is_empty());
        assert!(CompuScale::new().is_empty());
        assert!(!CompuScale::new().with_symbol("s").is_empty());
        assert!(CompuScale::new().with_mask(-1).is_err());
    }

    #[test]
    fn test_method_accessors() {
        let method = CompuMethod::new("CM")
            .unwrap()
            .with_display_format("%.2f")
            .with_unit_ref(UnitRef::from_path("/Units/kmh"))
            .with_phys_to_int(Computation::linear(0.5, 0));
        assert_eq!(method.short_name(), "CM");
        assert_eq!(method.display_format(), Some("%.2f"));
        assert!(method.int_to_phys().is_none());
        assert!(method.phys_to_int().is_some());
    }
}
