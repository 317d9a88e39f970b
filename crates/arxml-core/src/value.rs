//! Value specifications and the plain-data builder.
//!
//! [`ValueSpecification`] is the closed union of literal, composite and
//! referenced values. Composite variants own further specifications, so a
//! value is always a tree.
//!
//! [`ValueSpecification::make_value`] builds a tree from [`RawValue`], a
//! plain nested-data description:
//!
//! | Input | Result |
//! |-------|--------|
//! | integer or float | numerical value |
//! | text | text value |
//! | null | not-available value |
//! | list starting with an array discriminator | array value |
//! | list starting with a record discriminator | record value |
//! | `(label, value)` | `value` with a short label |
//! | `(label, null, pattern)` | labelled not-available value with a default pattern |
//! | `(label, value, pattern)` | `value` with a short label; the pattern is ignored |
//!
//! # Example
//!
//! ```
//! use arxml_core::value::{RawValue, ValueSpecification};
//!
//! let value = ValueSpecification::make_value(RawValue::list(["array", "x", "y"])).unwrap();
//! assert!(matches!(value, ValueSpecification::Array(ref a) if a.elements().len() == 2));
//! ```

use log::trace;

use crate::{
    base::{self, IsEmpty},
    documentation::{MultiLanguageLongName, SingleLanguageUnitNames},
    enumeration::CalprmAxisCategory,
    error::{ModelError, Result},
    number::NumericValue,
    reference::{ConstantRef, UnitRef},
};

/// Discriminators selecting an array, compared case-insensitively.
pub const ARRAY_ALIASES: &[&str] = &["a", "arr", "array", "arrayvaluespecification"];

/// Discriminators selecting a record, compared case-insensitively.
pub const RECORD_ALIASES: &[&str] = &["r", "rec", "record", "recordvaluespecification"];

// =============================================================================
// Value Specifications
// =============================================================================

/// Closed union of value specifications.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpecification {
    Text(TextValue),
    Numerical(NumericalValue),
    NotAvailable(NotAvailableValue),
    Array(ArrayValue),
    Record(RecordValue),
    Application(ApplicationValue),
    ConstantReference(ConstantReference),
}

impl ValueSpecification {
    /// Builds a value specification from plain nested data.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnknownDiscriminator`] for a list that is empty or does
    ///   not start with a known array or record discriminator.
    /// - [`ModelError::UnsupportedValue`] for a boolean.
    /// - [`ModelError::InvalidTuple`] for a tuple of the wrong shape.
    pub fn make_value(raw: impl Into<RawValue>) -> Result<Self> {
        build(raw.into(), None)
    }

    /// The short label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Text(value) => value.label(),
            Self::Numerical(value) => value.label(),
            Self::NotAvailable(value) => value.label(),
            Self::Array(value) => value.label(),
            Self::Record(value) => value.label(),
            Self::Application(value) => value.label(),
            Self::ConstantReference(value) => value.label(),
        }
    }
}

impl IsEmpty for ValueSpecification {
    fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::Numerical(value) => value.is_empty(),
            Self::NotAvailable(value) => value.is_empty(),
            Self::Array(value) => value.is_empty(),
            Self::Record(value) => value.is_empty(),
            Self::Application(value) => value.is_empty(),
            Self::ConstantReference(value) => value.is_empty(),
        }
    }
}

macro_rules! value_variant {
    ($name:ident => $variant:ident) => {
        impl $name {
            /// Sets the short label.
            pub fn with_label(mut self, label: impl Into<String>) -> Self {
                self.label = Some(label.into());
                self
            }

            pub fn label(&self) -> Option<&str> {
                self.label.as_deref()
            }
        }

        impl From<$name> for ValueSpecification {
            fn from(value: $name) -> Self {
                Self::$variant(value)
            }
        }
    };
}

/// Text literal, rendered as `TEXT-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextValue {
    label: Option<String>,
    value: String,
}

impl TextValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl IsEmpty for TextValue {
    fn is_empty(&self) -> bool {
        false
    }
}

value_variant!(TextValue => Text);

/// Numeric literal, rendered as `NUMERICAL-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalValue {
    label: Option<String>,
    value: NumericValue,
}

impl NumericalValue {
    pub fn new(value: impl Into<NumericValue>) -> Self {
        Self {
            label: None,
            value: value.into(),
        }
    }

    pub fn value(&self) -> NumericValue {
        self.value
    }
}

impl IsEmpty for NumericalValue {
    fn is_empty(&self) -> bool {
        false
    }
}

value_variant!(NumericalValue => Numerical);

/// Sentinel for an unavailable value, rendered as
/// `NOT-AVAILABLE-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotAvailableValue {
    label: Option<String>,
    default_pattern: Option<u64>,
}

impl NotAvailableValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bit pattern used to fill the unavailable value.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] for a negative pattern.
    pub fn with_default_pattern(mut self, pattern: i64) -> Result<Self> {
        self.default_pattern = Some(base::positive_integer("default_pattern", pattern)?);
        Ok(self)
    }

    pub fn default_pattern(&self) -> Option<u64> {
        self.default_pattern
    }
}

impl IsEmpty for NotAvailableValue {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.default_pattern.is_none()
    }
}

value_variant!(NotAvailableValue => NotAvailable);

/// Ordered array of values, rendered as `ARRAY-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayValue {
    label: Option<String>,
    elements: Vec<ValueSpecification>,
}

impl ArrayValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, element: impl Into<ValueSpecification>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Appends the given values in order.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = ValueSpecification>) {
        self.elements.extend(elements);
    }

    pub fn elements(&self) -> &[ValueSpecification] {
        &self.elements
    }
}

impl IsEmpty for ArrayValue {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.elements.is_empty()
    }
}

value_variant!(ArrayValue => Array);

/// Ordered record fields, rendered as `RECORD-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordValue {
    label: Option<String>,
    fields: Vec<ValueSpecification>,
}

impl RecordValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<ValueSpecification>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn extend(&mut self, fields: impl IntoIterator<Item = ValueSpecification>) {
        self.fields.extend(fields);
    }

    pub fn fields(&self) -> &[ValueSpecification] {
        &self.fields
    }
}

impl IsEmpty for RecordValue {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.fields.is_empty()
    }
}

value_variant!(RecordValue => Record);

/// Structured application value, rendered as
/// `APPLICATION-VALUE-SPECIFICATION`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationValue {
    label: Option<String>,
    category: Option<String>,
    sw_axis_conts: Vec<SwAxisCont>,
    sw_value_cont: Option<SwValueCont>,
}

impl ApplicationValue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_sw_axis_cont(mut self, axis: SwAxisCont) -> Self {
        self.sw_axis_conts.push(axis);
        self
    }

    pub fn with_sw_value_cont(mut self, values: SwValueCont) -> Self {
        self.sw_value_cont = Some(values);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn sw_axis_conts(&self) -> &[SwAxisCont] {
        &self.sw_axis_conts
    }

    pub fn sw_value_cont(&self) -> Option<&SwValueCont> {
        self.sw_value_cont.as_ref()
    }
}

impl IsEmpty for ApplicationValue {
    fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.category.is_none()
            && self.sw_axis_conts.is_empty()
            && self.sw_value_cont.is_none()
    }
}

value_variant!(ApplicationValue => Application);

/// Indirection to a constant, rendered as `CONSTANT-REFERENCE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantReference {
    label: Option<String>,
    constant_ref: Option<ConstantRef>,
}

impl ConstantReference {
    pub fn new(constant_ref: ConstantRef) -> Self {
        Self {
            label: None,
            constant_ref: Some(constant_ref),
        }
    }

    pub fn constant_ref(&self) -> Option<&ConstantRef> {
        self.constant_ref.as_ref()
    }
}

impl IsEmpty for ConstantReference {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.constant_ref.is_none()
    }
}

value_variant!(ConstantReference => ConstantReference);

// =============================================================================
// Application Value Content
// =============================================================================

/// One entry of [`SwValues`].
#[derive(Debug, Clone, PartialEq)]
pub enum SwValue {
    /// Numeric entry, `V`.
    Numeric(NumericValue),
    /// Text entry, `VT`.
    Text(String),
    /// Nested group, `VG`.
    Group(ValueGroup),
}

impl From<NumericValue> for SwValue {
    fn from(value: NumericValue) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for SwValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<ValueGroup> for SwValue {
    fn from(group: ValueGroup) -> Self {
        Self::Group(group)
    }
}

/// Ordered value entries, rendered as `SW-VALUES-PHYS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwValues {
    values: Vec<SwValue>,
}

impl SwValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<SwValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values(&self) -> &[SwValue] {
        &self.values
    }
}

impl IsEmpty for SwValues {
    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Labelled group of values, rendered as `VG`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueGroup {
    label: Option<MultiLanguageLongName>,
    values: Vec<SwValue>,
}

impl ValueGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<MultiLanguageLongName>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<SwValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn label(&self) -> Option<&MultiLanguageLongName> {
        self.label.as_ref()
    }

    pub fn values(&self) -> &[SwValue] {
        &self.values
    }
}

impl IsEmpty for ValueGroup {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.values.is_empty()
    }
}

/// Ordered numeric list, rendered as `SW-ARRAYSIZE` with one `V` per entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueList {
    values: Vec<NumericValue>,
}

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<NumericValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values(&self) -> &[NumericValue] {
        &self.values
    }
}

impl<T: Into<NumericValue>> FromIterator<T> for ValueList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IsEmpty for ValueList {
    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Values of an application value, rendered as `SW-VALUE-CONT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwValueCont {
    unit_ref: Option<UnitRef>,
    unit_display_name: Option<SingleLanguageUnitNames>,
    sw_array_size: Option<ValueList>,
    sw_values_phys: Option<SwValues>,
}

impl SwValueCont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit_ref(mut self, unit_ref: UnitRef) -> Self {
        self.unit_ref = Some(unit_ref);
        self
    }

    pub fn with_unit_display_name(mut self, name: impl Into<SingleLanguageUnitNames>) -> Self {
        self.unit_display_name = Some(name.into());
        self
    }

    /// Appends one dimension to `SW-ARRAYSIZE`.
    pub fn with_array_size(mut self, size: impl Into<NumericValue>) -> Self {
        let sizes = self.sw_array_size.take().unwrap_or_default();
        self.sw_array_size = Some(sizes.with_value(size));
        self
    }

    pub fn with_sw_array_size(mut self, sizes: ValueList) -> Self {
        self.sw_array_size = Some(sizes);
        self
    }

    pub fn with_values(mut self, values: SwValues) -> Self {
        self.sw_values_phys = Some(values);
        self
    }

    pub fn unit_ref(&self) -> Option<&UnitRef> {
        self.unit_ref.as_ref()
    }

    pub fn unit_display_name(&self) -> Option<&SingleLanguageUnitNames> {
        self.unit_display_name.as_ref()
    }

    pub fn sw_array_size(&self) -> Option<&ValueList> {
        self.sw_array_size.as_ref()
    }

    pub fn sw_values_phys(&self) -> Option<&SwValues> {
        self.sw_values_phys.as_ref()
    }
}

impl IsEmpty for SwValueCont {
    fn is_empty(&self) -> bool {
        self.unit_ref.is_none()
            && self.unit_display_name.is_none()
            && self.sw_array_size.is_none()
            && self.sw_values_phys.is_none()
    }
}

/// Axis values of an application value, rendered as `SW-AXIS-CONT`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwAxisCont {
    category: Option<CalprmAxisCategory>,
    unit_ref: Option<UnitRef>,
    unit_display_name: Option<SingleLanguageUnitNames>,
    sw_axis_index: Option<u64>,
    sw_array_size: Option<ValueList>,
    sw_values_phys: Option<SwValues>,
}

impl SwAxisCont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: CalprmAxisCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_unit_ref(mut self, unit_ref: UnitRef) -> Self {
        self.unit_ref = Some(unit_ref);
        self
    }

    pub fn with_unit_display_name(mut self, name: impl Into<SingleLanguageUnitNames>) -> Self {
        self.unit_display_name = Some(name.into());
        self
    }

    /// Sets the axis index.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`] for a negative index.
    pub fn with_axis_index(mut self, index: i64) -> Result<Self> {
        self.sw_axis_index = Some(base::positive_integer("sw_axis_index", index)?);
        Ok(self)
    }

    pub fn with_array_size(mut self, size: impl Into<NumericValue>) -> Self {
        let sizes = self.sw_array_size.take().unwrap_or_default();
        self.sw_array_size = Some(sizes.with_value(size));
        self
    }

    pub fn with_sw_array_size(mut self, sizes: ValueList) -> Self {
        self.sw_array_size = Some(sizes);
        self
    }

    pub fn with_values(mut self, values: SwValues) -> Self {
        self.sw_values_phys = Some(values);
        self
    }

    pub fn category(&self) -> Option<CalprmAxisCategory> {
        self.category
    }

    pub fn unit_ref(&self) -> Option<&UnitRef> {
        self.unit_ref.as_ref()
    }

    pub fn unit_display_name(&self) -> Option<&SingleLanguageUnitNames> {
        self.unit_display_name.as_ref()
    }

    pub fn sw_axis_index(&self) -> Option<u64> {
        self.sw_axis_index
    }

    pub fn sw_array_size(&self) -> Option<&ValueList> {
        self.sw_array_size.as_ref()
    }

    pub fn sw_values_phys(&self) -> Option<&SwValues> {
        self.sw_values_phys.as_ref()
    }
}

impl IsEmpty for SwAxisCont {
    fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.unit_ref.is_none()
            && self.unit_display_name.is_none()
            && self.sw_axis_index.is_none()
            && self.sw_array_size.is_none()
            && self.sw_values_phys.is_none()
    }
}

// =============================================================================
// Plain-Data Builder
// =============================================================================

/// Plain nested data accepted by [`ValueSpecification::make_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// A list; the first item must be an array or record discriminator.
    List(Vec<RawValue>),
    /// A labelled value: `(label, value)` or `(label, value, pattern)`.
    Tuple(Vec<RawValue>),
}

impl RawValue {
    /// Creates a [`RawValue::List`] from any sequence of convertible items.
    pub fn list<T: Into<RawValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! raw_from {
    ($variant:ident => $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for RawValue {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

raw_from!(Integer => i64: i8, i16, i32, i64, u8, u16, u32);
raw_from!(Float => f64: f32, f64);
raw_from!(Bool => bool: bool);
raw_from!(Text => String: &str, String);

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        Self::List(items)
    }
}

impl<A: Into<RawValue>, B: Into<RawValue>> From<(A, B)> for RawValue {
    fn from((a, b): (A, B)) -> Self {
        Self::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<RawValue>, B: Into<RawValue>, C: Into<RawValue>> From<(A, B, C)> for RawValue {
    fn from((a, b, c): (A, B, C)) -> Self {
        Self::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

enum Composite {
    Array,
    Record,
}

fn discriminator(raw: Option<RawValue>) -> Result<Composite> {
    let token = match raw {
        Some(RawValue::Text(token)) => token,
        Some(other) => return Err(ModelError::UnknownDiscriminator(format!("{other:?}"))),
        None => return Err(ModelError::UnknownDiscriminator("empty list".to_string())),
    };

    let lowered = token.to_lowercase();
    if ARRAY_ALIASES.contains(&lowered.as_str()) {
        Ok(Composite::Array)
    } else if RECORD_ALIASES.contains(&lowered.as_str()) {
        Ok(Composite::Record)
    } else {
        Err(ModelError::UnknownDiscriminator(token))
    }
}

fn build(raw: RawValue, label: Option<String>) -> Result<ValueSpecification> {
    trace!(raw:?; "Building value specification");
    let value = match raw {
        RawValue::Null => ValueSpecification::NotAvailable(NotAvailableValue {
            label,
            default_pattern: None,
        }),
        RawValue::Bool(value) => {
            return Err(ModelError::UnsupportedValue(format!("boolean {value}")));
        }
        RawValue::Integer(value) => ValueSpecification::Numerical(NumericalValue {
            label,
            value: NumericValue::new(value),
        }),
        RawValue::Float(value) => ValueSpecification::Numerical(NumericalValue {
            label,
            value: NumericValue::new(value),
        }),
        RawValue::Text(value) => ValueSpecification::Text(TextValue { label, value }),
        RawValue::List(items) => {
            let mut items = items.into_iter();
            let composite = discriminator(items.next())?;
            let children = items
                .map(|item| build(item, None))
                .collect::<Result<Vec<_>>>()?;
            match composite {
                Composite::Array => ValueSpecification::Array(ArrayValue {
                    label,
                    elements: children,
                }),
                Composite::Record => ValueSpecification::Record(RecordValue {
                    label,
                    fields: children,
                }),
            }
        }
        RawValue::Tuple(items) => return build_labelled(items, label),
    };
    Ok(value)
}

fn build_labelled(items: Vec<RawValue>, outer: Option<String>) -> Result<ValueSpecification> {
    if outer.is_some() {
        return Err(ModelError::InvalidTuple(
            "a labelled value cannot be labelled again".to_string(),
        ));
    }

    let mut items = items.into_iter();
    let label = match items.next() {
        Some(RawValue::Text(label)) => label,
        Some(other) => {
            return Err(ModelError::InvalidTuple(format!(
                "label must be text, got {other:?}"
            )));
        }
        None => return Err(ModelError::InvalidTuple("empty tuple".to_string())),
    };

    match (items.next(), items.next(), items.next()) {
        (Some(value), None, None) => build(value, Some(label)),
        (Some(RawValue::Null), Some(RawValue::Integer(pattern)), None) => {
            let value = NotAvailableValue::new()
                .with_label(label)
                .with_default_pattern(pattern)?;
            Ok(ValueSpecification::NotAvailable(value))
        }
        (Some(RawValue::Null), Some(pattern), None) => Err(ModelError::InvalidTuple(format!(
            "default pattern must be an integer, got {pattern:?}"
        ))),
        // The pattern only applies to not-available values.
        (Some(value), Some(_), None) => build(value, Some(label)),
        _ => Err(ModelError::InvalidTuple(format!(
            "expected 2 or 3 items for label '{label}'"
        ))),
    }
}
