//! Base types, data definition properties and data types.
//!
//! [`SwDataDefProps`] is the property set attached to data types and their
//! elements: references to the base type, computation method, constraint and
//! unit, plus presentation and calibration settings. It holds a list of
//! [`SwDataDefPropsConditional`] variants; plain models use exactly one.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    base::{self, IntegerOrString, IntegerOrToken, IsEmpty},
    documentation::Annotation,
    enumeration::{
        ArrayImplPolicy, ArraySizeHandling, ArraySizeSemantics, ByteOrder, DisplayPresentation,
        MemoryAllocationKeywordPolicy, SectionType, SwCalibrationAccess, SwImplPolicy,
    },
    error::Result,
    identifiable::{Identifiable, referrable},
    number::Number,
    reference::{
        ApplicationDataTypeRef, CompuMethodRef, DataConstraintRef, FunctionPtrSignatureRef,
        ImplementationDataTypeRef, IndexDataTypeRef, SwAddrMethodRef, SwBaseTypeRef,
        SwRecordLayoutRef, UnitRef,
    },
    value::ValueSpecification,
};

/// Accepted symbolic and literal forms of `SW-ALIGNMENT`.
#[allow(clippy::expect_used)]
static ALIGNMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[1-9][0-9]*|0[xX][0-9a-fA-F]*|0[bB][0-1]+|0[0-7]*|UNSPECIFIED|UNKNOWN|BOOLEAN|PTR)$")
        .expect("valid regex")
});

// =============================================================================
// Base Types
// =============================================================================

/// Platform base type, rendered as `SW-BASE-TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwBaseType {
    identifiable: Identifiable,
    size: Option<u64>,
    max_size: Option<u64>,
    encoding: Option<String>,
    alignment: Option<u64>,
    byte_order: Option<ByteOrder>,
    native_declaration: Option<String>,
}

impl SwBaseType {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            size: None,
            max_size: None,
            encoding: None,
            alignment: None,
            byte_order: None,
            native_declaration: None,
        })
    }

    /// Sets the size in bits.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative size.
    pub fn with_size(mut self, size: i64) -> Result<Self> {
        self.size = Some(base::positive_integer("base_type_size", size)?);
        Ok(self)
    }

    /// Sets the maximum size in bits.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative size.
    pub fn with_max_size(mut self, size: i64) -> Result<Self> {
        self.max_size = Some(base::positive_integer("max_base_type_size", size)?);
        Ok(self)
    }

    /// Sets the encoding, e.g. `2C` or `IEEE754`.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Sets the memory alignment in bits.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative alignment.
    pub fn with_alignment(mut self, alignment: i64) -> Result<Self> {
        self.alignment = Some(base::positive_integer("mem_alignment", alignment)?);
        Ok(self)
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = Some(byte_order);
        self
    }

    pub fn with_native_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.native_declaration = Some(declaration.into());
        self
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn alignment(&self) -> Option<u64> {
        self.alignment
    }

    pub fn byte_order(&self) -> Option<ByteOrder> {
        self.byte_order
    }

    pub fn native_declaration(&self) -> Option<&str> {
        self.native_declaration.as_deref()
    }
}

referrable!(SwBaseType, SwBaseType);

// =============================================================================
// Data Definition Properties
// =============================================================================

/// Data definition properties, rendered as `SW-DATA-DEF-PROPS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwDataDefProps {
    variants: Vec<SwDataDefPropsConditional>,
}

impl SwDataDefProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: SwDataDefPropsConditional) -> Self {
        self.variants.push(variant);
        self
    }

    pub fn variants(&self) -> &[SwDataDefPropsConditional] {
        &self.variants
    }
}

impl From<SwDataDefPropsConditional> for SwDataDefProps {
    fn from(variant: SwDataDefPropsConditional) -> Self {
        Self::new().with_variant(variant)
    }
}

impl IsEmpty for SwDataDefProps {
    fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// One variant of data definition properties, rendered as
/// `SW-DATA-DEF-PROPS-CONDITIONAL`.
///
/// Fields are declared in the order the writer emits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwDataDefPropsConditional {
    display_presentation: Option<DisplayPresentation>,
    step_size: Option<Number>,
    annotations: Vec<Annotation>,
    addr_method_ref: Option<SwAddrMethodRef>,
    alignment: Option<IntegerOrToken>,
    base_type_ref: Option<SwBaseTypeRef>,
    bit_representation: Option<SwBitRepresentation>,
    calibration_access: Option<SwCalibrationAccess>,
    text_props: Option<SwTextProps>,
    compu_method_ref: Option<CompuMethodRef>,
    display_format: Option<String>,
    data_constraint_ref: Option<DataConstraintRef>,
    implementation_data_type_ref: Option<ImplementationDataTypeRef>,
    impl_policy: Option<SwImplPolicy>,
    additional_native_type_qualifier: Option<String>,
    intended_resolution: Option<Number>,
    interpolation_method: Option<String>,
    invalid_value: Option<ValueSpecification>,
    is_virtual: Option<bool>,
    pointer_target_props: Option<Box<SwPointerTargetProps>>,
    record_layout_ref: Option<SwRecordLayoutRef>,
    unit_ref: Option<UnitRef>,
}

impl SwDataDefPropsConditional {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_presentation(mut self, presentation: DisplayPresentation) -> Self {
        self.display_presentation = Some(presentation);
        self
    }

    pub fn with_step_size(mut self, step_size: impl Into<Number>) -> Self {
        self.step_size = Some(step_size.into());
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_addr_method_ref(mut self, reference: SwAddrMethodRef) -> Self {
        self.addr_method_ref = Some(reference);
        self
    }

    /// Sets the alignment: a non-negative integer, a `0x`/`0b`/octal literal
    /// or one of `UNSPECIFIED`, `UNKNOWN`, `BOOLEAN`, `PTR`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative integer and
    /// [`ModelError::PatternMismatch`](crate::ModelError::PatternMismatch) for
    /// any other string.
    pub fn with_alignment(mut self, alignment: impl Into<IntegerOrString>) -> Result<Self> {
        self.alignment = Some(base::int_or_pattern(
            "sw_alignment",
            alignment.into(),
            &ALIGNMENT_PATTERN,
        )?);
        Ok(self)
    }

    pub fn with_base_type_ref(mut self, reference: SwBaseTypeRef) -> Self {
        self.base_type_ref = Some(reference);
        self
    }

    pub fn with_bit_representation(mut self, representation: SwBitRepresentation) -> Self {
        self.bit_representation = Some(representation);
        self
    }

    pub fn with_calibration_access(mut self, access: SwCalibrationAccess) -> Self {
        self.calibration_access = Some(access);
        self
    }

    pub fn with_text_props(mut self, props: SwTextProps) -> Self {
        self.text_props = Some(props);
        self
    }

    pub fn with_compu_method_ref(mut self, reference: CompuMethodRef) -> Self {
        self.compu_method_ref = Some(reference);
        self
    }

    pub fn with_display_format(mut self, format: impl Into<String>) -> Self {
        self.display_format = Some(format.into());
        self
    }

    pub fn with_data_constraint_ref(mut self, reference: DataConstraintRef) -> Self {
        self.data_constraint_ref = Some(reference);
        self
    }

    pub fn with_implementation_data_type_ref(mut self, reference: ImplementationDataTypeRef) -> Self {
        self.implementation_data_type_ref = Some(reference);
        self
    }

    pub fn with_impl_policy(mut self, policy: SwImplPolicy) -> Self {
        self.impl_policy = Some(policy);
        self
    }

    pub fn with_additional_native_type_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.additional_native_type_qualifier = Some(qualifier.into());
        self
    }

    pub fn with_intended_resolution(mut self, resolution: impl Into<Number>) -> Self {
        self.intended_resolution = Some(resolution.into());
        self
    }

    pub fn with_interpolation_method(mut self, method: impl Into<String>) -> Self {
        self.interpolation_method = Some(method.into());
        self
    }

    pub fn with_invalid_value(mut self, value: impl Into<ValueSpecification>) -> Self {
        self.invalid_value = Some(value.into());
        self
    }

    pub fn with_is_virtual(mut self, is_virtual: bool) -> Self {
        self.is_virtual = Some(is_virtual);
        self
    }

    pub fn with_pointer_target_props(mut self, props: SwPointerTargetProps) -> Self {
        self.pointer_target_props = Some(Box::new(props));
        self
    }

    pub fn with_record_layout_ref(mut self, reference: SwRecordLayoutRef) -> Self {
        self.record_layout_ref = Some(reference);
        self
    }

    pub fn with_unit_ref(mut self, reference: UnitRef) -> Self {
        self.unit_ref = Some(reference);
        self
    }

    pub fn display_presentation(&self) -> Option<DisplayPresentation> {
        self.display_presentation
    }

    pub fn step_size(&self) -> Option<Number> {
        self.step_size
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn addr_method_ref(&self) -> Option<&SwAddrMethodRef> {
        self.addr_method_ref.as_ref()
    }

    pub fn alignment(&self) -> Option<&IntegerOrToken> {
        self.alignment.as_ref()
    }

    pub fn base_type_ref(&self) -> Option<&SwBaseTypeRef> {
        self.base_type_ref.as_ref()
    }

    pub fn bit_representation(&self) -> Option<&SwBitRepresentation> {
        self.bit_representation.as_ref()
    }

    pub fn calibration_access(&self) -> Option<SwCalibrationAccess> {
        self.calibration_access
    }

    pub fn text_props(&self) -> Option<&SwTextProps> {
        self.text_props.as_ref()
    }

    pub fn compu_method_ref(&self) -> Option<&CompuMethodRef> {
        self.compu_method_ref.as_ref()
    }

    pub fn display_format(&self) -> Option<&str> {
        self.display_format.as_deref()
    }

    pub fn data_constraint_ref(&self) -> Option<&DataConstraintRef> {
        self.data_constraint_ref.as_ref()
    }

    pub fn implementation_data_type_ref(&self) -> Option<&ImplementationDataTypeRef> {
        self.implementation_data_type_ref.as_ref()
    }

    pub fn impl_policy(&self) -> Option<SwImplPolicy> {
        self.impl_policy
    }

    pub fn additional_native_type_qualifier(&self) -> Option<&str> {
        self.additional_native_type_qualifier.as_deref()
    }

    pub fn intended_resolution(&self) -> Option<Number> {
        self.intended_resolution
    }

    pub fn interpolation_method(&self) -> Option<&str> {
        self.interpolation_method.as_deref()
    }

    pub fn invalid_value(&self) -> Option<&ValueSpecification> {
        self.invalid_value.as_ref()
    }

    pub fn is_virtual(&self) -> Option<bool> {
        self.is_virtual
    }

    pub fn pointer_target_props(&self) -> Option<&SwPointerTargetProps> {
        self.pointer_target_props.as_deref()
    }

    pub fn record_layout_ref(&self) -> Option<&SwRecordLayoutRef> {
        self.record_layout_ref.as_ref()
    }

    pub fn unit_ref(&self) -> Option<&UnitRef> {
        self.unit_ref.as_ref()
    }
}

impl IsEmpty for SwDataDefPropsConditional {
    fn is_empty(&self) -> bool {
        self.display_presentation.is_none()
            && self.step_size.is_none()
            && self.annotations.is_empty()
            && self.addr_method_ref.is_none()
            && self.alignment.is_none()
            && self.base_type_ref.is_none()
            && self.bit_representation.is_none()
            && self.calibration_access.is_none()
            && self.text_props.is_none()
            && self.compu_method_ref.is_none()
            && self.display_format.is_none()
            && self.data_constraint_ref.is_none()
            && self.implementation_data_type_ref.is_none()
            && self.impl_policy.is_none()
            && self.additional_native_type_qualifier.is_none()
            && self.intended_resolution.is_none()
            && self.interpolation_method.is_none()
            && self.invalid_value.is_none()
            && self.is_virtual.is_none()
            && self.pointer_target_props.is_none()
            && self.record_layout_ref.is_none()
            && self.unit_ref.is_none()
    }
}

/// Bit position and width of a value inside a larger word, rendered as
/// `SW-BIT-REPRESENTATION`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwBitRepresentation {
    position: Option<u64>,
    num_bits: Option<u64>,
}

impl SwBitRepresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bit position.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative position.
    pub fn with_position(mut self, position: i64) -> Result<Self> {
        self.position = Some(base::positive_integer("bit_position", position)?);
        Ok(self)
    }

    /// Sets the number of bits.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative count.
    pub fn with_num_bits(mut self, num_bits: i64) -> Result<Self> {
        self.num_bits = Some(base::positive_integer("number_of_bits", num_bits)?);
        Ok(self)
    }

    pub fn position(&self) -> Option<u64> {
        self.position
    }

    pub fn num_bits(&self) -> Option<u64> {
        self.num_bits
    }
}

impl IsEmpty for SwBitRepresentation {
    fn is_empty(&self) -> bool {
        self.position.is_none() && self.num_bits.is_none()
    }
}

/// Properties of a text value, rendered as `SW-TEXT-PROPS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwTextProps {
    array_size_semantics: Option<ArraySizeSemantics>,
    max_text_size: Option<u64>,
    base_type_ref: Option<SwBaseTypeRef>,
    fill_char: Option<u64>,
}

impl SwTextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_array_size_semantics(mut self, semantics: ArraySizeSemantics) -> Self {
        self.array_size_semantics = Some(semantics);
        self
    }

    /// Sets the maximum text size in characters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative size.
    pub fn with_max_text_size(mut self, size: i64) -> Result<Self> {
        self.max_text_size = Some(base::positive_integer("max_text_size", size)?);
        Ok(self)
    }

    pub fn with_base_type_ref(mut self, reference: SwBaseTypeRef) -> Self {
        self.base_type_ref = Some(reference);
        self
    }

    /// Sets the code point used to pad unused characters.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative code point.
    pub fn with_fill_char(mut self, fill_char: i64) -> Result<Self> {
        self.fill_char = Some(base::positive_integer("fill_char", fill_char)?);
        Ok(self)
    }

    pub fn array_size_semantics(&self) -> Option<ArraySizeSemantics> {
        self.array_size_semantics
    }

    pub fn max_text_size(&self) -> Option<u64> {
        self.max_text_size
    }

    pub fn base_type_ref(&self) -> Option<&SwBaseTypeRef> {
        self.base_type_ref.as_ref()
    }

    pub fn fill_char(&self) -> Option<u64> {
        self.fill_char
    }
}

impl IsEmpty for SwTextProps {
    fn is_empty(&self) -> bool {
        self.array_size_semantics.is_none()
            && self.max_text_size.is_none()
            && self.base_type_ref.is_none()
            && self.fill_char.is_none()
    }
}

/// Properties of a pointer target, rendered as `SW-POINTER-TARGET-PROPS`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwPointerTargetProps {
    target_category: Option<String>,
    sw_data_def_props: Option<SwDataDefProps>,
    function_ptr_signature_ref: Option<FunctionPtrSignatureRef>,
}

impl SwPointerTargetProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_target_category(mut self, category: impl Into<String>) -> Self {
        self.target_category = Some(category.into());
        self
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn with_function_ptr_signature_ref(mut self, reference: FunctionPtrSignatureRef) -> Self {
        self.function_ptr_signature_ref = Some(reference);
        self
    }

    pub fn target_category(&self) -> Option<&str> {
        self.target_category.as_deref()
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn function_ptr_signature_ref(&self) -> Option<&FunctionPtrSignatureRef> {
        self.function_ptr_signature_ref.as_ref()
    }
}

impl IsEmpty for SwPointerTargetProps {
    fn is_empty(&self) -> bool {
        self.target_category.is_none()
            && self.sw_data_def_props.is_none()
            && self.function_ptr_signature_ref.is_none()
    }
}

// =============================================================================
// Implementation Data Types
// =============================================================================

/// Element of a structured or array implementation data type, rendered as
/// `IMPLEMENTATION-DATA-TYPE-ELEMENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementationDataTypeElement {
    identifiable: Identifiable,
    array_impl_policy: Option<ArrayImplPolicy>,
    array_size: Option<u64>,
    array_size_handling: Option<ArraySizeHandling>,
    array_size_semantics: Option<ArraySizeSemantics>,
    is_optional: Option<bool>,
    sub_elements: Vec<ImplementationDataTypeElement>,
    sw_data_def_props: Option<SwDataDefProps>,
}

impl ImplementationDataTypeElement {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            array_impl_policy: None,
            array_size: None,
            array_size_handling: None,
            array_size_semantics: None,
            is_optional: None,
            sub_elements: Vec::new(),
            sw_data_def_props: None,
        })
    }

    pub fn with_array_impl_policy(mut self, policy: ArrayImplPolicy) -> Self {
        self.array_impl_policy = Some(policy);
        self
    }

    /// Sets the array size.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative size.
    pub fn with_array_size(mut self, size: i64) -> Result<Self> {
        self.array_size = Some(base::positive_integer("array_size", size)?);
        Ok(self)
    }

    pub fn with_array_size_handling(mut self, handling: ArraySizeHandling) -> Self {
        self.array_size_handling = Some(handling);
        self
    }

    pub fn with_array_size_semantics(mut self, semantics: ArraySizeSemantics) -> Self {
        self.array_size_semantics = Some(semantics);
        self
    }

    pub fn with_is_optional(mut self, is_optional: bool) -> Self {
        self.is_optional = Some(is_optional);
        self
    }

    pub fn with_sub_element(mut self, element: ImplementationDataTypeElement) -> Self {
        self.sub_elements.push(element);
        self
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.identifiable.set_category(category);
        self
    }

    pub fn identifiable(&self) -> &Identifiable {
        &self.identifiable
    }

    pub fn short_name(&self) -> &str {
        self.identifiable.short_name()
    }

    pub fn array_impl_policy(&self) -> Option<ArrayImplPolicy> {
        self.array_impl_policy
    }

    pub fn array_size(&self) -> Option<u64> {
        self.array_size
    }

    pub fn array_size_handling(&self) -> Option<ArraySizeHandling> {
        self.array_size_handling
    }

    pub fn array_size_semantics(&self) -> Option<ArraySizeSemantics> {
        self.array_size_semantics
    }

    pub fn is_optional(&self) -> Option<bool> {
        self.is_optional
    }

    pub fn sub_elements(&self) -> &[ImplementationDataTypeElement] {
        &self.sub_elements
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }
}

/// Symbol used for an implementation data type in generated code, rendered
/// as `SYMBOL-PROPS`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolProps {
    short_name: String,
    symbol: Option<String>,
}

impl SymbolProps {
    /// Creates symbol properties with a validated short name.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidShortName`](crate::ModelError::InvalidShortName)
    /// for an invalid short name.
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            short_name: base::short_name(short_name)?,
            symbol: None,
        })
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

/// Implementation data type, rendered as `IMPLEMENTATION-DATA-TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImplementationDataType {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
    dynamic_array_size_profile: Option<String>,
    is_struct_with_optional_element: Option<bool>,
    sub_elements: Vec<ImplementationDataTypeElement>,
    symbol_props: Option<SymbolProps>,
    type_emitter: Option<String>,
}

impl ImplementationDataType {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
            dynamic_array_size_profile: None,
            is_struct_with_optional_element: None,
            sub_elements: Vec::new(),
            symbol_props: None,
            type_emitter: None,
        })
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn with_dynamic_array_size_profile(mut self, profile: impl Into<String>) -> Self {
        self.dynamic_array_size_profile = Some(profile.into());
        self
    }

    pub fn with_is_struct_with_optional_element(mut self, value: bool) -> Self {
        self.is_struct_with_optional_element = Some(value);
        self
    }

    pub fn with_sub_element(mut self, element: ImplementationDataTypeElement) -> Self {
        self.sub_elements.push(element);
        self
    }

    pub fn with_symbol_props(mut self, props: SymbolProps) -> Self {
        self.symbol_props = Some(props);
        self
    }

    pub fn with_type_emitter(mut self, emitter: impl Into<String>) -> Self {
        self.type_emitter = Some(emitter.into());
        self
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn dynamic_array_size_profile(&self) -> Option<&str> {
        self.dynamic_array_size_profile.as_deref()
    }

    pub fn is_struct_with_optional_element(&self) -> Option<bool> {
        self.is_struct_with_optional_element
    }

    pub fn sub_elements(&self) -> &[ImplementationDataTypeElement] {
        &self.sub_elements
    }

    pub fn symbol_props(&self) -> Option<&SymbolProps> {
        self.symbol_props.as_ref()
    }

    pub fn type_emitter(&self) -> Option<&str> {
        self.type_emitter.as_deref()
    }
}

referrable!(ImplementationDataType, ImplementationDataType);

// =============================================================================
// Application Data Types
// =============================================================================

/// Primitive application data type, rendered as
/// `APPLICATION-PRIMITIVE-DATA-TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPrimitiveDataType {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
}

impl ApplicationPrimitiveDataType {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
        })
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }
}

referrable!(ApplicationPrimitiveDataType, ApplicationPrimitiveDataType);

/// Element type of an application array, rendered as `ELEMENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationArrayElement {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
    type_ref: Option<ApplicationDataTypeRef>,
    array_size_handling: Option<ArraySizeHandling>,
    array_size_semantics: Option<ArraySizeSemantics>,
    index_data_type_ref: Option<IndexDataTypeRef>,
    max_number_of_elements: Option<u64>,
}

impl ApplicationArrayElement {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
            type_ref: None,
            array_size_handling: None,
            array_size_semantics: None,
            index_data_type_ref: None,
            max_number_of_elements: None,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.identifiable.set_category(category);
        self
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    /// Sets the element type, rendered as `TYPE-TREF`.
    pub fn with_type_ref(mut self, reference: ApplicationDataTypeRef) -> Self {
        self.type_ref = Some(reference);
        self
    }

    pub fn with_array_size_handling(mut self, handling: ArraySizeHandling) -> Self {
        self.array_size_handling = Some(handling);
        self
    }

    pub fn with_array_size_semantics(mut self, semantics: ArraySizeSemantics) -> Self {
        self.array_size_semantics = Some(semantics);
        self
    }

    pub fn with_index_data_type_ref(mut self, reference: IndexDataTypeRef) -> Self {
        self.index_data_type_ref = Some(reference);
        self
    }

    /// Sets the maximum number of elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative count.
    pub fn with_max_number_of_elements(mut self, count: i64) -> Result<Self> {
        self.max_number_of_elements = Some(base::positive_integer("max_number_of_elements", count)?);
        Ok(self)
    }

    pub fn identifiable(&self) -> &Identifiable {
        &self.identifiable
    }

    pub fn short_name(&self) -> &str {
        self.identifiable.short_name()
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn type_ref(&self) -> Option<&ApplicationDataTypeRef> {
        self.type_ref.as_ref()
    }

    pub fn array_size_handling(&self) -> Option<ArraySizeHandling> {
        self.array_size_handling
    }

    pub fn array_size_semantics(&self) -> Option<ArraySizeSemantics> {
        self.array_size_semantics
    }

    pub fn index_data_type_ref(&self) -> Option<&IndexDataTypeRef> {
        self.index_data_type_ref.as_ref()
    }

    pub fn max_number_of_elements(&self) -> Option<u64> {
        self.max_number_of_elements
    }
}

/// Array application data type, rendered as `APPLICATION-ARRAY-DATA-TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationArrayDataType {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
    dynamic_array_size_profile: Option<String>,
    element: Option<ApplicationArrayElement>,
}

impl ApplicationArrayDataType {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
            dynamic_array_size_profile: None,
            element: None,
        })
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn with_dynamic_array_size_profile(mut self, profile: impl Into<String>) -> Self {
        self.dynamic_array_size_profile = Some(profile.into());
        self
    }

    pub fn with_element(mut self, element: ApplicationArrayElement) -> Self {
        self.element = Some(element);
        self
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn dynamic_array_size_profile(&self) -> Option<&str> {
        self.dynamic_array_size_profile.as_deref()
    }

    pub fn element(&self) -> Option<&ApplicationArrayElement> {
        self.element.as_ref()
    }
}

referrable!(ApplicationArrayDataType, ApplicationArrayDataType);

/// Field of an application record, rendered as `APPLICATION-RECORD-ELEMENT`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationRecordElement {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
    type_ref: Option<ApplicationDataTypeRef>,
    is_optional: Option<bool>,
}

impl ApplicationRecordElement {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
            type_ref: None,
            is_optional: None,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.identifiable.set_category(category);
        self
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    /// Sets the field type, rendered as `TYPE-TREF`.
    pub fn with_type_ref(mut self, reference: ApplicationDataTypeRef) -> Self {
        self.type_ref = Some(reference);
        self
    }

    pub fn with_is_optional(mut self, is_optional: bool) -> Self {
        self.is_optional = Some(is_optional);
        self
    }

    pub fn identifiable(&self) -> &Identifiable {
        &self.identifiable
    }

    pub fn short_name(&self) -> &str {
        self.identifiable.short_name()
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn type_ref(&self) -> Option<&ApplicationDataTypeRef> {
        self.type_ref.as_ref()
    }

    pub fn is_optional(&self) -> Option<bool> {
        self.is_optional
    }
}

/// Record application data type, rendered as `APPLICATION-RECORD-DATA-TYPE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationRecordDataType {
    identifiable: Identifiable,
    sw_data_def_props: Option<SwDataDefProps>,
    elements: Vec<ApplicationRecordElement>,
}

impl ApplicationRecordDataType {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            sw_data_def_props: None,
            elements: Vec::new(),
        })
    }

    pub fn with_sw_data_def_props(mut self, props: impl Into<SwDataDefProps>) -> Self {
        self.sw_data_def_props = Some(props.into());
        self
    }

    pub fn with_element(mut self, element: ApplicationRecordElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn sw_data_def_props(&self) -> Option<&SwDataDefProps> {
        self.sw_data_def_props.as_ref()
    }

    pub fn elements(&self) -> &[ApplicationRecordElement] {
        &self.elements
    }
}

referrable!(ApplicationRecordDataType, ApplicationRecordDataType);

// =============================================================================
// Data Type Mappings
// =============================================================================

/// Pairing of an application data type with its implementation, rendered as
/// `DATA-TYPE-MAP`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTypeMap {
    application_data_type_ref: Option<ApplicationDataTypeRef>,
    implementation_data_type_ref: Option<ImplementationDataTypeRef>,
}

impl DataTypeMap {
    pub fn new(
        application_data_type_ref: ApplicationDataTypeRef,
        implementation_data_type_ref: ImplementationDataTypeRef,
    ) -> Self {
        Self {
            application_data_type_ref: Some(application_data_type_ref),
            implementation_data_type_ref: Some(implementation_data_type_ref),
        }
    }

    pub fn application_data_type_ref(&self) -> Option<&ApplicationDataTypeRef> {
        self.application_data_type_ref.as_ref()
    }

    pub fn implementation_data_type_ref(&self) -> Option<&ImplementationDataTypeRef> {
        self.implementation_data_type_ref.as_ref()
    }
}

/// Set of data type maps, rendered as `DATA-TYPE-MAPPING-SET`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTypeMappingSet {
    identifiable: Identifiable,
    data_type_maps: Vec<DataTypeMap>,
}

impl DataTypeMappingSet {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            data_type_maps: Vec::new(),
        })
    }

    pub fn with_data_type_map(mut self, map: DataTypeMap) -> Self {
        self.data_type_maps.push(map);
        self
    }

    pub fn data_type_maps(&self) -> &[DataTypeMap] {
        &self.data_type_maps
    }
}

referrable!(DataTypeMappingSet, DataTypeMappingSet);

// =============================================================================
// Addressing Methods
// =============================================================================

/// Addressing method, rendered as `SW-ADDR-METHOD`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwAddrMethod {
    identifiable: Identifiable,
    memory_allocation_keyword_policy: Option<MemoryAllocationKeywordPolicy>,
    options: Vec<String>,
    section_initialization_policy: Option<String>,
    section_type: Option<SectionType>,
}

impl SwAddrMethod {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            memory_allocation_keyword_policy: None,
            options: Vec::new(),
            section_initialization_policy: None,
            section_type: None,
        })
    }

    pub fn with_memory_allocation_keyword_policy(
        mut self,
        policy: MemoryAllocationKeywordPolicy,
    ) -> Self {
        self.memory_allocation_keyword_policy = Some(policy);
        self
    }

    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }

    pub fn with_section_initialization_policy(mut self, policy: impl Into<String>) -> Self {
        self.section_initialization_policy = Some(policy.into());
        self
    }

    pub fn with_section_type(mut self, section_type: SectionType) -> Self {
        self.section_type = Some(section_type);
        self
    }

    pub fn memory_allocation_keyword_policy(&self) -> Option<MemoryAllocationKeywordPolicy> {
        self.memory_allocation_keyword_policy
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn section_initialization_policy(&self) -> Option<&str> {
        self.section_initialization_policy.as_deref()
    }

    pub fn section_type(&self) -> Option<SectionType> {
        self.section_type
    }
}

referrable!(SwAddrMethod, SwAddrMethod);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ModelError, reference::Reference};

    #[test]
    fn test_alignment_accepts_integers_and_tokens() {
        for token in ["UNSPECIFIED", "UNKNOWN", "BOOLEAN", "PTR", "0x10", "0b101", "8", "017"] {
            let props = SwDataDefPropsConditional::new().with_alignment(token).unwrap();
            assert_eq!(props.alignment(), Some(&IntegerOrToken::Token(token.to_string())));
        }

        let props = SwDataDefPropsConditional::new().with_alignment(32).unwrap();
        assert_eq!(props.alignment(), Some(&IntegerOrToken::Integer(32)));
    }

    #[test]
    fn test_alignment_rejects_other_values() {
        assert_eq!(
            SwDataDefPropsConditional::new().with_alignment("WORD"),
            Err(ModelError::PatternMismatch {
                attribute: "sw_alignment",
                value: "WORD".to_string(),
            })
        );
        assert!(SwDataDefPropsConditional::new().with_alignment("0b2").is_err());
        assert!(SwDataDefPropsConditional::new().with_alignment(-8).is_err());
    }

    #[test]
    fn test_base_type_sizes_are_validated() {
        let base = SwBaseType::new("uint8")
            .unwrap()
            .with_size(8)
            .unwrap()
            .with_encoding("NONE")
            .with_native_declaration("unsigned char");
        assert_eq!(base.size(), Some(8));
        assert_eq!(base.native_declaration(), Some("unsigned char"));

        assert_eq!(
            SwBaseType::new("bad").unwrap().with_size(-1),
            Err(ModelError::invalid_value("base_type_size", "a non-negative integer", -1))
        );
    }

    #[test]
    fn test_array_element_nesting() {
        let element = ImplementationDataTypeElement::new("Row")
            .unwrap()
            .with_category("ARRAY")
            .with_array_size(4)
            .unwrap()
            .with_array_size_semantics(ArraySizeSemantics::FixedSize)
            .with_sub_element(ImplementationDataTypeElement::new("Cell").unwrap());

        let data_type = ImplementationDataType::new("Matrix")
            .unwrap()
            .with_category("ARRAY")
            .with_sub_element(element);

        let row = &data_type.sub_elements()[0];
        assert_eq!(row.array_size(), Some(4));
        assert_eq!(row.sub_elements()[0].short_name(), "Cell");
        assert_eq!(row.identifiable().category(), Some("ARRAY"));
    }

    #[test]
    fn test_emptiness() {
        assert!(SwDataDefProps::new().is_empty());
        assert!(SwDataDefPropsConditional::new().is_empty());
        assert!(!SwDataDefPropsConditional::new().with_is_virtual(false).is_empty());
        assert!(SwPointerTargetProps::new().is_empty());
        assert!(SwBitRepresentation::new().is_empty());
        assert!(SwTextProps::new().is_empty());
        assert!(
            !SwDataDefPropsConditional::new()
                .with_text_props(SwTextProps::new())
                .is_empty()
        );
    }

    #[test]
    fn test_bit_and_text_props_are_validated() {
        let bits = SwBitRepresentation::new()
            .with_position(3)
            .unwrap()
            .with_num_bits(2)
            .unwrap();
        assert_eq!((bits.position(), bits.num_bits()), (Some(3), Some(2)));
        assert!(SwBitRepresentation::new().with_num_bits(-1).is_err());

        let text = SwTextProps::new()
            .with_max_text_size(16)
            .unwrap()
            .with_fill_char(0)
            .unwrap()
            .with_base_type_ref(SwBaseTypeRef::from_path("/Base/char"));
        assert_eq!(text.max_text_size(), Some(16));
        assert_eq!(text.fill_char(), Some(0));
        assert!(SwTextProps::new().with_fill_char(-5).is_err());
    }

    #[test]
    fn test_symbol_props_short_name_is_validated() {
        let props = SymbolProps::new("Speed").unwrap().with_symbol("speed_t");
        assert_eq!(props.short_name(), "Speed");
        assert_eq!(props.symbol(), Some("speed_t"));
        assert!(SymbolProps::new("a/b").is_err());
    }

    #[test]
    fn test_application_composites() {
        let array = ApplicationArrayDataType::new("Speeds")
            .unwrap()
            .with_category("ARRAY")
            .with_element(
                ApplicationArrayElement::new("Speed")
                    .unwrap()
                    .with_type_ref(ApplicationDataTypeRef::from_path("/Types/Speed"))
                    .with_array_size_semantics(ArraySizeSemantics::FixedSize)
                    .with_max_number_of_elements(4)
                    .unwrap(),
            );
        let element = array.element().unwrap();
        assert_eq!(element.max_number_of_elements(), Some(4));
        assert_eq!(element.type_ref().map(|r| r.path()), Some("/Types/Speed"));
        assert!(
            ApplicationArrayElement::new("E")
                .unwrap()
                .with_max_number_of_elements(-1)
                .is_err()
        );

        let record = ApplicationRecordDataType::new("Position")
            .unwrap()
            .with_element(ApplicationRecordElement::new("X").unwrap())
            .with_element(ApplicationRecordElement::new("Y").unwrap().with_is_optional(true));
        let names: Vec<_> = record.elements().iter().map(|e| e.short_name()).collect();
        assert_eq!(names, vec!["X", "Y"]);
        assert_eq!(record.elements()[1].is_optional(), Some(true));
    }

    #[test]
    fn test_data_type_mapping_set() {
        let set = DataTypeMappingSet::new("Mappings").unwrap().with_data_type_map(DataTypeMap::new(
            ApplicationDataTypeRef::from_path("/App/Speed"),
            ImplementationDataTypeRef::from_path("/Impl/uint16"),
        ));
        let map = &set.data_type_maps()[0];
        assert_eq!(map.application_data_type_ref().map(|r| r.path()), Some("/App/Speed"));
        assert_eq!(map.implementation_data_type_ref().map(|r| r.path()), Some("/Impl/uint16"));
    }
}
