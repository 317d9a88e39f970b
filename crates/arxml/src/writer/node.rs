//! Objects accepted by the single-object entry points.

use arxml_core::{
    compu::{CompuMethod, CompuRational, CompuScale},
    constant::ConstantSpecification,
    constraint::{DataConstraint, DataConstraintRule, InternalConstraint, PhysicalConstraint, ScaleConstraint},
    data_type::{
        ApplicationArrayDataType, ApplicationArrayElement, ApplicationPrimitiveDataType,
        ApplicationRecordDataType, ApplicationRecordElement, DataTypeMap, DataTypeMappingSet,
        ImplementationDataType, ImplementationDataTypeElement, SwAddrMethod, SwBaseType,
        SwBitRepresentation, SwDataDefProps, SwPointerTargetProps, SwTextProps, SymbolProps,
    },
    document::{Document, PackageId},
    documentation::{
        AdminData, Annotation, DocRevision, DocumentationBlock, List, MultiLanguageLongName,
        MultiLanguageOverviewParagraph, MultiLanguageParagraph, MultiLanguageVerbatim,
        SingleLanguageUnitNames,
    },
    element::Element,
    enumeration::XmlEnum,
    unit::{PhysicalDimension, Unit},
    value::{SwAxisCont, SwValueCont, ValueList, ValueSpecification},
};

/// A borrowed model object together with the tag it renders as.
///
/// Packages need their document to reach their children, so
/// [`Node::Package`] carries both.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Package(&'a Document, PackageId),
    Element(&'a Element),
    ApplicationArrayDataType(&'a ApplicationArrayDataType),
    ApplicationPrimitiveDataType(&'a ApplicationPrimitiveDataType),
    ApplicationRecordDataType(&'a ApplicationRecordDataType),
    CompuMethod(&'a CompuMethod),
    ConstantSpecification(&'a ConstantSpecification),
    DataConstraint(&'a DataConstraint),
    DataTypeMappingSet(&'a DataTypeMappingSet),
    ImplementationDataType(&'a ImplementationDataType),
    PhysicalDimension(&'a PhysicalDimension),
    SwAddrMethod(&'a SwAddrMethod),
    SwBaseType(&'a SwBaseType),
    Unit(&'a Unit),
    ImplementationDataTypeElement(&'a ImplementationDataTypeElement),
    ApplicationArrayElement(&'a ApplicationArrayElement),
    ApplicationRecordElement(&'a ApplicationRecordElement),
    DataTypeMap(&'a DataTypeMap),
    SwDataDefProps(&'a SwDataDefProps),
    SwBitRepresentation(&'a SwBitRepresentation),
    SwTextProps(&'a SwTextProps),
    SwPointerTargetProps(&'a SwPointerTargetProps),
    SymbolProps(&'a SymbolProps),
    CompuScale(&'a CompuScale),
    CompuRational(&'a CompuRational),
    DataConstraintRule(&'a DataConstraintRule),
    InternalConstraint(&'a InternalConstraint),
    PhysicalConstraint(&'a PhysicalConstraint),
    ScaleConstraint(&'a ScaleConstraint),
    ValueSpecification(&'a ValueSpecification),
    SwValueCont(&'a SwValueCont),
    SwAxisCont(&'a SwAxisCont),
    ValueList(&'a ValueList),
    AdminData(&'a AdminData),
    Annotation(&'a Annotation),
    DocRevision(&'a DocRevision),
    /// Rendered as `INTRODUCTION`.
    Introduction(&'a DocumentationBlock),
    LongName(&'a MultiLanguageLongName),
    Desc(&'a MultiLanguageOverviewParagraph),
    /// Rendered as `DISPLAY-NAME`.
    UnitDisplayName(&'a SingleLanguageUnitNames),
    Paragraph(&'a MultiLanguageParagraph),
    Verbatim(&'a MultiLanguageVerbatim),
    List(&'a List),
}

impl Node<'_> {
    /// Outermost tag of the rendered object.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Package(..) => "AR-PACKAGE",
            Self::Element(element) => element.destination_kind().token(),
            Self::ApplicationArrayDataType(_) => "APPLICATION-ARRAY-DATA-TYPE",
            Self::ApplicationPrimitiveDataType(_) => "APPLICATION-PRIMITIVE-DATA-TYPE",
            Self::ApplicationRecordDataType(_) => "APPLICATION-RECORD-DATA-TYPE",
            Self::CompuMethod(_) => "COMPU-METHOD",
            Self::ConstantSpecification(_) => "CONSTANT-SPECIFICATION",
            Self::DataConstraint(_) => "DATA-CONSTR",
            Self::DataTypeMappingSet(_) => "DATA-TYPE-MAPPING-SET",
            Self::ImplementationDataType(_) => "IMPLEMENTATION-DATA-TYPE",
            Self::PhysicalDimension(_) => "PHYSICAL-DIMENSION",
            Self::SwAddrMethod(_) => "SW-ADDR-METHOD",
            Self::SwBaseType(_) => "SW-BASE-TYPE",
            Self::Unit(_) => "UNIT",
            Self::ImplementationDataTypeElement(_) => "IMPLEMENTATION-DATA-TYPE-ELEMENT",
            Self::ApplicationArrayElement(_) => "ELEMENT",
            Self::ApplicationRecordElement(_) => "APPLICATION-RECORD-ELEMENT",
            Self::DataTypeMap(_) => "DATA-TYPE-MAP",
            Self::SwDataDefProps(_) => "SW-DATA-DEF-PROPS",
            Self::SwBitRepresentation(_) => "SW-BIT-REPRESENTATION",
            Self::SwTextProps(_) => "SW-TEXT-PROPS",
            Self::SwPointerTargetProps(_) => "SW-POINTER-TARGET-PROPS",
            Self::SymbolProps(_) => "SYMBOL-PROPS",
            Self::CompuScale(_) => "COMPU-SCALE",
            Self::CompuRational(_) => "COMPU-RATIONAL-COEFFS",
            Self::DataConstraintRule(_) => "DATA-CONSTR-RULE",
            Self::InternalConstraint(_) => "INTERNAL-CONSTRS",
            Self::PhysicalConstraint(_) => "PHYS-CONSTRS",
            Self::ScaleConstraint(_) => "SCALE-CONSTR",
            Self::ValueSpecification(value) => value_tag(value),
            Self::SwValueCont(_) => "SW-VALUE-CONT",
            Self::SwAxisCont(_) => "SW-AXIS-CONT",
            Self::ValueList(_) => "SW-ARRAYSIZE",
            Self::AdminData(_) => "ADMIN-DATA",
            Self::Annotation(_) => "ANNOTATION",
            Self::DocRevision(_) => "DOC-REVISION",
            Self::Introduction(_) => "INTRODUCTION",
            Self::LongName(_) => "LONG-NAME",
            Self::Desc(_) => "DESC",
            Self::UnitDisplayName(_) => "DISPLAY-NAME",
            Self::Paragraph(_) => "P",
            Self::Verbatim(_) => "VERBATIM",
            Self::List(_) => "LIST",
        }
    }
}

/// Tag of a value specification variant.
pub(crate) fn value_tag(value: &ValueSpecification) -> &'static str {
    match value {
        ValueSpecification::Text(_) => "TEXT-VALUE-SPECIFICATION",
        ValueSpecification::Numerical(_) => "NUMERICAL-VALUE-SPECIFICATION",
        ValueSpecification::NotAvailable(_) => "NOT-AVAILABLE-VALUE-SPECIFICATION",
        ValueSpecification::Array(_) => "ARRAY-VALUE-SPECIFICATION",
        ValueSpecification::Record(_) => "RECORD-VALUE-SPECIFICATION",
        ValueSpecification::Application(_) => "APPLICATION-VALUE-SPECIFICATION",
        ValueSpecification::ConstantReference(_) => "CONSTANT-REFERENCE",
    }
}

macro_rules! node_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<&'a $variant> for Node<'a> {
                fn from(value: &'a $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

node_from!(
    Element,
    ApplicationArrayDataType,
    ApplicationPrimitiveDataType,
    ApplicationRecordDataType,
    CompuMethod,
    ConstantSpecification,
    DataConstraint,
    DataTypeMappingSet,
    ImplementationDataType,
    PhysicalDimension,
    SwAddrMethod,
    SwBaseType,
    Unit,
    ImplementationDataTypeElement,
    ApplicationArrayElement,
    ApplicationRecordElement,
    DataTypeMap,
    SwDataDefProps,
    SwBitRepresentation,
    SwTextProps,
    SwPointerTargetProps,
    SymbolProps,
    CompuScale,
    CompuRational,
    DataConstraintRule,
    InternalConstraint,
    PhysicalConstraint,
    ScaleConstraint,
    ValueSpecification,
    SwValueCont,
    SwAxisCont,
    ValueList,
    AdminData,
    Annotation,
    DocRevision,
    List,
);

impl<'a> From<&'a DocumentationBlock> for Node<'a> {
    fn from(value: &'a DocumentationBlock) -> Self {
        Self::Introduction(value)
    }
}

impl<'a> From<&'a MultiLanguageLongName> for Node<'a> {
    fn from(value: &'a MultiLanguageLongName) -> Self {
        Self::LongName(value)
    }
}

impl<'a> From<&'a MultiLanguageOverviewParagraph> for Node<'a> {
    fn from(value: &'a MultiLanguageOverviewParagraph) -> Self {
        Self::Desc(value)
    }
}

impl<'a> From<&'a SingleLanguageUnitNames> for Node<'a> {
    fn from(value: &'a SingleLanguageUnitNames) -> Self {
        Self::UnitDisplayName(value)
    }
}

impl<'a> From<&'a MultiLanguageParagraph> for Node<'a> {
    fn from(value: &'a MultiLanguageParagraph) -> Self {
        Self::Paragraph(value)
    }
}

impl<'a> From<&'a MultiLanguageVerbatim> for Node<'a> {
    fn from(value: &'a MultiLanguageVerbatim) -> Self {
        Self::Verbatim(value)
    }
}
