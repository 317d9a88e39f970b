//! The closed set of package elements.
//!
//! A package owns [`Element`]s and sub-packages. Every element kind is a
//! variant here, so code walking a package sees an exhaustive list.

use crate::{
    compu::CompuMethod,
    constant::ConstantSpecification,
    constraint::DataConstraint,
    data_type::{
        ApplicationArrayDataType, ApplicationPrimitiveDataType, ApplicationRecordDataType,
        DataTypeMappingSet, ImplementationDataType, SwAddrMethod, SwBaseType,
    },
    enumeration::DestinationKind,
    identifiable::{Identifiable, Referrable},
    unit::{PhysicalDimension, Unit},
};

/// A package element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    ApplicationArrayDataType(ApplicationArrayDataType),
    ApplicationPrimitiveDataType(ApplicationPrimitiveDataType),
    ApplicationRecordDataType(ApplicationRecordDataType),
    CompuMethod(CompuMethod),
    ConstantSpecification(ConstantSpecification),
    DataConstraint(DataConstraint),
    DataTypeMappingSet(DataTypeMappingSet),
    ImplementationDataType(ImplementationDataType),
    PhysicalDimension(PhysicalDimension),
    SwAddrMethod(SwAddrMethod),
    SwBaseType(SwBaseType),
    Unit(Unit),
}

macro_rules! for_each_element {
    ($element:expr, $inner:ident => $body:expr) => {
        match $element {
            Element::ApplicationArrayDataType($inner) => $body,
            Element::ApplicationPrimitiveDataType($inner) => $body,
            Element::ApplicationRecordDataType($inner) => $body,
            Element::CompuMethod($inner) => $body,
            Element::ConstantSpecification($inner) => $body,
            Element::DataConstraint($inner) => $body,
            Element::DataTypeMappingSet($inner) => $body,
            Element::ImplementationDataType($inner) => $body,
            Element::PhysicalDimension($inner) => $body,
            Element::SwAddrMethod($inner) => $body,
            Element::SwBaseType($inner) => $body,
            Element::Unit($inner) => $body,
        }
    };
}

impl Element {
    pub fn identifiable(&self) -> &Identifiable {
        for_each_element!(self, inner => inner.identifiable())
    }

    pub fn identifiable_mut(&mut self) -> &mut Identifiable {
        for_each_element!(self, inner => inner.identifiable_mut())
    }

    pub fn short_name(&self) -> &str {
        self.identifiable().short_name()
    }

    /// Kind used as `DEST` when this element is referenced.
    pub fn destination_kind(&self) -> DestinationKind {
        match self {
            Self::ApplicationArrayDataType(_) => ApplicationArrayDataType::DESTINATION,
            Self::ApplicationPrimitiveDataType(_) => ApplicationPrimitiveDataType::DESTINATION,
            Self::ApplicationRecordDataType(_) => ApplicationRecordDataType::DESTINATION,
            Self::CompuMethod(_) => CompuMethod::DESTINATION,
            Self::ConstantSpecification(_) => ConstantSpecification::DESTINATION,
            Self::DataConstraint(_) => DataConstraint::DESTINATION,
            Self::DataTypeMappingSet(_) => DataTypeMappingSet::DESTINATION,
            Self::ImplementationDataType(_) => ImplementationDataType::DESTINATION,
            Self::PhysicalDimension(_) => PhysicalDimension::DESTINATION,
            Self::SwAddrMethod(_) => SwAddrMethod::DESTINATION,
            Self::SwBaseType(_) => SwBaseType::DESTINATION,
            Self::Unit(_) => Unit::DESTINATION,
        }
    }
}

macro_rules! element_from {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Element {
                fn from(element: $variant) -> Self {
                    Self::$variant(element)
                }
            }
        )+
    };
}

element_from!(
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
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::XmlEnum;

    #[test]
    fn test_element_identity() {
        let element = Element::from(Unit::new("Kelvin").unwrap());
        assert_eq!(element.short_name(), "Kelvin");
        assert_eq!(element.destination_kind(), DestinationKind::Unit);

        let element = Element::from(DataConstraint::new("DC").unwrap());
        assert_eq!(element.destination_kind(), DestinationKind::DataConstraint);

        let element = Element::from(ApplicationRecordDataType::new("Rec").unwrap());
        assert_eq!(element.destination_kind(), DestinationKind::ApplicationRecordDataType);

        let element = Element::from(DataTypeMappingSet::new("Maps").unwrap());
        assert_eq!(element.destination_kind().token(), "DATA-TYPE-MAPPING-SET");
    }

    #[test]
    fn test_identifiable_mut() {
        let mut element = Element::from(CompuMethod::new("CM").unwrap());
        element.identifiable_mut().set_category("IDENTICAL");
        assert_eq!(element.identifiable().category(), Some("IDENTICAL"));
    }
}
