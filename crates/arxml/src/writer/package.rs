//! Rendering of packages and the element dispatch.

use log::trace;

use arxml_core::{
    document::{Document, PackageId},
    element::Element,
    identifiable::Referrable,
};

use super::{Error, Result, Writer};

impl Writer {
    /// Writes an `AR-PACKAGE` with its elements and sub-packages in
    /// insertion order.
    pub(crate) fn write_package(&mut self, document: &Document, id: PackageId) -> Result<()> {
        let package = document
            .package(id)
            .ok_or_else(|| Error::UnknownNode(format!("{id:?}")))?;
        trace!(name = package.short_name(); "Writing package");

        self.open_identifiable("AR-PACKAGE", package.identifiable())?;

        let elements: Vec<_> = package.element_ids().collect();
        if !elements.is_empty() {
            self.add_child("ELEMENTS", &[])?;
            for element_id in elements {
                let element = document
                    .element(element_id)
                    .ok_or_else(|| Error::UnknownNode(format!("{element_id:?}")))?;
                self.write_element(element)?;
            }
            self.leave_child()?;
        }

        let packages: Vec<_> = package.package_ids().collect();
        if !packages.is_empty() {
            self.add_child("AR-PACKAGES", &[])?;
            for package_id in packages {
                self.write_package(document, package_id)?;
            }
            self.leave_child()?;
        }

        self.leave_child()
    }

    pub(crate) fn write_element(&mut self, element: &Element) -> Result<()> {
        trace!(name = element.short_name(); "Writing element");
        match element {
            Element::ApplicationArrayDataType(value) => self.write_application_array_data_type(value),
            Element::ApplicationPrimitiveDataType(value) => {
                self.write_application_primitive_data_type(value)
            }
            Element::ApplicationRecordDataType(value) => {
                self.write_application_record_data_type(value)
            }
            Element::CompuMethod(value) => self.write_compu_method(value),
            Element::ConstantSpecification(value) => self.write_constant_specification(value),
            Element::DataConstraint(value) => self.write_data_constraint(value),
            Element::DataTypeMappingSet(value) => self.write_data_type_mapping_set(value),
            Element::ImplementationDataType(value) => self.write_implementation_data_type(value),
            Element::PhysicalDimension(value) => self.write_physical_dimension(value),
            Element::SwAddrMethod(value) => self.write_sw_addr_method(value),
            Element::SwBaseType(value) => self.write_sw_base_type(value),
            Element::Unit(value) => self.write_unit(value),
        }
    }
}
