//! Rendering of base types, data types, data type mappings, data definition
//! properties, addressing methods and constants.

use arxml_core::{
    base::IsEmpty,
    constant::ConstantSpecification,
    data_type::{
        ApplicationArrayDataType, ApplicationArrayElement, ApplicationPrimitiveDataType,
        ApplicationRecordDataType, ApplicationRecordElement, DataTypeMap, DataTypeMappingSet,
        ImplementationDataType, ImplementationDataTypeElement, SwAddrMethod, SwBaseType,
        SwBitRepresentation, SwDataDefProps, SwDataDefPropsConditional, SwPointerTargetProps,
        SwTextProps, SymbolProps,
    },
    identifiable::Referrable,
};

use super::{Result, Writer};

impl Writer {
    pub(crate) fn write_sw_base_type(&mut self, base_type: &SwBaseType) -> Result<()> {
        self.open_identifiable("SW-BASE-TYPE", base_type.identifiable())?;
        self.add_value("BASE-TYPE-SIZE", base_type.size().as_ref())?;
        self.add_value("MAX-BASE-TYPE-SIZE", base_type.max_size().as_ref())?;
        self.add_value("BASE-TYPE-ENCODING", base_type.encoding())?;
        self.add_value("MEM-ALIGNMENT", base_type.alignment().as_ref())?;
        self.add_token("BYTE-ORDER", base_type.byte_order())?;
        self.add_value("NATIVE-DECLARATION", base_type.native_declaration())?;
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Data definition properties
    // -------------------------------------------------------------------------

    pub(crate) fn write_sw_data_def_props(&mut self, props: &SwDataDefProps) -> Result<()> {
        if props.is_empty() {
            return self.add_empty("SW-DATA-DEF-PROPS");
        }
        self.add_child("SW-DATA-DEF-PROPS", &[])?;
        self.add_child("SW-DATA-DEF-PROPS-VARIANTS", &[])?;
        for variant in props.variants() {
            self.write_sw_data_def_props_conditional(variant)?;
        }
        self.leave_child()?;
        self.leave_child()
    }

    fn write_sw_data_def_props_conditional(&mut self, props: &SwDataDefPropsConditional) -> Result<()> {
        const TAG: &str = "SW-DATA-DEF-PROPS-CONDITIONAL";
        if props.is_empty() {
            return self.add_empty(TAG);
        }
        self.add_child(TAG, &[])?;
        self.add_token("DISPLAY-PRESENTATION", props.display_presentation())?;
        self.add_value("STEP-SIZE", props.step_size().as_ref())?;
        self.write_annotations(props.annotations())?;
        self.add_reference("SW-ADDR-METHOD-REF", props.addr_method_ref())?;
        self.add_value("SW-ALIGNMENT", props.alignment())?;
        self.add_reference("BASE-TYPE-REF", props.base_type_ref())?;
        if let Some(representation) = props.bit_representation() {
            self.write_sw_bit_representation(representation)?;
        }
        self.add_token("SW-CALIBRATION-ACCESS", props.calibration_access())?;
        if let Some(text_props) = props.text_props() {
            self.write_sw_text_props(text_props)?;
        }
        self.add_reference("COMPU-METHOD-REF", props.compu_method_ref())?;
        self.add_value("DISPLAY-FORMAT", props.display_format())?;
        self.add_reference("DATA-CONSTR-REF", props.data_constraint_ref())?;
        self.add_reference(
            "IMPLEMENTATION-DATA-TYPE-REF",
            props.implementation_data_type_ref(),
        )?;
        self.add_token("SW-IMPL-POLICY", props.impl_policy())?;
        self.add_value(
            "ADDITIONAL-NATIVE-TYPE-QUALIFIER",
            props.additional_native_type_qualifier(),
        )?;
        self.add_value("SW-INTENDED-RESOLUTION", props.intended_resolution().as_ref())?;
        self.add_value("SW-INTERPOLATION-METHOD", props.interpolation_method())?;
        if let Some(value) = props.invalid_value() {
            self.add_child("INVALID-VALUE", &[])?;
            self.write_value_specification(value)?;
            self.leave_child()?;
        }
        self.add_value("SW-IS-VIRTUAL", props.is_virtual().as_ref())?;
        if let Some(pointer) = props.pointer_target_props() {
            self.write_sw_pointer_target_props(pointer)?;
        }
        self.add_reference("SW-RECORD-LAYOUT-REF", props.record_layout_ref())?;
        self.add_reference("UNIT-REF", props.unit_ref())?;
        self.leave_child()
    }

    pub(crate) fn write_sw_bit_representation(&mut self, representation: &SwBitRepresentation) -> Result<()> {
        if representation.is_empty() {
            return self.add_empty("SW-BIT-REPRESENTATION");
        }
        self.add_child("SW-BIT-REPRESENTATION", &[])?;
        self.add_value("BIT-POSITION", representation.position().as_ref())?;
        self.add_value("NUMBER-OF-BITS", representation.num_bits().as_ref())?;
        self.leave_child()
    }

    pub(crate) fn write_sw_text_props(&mut self, props: &SwTextProps) -> Result<()> {
        if props.is_empty() {
            return self.add_empty("SW-TEXT-PROPS");
        }
        self.add_child("SW-TEXT-PROPS", &[])?;
        self.add_token("ARRAY-SIZE-SEMANTICS", props.array_size_semantics())?;
        self.add_value("SW-MAX-TEXT-SIZE", props.max_text_size().as_ref())?;
        self.add_reference("BASE-TYPE-REF", props.base_type_ref())?;
        self.add_value("SW-FILL-CHARACTER", props.fill_char().as_ref())?;
        self.leave_child()
    }

    pub(crate) fn write_sw_pointer_target_props(&mut self, props: &SwPointerTargetProps) -> Result<()> {
        if props.is_empty() {
            return self.add_empty("SW-POINTER-TARGET-PROPS");
        }
        self.add_child("SW-POINTER-TARGET-PROPS", &[])?;
        self.add_value("TARGET-CATEGORY", props.target_category())?;
        if let Some(inner) = props.sw_data_def_props() {
            self.write_sw_data_def_props(inner)?;
        }
        self.add_reference(
            "FUNCTION-POINTER-SIGNATURE-REF",
            props.function_ptr_signature_ref(),
        )?;
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Data types
    // -------------------------------------------------------------------------

    pub(crate) fn write_implementation_data_type(&mut self, data_type: &ImplementationDataType) -> Result<()> {
        self.open_identifiable("IMPLEMENTATION-DATA-TYPE", data_type.identifiable())?;
        if let Some(props) = data_type.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.add_value("DYNAMIC-ARRAY-SIZE-PROFILE", data_type.dynamic_array_size_profile())?;
        self.add_value(
            "IS-STRUCT-WITH-OPTIONAL-ELEMENT",
            data_type.is_struct_with_optional_element().as_ref(),
        )?;
        self.write_sub_elements(data_type.sub_elements())?;
        if let Some(symbol_props) = data_type.symbol_props() {
            self.write_symbol_props(symbol_props)?;
        }
        self.add_value("TYPE-EMITTER", data_type.type_emitter())?;
        self.leave_child()
    }

    fn write_sub_elements(&mut self, elements: &[ImplementationDataTypeElement]) -> Result<()> {
        if elements.is_empty() {
            return Ok(());
        }
        self.add_child("SUB-ELEMENTS", &[])?;
        for element in elements {
            self.write_implementation_data_type_element(element)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_implementation_data_type_element(
        &mut self,
        element: &ImplementationDataTypeElement,
    ) -> Result<()> {
        self.open_identifiable("IMPLEMENTATION-DATA-TYPE-ELEMENT", element.identifiable())?;
        self.add_token("ARRAY-IMPL-POLICY", element.array_impl_policy())?;
        self.add_value("ARRAY-SIZE", element.array_size().as_ref())?;
        self.add_token("ARRAY-SIZE-HANDLING", element.array_size_handling())?;
        self.add_token("ARRAY-SIZE-SEMANTICS", element.array_size_semantics())?;
        self.add_value("IS-OPTIONAL", element.is_optional().as_ref())?;
        self.write_sub_elements(element.sub_elements())?;
        if let Some(props) = element.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_symbol_props(&mut self, props: &SymbolProps) -> Result<()> {
        self.add_child("SYMBOL-PROPS", &[])?;
        self.add_content("SHORT-NAME", Some(props.short_name()), &[])?;
        self.add_value("SYMBOL", props.symbol())?;
        self.leave_child()
    }

    pub(crate) fn write_application_primitive_data_type(
        &mut self,
        data_type: &ApplicationPrimitiveDataType,
    ) -> Result<()> {
        self.open_identifiable("APPLICATION-PRIMITIVE-DATA-TYPE", data_type.identifiable())?;
        if let Some(props) = data_type.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_application_array_data_type(
        &mut self,
        data_type: &ApplicationArrayDataType,
    ) -> Result<()> {
        self.open_identifiable("APPLICATION-ARRAY-DATA-TYPE", data_type.identifiable())?;
        if let Some(props) = data_type.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.add_value("DYNAMIC-ARRAY-SIZE-PROFILE", data_type.dynamic_array_size_profile())?;
        if let Some(element) = data_type.element() {
            self.write_application_array_element(element)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_application_array_element(&mut self, element: &ApplicationArrayElement) -> Result<()> {
        self.open_identifiable("ELEMENT", element.identifiable())?;
        if let Some(props) = element.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.add_reference("TYPE-TREF", element.type_ref())?;
        self.add_token("ARRAY-SIZE-HANDLING", element.array_size_handling())?;
        self.add_token("ARRAY-SIZE-SEMANTICS", element.array_size_semantics())?;
        self.add_reference("INDEX-DATA-TYPE-REF", element.index_data_type_ref())?;
        self.add_value("MAX-NUMBER-OF-ELEMENTS", element.max_number_of_elements().as_ref())?;
        self.leave_child()
    }

    pub(crate) fn write_application_record_data_type(
        &mut self,
        data_type: &ApplicationRecordDataType,
    ) -> Result<()> {
        self.open_identifiable("APPLICATION-RECORD-DATA-TYPE", data_type.identifiable())?;
        if let Some(props) = data_type.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        if !data_type.elements().is_empty() {
            self.add_child("ELEMENTS", &[])?;
            for element in data_type.elements() {
                self.write_application_record_element(element)?;
            }
            self.leave_child()?;
        }
        self.leave_child()
    }

    pub(crate) fn write_application_record_element(&mut self, element: &ApplicationRecordElement) -> Result<()> {
        self.open_identifiable("APPLICATION-RECORD-ELEMENT", element.identifiable())?;
        if let Some(props) = element.sw_data_def_props() {
            self.write_sw_data_def_props(props)?;
        }
        self.add_reference("TYPE-TREF", element.type_ref())?;
        self.add_value("IS-OPTIONAL", element.is_optional().as_ref())?;
        self.leave_child()
    }

    // -------------------------------------------------------------------------
    // Data type mappings
    // -------------------------------------------------------------------------

    pub(crate) fn write_data_type_mapping_set(&mut self, set: &DataTypeMappingSet) -> Result<()> {
        self.open_identifiable("DATA-TYPE-MAPPING-SET", set.identifiable())?;
        if !set.data_type_maps().is_empty() {
            self.add_child("DATA-TYPE-MAPS", &[])?;
            for map in set.data_type_maps() {
                self.write_data_type_map(map)?;
            }
            self.leave_child()?;
        }
        self.leave_child()
    }

    pub(crate) fn write_data_type_map(&mut self, map: &DataTypeMap) -> Result<()> {
        self.add_child("DATA-TYPE-MAP", &[])?;
        self.add_reference("APPLICATION-DATA-TYPE-REF", map.application_data_type_ref())?;
        self.add_reference(
            "IMPLEMENTATION-DATA-TYPE-REF",
            map.implementation_data_type_ref(),
        )?;
        self.leave_child()
    }

    pub(crate) fn write_sw_addr_method(&mut self, method: &SwAddrMethod) -> Result<()> {
        self.open_identifiable("SW-ADDR-METHOD", method.identifiable())?;
        self.add_token(
            "MEMORY-ALLOCATION-KEYWORD-POLICY",
            method.memory_allocation_keyword_policy(),
        )?;
        if !method.options().is_empty() {
            self.add_child("OPTIONS", &[])?;
            for option in method.options() {
                self.add_content("OPTION", Some(option.as_str()), &[])?;
            }
            self.leave_child()?;
        }
        self.add_value("SECTION-INITIALIZATION-POLICY", method.section_initialization_policy())?;
        self.add_token("SECTION-TYPE", method.section_type())?;
        self.leave_child()
    }

    pub(crate) fn write_constant_specification(&mut self, constant: &ConstantSpecification) -> Result<()> {
        self.open_identifiable("CONSTANT-SPECIFICATION", constant.identifiable())?;
        if let Some(value) = constant.value() {
            self.add_child("VALUE-SPEC", &[])?;
            self.write_value_specification(value)?;
            self.leave_child()?;
        }
        self.leave_child()
    }
}
