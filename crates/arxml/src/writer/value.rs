//! Rendering of value specifications and value containers.

use arxml_core::{
    base::IsEmpty,
    value::{SwAxisCont, SwValue, SwValueCont, SwValues, ValueList, ValueSpecification},
};

use super::{Result, Writer, format::ToXmlText, node::value_tag};

impl Writer {
    pub(crate) fn write_value_specification(&mut self, value: &ValueSpecification) -> Result<()> {
        let tag = value_tag(value);
        if value.is_empty() {
            return self.add_empty(tag);
        }

        self.add_child(tag, &[])?;
        self.add_value("SHORT-LABEL", value.label())?;
        match value {
            ValueSpecification::Text(text) => {
                self.add_content("VALUE", Some(text.value()), &[])?;
            }
            ValueSpecification::Numerical(numerical) => {
                self.add_value("VALUE", Some(&numerical.value()))?;
            }
            ValueSpecification::NotAvailable(not_available) => {
                self.add_value("DEFAULT-PATTERN", not_available.default_pattern().as_ref())?;
            }
            ValueSpecification::Array(array) => {
                self.write_value_specifications("ELEMENTS", array.elements())?;
            }
            ValueSpecification::Record(record) => {
                self.write_value_specifications("FIELDS", record.fields())?;
            }
            ValueSpecification::Application(application) => {
                self.add_value("CATEGORY", application.category())?;
                if !application.sw_axis_conts().is_empty() {
                    self.add_child("SW-AXIS-CONTS", &[])?;
                    for axis in application.sw_axis_conts() {
                        self.write_sw_axis_cont(axis)?;
                    }
                    self.leave_child()?;
                }
                if let Some(values) = application.sw_value_cont() {
                    self.write_sw_value_cont(values)?;
                }
            }
            ValueSpecification::ConstantReference(reference) => {
                self.add_reference("CONSTANT-REF", reference.constant_ref())?;
            }
        }
        self.leave_child()
    }

    fn write_value_specifications(&mut self, tag: &'static str, values: &[ValueSpecification]) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        self.add_child(tag, &[])?;
        for value in values {
            self.write_value_specification(value)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_sw_value_cont(&mut self, cont: &SwValueCont) -> Result<()> {
        if cont.is_empty() {
            return self.add_empty("SW-VALUE-CONT");
        }
        self.add_child("SW-VALUE-CONT", &[])?;
        self.add_reference("UNIT-REF", cont.unit_ref())?;
        if let Some(names) = cont.unit_display_name() {
            self.write_unit_names("UNIT-DISPLAY-NAME", names)?;
        }
        if let Some(sizes) = cont.sw_array_size() {
            self.write_value_list(sizes)?;
        }
        if let Some(values) = cont.sw_values_phys() {
            self.write_sw_values("SW-VALUES-PHYS", values)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_sw_axis_cont(&mut self, cont: &SwAxisCont) -> Result<()> {
        if cont.is_empty() {
            return self.add_empty("SW-AXIS-CONT");
        }
        self.add_child("SW-AXIS-CONT", &[])?;
        self.add_token("CATEGORY", cont.category())?;
        self.add_reference("UNIT-REF", cont.unit_ref())?;
        if let Some(names) = cont.unit_display_name() {
            self.write_unit_names("UNIT-DISPLAY-NAME", names)?;
        }
        self.add_value("SW-AXIS-INDEX", cont.sw_axis_index().as_ref())?;
        if let Some(sizes) = cont.sw_array_size() {
            self.write_value_list(sizes)?;
        }
        if let Some(values) = cont.sw_values_phys() {
            self.write_sw_values("SW-VALUES-PHYS", values)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_value_list(&mut self, list: &ValueList) -> Result<()> {
        if list.is_empty() {
            return self.add_empty("SW-ARRAYSIZE");
        }
        self.add_child("SW-ARRAYSIZE", &[])?;
        for value in list.values() {
            self.add_content("V", Some(&value.to_xml_text()), &[])?;
        }
        self.leave_child()
    }

    fn write_sw_values(&mut self, tag: &'static str, values: &SwValues) -> Result<()> {
        if values.is_empty() {
            return self.add_empty(tag);
        }
        self.add_child(tag, &[])?;
        self.write_sw_value_items(values.values())?;
        self.leave_child()
    }

    fn write_sw_value_items(&mut self, values: &[SwValue]) -> Result<()> {
        for value in values {
            match value {
                SwValue::Numeric(number) => self.add_content("V", Some(&number.to_xml_text()), &[])?,
                SwValue::Text(text) => self.add_content("VT", Some(text.as_str()), &[])?,
                SwValue::Group(group) => {
                    if group.is_empty() {
                        self.add_empty("VG")?;
                        continue;
                    }
                    self.add_child("VG", &[])?;
                    if let Some(label) = group.label() {
                        self.write_long_name("LABEL", label)?;
                    }
                    self.write_sw_value_items(group.values())?;
                    self.leave_child()?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use arxml_core::{
        enumeration::{CalprmAxisCategory, Language},
        documentation::LanguageText,
        number::NumericValue,
        documentation::SingleLanguageUnitNames,
        reference::{ConstantRef, UnitRef},
        value::{ApplicationValue, ArrayValue, ConstantReference, NotAvailableValue, RawValue, ValueGroup},
    };

    use super::*;

    fn render(value: impl Into<ValueSpecification>) -> String {
        let value = value.into();
        Writer::default().write_str_element(&value).unwrap()
    }

    #[test]
    fn test_numerical_value() {
        let value = ValueSpecification::make_value(("speed", 1.5)).unwrap();
        assert_eq!(
            render(value),
            "<NUMERICAL-VALUE-SPECIFICATION>\n  <SHORT-LABEL>speed</SHORT-LABEL>\n  \
             <VALUE>1.5</VALUE>\n</NUMERICAL-VALUE-SPECIFICATION>"
        );
    }

    #[test]
    fn test_text_value_is_escaped() {
        let value = ValueSpecification::make_value("a<b").unwrap();
        assert_eq!(
            render(value),
            "<TEXT-VALUE-SPECIFICATION>\n  <VALUE>a&lt;b</VALUE>\n</TEXT-VALUE-SPECIFICATION>"
        );
    }

    #[test]
    fn test_nested_array() {
        let value = ValueSpecification::make_value(RawValue::list([
            RawValue::from("array"),
            RawValue::from(1),
            RawValue::from("x"),
        ]))
        .unwrap();
        assert_eq!(
            render(value),
            "<ARRAY-VALUE-SPECIFICATION>\n  <ELEMENTS>\n    <NUMERICAL-VALUE-SPECIFICATION>\n      \
             <VALUE>1</VALUE>\n    </NUMERICAL-VALUE-SPECIFICATION>\n    <TEXT-VALUE-SPECIFICATION>\n      \
             <VALUE>x</VALUE>\n    </TEXT-VALUE-SPECIFICATION>\n  </ELEMENTS>\n</ARRAY-VALUE-SPECIFICATION>"
        );
    }

    #[test]
    fn test_empty_values_collapse() {
        assert_eq!(render(ArrayValue::new()), "<ARRAY-VALUE-SPECIFICATION/>");
        assert_eq!(render(NotAvailableValue::new()), "<NOT-AVAILABLE-VALUE-SPECIFICATION/>");
        assert_eq!(render(ApplicationValue::new()), "<APPLICATION-VALUE-SPECIFICATION/>");
    }

    #[test]
    fn test_not_available_pattern() {
        let value = ValueSpecification::make_value(("na", RawValue::Null, 255)).unwrap();
        let xml = render(value);
        assert!(xml.starts_with("<NOT-AVAILABLE-VALUE-SPECIFICATION>\n"));
        assert!(xml.contains("<SHORT-LABEL>na</SHORT-LABEL>"));
        assert!(xml.contains("<DEFAULT-PATTERN>255</DEFAULT-PATTERN>"));
    }

    #[test]
    fn test_constant_reference() {
        let value = ConstantReference::new(ConstantRef::from_path("/Consts/Max")).with_label("max");
        let xml = render(value);
        assert!(xml.contains("<CONSTANT-REF DEST=\"CONSTANT-SPECIFICATION\">/Consts/Max</CONSTANT-REF>"));
    }

    #[test]
    fn test_application_value() {
        let value = ApplicationValue::new()
            .with_category("CURVE")
            .with_sw_axis_cont(
                SwAxisCont::new()
                    .with_category(CalprmAxisCategory::StdAxis)
                    .with_array_size(2)
                    .with_values(SwValues::new().with_value(NumericValue::new(0)).with_value(NumericValue::new(10))),
            )
            .with_sw_value_cont(
                SwValueCont::new()
                    .with_unit_ref(UnitRef::from_path("/Units/Kph"))
                    .with_values(
                        SwValues::new().with_value(
                            ValueGroup::new()
                                .with_label(LanguageText::new(Language::En, "row"))
                                .with_value("low")
                                .with_value(NumericValue::new(2.5)),
                        ),
                    ),
            );
        let xml = render(value);
        assert!(xml.contains("<CATEGORY>CURVE</CATEGORY>"));
        assert!(xml.contains("<SW-AXIS-CONTS>\n    <SW-AXIS-CONT>\n      <CATEGORY>STD-AXIS</CATEGORY>"));
        assert!(xml.contains("<SW-ARRAYSIZE>\n        <V>2</V>\n      </SW-ARRAYSIZE>"));
        assert!(xml.contains("<UNIT-REF DEST=\"UNIT\">/Units/Kph</UNIT-REF>"));
        assert!(xml.contains("<VG>\n        <LABEL>\n          <L-4 L=\"EN\">row</L-4>\n        </LABEL>\n        <VT>low</VT>\n        <V>2.5</V>\n      </VG>"));
    }

    #[test]
    fn test_value_cont_unit_names_and_array_size() {
        let cont = SwValueCont::new()
            .with_unit_display_name(SingleLanguageUnitNames::new().with_text("m").with_superscript("3"))
            .with_sw_array_size(ValueList::from_iter([2, 3]))
            .with_values(SwValues::new().with_value(NumericValue::new(1)));
        let xml = Writer::default().write_str_element(&cont).unwrap();
        assert_eq!(
            xml,
            "<SW-VALUE-CONT>\n  <UNIT-DISPLAY-NAME>m<SUP>3</SUP></UNIT-DISPLAY-NAME>\n  <SW-ARRAYSIZE>\n    \
             <V>2</V>\n    <V>3</V>\n  </SW-ARRAYSIZE>\n  <SW-VALUES-PHYS>\n    <V>1</V>\n  \
             </SW-VALUES-PHYS>\n</SW-VALUE-CONT>"
        );
    }

    #[test]
    fn test_value_list_renders_as_array_size() {
        let mut writer = Writer::default();
        assert_eq!(writer.write_str_element(&ValueList::new()).unwrap(), "<SW-ARRAYSIZE/>");
        let list = ValueList::new().with_value(4).with_value(0.5);
        assert_eq!(
            writer.write_str_element(&list).unwrap(),
            "<SW-ARRAYSIZE>\n  <V>4</V>\n  <V>0.5</V>\n</SW-ARRAYSIZE>"
        );
    }
}
