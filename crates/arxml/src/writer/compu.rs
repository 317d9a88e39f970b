//! Rendering of computation methods.

use arxml_core::{
    base::IsEmpty,
    compu::{CompuConst, CompuMethod, CompuRational, CompuScale, CompuScaleContent, Computation},
    constraint::ValueConstraint,
    identifiable::Referrable,
    number::Number,
};

use super::{Result, Writer, format::ToXmlText};

impl Writer {
    pub(crate) fn write_compu_method(&mut self, method: &CompuMethod) -> Result<()> {
        self.open_identifiable("COMPU-METHOD", method.identifiable())?;
        self.add_value("DISPLAY-FORMAT", method.display_format())?;
        self.add_reference("UNIT-REF", method.unit_ref())?;
        if let Some(computation) = method.int_to_phys() {
            self.write_computation("COMPU-INTERNAL-TO-PHYS", computation)?;
        }
        if let Some(computation) = method.phys_to_int() {
            self.write_computation("COMPU-PHYS-TO-INTERNAL", computation)?;
        }
        self.leave_child()
    }

    fn write_computation(&mut self, tag: &'static str, computation: &Computation) -> Result<()> {
        if computation.is_empty() {
            return self.add_empty(tag);
        }
        self.add_child(tag, &[])?;
        if !computation.scales().is_empty() {
            self.add_child("COMPU-SCALES", &[])?;
            for scale in computation.scales() {
                self.write_compu_scale(scale)?;
            }
            self.leave_child()?;
        }
        if let Some(value) = computation.default_value() {
            self.write_compu_const("COMPU-DEFAULT-VALUE", value)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_compu_scale(&mut self, scale: &CompuScale) -> Result<()> {
        if scale.is_empty() {
            return self.add_empty("COMPU-SCALE");
        }
        self.add_child("COMPU-SCALE", &[])?;
        self.add_value("SHORT-LABEL", scale.label())?;
        self.add_value("SYMBOL", scale.symbol())?;
        if let Some(desc) = scale.desc() {
            self.write_overview_paragraph("DESC", desc)?;
        }
        self.add_value("MASK", scale.mask().as_ref())?;
        self.write_limits(scale.limits())?;
        if let Some(value) = scale.inverse_value() {
            self.write_compu_const("COMPU-INVERSE-VALUE", value)?;
        }
        match scale.content() {
            Some(CompuScaleContent::Const(value)) => self.write_compu_const("COMPU-CONST", value)?,
            Some(CompuScaleContent::Rational(rational)) => self.write_compu_rational(rational)?,
            None => {}
        }
        self.leave_child()
    }

    /// Writes a constant wrapped in `tag` as `V` or `VT`.
    fn write_compu_const(&mut self, tag: &'static str, value: &CompuConst) -> Result<()> {
        self.add_child(tag, &[])?;
        match value {
            CompuConst::Numeric(number) => self.add_content("V", Some(&number.to_xml_text()), &[])?,
            CompuConst::Text(text) => self.add_content("VT", Some(text.as_str()), &[])?,
        }
        self.leave_child()
    }

    pub(crate) fn write_compu_rational(&mut self, rational: &CompuRational) -> Result<()> {
        if rational.is_empty() {
            return self.add_empty("COMPU-RATIONAL-COEFFS");
        }
        self.add_child("COMPU-RATIONAL-COEFFS", &[])?;
        self.write_coefficients("COMPU-NUMERATOR", rational.numerator())?;
        self.write_coefficients("COMPU-DENOMINATOR", rational.denominator())?;
        self.leave_child()
    }

    fn write_coefficients(&mut self, tag: &'static str, coefficients: &[Number]) -> Result<()> {
        if coefficients.is_empty() {
            return Ok(());
        }
        self.add_child(tag, &[])?;
        for coefficient in coefficients {
            self.add_content("V", Some(&coefficient.to_xml_text()), &[])?;
        }
        self.leave_child()
    }
}

#[cfg(test)]
mod tests {
    use arxml_core::{enumeration::IntervalType, number::NumericValue, reference::UnitRef};

    use super::*;

    #[test]
    fn test_linear_method() {
        let method = CompuMethod::new("CM")
            .unwrap()
            .with_category("LINEAR")
            .with_unit_ref(UnitRef::from_path("/Units/Kph"))
            .with_int_to_phys(Computation::linear(0.5, -10));
        let xml = Writer::default().write_str_element(&method).unwrap();
        assert_eq!(
            xml,
            "<COMPU-METHOD>\n  <SHORT-NAME>CM</SHORT-NAME>\n  <CATEGORY>LINEAR</CATEGORY>\n  \
             <UNIT-REF DEST=\"UNIT\">/Units/Kph</UNIT-REF>\n  <COMPU-INTERNAL-TO-PHYS>\n    \
             <COMPU-SCALES>\n      <COMPU-SCALE>\n        <COMPU-RATIONAL-COEFFS>\n          \
             <COMPU-NUMERATOR>\n            <V>-10</V>\n            <V>0.5</V>\n          \
             </COMPU-NUMERATOR>\n          <COMPU-DENOMINATOR>\n            <V>1</V>\n          \
             </COMPU-DENOMINATOR>\n        </COMPU-RATIONAL-COEFFS>\n      </COMPU-SCALE>\n    \
             </COMPU-SCALES>\n  </COMPU-INTERNAL-TO-PHYS>\n</COMPU-METHOD>"
        );
    }

    #[test]
    fn test_internal_to_phys_precedes_phys_to_internal() {
        let method = CompuMethod::new("CM")
            .unwrap()
            .with_phys_to_int(Computation::linear(0.5, 0))
            .with_int_to_phys(Computation::linear(2, 0));
        let xml = Writer::default().write_str_element(&method).unwrap();
        let int_to_phys = xml.find("<COMPU-INTERNAL-TO-PHYS>").unwrap();
        let phys_to_int = xml.find("<COMPU-PHYS-TO-INTERNAL>").unwrap();
        assert!(int_to_phys < phys_to_int);
        assert!(xml[int_to_phys..phys_to_int].contains("<V>2</V>"));
        assert!(xml[phys_to_int..].contains("<V>0.5</V>"));
    }

    #[test]
    fn test_value_table_scale() {
        let computation = Computation::value_table([(1, "ON")])
            .with_default_value(CompuConst::Text("UNKNOWN".to_string()));
        let method = CompuMethod::new("OnOff").unwrap().with_int_to_phys(computation);
        let xml = Writer::default().write_str_element(&method).unwrap();

        assert!(xml.contains(
            "<LOWER-LIMIT INTERVAL-TYPE=\"CLOSED\">1</LOWER-LIMIT>\n        \
             <UPPER-LIMIT INTERVAL-TYPE=\"CLOSED\">1</UPPER-LIMIT>\n        \
             <COMPU-CONST>\n          <VT>ON</VT>\n        </COMPU-CONST>"
        ));
        assert!(xml.contains("<COMPU-DEFAULT-VALUE>\n      <VT>UNKNOWN</VT>\n    </COMPU-DEFAULT-VALUE>"));
    }

    #[test]
    fn test_scale_field_order() {
        let scale = CompuScale::new()
            .with_label("low")
            .with_symbol("LOW")
            .with_mask(3)
            .unwrap()
            .with_lower_limit(0, IntervalType::Closed)
            .with_upper_limit(10, IntervalType::Open)
            .with_inverse_value(CompuConst::Numeric(NumericValue::new(0)))
            .with_const(CompuConst::Numeric(NumericValue::new(5)));
        let xml = Writer::default().write_str_element(&scale).unwrap();
        let tags: Vec<&str> = xml
            .lines()
            .filter_map(|line| line.trim().strip_prefix('<'))
            .filter(|tag| !tag.starts_with('/'))
            .map(|tag| tag.split(['>', ' ']).next().unwrap_or_default())
            .collect();
        assert_eq!(
            tags,
            [
                "COMPU-SCALE",
                "SHORT-LABEL",
                "SYMBOL",
                "MASK",
                "LOWER-LIMIT",
                "UPPER-LIMIT",
                "COMPU-INVERSE-VALUE",
                "V",
                "COMPU-CONST",
                "V",
            ]
        );
    }

    #[test]
    fn test_empty_computation_collapses() {
        let method = CompuMethod::new("CM").unwrap().with_phys_to_int(Computation::new());
        let xml = Writer::default().write_str_element(&method).unwrap();
        assert!(xml.ends_with("  <COMPU-PHYS-TO-INTERNAL/>\n</COMPU-METHOD>"));
        assert_eq!(
            Writer::default().write_str_element(&CompuScale::new()).unwrap(),
            "<COMPU-SCALE/>"
        );
    }
}
