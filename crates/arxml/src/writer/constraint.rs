//! Rendering of limits and data constraints.

use arxml_core::{
    base::IsEmpty,
    constraint::{
        DataConstraint, DataConstraintRule, InternalConstraint, Limits, PhysicalConstraint,
        ScaleConstraint, ValueConstraint,
    },
    enumeration::{IntervalType, XmlEnum},
    identifiable::Referrable,
    number::NumericValue,
};

use super::{Result, Writer, format::ToXmlText};

impl Writer {
    /// Writes `LOWER-LIMIT` and `UPPER-LIMIT` with their `INTERVAL-TYPE`.
    pub(crate) fn write_limits(&mut self, limits: &Limits) -> Result<()> {
        self.write_limit("LOWER-LIMIT", limits.lower(), limits.lower_type())?;
        self.write_limit("UPPER-LIMIT", limits.upper(), limits.upper_type())
    }

    fn write_limit(
        &mut self,
        tag: &'static str,
        value: Option<NumericValue>,
        interval: IntervalType,
    ) -> Result<()> {
        match value {
            Some(value) => self.add_content(
                tag,
                Some(&value.to_xml_text()),
                &[("INTERVAL-TYPE", interval.token().to_string())],
            ),
            None => Ok(()),
        }
    }

    pub(crate) fn write_data_constraint(&mut self, constraint: &DataConstraint) -> Result<()> {
        self.open_identifiable("DATA-CONSTR", constraint.identifiable())?;
        if !constraint.rules().is_empty() {
            self.add_child("DATA-CONSTR-RULES", &[])?;
            for rule in constraint.rules() {
                self.write_data_constraint_rule(rule)?;
            }
            self.leave_child()?;
        }
        self.leave_child()
    }

    pub(crate) fn write_data_constraint_rule(&mut self, rule: &DataConstraintRule) -> Result<()> {
        if rule.is_empty() {
            return self.add_empty("DATA-CONSTR-RULE");
        }
        self.add_child("DATA-CONSTR-RULE", &[])?;
        self.add_value("CONSTR-LEVEL", rule.level().as_ref())?;
        if let Some(physical) = rule.physical() {
            self.write_physical_constraint(physical)?;
        }
        if let Some(internal) = rule.internal() {
            self.write_internal_constraint(internal)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_internal_constraint(&mut self, constraint: &InternalConstraint) -> Result<()> {
        if constraint.is_empty() {
            return self.add_empty("INTERNAL-CONSTRS");
        }
        self.add_child("INTERNAL-CONSTRS", &[])?;
        self.write_limits(constraint.limits())?;
        self.write_scale_constraints(constraint.scale_constraints())?;
        self.add_value("MAX-GRADIENT", constraint.max_gradient().as_ref())?;
        self.add_value("MAX-DIFF", constraint.max_diff().as_ref())?;
        self.add_token("MONOTONY", constraint.monotony())?;
        self.leave_child()
    }

    pub(crate) fn write_physical_constraint(&mut self, constraint: &PhysicalConstraint) -> Result<()> {
        if constraint.is_empty() {
            return self.add_empty("PHYS-CONSTRS");
        }
        self.add_child("PHYS-CONSTRS", &[])?;
        self.write_limits(constraint.limits())?;
        self.write_scale_constraints(constraint.scale_constraints())?;
        self.add_value("MAX-GRADIENT", constraint.max_gradient().as_ref())?;
        self.add_value("MAX-DIFF", constraint.max_diff().as_ref())?;
        self.add_token("MONOTONY", constraint.monotony())?;
        self.add_reference("UNIT-REF", constraint.unit_ref())?;
        self.leave_child()
    }

    fn write_scale_constraints(&mut self, scales: &[ScaleConstraint]) -> Result<()> {
        if scales.is_empty() {
            return Ok(());
        }
        self.add_child("SCALE-CONSTRS", &[])?;
        for scale in scales {
            self.write_scale_constraint(scale)?;
        }
        self.leave_child()
    }

    pub(crate) fn write_scale_constraint(&mut self, scale: &ScaleConstraint) -> Result<()> {
        let attributes: Vec<_> = scale
            .validity()
            .map(|validity| ("VALIDITY", validity.token().to_string()))
            .into_iter()
            .collect();
        if scale.is_empty() {
            return self.add_empty("SCALE-CONSTR");
        }
        if scale.label().is_none() && scale.desc().is_none() && scale.limits().is_empty() {
            return self.add_content("SCALE-CONSTR", None, &attributes);
        }
        self.add_child("SCALE-CONSTR", &attributes)?;
        self.add_value("SHORT-LABEL", scale.label())?;
        if let Some(desc) = scale.desc() {
            self.write_overview_paragraph("DESC", desc)?;
        }
        self.write_limits(scale.limits())?;
        self.leave_child()
    }
}

#[cfg(test)]
mod tests {
    use arxml_core::{
        enumeration::{Monotony, ScaleConstraintValidity},
        reference::UnitRef,
    };

    use super::*;

    #[test]
    fn test_internal_constraint() {
        let constraint = DataConstraint::internal("Range", 0, 255).unwrap();
        let xml = Writer::default().write_str_element(&constraint).unwrap();
        assert_eq!(
            xml,
            "<DATA-CONSTR>\n  <SHORT-NAME>Range</SHORT-NAME>\n  <DATA-CONSTR-RULES>\n    \
             <DATA-CONSTR-RULE>\n      <INTERNAL-CONSTRS>\n        \
             <LOWER-LIMIT INTERVAL-TYPE=\"CLOSED\">0</LOWER-LIMIT>\n        \
             <UPPER-LIMIT INTERVAL-TYPE=\"CLOSED\">255</UPPER-LIMIT>\n      \
             </INTERNAL-CONSTRS>\n    </DATA-CONSTR-RULE>\n  </DATA-CONSTR-RULES>\n</DATA-CONSTR>"
        );
    }

    #[test]
    fn test_physical_constraint_fields() {
        let physical = PhysicalConstraint::new()
            .with_lower_limit(-40.5, IntervalType::Open)
            .with_scale_constraint(
                ScaleConstraint::new()
                    .with_validity(ScaleConstraintValidity::NotValid)
                    .with_lower_limit(0, IntervalType::Closed)
                    .with_upper_limit(1, IntervalType::Closed),
            )
            .with_max_diff(3)
            .with_monotony(Monotony::Increasing)
            .with_unit_ref(UnitRef::from_path("/Units/Celsius"));
        let xml = Writer::default().write_str_element(&physical).unwrap();
        assert_eq!(
            xml,
            "<PHYS-CONSTRS>\n  <LOWER-LIMIT INTERVAL-TYPE=\"OPEN\">-40.5</LOWER-LIMIT>\n  \
             <SCALE-CONSTRS>\n    <SCALE-CONSTR VALIDITY=\"NOT-VALID\">\n      \
             <LOWER-LIMIT INTERVAL-TYPE=\"CLOSED\">0</LOWER-LIMIT>\n      \
             <UPPER-LIMIT INTERVAL-TYPE=\"CLOSED\">1</UPPER-LIMIT>\n    </SCALE-CONSTR>\n  \
             </SCALE-CONSTRS>\n  <MAX-DIFF>3</MAX-DIFF>\n  <MONOTONY>INCREASING</MONOTONY>\n  \
             <UNIT-REF DEST=\"UNIT\">/Units/Celsius</UNIT-REF>\n</PHYS-CONSTRS>"
        );
    }

    #[test]
    fn test_unset_limits_are_skipped() {
        let constraint = InternalConstraint::new().with_upper_limit(0, IntervalType::Closed);
        let xml = Writer::default().write_str_element(&constraint).unwrap();
        assert!(!xml.contains("LOWER-LIMIT"));
        assert!(xml.contains("<UPPER-LIMIT INTERVAL-TYPE=\"CLOSED\">0</UPPER-LIMIT>"));

        let constraint = InternalConstraint::new().with_lower_limit(1, IntervalType::Infinite);
        let xml = Writer::default().write_str_element(&constraint).unwrap();
        assert!(xml.contains("<LOWER-LIMIT INTERVAL-TYPE=\"INFINITE\">1</LOWER-LIMIT>"));
    }

    #[test]
    fn test_empty_rule_and_validity_only_scale() {
        let mut writer = Writer::default();
        assert_eq!(
            writer.write_str_element(&DataConstraintRule::new()).unwrap(),
            "<DATA-CONSTR-RULE/>"
        );
        let scale = ScaleConstraint::new().with_validity(ScaleConstraintValidity::Valid);
        assert_eq!(
            writer.write_str_element(&scale).unwrap(),
            "<SCALE-CONSTR VALIDITY=\"VALID\"/>"
        );
    }
}
