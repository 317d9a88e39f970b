//! Rendering of units and physical dimensions.

use arxml_core::{
    base::IsEmpty,
    documentation::{SingleLanguageUnitNames, UnitNamePart},
    identifiable::Referrable,
    unit::{PhysicalDimension, Unit},
};

use super::{Result, Writer};

impl Writer {
    pub(crate) fn write_unit(&mut self, unit: &Unit) -> Result<()> {
        self.open_identifiable("UNIT", unit.identifiable())?;
        if let Some(names) = unit.display_name() {
            self.write_unit_names("DISPLAY-NAME", names)?;
        }
        self.add_value("FACTOR-SI-TO-UNIT", unit.factor_si_to_unit().as_ref())?;
        self.add_value("OFFSET-SI-TO-UNIT", unit.offset_si_to_unit().as_ref())?;
        self.add_reference("PHYSICAL-DIMENSION-REF", unit.physical_dimension_ref())?;
        self.leave_child()
    }

    /// Writes unit names as one line, with sub- and superscripts inline.
    pub(crate) fn write_unit_names(&mut self, tag: &'static str, names: &SingleLanguageUnitNames) -> Result<()> {
        if names.is_empty() {
            return self.add_empty(tag);
        }
        self.begin_line(tag, &[])?;
        for part in names.parts() {
            match part {
                UnitNamePart::Text(text) => self.add_inline_text(text)?,
                UnitNamePart::Subscript(text) => self.add_inline("SUB", Some(text.as_str()), &[])?,
                UnitNamePart::Superscript(text) => self.add_inline("SUP", Some(text.as_str()), &[])?,
            }
        }
        self.end_line()
    }

    pub(crate) fn write_physical_dimension(&mut self, dimension: &PhysicalDimension) -> Result<()> {
        self.open_identifiable("PHYSICAL-DIMENSION", dimension.identifiable())?;
        self.add_value("LENGTH-EXP", dimension.length_exp().as_ref())?;
        self.add_value("LUMINOUS-INTENSITY-EXP", dimension.luminous_intensity_exp().as_ref())?;
        self.add_value("MASS-EXP", dimension.mass_exp().as_ref())?;
        self.add_value("MOLAR-AMOUNT-EXP", dimension.molar_amount_exp().as_ref())?;
        self.add_value("TEMPERATURE-EXP", dimension.temperature_exp().as_ref())?;
        self.add_value("TIME-EXP", dimension.time_exp().as_ref())?;
        self.add_value("CURRENT-EXP", dimension.current_exp().as_ref())?;
        self.leave_child()
    }
}
