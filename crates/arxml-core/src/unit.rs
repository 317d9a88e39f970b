//! Units and physical dimensions.

use crate::{
    documentation::SingleLanguageUnitNames,
    error::Result,
    identifiable::{Identifiable, referrable},
    number::Number,
    reference::PhysicalDimensionRef,
};

/// Unit of a physical value, rendered as `UNIT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    identifiable: Identifiable,
    display_name: Option<SingleLanguageUnitNames>,
    factor_si_to_unit: Option<Number>,
    offset_si_to_unit: Option<Number>,
    physical_dimension_ref: Option<PhysicalDimensionRef>,
}

impl Unit {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            display_name: None,
            factor_si_to_unit: None,
            offset_si_to_unit: None,
            physical_dimension_ref: None,
        })
    }

    /// Sets the display name; plain strings convert to a single text part.
    pub fn with_display_name(mut self, display_name: impl Into<SingleLanguageUnitNames>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_factor(mut self, factor: impl Into<Number>) -> Self {
        self.factor_si_to_unit = Some(factor.into());
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Number>) -> Self {
        self.offset_si_to_unit = Some(offset.into());
        self
    }

    pub fn with_physical_dimension_ref(mut self, dimension: PhysicalDimensionRef) -> Self {
        self.physical_dimension_ref = Some(dimension);
        self
    }

    pub fn display_name(&self) -> Option<&SingleLanguageUnitNames> {
        self.display_name.as_ref()
    }

    pub fn factor_si_to_unit(&self) -> Option<Number> {
        self.factor_si_to_unit
    }

    pub fn offset_si_to_unit(&self) -> Option<Number> {
        self.offset_si_to_unit
    }

    pub fn physical_dimension_ref(&self) -> Option<&PhysicalDimensionRef> {
        self.physical_dimension_ref.as_ref()
    }
}

referrable!(Unit, Unit);

/// Exponents of the SI base units, rendered as `PHYSICAL-DIMENSION`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalDimension {
    identifiable: Identifiable,
    length_exp: Option<Number>,
    luminous_intensity_exp: Option<Number>,
    mass_exp: Option<Number>,
    molar_amount_exp: Option<Number>,
    temperature_exp: Option<Number>,
    time_exp: Option<Number>,
    current_exp: Option<Number>,
}

impl PhysicalDimension {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            length_exp: None,
            luminous_intensity_exp: None,
            mass_exp: None,
            molar_amount_exp: None,
            temperature_exp: None,
            time_exp: None,
            current_exp: None,
        })
    }

    pub fn with_length_exp(mut self, exp: impl Into<Number>) -> Self {
        self.length_exp = Some(exp.into());
        self
    }

    pub fn with_luminous_intensity_exp(mut self, exp: impl Into<Number>) -> Self {
        self.luminous_intensity_exp = Some(exp.into());
        self
    }

    pub fn with_mass_exp(mut self, exp: impl Into<Number>) -> Self {
        self.mass_exp = Some(exp.into());
        self
    }

    pub fn with_molar_amount_exp(mut self, exp: impl Into<Number>) -> Self {
        self.molar_amount_exp = Some(exp.into());
        self
    }

    pub fn with_temperature_exp(mut self, exp: impl Into<Number>) -> Self {
        self.temperature_exp = Some(exp.into());
        self
    }

    pub fn with_time_exp(mut self, exp: impl Into<Number>) -> Self {
        self.time_exp = Some(exp.into());
        self
    }

    pub fn with_current_exp(mut self, exp: impl Into<Number>) -> Self {
        self.current_exp = Some(exp.into());
        self
    }

    pub fn length_exp(&self) -> Option<Number> {
        self.length_exp
    }

    pub fn luminous_intensity_exp(&self) -> Option<Number> {
        self.luminous_intensity_exp
    }

    pub fn mass_exp(&self) -> Option<Number> {
        self.mass_exp
    }

    pub fn molar_amount_exp(&self) -> Option<Number> {
        self.molar_amount_exp
    }

    pub fn temperature_exp(&self) -> Option<Number> {
        self.temperature_exp
    }

    pub fn time_exp(&self) -> Option<Number> {
        self.time_exp
    }

    pub fn current_exp(&self) -> Option<Number> {
        self.current_exp
    }
}

referrable!(PhysicalDimension, PhysicalDimension);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{enumeration::DestinationKind, identifiable::Referrable, reference::Reference};

    #[test]
    fn test_unit_keeps_dimension_reference() {
        let unit = Unit::new("KmPerHour")
            .unwrap()
            .with_display_name("km/h")
            .with_factor(3.6)
            .with_offset(0)
            .with_physical_dimension_ref(PhysicalDimensionRef::from_path("/Dims/Velocity"));

        assert_eq!(unit.display_name(), Some(&SingleLanguageUnitNames::from("km/h")));
        let dimension = unit.physical_dimension_ref().unwrap();
        assert_eq!(dimension.path(), "/Dims/Velocity");
        assert_eq!(dimension.destination(), DestinationKind::PhysicalDimension);
    }

    #[test]
    fn test_dimension_exponents() {
        let velocity = PhysicalDimension::new("Velocity")
            .unwrap()
            .with_length_exp(1)
            .with_time_exp(-1);
        assert_eq!(velocity.length_exp(), Some(Number::Integer(1)));
        assert_eq!(velocity.time_exp(), Some(Number::Integer(-1)));
        assert_eq!(velocity.mass_exp(), None);
        assert_eq!(<PhysicalDimension as Referrable>::DESTINATION, DestinationKind::PhysicalDimension);
    }
}
