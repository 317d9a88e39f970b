//! Constant specifications.

use crate::{
    error::Result,
    identifiable::{Identifiable, referrable},
    value::{RawValue, ValueSpecification},
};

/// Named constant value, rendered as `CONSTANT-SPECIFICATION`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantSpecification {
    identifiable: Identifiable,
    value: Option<ValueSpecification>,
}

impl ConstantSpecification {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            value: None,
        })
    }

    /// Creates a constant whose value is built from plain data with
    /// [`ValueSpecification::make_value`].
    ///
    /// # Errors
    ///
    /// Returns the short-name error or any error of
    /// [`ValueSpecification::make_value`].
    pub fn from_raw(short_name: impl Into<String>, raw: impl Into<RawValue>) -> Result<Self> {
        let value = ValueSpecification::make_value(raw)?;
        Ok(Self::new(short_name)?.with_value(value))
    }

    pub fn with_value(mut self, value: impl Into<ValueSpecification>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Rendered as `VALUE-SPEC`.
    pub fn value(&self) -> Option<&ValueSpecification> {
        self.value.as_ref()
    }
}

referrable!(ConstantSpecification, ConstantSpecification);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ModelError, value::TextValue};

    #[test]
    fn test_from_raw() {
        let constant =
            ConstantSpecification::from_raw("C_Limits", RawValue::list(["record", "lo", "hi"]))
                .unwrap();
        assert_eq!(constant.short_name(), "C_Limits");
        assert!(matches!(constant.value(), Some(ValueSpecification::Record(_))));
    }

    #[test]
    fn test_from_raw_propagates_builder_errors() {
        assert!(matches!(
            ConstantSpecification::from_raw("C_Bad", true),
            Err(ModelError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_with_value() {
        let constant = ConstantSpecification::new("C_Name")
            .unwrap()
            .with_value(TextValue::new("engine"));
        assert_eq!(
            constant.value(),
            Some(&ValueSpecification::Text(TextValue::new("engine")))
        );
    }
}
