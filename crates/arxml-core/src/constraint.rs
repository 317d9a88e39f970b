//! Data constraints and the interval predicate they share.
//!
//! [`Limits`] is the lower/upper limit group used by scale constraints,
//! internal and physical constraints, and computation scales. Its
//! [`check_value`](Limits::check_value) honors the interval type of each
//! side:
//!
//! | Interval type | Lower side | Upper side |
//! |---------------|------------|------------|
//! | `CLOSED` | `x >= lower` | `x <= upper` |
//! | `OPEN` | `x > lower` | `x < upper` |
//! | `INFINITE` | unbounded | unbounded |
//!
//! A side without a limit value is unbounded as well.

use crate::{
    base::{self, IsEmpty},
    documentation::MultiLanguageOverviewParagraph,
    enumeration::{IntervalType, Monotony, ScaleConstraintValidity},
    error::Result,
    identifiable::{Identifiable, referrable},
    number::NumericValue,
    reference::UnitRef,
};

// =============================================================================
// Limits
// =============================================================================

/// Lower and upper limit with their interval types.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Limits {
    lower: Option<NumericValue>,
    lower_type: IntervalType,
    upper: Option<NumericValue>,
    upper_type: IntervalType,
}

impl Limits {
    /// Creates closed limits on both sides.
    pub fn closed(lower: impl Into<NumericValue>, upper: impl Into<NumericValue>) -> Self {
        Self {
            lower: Some(lower.into()),
            lower_type: IntervalType::Closed,
            upper: Some(upper.into()),
            upper_type: IntervalType::Closed,
        }
    }

    pub fn with_lower(mut self, value: impl Into<NumericValue>, interval: IntervalType) -> Self {
        self.lower = Some(value.into());
        self.lower_type = interval;
        self
    }

    pub fn with_upper(mut self, value: impl Into<NumericValue>, interval: IntervalType) -> Self {
        self.upper = Some(value.into());
        self.upper_type = interval;
        self
    }

    pub fn lower(&self) -> Option<NumericValue> {
        self.lower
    }

    pub fn lower_type(&self) -> IntervalType {
        self.lower_type
    }

    pub fn upper(&self) -> Option<NumericValue> {
        self.upper
    }

    pub fn upper_type(&self) -> IntervalType {
        self.upper_type
    }

    /// Returns `true` if `value` lies inside the interval.
    ///
    /// `NaN` lies outside any bounded side.
    pub fn check_value(&self, value: f64) -> bool {
        let above_lower = match (self.lower, self.lower_type) {
            (None, _) | (_, IntervalType::Infinite) => true,
            (Some(lower), IntervalType::Closed) => value >= lower.as_f64(),
            (Some(lower), IntervalType::Open) => value > lower.as_f64(),
        };
        let below_upper = match (self.upper, self.upper_type) {
            (None, _) | (_, IntervalType::Infinite) => true,
            (Some(upper), IntervalType::Closed) => value <= upper.as_f64(),
            (Some(upper), IntervalType::Open) => value < upper.as_f64(),
        };
        above_lower && below_upper
    }
}

/// The interval types default to `CLOSED` and are left out of the test.
impl IsEmpty for Limits {
    fn is_empty(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }
}

/// Objects constrained by a [`Limits`] group.
pub trait ValueConstraint {
    fn limits(&self) -> &Limits;

    /// Returns `true` if `value` satisfies the limits.
    fn check_value(&self, value: f64) -> bool {
        self.limits().check_value(value)
    }
}

impl ValueConstraint for Limits {
    fn limits(&self) -> &Limits {
        self
    }
}

macro_rules! limits_builders {
    ($name:ident) => {
        impl $name {
            pub fn with_lower_limit(
                mut self,
                value: impl Into<NumericValue>,
                interval: IntervalType,
            ) -> Self {
                self.limits = self.limits.with_lower(value, interval);
                self
            }

            pub fn with_upper_limit(
                mut self,
                value: impl Into<NumericValue>,
                interval: IntervalType,
            ) -> Self {
                self.limits = self.limits.with_upper(value, interval);
                self
            }

            pub fn with_limits(mut self, limits: Limits) -> Self {
                self.limits = limits;
                self
            }
        }

        impl ValueConstraint for $name {
            fn limits(&self) -> &Limits {
                &self.limits
            }
        }
    };
}

pub(crate) use limits_builders;

// =============================================================================
// Scale Constraints
// =============================================================================

/// Validity range inside a constraint, rendered as `SCALE-CONSTR`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleConstraint {
    label: Option<String>,
    desc: Option<MultiLanguageOverviewParagraph>,
    limits: Limits,
    validity: Option<ScaleConstraintValidity>,
}

impl ScaleConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<MultiLanguageOverviewParagraph>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn with_validity(mut self, validity: ScaleConstraintValidity) -> Self {
        self.validity = Some(validity);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn desc(&self) -> Option<&MultiLanguageOverviewParagraph> {
        self.desc.as_ref()
    }

    /// Rendered as the `VALIDITY` attribute.
    pub fn validity(&self) -> Option<ScaleConstraintValidity> {
        self.validity
    }
}

limits_builders!(ScaleConstraint);

impl IsEmpty for ScaleConstraint {
    fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.desc.is_none()
            && self.limits.is_empty()
            && self.validity.is_none()
    }
}

// =============================================================================
// Internal and Physical Constraints
// =============================================================================

macro_rules! constraint_body {
    ($(#[$meta:meta])* $name:ident { $($extra:ident: $extra_ty:ty),* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            limits: Limits,
            scale_constraints: Vec<ScaleConstraint>,
            max_gradient: Option<NumericValue>,
            max_diff: Option<NumericValue>,
            monotony: Option<Monotony>,
            $($extra: Option<$extra_ty>,)*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn with_scale_constraint(mut self, scale: ScaleConstraint) -> Self {
                self.scale_constraints.push(scale);
                self
            }

            pub fn with_max_gradient(mut self, value: impl Into<NumericValue>) -> Self {
                self.max_gradient = Some(value.into());
                self
            }

            pub fn with_max_diff(mut self, value: impl Into<NumericValue>) -> Self {
                self.max_diff = Some(value.into());
                self
            }

            pub fn with_monotony(mut self, monotony: Monotony) -> Self {
                self.monotony = Some(monotony);
                self
            }

            pub fn scale_constraints(&self) -> &[ScaleConstraint] {
                &self.scale_constraints
            }

            pub fn max_gradient(&self) -> Option<NumericValue> {
                self.max_gradient
            }

            pub fn max_diff(&self) -> Option<NumericValue> {
                self.max_diff
            }

            pub fn monotony(&self) -> Option<Monotony> {
                self.monotony
            }
        }

        limits_builders!($name);

        impl IsEmpty for $name {
            fn is_empty(&self) -> bool {
                self.limits.is_empty()
                    && self.scale_constraints.is_empty()
                    && self.max_gradient.is_none()
                    && self.max_diff.is_none()
                    && self.monotony.is_none()
                    $(&& self.$extra.is_none())*
            }
        }
    };
}

constraint_body! {
    /// Constraint on internal values, rendered as `INTERNAL-CONSTRS`.
    InternalConstraint {}
}

constraint_body! {
    /// Constraint on physical values, rendered as `PHYS-CONSTRS`.
    PhysicalConstraint { unit_ref: UnitRef }
}

impl PhysicalConstraint {
    pub fn with_unit_ref(mut self, unit_ref: UnitRef) -> Self {
        self.unit_ref = Some(unit_ref);
        self
    }

    pub fn unit_ref(&self) -> Option<&UnitRef> {
        self.unit_ref.as_ref()
    }
}

// =============================================================================
// Rules and Data Constraints
// =============================================================================

/// One rule of a data constraint, rendered as `DATA-CONSTR-RULE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataConstraintRule {
    level: Option<u64>,
    physical: Option<PhysicalConstraint>,
    internal: Option<InternalConstraint>,
}

impl DataConstraintRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the constraint level.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidValue`](crate::ModelError::InvalidValue)
    /// for a negative level.
    pub fn with_level(mut self, level: i64) -> Result<Self> {
        self.level = Some(base::positive_integer("constr_level", level)?);
        Ok(self)
    }

    pub fn with_physical(mut self, physical: PhysicalConstraint) -> Self {
        self.physical = Some(physical);
        self
    }

    pub fn with_internal(mut self, internal: InternalConstraint) -> Self {
        self.internal = Some(internal);
        self
    }

    pub fn level(&self) -> Option<u64> {
        self.level
    }

    pub fn physical(&self) -> Option<&PhysicalConstraint> {
        self.physical.as_ref()
    }

    pub fn internal(&self) -> Option<&InternalConstraint> {
        self.internal.as_ref()
    }
}

impl IsEmpty for DataConstraintRule {
    fn is_empty(&self) -> bool {
        self.level.is_none() && self.physical.is_none() && self.internal.is_none()
    }
}

/// Package element holding constraint rules, rendered as `DATA-CONSTR`.
#[derive(Debug, Clone, PartialEq)]
pub struct DataConstraint {
    identifiable: Identifiable,
    rules: Vec<DataConstraintRule>,
}

impl DataConstraint {
    pub fn new(short_name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifiable: Identifiable::new(short_name)?,
            rules: Vec::new(),
        })
    }

    /// Creates a constraint with one rule limiting internal values to the
    /// closed interval `[lower, upper]`.
    pub fn internal(
        short_name: impl Into<String>,
        lower: impl Into<NumericValue>,
        upper: impl Into<NumericValue>,
    ) -> Result<Self> {
        let internal = InternalConstraint::new().with_limits(Limits::closed(lower, upper));
        Ok(Self::new(short_name)?.with_rule(DataConstraintRule::new().with_internal(internal)))
    }

    /// Creates a constraint with one rule limiting physical values to the
    /// closed interval `[lower, upper]`.
    pub fn physical(
        short_name: impl Into<String>,
        lower: impl Into<NumericValue>,
        upper: impl Into<NumericValue>,
        unit_ref: Option<UnitRef>,
    ) -> Result<Self> {
        let mut physical = PhysicalConstraint::new().with_limits(Limits::closed(lower, upper));
        if let Some(unit_ref) = unit_ref {
            physical = physical.with_unit_ref(unit_ref);
        }
        Ok(Self::new(short_name)?.with_rule(DataConstraintRule::new().with_physical(physical)))
    }

    pub fn with_rule(mut self, rule: DataConstraintRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[DataConstraintRule] {
        &self.rules
    }
}

referrable!(DataConstraint, DataConstraint);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_limits() {
        let limits = Limits::closed(0, 10);
        assert!(limits.check_value(0.0));
        assert!(limits.check_value(10.0));
        assert!(!limits.check_value(-0.5));
        assert!(!limits.check_value(10.5));
    }

    #[test]
    fn test_open_limits() {
        let limits = Limits::default()
            .with_lower(0, IntervalType::Open)
            .with_upper(1.5, IntervalType::Open);
        assert!(!limits.check_value(0.0));
        assert!(limits.check_value(0.1));
        assert!(!limits.check_value(1.5));
    }

    #[test]
    fn test_infinite_and_missing_limits() {
        let limits = Limits::default().with_lower(100, IntervalType::Infinite);
        assert!(limits.check_value(-1e9));
        assert!(Limits::default().check_value(f64::MAX));
        assert!(!Limits::closed(0, 1).check_value(f64::NAN));
    }

    #[test]
    fn test_limits_emptiness_ignores_interval_type() {
        let limits = Limits {
            lower: None,
            lower_type: IntervalType::Open,
            upper: None,
            upper_type: IntervalType::Infinite,
        };
        assert!(limits.is_empty());
        assert!(!Limits::closed(0, 1).is_empty());
    }

    #[test]
    fn test_constraint_check_value() {
        let internal = InternalConstraint::new().with_lower_limit(-40, IntervalType::Closed);
        assert!(internal.check_value(-40.0));
        assert!(!internal.check_value(-41.0));
        assert!(internal.check_value(1e6));
    }

    #[test]
    fn test_data_constraint_helpers() {
        let constraint = DataConstraint::internal("DC_Speed", 0, 255).unwrap();
        assert_eq!(constraint.short_name(), "DC_Speed");
        assert_eq!(constraint.rules().len(), 1);
        let internal = constraint.rules()[0].internal().unwrap();
        assert!(internal.check_value(255.0));
        assert!(!internal.check_value(256.0));

        let constraint = DataConstraint::physical(
            "DC_Temp",
            -40.0,
            125.0,
            Some(UnitRef::from_path("/Units/degC")),
        )
        .unwrap();
        let physical = constraint.rules()[0].physical().unwrap();
        assert_eq!(physical.unit_ref().map(|r| r.to_string()).as_deref(), Some("/Units/degC"));
    }

    #[test]
    fn test_emptiness() {
        assert!(InternalConstraint::new().is_empty());
        assert!(!PhysicalConstraint::new().with_unit_ref(UnitRef::from_path("/U")).is_empty());
        assert!(ScaleConstraint::new().is_empty());
        assert!(DataConstraintRule::new().is_empty());
        assert!(DataConstraintRule::new().with_level(-1).is_err());
    }

    mod proptest_tests {
        use proptest::prelude::*;

        use super::*;

        fn check_closed_interval_membership(
            lower: f64,
            upper: f64,
            value: f64,
        ) -> std::result::Result<(), TestCaseError> {
            let limits = Limits::closed(lower, upper);
            let expected = value >= lower && value <= upper;
            prop_assert_eq!(limits.check_value(value), expected);
            Ok(())
        }

        fn check_open_is_subset_of_closed(
            lower: f64,
            upper: f64,
            value: f64,
        ) -> std::result::Result<(), TestCaseError> {
            let closed = Limits::closed(lower, upper);
            let open = Limits::default()
                .with_lower(lower, IntervalType::Open)
                .with_upper(upper, IntervalType::Open);
            if open.check_value(value) {
                prop_assert!(closed.check_value(value));
            }
            Ok(())
        }

        proptest! {
            #[test]
            fn closed_interval_membership(
                lower in -1e6f64..1e6,
                upper in -1e6f64..1e6,
                value in -2e6f64..2e6,
            ) {
                check_closed_interval_membership(lower, upper, value)?;
            }

            #[test]
            fn open_is_subset_of_closed(
                lower in -1e6f64..1e6,
                upper in -1e6f64..1e6,
                value in -2e6f64..2e6,
            ) {
                check_open_is_subset_of_closed(lower, upper, value)?;
            }
        }
    }
}
