//! Closed enumerations and their XML tokens.
//!
//! Every enumeration in this module maps one-to-one onto the token the AUTOSAR
//! schema mandates for it. The mapping is exposed through the [`XmlEnum`]
//! trait and is also used for [`Display`](fmt::Display) and
//! [`FromStr`](std::str::FromStr).
//!
//! # Example
//!
//! ```
//! use arxml_core::enumeration::{IntervalType, XmlEnum};
//!
//! assert_eq!(IntervalType::Open.token(), "OPEN");
//! assert_eq!("INFINITE".parse::<IntervalType>().unwrap(), IntervalType::Infinite);
//! ```

use std::{fmt, str::FromStr};

use crate::error::ModelError;

/// Conversion between an enumeration value and its schema token.
pub trait XmlEnum: Sized + Copy + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// All tokens accepted by [`from_token`](Self::from_token), in declaration order.
    const TOKENS: &'static [&'static str];

    /// Returns the XML token for this value.
    fn token(self) -> &'static str;

    /// Looks up the value for an XML token. Matching is exact.
    fn from_token(token: &str) -> Option<Self>;
}

/// Declares a closed enumeration together with its [`XmlEnum`] mapping.
macro_rules! xml_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl XmlEnum for $name {
            const NAME: &'static str = stringify!($name);
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn token(self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }

            fn from_token(token: &str) -> Option<Self> {
                match token {
                    $( $token => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.token())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_token(s).ok_or_else(|| ModelError::InvalidToken {
                    enumeration: Self::NAME,
                    token: s.to_string(),
                })
            }
        }
    };
}

xml_enum! {
    /// Interval type of a lower or upper limit.
    IntervalType {
        /// The limit value belongs to the interval.
        Closed => "CLOSED",
        /// The limit value is excluded from the interval.
        Open => "OPEN",
        /// The interval is unbounded on this side.
        Infinite => "INFINITE",
    }
}

impl Default for IntervalType {
    fn default() -> Self {
        Self::Closed
    }
}

xml_enum! {
    /// Byte order of a base type.
    ByteOrder {
        MostSignificantByteFirst => "MOST-SIGNIFICANT-BYTE-FIRST",
        MostSignificantByteLast => "MOST-SIGNIFICANT-BYTE-LAST",
        Opaque => "OPAQUE",
    }
}

xml_enum! {
    /// Access of measurement and calibration tools to a data element.
    SwCalibrationAccess {
        NotAccessible => "NOT-ACCESSIBLE",
        ReadOnly => "READ-ONLY",
        ReadWrite => "READ-WRITE",
    }
}

xml_enum! {
    /// Implementation policy of a data element.
    SwImplPolicy {
        Const => "CONST",
        Fixed => "FIXED",
        MeasurementPoint => "MEASUREMENT-POINT",
        Queued => "QUEUED",
        Standard => "STANDARD",
    }
}

xml_enum! {
    /// Preferred presentation of a value in tools.
    DisplayPresentation {
        Continuous => "PRESENTATION-CONTINUOUS",
        Discrete => "PRESENTATION-DISCRETE",
    }
}

xml_enum! {
    /// Monotony of a constrained value.
    Monotony {
        Decreasing => "DECREASING",
        Increasing => "INCREASING",
        Monotonous => "MONOTONOUS",
        NoMonotony => "NO-MONOTONY",
        StrictlyDecreasing => "STRICTLY-DECREASING",
        StrictlyIncreasing => "STRICTLY-INCREASING",
        StrictMonotonous => "STRICT-MONOTONOUS",
    }
}

xml_enum! {
    /// Validity of the values inside a scale constraint.
    ScaleConstraintValidity {
        NotAvailable => "NOT-AVAILABLE",
        NotDefined => "NOT-DEFINED",
        NotValid => "NOT-VALID",
        Valid => "VALID",
    }
}

xml_enum! {
    /// Language of a language-specific text.
    Language {
        ForAll => "FOR-ALL",
        Cs => "CS",
        Da => "DA",
        De => "DE",
        El => "EL",
        En => "EN",
        Es => "ES",
        Fi => "FI",
        Fr => "FR",
        Hu => "HU",
        It => "IT",
        Ja => "JA",
        Ko => "KO",
        Nl => "NL",
        No => "NO",
        Pl => "PL",
        Pt => "PT",
        Ru => "RU",
        Sv => "SV",
        Tr => "TR",
        Zh => "ZH",
    }
}

xml_enum! {
    /// Emphasis style of an `E` span.
    EmphasisType {
        Bold => "BOLD",
        Italic => "ITALIC",
        Plain => "PLAIN",
    }
}

xml_enum! {
    /// Font of an `E` span.
    EmphasisFont {
        Default => "DEFAULT",
        Mono => "MONO",
    }
}

xml_enum! {
    /// Numbering of a documentation list.
    ListKind {
        Number => "NUMBER",
        Unnumber => "UNNUMBER",
    }
}

xml_enum! {
    /// Whether an array has a fixed or a variable size.
    ArraySizeSemantics {
        FixedSize => "FIXED-SIZE",
        VariableSize => "VARIABLE-SIZE",
    }
}

xml_enum! {
    /// Whether an array payload is stored inline or behind a pointer.
    ArrayImplPolicy {
        PayloadAsArray => "PAYLOAD-AS-ARRAY",
        PayloadAsPointerToArray => "PAYLOAD-AS-POINTER-TO-ARRAY",
    }
}

xml_enum! {
    /// How the size of nested variable-size arrays is handled.
    ArraySizeHandling {
        AllIndicesDifferentArraySize => "ALL-INDICES-DIFFERENT-ARRAY-SIZE",
        AllIndicesSameArraySize => "ALL-INDICES-SAME-ARRAY-SIZE",
        InheritedFromArrayElementTypeSize => "INHERITED-FROM-ARRAY-ELEMENT-TYPE-SIZE",
    }
}

xml_enum! {
    /// Category of a calibration parameter axis.
    CalprmAxisCategory {
        ComAxis => "COM-AXIS",
        FixAxis => "FIX-AXIS",
        ResAxis => "RES-AXIS",
        StdAxis => "STD-AXIS",
    }
}

xml_enum! {
    /// Naming policy of memory allocation keywords for an addressing method.
    MemoryAllocationKeywordPolicy {
        AddrMethodShortName => "ADDR-METHOD-SHORT-NAME",
        AddrMethodShortNameAndAlignment => "ADDR-METHOD-SHORT-NAME-AND-ALIGNMENT",
    }
}

xml_enum! {
    /// Kind of memory section of an addressing method.
    SectionType {
        CalibrationVariables => "CALIBRATION-VARIABLES",
        Calprm => "CALPRM",
        Code => "CODE",
        ConfigData => "CONFIG-DATA",
        Const => "CONST",
        ExcludeFromFlash => "EXCLUDE-FROM-FLASH",
        UserDefined => "USER-DEFINED",
        Var => "VAR",
    }
}

xml_enum! {
    /// Identifiable sub-types a reference may point to.
    ///
    /// Rendered as the `DEST` attribute of reference elements.
    DestinationKind {
        ApplicationArrayDataType => "APPLICATION-ARRAY-DATA-TYPE",
        ApplicationPrimitiveDataType => "APPLICATION-PRIMITIVE-DATA-TYPE",
        ApplicationRecordDataType => "APPLICATION-RECORD-DATA-TYPE",
        ArPackage => "AR-PACKAGE",
        BswModuleEntry => "BSW-MODULE-ENTRY",
        CompuMethod => "COMPU-METHOD",
        ConstantSpecification => "CONSTANT-SPECIFICATION",
        DataConstraint => "DATA-CONSTR",
        DataTypeMappingSet => "DATA-TYPE-MAPPING-SET",
        ImplementationDataType => "IMPLEMENTATION-DATA-TYPE",
        PhysicalDimension => "PHYSICAL-DIMENSION",
        SwAddrMethod => "SW-ADDR-METHOD",
        SwBaseType => "SW-BASE-TYPE",
        SwRecordLayout => "SW-RECORD-LAYOUT",
        Unit => "UNIT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for token in Monotony::TOKENS {
            let value = Monotony::from_token(token).expect("declared token must parse");
            assert_eq!(value.token(), *token);
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("READ-ONLY".parse::<SwCalibrationAccess>(), Ok(SwCalibrationAccess::ReadOnly));

        let err = "read-only".parse::<SwCalibrationAccess>().unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidToken {
                enumeration: "SwCalibrationAccess",
                token: "read-only".to_string(),
            }
        );
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(DestinationKind::DataConstraint.to_string(), "DATA-CONSTR");
        assert_eq!(format!("{}", ByteOrder::MostSignificantByteLast), "MOST-SIGNIFICANT-BYTE-LAST");
    }

    #[test]
    fn test_interval_type_default() {
        assert_eq!(IntervalType::default(), IntervalType::Closed);
    }
}
