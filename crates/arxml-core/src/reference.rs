//! Path references restricted by destination kind.
//!
//! A reference is a path string plus a [`DestinationKind`]. Each concrete
//! reference type fixes the set of kinds it may point to; constructing one
//! with any other kind fails immediately. References do not check whether
//! the path resolves. See [`Document::resolve`](crate::document::Document::resolve)
//! for that.
//!
//! # Example
//!
//! ```
//! use arxml_core::{enumeration::DestinationKind, reference::{CompuMethodRef, Reference}};
//!
//! let reference = CompuMethodRef::from_path("/Pkg/CM");
//! assert_eq!(reference.destination(), DestinationKind::CompuMethod);
//! assert_eq!(reference.to_string(), "/Pkg/CM");
//!
//! assert!(CompuMethodRef::new("/Pkg/U", DestinationKind::Unit).is_err());
//! ```

use std::fmt;

use crate::{
    enumeration::DestinationKind,
    error::{ModelError, Result},
};

/// Common interface of all reference types.
pub trait Reference: fmt::Display + Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Destination kinds this reference type may point to.
    const ACCEPTED: &'static [DestinationKind];

    /// Creates a reference after checking the destination kind.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidDestination`] if `destination` is not in
    /// [`ACCEPTED`](Self::ACCEPTED).
    fn from_parts(path: String, destination: DestinationKind) -> Result<Self>;

    /// The referenced path.
    fn path(&self) -> &str;

    /// The destination kind, rendered as the `DEST` attribute.
    fn destination(&self) -> DestinationKind;

    /// Returns `true` if this reference type may point to `destination`.
    fn accepts(destination: DestinationKind) -> bool {
        Self::ACCEPTED.contains(&destination)
    }
}

macro_rules! reference_type {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident, accepts = [$($kind:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            path: String,
            destination: DestinationKind,
        }

        impl $name {
            /// Creates a reference with the default destination kind.
            pub fn from_path(path: impl Into<String>) -> Self {
                Self {
                    path: path.into(),
                    destination: DestinationKind::$default,
                }
            }

            /// Creates a reference with an explicit destination kind.
            ///
            /// # Errors
            ///
            /// Returns [`ModelError::InvalidDestination`] if the kind is not
            /// accepted by this reference type.
            pub fn new(path: impl Into<String>, destination: DestinationKind) -> Result<Self> {
                <Self as Reference>::from_parts(path.into(), destination)
            }
        }

        impl Reference for $name {
            const NAME: &'static str = stringify!($name);
            const ACCEPTED: &'static [DestinationKind] = &[$(DestinationKind::$kind),+];

            fn from_parts(path: String, destination: DestinationKind) -> Result<Self> {
                if !Self::accepts(destination) {
                    return Err(ModelError::InvalidDestination {
                        reference: Self::NAME,
                        destination,
                    });
                }
                Ok(Self { path, destination })
            }

            fn path(&self) -> &str {
                &self.path
            }

            fn destination(&self) -> DestinationKind {
                self.destination
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.path)
            }
        }
    };
}

reference_type! {
    /// Reference to a computation method.
    CompuMethodRef, default = CompuMethod, accepts = [CompuMethod]
}

reference_type! {
    /// Reference to a data constraint.
    DataConstraintRef, default = DataConstraint, accepts = [DataConstraint]
}

reference_type! {
    /// Reference to a unit.
    UnitRef, default = Unit, accepts = [Unit]
}

reference_type! {
    /// Reference to a physical dimension.
    PhysicalDimensionRef, default = PhysicalDimension, accepts = [PhysicalDimension]
}

reference_type! {
    /// Reference to a base type.
    SwBaseTypeRef, default = SwBaseType, accepts = [SwBaseType]
}

reference_type! {
    /// Reference to an addressing method.
    SwAddrMethodRef, default = SwAddrMethod, accepts = [SwAddrMethod]
}

reference_type! {
    /// Reference to a record layout.
    SwRecordLayoutRef, default = SwRecordLayout, accepts = [SwRecordLayout]
}

reference_type! {
    /// Reference to an implementation data type.
    ImplementationDataTypeRef, default = ImplementationDataType, accepts = [ImplementationDataType]
}

reference_type! {
    /// Reference to the signature of a function pointer target.
    FunctionPtrSignatureRef, default = BswModuleEntry, accepts = [BswModuleEntry]
}

reference_type! {
    /// Reference to the data type indexing an application array.
    IndexDataTypeRef, default = ApplicationPrimitiveDataType, accepts = [ApplicationPrimitiveDataType]
}

reference_type! {
    /// Reference to any application data type.
    ApplicationDataTypeRef,
    default = ApplicationPrimitiveDataType,
    accepts = [
        ApplicationPrimitiveDataType,
        ApplicationArrayDataType,
        ApplicationRecordDataType,
    ]
}

reference_type! {
    /// Reference to any data type, application or implementation.
    AutosarDataTypeRef,
    default = ImplementationDataType,
    accepts = [
        ImplementationDataType,
        ApplicationPrimitiveDataType,
        ApplicationArrayDataType,
        ApplicationRecordDataType,
    ]
}

reference_type! {
    /// Reference to a constant specification.
    ConstantRef, default = ConstantSpecification, accepts = [ConstantSpecification]
}
