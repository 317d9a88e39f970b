//! ARXML Core Types and Definitions
//!
//! This crate provides the typed element model for AUTOSAR ARXML documents.
//! It includes:
//!
//! - **Base behaviors**: Emptiness testing and validated assignment ([`base`] module)
//! - **Enumerations**: Closed value sets with their XML tokens ([`enumeration`] module)
//! - **Numbers**: Numeric values carrying an output format ([`number`] module)
//! - **References**: Path references restricted by destination kind ([`reference`] module)
//! - **Documentation**: Multi-language text and documentation blocks ([`documentation`] module)
//! - **Identifiable**: The shared short-name/long-name/description group ([`identifiable`] module)
//! - **Values**: Value specifications and the plain-data builder ([`value`] module)
//! - **Computation**: Computation methods and scales ([`compu`] module)
//! - **Constraints**: Data constraints with interval predicates ([`constraint`] module)
//! - **Units**: Units and physical dimensions ([`unit`] module)
//! - **Data types**: Base types, implementation and application data types ([`data_type`] module)
//! - **Constants**: Constant specifications ([`constant`] module)
//! - **Elements**: The closed set of package elements ([`element`] module)
//! - **Document**: Package tree, lookup and path derivation ([`document`] module)
//!
//! The model does not know how it is rendered. See the `arxml` crate for the
//! writer.
//!
//! # Example
//!
//! ```
//! use arxml_core::{compu::{CompuMethod, Computation}, document::Document};
//!
//! let mut document = Document::new();
//! let package = document.make_packages("/Pkg").unwrap();
//! let method = CompuMethod::new("CM")
//!     .unwrap()
//!     .with_int_to_phys(Computation::linear(2, 0));
//! let id = document.append_element(package, method).unwrap();
//! assert_eq!(document.reference(id).as_deref(), Some("/Pkg/CM"));
//! ```

pub mod base;
pub mod compu;
pub mod constant;
pub mod constraint;
pub mod data_type;
pub mod document;
pub mod documentation;
pub mod element;
pub mod enumeration;
pub mod error;
pub mod identifiable;
pub mod number;
pub mod reference;
pub mod unit;
pub mod value;

pub use error::ModelError;
