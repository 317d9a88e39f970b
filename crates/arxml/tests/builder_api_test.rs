//! Integration tests for the model and writer API
//!
//! These tests build documents through the public API and check the
//! rendered ARXML text.

use std::fs;

use arxml::{
    ArxmlBuilder, ArxmlError, ModelError, Writer,
    compu::{CompuMethod, CompuScale, Computation},
    config::WriterConfig,
    constant::ConstantSpecification,
    data_type::{ApplicationPrimitiveDataType, SwDataDefProps, SwDataDefPropsConditional},
    document::{Document, NodeId, Package},
    enumeration::DestinationKind,
    number::Number,
    reference::{ApplicationDataTypeRef, CompuMethodRef, Reference},
    unit::Unit,
    value::{RawValue, ValueSpecification},
};

fn sample_document() -> Document {
    let mut document = Document::new();
    let package = document.make_packages("/Pkg").unwrap();
    let method = CompuMethod::new("CM")
        .unwrap()
        .with_int_to_phys(Computation::linear(2, 0));
    document.append_element(package, method).unwrap();
    document
}

#[test]
fn test_render_compu_method_document() {
    let xml = Writer::default().write_str(&sample_document()).unwrap();
    let expected = r#"<?xml version="1.0" encoding="utf-8"?>
<AUTOSAR xsi:schemaLocation="http://autosar.org/schema/r4.0 AUTOSAR_00051.xsd" xmlns="http://autosar.org/schema/r4.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <AR-PACKAGES>
    <AR-PACKAGE>
      <SHORT-NAME>Pkg</SHORT-NAME>
      <ELEMENTS>
        <COMPU-METHOD>
          <SHORT-NAME>CM</SHORT-NAME>
          <COMPU-INTERNAL-TO-PHYS>
            <COMPU-SCALES>
              <COMPU-SCALE>
                <COMPU-RATIONAL-COEFFS>
                  <COMPU-NUMERATOR>
                    <V>0</V>
                    <V>2</V>
                  </COMPU-NUMERATOR>
                  <COMPU-DENOMINATOR>
                    <V>1</V>
                  </COMPU-DENOMINATOR>
                </COMPU-RATIONAL-COEFFS>
              </COMPU-SCALE>
            </COMPU-SCALES>
          </COMPU-INTERNAL-TO-PHYS>
        </COMPU-METHOD>
      </ELEMENTS>
    </AR-PACKAGE>
  </AR-PACKAGES>
</AUTOSAR>"#;
    assert_eq!(xml, expected);
    assert!(!xml.ends_with('\n'));
}

#[test]
fn test_duplicate_short_name_is_rejected() {
    let mut document = sample_document();
    let package = document.make_packages("/Pkg").unwrap();
    let result = document.append_element(package, CompuMethod::new("CM").unwrap());
    assert!(matches!(result, Err(ModelError::DuplicateName { .. })));

    let error = ArxmlError::from(result.unwrap_err());
    assert!(error.to_string().starts_with("Model error:"));
}

#[test]
fn test_reference_path_follows_move() {
    let mut document = Document::new();
    let a = document.make_packages("/A").unwrap();
    let b = document.make_packages("/B").unwrap();
    let unit = document.append_element(a, Unit::new("Kelvin").unwrap()).unwrap();

    document.move_element(unit, b).unwrap();
    assert_eq!(document.reference(unit).as_deref(), Some("/B/Kelvin"));
    assert_eq!(document.find("/B/Kelvin"), Some(NodeId::Element(unit)));

    let xml = Writer::default().write_str(&document).unwrap();
    let a_pos = xml.find("<SHORT-NAME>A</SHORT-NAME>").unwrap();
    let b_pos = xml.find("<SHORT-NAME>B</SHORT-NAME>").unwrap();
    let kelvin_pos = xml.find("<SHORT-NAME>Kelvin</SHORT-NAME>").unwrap();
    assert!(a_pos < b_pos && b_pos < kelvin_pos);
}

#[test]
fn test_reference_destination_is_restricted() {
    assert!(CompuMethodRef::new("/Pkg/CM", DestinationKind::CompuMethod).is_ok());
    assert!(matches!(
        CompuMethodRef::new("/Pkg/CM", DestinationKind::Unit),
        Err(ModelError::InvalidDestination { .. })
    ));

    let mut document = Document::new();
    let package = document.make_packages("/Types").unwrap();
    let id = document
        .append_element(package, ApplicationPrimitiveDataType::new("Speed").unwrap())
        .unwrap();
    let reference: ApplicationDataTypeRef = document.make_ref(id).unwrap();
    assert_eq!(reference.destination(), DestinationKind::ApplicationPrimitiveDataType);
    assert_eq!(document.resolve(&reference), Ok(id));
}

#[test]
fn test_make_value_shapes() {
    let value = ValueSpecification::make_value(RawValue::list([
        RawValue::from("record"),
        RawValue::from(("speed", 12)),
        RawValue::from(("name", "fast")),
    ]))
    .unwrap();
    let ValueSpecification::Record(record) = &value else {
        panic!("expected a record, got {value:?}");
    };
    assert_eq!(record.fields().len(), 2);
    assert_eq!(record.fields()[0].label(), Some("speed"));

    assert!(matches!(
        ValueSpecification::make_value(RawValue::list(["matrix"])),
        Err(ModelError::UnknownDiscriminator(_))
    ));
    assert!(matches!(
        ValueSpecification::make_value(true),
        Err(ModelError::UnsupportedValue(_))
    ));

    let value = ValueSpecification::make_value(("x", 1, 2)).unwrap();
    let ValueSpecification::Numerical(numerical) = &value else {
        panic!("expected a numerical value, got {value:?}");
    };
    assert_eq!(value.label(), Some("x"));
    assert_eq!(numerical.value().value(), Number::Integer(1));
    assert!(matches!(
        ValueSpecification::make_value(("x", RawValue::Null, "ff")),
        Err(ModelError::InvalidTuple(_))
    ));
}

#[test]
fn test_empty_objects_collapse() {
    let mut writer = Writer::default();
    let props = SwDataDefPropsConditional::new();
    assert_eq!(
        writer
            .write_str_element(&SwDataDefProps::from(props))
            .unwrap(),
        "<SW-DATA-DEF-PROPS>\n  <SW-DATA-DEF-PROPS-VARIANTS>\n    <SW-DATA-DEF-PROPS-CONDITIONAL/>\n  \
         </SW-DATA-DEF-PROPS-VARIANTS>\n</SW-DATA-DEF-PROPS>"
    );
    assert_eq!(
        writer.write_str_element(&CompuScale::new()).unwrap(),
        "<COMPU-SCALE/>"
    );
}

#[test]
fn test_writer_reuse_is_deterministic() {
    let document = sample_document();
    let mut writer = Writer::default();
    let first = writer.write_str(&document).unwrap();
    let lines = writer.line_count();

    writer
        .write_str_element(&ConstantSpecification::from_raw("C", 1).unwrap())
        .unwrap();
    let second = writer.write_str(&document).unwrap();

    assert_eq!(first, second);
    assert_eq!(writer.line_count(), lines);
    assert_eq!(lines, first.lines().count());
}

#[test]
fn test_write_file_matches_write_str() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.arxml");
    let document = sample_document();

    let mut writer = Writer::default();
    writer.write_file(&document, &path).unwrap();
    let from_file = fs::read_to_string(&path).unwrap();
    assert_eq!(from_file, writer.write_str(&document).unwrap());

    let element_path = dir.path().join("unit.arxml");
    let unit = Unit::new("Volt").unwrap();
    writer.write_file_element(&unit, &element_path).unwrap();
    assert_eq!(
        fs::read_to_string(&element_path).unwrap(),
        "<UNIT>\n  <SHORT-NAME>Volt</SHORT-NAME>\n</UNIT>"
    );
}

#[test]
fn test_write_file_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.arxml");
    let result = ArxmlBuilder::default().render_to_file(&sample_document(), &path);
    assert!(matches!(result, Err(ArxmlError::Write(_))));
}

#[test]
fn test_builder_with_config_from_toml() {
    let config = WriterConfig::from_toml_str("indent_width = 1\nschema_location = false").unwrap();
    let xml = ArxmlBuilder::new(config).render(&sample_document()).unwrap();
    assert!(xml.contains("\n<AUTOSAR>\n <AR-PACKAGES>\n  <AR-PACKAGE>\n"));
    assert!(!xml.contains("xsi:schemaLocation"));
}

#[test]
fn test_schema_version_in_root() {
    let mut document = Document::new().with_schema_version(49);
    document.append_package(Package::new("P").unwrap()).unwrap();
    let xml = ArxmlBuilder::default().render(&document).unwrap();
    assert!(xml.contains("xsi:schemaLocation=\"http://autosar.org/schema/r4.0 AUTOSAR_00049.xsd\""));
}
