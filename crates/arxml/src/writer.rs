//! Text-rendering ARXML writer.
//!
//! The [`Writer`] walks a [`Document`] or a single model object and emits
//! indented XML text line by line. It keeps a stack of open tags, the current
//! indentation and a line counter; all of it is reset at the start of every
//! entry point, so one writer can be reused for any number of outputs.
//!
//! Rendering is split by model area into `impl Writer` blocks in the child
//! modules. Objects whose fields are all unset collapse into a single
//! self-closing tag.
//!
//! # Example
//!
//! ```
//! use arxml::{Writer, document::Document, unit::Unit};
//!
//! let mut document = Document::new();
//! let package = document.make_packages("/Units").unwrap();
//! document.append_element(package, Unit::new("Kelvin").unwrap()).unwrap();
//!
//! let xml = Writer::default().write_str(&document).unwrap();
//! assert!(xml.contains("<SHORT-NAME>Kelvin</SHORT-NAME>"));
//! ```

mod compu;
mod constraint;
mod data_type;
mod documentation;
pub mod format;
mod node;
mod package;
mod unit;
mod value;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{info, trace};
use quick_xml::escape::{escape, partial_escape};
use thiserror::Error;

use arxml_core::{document::Document, enumeration::XmlEnum, reference::Reference};

use crate::config::WriterConfig;
use format::ToXmlText;

pub use node::Node;

/// Errors raised while writing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Unbalanced output: {0}")]
    Unbalanced(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Attribute list of a tag, written in order.
pub(crate) type Attributes<'a> = &'a [(&'static str, String)];

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

// =============================================================================
// Output sink
// =============================================================================

/// Destination of the current run. Dropping it closes the file.
#[derive(Debug)]
enum Sink {
    Buffer(String),
    File(BufWriter<File>),
}

impl Sink {
    /// Writes `line`, preceded by a newline unless it is the first one. The
    /// output never ends with a newline.
    fn write_line(&mut self, line: &str, first: bool) -> io::Result<()> {
        match self {
            Self::Buffer(buffer) => {
                if !first {
                    buffer.push('\n');
                }
                buffer.push_str(line);
                Ok(())
            }
            Self::File(file) => {
                if !first {
                    file.write_all(b"\n")?;
                }
                file.write_all(line.as_bytes())
            }
        }
    }

    fn finish(self) -> io::Result<String> {
        match self {
            Self::Buffer(buffer) => Ok(buffer),
            Self::File(mut file) => {
                file.flush()?;
                Ok(String::new())
            }
        }
    }
}

// =============================================================================
// Writer
// =============================================================================

/// Serializer of the element model into ARXML text.
#[derive(Debug)]
pub struct Writer {
    config: WriterConfig,
    indent: usize,
    line_count: usize,
    tag_stack: Vec<&'static str>,
    pending: Option<String>,
    sink: Option<Sink>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}

impl Writer {
    /// Creates a new [`Writer`].
    ///
    /// # Arguments
    ///
    /// * `config` - Output settings such as indentation width.
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            indent: 0,
            line_count: 0,
            tag_stack: Vec::new(),
            pending: None,
            sink: None,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Number of lines produced by the most recent run.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    // -------------------------------------------------------------------------
    // Entry points
    // -------------------------------------------------------------------------

    /// Renders a whole document, including the XML declaration and the
    /// `AUTOSAR` root element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the document holds a dangling id.
    pub fn write_str(&mut self, document: &Document) -> Result<String> {
        info!(packages = document.root_packages().count(); "Writing document");
        self.run(Sink::Buffer(String::new()), |writer| writer.write_document(document))
    }

    /// Renders a whole document into a file, replacing its content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written. The
    /// file is closed on every path.
    pub fn write_file(&mut self, document: &Document, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Writing document to file");
        let file = File::create(path)?;
        self.run(Sink::File(BufWriter::new(file)), |writer| {
            writer.write_document(document)
        })
        .map(|_| ())
    }

    /// Renders a single object without header or root element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] for a package id the document does not
    /// hold.
    pub fn write_str_element<'a>(&mut self, node: impl Into<Node<'a>>) -> Result<String> {
        let node = node.into();
        self.run(Sink::Buffer(String::new()), |writer| writer.write_node(node))
    }

    /// Renders a single object into a file.
    ///
    /// # Errors
    ///
    /// See [`write_file`](Self::write_file) and
    /// [`write_str_element`](Self::write_str_element).
    pub fn write_file_element<'a>(
        &mut self,
        node: impl Into<Node<'a>>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let node = node.into();
        let path = path.as_ref();
        info!(path = path.display().to_string(), tag = node.tag(); "Writing element to file");
        let file = File::create(path)?;
        self.run(Sink::File(BufWriter::new(file)), |writer| writer.write_node(node))
            .map(|_| ())
    }

    /// Resets all state, runs `body` against `sink` and releases the sink
    /// whether or not `body` succeeded.
    fn run(
        &mut self,
        sink: Sink,
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<String> {
        self.indent = 0;
        self.line_count = 0;
        self.tag_stack.clear();
        self.pending = None;
        self.sink = Some(sink);

        let result = body(self).and_then(|()| self.check_balanced());
        let sink = self.sink.take();
        result?;

        let output = match sink {
            Some(sink) => sink.finish()?,
            None => String::new(),
        };
        info!(lines = self.line_count; "Write finished");
        Ok(output)
    }

    fn check_balanced(&self) -> Result<()> {
        if let Some(tag) = self.tag_stack.last() {
            return Err(Error::Unbalanced(format!("<{tag}> left open")));
        }
        if self.pending.is_some() {
            return Err(Error::Unbalanced("unterminated line".to_string()));
        }
        Ok(())
    }

    fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_line(XML_HEADER)?;

        let attributes = if self.config.schema_location() {
            vec![
                (
                    "xsi:schemaLocation",
                    format!("http://autosar.org/schema/r4.0 {}", document.schema_file()),
                ),
                ("xmlns", "http://autosar.org/schema/r4.0".to_string()),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance".to_string()),
            ]
        } else {
            Vec::new()
        };
        self.add_child("AUTOSAR", &attributes)?;

        let roots: Vec<_> = document.root_packages().collect();
        if !roots.is_empty() {
            self.add_child("AR-PACKAGES", &[])?;
            for package in roots {
                self.write_package(document, package)?;
            }
            self.leave_child()?;
        }

        self.leave_child()
    }

    /// Dispatches a node to its rendering function.
    pub(crate) fn write_node(&mut self, node: Node<'_>) -> Result<()> {
        trace!(tag = node.tag(); "Writing node");
        match node {
            Node::Package(document, id) => self.write_package(document, id),
            Node::Element(element) => self.write_element(element),
            Node::ApplicationArrayDataType(value) => self.write_application_array_data_type(value),
            Node::ApplicationPrimitiveDataType(value) => {
                self.write_application_primitive_data_type(value)
            }
            Node::ApplicationRecordDataType(value) => self.write_application_record_data_type(value),
            Node::CompuMethod(value) => self.write_compu_method(value),
            Node::ConstantSpecification(value) => self.write_constant_specification(value),
            Node::DataConstraint(value) => self.write_data_constraint(value),
            Node::DataTypeMappingSet(value) => self.write_data_type_mapping_set(value),
            Node::ImplementationDataType(value) => self.write_implementation_data_type(value),
            Node::PhysicalDimension(value) => self.write_physical_dimension(value),
            Node::SwAddrMethod(value) => self.write_sw_addr_method(value),
            Node::SwBaseType(value) => self.write_sw_base_type(value),
            Node::Unit(value) => self.write_unit(value),
            Node::ImplementationDataTypeElement(value) => {
                self.write_implementation_data_type_element(value)
            }
            Node::ApplicationArrayElement(value) => self.write_application_array_element(value),
            Node::ApplicationRecordElement(value) => self.write_application_record_element(value),
            Node::DataTypeMap(value) => self.write_data_type_map(value),
            Node::SwDataDefProps(value) => self.write_sw_data_def_props(value),
            Node::SwBitRepresentation(value) => self.write_sw_bit_representation(value),
            Node::SwTextProps(value) => self.write_sw_text_props(value),
            Node::SwPointerTargetProps(value) => self.write_sw_pointer_target_props(value),
            Node::SymbolProps(value) => self.write_symbol_props(value),
            Node::CompuScale(value) => self.write_compu_scale(value),
            Node::CompuRational(value) => self.write_compu_rational(value),
            Node::DataConstraintRule(value) => self.write_data_constraint_rule(value),
            Node::InternalConstraint(value) => self.write_internal_constraint(value),
            Node::PhysicalConstraint(value) => self.write_physical_constraint(value),
            Node::ScaleConstraint(value) => self.write_scale_constraint(value),
            Node::ValueSpecification(value) => self.write_value_specification(value),
            Node::SwValueCont(value) => self.write_sw_value_cont(value),
            Node::SwAxisCont(value) => self.write_sw_axis_cont(value),
            Node::ValueList(value) => self.write_value_list(value),
            Node::AdminData(value) => self.write_admin_data(value),
            Node::Annotation(value) => self.write_annotation(value),
            Node::DocRevision(value) => self.write_doc_revision(value),
            Node::Introduction(value) => self.write_documentation_block("INTRODUCTION", value),
            Node::LongName(value) => self.write_long_name("LONG-NAME", value),
            Node::Desc(value) => self.write_overview_paragraph("DESC", value),
            Node::UnitDisplayName(value) => self.write_unit_names("DISPLAY-NAME", value),
            Node::Paragraph(value) => self.write_paragraph(value),
            Node::Verbatim(value) => self.write_verbatim(value),
            Node::List(value) => self.write_list(value),
        }
    }

    // -------------------------------------------------------------------------
    // Primitives
    // -------------------------------------------------------------------------

    fn write_line(&mut self, text: &str) -> Result<()> {
        let sink = self
            .sink
            .as_mut()
            .ok_or_else(|| Error::Unbalanced("no active output".to_string()))?;
        let indent = " ".repeat(self.indent * self.config.indent_width());
        sink.write_line(&format!("{indent}{text}"), self.line_count == 0)?;
        self.line_count += 1;
        Ok(())
    }

    /// Opens `tag` on its own line and increases the indentation.
    pub(crate) fn add_child(&mut self, tag: &'static str, attributes: Attributes<'_>) -> Result<()> {
        self.write_line(&format!("<{tag}{}>", render_attributes(attributes)))?;
        self.tag_stack.push(tag);
        self.indent += 1;
        Ok(())
    }

    /// Closes the innermost open tag.
    pub(crate) fn leave_child(&mut self) -> Result<()> {
        let tag = self
            .tag_stack
            .pop()
            .ok_or_else(|| Error::Unbalanced("no open tag to close".to_string()))?;
        self.indent = self.indent.saturating_sub(1);
        self.write_line(&format!("</{tag}>"))
    }

    /// Writes a complete element on one line, or a self-closing tag when
    /// `content` is `None`.
    pub(crate) fn add_content(
        &mut self,
        tag: &'static str,
        content: Option<&str>,
        attributes: Attributes<'_>,
    ) -> Result<()> {
        let attributes = render_attributes(attributes);
        match content {
            Some(content) => {
                self.write_line(&format!("<{tag}{attributes}>{}</{tag}>", partial_escape(content)))
            }
            None => self.write_line(&format!("<{tag}{attributes}/>")),
        }
    }

    /// Writes an object with no set fields.
    pub(crate) fn add_empty(&mut self, tag: &'static str) -> Result<()> {
        self.add_content(tag, None, &[])
    }

    /// Starts a line of mixed content opened by `tag`.
    pub(crate) fn begin_line(&mut self, tag: &'static str, attributes: Attributes<'_>) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::Unbalanced(format!("<{tag}> started inside an open line")));
        }
        self.pending = Some(format!("<{tag}{}>", render_attributes(attributes)));
        self.tag_stack.push(tag);
        Ok(())
    }

    /// Appends escaped text to the current line.
    pub(crate) fn add_inline_text(&mut self, text: &str) -> Result<()> {
        self.pending_line()?.push_str(&partial_escape(text));
        Ok(())
    }

    /// Appends an inline element to the current line, self-closing when
    /// `content` is `None`.
    pub(crate) fn add_inline(
        &mut self,
        tag: &'static str,
        content: Option<&str>,
        attributes: Attributes<'_>,
    ) -> Result<()> {
        let attributes = render_attributes(attributes);
        let fragment = match content {
            Some(content) => format!("<{tag}{attributes}>{}</{tag}>", partial_escape(content)),
            None => format!("<{tag}{attributes}/>"),
        };
        self.pending_line()?.push_str(&fragment);
        Ok(())
    }

    /// Closes the tag opened by [`begin_line`](Self::begin_line) and emits
    /// the line.
    pub(crate) fn end_line(&mut self) -> Result<()> {
        let mut line = self
            .pending
            .take()
            .ok_or_else(|| Error::Unbalanced("no open line to end".to_string()))?;
        let tag = self
            .tag_stack
            .pop()
            .ok_or_else(|| Error::Unbalanced("no open tag to close".to_string()))?;
        line.push_str(&format!("</{tag}>"));
        self.write_line(&line)
    }

    fn pending_line(&mut self) -> Result<&mut String> {
        self.pending
            .as_mut()
            .ok_or_else(|| Error::Unbalanced("no open line".to_string()))
    }

    // -------------------------------------------------------------------------
    // Helpers for optional fields
    // -------------------------------------------------------------------------

    /// Writes `tag` with the text of `value` if it is set.
    pub(crate) fn add_value<T: ToXmlText + ?Sized>(
        &mut self,
        tag: &'static str,
        value: Option<&T>,
    ) -> Result<()> {
        match value {
            Some(value) => self.add_content(tag, Some(&value.to_xml_text()), &[]),
            None => Ok(()),
        }
    }

    /// Writes `tag` with the token of `value` if it is set.
    pub(crate) fn add_token<E: XmlEnum>(&mut self, tag: &'static str, value: Option<E>) -> Result<()> {
        match value {
            Some(value) => self.add_content(tag, Some(value.token()), &[]),
            None => Ok(()),
        }
    }

    /// Writes a reference as `<TAG DEST="...">path</TAG>` if it is set.
    pub(crate) fn add_reference<R: Reference>(
        &mut self,
        tag: &'static str,
        reference: Option<&R>,
    ) -> Result<()> {
        match reference {
            Some(reference) => self.add_content(
                tag,
                Some(reference.path()),
                &[("DEST", reference.destination().token().to_string())],
            ),
            None => Ok(()),
        }
    }
}

fn render_attributes(attributes: Attributes<'_>) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", escape(value.as_str())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffered() -> Writer {
        let mut writer = Writer::default();
        writer.sink = Some(Sink::Buffer(String::new()));
        writer
    }

    fn output(writer: &mut Writer) -> String {
        match writer.sink.take() {
            Some(Sink::Buffer(buffer)) => buffer,
            _ => panic!("expected a buffer sink"),
        }
    }

    #[test]
    fn test_nested_children_are_indented() {
        let mut writer = buffered();
        writer.add_child("OUTER", &[("A", "1".to_string())]).unwrap();
        writer.add_content("INNER", Some("x"), &[]).unwrap();
        writer.add_child("DEEP", &[]).unwrap();
        writer.add_empty("LEAF").unwrap();
        writer.leave_child().unwrap();
        writer.leave_child().unwrap();

        assert_eq!(
            output(&mut writer),
            "<OUTER A=\"1\">\n  <INNER>x</INNER>\n  <DEEP>\n    <LEAF/>\n  </DEEP>\n</OUTER>"
        );
        assert_eq!(writer.line_count(), 6);
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let mut writer = buffered();
        writer
            .add_content("T", Some("a < b & c"), &[("Q", "\"x\"".to_string())])
            .unwrap();
        assert_eq!(output(&mut writer), "<T Q=\"&quot;x&quot;\">a &lt; b &amp; c</T>");
    }

    #[test]
    fn test_mixed_content_line() {
        let mut writer = buffered();
        writer.begin_line("L-1", &[("L", "EN".to_string())]).unwrap();
        writer.add_inline_text("Hello ").unwrap();
        writer.add_inline("E", Some("world"), &[("TYPE", "BOLD".to_string())]).unwrap();
        writer.add_inline("BR", None, &[]).unwrap();
        writer.end_line().unwrap();

        assert_eq!(
            output(&mut writer),
            "<L-1 L=\"EN\">Hello <E TYPE=\"BOLD\">world</E><BR/></L-1>"
        );
    }

    #[test]
    fn test_unbalanced_operations_fail() {
        let mut writer = buffered();
        assert!(matches!(writer.leave_child(), Err(Error::Unbalanced(_))));
        assert!(matches!(writer.end_line(), Err(Error::Unbalanced(_))));
        assert!(matches!(writer.add_inline_text("x"), Err(Error::Unbalanced(_))));

        writer.add_child("OPEN", &[]).unwrap();
        assert!(matches!(writer.check_balanced(), Err(Error::Unbalanced(_))));
    }

    #[test]
    fn test_custom_indent_width() {
        let mut writer = Writer::new(WriterConfig::new(4, true));
        writer.sink = Some(Sink::Buffer(String::new()));
        writer.add_child("A", &[]).unwrap();
        writer.add_empty("B").unwrap();
        writer.leave_child().unwrap();
        assert_eq!(output(&mut writer), "<A>\n    <B/>\n</A>");
    }

    #[test]
    fn test_empty_document() {
        let xml = Writer::default().write_str(&Document::new()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <AUTOSAR xsi:schemaLocation=\"http://autosar.org/schema/r4.0 AUTOSAR_00051.xsd\" \
             xmlns=\"http://autosar.org/schema/r4.0\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n\
             </AUTOSAR>"
        );
    }

    #[test]
    fn test_bare_root() {
        let mut writer = Writer::new(WriterConfig::new(2, false));
        let xml = writer.write_str(&Document::new()).unwrap();
        assert!(xml.ends_with("<AUTOSAR>\n</AUTOSAR>"));
    }

    #[test]
    fn test_lines_are_separated_not_terminated() {
        let mut writer = buffered();
        writer.add_empty("ONLY").unwrap();
        assert_eq!(output(&mut writer), "<ONLY/>");

        let xml = Writer::default().write_str(&Document::new()).unwrap();
        assert!(!xml.ends_with('\n'));
        assert_eq!(xml.matches('\n').count(), 2);
    }
}
