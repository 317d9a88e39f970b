//! ARXML - Writing AUTOSAR XML documents.
//!
//! The element model lives in `arxml-core` and is re-exported here. This
//! crate adds the text-rendering [`Writer`], its [`WriterConfig`](config::WriterConfig)
//! and the crate-wide [`ArxmlError`].

pub mod config;

mod error;
pub mod writer;

pub use arxml_core::{
    base, compu, constant, constraint, data_type, document, documentation, element, enumeration,
    identifiable, number, reference, unit, value,
};

pub use arxml_core::ModelError;
pub use error::ArxmlError;
pub use writer::{Node, Writer};

use std::path::Path;

use log::info;

use config::WriterConfig;
use document::Document;

/// Builder for rendering ARXML documents.
///
/// # Examples
///
/// ```rust
/// use arxml::{ArxmlBuilder, config::WriterConfig, document::Document, unit::Unit};
///
/// let mut document = Document::new();
/// let units = document.make_packages("/Units").unwrap();
/// document.append_element(units, Unit::new("Meter").unwrap()).unwrap();
///
/// let builder = ArxmlBuilder::new(WriterConfig::new(4, true));
/// let xml = builder.render(&document).expect("Failed to render");
/// assert!(xml.contains("        <UNIT>"));
/// ```
#[derive(Debug, Default)]
pub struct ArxmlBuilder {
    config: WriterConfig,
}

impl ArxmlBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Render a document to a string.
    ///
    /// # Errors
    ///
    /// Returns [`ArxmlError::Write`] if rendering fails.
    pub fn render(&self, document: &Document) -> Result<String, ArxmlError> {
        let mut writer = Writer::new(self.config.clone());
        let xml = writer.write_str(document)?;
        info!(lines = writer.line_count(); "Document rendered");
        Ok(xml)
    }

    /// Render a document into a file.
    ///
    /// # Errors
    ///
    /// Returns [`ArxmlError::Write`] if the file cannot be written.
    pub fn render_to_file(&self, document: &Document, path: impl AsRef<Path>) -> Result<(), ArxmlError> {
        let mut writer = Writer::new(self.config.clone());
        writer.write_file(document, path)?;
        Ok(())
    }
}
