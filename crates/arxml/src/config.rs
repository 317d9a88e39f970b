//! Configuration types for ARXML writing.
//!
//! [`WriterConfig`] implements [`serde::Deserialize`] so it can be loaded
//! from TOML. Every field is optional in the TOML input and falls back to its
//! default.
//!
//! # Example
//!
//! ```
//! # use arxml::config::WriterConfig;
//! let config = WriterConfig::from_toml_str("indent_width = 4").unwrap();
//! assert_eq!(config.indent_width(), 4);
//! assert!(config.schema_location());
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::ArxmlError;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Output settings of the [`Writer`](crate::Writer).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Spaces per nesting level.
    indent_width: usize,

    /// Whether the root element carries the namespace and schema location
    /// attributes. When `false` the root is a bare `<AUTOSAR>`.
    schema_location: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            schema_location: true,
        }
    }
}

impl WriterConfig {
    /// Creates a new [`WriterConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_width` - Spaces per nesting level.
    /// * `schema_location` - Whether to emit namespace and schema attributes on the root.
    pub fn new(indent_width: usize, schema_location: bool) -> Self {
        Self {
            indent_width,
            schema_location,
        }
    }

    /// Returns the number of spaces per nesting level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns whether the root element carries schema attributes.
    pub fn schema_location(&self) -> bool {
        self.schema_location
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ArxmlError::Config`] if the text is not valid TOML or has
    /// fields of the wrong type.
    pub fn from_toml_str(content: &str) -> Result<Self, ArxmlError> {
        toml::from_str(content).map_err(|err| ArxmlError::Config(err.to_string()))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ArxmlError::Io`] if the file cannot be read and
    /// [`ArxmlError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArxmlError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading writer configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
