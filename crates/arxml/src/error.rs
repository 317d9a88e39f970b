//! Error types for ARXML operations.
//!
//! This module provides the main error type [`ArxmlError`] which wraps the
//! error conditions of model construction, configuration loading and writing.

use std::io;

use thiserror::Error;

use arxml_core::ModelError;

use crate::writer;

/// The main error type for ARXML operations.
#[derive(Debug, Error)]
pub enum ArxmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Write error: {0}")]
    Write(#[from] writer::Error),
}
