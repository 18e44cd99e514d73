//! Error types for Lineage operations.
//!
//! This module provides the main error type [`LineageError`] which wraps
//! every error condition of the processing pipeline.

use std::io;

use thiserror::Error;

use lineage_parser::ParseError;

/// The main error type for Lineage operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the structured
/// diagnostics, so callers can render labelled source snippets.
#[derive(Debug, Error)]
pub enum LineageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("generation anchor `{name}` is not declared")]
    Anchor { name: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LineageError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
