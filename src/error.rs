//! Error types for Glossator.
//!
//! All fallible operations return [`GlossatorError`] through the crate-wide
//! [`Result`] alias. Errors fall into three groups:
//!
//! - configuration errors found while compiling a glossary
//!   ([`GlossatorError::DuplicateTerm`]),
//! - internal invariant violations found while generating markup
//!   ([`GlossatorError::Invariant`]),
//! - I/O and parsing failures while loading sources and message catalogs.
//!
//! # Examples
//!
//! ```
//! use glossator::error::{GlossatorError, Result};
//!
//! fn register(term: &str) -> Result<()> {
//!     Err(GlossatorError::duplicate_term(term, "en"))
//! }
//!
//! match register("AMAB") {
//!     Ok(_) => println!("registered"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Glossator operations.
#[derive(Error, Debug)]
pub enum GlossatorError {
    /// A term or variant string was declared more than once in one language.
    #[error("Conflict of definitions for term '{term}' in glossary '{language}'")]
    DuplicateTerm { term: String, language: String },

    /// A logic invariant of the compiled glossary or markup generator was broken.
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// Tokenizer errors (invalid word pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (reading sources, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A requested term or file does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for operations that may fail with GlossatorError.
pub type Result<T> = std::result::Result<T, GlossatorError>;

impl GlossatorError {
    /// Create a new duplicate term error.
    pub fn duplicate_term<T: Into<String>, L: Into<String>>(term: T, language: L) -> Self {
        GlossatorError::DuplicateTerm {
            term: term.into(),
            language: language.into(),
        }
    }

    /// Create a new invariant violation error.
    pub fn invariant<S: Into<String>>(msg: S) -> Self {
        GlossatorError::Invariant(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GlossatorError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        GlossatorError::InvalidOperation(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        GlossatorError::NotFound(msg.into())
    }

    /// The conflicting term, if this is a duplicate definition error.
    pub fn duplicate(&self) -> Option<&str> {
        match self {
            GlossatorError::DuplicateTerm { term, .. } => Some(term.as_str()),
            _ => None,
        }
    }
}
