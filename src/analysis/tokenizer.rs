//! Tokenizer implementations for document annotation.
//!
//! Tokenizers split a document into [`Span`]s. Every tokenizer in this module
//! is lossless: concatenating the produced spans in order gives back the input.
//!
//! # Available Tokenizers
//!
//! - [`word_boundary::WordBoundaryTokenizer`] - Splits at word boundaries, keeping separators
//!
//! # Examples
//!
//! ```
//! use glossator::analysis::tokenizer::Tokenizer;
//! use glossator::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
//!
//! let tokenizer = WordBoundaryTokenizer::new().unwrap();
//! let spans: Vec<_> = tokenizer.tokenize("Hello, world").unwrap().collect();
//! assert_eq!(spans.len(), 3);
//! assert_eq!(spans[1].text, ", ");
//! ```
//!
//! [`Span`]: crate::analysis::span::Span

use crate::analysis::span::SpanStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into spans.
///
/// The trait requires `Send + Sync` so that one annotator can be shared by
/// threads annotating different documents.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of spans.
    fn tokenize(&self, text: &str) -> Result<SpanStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word_boundary;
