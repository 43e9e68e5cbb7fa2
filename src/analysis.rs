//! Text analysis module for Glossator.
//!
//! This module splits documents into spans at word boundaries. Unlike a search
//! analyzer, nothing is ever dropped: separators (whitespace, punctuation,
//! markup characters) are kept as spans of their own so that the annotator can
//! rebuild the document byte for byte.

pub mod span;
pub mod tokenizer;

// Re-export commonly used types
pub use span::*;
pub use tokenizer::*;
