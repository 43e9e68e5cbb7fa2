//! Span types produced by tokenizers.
//!
//! A [`Span`] is a substring of the input document. Spans are transient: they
//! are created and consumed within a single annotation call and carry no
//! identity beyond their position in the sequence.
//!
//! # Examples
//!
//! ```
//! use glossator::analysis::span::Span;
//!
//! let span = Span::with_offsets("world", 1, 6, 11);
//! assert_eq!(span.text, "world");
//! assert_eq!(span.start_offset, 6);
//! assert_eq!(span.end_offset, 11);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single tokenizer-produced substring of the input text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// The text content of the span
    pub text: String,

    /// The position of the span in the span sequence (0-based)
    pub position: usize,

    /// The byte offset where this span starts in the original text
    pub start_offset: usize,

    /// The byte offset where this span ends in the original text
    pub end_offset: usize,
}

impl Span {
    /// Create a new span with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Span {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Borrow the span text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A span stream is the ordered output of a tokenizer.
pub type SpanStream = Box<dyn Iterator<Item = Span>>;

/// Rebuild the text a span sequence was produced from.
pub fn concat_spans<'a, I>(spans: I) -> String
where
    I: IntoIterator<Item = &'a Span>,
{
    spans.into_iter().map(Span::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_display() {
        let span = Span::with_offsets(", ", 1, 5, 7);
        assert_eq!(format!("{span}"), ", ");
        assert_eq!(span.as_str(), ", ");
    }

    #[test]
    fn test_concat_spans() {
        let spans = vec![
            Span::with_offsets("hello", 0, 0, 5),
            Span::with_offsets(", ", 1, 5, 7),
            Span::with_offsets("world", 2, 7, 12),
        ];
        assert_eq!(concat_spans(&spans), "hello, world");
    }
}
