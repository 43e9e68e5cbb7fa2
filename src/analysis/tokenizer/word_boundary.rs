//! Word boundary tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::span::{Span, SpanStream};
use crate::error::{GlossatorError, Result};

/// Default word pattern.
pub const DEFAULT_WORD_PATTERN: &str = r"\w+";

/// A tokenizer that splits text at word boundaries.
///
/// Word runs are the matches of the word pattern; the text between two matches
/// becomes a separator span. Both are emitted in order, so the spans
/// alternate between words and separators and no byte of input is lost.
#[derive(Clone, Debug)]
pub struct WordBoundaryTokenizer {
    /// The regex pattern matching word runs
    pattern: Arc<Regex>,
}

impl WordBoundaryTokenizer {
    /// Create a new tokenizer with the default pattern `\w+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Create a new tokenizer with a custom word pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| GlossatorError::analysis(format!("Invalid word pattern: {e}")))?;

        if regex.is_match("") {
            return Err(GlossatorError::analysis(format!(
                "Word pattern must not match the empty string: {pattern}"
            )));
        }

        Ok(WordBoundaryTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Split `text` into spans without boxing the result.
    pub fn split(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                spans.push(Span::with_offsets(
                    &text[last_end..mat.start()],
                    spans.len(),
                    last_end,
                    mat.start(),
                ));
            }
            spans.push(Span::with_offsets(mat.as_str(), spans.len(), mat.start(), mat.end()));
            last_end = mat.end();
        }

        // Trailing separator
        if last_end < text.len() {
            spans.push(Span::with_offsets(&text[last_end..], spans.len(), last_end, text.len()));
        }

        spans
    }
}

impl Tokenizer for WordBoundaryTokenizer {
    fn tokenize(&self, text: &str) -> Result<SpanStream> {
        Ok(Box::new(self.split(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_boundary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::span::concat_spans;

    fn texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(Span::as_str).collect()
    }

    #[test]
    fn test_word_boundary_tokenizer() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let spans: Vec<Span> = tokenizer.tokenize("hello world").unwrap().collect();

        assert_eq!(texts(&spans), vec!["hello", " ", "world"]);
        assert_eq!(spans[1].position, 1);
        assert_eq!(spans[1].start_offset, 5);
        assert_eq!(spans[2].position, 2);
        assert_eq!(spans[2].start_offset, 6);
        assert_eq!(spans[2].end_offset, 11);
    }

    #[test]
    fn test_separators_are_grouped() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let spans = tokenizer.split("<!-- GLAAD is great --> GLAAD");

        assert_eq!(
            texts(&spans),
            vec!["<!-- ", "GLAAD", " ", "is", " ", "great", " --> ", "GLAAD"]
        );
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let spans = tokenizer.split("(AMAB).");

        assert_eq!(texts(&spans), vec!["(", "AMAB", ")."]);
        assert_eq!(spans[2].end_offset, 7);
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let spans = tokenizer.split("café, résumé");

        assert_eq!(texts(&spans), vec!["café", ", ", "résumé"]);
        assert_eq!(spans[2].start_offset, "café, ".len());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        assert!(tokenizer.split("").is_empty());
    }

    #[test]
    fn test_round_trip() {
        let tokenizer = WordBoundaryTokenizer::new().unwrap();
        let inputs = [
            "",
            " ",
            "GLAAD",
            "<p>The term <em>AMAB</em>, i.e. assigned-male-at-birth!</p>\n",
            "  trailing spaces   ",
            "日本語のテキスト と English mixed…",
            "<!-- comment -->text<!--unterminated",
        ];

        for input in inputs {
            let spans = tokenizer.split(input);
            assert_eq!(concat_spans(&spans), input);
        }
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = WordBoundaryTokenizer::with_pattern(r"[A-Za-z0-9_]+").unwrap();
        let spans = tokenizer.split("café");

        assert_eq!(texts(&spans), vec!["caf", "é"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(WordBoundaryTokenizer::with_pattern(r"(\w+").is_err());
        assert!(WordBoundaryTokenizer::with_pattern(r"\w*").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WordBoundaryTokenizer::new().unwrap().name(), "word_boundary");
    }
}
