//! The document annotator.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::span::Span;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::word_boundary::{DEFAULT_WORD_PATTERN, WordBoundaryTokenizer};
use crate::annotate::comment::CommentState;
use crate::annotate::markup;
use crate::error::Result;
use crate::glossary::dictionary::Glossary;
use crate::i18n::Localizer;

/// Configuration for the annotator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotatorConfig {
    /// Regex matching word runs; everything between two matches is a separator.
    pub word_pattern: String,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
        }
    }
}

/// Outcome of annotating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationReport {
    /// The annotated document
    pub output: String,
    /// Number of spans replaced with gloss markup
    pub annotated: usize,
    /// Number of matching spans left alone because they sit inside a comment
    pub skipped_in_comment: usize,
}

/// Rewrites glossary terms in documents into gloss markup.
///
/// Matching is exact and case-sensitive: a span is annotated only if its text
/// is literally a term or variant of the glossary.
pub struct Annotator {
    localizer: Arc<dyn Localizer>,
    tokenizer: Arc<dyn Tokenizer>,
}

impl Annotator {
    /// Create an annotator with the default configuration.
    pub fn new(localizer: Arc<dyn Localizer>) -> Result<Self> {
        Self::with_config(localizer, &AnnotatorConfig::default())
    }

    /// Create an annotator from a configuration.
    pub fn with_config(localizer: Arc<dyn Localizer>, config: &AnnotatorConfig) -> Result<Self> {
        let tokenizer = WordBoundaryTokenizer::with_pattern(&config.word_pattern)?;
        Ok(Self::with_tokenizer(localizer, Arc::new(tokenizer)))
    }

    /// Create an annotator around a custom tokenizer.
    ///
    /// The tokenizer must be lossless, or text will be dropped from the output.
    pub fn with_tokenizer(localizer: Arc<dyn Localizer>, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Annotator {
            localizer,
            tokenizer,
        }
    }

    /// Annotate every glossary term in `text`.
    pub fn annotate(&self, text: &str, glossary: &Glossary) -> Result<String> {
        Ok(self.annotate_report(text, glossary)?.output)
    }

    /// Annotate `text` and report how many spans matched.
    pub fn annotate_report(&self, text: &str, glossary: &Glossary) -> Result<AnnotationReport> {
        let spans: Vec<Span> = self.tokenizer.tokenize(text)?.collect();

        let mut output = String::with_capacity(text.len());
        let mut state = CommentState::Normal;
        let mut annotated = 0;
        let mut skipped_in_comment = 0;

        for (i, span) in spans.iter().enumerate() {
            state = state.advance(span.as_str());

            if !glossary.contains(span.as_str()) {
                output.push_str(span.as_str());
                continue;
            }

            if state.in_comment() {
                skipped_in_comment += 1;
                output.push_str(span.as_str());
                continue;
            }

            let next_span = spans.get(i + 1).map(Span::as_str);
            log::trace!(
                "annotating '{}' at byte {} (glossary '{}')",
                span.text,
                span.start_offset,
                glossary.lang()
            );
            output.push_str(&self.render(span.as_str(), glossary, next_span)?);
            annotated += 1;
        }

        log::debug!(
            "annotated {} spans, skipped {} in comments (glossary '{}', tokenizer '{}')",
            annotated,
            skipped_in_comment,
            glossary.lang(),
            self.tokenizer.name()
        );

        Ok(AnnotationReport {
            output,
            annotated,
            skipped_in_comment,
        })
    }

    /// Annotate several documents against one glossary, in parallel.
    ///
    /// Output order matches input order. Any failing document fails the call.
    pub fn annotate_all<S>(&self, documents: &[S], glossary: &Glossary) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|document| self.annotate(document.as_ref(), glossary))
            .collect()
    }

    /// Generate the gloss markup for a single surface form.
    pub fn render(
        &self,
        surface_form: &str,
        glossary: &Glossary,
        next_span: Option<&str>,
    ) -> Result<String> {
        markup::render(surface_form, glossary, next_span, self.localizer.as_ref())
    }
}
