//! Glossary term annotation.
//!
//! The annotator splits a document into spans, walks them while tracking
//! whether the cursor sits inside a markup comment, and replaces every span
//! that is a known term or variant with generated gloss markup.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use glossator::annotate::Annotator;
//! use glossator::glossary::{compile_glossary, GlossarySource, RawEntry};
//! use glossator::i18n::MessageCatalog;
//!
//! let source = GlossarySource::new("en").with_entry("GLAAD", RawEntry::new().with_ruby("/ɡlæd/"));
//! let glossary = compile_glossary(&source).unwrap();
//! let annotator = Annotator::new(Arc::new(MessageCatalog::new())).unwrap();
//!
//! assert_eq!(
//!     annotator.annotate("GLAAD", &glossary).unwrap(),
//!     "<ruby>GLAAD<rp>(</rp><rt>/ɡlæd/</rt><rp>)</rp></ruby>"
//! );
//! ```

pub mod annotator;
pub mod comment;
pub mod markup;

// Re-export commonly used types
pub use annotator::*;
pub use comment::*;
pub use markup::*;
