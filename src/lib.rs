//! # Glossator
//!
//! Glossary term annotation for generated documents.
//!
//! ## Features
//!
//! - Per-language glossary compilation with duplicate detection
//! - Lossless word-boundary tokenization
//! - Markup comment skipping
//! - Gloss markup with ruby annotations, print tooltips and hover tooltips
//! - Pluggable localization of link labels

pub mod analysis;
pub mod annotate;
pub mod cli;
pub mod error;
pub mod glossary;
pub mod i18n;

pub mod prelude {
    pub use crate::annotate::{AnnotationReport, Annotator, AnnotatorConfig};
    pub use crate::error::{GlossatorError, Result};
    pub use crate::glossary::{
        Entry, Glossary, GlossarySource, RawEntry, RawPronunciation, compile, compile_glossary,
    };
    pub use crate::i18n::{Localizer, MessageCatalog};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
