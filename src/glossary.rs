//! Glossary data model and compiler.
//!
//! A raw, per-language [`GlossarySource`] is compiled into a [`Glossary`]: an
//! immutable lookup structure in which every term and every variant resolves
//! to one shared [`Entry`].
//!
//! # Examples
//!
//! ```
//! use glossator::glossary::{compile_glossary, GlossarySource};
//!
//! let source = GlossarySource::from_json_str(r#"{
//!     "lang": "en",
//!     "entries": {
//!         "transman": { "short": "A man who was assigned female at birth.", "variants": ["transmen"] }
//!     }
//! }"#).unwrap();
//!
//! let glossary = compile_glossary(&source).unwrap();
//! assert_eq!(glossary.terms(), ["transman", "transmen"]);
//! assert_eq!(glossary.lookup("transmen").unwrap().main_form, "transman");
//! ```

pub mod compiler;
pub mod dictionary;
pub mod entry;
pub mod source;

// Re-export commonly used types
pub use compiler::*;
pub use dictionary::*;
pub use entry::*;
pub use source::*;
