//! Glossary compiler.
//!
//! Turns raw per-language sources into [`Glossary`] lookup structures. Entry
//! names are processed in sorted order; each entry registers its main form and
//! then its variants in declaration order. Any string registered twice, as a
//! term or as a variant, aborts compilation of that language.

use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::error::{GlossatorError, Result};
use crate::glossary::dictionary::Glossary;
use crate::glossary::entry::Entry;
use crate::glossary::source::GlossarySource;

/// Compile one source, reporting errors under the source's own language code.
pub fn compile_glossary(source: &GlossarySource) -> Result<Glossary> {
    compile_language(&source.lang, source)
}

/// Compile one source, reporting errors under `language`.
pub fn compile_language(language: &str, source: &GlossarySource) -> Result<Glossary> {
    let mut glossary = Glossary::new(source.lang.as_str(), source.glossary_url.clone());

    for (name, raw) in &source.entries {
        if glossary.contains(name) {
            return Err(GlossatorError::duplicate_term(name.as_str(), language));
        }

        let entry = Entry::from_raw(name.as_str(), raw);
        let variants = entry.variants.clone();
        let id = glossary.push_entry(entry);

        for term in std::iter::once(name).chain(variants.iter()) {
            if !glossary.register(term, id) {
                return Err(GlossatorError::duplicate_term(term.as_str(), language));
            }
        }
    }

    log::debug!(
        "compiled glossary '{}': {} entries, {} terms",
        language,
        glossary.entry_count(),
        glossary.len()
    );

    Ok(glossary)
}

/// Compile every language of `sources`.
///
/// Languages are independent and compiled in parallel. The first failing
/// language fails the whole call; no partial result is returned.
pub fn compile(sources: &BTreeMap<String, GlossarySource>) -> Result<BTreeMap<String, Glossary>> {
    sources
        .par_iter()
        .map(|(language, source)| {
            compile_language(language, source).map(|glossary| (language.clone(), glossary))
        })
        .collect()
}
