//! The compiled, per-language glossary.
//!
//! Every term and variant string is a key of one lookup map pointing into a
//! shared entry arena, so all surface forms of an entry resolve to the same
//! [`Entry`] record. A separate membership set over the same keys serves the
//! existence checks made for every span during annotation.

use ahash::{AHashMap, AHashSet};

use crate::glossary::entry::Entry;

/// Index of an entry in a glossary's entry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct EntryId(usize);

/// A compiled glossary for one language.
///
/// Built once by the compiler; read-only afterwards. Rebuild from the source
/// instead of updating in place.
#[derive(Debug, Clone)]
pub struct Glossary {
    /// Language code
    lang: String,
    /// Base URL of the standalone glossary page
    glossary_url: Option<String>,
    /// Sorted main forms
    entries: Vec<String>,
    /// Main forms each followed by their variants, in registration order
    terms: Vec<String>,
    /// Term or variant -> entry
    map: AHashMap<String, EntryId>,
    /// Membership set over the keys of `map`
    set: AHashSet<String>,
    /// Entry records indexed by `EntryId`
    arena: Vec<Entry>,
}

impl Glossary {
    /// Create an empty glossary.
    pub(crate) fn new<S: Into<String>>(lang: S, glossary_url: Option<String>) -> Self {
        Glossary {
            lang: lang.into(),
            glossary_url,
            entries: Vec::new(),
            terms: Vec::new(),
            map: AHashMap::new(),
            set: AHashSet::new(),
            arena: Vec::new(),
        }
    }

    /// Store a new entry record. Its surface forms must be registered separately.
    pub(crate) fn push_entry(&mut self, entry: Entry) -> EntryId {
        let id = EntryId(self.arena.len());
        self.entries.push(entry.main_form.clone());
        self.arena.push(entry);
        id
    }

    /// Register `term` as a surface form of the entry `id`.
    ///
    /// Returns `false` and leaves the glossary untouched if the string is
    /// already a term or variant of any entry.
    pub(crate) fn register(&mut self, term: &str, id: EntryId) -> bool {
        if self.map.contains_key(term) {
            return false;
        }
        self.map.insert(term.to_string(), id);
        self.set.insert(term.to_string());
        self.terms.push(term.to_string());
        true
    }

    /// The language code.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Base URL of the standalone glossary page, if configured.
    pub fn glossary_url(&self) -> Option<&str> {
        self.glossary_url.as_deref()
    }

    /// Main forms, sorted.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Every term and variant, each main form followed by its variants.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Check whether `term` is a known term or variant.
    pub fn contains(&self, term: &str) -> bool {
        self.set.contains(term)
    }

    /// Resolve a term or variant to its entry.
    pub fn lookup(&self, term: &str) -> Option<&Entry> {
        self.map.get(term).map(|id| &self.arena[id.0])
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of terms and variants.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the glossary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
