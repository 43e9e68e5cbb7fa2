//! Compiled glossary entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::glossary::source::{RawEntry, RawPronunciation};

/// A canonical glossary definition, shared by its main form and its variants.
///
/// Entries are built once by the compiler and only ever handed out by shared
/// reference afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The key the entry was declared under
    pub main_form: String,

    /// Phonetic spelling
    pub ruby: Option<String>,

    /// Short definition (inline tooltips and print)
    pub short: Option<String>,

    /// Long definition (standalone glossary page only)
    pub long: Option<String>,

    pub pronunciations: Vec<Pronunciation>,

    /// How many leading pronunciations to fold into the short form
    pub pronunciations_to_include_in_short_form: u32,

    /// Surface form to custom rendered text
    pub render_as: BTreeMap<String, String>,

    /// Alternate surface forms, in declaration order
    pub variants: Vec<String>,

    /// Print visibility of the short form
    pub show_in_print: Option<bool>,
}

/// A single pronunciation record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub ipa: Option<String>,

    /// Fields not interpreted by the annotator
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// Normalize a raw entry declared under `main_form`.
    pub fn from_raw<S: Into<String>>(main_form: S, raw: &RawEntry) -> Self {
        Entry {
            main_form: main_form.into(),
            ruby: raw.ruby.clone(),
            short: raw.short.clone(),
            long: raw.long.clone(),
            pronunciations: raw
                .pronunciations
                .iter()
                .flatten()
                .map(Pronunciation::from)
                .collect(),
            pronunciations_to_include_in_short_form: raw
                .pronunciations_to_include_in_short_form
                .unwrap_or(0),
            render_as: raw.render_as.clone().unwrap_or_default(),
            variants: raw.variants.clone().unwrap_or_default(),
            show_in_print: raw.show_in_print,
        }
    }

    /// True if either a short or a long definition exists.
    pub fn has_definition(&self) -> bool {
        self.short.is_some() || self.long.is_some()
    }

    /// The text displayed for `surface_form`.
    pub fn display_text<'a>(&'a self, surface_form: &'a str) -> &'a str {
        self.render_as
            .get(surface_form)
            .map(String::as_str)
            .unwrap_or(surface_form)
    }

    /// True unless print visibility was explicitly switched off.
    pub fn visible_in_print(&self) -> bool {
        self.show_in_print != Some(false)
    }
}

impl From<&RawPronunciation> for Pronunciation {
    fn from(raw: &RawPronunciation) -> Self {
        Pronunciation {
            ipa: raw.ipa.clone(),
            extra: raw.extra.clone(),
        }
    }
}
