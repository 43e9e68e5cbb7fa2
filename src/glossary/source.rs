//! Raw glossary sources.
//!
//! These types mirror the per-language source description handed over by the
//! glossary source collaborator. They are only read, never written back, and
//! every optional field stays optional: an absent field and an explicit empty
//! string are different things.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A raw glossary for one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlossarySource {
    /// Base URL of the standalone glossary page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glossary_url: Option<String>,

    /// Language code
    pub lang: String,

    /// Entry name to raw entry fields, iterated in sorted order
    #[serde(default)]
    pub entries: BTreeMap<String, RawEntry>,
}

/// Raw fields of a single glossary entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Phonetic spelling shown as a ruby annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ruby: Option<String>,

    /// Short definition used inline and in print
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Long definition used by the standalone glossary page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciations: Option<Vec<RawPronunciation>>,

    /// Alternate surface forms sharing this entry, in declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<String>>,

    /// Surface form to custom rendered text
    #[serde(
        default,
        rename = "renderAs",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_as: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciations_to_include_in_short_form: Option<u32>,

    /// Print visibility of the short form; only an explicit `false` hides it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_print: Option<bool>,
}

/// A raw pronunciation record.
///
/// Only the IPA transcription is interpreted; any other field is preserved
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPronunciation {
    #[serde(default, rename = "IPA", skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl GlossarySource {
    /// Create an empty source for a language.
    pub fn new<S: Into<String>>(lang: S) -> Self {
        GlossarySource {
            glossary_url: None,
            lang: lang.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Set the base URL of the standalone glossary page.
    pub fn with_glossary_url<S: Into<String>>(mut self, url: S) -> Self {
        self.glossary_url = Some(url.into());
        self
    }

    /// Add (or replace) a raw entry.
    pub fn with_entry<S: Into<String>>(mut self, name: S, entry: RawEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    /// Parse a source from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a source from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let source = Self::from_json_str(&content)?;
        log::debug!(
            "loaded glossary source '{}' ({} entries) from {}",
            source.lang,
            source.entries.len(),
            path.as_ref().display()
        );
        Ok(source)
    }
}

impl RawEntry {
    /// Create an entry with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ruby<S: Into<String>>(mut self, ruby: S) -> Self {
        self.ruby = Some(ruby.into());
        self
    }

    pub fn with_short<S: Into<String>>(mut self, short: S) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn with_long<S: Into<String>>(mut self, long: S) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Append a variant surface form.
    pub fn with_variant<S: Into<String>>(mut self, variant: S) -> Self {
        self.variants
            .get_or_insert_with(Vec::new)
            .push(variant.into());
        self
    }

    /// Render `surface` as `text` instead of verbatim.
    pub fn with_render_as<K: Into<String>, V: Into<String>>(mut self, surface: K, text: V) -> Self {
        self.render_as
            .get_or_insert_with(BTreeMap::new)
            .insert(surface.into(), text.into());
        self
    }

    /// Append a pronunciation.
    pub fn with_pronunciation(mut self, pronunciation: RawPronunciation) -> Self {
        self.pronunciations
            .get_or_insert_with(Vec::new)
            .push(pronunciation);
        self
    }

    pub fn with_pronunciations_in_short_form(mut self, count: u32) -> Self {
        self.pronunciations_to_include_in_short_form = Some(count);
        self
    }

    pub fn with_show_in_print(mut self, show: bool) -> Self {
        self.show_in_print = Some(show);
        self
    }
}

impl RawPronunciation {
    /// A pronunciation carrying an IPA transcription.
    pub fn ipa<S: Into<String>>(ipa: S) -> Self {
        RawPronunciation {
            ipa: Some(ipa.into()),
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        let source = GlossarySource::from_json_str(
            r#"{
                "glossary_url": "/en/glossary",
                "lang": "en",
                "entries": {
                    "GLAAD": { "ruby": "/ɡlæd/" },
                    "TeX": {
                        "short": "A typesetting system.",
                        "variants": ["TEX"],
                        "renderAs": { "TEX": "TeX" },
                        "pronunciations": [{ "IPA": "tɛx", "audio": "tex.ogg" }, { "note": "no ipa" }],
                        "pronunciations_to_include_in_short_form": 1,
                        "show_in_print": false
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(source.glossary_url.as_deref(), Some("/en/glossary"));
        assert_eq!(source.lang, "en");
        assert_eq!(source.entries.len(), 2);

        let glaad = &source.entries["GLAAD"];
        assert_eq!(glaad.ruby.as_deref(), Some("/ɡlæd/"));
        assert!(glaad.short.is_none());
        assert!(glaad.variants.is_none());

        let tex = &source.entries["TeX"];
        assert_eq!(tex.variants.as_deref(), Some(&["TEX".to_string()][..]));
        assert_eq!(tex.render_as.as_ref().unwrap()["TEX"], "TeX");
        let pronunciations = tex.pronunciations.as_ref().unwrap();
        assert_eq!(pronunciations[0].ipa.as_deref(), Some("tɛx"));
        assert_eq!(pronunciations[0].extra["audio"], "tex.ogg");
        assert!(pronunciations[1].ipa.is_none());
        assert_eq!(tex.pronunciations_to_include_in_short_form, Some(1));
        assert_eq!(tex.show_in_print, Some(false));
    }

    #[test]
    fn test_empty_string_is_kept() {
        let json = r#"{ "lang": "en", "entries": { "x": { "short": "" } } }"#;
        let source = GlossarySource::from_json_str(json).unwrap();
        assert_eq!(source.entries["x"].short.as_deref(), Some(""));
    }

    #[test]
    fn test_negative_short_form_count_rejected() {
        let result = GlossarySource::from_json_str(
            r#"{ "lang": "en", "entries": { "x": { "pronunciations_to_include_in_short_form": -1 } } }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let source = GlossarySource::new("en")
            .with_glossary_url("/en/glossary")
            .with_entry("AMAB", RawEntry::new().with_short("assigned male at birth"));

        assert_eq!(source.entries.len(), 1);
        assert_eq!(
            source.entries["AMAB"].short.as_deref(),
            Some("assigned male at birth")
        );
    }
}
