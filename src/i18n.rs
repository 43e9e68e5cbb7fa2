//! Localized labels for generated markup.
//!
//! The annotator never reads a global translation table. It is handed a
//! [`Localizer`] at construction time and asks it for exactly two labels.
//!
//! # Examples
//!
//! ```
//! use glossator::i18n::{Localizer, MessageCatalog, GLOSSARY_READ_MORE};
//!
//! let catalog = MessageCatalog::new()
//!     .with_message("en", GLOSSARY_READ_MORE, "Read more")
//!     .with_message("fr", GLOSSARY_READ_MORE, "Lire la suite");
//!
//! assert_eq!(catalog.lookup("fr", GLOSSARY_READ_MORE), "Lire la suite");
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Label of the tooltip link shown next to a short form.
pub const GLOSSARY_READ_MORE: &str = "GLOSSARY_READ_MORE";

/// Label of the tooltip link shown when there is no short form.
pub const GLOSSARY_GO_TO_GLOSSARY: &str = "GLOSSARY_GO_TO_GLOSSARY";

/// Message lookup by language code and message key.
pub trait Localizer: Send + Sync {
    fn lookup(&self, lang: &str, key: &str) -> String;
}

impl<F> Localizer for F
where
    F: Fn(&str, &str) -> String + Send + Sync,
{
    fn lookup(&self, lang: &str, key: &str) -> String {
        self(lang, key)
    }
}

/// An in-memory message table: language -> key -> text.
///
/// Missing messages resolve to the key itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: BTreeMap<String, BTreeMap<String, String>>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a message.
    pub fn with_message<L, K, V>(mut self, lang: L, key: K, text: V) -> Self
    where
        L: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(lang, key, text);
        self
    }

    /// Add (or replace) a message in place.
    pub fn insert<L, K, V>(&mut self, lang: L, key: K, text: V)
    where
        L: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .entry(lang.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Get a message, if present.
    pub fn get(&self, lang: &str, key: &str) -> Option<&str> {
        self.messages
            .get(lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Parse a catalog from JSON of the form `{"en": {"KEY": "text"}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

impl Localizer for MessageCatalog {
    fn lookup(&self, lang: &str, key: &str) -> String {
        match self.get(lang, key) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("missing message '{key}' for language '{lang}'");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = MessageCatalog::new()
            .with_message("en", GLOSSARY_READ_MORE, "Read more")
            .with_message("en", GLOSSARY_GO_TO_GLOSSARY, "Go to glossary");

        assert_eq!(catalog.lookup("en", GLOSSARY_READ_MORE), "Read more");
        assert_eq!(catalog.lookup("en", GLOSSARY_GO_TO_GLOSSARY), "Go to glossary");
        assert_eq!(catalog.get("fr", GLOSSARY_READ_MORE), None);
    }

    #[test]
    fn test_missing_message_falls_back_to_key() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.lookup("en", GLOSSARY_READ_MORE), GLOSSARY_READ_MORE);
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = MessageCatalog::from_json_str(
            r#"{ "en": { "GLOSSARY_READ_MORE": "Read more" }, "es": { "GLOSSARY_READ_MORE": "Leer más" } }"#,
        )
        .unwrap();

        assert_eq!(catalog.lookup("es", GLOSSARY_READ_MORE), "Leer más");
        assert_eq!(catalog.get("en", GLOSSARY_READ_MORE), Some("Read more"));
    }

    #[test]
    fn test_closure_localizer() {
        let localizer = |lang: &str, key: &str| format!("{lang}:{key}");
        assert_eq!(
            Localizer::lookup(&localizer, "en", GLOSSARY_READ_MORE),
            "en:GLOSSARY_READ_MORE"
        );
    }
}
