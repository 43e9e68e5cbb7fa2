//! Gloss markup generation.
//!
//! A matched surface form is rewritten into one fragment made of independent
//! blocks, concatenated in a fixed order:
//!
//! ```text
//! <span class="glossed-block">        only with a definition
//!   <ruby>...core...</ruby> | core    ruby only with a phonetic spelling
//!   <span class="glossed-print">      only with a short definition shown in print
//!   <span class="glossed-tooltip">    only with a definition
//! </span>
//! ```

use crate::error::{GlossatorError, Result};
use crate::glossary::dictionary::Glossary;
use crate::glossary::entry::Entry;
use crate::i18n::{GLOSSARY_GO_TO_GLOSSARY, GLOSSARY_READ_MORE, Localizer};

/// Characters that suppress the space after a print tooltip.
pub const PUNCTUATION: [char; 6] = ['.', ',', ':', ';', '!', '@'];

/// Whether the first character of `span` is punctuation.
///
/// `None` when there is no span at all; an empty span is not punctuation.
pub fn is_first_punctuation(span: Option<&str>) -> Option<bool> {
    span.map(|text| text.chars().next().is_some_and(|c| PUNCTUATION.contains(&c)))
}

/// Generate the gloss markup for `surface_form`.
///
/// `next_span` is the span following the match in the document, if any.
pub fn render(
    surface_form: &str,
    glossary: &Glossary,
    next_span: Option<&str>,
    localizer: &dyn Localizer,
) -> Result<String> {
    let entry = glossary.lookup(surface_form).ok_or_else(|| {
        GlossatorError::invariant(format!(
            "'{surface_form}' has no entry in glossary '{}'",
            glossary.lang()
        ))
    })?;

    let term = entry.display_text(surface_form);
    let has_definition = entry.has_definition();
    let short_form = short_form(entry);

    let mut output = String::new();
    if has_definition {
        output.push_str(r#"<span class="glossed-block">"#);
    }

    let core = if has_definition {
        format!(r##"<dfn class="glossed-main"><a href="#">{term}</a></dfn>"##)
    } else {
        term.to_string()
    };

    match &entry.ruby {
        Some(ruby) => {
            if has_definition {
                output.push_str(r#"<ruby class="glossed-ruby">"#);
            } else {
                output.push_str("<ruby>");
            }
            output.push_str(&core);
            output.push_str("<rp>(</rp><rt>");
            output.push_str(ruby);
            output.push_str("</rt><rp>)</rp></ruby>");
        }
        None => output.push_str(&core),
    }

    if entry.short.is_some() && entry.visible_in_print() {
        if !has_definition {
            return Err(GlossatorError::invariant(format!(
                "print tooltip for '{}' without a definition",
                entry.main_form
            )));
        }
        let Some(short_form) = short_form.as_deref() else {
            return Err(GlossatorError::invariant(format!(
                "print tooltip for '{}' without a short form",
                entry.main_form
            )));
        };

        output.push_str(r#"<span class="glossed-print">"#);
        output.push_str(" (");
        output.push_str(short_form);
        output.push(')');
        match is_first_punctuation(next_span) {
            Some(true) => {}
            Some(false) | None => output.push(' '),
        }
        output.push_str("</span>");
    }

    if has_definition {
        output.push_str(r#"<span class="glossed-tooltip">"#);
        if let Some(glossary_url) = glossary.glossary_url() {
            let entry_url = format!("{glossary_url}/#entry_{}", entry.main_form);
            match &short_form {
                Some(short_form) => {
                    let read_more = localizer.lookup(glossary.lang(), GLOSSARY_READ_MORE);
                    output.push_str(&format!(
                        r#"{short_form} <a href="{entry_url}">{read_more}</a>"#
                    ));
                }
                None => {
                    let go_to = localizer.lookup(glossary.lang(), GLOSSARY_GO_TO_GLOSSARY);
                    output.push_str(&format!(r#"<a href="{entry_url}">{go_to}</a>"#));
                }
            }
        }
        output.push_str("</span>");
        output.push_str("</span>");
    }

    Ok(output)
}

/// Aggregated pronunciations followed by the short definition.
///
/// `None` when the entry has neither.
pub fn short_form(entry: &Entry) -> Option<String> {
    let pronunciations = aggregate_pronunciations(entry);
    if pronunciations.is_none() && entry.short.is_none() {
        return None;
    }

    let mut short_form = pronunciations.unwrap_or_default();
    if let Some(short) = &entry.short {
        short_form.push_str(short);
    }
    Some(short_form)
}

/// The pronunciations block of the short form, if any.
pub fn aggregate_pronunciations(entry: &Entry) -> Option<String> {
    let limit = entry.pronunciations_to_include_in_short_form;
    if limit == 0 {
        return None;
    }

    let mut included: u32 = 0;
    let mut ipas: Vec<&str> = Vec::new();
    for pronunciation in &entry.pronunciations {
        // TODO: decide whether the first `limit` IPA strings belong in the
        // short form. As written the loop stops before taking any of them.
        if included <= limit {
            break;
        }

        if let Some(ipa) = pronunciation.ipa.as_deref() {
            ipas.push(ipa);
            included += 1;
        }
    }

    if ipas.is_empty() {
        return None;
    }
    Some(format!(
        r#"<span class="pronunciations">{}. </span>"#,
        ipas.join(", ")
    ))
}
