//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GlossatorArgs, OutputFormat};
use crate::error::Result;
use crate::glossary::entry::Entry;

/// Result structure for glossary compilation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompileSummary {
    pub glossaries: Vec<GlossarySummary>,
}

/// Size of one compiled glossary.
#[derive(Debug, Serialize, Deserialize)]
pub struct GlossarySummary {
    pub lang: String,
    pub glossary_url: Option<String>,
    pub entries: usize,
    pub terms: usize,
}

/// Result structure for document annotation.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnnotationSummary {
    pub input: String,
    pub output: Option<String>,
    pub lang: String,
    pub annotated: usize,
    pub skipped_in_comment: usize,
}

/// Result structure for term lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResult {
    pub term: String,
    pub display: String,
    pub main_form: String,
    pub ruby: Option<String>,
    pub short: Option<String>,
    pub long: Option<String>,
    pub variants: Vec<String>,
}

impl LookupResult {
    pub fn new(term: &str, entry: &Entry) -> Self {
        LookupResult {
            term: term.to_string(),
            display: entry.display_text(term).to_string(),
            main_form: entry.main_form.clone(),
            ruby: entry.ruby.clone(),
            short: entry.short.clone(),
            long: entry.long.clone(),
            variants: entry.variants.clone(),
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GlossatorArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &GlossatorArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GlossatorArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let pad = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(map) => {
            for (key, value) in map {
                match value {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        lines.push(format!("{pad}{key}:"));
                        lines.extend(human_lines(value, indent + 1));
                    }
                    _ => lines.push(format!("{pad}{key}: {}", scalar(value))),
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                match item {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        lines.push(format!("{pad}-"));
                        lines.extend(human_lines(item, indent + 1));
                    }
                    _ => lines.push(format!("{pad}- {}", scalar(item))),
                }
            }
        }
        other => lines.push(format!("{pad}{}", scalar(other))),
    }

    lines
}

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "-".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
