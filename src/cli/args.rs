//! Command line argument parsing for Glossator CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Glossator - glossary term annotation for generated documents
#[derive(Parser, Debug, Clone)]
#[command(name = "glossator")]
#[command(about = "Annotate glossary terms in generated documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GlossatorArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GlossatorArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compile glossary sources and report their size
    Compile(CompileArgs),

    /// Annotate a document with glossary markup
    Annotate(AnnotateArgs),

    /// Show the entry a term or variant resolves to
    Lookup(LookupArgs),
}

/// Arguments for compiling glossaries
#[derive(Parser, Debug, Clone)]
pub struct CompileArgs {
    /// Glossary source files (JSON), one language each
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,
}

/// Arguments for annotating a document
#[derive(Parser, Debug, Clone)]
pub struct AnnotateArgs {
    /// Glossary source file (JSON)
    #[arg(short, long, value_name = "GLOSSARY")]
    pub glossary: PathBuf,

    /// Message catalog file (JSON) with link labels
    #[arg(short, long, value_name = "MESSAGES")]
    pub messages: Option<PathBuf>,

    /// Regex matching word runs
    #[arg(long, value_name = "PATTERN")]
    pub word_pattern: Option<String>,

    /// Write the annotated document here instead of stdout
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Document to annotate
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// Arguments for looking up a term
#[derive(Parser, Debug, Clone)]
pub struct LookupArgs {
    /// Glossary source file (JSON)
    #[arg(short, long, value_name = "GLOSSARY")]
    pub glossary: PathBuf,

    /// Term or variant to resolve
    #[arg(value_name = "TERM")]
    pub term: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotate() {
        let args = GlossatorArgs::parse_from([
            "glossator",
            "-vv",
            "annotate",
            "--glossary",
            "en.json",
            "--messages",
            "messages.json",
            "page.html",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Annotate(annotate) => {
                assert_eq!(annotate.glossary, PathBuf::from("en.json"));
                assert_eq!(annotate.messages, Some(PathBuf::from("messages.json")));
                assert_eq!(annotate.input, PathBuf::from("page.html"));
                assert!(annotate.output.is_none());
            }
            other => panic!("Expected annotate command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_compile_quiet_json() {
        let args = GlossatorArgs::parse_from([
            "glossator", "-q", "-f", "json", "compile", "en.json", "fr.json",
        ]);

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Compile(compile) => assert_eq!(compile.sources.len(), 2),
            other => panic!("Expected compile command, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_requires_sources() {
        assert!(GlossatorArgs::try_parse_from(["glossator", "compile"]).is_err());
    }
}
