//! Command implementations for Glossator CLI.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use crate::annotate::{Annotator, AnnotatorConfig};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{GlossatorError, Result};
use crate::glossary::{Glossary, GlossarySource, compile, compile_glossary};
use crate::i18n::MessageCatalog;

/// Execute a CLI command.
pub fn execute_command(args: GlossatorArgs) -> Result<()> {
    match &args.command {
        Command::Compile(compile_args) => compile_sources(compile_args, &args),
        Command::Annotate(annotate_args) => annotate_document(annotate_args, &args),
        Command::Lookup(lookup_args) => lookup_term(lookup_args, &args),
    }
}

/// Compile glossary sources and report their size.
fn compile_sources(args: &CompileArgs, cli_args: &GlossatorArgs) -> Result<()> {
    let mut sources = BTreeMap::new();
    for path in &args.sources {
        let source = GlossarySource::load_from_file(path)?;
        log::info!("Loaded glossary '{}' from {}", source.lang, path.display());
        if sources.contains_key(&source.lang) {
            return Err(GlossatorError::invalid_operation(format!(
                "More than one glossary source for language '{}'",
                source.lang
            )));
        }
        sources.insert(source.lang.clone(), source);
    }

    let glossaries = compile(&sources)?;

    let summary = CompileSummary {
        glossaries: glossaries
            .values()
            .map(|glossary| GlossarySummary {
                lang: glossary.lang().to_string(),
                glossary_url: glossary.glossary_url().map(str::to_string),
                entries: glossary.entry_count(),
                terms: glossary.len(),
            })
            .collect(),
    };

    output_result("Glossaries compiled successfully", &summary, cli_args)
}

/// Annotate a document and write it to the output file or stdout.
fn annotate_document(args: &AnnotateArgs, cli_args: &GlossatorArgs) -> Result<()> {
    let glossary = load_glossary(&args.glossary)?;

    let catalog = match &args.messages {
        Some(path) => MessageCatalog::load_from_file(path)?,
        None => MessageCatalog::new(),
    };

    let mut config = AnnotatorConfig::default();
    if let Some(pattern) = &args.word_pattern {
        config.word_pattern = pattern.clone();
    }
    let annotator = Annotator::with_config(Arc::new(catalog), &config)?;

    let text = fs::read_to_string(&args.input)?;
    let report = annotator.annotate_report(&text, &glossary)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &report.output)?;
            output_result(
                "Document annotated successfully",
                &AnnotationSummary {
                    input: args.input.to_string_lossy().to_string(),
                    output: Some(path.to_string_lossy().to_string()),
                    lang: glossary.lang().to_string(),
                    annotated: report.annotated,
                    skipped_in_comment: report.skipped_in_comment,
                },
                cli_args,
            )?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(report.output.as_bytes())?;
            stdout.flush()?;
            log::info!(
                "Annotated {} terms ({} skipped in comments)",
                report.annotated,
                report.skipped_in_comment
            );
        }
    }

    Ok(())
}

/// Show the entry a term or variant resolves to.
fn lookup_term(args: &LookupArgs, cli_args: &GlossatorArgs) -> Result<()> {
    let glossary = load_glossary(&args.glossary)?;

    let entry = glossary.lookup(&args.term).ok_or_else(|| {
        GlossatorError::not_found(format!(
            "'{}' in glossary '{}'",
            args.term,
            glossary.lang()
        ))
    })?;

    output_result(
        "Entry found",
        &LookupResult::new(&args.term, entry),
        cli_args,
    )
}

/// Load and compile a single glossary source file.
pub fn load_glossary(path: &Path) -> Result<Glossary> {
    let source = GlossarySource::load_from_file(path)?;
    compile_glossary(&source)
}
