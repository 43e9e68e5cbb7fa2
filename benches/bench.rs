//! Criterion benchmarks for Glossator.
//!
//! - Glossary compilation
//! - Tokenization
//! - Document annotation

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use glossator::analysis::tokenizer::word_boundary::WordBoundaryTokenizer;
use glossator::prelude::*;

/// Build a glossary with `count` entries, each with one variant.
fn generate_source(count: usize) -> GlossarySource {
    let mut source = GlossarySource::new("en").with_glossary_url("/en/glossary");
    for i in 0..count {
        let entry = RawEntry::new()
            .with_short(format!("Definition number {i}."))
            .with_variant(format!("term{i}s"));
        source = source.with_entry(format!("term{i}"), entry);
    }
    source
}

/// Generate a document mixing glossary terms, plain words and comments.
fn generate_document(words: usize, vocabulary: usize) -> String {
    let mut document = String::from("<p>");
    for i in 0..words {
        match i % 7 {
            0 => document.push_str(&format!("term{} ", i % vocabulary)),
            3 => document.push_str(&format!("term{}s, ", i % vocabulary)),
            5 => document.push_str("\n<!-- term0 --> "),
            _ => document.push_str("filler "),
        }
    }
    document.push_str("</p>");
    document
}

fn bench_compile(c: &mut Criterion) {
    let source = generate_source(1_000);
    c.bench_function("compile_1000_entries", |b| {
        b.iter(|| compile_glossary(black_box(&source)).unwrap())
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let tokenizer = WordBoundaryTokenizer::new().unwrap();
    let document = generate_document(10_000, 100);

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("word_boundary", |b| {
        b.iter(|| tokenizer.split(black_box(&document)))
    });
    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let glossary = compile_glossary(&generate_source(100)).unwrap();
    let annotator = Annotator::new(Arc::new(MessageCatalog::new())).unwrap();
    let document = generate_document(10_000, 100);

    let mut group = c.benchmark_group("annotate");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("document", |b| {
        b.iter(|| annotator.annotate(black_box(&document), &glossary).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_compile, bench_tokenize, bench_annotate);
criterion_main!(benches);
