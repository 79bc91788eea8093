//! Benchmarks for corpus conversion.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use lmvp2text::{MarkupEvents, convert};

/// Build a synthetic corpus of `articles` articles, each with a few
/// multi-line paragraphs.
fn synthetic_corpus(articles: usize) -> String {
    let mut corpus = String::new();
    for a in 0..articles {
        corpus.push_str(&format!("<art id=\"BENCH{a:06}\">\n"));
        for _ in 0..4 {
            corpus.push_str("<p>\n");
            for s in 0..5 {
                corpus.push_str("<s>\n");
                corpus.push_str("THE COMMITTEE VOTED\n  TO APPROVE THE MEASURE COMMA\t");
                corpus.push_str(&format!("SENTENCE NUMBER {s} PERIOD\n"));
            }
            corpus.push_str("</p>\n");
        }
        corpus.push_str("</art>\n");
    }
    corpus
}

fn bench_convert(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000);

    let mut group = c.benchmark_group("convert");
    group.throughput(Throughput::Bytes(corpus.len() as u64));
    group.bench_function("synthetic_1000_articles", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(corpus.len());
            convert(black_box(corpus.as_bytes()), &mut out).unwrap();
            out
        });
    });
    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let corpus = synthetic_corpus(1_000);

    c.bench_function("tokenize_synthetic_1000_articles", |b| {
        b.iter(|| MarkupEvents::new(black_box(corpus.as_bytes())).count());
    });
}

criterion_group!(benches, bench_convert, bench_tokenize);
criterion_main!(benches);
