//! Performance benchmarks for the summarization pipeline
//!
//! Run with: cargo bench --bench summarize_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use precis_core::text::normalize;
use precis_core::{LanguageResources, RuleSegmenter, StemWeights, Summarizer};
use std::hint::black_box;

const SENTENCES: &[&str] = &[
    "Solar power is transforming the global energy market in 2024. ",
    "Panel prices fell sharply over the last decade! ",
    "Installers now deploy panels on homes, farms and warehouses. ",
    "Why do storage batteries matter so much for the grid? ",
    "Dr. Rivera argues that cheap storage smooths out daily supply. ",
];

/// Generate test text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let mut text = String::with_capacity(size + 128);
    for sentence in SENTENCES.iter().cycle() {
        if text.len() >= size {
            break;
        }
        text.push_str(sentence);
    }
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let summarizer = Summarizer::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("summarize", size), &text, |b, text| {
            b.iter(|| summarizer.summarize(black_box(text)));
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let text = generate_text(10_240);
    let resources = LanguageResources::english().unwrap();
    let segmenter = RuleSegmenter::from_resources(&resources);
    let stemmer = resources.stemmer_algorithm().build();
    let normalized = normalize(&text);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("normalize", |b| b.iter(|| normalize(black_box(&text))));
    group.bench_function("profile", |b| {
        b.iter(|| {
            StemWeights::build(
                black_box(&normalized),
                &segmenter,
                resources.stopwords(),
                stemmer.as_ref(),
            )
        })
    });

    let summarizer = Summarizer::new().unwrap();
    group.bench_function("rank", |b| b.iter(|| summarizer.rank(black_box(&text))));

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_stages);
criterion_main!(benches);
