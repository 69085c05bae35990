//! Benchmarks for the search pipeline at realistic blog sizes.
//!
//! Simulates article indexes the widget actually ships:
//! - Small blog:  ~50 articles   (personal blog)
//! - Medium blog: ~200 articles  (active blogger)
//! - Large blog:  ~1000 articles (publication)
//!
//! Run with: cargo bench
//!
//! Every query here runs on a keystroke in the browser, so the numbers to
//! watch are the per-query latencies, not the one-time parse cost.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sift::{
    evaluate, parse_index, render_entries, search, Article, ArticleIndex, IndexStore, QueryConfig,
    RenderEntry,
};
use std::time::Duration;

// ============================================================================
// ARTICLE CORPUS GENERATION
// ============================================================================

/// A corpus size worth measuring, with the label used in reports.
struct CorpusSize {
    name: &'static str,
    articles: usize,
}

const CORPUS_SIZES: &[CorpusSize] = &[
    CorpusSize {
        name: "small",
        articles: 50,
    },
    CorpusSize {
        name: "medium",
        articles: 200,
    },
    CorpusSize {
        name: "large",
        articles: 1000,
    },
];

/// Topic vocabulary for generated titles and tags
const TOPIC_WORDS: &[&str] = &[
    "rust",
    "typescript",
    "javascript",
    "python",
    "kubernetes",
    "docker",
    "serverless",
    "database",
    "postgresql",
    "graphql",
    "websocket",
    "authentication",
    "encryption",
    "performance",
    "optimization",
    "caching",
    "algorithm",
    "concurrency",
    "parallelism",
    "async",
    "ownership",
    "borrowing",
    "lifetime",
    "compiler",
    "runtime",
    "wasm",
    "webassembly",
    "browser",
    "framework",
];

const FILLER_WORDS: &[&str] = &[
    "the",
    "about",
    "with",
    "from",
    "building",
    "shipping",
    "debugging",
    "measuring",
    "writing",
    "reading",
    "application",
    "system",
    "approach",
    "method",
    "implementation",
    "development",
    "architecture",
    "design",
    "pattern",
    "practice",
];

const CHANNELS: &[&str] = &["Engineering", "Adventures", "Tools", "Notes"];

fn generate_text(word_count: usize, seed: usize) -> String {
    let all_words: Vec<&str> = TOPIC_WORDS
        .iter()
        .chain(FILLER_WORDS.iter())
        .copied()
        .collect();

    (0..word_count)
        .map(|i| all_words[(seed * 11 + i * 5) % all_words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| Article {
            title: format!(
                "How to Build a {} {}",
                TOPIC_WORDS[i % TOPIC_WORDS.len()],
                TOPIC_WORDS[(i + 1) % TOPIC_WORDS.len()]
            ),
            excerpt: generate_text(30, i),
            tags: vec![
                TOPIC_WORDS[i % TOPIC_WORDS.len()].to_string(),
                TOPIC_WORDS[(i + 5) % TOPIC_WORDS.len()].to_string(),
            ],
            url: format!("/posts/2024/{:02}/post-{}", (i % 12) + 1, i),
            channel: Some(CHANNELS[i % CHANNELS.len()].to_string()),
        })
        .collect()
}

fn generate_index(size: &CorpusSize) -> ArticleIndex {
    ArticleIndex::from_articles(generate_articles(size.articles))
}

// ============================================================================
// INDEX PARSE BENCHMARKS
// ============================================================================

fn bench_parse_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_parse");

    for size in CORPUS_SIZES {
        let json = serde_json::to_string(&generate_articles(size.articles))
            .expect("Corpus should serialize");

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", size.name), &json, |b, json| {
            b.iter(|| parse_index(black_box(json)).expect("Corpus should parse"));
        });
    }

    group.finish();
}

// ============================================================================
// SEARCH BENCHMARKS
// ============================================================================

fn bench_search_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_query");

    // Medium blog: the size the widget is tuned for
    let index = generate_index(&CORPUS_SIZES[1]);

    // Realistic dropdown queries
    let queries = [
        ("single_term", "caching"),
        ("multi_term", "async database caching"),
        ("common_term", "the"),
        ("rare_term", "parallelism"),
        ("no_match", "nomatchword"),
        ("partial_word", "perf"),
    ];

    for (name, query) in queries {
        group.bench_with_input(BenchmarkId::new("score_all", name), &query, |b, query| {
            b.iter(|| search(black_box(&index), black_box(query)));
        });
    }

    group.finish();
}

fn bench_evaluate_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let store = IndexStore::ready(generate_index(&CORPUS_SIZES[1]));
    let config = QueryConfig::default();

    // The full per-keystroke path: gate, search, truncate.
    group.bench_function("keystroke/hit", |b| {
        b.iter(|| evaluate(black_box(&store), black_box("rust async"), black_box(&config)));
    });

    group.bench_function("keystroke/miss", |b| {
        b.iter(|| evaluate(black_box(&store), black_box("nomatchword"), black_box(&config)));
    });

    group.bench_function("keystroke/below_gate", |b| {
        b.iter(|| evaluate(black_box(&store), black_box("r"), black_box(&config)));
    });

    group.finish();
}

// ============================================================================
// RENDER BENCHMARKS
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let index = generate_index(&CORPUS_SIZES[1]);
    let results = search(&index, "rust");
    let config = QueryConfig::default();

    let entries: Vec<RenderEntry> = results
        .iter()
        .take(config.max_results)
        .filter_map(|r| index.get(r.article_id).map(RenderEntry::from_article))
        .collect();

    group.bench_function("dropdown_markup", |b| {
        b.iter(|| render_entries(black_box(&entries)));
    });

    group.finish();
}

// ============================================================================
// SCALING BENCHMARKS
// ============================================================================

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    // How query time scales with corpus size
    for size in CORPUS_SIZES {
        let index = generate_index(size);

        group.bench_with_input(
            BenchmarkId::new("corpus_size", size.name),
            &size.name,
            |b, _| {
                b.iter(|| search(black_box(&index), black_box("rust performance")));
            },
        );
    }

    // How query time scales with term count
    let index = generate_index(&CORPUS_SIZES[1]);
    let term_counts = [
        ("1_term", "wasm"),
        ("3_terms", "rust async caching"),
        ("5_terms", "rust async caching compiler browser"),
    ];

    for (name, query) in term_counts {
        group.bench_with_input(BenchmarkId::new("query_length", name), &query, |b, query| {
            b.iter(|| search(black_box(&index), black_box(query)));
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION SETTINGS
// ============================================================================

/// Criterion tuned for tight confidence intervals.
///
/// Per-query times sit in the microsecond range, where run-to-run noise
/// swamps the defaults. More samples, a longer measurement window, and a
/// stricter significance level keep before/after comparisons honest.
fn tight_confidence() -> Criterion {
    Criterion::default()
        .confidence_level(0.99)
        .sample_size(200)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(3))
        .significance_level(0.01)
        .noise_threshold(0.02) // ignore sub-2% jitter
}

// ============================================================================
// CRITERION GROUPS
// ============================================================================

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets =
    bench_parse_index,
    bench_search_queries,
    bench_evaluate_pipeline,
    bench_render,
    bench_scaling,
);

criterion_main!(benches);
