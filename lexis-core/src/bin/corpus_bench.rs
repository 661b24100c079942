//! Corpus Benchmarking Tool
//!
//! Measures throughput of the analysis pipeline on a large text file, such as
//! a book from Project Gutenberg or a concatenated speech archive.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: Splitting, lowercasing, punctuation and stopword removal
//! 2. **Word count**: Normalize + unigram counting
//! 3. **Collocate**: Normalize + n-gram counting for the chosen window
//!
//! ## Usage
//!
//! ```bash
//! # Bigram collocations (default)
//! ./target/release/corpus_bench /path/to/book.txt
//!
//! # Trigram collocations
//! ./target/release/corpus_bench /path/to/book.txt 3
//!
//! # Show per-query debug events
//! RUST_LOG=lexis_core=debug ./target/release/corpus_bench /path/to/book.txt
//! ```
//!
//! After timing, the top words and phrases are printed as bar charts.

use std::env;
use std::time::{Duration, Instant};

use lexis_core::analyzer::TokenNormalizer;
use lexis_core::count::{collocate, count_tokens};
use lexis_core::{AnalysisError, Analyzer, ChartOptions, TextSource, WindowSize};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), AnalysisError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [window]");
        std::process::exit(1);
    }

    let window_size = match args.get(2) {
        Some(arg) => arg.parse::<usize>().unwrap_or(0),
        None => 2,
    };
    let window = WindowSize::try_from(window_size)?;

    let path = &args[1];
    let analyzer = Analyzer::new(path);
    let input = analyzer.source().read()?;
    info!(path = %path, bytes = input.len(), "loaded");

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Window:    {}\n", window);

    bench_normalize(&input);
    bench_word_count(&input);
    bench_collocate(&input, window);

    println!("{}", analyzer.stats()?);
    println!();
    println!("{}", analyzer.visual_word_count(&ChartOptions::words())?);
    println!(
        "{}",
        analyzer.visual_collocate(window.get(), &ChartOptions::phrases())?
    );

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TokenNormalizer::new();
    let mut tokens = Vec::new();

    println!("=== Normalize ===");

    warmup(|| {
        tokens.clear();
        normalizer.normalize_into(input, &mut tokens);
    });

    let elapsed = measure(|| {
        tokens.clear();
        normalizer.normalize_into(input, &mut tokens);
    });

    print_perf("Normalize", input.len(), elapsed, tokens.len() as u64);
}

fn bench_word_count(input: &str) {
    let normalizer = TokenNormalizer::new();

    println!("=== Word count ===");

    warmup(|| {
        std::hint::black_box(count_tokens(&normalizer.normalize(input)));
    });

    let mut distinct = 0usize;
    let elapsed = measure(|| {
        let table = count_tokens(&normalizer.normalize(input));
        distinct = table.len();
        std::hint::black_box(table);
    });

    print_perf("Word count", input.len(), elapsed, distinct as u64);
}

fn bench_collocate(input: &str, window: WindowSize) {
    let normalizer = TokenNormalizer::new();

    println!("=== Collocate ({window}) ===");

    warmup(|| {
        std::hint::black_box(collocate(&normalizer.normalize(input), window));
    });

    let mut distinct = 0usize;
    let elapsed = measure(|| {
        let table = collocate(&normalizer.normalize(input), window);
        distinct = table.len();
        std::hint::black_box(table);
    });

    print_perf("Collocate", input.len(), elapsed, distinct as u64);
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, units: u64) {
    let secs = elapsed.as_secs_f64();
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.2} MiB/s", mib / secs);

    if units > 0 {
        println!("Units       : {}", fmt_count(units));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
