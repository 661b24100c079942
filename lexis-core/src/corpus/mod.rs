//! Analyzer facade over a single text source.
//!
//! Query flow is strictly one-way:
//!
//! ```text
//! source.read() -> normalize -> count_tokens | collocate -> FrequencyTable
//! ```
//!
//! Threading:
//! - [`Analyzer`] keeps no state between calls. Each query re-reads and
//!   re-normalizes, so concurrent queries from several threads are safe as
//!   long as the underlying file is not being rewritten at the same time.

mod api;
mod stats;
mod types;

pub use stats::CorpusStats;
pub use types::Analyzer;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StringSource;
    use lexis_types::{AnalysisError, ChartOptions, NGram};
    use std::io::Write;

    const SAMPLE: &str = "The cat sat on the mat. The cat ran.";

    fn sample() -> Analyzer<StringSource> {
        Analyzer::with_source(StringSource::new(SAMPLE))
    }

    #[test]
    fn word_count_scenario() {
        let table = sample().word_count().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 5);
        assert_eq!(table.get("cat"), Some(2));
        assert_eq!(table.get("sat"), Some(1));
        assert_eq!(table.get("mat"), Some(1));
        assert_eq!(table.get("ran"), Some(1));
        assert_eq!(table.get("the"), None);
    }

    #[test]
    fn collocate_scenario() {
        let table = sample().collocate(2).unwrap();
        let pairs: Vec<(NGram, usize)> = table.iter().map(|e| (e.key.clone(), e.count)).collect();
        assert_eq!(
            pairs,
            [
                (NGram::from(["cat", "sat"]), 1),
                (NGram::from(["sat", "mat"]), 1),
                (NGram::from(["mat", "cat"]), 1),
                (NGram::from(["cat", "ran"]), 1),
            ]
        );
    }

    #[test]
    fn collocate_trigram() {
        let table = sample().collocate(3).unwrap();
        assert_eq!(table.total(), 3);
        assert_eq!(table.get(&NGram::from(["cat", "sat", "mat"])), Some(1));
    }

    #[test]
    fn invalid_window_sizes_fail() {
        for size in [0usize, 1, 4, 10] {
            let err = sample().collocate(size).unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidWindowSize { size: s } if s == size));
        }
    }

    #[test]
    fn invalid_window_checked_before_read() {
        let analyzer = Analyzer::new("/definitely/not/here.txt");
        let err = analyzer.collocate(4).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidWindowSize { size: 4 }));
    }

    #[test]
    fn missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::new(dir.path().join("absent.txt"));

        assert!(matches!(analyzer.word_count(), Err(AnalysisError::Io { .. })));
        assert!(matches!(analyzer.collocate(2), Err(AnalysisError::Io { .. })));
        assert!(matches!(analyzer.read_text(), Err(AnalysisError::Io { .. })));
        assert!(matches!(analyzer.stats(), Err(AnalysisError::Io { .. })));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{SAMPLE}").unwrap();

        let analyzer = Analyzer::new(file.path());
        assert_eq!(analyzer.source().path(), file.path());
        assert_eq!(analyzer.read_text().unwrap().trim_end(), SAMPLE);
        assert_eq!(analyzer.word_count().unwrap().get("cat"), Some(2));
    }

    #[test]
    fn empty_source_yields_empty_tables() {
        let analyzer = Analyzer::with_source(StringSource::new(""));
        assert!(analyzer.word_count().unwrap().is_empty());
        assert!(analyzer.collocate(2).unwrap().is_empty());
        assert!(analyzer.collocate(3).unwrap().is_empty());
        assert!(analyzer.tokens().unwrap().is_empty());
    }

    #[test]
    fn stopword_only_source_yields_empty_tables() {
        let analyzer = Analyzer::with_source(StringSource::new("The and of, (it's) -- ..."));
        assert!(analyzer.word_count().unwrap().is_empty());
        assert!(analyzer.collocate(2).unwrap().is_empty());
    }

    #[test]
    fn queries_are_idempotent() {
        let analyzer = sample();
        assert_eq!(analyzer.word_count().unwrap(), analyzer.word_count().unwrap());
        assert_eq!(analyzer.collocate(2).unwrap(), analyzer.collocate(2).unwrap());
    }

    #[test]
    fn queries_see_source_changes() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let analyzer = Analyzer::new(file.path());

        std::fs::write(file.path(), "apple apple").unwrap();
        assert_eq!(analyzer.word_count().unwrap().get("apple"), Some(2));

        std::fs::write(file.path(), "pear").unwrap();
        let table = analyzer.word_count().unwrap();
        assert_eq!(table.get("apple"), None);
        assert_eq!(table.get("pear"), Some(1));
    }

    #[test]
    fn stats_snapshot() {
        let stats = sample().stats().unwrap();
        assert_eq!(stats.bytes, SAMPLE.len());
        assert_eq!(stats.fragments, 9);
        assert_eq!(stats.tokens, 5);
        assert_eq!(stats.distinct_tokens, 4);
        assert_eq!(stats.dropped(), 4);
        assert!((stats.lexical_diversity() - 0.8).abs() < f32::EPSILON);
        assert!(format!("{stats}").contains("5 tokens (4 distinct, 4 dropped)"));
    }

    #[test]
    fn visual_word_count_lists_top_words() {
        let chart = sample().visual_word_count(&ChartOptions::words()).unwrap();
        assert!(chart.starts_with("Top 10 most common words\n"));
        let first_bar = chart.lines().nth(3).unwrap();
        assert!(first_bar.starts_with("cat "));
        assert!(first_bar.ends_with(" 2"));
    }

    #[test]
    fn visual_collocate_uses_comma_labels() {
        let chart = sample()
            .visual_collocate(2, &ChartOptions::phrases().with_top_k(2))
            .unwrap();
        assert!(chart.contains("cat, sat"));
        assert!(chart.contains("sat, mat"));
        assert!(!chart.contains("mat, cat"));
    }

    #[test]
    fn visual_collocate_rejects_bad_window() {
        let err = sample()
            .visual_collocate(5, &ChartOptions::phrases())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidWindowSize { size: 5 }));
    }

    #[test]
    fn analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
        assert_send_sync::<Analyzer<StringSource>>();
    }

    #[test]
    fn parallel_queries_agree() {
        let analyzer = sample();
        let expected = analyzer.word_count().unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| analyzer.word_count().unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
