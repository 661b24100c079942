//! Statistics and CorpusStats.

use lexis_types::AnalysisError;
use rustc_hash::FxHashSet;

use crate::corpus::types::Analyzer;
use crate::source::TextSource;

/// A snapshot of one read of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// Size of the raw text in bytes.
    pub bytes: usize,
    /// Whitespace-separated fragments.
    pub fragments: usize,
    /// Tokens left after normalization.
    pub tokens: usize,
    /// Distinct tokens.
    pub distinct_tokens: usize,
}

impl<S: TextSource> Analyzer<S> {
    /// Reads the source and returns its statistics.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the source cannot be read.
    pub fn stats(&self) -> Result<CorpusStats, AnalysisError> {
        let raw = self.source.read()?;
        let mut tokens = Vec::new();
        let counts = self.normalizer.normalize_into(&raw, &mut tokens);
        let distinct: FxHashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();

        Ok(CorpusStats {
            bytes: raw.len(),
            fragments: counts.fragments,
            tokens: counts.tokens,
            distinct_tokens: distinct.len(),
        })
    }
}

impl CorpusStats {
    /// Fragments removed as punctuation-only or stopwords.
    pub fn dropped(&self) -> usize {
        self.fragments - self.tokens
    }

    /// Distinct tokens per token, 0.0 for an empty text.
    pub fn lexical_diversity(&self) -> f32 {
        if self.tokens == 0 {
            0.0
        } else {
            self.distinct_tokens as f32 / self.tokens as f32
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} bytes, {} fragments, {} tokens ({} distinct, {} dropped)",
            self.bytes,
            self.fragments,
            self.tokens,
            self.distinct_tokens,
            self.dropped()
        )
    }
}
