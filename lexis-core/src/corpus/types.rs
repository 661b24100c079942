//! The analyzer facade type.

use std::path::PathBuf;

use lexis_types::{AnalysisError, Token};

use crate::analyzer::normalizer::{NormalizeCounts, TokenNormalizer};
use crate::source::{FileSource, TextSource};

/// Word frequency and collocation analysis over one text source.
///
/// Every query reads the source and normalizes it from scratch; nothing is
/// cached between calls. The analyzer holds no mutable state, so it is
/// `Send`/`Sync` whenever its source is.
#[derive(Debug, Clone)]
pub struct Analyzer<S = FileSource> {
    pub(crate) source: S,
    pub(crate) normalizer: TokenNormalizer,
}

impl Analyzer<FileSource> {
    /// Creates an analyzer for the text file at `path`.
    ///
    /// The file is not opened until the first query.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_source(FileSource::new(path))
    }
}

impl<S: TextSource> Analyzer<S> {
    /// Creates an analyzer over any text source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            normalizer: TokenNormalizer::new(),
        }
    }

    /// The source given at construction.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reads the source and runs it through the normalizer.
    pub(crate) fn load_tokens(&self) -> Result<(Vec<Token>, NormalizeCounts), AnalysisError> {
        let raw = self.source.read()?;
        let mut tokens = Vec::new();
        let counts = self.normalizer.normalize_into(&raw, &mut tokens);
        Ok((tokens, counts))
    }
}
