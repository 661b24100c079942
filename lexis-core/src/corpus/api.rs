//! Public queries.

use lexis_types::{AnalysisError, ChartOptions, NGram, Token, WindowSize};
use tracing::debug;

use crate::chart;
use crate::corpus::types::Analyzer;
use crate::count::{self, FrequencyTable};
use crate::source::TextSource;

impl<S: TextSource> Analyzer<S> {
    /// Returns the raw text of the source.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the source cannot be read.
    pub fn read_text(&self) -> Result<String, AnalysisError> {
        self.source.read()
    }

    /// Returns the normalized token sequence of the source.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the source cannot be read.
    pub fn tokens(&self) -> Result<Vec<Token>, AnalysisError> {
        self.load_tokens().map(|(tokens, _)| tokens)
    }

    /// Counts every non-stopword token in the source.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the source cannot be read.
    #[tracing::instrument(skip_all)]
    pub fn word_count(&self) -> Result<FrequencyTable<Token>, AnalysisError> {
        let (tokens, counts) = self.load_tokens()?;
        let table = count::count_tokens(&tokens);
        debug!(
            fragments = counts.fragments,
            tokens = counts.tokens,
            distinct = table.len(),
            "word count"
        );
        Ok(table)
    }

    /// Counts every run of `window_size` consecutive tokens in the source.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidWindowSize` unless `window_size` is 2
    /// or 3; the source is not read in that case. Returns
    /// `AnalysisError::Io` if the source cannot be read.
    #[tracing::instrument(skip(self))]
    pub fn collocate(&self, window_size: usize) -> Result<FrequencyTable<NGram>, AnalysisError> {
        let size = WindowSize::try_from(window_size)?;
        let (tokens, _) = self.load_tokens()?;
        let table = count::collocate(&tokens, size);
        debug!(
            tokens = tokens.len(),
            windows = table.total(),
            distinct = table.len(),
            "collocate"
        );
        Ok(table)
    }

    /// Renders the most common words as a bar chart.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::word_count`].
    pub fn visual_word_count(&self, options: &ChartOptions) -> Result<String, AnalysisError> {
        let table = self.word_count()?;
        Ok(chart::render(&table.labelled(options.top_k), options))
    }

    /// Renders the most common phrases as a bar chart.
    ///
    /// Phrase labels are the tokens joined by `", "`.
    ///
    /// # Errors
    ///
    /// Same as [`Analyzer::collocate`].
    pub fn visual_collocate(
        &self,
        window_size: usize,
        options: &ChartOptions,
    ) -> Result<String, AnalysisError> {
        let table = self.collocate(window_size)?;
        Ok(chart::render(&table.labelled(options.top_k), options))
    }
}
