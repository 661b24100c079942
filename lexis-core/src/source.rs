//! Text sources.
//!
//! A source is fixed when the analyzer is built and read once per query.
//! Reads are never cached, so an edited file is picked up by the next query.

use std::fs;
use std::path::{Path, PathBuf};

use lexis_types::AnalysisError;

/// Supplies the raw text of one document.
pub trait TextSource {
    /// Reads the whole document into a string.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the document cannot be read or is not
    /// valid UTF-8.
    fn read(&self) -> Result<String, AnalysisError>;
}

/// A UTF-8 text file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for `path`. The file is not touched until read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path given at construction.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn read(&self) -> Result<String, AnalysisError> {
        fs::read_to_string(&self.path).map_err(|source| AnalysisError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Text held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    /// Wraps `text` as a source.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StringSource {
    #[inline]
    fn read(&self) -> Result<String, AnalysisError> {
        Ok(self.text.clone())
    }
}

impl<S: TextSource + ?Sized> TextSource for &S {
    fn read(&self) -> Result<String, AnalysisError> {
        (**self).read()
    }
}
