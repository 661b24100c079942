//! Core types for the Lexis text analysis toolkit.
//!
//! This crate provides the value types shared between the analysis
//! pipeline and its callers. Keeping them separate ensures:
//!
//! - **Owned values**: Tokens and n-grams never borrow from the source text
//! - **Cross-crate compatibility**: Core and any front end share the same types
//! - **Clean boundaries**: No pipeline logic lives here

#![warn(missing_docs)]

use core::borrow::Borrow;
use core::fmt;
use std::path::PathBuf;

use smallvec::SmallVec;

/// A single normalized word.
///
/// Tokens are lowercase, free of the stripped punctuation set, and never
/// empty. They own their text; nothing points back into the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Token(Box<str>);

impl Token {
    /// Creates a token from already-normalized text.
    ///
    /// The caller is responsible for the normalization invariants; the
    /// normalizer is the only producer inside this workspace.
    #[inline]
    pub fn new(text: impl Into<Box<str>>) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "token: empty text");
        Self(text)
    }

    /// Returns the token text.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token length in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for tokens produced by the normalizer.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Token {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of consecutive tokens captured by an n-gram.
///
/// Only bigrams and trigrams are supported. Any other size is rejected by
/// [`WindowSize::try_from`] with [`AnalysisError::InvalidWindowSize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WindowSize {
    /// Two-word phrases.
    Bigram = 2,
    /// Three-word phrases.
    Trigram = 3,
}

impl WindowSize {
    /// Returns the window length in tokens.
    #[must_use]
    #[inline(always)]
    pub const fn get(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = AnalysisError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            2 => Ok(WindowSize::Bigram),
            3 => Ok(WindowSize::Trigram),
            _ => Err(AnalysisError::InvalidWindowSize { size }),
        }
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// An ordered run of consecutive tokens.
///
/// Equality is positional: `("a", "b")` and `("b", "a")` are different
/// n-grams. Up to three tokens are stored inline without a heap allocation
/// for the outer sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NGram(SmallVec<[Token; 3]>);

impl NGram {
    /// Creates an n-gram by cloning the tokens of a window.
    #[inline]
    pub fn from_window(window: &[Token]) -> Self {
        Self(window.iter().cloned().collect())
    }

    /// Returns the tokens in order.
    #[inline(always)]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Returns the number of tokens.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the n-gram holds no tokens.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins the tokens with `", "`, the label format used in charts.
    pub fn label(&self) -> String {
        let mut out = String::with_capacity(self.0.iter().map(|t| t.len() + 2).sum());
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(token.as_str());
        }
        out
    }
}

impl<const N: usize> From<[&str; N]> for NGram {
    fn from(words: [&str; N]) -> Self {
        Self(words.into_iter().map(Token::from).collect())
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Errors surfaced by analysis queries.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The text source could not be read.
    #[error("failed to read text source {}: {source}", .path.display())]
    Io {
        /// The source path as given at construction.
        path: PathBuf,
        /// The underlying I/O failure, unchanged.
        #[source]
        source: std::io::Error,
    },
    /// A collocation window other than 2 or 3 was requested.
    #[error("invalid window size {size}: expected 2 or 3")]
    InvalidWindowSize {
        /// The rejected size.
        size: usize,
    },
}

/// Display options for rendered bar charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Chart heading.
    pub title: String,
    /// Label for the count axis.
    pub x_label: String,
    /// Label for the category axis.
    pub y_label: String,
    /// Maximum number of bars. Default: 10.
    pub top_k: usize,
    /// Width of the longest bar in characters. Default: 40.
    pub width: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: "Count".to_owned(),
            y_label: String::new(),
            top_k: 10,
            width: 40,
        }
    }
}

impl ChartOptions {
    /// Options for the top-words chart.
    pub fn words() -> Self {
        Self {
            title: "Top 10 most common words".to_owned(),
            x_label: "Word Count".to_owned(),
            y_label: "Word".to_owned(),
            ..Default::default()
        }
    }

    /// Options for the top-phrases chart.
    pub fn phrases() -> Self {
        Self {
            title: "Top 10 most common phrases".to_owned(),
            x_label: "Word Count".to_owned(),
            y_label: "Phrase".to_owned(),
            ..Default::default()
        }
    }

    /// Returns these options with a different bar limit.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}
