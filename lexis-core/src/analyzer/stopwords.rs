//! Fixed English stopword list.
//!
//! Matching is exact and case-sensitive; callers lowercase and strip
//! punctuation first, so in practice the filter is case-insensitive.

use rustc_hash::FxHashSet;

/// Function words, pronouns and contractions dropped from analysis.
///
/// `"--"` and `"â€”"` (a UTF-8 em dash decoded as Windows-1252) are kept
/// because they show up as standalone fragments in real documents.
#[rustfmt::skip]
pub const STOPWORDS: &[&str] = &[
    "the", "their", "there", "that", "and", "of",
    "to", "a", "in", "this", "it", "be", "we", "is",
    "as", "have", "--", "they", "i", "on", "will",
    "our", "are", "for", "he", "who", "has",
    "than", "but", "what", "from", "by", "was",
    "if", "at", "or", "so", "when", "with", "you",
    "not", "it's", "his", "an", "those", "me",
    "my", "can", "get", "going", "us", "your", "no",
    "been", "over", "into", "every", "these", "did",
    "also", "were", "any", "like", "then", "while",
    "because", "here", "had", "its", "more", "most",
    "â€”", "do", "am", "all", "i'm", "which",
    "her", "them", "being",
];

/// Set lookup over [`STOPWORDS`].
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<&'static str>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Builds the filter from the fixed list.
    pub fn new() -> Self {
        Self {
            words: STOPWORDS.iter().copied().collect(),
        }
    }

    /// True when `word` is on the list.
    #[inline(always)]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for the fixed list.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
