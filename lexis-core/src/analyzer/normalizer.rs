//! Token normalizer.
//!
//! Turns raw text into the token sequence every counter consumes:
//!
//! 1. Split on whitespace runs ([`Tokenizer`])
//! 2. Lowercase each fragment
//! 3. Remove every character of [`PUNCTUATION`], anywhere in the fragment
//! 4. Drop fragments that end up empty, a lone space, or a stopword
//!
//! Each step is a pure function of its fragment, so the same text always
//! yields the same tokens.

use lexis_types::Token;

use crate::analyzer::stopwords::StopwordFilter;
use crate::analyzer::tokenizer::Tokenizer;

/// Characters removed from every fragment.
pub const PUNCTUATION: [char; 10] = [',', '.', ';', ':', '(', ')', '!', ' ', '"', '&'];

#[inline(always)]
const fn is_punctuation(c: char) -> bool {
    matches!(c, ',' | '.' | ';' | ':' | '(' | ')' | '!' | ' ' | '"' | '&')
}

/// Counts produced while normalizing one text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeCounts {
    /// Whitespace-separated fragments seen.
    pub fragments: usize,
    /// Fragments that survived as tokens.
    pub tokens: usize,
}

impl NormalizeCounts {
    /// Fragments dropped as punctuation-only or stopwords.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.fragments - self.tokens
    }
}

/// Text normalizer with a fixed punctuation set and stopword list.
///
/// # Examples
///
/// ```
/// use lexis_core::analyzer::TokenNormalizer;
///
/// let normalizer = TokenNormalizer::default();
/// let tokens = normalizer.normalize("The cat sat on the mat.");
///
/// let words: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
/// assert_eq!(words, ["cat", "sat", "mat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenNormalizer {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
}

impl TokenNormalizer {
    /// Creates a normalizer over the fixed stopword list.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::new(),
        }
    }

    /// Writes the lowercase form of `fragment` into `out`, replacing its contents.
    #[inline]
    pub fn lowercase_into(fragment: &str, out: &mut String) {
        out.clear();
        if fragment.is_ascii() {
            out.reserve(fragment.len());
            out.extend(fragment.bytes().map(|b| b.to_ascii_lowercase() as char));
        } else {
            // Full mapping, including context-sensitive final sigma.
            out.push_str(&fragment.to_lowercase());
        }
    }

    /// Removes every [`PUNCTUATION`] character from `word` in place.
    #[inline]
    pub fn strip_punctuation(word: &mut String) {
        if word.contains(is_punctuation) {
            word.retain(|c| !is_punctuation(c));
        }
    }

    /// True when a stripped fragment carries no signal.
    #[inline]
    pub fn is_noise(&self, word: &str) -> bool {
        word.is_empty() || word == " " || self.stopwords.is_stopword(word)
    }

    /// Runs steps 2-4 on one fragment.
    ///
    /// On `true`, `buf` holds the token text. On `false` the fragment was
    /// dropped and `buf` contents are unspecified.
    #[inline]
    pub fn normalize_fragment(&self, fragment: &str, buf: &mut String) -> bool {
        Self::lowercase_into(fragment, buf);
        Self::strip_punctuation(buf);
        !self.is_noise(buf)
    }

    /// Normalizes `raw` and appends the tokens to `out`.
    ///
    /// Existing contents of `out` are kept, which lets callers reuse one
    /// vector across texts after clearing it.
    pub fn normalize_into(&self, raw: &str, out: &mut Vec<Token>) -> NormalizeCounts {
        let mut counts = NormalizeCounts::default();
        let mut buf = String::with_capacity(32);

        self.tokenizer.split(raw, |fragment, _| {
            counts.fragments += 1;
            if self.normalize_fragment(fragment, &mut buf) {
                out.push(Token::new(buf.as_str()));
                counts.tokens += 1;
            }
        });

        counts
    }

    /// Normalizes `raw` into a new token sequence.
    pub fn normalize(&self, raw: &str) -> Vec<Token> {
        let mut out = Vec::new();
        self.normalize_into(raw, &mut out);
        out
    }
}
