//! Word and phrase frequency counting.
//!
//! Both counters consume a normalized token sequence and produce a
//! [`FrequencyTable`]. Counting is exact-match on the token text.
//!
//! Conservation:
//! - unigram counts sum to the number of tokens
//! - n-gram counts sum to `max(0, tokens - n + 1)`

mod table;

pub use table::{FrequencyCounter, FrequencyEntry, FrequencyTable};

use lexis_types::{NGram, Token, WindowSize};

use crate::analyzer::ngram::{count_ngrams, extract_ngrams};

/// Counts occurrences of each distinct token.
pub fn count_tokens(tokens: &[Token]) -> FrequencyTable<Token> {
    tokens.iter().cloned().collect()
}

/// Counts every window of `size` consecutive tokens.
///
/// Yields an empty table when fewer than `size` tokens are given.
pub fn collocate(tokens: &[Token], size: WindowSize) -> FrequencyTable<NGram> {
    let mut counter = FrequencyCounter::with_capacity(count_ngrams(tokens.len(), size));
    extract_ngrams(tokens, size, |ngram| counter.add(ngram));
    counter.finish()
}
