//! Word n-gram extraction.
//!
//! Slides a window of two or three tokens across a token sequence with
//! stride 1. These windows are the collocation candidates.

use lexis_types::{NGram, Token, WindowSize};

/// Emits every window of `size` consecutive tokens, left to right.
///
/// For fewer than `size` tokens nothing is emitted.
/// For N tokens, exactly N - size + 1 windows are emitted.
///
/// # Example
///
/// ```
/// use lexis_core::analyzer::ngram::extract_windows;
/// use lexis_types::{Token, WindowSize};
///
/// let tokens: Vec<Token> = ["cat", "sat", "mat"].into_iter().map(Token::from).collect();
/// let mut windows = Vec::new();
/// extract_windows(&tokens, WindowSize::Bigram, |w| windows.push(w.len()));
///
/// assert_eq!(windows, [2, 2]); // (cat, sat), (sat, mat)
/// ```
#[inline(always)]
pub fn extract_windows<'t, F>(tokens: &'t [Token], size: WindowSize, mut callback: F)
where
    F: FnMut(&'t [Token]),
{
    extract_windows_with_pos(tokens, size, |window, _| callback(window));
}

/// Emits every window together with its starting token index.
#[inline]
pub fn extract_windows_with_pos<'t, F>(tokens: &'t [Token], size: WindowSize, mut callback: F)
where
    F: FnMut(&'t [Token], usize),
{
    let n = size.get();
    let mut start = 0usize;
    while start + n <= tokens.len() {
        callback(&tokens[start..start + n], start);
        start += 1;
    }
}

/// Emits each window as an owned [`NGram`].
#[inline]
pub fn extract_ngrams<F>(tokens: &[Token], size: WindowSize, mut callback: F)
where
    F: FnMut(NGram),
{
    extract_windows(tokens, size, |window| callback(NGram::from_window(window)));
}

/// Number of windows a sequence of `len` tokens yields.
///
/// Returns 0 when `len` is shorter than the window.
#[inline(always)]
pub const fn count_ngrams(len: usize, size: WindowSize) -> usize {
    len.saturating_sub(size.get() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<Token> {
        words.iter().copied().map(Token::from).collect()
    }

    #[test]
    fn bigrams_basic() {
        let toks = tokens(&["cat", "sat", "mat", "cat", "ran"]);
        let mut out = Vec::new();
        extract_ngrams(&toks, WindowSize::Bigram, |g| out.push(g));

        assert_eq!(
            out,
            [
                NGram::from(["cat", "sat"]),
                NGram::from(["sat", "mat"]),
                NGram::from(["mat", "cat"]),
                NGram::from(["cat", "ran"]),
            ]
        );
    }

    #[test]
    fn trigrams_basic() {
        let toks = tokens(&["one", "two", "three", "four"]);
        let mut out = Vec::new();
        extract_ngrams(&toks, WindowSize::Trigram, |g| out.push(g));

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], NGram::from(["one", "two", "three"]));
        assert_eq!(out[1], NGram::from(["two", "three", "four"]));
    }

    #[test]
    fn short_sequences_emit_nothing() {
        let mut n = 0usize;
        extract_windows(&tokens(&[]), WindowSize::Bigram, |_| n += 1);
        extract_windows(&tokens(&["solo"]), WindowSize::Bigram, |_| n += 1);
        extract_windows(&tokens(&["one", "two"]), WindowSize::Trigram, |_| n += 1);
        assert_eq!(n, 0);
    }

    #[test]
    fn exactly_one_window() {
        let mut out = Vec::new();
        extract_ngrams(&tokens(&["a1", "b2", "c3"]), WindowSize::Trigram, |g| out.push(g));
        assert_eq!(out, [NGram::from(["a1", "b2", "c3"])]);
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_ngrams(0, WindowSize::Bigram), 0);
        assert_eq!(count_ngrams(1, WindowSize::Bigram), 0);
        assert_eq!(count_ngrams(2, WindowSize::Bigram), 1);
        assert_eq!(count_ngrams(5, WindowSize::Bigram), 4);
        assert_eq!(count_ngrams(2, WindowSize::Trigram), 0);
        assert_eq!(count_ngrams(3, WindowSize::Trigram), 1);
        assert_eq!(count_ngrams(5, WindowSize::Trigram), 3);
    }

    #[test]
    fn extract_with_pos() {
        let toks = tokens(&["w0", "w1", "w2", "w3"]);
        let mut starts = Vec::new();
        extract_windows_with_pos(&toks, WindowSize::Bigram, |w, pos| {
            assert_eq!(w[0], toks[pos]);
            starts.push(pos);
        });
        assert_eq!(starts, [0, 1, 2]);
    }

    #[test]
    fn windows_borrow_from_input() {
        let toks = tokens(&["x", "y", "z"]);
        extract_windows(&toks, WindowSize::Bigram, |w| {
            let base = toks.as_ptr() as usize;
            let ptr = w.as_ptr() as usize;
            assert!(ptr >= base && ptr < base + toks.len() * size_of::<Token>());
        });
    }
}
