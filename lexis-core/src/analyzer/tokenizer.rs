//! Whitespace Splitter
//!
//! The first stage of the pipeline. It breaks raw text into word fragments on
//! runs of whitespace and hands each fragment to a callback, in order.
//!
//! ## What It Does
//!
//! Given raw input like `"The  cat\tsat.\n"`, it emits:
//!
//! ```ignore
//! ("The", 0)
//! ("cat", 1)
//! ("sat.", 2)
//! ```
//!
//! Fragments are slices of the input. Case and punctuation are untouched;
//! that is the normalizer's job.
//!
//! ## Whitespace
//!
//! A fragment boundary is any Unicode `White_Space` character plus the ASCII
//! information separators U+001C..=U+001F. Runs of boundaries never produce
//! empty fragments, and leading or trailing whitespace is ignored.

/// True for characters that separate word fragments.
#[inline(always)]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Streaming whitespace splitter.
///
/// Stateless and `Copy`; one instance can be reused for any number of inputs.
///
/// ## Example
///
/// ```
/// use lexis_core::analyzer::tokenizer::Tokenizer;
///
/// let mut fragments = Vec::new();
/// Tokenizer::new().split("hello   world", |text, _pos| fragments.push(text));
///
/// assert_eq!(fragments, ["hello", "world"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new splitter.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Splits `raw` on whitespace runs and emits `(fragment, position)`.
    ///
    /// Positions count emitted fragments from zero.
    #[inline]
    pub fn split<'r, F>(&self, raw: &'r str, mut emit: F)
    where
        F: FnMut(&'r str, usize),
    {
        for (pos, fragment) in raw.split(is_separator).filter(|f| !f.is_empty()).enumerate() {
            emit(fragment, pos);
        }
    }

    /// Counts fragments without collecting them.
    #[inline]
    pub fn count(&self, raw: &str) -> usize {
        let mut n = 0usize;
        self.split(raw, |_, _| n += 1);
        n
    }
}
