//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw text into fragments on whitespace runs
//! - **Normalizer**: Lowercases, strips punctuation and drops stopwords
//! - **Stopwords**: The fixed English stopword list
//! - **NGram**: Extracts windows of consecutive tokens

pub mod ngram;
pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{NormalizeCounts, TokenNormalizer};
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
