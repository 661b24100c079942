//! Word frequency and collocation analysis for plain-text documents.
//!
//! ```text
//! raw text -> Tokenizer -> TokenNormalizer -> count_tokens | collocate -> FrequencyTable
//! ```
//!
//! The [`Analyzer`] facade ties the stages to a [`TextSource`]:
//!
//! ```no_run
//! use lexis_core::Analyzer;
//!
//! let analyzer = Analyzer::new("speech.txt");
//! for entry in analyzer.word_count()?.top(10) {
//!     println!("{} {}", entry.key, entry.count);
//! }
//! for entry in analyzer.collocate(3)?.top(10) {
//!     println!("{} {}", entry.key, entry.count);
//! }
//! # Ok::<(), lexis_types::AnalysisError>(())
//! ```

pub mod analyzer;
pub mod chart;
pub mod corpus;
pub mod count;
pub mod source;

pub use corpus::{Analyzer, CorpusStats};
pub use count::{FrequencyEntry, FrequencyTable};
pub use source::{FileSource, StringSource, TextSource};

pub use lexis_types::{AnalysisError, ChartOptions, NGram, Token, WindowSize};
