//! Rule-table sentence boundary detection for Korean
//!
//! Korean marks sentence ends with verb-final endings (다/요/죠, the
//! nominalizers 함/음) at least as often as with terminal punctuation, so
//! punctuation-driven splitters miss most boundaries in informal text. This
//! crate scans the grapheme stream for candidate endings, validates each one
//! against per-category rule tables keyed by the surrounding morphemes, and
//! cuts the input into byte-addressed sentence spans.
//!
//! Detection is heuristic and dictionary-driven; no model files or runtime
//! resources are needed, and the shared tables are built once per process.
//!
//! # Example
//!
//! ```rust
//! let text = "밥을 먹었다. 진짜 맛있었다";
//! let sentences = machim_core::split_into_sentences(text);
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].text, "밥을 먹었다.");
//! assert_eq!(sentences[1].text, "진짜 맛있었다");
//! assert_eq!(&text[sentences[1].start..sentences[1].end], "진짜 맛있었다");
//! ```

#![warn(missing_docs)]

pub mod category;
pub mod emoji;
mod enclosure;
pub mod engine;
mod postprocess;
pub mod splitter;
pub mod table;
mod tables;
pub mod token;

pub use category::{EndingCategory, PositionRequirement};
pub use emoji::is_continuation;
pub use engine::{classify, Boundary, BoundaryKind};
pub use splitter::{
    split_into_sentences, Sentence, SplitConfig, SplitConfigBuilder, Splitter,
};
pub use table::ClassificationTable;
pub use token::{GraphemeSegmenter, Segmenter, Token};
