//! Splitter orchestration and sentence materialization
//!
//! Composes segmentation, boundary detection, and the colloquial template
//! pass, then cuts the input into trimmed sentence spans. Spans carry byte
//! offsets into the original text, and concatenating them with the original
//! inter-span text reproduces the input exactly.

use std::collections::BTreeMap;

use crate::engine::{self, Boundary};
use crate::postprocess;
use crate::token::{GraphemeSegmenter, Segmenter, Token};

/// Splitting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    pub(crate) enclosure_protection: bool,
    pub(crate) colloquial_templates: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            enclosure_protection: true,
            colloquial_templates: true,
        }
    }
}

impl SplitConfig {
    /// Create a builder with the default options.
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::default()
    }

    /// Whether boundaries inside quotes/brackets are suppressed.
    pub fn enclosure_protection(&self) -> bool {
        self.enclosure_protection
    }

    /// Whether spoken-register templates force additional boundaries.
    pub fn colloquial_templates(&self) -> bool {
        self.colloquial_templates
    }
}

/// Builder for [`SplitConfig`].
#[derive(Debug, Clone, Default)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
}

impl SplitConfigBuilder {
    /// Suppress boundaries inside quotes and brackets (default: true).
    pub fn enclosure_protection(mut self, enabled: bool) -> Self {
        self.config.enclosure_protection = enabled;
        self
    }

    /// Force boundaries on spoken-register templates (default: true).
    pub fn colloquial_templates(mut self, enabled: bool) -> Self {
        self.config.colloquial_templates = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SplitConfig {
        self.config
    }
}

/// One sentence of the input, with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sentence<'t> {
    /// Sentence text with surrounding whitespace trimmed.
    pub text: &'t str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

/// Reusable sentence splitter.
///
/// Holds no per-document state; one instance may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// Create a splitter with the given configuration.
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Split `text` using the default grapheme segmenter.
    pub fn split<'t>(&self, text: &'t str) -> Vec<Sentence<'t>> {
        self.split_tokens(text, &GraphemeSegmenter.segment(text))
    }

    /// Split `text` given an externally produced token stream.
    ///
    /// The tokens must tile `text`; see [`crate::Segmenter`].
    pub fn split_tokens<'t>(&self, text: &'t str, tokens: &[Token<'t>]) -> Vec<Sentence<'t>> {
        materialize(text, self.boundary_map(tokens).into_keys())
    }

    /// The accepted boundaries for `text`, with kind and category metadata.
    pub fn boundaries(&self, text: &str) -> Vec<Boundary> {
        self.boundary_map(&GraphemeSegmenter.segment(text))
            .into_values()
            .collect()
    }

    fn boundary_map(&self, tokens: &[Token<'_>]) -> BTreeMap<usize, Boundary> {
        let mut accepted: BTreeMap<usize, Boundary> =
            engine::detect(tokens, self.config.enclosure_protection)
                .into_iter()
                .map(|boundary| (boundary.offset, boundary))
                .collect();
        if self.config.colloquial_templates {
            postprocess::force_boundaries(tokens, &mut accepted);
        }
        accepted
    }
}

/// Split `text` into sentences with the default configuration.
pub fn split_into_sentences(text: &str) -> Vec<Sentence<'_>> {
    Splitter::default().split(text)
}

/// Cut `text` at the boundary offsets and trim each piece.
///
/// Pieces that trim to nothing are dropped. When nothing survives (empty or
/// boundary-less whitespace input) the whole input is one sentence.
fn materialize<'t>(
    text: &'t str,
    boundaries: impl IntoIterator<Item = usize>,
) -> Vec<Sentence<'t>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for cut in boundaries
        .into_iter()
        .filter(|&offset| offset < text.len())
        .chain(std::iter::once(text.len()))
    {
        if cut > start {
            if let Some(sentence) = trimmed_span(text, start, cut) {
                sentences.push(sentence);
            }
            start = cut;
        }
    }
    if sentences.is_empty() {
        return vec![Sentence {
            text,
            start: 0,
            end: text.len(),
        }];
    }
    sentences
}

fn trimmed_span(text: &str, start: usize, end: usize) -> Option<Sentence<'_>> {
    let piece = &text[start..end];
    let from_start = piece.len() - piece.trim_start().len();
    let from_end = piece.len() - piece.trim_end().len();
    let trimmed_start = start + from_start;
    let trimmed_end = end - from_end;
    (trimmed_start < trimmed_end).then(|| Sentence {
        text: &text[trimmed_start..trimmed_end],
        start: trimmed_start,
        end: trimmed_end,
    })
}
