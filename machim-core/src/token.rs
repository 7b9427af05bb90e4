//! Token stream and segmentation seam
//!
//! The engine consumes an ordered sequence of (surface, byte offset) tokens.
//! The default segmenter produces extended grapheme clusters; a morphological
//! analyzer can be swapped in through the `Segmenter` trait as long as its
//! tokens tile the input.

use unicode_segmentation::UnicodeSegmentation;

/// One surface unit of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'t> {
    /// Surface form, borrowed from the input.
    pub surface: &'t str,
    /// Byte offset of the surface in the input.
    pub offset: usize,
}

impl<'t> Token<'t> {
    /// Byte offset one past the end of the surface.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.surface.len()
    }

    /// True when the surface consists of whitespace.
    ///
    /// Whitespace tokens occupy context-window positions but never carry
    /// table flags.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.surface.chars().all(char::is_whitespace) && !self.surface.is_empty()
    }
}

/// Produces the token stream the boundary engine scans.
pub trait Segmenter {
    /// Tokenize `text`. Tokens must be in order and tile the input exactly:
    /// concatenating the surfaces reproduces `text`.
    fn segment<'t>(&self, text: &'t str) -> Vec<Token<'t>>;
}

/// Default segmenter: one token per extended grapheme cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphemeSegmenter;

impl Segmenter for GraphemeSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<Token<'t>> {
        text.grapheme_indices(true)
            .map(|(offset, surface)| Token { surface, offset })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<Token<'_>> {
        GraphemeSegmenter.segment(text)
    }

    #[test]
    fn test_tokens_tile_the_input() {
        let text = "밥을 먹었다. ㅋㅋ 🇰🇷";
        let tokens = segment(text);
        let rebuilt: String = tokens.iter().map(|t| t.surface).collect();
        assert_eq!(rebuilt, text);
        let mut expected = 0;
        for token in &tokens {
            assert_eq!(token.offset, expected);
            expected = token.end();
        }
        assert_eq!(expected, text.len());
    }

    #[test]
    fn test_hangul_syllables_are_single_tokens() {
        let tokens = segment("먹었다");
        let surfaces: Vec<_> = tokens.iter().map(|t| t.surface).collect();
        assert_eq!(surfaces, ["먹", "었", "다"]);
    }

    #[test]
    fn test_flag_pair_is_one_token() {
        let tokens = segment("🇰🇷");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].surface, "🇰🇷");
    }

    #[test]
    fn test_crlf_is_one_whitespace_token() {
        let tokens = segment("다\r\n가");
        assert_eq!(tokens.len(), 3);
        assert!(tokens[1].is_whitespace());
        assert_eq!(tokens[1].surface, "\r\n");
    }

    #[test]
    fn test_whitespace_detection() {
        let tokens = segment("가 나");
        assert!(!tokens[0].is_whitespace());
        assert!(tokens[1].is_whitespace());
        assert!(!tokens[2].is_whitespace());
    }

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(segment("").is_empty());
    }
}
