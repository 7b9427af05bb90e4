//! Colloquial template force-splits
//!
//! The flag grammar is conservative: spoken-register endings like "너무 가다"
//! followed by more text are often vetoed by the lookahead window. The rule
//! data patches the frequent cases with literal phrase templates of the shape
//! `"{word} {stem}{ending} "`, where the word comes from the closed
//! preceding-word class and the stem from the polite-ending stem sets. Every
//! template occurrence forces a boundary immediately after the ending.
//!
//! Materializing the Cartesian product yields 38 553 strings; the scanner
//! below matches the same language incrementally over the token stream and is
//! checked against the materialized lists in the tests.

use std::collections::BTreeMap;

use crate::category::EndingCategory;
use crate::engine::{Boundary, BoundaryKind};
use crate::tables;
use crate::token::Token;

/// Separator the templates are built with. Other whitespace does not match.
const TEMPLATE_SEPARATOR: &str = " ";

/// Scan for template occurrences and force their boundaries into `accepted`.
pub(crate) fn force_boundaries(
    tokens: &[Token<'_>],
    accepted: &mut BTreeMap<usize, Boundary>,
) {
    for index in 0..tokens.len() {
        let Some(category) = template_ending(tokens, index) else {
            continue;
        };
        let boundary = Boundary {
            offset: tokens[index].end(),
            kind: BoundaryKind::Strong,
            category,
        };
        accepted.entry(boundary.offset).or_insert(boundary);
    }
}

/// Checks whether the token at `index` closes a template occurrence:
/// `[word ending in a before-class member] [space] [stem] [ending] [space]`.
fn template_ending(tokens: &[Token<'_>], index: usize) -> Option<EndingCategory> {
    let (category, stems) = match tokens[index].surface {
        "다" => (EndingCategory::EojeolDa, tables::yo_stems()),
        "요" => (EndingCategory::Yo, tables::yo_stems()),
        "죠" => (EndingCategory::Jyo, tables::jyo_stems()),
        _ => return None,
    };
    // Trailing separator: the templates never match at end of input.
    if tokens.get(index + 1).map(|t| t.surface) != Some(TEMPLATE_SEPARATOR) {
        return None;
    }
    // The ending's eojeol is exactly [stem][ending].
    let stem = tokens.get(index.checked_sub(1)?)?.surface;
    if !stems.contains(stem) {
        return None;
    }
    let separator = index.checked_sub(2)?;
    if tokens[separator].surface != TEMPLATE_SEPARATOR {
        return None;
    }
    // Word before the separator, scanned back to the previous whitespace.
    let mut start = separator;
    while start > 0 && !tokens[start - 1].is_whitespace() {
        start -= 1;
    }
    if start == separator {
        return None;
    }
    let word_tokens = &tokens[start..separator];
    has_before_suffix(word_tokens).then_some(category)
}

/// True when the word ends in a member of the preceding-word class.
fn has_before_suffix(word_tokens: &[Token<'_>]) -> bool {
    let before = tables::before_words();
    let mut suffix = String::new();
    for token in word_tokens.iter().rev().take(max_before_graphemes()) {
        suffix.insert_str(0, token.surface);
        if before.contains(suffix.as_str()) {
            return true;
        }
    }
    false
}

fn max_before_graphemes() -> usize {
    use std::sync::OnceLock;
    static MAX: OnceLock<usize> = OnceLock::new();
    *MAX.get_or_init(|| {
        tables::before_words()
            .iter()
            .map(|word| word.chars().count())
            .max()
            .unwrap_or(0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{GraphemeSegmenter, Segmenter};

    fn forced_offsets(text: &str) -> Vec<usize> {
        let tokens = GraphemeSegmenter.segment(text);
        let mut accepted = BTreeMap::new();
        force_boundaries(&tokens, &mut accepted);
        accepted.into_keys().collect()
    }

    /// Offsets a literal substring scan over the materialized templates finds.
    fn template_scan_offsets(text: &str) -> Vec<usize> {
        let mut offsets = std::collections::BTreeSet::new();
        for template in materialized_templates() {
            let mut from = 0;
            while let Some(found) = text[from..].find(template.as_str()) {
                let start = from + found;
                // Boundary right after the ending, before the trailing space.
                offsets.insert(start + template.len() - 1);
                from = start + template.chars().next().map_or(1, char::len_utf8);
            }
        }
        offsets.into_iter().collect()
    }

    fn materialized_templates() -> Vec<String> {
        let mut templates = Vec::new();
        for word in tables::before_words() {
            for stem in tables::yo_stems() {
                templates.push(format!("{word} {stem}다 "));
                templates.push(format!("{word} {stem}요 "));
            }
            for stem in tables::jyo_stems() {
                templates.push(format!("{word} {stem}죠 "));
            }
        }
        templates
    }

    #[test]
    fn test_template_count_matches_rule_data() {
        assert_eq!(materialized_templates().len(), 8236 + 8236 + 22081);
    }

    #[test]
    fn test_matcher_agrees_with_materialized_templates() {
        let samples = [
            "난 너무 가다 싶었다",
            "난 너무 가다 하고 싶었다",
            "정말 그렇게 하죠 싶어서",
            "조금만 더 가다 보자",
            "너무 가다",
            "너무  가다 멀다",
            "너무 가다를 반복했다",
            "아무 관계 없는 문장",
            "나 해ver 졌다 아무",
        ];
        for text in samples {
            assert_eq!(
                forced_offsets(text),
                template_scan_offsets(text),
                "matcher diverged on {text:?}"
            );
        }
    }

    #[test]
    fn test_known_template_forces_a_boundary() {
        let offsets = forced_offsets("난 너무 가다 하고 싶었다");
        assert_eq!(offsets, vec!["난 너무 가다".len()]);
    }

    #[test]
    fn test_longer_word_matches_by_suffix() {
        // 어머니 ends in 니, not a before-class word as a whole, but the
        // literal templates only see the characters before the space.
        assert_eq!(
            forced_offsets("어머니 가다 말다"),
            template_scan_offsets("어머니 가다 말다")
        );
    }

    #[test]
    fn test_no_trailing_space_means_no_match() {
        assert!(forced_offsets("난 너무 가다").is_empty());
    }

    #[test]
    fn test_double_space_breaks_the_template() {
        assert!(forced_offsets("너무  가다 멀다").is_empty());
    }
}
