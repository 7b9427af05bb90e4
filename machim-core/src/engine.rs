//! Boundary classification engine
//!
//! Scans the token stream for candidate sentence-final endings, validates each
//! against its category table and context window, and emits the accepted
//! boundary set. The window reaches one token back and three tokens forward;
//! whitespace tokens occupy window positions but carry no flags, which is what
//! makes the `NEXT1`/`NEXT2` distances line up with spaced constructions like
//! "다 하고".

use std::collections::BTreeMap;

use crate::category::{EndingCategory, PositionRequirement};
use crate::emoji;
use crate::enclosure::EnclosureTracker;
use crate::table::ClassificationTable;
use crate::tables;
use crate::token::Token;

/// Surfaces that open a `SentenceBreak` candidate.
const TERMINAL_PUNCTUATION: &[&str] = &[".", "!", "?", "…", "~"];

/// How much evidence backed an accepted boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundaryKind {
    /// A validated stem preceded the ending.
    Strong,
    /// Terminal punctuation without stem evidence (foreign text, digits).
    Weak,
}

/// An accepted sentence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Boundary {
    /// Byte offset one past the last character of the sentence, after
    /// extension over trailing continuation characters.
    pub offset: usize,
    /// Evidence strength.
    pub kind: BoundaryKind,
    /// Category that accepted the boundary.
    pub category: EndingCategory,
}

/// Positional evidence observed for a candidate ending in its context window.
///
/// Pure and total: every input yields a flag set, unknown morphemes contribute
/// nothing. `PREV` reports that the previous morpheme validates the category
/// (table stems for most categories, the ham/um sound classes for `Eomi`);
/// `NEXT`/`NEXT1`/`NEXT2` report clause-extending morphemes one, two, and
/// three tokens ahead; `CONT` reports that the candidate itself is a
/// continuation character.
pub fn classify(
    category: EndingCategory,
    candidate: &str,
    prev: Option<&str>,
    next: Option<&str>,
    next_plus1: Option<&str>,
    next_plus2: Option<&str>,
) -> PositionRequirement {
    let table = ClassificationTable::global();
    let mut evidence = PositionRequirement::empty();

    if let Some(prev) = prev {
        let validated = match category {
            EndingCategory::Eomi => match candidate {
                "함" => tables::ham_preceders().contains(prev),
                "음" => tables::um_preceders().contains(prev),
                _ => false,
            },
            _ => table.validates_prev(category, prev),
        };
        if validated {
            evidence |= PositionRequirement::PREV;
        }
    }
    for (surface, flag) in [
        (next, PositionRequirement::NEXT),
        (next_plus1, PositionRequirement::NEXT1),
        (next_plus2, PositionRequirement::NEXT2),
    ] {
        if let Some(surface) = surface {
            if table.lookup(category, surface).contains(flag) {
                evidence |= flag;
            }
        }
    }
    if table.is_common_continuation(candidate) || emoji::is_continuation(candidate) {
        evidence |= PositionRequirement::CONT;
    }
    evidence
}

/// Detect all boundaries in `tokens`. Returned sorted by offset, deduplicated.
pub(crate) fn detect(tokens: &[Token<'_>], enclosure_protection: bool) -> Vec<Boundary> {
    let table = ClassificationTable::global();
    let mut tracker = enclosure_protection.then(EnclosureTracker::new);
    let mut accepted: BTreeMap<usize, Boundary> = BTreeMap::new();
    let mut suppressed: Vec<(Boundary, u32)> = Vec::new();

    for index in 0..tokens.len() {
        if let Some(tracker) = tracker.as_mut() {
            tracker.observe(
                tokens[index].surface,
                surface_at(tokens, index, -1),
                surface_at(tokens, index, 1),
            );
        }
        let Some((category, kind)) = decide(tokens, index) else {
            continue;
        };
        let boundary = Boundary {
            offset: extended_end(table, tokens, index),
            kind,
            category,
        };
        if let Some(episode) = tracker.as_ref().and_then(EnclosureTracker::current_episode) {
            suppressed.push((boundary, episode));
            continue;
        }
        accepted.entry(boundary.offset).or_insert(boundary);
    }

    if let Some(tracker) = tracker {
        let unclosed = tracker.into_unclosed();
        for (boundary, episode) in suppressed {
            if unclosed.contains(&episode) {
                accepted.entry(boundary.offset).or_insert(boundary);
            }
        }
    }

    accepted.into_values().collect()
}

/// Category dispatch and acceptance for the token at `index`.
///
/// Categories are tried in fixed precedence order: `SentenceBreak`, then
/// `Eomi`, then the two "다" categories (eojeol-final falls through to
/// mid-eojeol when the stem gate fails), then "요"/"죠". A lookahead veto is
/// final and does not fall through.
fn decide(tokens: &[Token<'_>], index: usize) -> Option<(EndingCategory, BoundaryKind)> {
    let surface = tokens[index].surface;
    let prev = surface_at(tokens, index, -1);
    let next = surface_at(tokens, index, 1);
    let next1 = surface_at(tokens, index, 2);
    let next2 = surface_at(tokens, index, 3);

    if TERMINAL_PUNCTUATION.contains(&surface) {
        if surface == "." && is_digit_run(prev) && is_digit_run(next) {
            return None;
        }
        let evidence = classify(EndingCategory::SentenceBreak, surface, prev, next, next1, next2);
        if evidence.intersects(PositionRequirement::LOOKAHEAD) {
            return None;
        }
        let kind = if evidence.contains(PositionRequirement::PREV) {
            BoundaryKind::Strong
        } else {
            BoundaryKind::Weak
        };
        return Some((EndingCategory::SentenceBreak, kind));
    }

    let categories: &[EndingCategory] = match surface {
        "함" | "음" => &[EndingCategory::Eomi],
        "다" => {
            let eojeol_final = next.map_or(true, is_whitespace_surface);
            if eojeol_final {
                &[EndingCategory::EojeolDa, EndingCategory::MorphDa]
            } else {
                &[EndingCategory::MorphDa]
            }
        }
        "요" => &[EndingCategory::Yo],
        "죠" => &[EndingCategory::Jyo],
        _ => return None,
    };

    for &category in categories {
        let evidence = classify(category, surface, prev, next, next1, next2);
        if !evidence.contains(PositionRequirement::PREV) {
            // No stem support in this category; try the next one.
            continue;
        }
        if evidence.intersects(PositionRequirement::LOOKAHEAD) {
            return None;
        }
        return Some((category, BoundaryKind::Strong));
    }
    None
}

/// Extends the boundary over trailing continuation characters.
fn extended_end(
    table: &ClassificationTable,
    tokens: &[Token<'_>],
    index: usize,
) -> usize {
    let mut end = tokens[index].end();
    for token in &tokens[index + 1..] {
        if table.is_common_continuation(token.surface) || emoji::is_continuation(token.surface) {
            end = token.end();
        } else {
            break;
        }
    }
    end
}

fn surface_at<'t>(tokens: &[Token<'t>], index: usize, delta: isize) -> Option<&'t str> {
    let target = index.checked_add_signed(delta)?;
    tokens.get(target).map(|token| token.surface)
}

fn is_whitespace_surface(surface: &str) -> bool {
    !surface.is_empty() && surface.chars().all(char::is_whitespace)
}

fn is_digit_run(surface: Option<&str>) -> bool {
    surface.is_some_and(|s| !s.is_empty() && s.chars().all(|ch| ch.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{GraphemeSegmenter, Segmenter};

    fn boundaries(text: &str) -> Vec<Boundary> {
        detect(&GraphemeSegmenter.segment(text), true)
    }

    #[test]
    fn test_validated_stem_accepts_boundary() {
        let found = boundaries("밥을 먹었다.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, "밥을 먹었다.".len());
        assert_eq!(found[0].kind, BoundaryKind::Strong);
    }

    #[test]
    fn test_connective_da_is_not_a_boundary() {
        // 먹다가: the "가" one token ahead carries NEXT and vetoes the split.
        let found = boundaries("먹다가 쉬었다.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, "먹다가 쉬었다.".len());
    }

    #[test]
    fn test_quotative_constructions_keep_the_clause_open() {
        // 간다고: NEXT veto on "고".
        assert_eq!(boundaries("간다고 말했잖아").len(), 0);
        // 갔다 하면: NEXT1 veto on "하" two tokens ahead.
        let found = boundaries("갔다 하면 좋겠다");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, "갔다 하면 좋겠다".len());
    }

    #[test]
    fn test_eojeol_final_da_falls_through_to_morph_table() {
        // 맵 is a stem only in the larger mid-eojeol table.
        let found = boundaries("이건 정말 맵다");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, EndingCategory::MorphDa);
    }

    #[test]
    fn test_polite_endings_split() {
        let yo = boundaries("정말 좋아요");
        assert_eq!(yo.len(), 1);
        assert_eq!(yo[0].category, EndingCategory::Yo);

        let jyo = boundaries("그렇게 하죠");
        assert_eq!(jyo.len(), 1);
        assert_eq!(jyo[0].category, EndingCategory::Jyo);
    }

    #[test]
    fn test_nominalized_endings_validate_by_sound_class() {
        // 좋 is in the um set, so 좋음 ends a sentence.
        let found = boundaries("정말 좋음");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, EndingCategory::Eomi);
        // 마 is not, so 마음 is just a noun.
        assert_eq!(boundaries("마음").len(), 0);
    }

    #[test]
    fn test_nominalized_ending_with_particle_is_vetoed() {
        // 좋음이: the particle "이" carries NEXT in the eomi table.
        assert_eq!(boundaries("정말 좋음이 틀림없다만").len(), 0);
    }

    #[test]
    fn test_punctuation_extends_the_boundary() {
        let found = boundaries("정말요?!");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, "정말요?!".len());
    }

    #[test]
    fn test_punctuation_splits_without_stem_evidence() {
        let found = boundaries("Hello. World.");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].kind, BoundaryKind::Weak);
    }

    #[test]
    fn test_decimal_dot_is_not_a_boundary() {
        assert_eq!(boundaries("원주율은 3.14159").len(), 0);
    }

    #[test]
    fn test_emoji_glues_to_the_sentence() {
        let text = "그는 갔어요.🇰🇷";
        let found = boundaries(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, text.len());
    }

    #[test]
    fn test_jamo_run_extends_the_boundary() {
        let text = "진짜 좋아요ㅋㅋㅋ";
        let found = boundaries(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, text.len());
    }

    #[test]
    fn test_boundaries_inside_closed_quotes_are_suppressed() {
        let found = boundaries("그는 \"밥을 먹었다.\" 라고 말했다.");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].offset, "그는 \"밥을 먹었다.\" 라고 말했다.".len());
    }

    #[test]
    fn test_unbalanced_quote_releases_its_boundaries() {
        let found = detect(
            &GraphemeSegmenter.segment("\"밥을 먹었다. 그리고 더 있다."),
            true,
        );
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_enclosure_protection_can_be_disabled() {
        let tokens = GraphemeSegmenter.segment("그는 \"밥을 먹었다.\" 라고 말했다.");
        assert_eq!(detect(&tokens, false).len(), 2);
    }

    #[test]
    fn test_classify_reports_positional_evidence() {
        let evidence = classify(
            EndingCategory::MorphDa,
            "다",
            Some("었"),
            Some("."),
            None,
            None,
        );
        assert!(evidence.contains(PositionRequirement::PREV));
        assert!(!evidence.intersects(PositionRequirement::LOOKAHEAD));

        let vetoed = classify(
            EndingCategory::MorphDa,
            "다",
            Some("먹"),
            Some("가"),
            None,
            None,
        );
        assert!(vetoed.contains(PositionRequirement::NEXT));
    }

    #[test]
    fn test_classify_is_total_on_unknown_input() {
        let evidence = classify(
            EndingCategory::DefaultNone,
            "",
            None,
            None,
            None,
            None,
        );
        assert_eq!(evidence, PositionRequirement::empty());
    }

    #[test]
    fn test_sentence_break_outranks_continuation() {
        // "?" sits in both the punctuation trigger set and the continuation
        // table; dispatch resolves it as a SentenceBreak candidate.
        let found = boundaries("뭐라고?");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, EndingCategory::SentenceBreak);
    }
}
