//! Ending categories and positional requirement flags
//!
//! The category/flag pair is the unit of the rule data: every table entry maps a
//! surface morpheme to the union of positional constraints observed for it.

use bitflags::bitflags;

/// Kind of sentence-final ending pattern a candidate belongs to.
///
/// Categories overlap on some surface forms; where they do, the scanner checks
/// them in the fixed precedence order `SentenceBreak > Eomi > EojeolDa >
/// MorphDa > Yo > Jyo`. Earlier categories encode stronger, less ambiguous
/// evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndingCategory {
    /// No category matched; never produces a boundary.
    DefaultNone,
    /// "다" closing an eojeol (whitespace or end of input follows).
    EojeolDa,
    /// "다" in mid-eojeol position, validated against the larger stem table.
    MorphDa,
    /// Polite ending "요".
    Yo,
    /// Polite ending "죠".
    Jyo,
    /// Terminal punctuation (`. ! ? … ~`).
    SentenceBreak,
    /// Characters that extend a sentence but never terminate one: jamo runs,
    /// punctuation tails, zero-width joiners, variation selectors, emoji.
    CommonContinuation,
    /// Nominalized endings "함"/"음", validated by stem-final sound class.
    Eomi,
}

impl EndingCategory {
    /// Stable name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EndingCategory::DefaultNone => "none",
            EndingCategory::EojeolDa => "eojeol_da",
            EndingCategory::MorphDa => "morph_da",
            EndingCategory::Yo => "yo",
            EndingCategory::Jyo => "jyo",
            EndingCategory::SentenceBreak => "sentence_break",
            EndingCategory::CommonContinuation => "common_continuation",
            EndingCategory::Eomi => "eomi",
        }
    }
}

bitflags! {
    /// Positional constraints attached to a surface morpheme in one category.
    ///
    /// An entry is the bitwise union of every constraint the rule data records
    /// for that morpheme. `PREV` marks a morpheme as a valid stem for the
    /// category's ending to attach to. The `NEXT` family marks morphemes that,
    /// found one, two, or three tokens after a candidate, extend the clause
    /// and veto the boundary. Absent table keys read as `empty()`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PositionRequirement: u8 {
        /// Valid as the morpheme immediately preceding the ending.
        const PREV = 1 << 0;
        /// Continuation character; never a boundary itself.
        const CONT = 1 << 1;
        /// Vetoes a boundary when found one token ahead.
        const NEXT = 1 << 2;
        /// Vetoes a boundary when found two tokens ahead.
        const NEXT1 = 1 << 3;
        /// Vetoes a boundary when found three tokens ahead.
        const NEXT2 = 1 << 4;
    }
}

impl PositionRequirement {
    /// Union of the lookahead veto bits.
    pub const LOOKAHEAD: PositionRequirement = PositionRequirement::NEXT
        .union(PositionRequirement::NEXT1)
        .union(PositionRequirement::NEXT2);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_bits_match_rule_data_encoding() {
        assert_eq!(PositionRequirement::PREV.bits(), 1);
        assert_eq!(PositionRequirement::CONT.bits(), 2);
        assert_eq!(PositionRequirement::NEXT.bits(), 4);
        assert_eq!(PositionRequirement::NEXT1.bits(), 8);
        assert_eq!(PositionRequirement::NEXT2.bits(), 16);
    }

    #[test]
    fn test_lookahead_union_covers_all_next_flags() {
        assert!(PositionRequirement::LOOKAHEAD.contains(PositionRequirement::NEXT));
        assert!(PositionRequirement::LOOKAHEAD.contains(PositionRequirement::NEXT1));
        assert!(PositionRequirement::LOOKAHEAD.contains(PositionRequirement::NEXT2));
        assert!(!PositionRequirement::LOOKAHEAD.contains(PositionRequirement::PREV));
    }

    #[test]
    fn test_category_names_are_stable() {
        assert_eq!(EndingCategory::SentenceBreak.as_str(), "sentence_break");
        assert_eq!(EndingCategory::EojeolDa.as_str(), "eojeol_da");
    }
}
