//! Static rule data
//!
//! The per-category ending tables and the phoneme-class sets, plus the shared
//! read-only structures built from them on first use. Nothing here changes
//! after initialization.

mod endings;
mod stems;

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::category::{EndingCategory, PositionRequirement};

/// Raw table entries for one category, in source order.
pub(crate) fn category_entries(
    category: EndingCategory,
) -> &'static [(&'static str, PositionRequirement)] {
    match category {
        EndingCategory::DefaultNone => &[],
        EndingCategory::EojeolDa => endings::DA_EOJEOL,
        EndingCategory::MorphDa => endings::DA_MORPH,
        EndingCategory::Yo => endings::YO,
        EndingCategory::Jyo => endings::JYO,
        EndingCategory::SentenceBreak => endings::SB,
        EndingCategory::CommonContinuation => endings::COMMON,
        EndingCategory::Eomi => endings::EOMI,
    }
}

fn interned(entries: &'static [&'static str]) -> HashSet<&'static str> {
    entries.iter().copied().collect()
}

/// Stems compatible with the polite ending "요".
pub(crate) fn yo_stems() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| interned(stems::YO_STEMS))
}

/// Stems compatible with the polite ending "죠".
pub(crate) fn jyo_stems() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| interned(stems::JYO_STEMS))
}

/// Stem-final syllables that validate a "함" ending.
pub(crate) fn ham_preceders() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| interned(stems::HAM_PRECEDERS))
}

/// Stem-final syllables that validate an "음" ending.
pub(crate) fn um_preceders() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| interned(stems::UM_PRECEDERS))
}

/// Closed class of words that may precede an ambiguous spoken-register ending.
pub(crate) fn before_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| interned(stems::BEFORE_WORDS))
}
