//! Total classification table
//!
//! Maps `(category, morpheme)` to positional requirement flags. Built once per
//! process from the static rule data; lookups of absent keys yield `empty()`,
//! never a failure.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::category::{EndingCategory, PositionRequirement};
use crate::tables;

const CATEGORIES: [EndingCategory; 8] = [
    EndingCategory::DefaultNone,
    EndingCategory::EojeolDa,
    EndingCategory::MorphDa,
    EndingCategory::Yo,
    EndingCategory::Jyo,
    EndingCategory::SentenceBreak,
    EndingCategory::CommonContinuation,
    EndingCategory::Eomi,
];

/// Per-category morpheme lookup with a total-function contract.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    categories: [HashMap<&'static str, PositionRequirement>; 8],
}

impl ClassificationTable {
    fn build() -> Self {
        let categories = CATEGORIES.map(|category| {
            tables::category_entries(category)
                .iter()
                .copied()
                .collect::<HashMap<_, _>>()
        });
        Self { categories }
    }

    /// Shared process-wide instance.
    pub fn global() -> &'static ClassificationTable {
        static TABLE: OnceLock<ClassificationTable> = OnceLock::new();
        TABLE.get_or_init(ClassificationTable::build)
    }

    /// Flags recorded for `morpheme` in `category`; `empty()` when absent.
    #[inline]
    pub fn lookup(&self, category: EndingCategory, morpheme: &str) -> PositionRequirement {
        self.categories[category as usize]
            .get(morpheme)
            .copied()
            .unwrap_or(PositionRequirement::empty())
    }

    /// True when `morpheme` is a valid stem for `category`'s ending.
    #[inline]
    pub(crate) fn validates_prev(&self, category: EndingCategory, morpheme: &str) -> bool {
        self.lookup(category, morpheme)
            .contains(PositionRequirement::PREV)
    }

    /// True when `morpheme` belongs to the continuation class.
    #[inline]
    pub(crate) fn is_common_continuation(&self, morpheme: &str) -> bool {
        self.lookup(EndingCategory::CommonContinuation, morpheme)
            .contains(PositionRequirement::CONT)
    }
}
