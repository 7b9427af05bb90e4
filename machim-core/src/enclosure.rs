//! Quote and bracket tracking
//!
//! Sentences quoted or bracketed inside a larger sentence stay attached to it:
//! boundaries found at enclosure depth > 0 are suppressed. Every opening
//! delimiter starts an episode; suppressed boundaries are recorded against the
//! innermost episode, and episodes that never close by end of input release
//! their boundaries again, so one stray quote cannot swallow the rest of the
//! document.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Open(u8),
    Close(u8),
    /// Same character opens and closes (straight quotes).
    Symmetric(u8),
}

/// Paired delimiters: brackets and directional quotes.
const PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('「', '」'),
    ('『', '』'),
    ('《', '》'),
    ('〈', '〉'),
    ('“', '”'),
    ('‘', '’'),
];

/// Delimiters where the same character toggles open/close.
const SYMMETRIC: &[char] = &['"', '\''];

fn role_table() -> &'static HashMap<char, Role> {
    static TABLE: OnceLock<HashMap<char, Role>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = HashMap::new();
        let mut type_id = 0u8;
        for &(open, close) in PAIRS {
            map.insert(open, Role::Open(type_id));
            map.insert(close, Role::Close(type_id));
            type_id += 1;
        }
        for &ch in SYMMETRIC {
            map.insert(ch, Role::Symmetric(type_id));
            type_id += 1;
        }
        map
    })
}

#[derive(Debug, Clone, Copy)]
struct OpenEnclosure {
    type_id: u8,
    episode: u32,
}

/// Scan-time enclosure state.
#[derive(Debug, Default)]
pub(crate) struct EnclosureTracker {
    stack: Vec<OpenEnclosure>,
    next_episode: u32,
    unclosed: HashSet<u32>,
}

impl EnclosureTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Feed one token; `prev`/`next` are the neighboring non-window surfaces
    /// used for the apostrophe contraction test.
    pub(crate) fn observe(&mut self, surface: &str, prev: Option<&str>, next: Option<&str>) {
        let mut chars = surface.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return;
        };
        let Some(role) = role_table().get(&ch).copied() else {
            return;
        };
        if ch == '\'' && is_alnum(prev) && is_alnum(next) {
            // don't / 90's style contractions, not quotes
            return;
        }
        match role {
            Role::Open(type_id) => self.push(type_id),
            Role::Close(type_id) => {
                self.pop_matching(type_id);
            }
            Role::Symmetric(type_id) => {
                if !self.pop_matching(type_id) {
                    self.push(type_id);
                }
            }
        }
    }

    fn push(&mut self, type_id: u8) {
        let episode = self.next_episode;
        self.next_episode += 1;
        self.stack.push(OpenEnclosure { type_id, episode });
    }

    /// Pops the innermost enclosure iff it matches; strays are ignored.
    fn pop_matching(&mut self, type_id: u8) -> bool {
        match self.stack.last() {
            Some(top) if top.type_id == type_id => {
                self.stack.pop();
                true
            }
            _ => false,
        }
    }

    /// Episode id of the innermost open enclosure, `None` outside all pairs.
    #[inline]
    pub(crate) fn current_episode(&self) -> Option<u32> {
        self.stack.last().map(|open| open.episode)
    }

    /// Finish the scan; returns the episodes that never closed.
    pub(crate) fn into_unclosed(mut self) -> HashSet<u32> {
        for open in self.stack.drain(..) {
            self.unclosed.insert(open.episode);
        }
        self.unclosed
    }
}

fn is_alnum(surface: Option<&str>) -> bool {
    surface
        .and_then(|s| s.chars().next())
        .is_some_and(|ch| ch.is_alphanumeric())
}
