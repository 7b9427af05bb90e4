//! Emoji continuation detection
//!
//! Emoji grapheme clusters glue onto the sentence that precedes them and must
//! never be split internally or treated as a candidate boundary. Detection
//! checks the whole cluster against the Unicode emoji inventory, then falls
//! back to per-codepoint membership (covers clusters that mix emoji with
//! joiners or modifiers the inventory does not list as one sequence), and
//! finally to regional-indicator runs, since flag pairs are not guaranteed to
//! arrive as a single cluster from every segmenter.

/// Regional indicator range used by flag sequences.
#[inline]
fn is_regional_indicator(ch: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&ch)
}

/// True if `grapheme` is an emoji cluster, part of one, or a flag sequence.
///
/// Total over arbitrary input: the empty string and non-emoji text are simply
/// `false`.
pub fn is_continuation(grapheme: &str) -> bool {
    if grapheme.is_empty() {
        return false;
    }
    if grapheme.chars().all(is_regional_indicator) {
        return true;
    }
    if emojis::get(grapheme).is_some() {
        return true;
    }
    let mut buf = [0u8; 4];
    grapheme
        .chars()
        .any(|ch| emojis::get(ch.encode_utf8(&mut buf)).is_some())
}
