//! Configuration constants for the extractor.

/// Search-window radius (in bytes) around an "artikel" anchor.
///
/// The resolver starts looking for adjacent sub-patterns this far on either
/// side of the anchor; the window follows growth, so this only bounds a
/// single step, not the total citation length.
pub const CONTEXT_RADIUS: usize = 60;

/// How far past a resolved citation the statute-name suffix match may look.
pub const LAW_SUFFIX_LOOKAHEAD: usize = 1000;

/// Minimum statute display-name length admitted to the lexicon (exclusive).
pub const MIN_LAW_NAME_LEN: usize = 1;

/// Maximum statute display-name length admitted to the lexicon (exclusive).
pub const MAX_LAW_NAME_LEN: usize = 150;

/// Name that is never admitted to the lexicon, whatever the dataset says.
///
/// A statute "named" artikel would make every citation self-matching.
pub const EXCLUDED_LAW_NAME: &str = "artikel";

/// Clamp `pos` down to the nearest UTF-8 character boundary in `text`.
///
/// Byte offsets produced by arithmetic (window radius, lookahead) can land
/// inside a multi-byte character; all slicing in this crate goes through
/// this helper first.
#[must_use]
pub fn floor_char_boundary(text: &str, pos: usize) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut pos = pos;
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
