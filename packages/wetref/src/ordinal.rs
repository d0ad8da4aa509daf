//! Dutch ordinal-number utilities.
//!
//! Citations write legal paragraphs out in words ("tweede lid", "eerste en
//! derde lid"), so the resolver needs both directions: generating every
//! ordinal word to build its match pattern, and turning captured words back
//! into integers.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};

/// Ordinal words for 0..20.
const SMALL_ORDINALS: [&str; 20] = [
    "nulde",
    "eerste",
    "tweede",
    "derde",
    "vierde",
    "vijfde",
    "zesde",
    "zevende",
    "achtste",
    "negende",
    "tiende",
    "elfde",
    "twaalfde",
    "dertiende",
    "veertiende",
    "vijftiende",
    "zestiende",
    "zeventiende",
    "achttiende",
    "negentiende",
];

/// Cardinal unit words used to build compound ordinals (1..=9).
const UNIT_CARDINALS: [&str; 9] = [
    "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen",
];

/// Cardinal tens words (20, 30, .., 90).
const TENS_CARDINALS: [&str; 8] = [
    "twintig", "dertig", "veertig", "vijftig", "zestig", "zeventig", "tachtig", "negentig",
];

/// The Dutch ordinal word for `n`.
///
/// Supports 0..100; compound forms follow the written convention of joining
/// the unit and the tens with "en" ("eenentwintigste"), with a diaeresis
/// after a trailing 'e' ("tweeëntwintigste", "drieëndertigste").
///
/// # Errors
///
/// Returns `ExtractError::OrdinalOutOfRange` for `n >= 100`.
///
/// # Examples
/// ```
/// use wetref::ordinal::ordinal_nl;
///
/// assert_eq!(ordinal_nl(2).unwrap(), "tweede");
/// assert_eq!(ordinal_nl(21).unwrap(), "eenentwintigste");
/// assert_eq!(ordinal_nl(22).unwrap(), "tweeëntwintigste");
/// ```
pub fn ordinal_nl(n: u32) -> Result<String> {
    if n >= 100 {
        return Err(ExtractError::OrdinalOutOfRange(n));
    }
    if n < 20 {
        return Ok(SMALL_ORDINALS[n as usize].to_string());
    }
    let tens = (n / 10 - 2) as usize;
    let unit = (n % 10) as usize;
    if unit == 0 {
        return Ok(format!("{}ste", TENS_CARDINALS[tens]));
    }
    let unit_word = UNIT_CARDINALS[unit - 1];
    // "twee" + "en" and "drie" + "en" take a diaeresis on the vowel clash
    let joiner = if unit_word.ends_with('e') { "ën" } else { "en" };
    Ok(format!("{unit_word}{joiner}{}ste", TENS_CARDINALS[tens]))
}

/// Lookup table from ordinal word to value, for all supported ordinals.
#[allow(clippy::expect_used)] // Generation over 0..100 cannot fail
static ORDINAL_VALUES: LazyLock<HashMap<String, u32>> = LazyLock::new(|| {
    (0..100)
        .map(|n| (ordinal_nl(n).expect("n is in range"), n))
        .collect()
});

/// Interpret a single Dutch ordinal word.
///
/// Case-insensitive; surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `ExtractError::InvalidOrdinal` when the word is not a known
/// ordinal.
///
/// # Examples
/// ```
/// use wetref::ordinal::parse_ordinal_nl;
///
/// assert_eq!(parse_ordinal_nl("Tweede").unwrap(), 2);
/// assert!(parse_ordinal_nl("twede").is_err());
/// ```
pub fn parse_ordinal_nl(word: &str) -> Result<u32> {
    let normalized = word.trim().to_lowercase();
    ORDINAL_VALUES
        .get(&normalized)
        .copied()
        .ok_or_else(|| ExtractError::InvalidOrdinal(word.to_string()))
}

/// Splitter for ordinal lists: commas or the word "en".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LIST_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\n]*(?:,|\ben\b)").expect("valid regex"));

/// Resolve a list like "eerste, tweede en derde" to integers.
///
/// Each part is tried as a plain integer first, then as an ordinal word.
/// Unresolvable parts are silently dropped; the caller keeps the raw text
/// if it needs to surface them.
#[must_use]
pub fn parse_ordinal_list(text: &str) -> Vec<u32> {
    LIST_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            part.parse::<u32>()
                .ok()
                .or_else(|| parse_ordinal_nl(part).ok())
        })
        .collect()
}

/// Regex alternation fragment matching any supported ordinal word.
///
/// Ordered longest-first so "eenentwintigste" is preferred over a shorter
/// word that happens to share a prefix.
#[allow(clippy::expect_used)] // Generation over 0..100 cannot fail
pub static ORDINAL_ALTERNATION: LazyLock<String> = LazyLock::new(|| {
    let mut words: Vec<String> = (0..100)
        .map(|n| ordinal_nl(n).expect("n is in range"))
        .collect();
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    format!("(?:{})", words.join("|"))
});
