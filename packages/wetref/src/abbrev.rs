//! Abbreviation discovery.
//!
//! Finds "(Awb)"-style bracketed abbreviations next to the words they
//! abbreviate, in either direction: "Algemene wet bestuursrecht (Awb)" and
//! "Awb (Algemene wet bestuursrecht)". Works on a crude whitespace/
//! punctuation tokenization and aligns abbreviation letters with word
//! initials; connective words ("en", "van", "de") may sit between the
//! aligned words without carrying a letter.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

/// An abbreviation with the expansion words it was found next to.
pub type AbbrevPair = (String, Vec<String>);

/// Token splitter: whitespace plus sentence punctuation and quote marks.
/// Hyphens split too, so "EU-richtlijn" contributes two candidate words.
#[allow(clippy::expect_used)]
static TOKEN_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"[\s!@#$%^&*":;/,?"#,
        "\u{ab}\u{bb}\u{2018}\u{2019}\u{201a}\u{201b}\u{201c}\u{201d}\u{201e}\u{201f}",
        "\u{2039}\u{203a}\u{2358}\u{275b}\u{275c}\u{275d}\u{275e}\u{275f}\u{2760}",
        "\u{276e}\u{276f}\u{2e42}\u{301d}\u{301e}\u{301f}\u{ff02}",
        "\u{1f676}\u{1f677}\u{1f678}-]+",
    ))
    .expect("valid regex")
});

/// A parenthesized run of initials: "(Awb)", "(A.w.b.)".
#[allow(clippy::expect_used)]
static BRACKETED_ABBREV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[(](?:[A-Za-z][.]?){2,}[)]").expect("valid regex"));

/// Connectives that may appear inside an expansion without matching an
/// abbreviation letter.
const CONNECTIVES: [&str; 6] = ["en", "de", "het", "van", "voor", "of"];

/// Split text into rough word tokens, dropping empties and stray single
/// quotes left over from contractions.
#[must_use]
pub fn simple_tokenize(text: &str) -> Vec<&str> {
    TOKEN_SPLIT
        .split(text)
        .map(|tok| tok.trim_matches('\''))
        .filter(|tok| !tok.is_empty())
        .collect()
}

fn starts_with_letter(token_lower: &str, letter: char) -> bool {
    token_lower.chars().next() == Some(letter)
}

fn is_connective(token_lower: &str) -> bool {
    CONNECTIVES.contains(&token_lower)
}

/// Align abbreviation letters against the tokens directly before `idx`,
/// walking right to left. Returns the expansion words in text order.
fn align_before(
    toks: &[&str],
    toks_lower: &[String],
    idx: usize,
    letters: &[char],
) -> Option<Vec<String>> {
    let mut words: Vec<String> = Vec::new();
    let mut pos = idx;
    for letter in letters.iter().rev() {
        loop {
            if pos == 0 {
                return None;
            }
            pos -= 1;
            if is_connective(&toks_lower[pos]) && !starts_with_letter(&toks_lower[pos], *letter) {
                words.push(toks[pos].to_string());
                continue;
            }
            break;
        }
        if !starts_with_letter(&toks_lower[pos], *letter) {
            return None;
        }
        words.push(toks[pos].to_string());
    }
    words.reverse();
    Some(words)
}

/// Mirror of [`align_before`] for the tokens directly after `idx`.
fn align_after(
    toks: &[&str],
    toks_lower: &[String],
    idx: usize,
    letters: &[char],
) -> Option<Vec<String>> {
    let mut words: Vec<String> = Vec::new();
    let mut pos = idx;
    for letter in letters {
        loop {
            pos += 1;
            if pos >= toks.len() {
                return None;
            }
            if is_connective(&toks_lower[pos]) && !starts_with_letter(&toks_lower[pos], *letter) {
                words.push(toks[pos].to_string());
                continue;
            }
            break;
        }
        if !starts_with_letter(&toks_lower[pos], *letter) {
            return None;
        }
        words.push(toks[pos].to_string());
    }
    Some(words)
}

/// Lowercased letters of an abbreviation token, periods removed.
fn abbrev_letters(abbrev: &str) -> Vec<char> {
    abbrev
        .chars()
        .filter(|c| *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find abbreviation/expansion pairs in one document.
///
/// Two passes: bracketed abbreviations whose letters align with adjacent
/// word initials, and bracketed multi-word expansions whose initials form
/// an adjacent token. The same pair may be reported once per occurrence.
#[must_use]
pub fn abbrev_find(text: &str) -> Vec<AbbrevPair> {
    let toks = simple_tokenize(text);
    let toks_lower: Vec<String> = toks.iter().map(|t| t.to_lowercase()).collect();
    let mut found: Vec<AbbrevPair> = Vec::new();

    // Pass 1: "(Awb)" next to the words it abbreviates.
    for (i, tok) in toks.iter().enumerate() {
        let Some(m) = BRACKETED_ABBREV_RE.find(tok) else {
            continue;
        };
        let abbrev = m.as_str().trim_matches(['(', ')']).to_string();
        let letters = abbrev_letters(&abbrev);
        if letters.len() < 2 {
            continue;
        }

        // Both sides may align; each emits its own record
        if let Some(words) = align_before(&toks, &toks_lower, i, &letters) {
            found.push((abbrev.clone(), words));
        }
        if let Some(words) = align_after(&toks, &toks_lower, i, &letters) {
            found.push((abbrev.clone(), words));
        }
    }

    // Pass 2: "Awb (Algemene wet bestuursrecht)".
    let mut start = 0;
    while start < toks.len() {
        if !(toks[start].starts_with('(') && !toks[start].ends_with(')')) {
            start += 1;
            continue;
        }
        let mut end = start;
        while end < toks.len() {
            if toks[end].ends_with(')') {
                break;
            }
            end += 1;
        }

        let expansion: Vec<String> = toks[start..=end.min(toks.len() - 1)]
            .iter()
            .map(|w| w.trim_matches(['(', ')']).to_string())
            .filter(|w| !w.is_empty())
            .collect();
        if expansion.len() > 1 {
            let initials: String = expansion
                .iter()
                .filter_map(|w| w.chars().next())
                .collect::<String>()
                .to_lowercase();
            let dotted: String = initials.chars().map(|c| format!("{c}.")).collect();

            if start >= 1 && (toks_lower[start - 1] == initials || toks_lower[start - 1] == dotted)
            {
                found.push((toks[start - 1].to_string(), expansion.clone()));
            }
            if end + 1 < toks.len()
                && (toks_lower[end + 1] == initials || toks_lower[end + 1] == dotted)
            {
                found.push((toks[end + 1].to_string(), expansion));
            }
        }

        start = end + 1;
    }

    found
}

/// Tally abbreviation findings across documents.
///
/// Counts, per abbreviation and per distinct expansion, in how many
/// documents the pair occurred; repeats within one document count once.
/// With `remove_dots`, "A.w.b." and "Awb" tally under the same key.
#[must_use]
pub fn abbrev_count_results(
    per_document: &[Vec<AbbrevPair>],
    remove_dots: bool,
) -> BTreeMap<String, BTreeMap<Vec<String>, usize>> {
    let mut counts: BTreeMap<String, BTreeMap<Vec<String>, usize>> = BTreeMap::new();

    for document in per_document {
        let distinct: BTreeSet<(String, Vec<String>)> = document
            .iter()
            .map(|(abbrev, words)| {
                let key = if remove_dots {
                    abbrev.replace('.', "")
                } else {
                    abbrev.clone()
                };
                (key, words.clone())
            })
            .collect();

        for (abbrev, words) in distinct {
            *counts.entry(abbrev).or_default().entry(words).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_tokenize() {
        assert_eq!(
            simple_tokenize("de Algemene wet, bestuursrecht (Awb)"),
            vec!["de", "Algemene", "wet", "bestuursrecht", "(Awb)"]
        );
    }

    #[test]
    fn test_simple_tokenize_quotes_and_hyphens() {
        assert_eq!(
            simple_tokenize("de 'EU-richtlijn' zegt"),
            vec!["de", "EU", "richtlijn", "zegt"]
        );
    }

    #[test]
    fn test_abbrev_after_expansion() {
        let pairs = abbrev_find("de Algemene wet bestuursrecht (Awb) bepaalt");
        assert_eq!(
            pairs,
            vec![(
                "Awb".to_string(),
                vec![
                    "Algemene".to_string(),
                    "wet".to_string(),
                    "bestuursrecht".to_string()
                ]
            )]
        );
    }

    #[test]
    fn test_abbrev_before_expansion() {
        let pairs = abbrev_find("volgens (Awb) Algemene wet bestuursrecht");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "Awb");
    }

    #[test]
    fn test_connective_word_in_expansion() {
        let pairs = abbrev_find("Autoriteit Consument en Markt (ACM)");
        assert_eq!(
            pairs,
            vec![(
                "ACM".to_string(),
                vec![
                    "Autoriteit".to_string(),
                    "Consument".to_string(),
                    "en".to_string(),
                    "Markt".to_string()
                ]
            )]
        );
    }

    #[test]
    fn test_connective_may_carry_its_own_letter() {
        // "en" carries no letter here and is absorbed as a connective;
        // the 'E' aligns with "Examens"
        let pairs = abbrev_find("College voor Toetsen en Examens (CvTE)");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "CvTE");
        assert_eq!(
            pairs[0].1,
            vec!["College", "voor", "Toetsen", "en", "Examens"]
        );
    }

    #[test]
    fn test_both_sides_aligning_yield_two_records() {
        let pairs = abbrev_find("Andere wet (Aw) Aparte wet");
        assert_eq!(
            pairs,
            vec![
                (
                    "Aw".to_string(),
                    vec!["Andere".to_string(), "wet".to_string()]
                ),
                (
                    "Aw".to_string(),
                    vec!["Aparte".to_string(), "wet".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_mismatch_yields_nothing() {
        assert!(abbrev_find("heel ander verhaal (Awb) zonder expansie").is_empty());
    }

    #[test]
    fn test_dotted_abbreviation() {
        let pairs = abbrev_find("de Algemene wet bestuursrecht (A.w.b.) bepaalt");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "A.w.b.");
    }

    #[test]
    fn test_bracketed_expansion_pass() {
        let pairs = abbrev_find("de Awb (Algemene wet bestuursrecht) bepaalt");
        assert_eq!(
            pairs,
            vec![(
                "Awb".to_string(),
                vec![
                    "Algemene".to_string(),
                    "wet".to_string(),
                    "bestuursrecht".to_string()
                ]
            )]
        );
    }

    #[test]
    fn test_bracketed_expansion_after() {
        let pairs = abbrev_find("(Algemene wet bestuursrecht) Awb");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "Awb");
    }

    #[test]
    fn test_count_results_distinct_per_document() {
        let doc1 = abbrev_find(
            "de Algemene wet bestuursrecht (Awb) en nogmaals de \
             Algemene wet bestuursrecht (Awb)",
        );
        let doc2 = abbrev_find("de Algemene wet bestuursrecht (Awb)");
        let counts = abbrev_count_results(&[doc1, doc2], true);

        let expansions = counts.get("Awb").unwrap();
        assert_eq!(expansions.len(), 1);
        let (_, n) = expansions.iter().next().unwrap();
        // Two documents, each counted once despite the repeat in the first
        assert_eq!(*n, 2);
    }

    #[test]
    fn test_count_results_merges_dotted_forms() {
        let doc1 = abbrev_find("de Algemene wet bestuursrecht (A.w.b.)");
        let doc2 = abbrev_find("de Algemene wet bestuursrecht (Awb)");

        let merged = abbrev_count_results(&[doc1.clone(), doc2.clone()], true);
        assert_eq!(merged.len(), 1);

        let kept = abbrev_count_results(&[doc1, doc2], false);
        assert_eq!(kept.len(), 2);
        assert!(kept.contains_key("A.w.b."));
    }
}
