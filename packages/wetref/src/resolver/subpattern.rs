//! Declarative sub-pattern registry for the non-identifier resolver.
//!
//! Each sub-pattern declares which side of the anchor it may match on and
//! whether a hit is absorbed into the growing citation or only recognized.
//! The registry order is significant: every growth pass walks it top to
//! bottom, so earlier entries get first claim on newly exposed text.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::ordinal::ORDINAL_ALTERNATION;
use crate::pattern::{designator, ws1};

/// Which side of the current match a sub-pattern may appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Between the window start and the current match start.
    Before,

    /// Between the current match end and the window end.
    After,
}

/// What a sub-pattern hit does to the growing match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Absorb the hit: record its value and extend the match over it.
    Include,

    /// Recognize the hit without absorbing it.
    ///
    /// Known gap: exclusion hits were meant to hard-block widening past
    /// them, but the implemented behavior is inert recognition only.
    Exclude,
}

/// Detail-record key a sub-pattern writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPatternKey {
    Grond,
    Bedoeld,
    Hoofdstuk,
    Paragraaf,
    Aanwijzing,
    Onderdeel,
    Lid,
    AanhefOnder,
    Sub,
    VanDeHet,
}

impl SubPatternKey {
    /// Name used in logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grond => "grond",
            Self::Bedoeld => "bedoeld",
            Self::Hoofdstuk => "hoofdstuk",
            Self::Paragraaf => "paragraaf",
            Self::Aanwijzing => "aanwijzing",
            Self::Onderdeel => "onderdeel",
            Self::Lid => "lid",
            Self::AanhefOnder => "aanhefonder",
            Self::Sub => "sub",
            Self::VanDeHet => "vandh",
        }
    }
}

/// One entry of the sub-pattern registry.
#[derive(Debug)]
pub struct SubPattern {
    /// Detail key this pattern writes (include mode only).
    pub key: SubPatternKey,

    /// Side of the anchor this pattern is legal on.
    pub side: Side,

    /// Include or exclude behavior.
    pub mode: Mode,

    /// Compiled pattern, case-insensitive and multiline.
    pub regex: Regex,
}

impl SubPattern {
    #[allow(clippy::expect_used)] // Registry patterns are static and valid
    fn new(key: SubPatternKey, side: Side, mode: Mode, pattern: &str) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .expect("valid sub-pattern regex");
        Self {
            key,
            side,
            mode,
            regex,
        }
    }

    /// Whether this pattern may match on the given side.
    #[must_use]
    pub fn applies(&self, side: Side) -> bool {
        self.side == side
    }
}

/// Ordinal list: "tweede", "eerste, tweede en derde", "1 en 3".
///
/// Word ordinals only; bare numbers are handled by the "lid <number>" form.
fn ordinal_list() -> String {
    let ord = ORDINAL_ALTERNATION.as_str();
    format!("(?:{ord}(?:,?{ws}{ord})*(?:,?{ws}en{ws}{ord})?)", ws = ws1())
}

/// The fixed, ordered sub-pattern registry.
#[allow(clippy::expect_used)]
pub static REGISTRY: LazyLock<Vec<SubPattern>> = LazyLock::new(|| {
    let ws = ws1();
    let des = designator();
    vec![
        SubPattern::new(
            SubPatternKey::Grond,
            Side::Before,
            Mode::Exclude,
            r"\bgrond(?: van)?\b",
        ),
        SubPattern::new(
            SubPatternKey::Bedoeld,
            Side::Before,
            Mode::Exclude,
            r"\bbedoeld in\b",
        ),
        SubPattern::new(
            SubPatternKey::Hoofdstuk,
            Side::After,
            Mode::Include,
            &format!(r"\bhoofdstuk{ws}{des}\b"),
        ),
        SubPattern::new(
            SubPatternKey::Paragraaf,
            Side::After,
            Mode::Include,
            &format!(r"\bparagraaf{ws}{des}\b"),
        ),
        SubPattern::new(
            SubPatternKey::Aanwijzing,
            Side::After,
            Mode::Include,
            &format!(r"\b(?:aanwijzingen|aanwijzing){ws}{des}\b"),
        ),
        SubPattern::new(
            SubPatternKey::Onderdeel,
            Side::After,
            Mode::Include,
            r"\b(?:onderdelen|onderdeel)\b",
        ),
        SubPattern::new(
            SubPatternKey::Lid,
            Side::After,
            Mode::Include,
            &format!(
                r"\b(?:lid{ws}{des}|({list}){ws}(?:lid|leden))",
                list = ordinal_list()
            ),
        ),
        SubPattern::new(
            SubPatternKey::AanhefOnder,
            Side::After,
            Mode::Include,
            &format!(r"\b((?:aanhef{ws}en{ws})?onder{ws}[a-z0-9\u{{00ba}}]{{1,2}})"),
        ),
        SubPattern::new(
            SubPatternKey::Sub,
            Side::After,
            Mode::Include,
            r"\bsub [a-z0-9\u{00ba}]+\b",
        ),
        SubPattern::new(
            SubPatternKey::VanDeHet,
            Side::After,
            Mode::Include,
            r"\bvan (?:het|de)\b",
        ),
    ]
});
