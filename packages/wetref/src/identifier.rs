//! Fixed-format identifier matchers.
//!
//! Each matcher is a pure function over the full text: compiled pattern,
//! find-iter, flat list of [`Match`] records. There is no cross-matcher
//! interaction, so callers may run them in any order.
//!
//! The ECLI and CELEX matchers additionally run their hits through an
//! [`IdentifierParser`]; a near-match that fails structural validation is
//! kept in the output with `invalid: true` rather than discarded, so a
//! caller can see "looked like an identifier but isn't".

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, Result};
use crate::types::{CelexDetails, Details, EcliDetails, Match, ReferenceKind};

#[allow(clippy::expect_used)]
/// BWB identifier: BWBR (regulations) or BWBV (treaties) plus digits.
static BWB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"BWB[RV][0-9]+").expect("valid regex"));

#[allow(clippy::expect_used)]
/// CVDR identifier, with an optional version suffix ("CVDR101405/2").
static CVDR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CVDR[0-9]+(?:[/_][0-9]+)?").expect("valid regex"));

#[allow(clippy::expect_used)]
/// Pre-ECLI LJN case number: two letters, four digits, optional roll number.
static LJN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2}[0-9]{4}(?:,[\n\s]+[0-9]+)?\b").expect("valid regex"));

#[allow(clippy::expect_used)]
/// ECLI: five colon-separated fields.
static ECLI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bECLI:[A-Z]{2}:[A-Z0-9.]{1,7}:[0-9]{4}:[A-Z0-9.]{1,25}\b").expect("valid regex")
});

#[allow(clippy::expect_used)]
/// CELEX: sector, year, document type, sequential number, optional suffix.
static CELEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9CE](?:19|20)[0-9]{2}[A-Z]{1,2}[0-9]{2,4}\b(?:\([0-9]{2}\))?")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
/// Gazette citation: Trb./Stb./Stcrt. plus year and number.
static VINDPLAATS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Trb|Stb|Stcrt)\.?[\n\s]+[0-9\u{2026}.]+(?:,[\n\s]+[0-9\u{2026}.]+)?")
        .expect("valid regex")
});

#[allow(clippy::expect_used)]
/// CELEX field structure, for the parser.
static CELEX_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9CE])([0-9]{4})([A-Z]{1,2})([0-9]{2,4})(?:\(([0-9]{2})\))?$")
        .expect("valid regex")
});

/// Parser collaborator for identifier-style matches.
///
/// Implementations validate structure and extract fields; the matchers keep
/// validation failures as flagged matches instead of dropping them.
pub trait IdentifierParser {
    /// Parse an ECLI string into its fields.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidIdentifier` for structurally invalid
    /// input.
    fn parse_ecli(&self, text: &str) -> Result<EcliDetails>;

    /// Parse a CELEX string into its fields.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidIdentifier` for structurally invalid
    /// input.
    fn parse_celex(&self, text: &str) -> Result<CelexDetails>;
}

/// Default identifier parser following the published ECLI/CELEX grammars.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardIdentifierParser;

impl StandardIdentifierParser {
    fn invalid(kind: &'static str, text: &str, reason: &str) -> ExtractError {
        ExtractError::InvalidIdentifier {
            kind,
            text: text.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IdentifierParser for StandardIdentifierParser {
    fn parse_ecli(&self, text: &str) -> Result<EcliDetails> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 5 {
            return Err(Self::invalid("ecli", text, "expected five colon-separated fields"));
        }
        if !parts[0].eq_ignore_ascii_case("ECLI") {
            return Err(Self::invalid("ecli", text, "missing ECLI prefix"));
        }
        let country = parts[1];
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Self::invalid("ecli", text, "country code must be two uppercase letters"));
        }
        let court = parts[2];
        if court.is_empty() || court.len() > 7 {
            return Err(Self::invalid("ecli", text, "court code must be 1-7 characters"));
        }
        let year = parts[3];
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::invalid("ecli", text, "year field is not four digits"));
        }
        let case_number = parts[4];
        if case_number.is_empty() || case_number.len() > 25 {
            return Err(Self::invalid("ecli", text, "case number must be 1-25 characters"));
        }
        Ok(EcliDetails {
            country_code: country.to_string(),
            court_code: court.to_string(),
            year: year.to_string(),
            case_number: case_number.to_string(),
        })
    }

    fn parse_celex(&self, text: &str) -> Result<CelexDetails> {
        let caps = CELEX_PARTS_RE
            .captures(text)
            .ok_or_else(|| Self::invalid("celex", text, "does not match sector/year/type/number"))?;
        Ok(CelexDetails {
            sector: caps[1].to_string(),
            year: caps[2].to_string(),
            document_type: caps[3].to_string(),
            document_number: caps[4].to_string(),
        })
    }
}

/// Collect all hits of `re` as plain matches of the given kind.
fn collect_matches(re: &Regex, kind: ReferenceKind, text: &str) -> Vec<Match> {
    re.find_iter(text)
        .map(|m| Match::new(kind, m.start(), m.end(), m.as_str()))
        .collect()
}

/// Find BWB identifiers (`BWBR0001827`).
#[must_use]
pub fn find_bwb(text: &str) -> Vec<Match> {
    collect_matches(&BWB_RE, ReferenceKind::Bwb, text)
}

/// Find CVDR identifiers (`CVDR101405/2`).
#[must_use]
pub fn find_cvdr(text: &str) -> Vec<Match> {
    collect_matches(&CVDR_RE, ReferenceKind::Cvdr, text)
}

/// Find LJN case numbers (`AB1234`).
///
/// LJNs are short and collide easily with ordinary uppercase codes, which
/// is why aggregation disables this matcher by default.
#[must_use]
pub fn find_ljn(text: &str) -> Vec<Match> {
    collect_matches(&LJN_RE, ReferenceKind::Ljn, text)
}

/// Find ECLI case-law identifiers, parsed through `parser`.
#[must_use]
pub fn find_ecli(text: &str, parser: &dyn IdentifierParser) -> Vec<Match> {
    ECLI_RE
        .find_iter(text)
        .map(|m| {
            let base = Match::new(ReferenceKind::Ecli, m.start(), m.end(), m.as_str());
            match parser.parse_ecli(m.as_str()) {
                Ok(details) => base.with_details(Details::Ecli(details)),
                Err(e) => {
                    tracing::debug!(text = m.as_str(), error = %e, "ECLI near-match failed validation");
                    base.with_invalid(true)
                }
            }
        })
        .collect()
}

/// Find CELEX identifiers, parsed through `parser`.
#[must_use]
pub fn find_celex(text: &str, parser: &dyn IdentifierParser) -> Vec<Match> {
    CELEX_RE
        .find_iter(text)
        .map(|m| {
            let base = Match::new(ReferenceKind::Celex, m.start(), m.end(), m.as_str());
            match parser.parse_celex(m.as_str()) {
                Ok(details) => base.with_details(Details::Celex(details)),
                Err(e) => {
                    tracing::debug!(text = m.as_str(), error = %e, "CELEX near-match failed validation");
                    base.with_invalid(true)
                }
            }
        })
        .collect()
}

/// Find gazette citations (`Stb. 2001, 580`).
#[must_use]
pub fn find_vindplaats(text: &str) -> Vec<Match> {
    collect_matches(&VINDPLAATS_RE, ReferenceKind::Vindplaats, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_bwb() {
        let matches = find_bwb("Zie BWBR0001827 en BWBV0001000.");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "BWBR0001827");
        assert_eq!(matches[0].kind, ReferenceKind::Bwb);
        assert_eq!(matches[1].text, "BWBV0001000");
    }

    #[test]
    fn test_find_bwb_span_invariant() {
        let text = "Zie BWBR0001827.";
        let matches = find_bwb(text);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert!(m.start <= m.end && m.end <= text.len());
        assert_eq!(&text[m.start..m.end], m.text);
    }

    #[test]
    fn test_find_cvdr_with_version() {
        let matches = find_cvdr("CVDR101405/2 en CVDR600001");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "CVDR101405/2");
        assert_eq!(matches[1].text, "CVDR600001");
    }

    #[test]
    fn test_find_ljn() {
        let matches = find_ljn("LJN AB1234, uitspraak");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "AB1234");
    }

    #[test]
    fn test_find_ecli_valid() {
        let parser = StandardIdentifierParser;
        let matches = find_ecli("Zie ECLI:NL:HR:2020:123 voor het arrest.", &parser);
        assert_eq!(matches.len(), 1);
        assert!(!matches[0].invalid);
        match matches[0].details.as_ref().unwrap() {
            Details::Ecli(d) => {
                assert_eq!(d.country_code, "NL");
                assert_eq!(d.court_code, "HR");
                assert_eq!(d.year, "2020");
                assert_eq!(d.case_number, "123");
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_find_ecli_excludes_trailing_period() {
        let parser = StandardIdentifierParser;
        let matches = find_ecli("ECLI:NL:RBAMS:2019:4.", &parser);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "ECLI:NL:RBAMS:2019:4");
    }

    #[test]
    fn test_find_celex() {
        let parser = StandardIdentifierParser;
        let matches = find_celex("Verordening 32016R0679 (AVG)", &parser);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "32016R0679");
        match matches[0].details.as_ref().unwrap() {
            Details::Celex(d) => {
                assert_eq!(d.sector, "3");
                assert_eq!(d.year, "2016");
                assert_eq!(d.document_type, "R");
                assert_eq!(d.document_number, "0679");
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }

    #[test]
    fn test_find_vindplaats() {
        let matches = find_vindplaats("gepubliceerd in Stb. 2001, 580 en Stcrt. 2015, 12345");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "Stb. 2001, 580");
        assert_eq!(matches[0].kind, ReferenceKind::Vindplaats);
        assert_eq!(matches[1].text, "Stcrt. 2015, 12345");
    }

    #[test]
    fn test_parse_ecli_rejects_bad_year() {
        let parser = StandardIdentifierParser;
        let err = parser.parse_ecli("ECLI:NL:HR:20XX:123").unwrap_err();
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn test_parse_ecli_rejects_wrong_field_count() {
        let parser = StandardIdentifierParser;
        assert!(parser.parse_ecli("ECLI:NL:HR:2020").is_err());
    }

    #[test]
    fn test_matcher_idempotent() {
        let text = "BWBR0001827 CVDR101405 ECLI:NL:HR:2020:123";
        let parser = StandardIdentifierParser;
        assert_eq!(find_bwb(text), find_bwb(text));
        assert_eq!(find_ecli(text, &parser), find_ecli(text, &parser));
    }
}
