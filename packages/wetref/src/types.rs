//! Core data types for reference extraction.
//!
//! Every matcher in this crate produces [`Match`] records: a span into the
//! source text, a kind tag, and optionally a typed details record with the
//! parsed-out fields.

use serde::{Deserialize, Serialize};

/// Kinds of legal references the extractors recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Dutch national statute/regulation identifier (BWBR/BWBV).
    Bwb,

    /// Dutch decentralized-regulation identifier.
    Cvdr,

    /// Pre-ECLI Dutch case-law number (Landelijk Jurisprudentie Nummer).
    Ljn,

    /// European Case Law Identifier.
    Ecli,

    /// EU legal-document identifier.
    Celex,

    /// Gazette publication citation (Staatsblad, Staatscourant, Tractatenblad).
    Vindplaats,

    /// Parliamentary-document citation.
    Kamerstukken,

    /// EU Official Journal citation.
    Euoj,

    /// EU Directive citation.
    Eudir,

    /// Non-identifier "artikel 5.1, tweede lid, ..." style reference.
    Artikel,
}

impl ReferenceKind {
    /// Lowercase string value, matching the serialized `type` field.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bwb => "bwb",
            Self::Cvdr => "cvdr",
            Self::Ljn => "ljn",
            Self::Ecli => "ecli",
            Self::Celex => "celex",
            Self::Vindplaats => "vindplaats",
            Self::Kamerstukken => "kamerstukken",
            Self::Euoj => "euoj",
            Self::Eudir => "eudir",
            Self::Artikel => "artikel",
        }
    }
}

/// Parsed fields of a non-identifier article reference.
///
/// All fields except `artikel` are optional: the resolver records whatever
/// adjacent sub-patterns it managed to absorb and leaves the rest absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtikelDetails {
    /// Raw article designator (e.g. "5.1a").
    pub artikel: String,

    /// Raw captured ordinal-list text for the legal paragraph ("tweede").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lid: Option<String>,

    /// Resolved paragraph numbers; unresolvable words are dropped.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub lid_num: Vec<u32>,

    /// Subdivision (onderdeel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onderdeel: Option<String>,

    /// Introductory clause + lettered sub-item ("aanhef en onder i").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aanhefonder: Option<String>,

    /// "sub <code>" sub-item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Chapter (hoofdstuk) designator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoofdstuk: Option<String>,

    /// Section (paragraaf) designator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraaf: Option<String>,

    /// Civil-service directive (aanwijzing) designator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aanwijzing: Option<String>,

    /// Connective "van het/de" as matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vandh: Option<String>,

    /// Statute display name following the citation, trimmed of the leading
    /// comma/space, when a lexicon suffix match succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,
}

impl ArtikelDetails {
    /// Create a details record for an anchor designator.
    #[must_use]
    pub fn new(artikel: impl Into<String>) -> Self {
        Self {
            artikel: artikel.into(),
            ..Self::default()
        }
    }
}

/// Parsed fields of an ECLI identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcliDetails {
    /// Two-letter country code ("NL", "EU", ...).
    pub country_code: String,

    /// Court code ("HR", "RBAMS", ...).
    pub court_code: String,

    /// Decision year.
    pub year: String,

    /// Court-assigned case number.
    pub case_number: String,
}

/// Parsed fields of a CELEX identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CelexDetails {
    /// Sector digit/letter (3 = legislation, 6 = case law, ...).
    pub sector: String,

    /// Document year.
    pub year: String,

    /// Document-type code (L = directive, R = regulation, ...).
    pub document_type: String,

    /// Sequential document number.
    pub document_number: String,
}

/// Details payload of a match, depending on its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Details {
    /// Non-identifier article reference fields.
    Artikel(ArtikelDetails),

    /// Parsed ECLI fields.
    Ecli(EcliDetails),

    /// Parsed CELEX fields.
    Celex(CelexDetails),
}

/// A single extracted reference.
///
/// Invariants: `start <= end <= source.len()`, both on UTF-8 boundaries,
/// and `text == &source[start..end]`. Matches are immutable once produced
/// and are ordered externally by `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Reference kind.
    #[serde(rename = "type")]
    pub kind: ReferenceKind,

    /// Byte offset of the match start in the source text.
    pub start: usize,

    /// Byte offset one past the match end.
    pub end: usize,

    /// The matched text, equal to `source[start..end]`.
    pub text: String,

    /// Parsed details, when the matcher provides them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,

    /// Set when the text looked like this kind of identifier but failed
    /// structural validation.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub invalid: bool,
}

impl Match {
    /// Create a match without details.
    #[must_use]
    pub fn new(kind: ReferenceKind, start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            start,
            end,
            text: text.into(),
            details: None,
            invalid: false,
        }
    }

    /// Attach a details record.
    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// Mark the match as structurally invalid.
    #[must_use]
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}
