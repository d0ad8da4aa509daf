//! Statute-name lexicon.
//!
//! Maps statute display names ("Wet open overheid", "Woo") to the
//! identifiers that use them, and provides the suffix matcher the resolver
//! runs after a grown citation ("..., van de Woo"). Names are matched
//! longest-first and case-insensitively.
//!
//! The lexicon is built once from an external dataset (identifier →
//! preferred/secondary name lists) and can be installed process-wide behind
//! an explicit init call, so tests can inject a small fake instead.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

use crate::config::{EXCLUDED_LAW_NAME, MAX_LAW_NAME_LEN, MIN_LAW_NAME_LEN};
use crate::error::{ExtractError, Result};

/// Name lists for one statute in the dataset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameEntry {
    /// Preferred display names (citation titles).
    #[serde(default)]
    pub preferred: Vec<String>,

    /// Secondary names (abbreviations, colloquial titles).
    #[serde(default)]
    pub secondary: Vec<String>,
}

/// On-disk lexicon dataset: identifier → name lists.
///
/// ```yaml
/// BWBR0045754:
///   preferred: ["Wet open overheid"]
///   secondary: ["Woo"]
/// ```
pub type LexiconFile = HashMap<String, NameEntry>;

/// A successful statute-name suffix match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Total bytes consumed from the candidate text, leading separator
    /// included.
    pub consumed: usize,

    /// The matched statute name, trimmed of the leading comma/space.
    pub name: String,
}

/// Statute-name lexicon with a longest-first suffix matcher.
#[derive(Debug)]
pub struct Lexicon {
    /// Lowercased name → statute identifiers (a name may be ambiguous).
    by_name: HashMap<String, Vec<String>>,

    /// `^[\s,]+(name|name|...)`, names ordered by descending length.
    /// `None` when the lexicon is empty.
    suffix_re: Option<regex::Regex>,
}

impl Lexicon {
    /// Build a lexicon from dataset records.
    ///
    /// Names of length ≤ 1 or ≥ 150 are excluded, as is the literal word
    /// "artikel"; both preferred and secondary names are admitted.
    pub fn from_dataset<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (S, NameEntry)>,
        S: Into<String>,
    {
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();
        let mut display_names: Vec<String> = Vec::new();

        for (identifier, entry) in records {
            let identifier = identifier.into();
            for name in entry.preferred.iter().chain(entry.secondary.iter()) {
                if name.len() <= MIN_LAW_NAME_LEN || name.len() >= MAX_LAW_NAME_LEN {
                    continue;
                }
                if name == EXCLUDED_LAW_NAME {
                    continue;
                }
                let key = name.to_lowercase();
                let ids = by_name.entry(key.clone()).or_default();
                if !ids.contains(&identifier) {
                    ids.push(identifier.clone());
                }
                if !display_names.contains(name) {
                    display_names.push(name.clone());
                }
            }
        }

        let suffix_re = Self::build_suffix_regex(&display_names);
        Self { by_name, suffix_re }
    }

    /// Load a lexicon from a YAML dataset file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a lexicon from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Yaml` for malformed input.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: LexiconFile = serde_yaml_ng::from_str(yaml)?;
        Ok(Self::from_dataset(file))
    }

    /// Compile the anchored suffix regex, longest names first.
    fn build_suffix_regex(names: &[String]) -> Option<regex::Regex> {
        if names.is_empty() {
            return None;
        }
        let mut sorted: Vec<&String> = names.iter().collect();
        sorted.sort_by_key(|name| std::cmp::Reverse(name.len()));

        let alternation: Vec<String> = sorted.iter().map(|n| regex::escape(n)).collect();
        let pattern = format!(r"^[\s,]+({})", alternation.join("|"));

        match RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(64 * 1024 * 1024)
            .build()
        {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to compile statute-name suffix regex");
                None
            }
        }
    }

    /// Try to match a statute name at the very start of `text`, allowing a
    /// leading comma/whitespace separator.
    #[must_use]
    pub fn match_suffix(&self, text: &str) -> Option<SuffixMatch> {
        let re = self.suffix_re.as_ref()?;
        let caps = re.captures(text)?;
        let full = caps.get(0)?;
        let name = caps.get(1)?;
        Some(SuffixMatch {
            consumed: full.end(),
            name: name.as_str().trim_matches([',', ' ']).to_string(),
        })
    }

    /// Statute identifiers known for a display name (case-insensitive).
    #[must_use]
    pub fn identifiers(&self, name: &str) -> Option<&[String]> {
        self.by_name.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    /// Number of distinct names in the lexicon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the lexicon holds no names at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Process-wide lexicon, installed at most once.
static GLOBAL_LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Install the process-wide lexicon.
///
/// # Errors
///
/// Returns `ExtractError::LexiconInitialized` when called a second time.
pub fn init_global_lexicon(lexicon: Lexicon) -> Result<()> {
    GLOBAL_LEXICON
        .set(lexicon)
        .map_err(|_| ExtractError::LexiconInitialized)
}

/// The process-wide lexicon, if one has been installed.
#[must_use]
pub fn global_lexicon() -> Option<&'static Lexicon> {
    GLOBAL_LEXICON.get()
}
