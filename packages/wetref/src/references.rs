//! Combined reference extraction.
//!
//! Runs every enabled matcher family over a text and merges the results
//! into one list ordered by start offset. Families are toggled
//! individually; LJN is off by default because bare "AB1234"-style numbers
//! collide with ordinary prose too often.

use crate::identifier::{
    find_bwb, find_celex, find_cvdr, find_ecli, find_ljn, find_vindplaats,
    StandardIdentifierParser,
};
use crate::lexicon::{global_lexicon, Lexicon};
use crate::resolver::{find_article_references, ResolverConfig};
use crate::semistructured::{find_eudir, find_euoj, find_kamerstukken};
use crate::types::Match;

/// Which matcher families to run, and with what supporting data.
#[derive(Debug, Clone)]
pub struct FindOptions<'a> {
    pub bwb: bool,
    pub cvdr: bool,
    pub ljn: bool,
    pub ecli: bool,
    pub celex: bool,
    pub vindplaats: bool,
    pub kamerstukken: bool,
    pub euoj: bool,
    pub eudir: bool,

    /// The non-identifier article resolver.
    pub artikel: bool,

    /// Lexicon for statute-name suffixes; defaults to the process-wide
    /// lexicon when one is installed.
    pub lexicon: Option<&'a Lexicon>,

    /// Resolver tunables.
    pub resolver: ResolverConfig,
}

impl Default for FindOptions<'_> {
    fn default() -> Self {
        Self {
            bwb: true,
            cvdr: true,
            ljn: false,
            ecli: true,
            celex: true,
            vindplaats: true,
            kamerstukken: true,
            euoj: true,
            eudir: true,
            artikel: true,
            lexicon: global_lexicon(),
            resolver: ResolverConfig::default(),
        }
    }
}

impl<'a> FindOptions<'a> {
    /// Use a specific lexicon instead of the process-wide one.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: &'a Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Toggle a family by its serialized name. Returns false for an
    /// unknown name.
    pub fn set_enabled(&mut self, family: &str, enabled: bool) -> bool {
        match family {
            "bwb" => self.bwb = enabled,
            "cvdr" => self.cvdr = enabled,
            "ljn" => self.ljn = enabled,
            "ecli" => self.ecli = enabled,
            "celex" => self.celex = enabled,
            "vindplaats" => self.vindplaats = enabled,
            "kamerstukken" => self.kamerstukken = enabled,
            "euoj" => self.euoj = enabled,
            "eudir" => self.eudir = enabled,
            "artikel" => self.artikel = enabled,
            _ => return false,
        }
        true
    }
}

/// Run all enabled matchers over `text`, ordered by start offset.
///
/// Matches from different families may overlap; nothing is merged or
/// deduplicated across families.
#[must_use]
pub fn find_references(text: &str, options: &FindOptions) -> Vec<Match> {
    let parser = StandardIdentifierParser;
    let mut matches = Vec::new();

    if options.bwb {
        matches.extend(find_bwb(text));
    }
    if options.cvdr {
        matches.extend(find_cvdr(text));
    }
    if options.ljn {
        matches.extend(find_ljn(text));
    }
    if options.ecli {
        matches.extend(find_ecli(text, &parser));
    }
    if options.celex {
        matches.extend(find_celex(text, &parser));
    }
    if options.vindplaats {
        matches.extend(find_vindplaats(text));
    }
    if options.kamerstukken {
        matches.extend(find_kamerstukken(text));
    }
    if options.euoj {
        matches.extend(find_euoj(text));
    }
    if options.eudir {
        matches.extend(find_eudir(text));
    }
    if options.artikel {
        matches.extend(find_article_references(
            text,
            options.lexicon,
            &options.resolver,
        ));
    }

    matches.sort_by_key(|m| m.start);
    matches
}
