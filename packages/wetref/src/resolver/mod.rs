//! Non-identifier article-reference resolver.
//!
//! Dutch legal prose cites articles as "artikel 5.1, tweede lid, aanhef en
//! onder i, van de Woo". There is no identifier to latch onto, so the
//! resolver anchors on the "artikel <designator>" core, grows the match
//! over adjacent clauses it recognizes ([`subpattern`]), and finally tries
//! to attach a statute name from the lexicon.

pub mod subpattern;
pub mod window;

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{floor_char_boundary, CONTEXT_RADIUS, LAW_SUFFIX_LOOKAHEAD};
use crate::lexicon::Lexicon;
use crate::ordinal::parse_ordinal_list;
use crate::types::{ArtikelDetails, Details, Match, ReferenceKind};
use crate::resolver::window::GrowthState;

/// Anchor: "artikel", "Art." or "art" followed by a designator.
#[allow(clippy::expect_used)]
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[Aa]rt(?:ikel|[.]|\b)\s*([0-9.:]+[a-z]*)").expect("valid regex")
});

/// Tunables for the resolver.
#[derive(Debug, Clone, Copy)]
pub struct ResolverConfig {
    /// Initial window radius around the anchor, in bytes.
    pub context_radius: usize,

    /// How far past the grown citation to look for a statute name.
    pub law_lookahead: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            context_radius: CONTEXT_RADIUS,
            law_lookahead: LAW_SUFFIX_LOOKAHEAD,
        }
    }
}

/// Find article references in `text`.
///
/// Every anchor yields a match, grown independently; overlapping results
/// from nearby anchors are all kept. When a lexicon is given, a statute
/// name directly following the grown citation is absorbed into the match
/// and recorded in the details.
#[must_use]
pub fn find_article_references(
    text: &str,
    lexicon: Option<&Lexicon>,
    config: &ResolverConfig,
) -> Vec<Match> {
    let mut matches = Vec::new();

    for caps in ANCHOR_RE.captures_iter(text) {
        let Some(full) = caps.get(0) else {
            continue;
        };
        let Some(designator) = caps.get(1) else {
            continue;
        };

        let details = ArtikelDetails::new(designator.as_str());
        let mut state = GrowthState::anchored(
            full.start(),
            full.end(),
            config.context_radius,
            text,
            details,
        );
        state.grow_to_fixed_point(text);

        let mut end = state.match_end;
        let mut details = state.details;

        if let Some(lid) = &details.lid {
            details.lid_num = parse_ordinal_list(lid);
        }

        if let Some(lexicon) = lexicon {
            let tail_end = floor_char_boundary(text, (end + config.law_lookahead).min(text.len()));
            if let Some(suffix) = lexicon.match_suffix(&text[end..tail_end]) {
                details.law = Some(suffix.name.clone());
                end += suffix.consumed;
            }
        }

        matches.push(
            Match::new(
                ReferenceKind::Artikel,
                state.match_start,
                end,
                &text[state.match_start..end],
            )
            .with_details(Details::Artikel(details)),
        );
    }

    matches
}
