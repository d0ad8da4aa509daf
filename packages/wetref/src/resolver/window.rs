//! Growth state for one article citation.
//!
//! An anchored match widens by fixed-point iteration: every pass scans the
//! text between window edge and match edge on both sides, and each
//! sub-pattern hit pulls the match over the hit and shifts the window edge
//! by the signed distance skipped. Passes repeat until none of them moves
//! the match. Side ranges are snapshotted at the start of a pass, so
//! patterns later in the registry still scan the range as it was when the
//! pass began; a later entry matching nearer text than an earlier entry
//! absorbed re-anchors the match end to the nearer hit, which is what keeps
//! a citation from leaping over an adjacent second citation.

use tracing::{debug, trace};

use crate::config::floor_char_boundary;
use crate::resolver::subpattern::{Mode, Side, SubPattern, SubPatternKey, REGISTRY};
use crate::types::ArtikelDetails;

/// The growing match and its search window, all in byte offsets.
#[derive(Debug, Clone)]
pub struct GrowthState {
    /// Current match start; only moves left.
    pub match_start: usize,

    /// Current match end; re-anchored to the end of the most recently
    /// absorbed hit, so it can move backwards within a pass.
    pub match_end: usize,

    /// Left window edge; only moves left.
    pub window_start: usize,

    /// Right window edge; follows the match end by the signed gap of each
    /// absorbed hit, clamped to the text length and a char boundary.
    pub window_end: usize,

    /// Detail fields recorded from absorbed sub-patterns.
    pub details: ArtikelDetails,
}

impl GrowthState {
    /// Start a growth state around an anchor span, with a window of
    /// `radius` bytes on both sides of the anchor start.
    #[must_use]
    pub fn anchored(
        anchor_start: usize,
        anchor_end: usize,
        radius: usize,
        text: &str,
        details: ArtikelDetails,
    ) -> Self {
        let window_start = floor_char_boundary(text, anchor_start.saturating_sub(radius));
        let window_end = floor_char_boundary(text, (anchor_start + radius).min(text.len()));
        Self {
            match_start: anchor_start,
            match_end: anchor_end,
            window_start,
            // The window is radius bytes from the anchor start; a long
            // anchor must still fit inside it.
            window_end: window_end.max(anchor_end),
            details,
        }
    }

    /// Run one pass over both side ranges. Returns whether the match span
    /// changed.
    pub fn pass(&mut self, text: &str) -> bool {
        // Snapshots: growth during the pass must not let later registry
        // entries see a larger range than the pass started with.
        let before = (self.window_start, self.match_start);
        let after = (self.match_end, self.window_end);

        let span = (self.match_start, self.match_end);
        for sp in REGISTRY.iter() {
            let (seg_start, seg_end) = match sp.side {
                Side::Before => before,
                Side::After => after,
            };
            if seg_start >= seg_end {
                continue;
            }
            self.apply(sp, text, seg_start, seg_end);
        }
        (self.match_start, self.match_end) != span
    }

    /// Iterate passes until the span stops changing.
    pub fn grow_to_fixed_point(&mut self, text: &str) {
        while self.pass(text) {
            if tracing::enabled!(tracing::Level::DEBUG) {
                // Re-anchoring can leave the window edge behind the match end
                let tail_end = self.window_end.max(self.match_end);
                let view = format!(
                    "{} [{}] {}",
                    &text[self.window_start..self.match_start],
                    &text[self.match_start..self.match_end],
                    &text[self.match_end..tail_end],
                );
                debug!(context = %textwrap::fill(&view, 70), "widened citation");
            }
        }
    }

    /// Try one sub-pattern against one side range.
    fn apply(&mut self, sp: &SubPattern, text: &str, seg_start: usize, seg_end: usize) {
        // Clip the haystack at the segment end so the pattern cannot run
        // past it; searching from seg_start keeps left context for \b.
        let haystack = &text[..seg_end];
        let Some(caps) = sp.regex.captures_at(haystack, seg_start) else {
            return;
        };
        let Some(full) = caps.get(0) else {
            return;
        };

        if sp.mode == Mode::Exclude {
            trace!(key = sp.key.as_str(), text = full.as_str(), "exclusion hit");
            return;
        }

        // First non-empty capture group, or the whole hit for patterns
        // without one.
        let value = caps
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map_or(full.as_str(), |g| g.as_str());
        self.record(sp.key, value);

        match sp.side {
            Side::Before => {
                if full.end() <= self.match_start {
                    let skipped = self.match_start - full.end();
                    self.match_start = full.start();
                    self.window_start =
                        floor_char_boundary(text, self.window_start.saturating_sub(skipped));
                }
            }
            Side::After => {
                // The gap is negative when this hit sits nearer than a hit
                // an earlier registry entry absorbed this pass; the match
                // end re-anchors to the nearer hit and the window follows.
                let gap = full.start() as i64 - self.match_end as i64;
                self.match_end = full.end();
                let shifted = (self.window_end as i64 + gap).clamp(0, text.len() as i64);
                self.window_end = floor_char_boundary(text, shifted as usize);
            }
        }
    }

    fn record(&mut self, key: SubPatternKey, value: &str) {
        let value = Some(value.to_string());
        match key {
            SubPatternKey::Hoofdstuk => self.details.hoofdstuk = value,
            SubPatternKey::Paragraaf => self.details.paragraaf = value,
            SubPatternKey::Aanwijzing => self.details.aanwijzing = value,
            SubPatternKey::Onderdeel => self.details.onderdeel = value,
            SubPatternKey::Lid => self.details.lid = value,
            SubPatternKey::AanhefOnder => self.details.aanhefonder = value,
            SubPatternKey::Sub => self.details.sub = value,
            SubPatternKey::VanDeHet => self.details.vandh = value,
            // Exclusion keys never reach here
            SubPatternKey::Grond | SubPatternKey::Bedoeld => {}
        }
    }
}
