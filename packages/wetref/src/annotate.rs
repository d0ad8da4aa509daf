//! Entity annotation over tokenized documents.
//!
//! Bridges extraction results onto a token-level document representation:
//! each reference becomes an entity span labeled with the uppercased kind
//! name. The walk assumes token starts are ascending and that reference
//! spans do not start before the previous one, which [`crate::references`]
//! guarantees by sorting.

use crate::references::{find_references, FindOptions};

/// A labeled token range, end exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Index of the first token of the entity.
    pub start_token: usize,

    /// Index one past the last token.
    pub end_token: usize,

    /// Uppercased reference-kind label ("ECLI", "ARTIKEL", ...).
    pub label: String,
}

/// A document that exposes token start offsets and accepts entity spans.
pub trait AnnotatedDocument {
    /// Byte offset of each token start, ascending.
    fn token_starts(&self) -> &[usize];

    /// Replace the document's entity spans.
    fn set_entities(&mut self, spans: Vec<EntitySpan>);
}

/// Minimal [`AnnotatedDocument`] over whitespace tokens.
#[derive(Debug, Default)]
pub struct SimpleDoc {
    starts: Vec<usize>,

    /// Entities from the last [`mark_references`] call.
    pub entities: Vec<EntitySpan>,
}

impl SimpleDoc {
    /// Tokenize on whitespace, remembering each token's start offset.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut starts = Vec::new();
        let mut in_token = false;
        for (offset, c) in text.char_indices() {
            if c.is_whitespace() {
                in_token = false;
            } else if !in_token {
                starts.push(offset);
                in_token = true;
            }
        }
        Self {
            starts,
            entities: Vec::new(),
        }
    }
}

impl AnnotatedDocument for SimpleDoc {
    fn token_starts(&self) -> &[usize] {
        &self.starts
    }

    fn set_entities(&mut self, spans: Vec<EntitySpan>) {
        self.entities = spans;
    }
}

/// Run extraction over `text` and attach the results to `doc` as entity
/// spans.
///
/// Token alignment is forward-only: a reference maps to the tokens whose
/// start offsets fall inside its byte span. References that begin inside
/// a token are aligned to the next token start.
pub fn mark_references(doc: &mut dyn AnnotatedDocument, text: &str, options: &FindOptions) {
    let starts = doc.token_starts().to_vec();
    let mut spans = Vec::new();
    let mut token = 0;

    for m in find_references(text, options) {
        while token < starts.len() && starts[token] < m.start {
            token += 1;
        }
        let mut end_token = token;
        while end_token < starts.len() && starts[end_token] < m.end {
            end_token += 1;
        }
        if end_token > token {
            spans.push(EntitySpan {
                start_token: token,
                end_token,
                label: m.kind.as_str().to_uppercase(),
            });
        }
    }

    doc.set_entities(spans);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_doc_token_starts() {
        let doc = SimpleDoc::from_text("een  twee\ndrie");
        assert_eq!(doc.token_starts(), &[0, 5, 10]);
    }

    #[test]
    fn test_mark_single_reference() {
        let text = "Zie ECLI:NL:HR:2020:123 voor meer";
        let mut doc = SimpleDoc::from_text(text);
        mark_references(&mut doc, text, &FindOptions::default());

        assert_eq!(
            doc.entities,
            vec![EntitySpan {
                start_token: 1,
                end_token: 2,
                label: "ECLI".to_string(),
            }]
        );
    }

    #[test]
    fn test_mark_multi_token_reference() {
        let text = "artikel 3, tweede lid, geldt";
        let mut doc = SimpleDoc::from_text(text);
        mark_references(&mut doc, text, &FindOptions::default());

        assert_eq!(doc.entities.len(), 1);
        let span = &doc.entities[0];
        assert_eq!(span.label, "ARTIKEL");
        assert_eq!(span.start_token, 0);
        // Covers "artikel", "3,", "tweede" and "lid,"
        assert_eq!(span.end_token, 4);
    }

    #[test]
    fn test_mark_nothing_on_plain_text() {
        let text = "gewone lopende tekst";
        let mut doc = SimpleDoc::from_text(text);
        mark_references(&mut doc, text, &FindOptions::default());
        assert!(doc.entities.is_empty());
    }

    #[test]
    fn test_forward_only_walk_keeps_order() {
        let text = "BWBR0001827 en daarna ECLI:NL:HR:2020:123";
        let mut doc = SimpleDoc::from_text(text);
        mark_references(&mut doc, text, &FindOptions::default());

        let labels: Vec<&str> = doc.entities.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["BWB", "ECLI"]);
        assert!(doc.entities[0].end_token <= doc.entities[1].start_token);
    }
}
