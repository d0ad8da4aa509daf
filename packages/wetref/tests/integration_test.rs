//! End-to-end extraction tests over realistic text snippets.

use pretty_assertions::assert_eq;
use wetref::lexicon::NameEntry;
use wetref::references::{find_references, FindOptions};
use wetref::types::{Details, ReferenceKind};
use wetref::Lexicon;

fn lexicon() -> Lexicon {
    Lexicon::from_dataset([
        (
            "BWBR0045754",
            NameEntry {
                preferred: vec!["Wet open overheid".to_string()],
                secondary: vec!["Woo".to_string()],
            },
        ),
        (
            "BWBR0005537",
            NameEntry {
                preferred: vec!["Algemene wet bestuursrecht".to_string()],
                secondary: vec!["Awb".to_string()],
            },
        ),
    ])
}

#[test]
fn test_decision_paragraph() {
    let lex = lexicon();
    let text = "Bij besluit van 12 maart heeft verweerder het verzoek afgewezen \
                op grond van artikel 5.1, tweede lid, aanhef en onder i, van de Woo. \
                Zie ook ECLI:NL:RVS:2023:1234.";
    let matches = find_references(text, &FindOptions::default().with_lexicon(&lex));

    assert_eq!(matches.len(), 2);

    let artikel = &matches[0];
    assert_eq!(artikel.kind, ReferenceKind::Artikel);
    assert_eq!(
        artikel.text,
        "artikel 5.1, tweede lid, aanhef en onder i, van de Woo"
    );
    let Some(Details::Artikel(details)) = &artikel.details else {
        panic!("expected artikel details");
    };
    assert_eq!(details.artikel, "5.1");
    assert_eq!(details.lid_num, vec![2]);
    assert_eq!(details.law.as_deref(), Some("Woo"));

    let ecli = &matches[1];
    assert_eq!(ecli.kind, ReferenceKind::Ecli);
    assert_eq!(ecli.text, "ECLI:NL:RVS:2023:1234");
    assert!(!ecli.invalid);
}

#[test]
fn test_spans_always_slice_back_to_text() {
    let lex = lexicon();
    let text = "Ingevolge artikel 4:84 van de Algemene wet bestuursrecht handelt \
                het bestuursorgaan overeenkomstig de beleidsregel; vgl. \
                Kamerstukken II 2015/16, 34442, nr. 3 en BWBR0005537.";
    for m in find_references(text, &FindOptions::default().with_lexicon(&lex)) {
        assert!(text.is_char_boundary(m.start));
        assert!(text.is_char_boundary(m.end));
        assert_eq!(&text[m.start..m.end], m.text);
    }
}

#[test]
fn test_mixed_families_in_one_text() {
    let text = "De richtlijn (Council Directive 2006/112/EC, OJ L 347, p. 1) is \
                omgezet; zie Stb. 2023, 123 en CVDR101405/2 en CELEX 32016R0679.";
    let matches = find_references(text, &FindOptions::default());

    let kinds: Vec<&str> = matches.iter().map(|m| m.kind.as_str()).collect();
    assert!(kinds.contains(&"eudir"));
    assert!(kinds.contains(&"euoj"));
    assert!(kinds.contains(&"vindplaats"));
    assert!(kinds.contains(&"cvdr"));
    assert!(kinds.contains(&"celex"));

    for pair in matches.windows(2) {
        assert!(pair[0].start <= pair[1].start);
    }
}

#[test]
fn test_overlapping_article_anchors_stay_separate() {
    let lex = lexicon();
    let text = "artikel 3 van de Awb en artikel 3, tweede lid, van de Awb";
    let matches = find_references(text, &FindOptions::default().with_lexicon(&lex));

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].text, "artikel 3 van de Awb");
    assert_eq!(matches[1].text, "artikel 3, tweede lid, van de Awb");
}

#[test]
fn test_valid_ecli_parses_with_details() {
    let text = "zie ECLI:NL:HR:2020:123 hier";
    let matches = find_references(text, &FindOptions::default());
    assert_eq!(matches.len(), 1);
    assert!(!matches[0].invalid);
    assert!(matches[0].details.is_some());
}

#[test]
fn test_json_output_shape() {
    let matches = find_references("BWBR0001827", &FindOptions::default());
    let json = serde_json::to_value(&matches).unwrap();

    assert_eq!(json[0]["type"], "bwb");
    assert_eq!(json[0]["start"], 0);
    assert_eq!(json[0]["end"], 11);
    assert!(json[0].get("details").is_none());
}

#[test]
fn test_empty_and_plain_text() {
    assert!(find_references("", &FindOptions::default()).is_empty());
    assert!(find_references(
        "Dit is een gewone zin zonder juridische verwijzingen.",
        &FindOptions::default()
    )
    .is_empty());
}
