//! Semi-structured citation matchers.
//!
//! Parliamentary-document citations and EU Official Journal / Directive
//! citations are textual conventions rather than identifiers, with line
//! breaks allowed almost anywhere. The patterns here treat every gap in the
//! citation template as "one or more space/newline" (see [`crate::pattern`])
//! and deliberately stop at span extraction: parsing the inner fields
//! (session years, dossier numbers) is deferred.

use std::sync::LazyLock;

use regex::Regex;

use crate::pattern::{alt, literal_alt, opt, plus, star, ws0, ws1};
use crate::types::{Match, ReferenceKind};

/// Parliamentary-document citation.
///
/// Requires a chamber/category keyword and a session year; dossier numbers,
/// item numbers, page references and bare uppercase codes may trail in any
/// combination. Examples:
///
/// - `Kamerstukken II 2015/16, 34442, nr. 3, p. 7`
/// - `Kamerstukken I 2014/15, 33802, C, p. 3`
/// - `Aanhangsel Handelingen II 2019/20, 1234`
#[allow(clippy::expect_used)]
static KAMERSTUKKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    let chamber = alt([
        "Kamerstukken".to_string(),
        format!("Aanhangsel{}Handelingen", ws1()),
        "Handelingen".to_string(),
    ]);
    let chamber_number = opt(&format!("{}(?:II|I|2|1)", ws1()));
    let session_year = format!(",?{}(?:vergaderjaar{})?[0-9]+[/-][0-9]+", ws0(), ws1());
    let dossier = format!("{},{}[0-9]+(?:{}[XVI]+)?", ws0(), ws0(), ws1());
    let item = format!("{},{}item{}[0-9]+", ws0(), ws1(), ws1());
    let page = format!(
        "{},{}{}\\.{}[0-9-]+",
        ws0(),
        ws1(),
        literal_alt(["nr", "p", "blz"]),
        ws0()
    );
    let code = format!("{},{}[A-Z]+", ws0(), ws1());
    let trailing = star(&alt([dossier, item, page, code]));

    let pattern = format!("{chamber}{chamber_number}{}{session_year}{trailing}", ws0());
    Regex::new(&pattern).expect("valid regex")
});

/// EU Official Journal citation: "OJ L 119, 4.5.2016, p. 1-88".
#[allow(clippy::expect_used)]
static EUOJ_RE: LazyLock<Regex> = LazyLock::new(|| {
    let journal = alt(["OJ".to_string(), format!("Official{}Journal", ws1())]);
    let series = literal_alt(["C", "CA", "CI", "CE", "L", "LI", "LA", "LM", "A", "P"]);
    let sub_parts = star(&alt([r"[\s]?[A-Z]".to_string(), "/[0-9]".to_string()]));
    let page_range = format!(
        r",{}p\.{}[0-9\u{{2013}}-]+(?:\s*[\u{{2013}}-]\s*[0-9-]+)*",
        ws1(),
        ws1()
    );
    let date = format!(r",{}[0-9]{{1,2}}[./][0-9]{{1,2}}[./][0-9][0-9]{{2,4}}", ws1());
    let qualifiers = plus(&alt([page_range, date]));

    let pattern = format!(r"{journal}[\s]?{series}{}[0-9]+{sub_parts}{qualifiers}", ws1());
    Regex::new(&pattern).expect("valid regex")
});

/// EU Directive citation: "Council Directive 2006/112/EC".
///
/// The suffix alternation is ordered longest-first so "/EEC" is matched in
/// full rather than truncated to "/EC".
#[allow(clippy::expect_used)]
static EUDIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?:Council{})?Directive{}[0-9]{{2,4}}/[0-9]+(?:/EEC|/EC|/EU)?",
        ws1(),
        ws1()
    );
    Regex::new(&pattern).expect("valid regex")
});

fn collect_matches(re: &Regex, kind: ReferenceKind, text: &str) -> Vec<Match> {
    re.find_iter(text)
        .map(|m| Match::new(kind, m.start(), m.end(), m.as_str()))
        .collect()
}

/// Find parliamentary-document citations.
#[must_use]
pub fn find_kamerstukken(text: &str) -> Vec<Match> {
    collect_matches(&KAMERSTUKKEN_RE, ReferenceKind::Kamerstukken, text)
}

/// Find EU Official Journal citations.
#[must_use]
pub fn find_euoj(text: &str) -> Vec<Match> {
    collect_matches(&EUOJ_RE, ReferenceKind::Euoj, text)
}

/// Find EU Directive citations.
#[must_use]
pub fn find_eudir(text: &str) -> Vec<Match> {
    collect_matches(&EUDIR_RE, ReferenceKind::Eudir, text)
}
