//! Composable regex-fragment builders.
//!
//! The citation patterns in this crate share a handful of conventions: a
//! literal space in a citation template stands for "one or more
//! space/newline", an optional gap stands for "zero or more", and article
//! designators always look like `5.1a`. Building patterns from these named
//! fragments keeps the larger expressions readable without resorting to
//! placeholder substitution on the pattern string.

/// One or more whitespace/newline characters (a mandatory gap).
#[must_use]
pub fn ws1() -> String {
    r"[\s\n]+".to_string()
}

/// Zero or more whitespace/newline characters (an optional gap).
#[must_use]
pub fn ws0() -> String {
    r"[\s\n]*".to_string()
}

/// An article-style designator: digits/dots/colons with an optional letter
/// suffix, captured (e.g. "5.1a", "3:15", "81").
#[must_use]
pub fn designator() -> String {
    r"([0-9.:]+[a-z]*)".to_string()
}

/// Non-capturing alternation of literal strings, in the given order.
///
/// The inputs are escaped, so any regex metacharacters in the literals are
/// matched verbatim.
#[must_use]
pub fn literal_alt<I, S>(options: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped: Vec<String> = options
        .into_iter()
        .map(|s| regex::escape(s.as_ref()))
        .collect();
    format!("(?:{})", escaped.join("|"))
}

/// Non-capturing alternation of raw (already regex-safe) fragments.
#[must_use]
pub fn alt<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = fragments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    format!("(?:{})", parts.join("|"))
}

/// `fragment`, made optional.
#[must_use]
pub fn opt(fragment: &str) -> String {
    format!("(?:{fragment})?")
}

/// `fragment`, repeated zero or more times.
#[must_use]
pub fn star(fragment: &str) -> String {
    format!("(?:{fragment})*")
}

/// `fragment`, repeated one or more times.
#[must_use]
pub fn plus(fragment: &str) -> String {
    format!("(?:{fragment})+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_literal_alt_escapes() {
        let pat = literal_alt(["nr.", "p.", "blz."]);
        let re = Regex::new(&format!("^{pat}$")).unwrap();
        assert!(re.is_match("nr."));
        assert!(re.is_match("blz."));
        // The dot is literal, not "any character"
        assert!(!re.is_match("nrX"));
    }

    #[test]
    fn test_designator_matches_article_numbers() {
        let re = Regex::new(&format!("^{}$", designator())).unwrap();
        for ok in ["5.1a", "3:15", "81", "2.1"] {
            assert!(re.is_match(ok), "should match {ok}");
        }
        assert!(!re.is_match("abc"));
    }

    #[test]
    fn test_composition() {
        let pat = format!("artikel{}{}", ws1(), designator());
        let re = Regex::new(&pat).unwrap();
        let caps = re.captures("artikel \n 5.1a").unwrap();
        assert_eq!(&caps[1], "5.1a");
    }

    #[test]
    fn test_opt_star_plus() {
        let re = Regex::new(&format!("^a{}c$", opt("b"))).unwrap();
        assert!(re.is_match("ac"));
        assert!(re.is_match("abc"));

        let re = Regex::new(&format!("^a{}$", star("b"))).unwrap();
        assert!(re.is_match("a"));
        assert!(re.is_match("abbb"));

        let re = Regex::new(&format!("^a{}$", plus("b"))).unwrap();
        assert!(!re.is_match("a"));
        assert!(re.is_match("ab"));
    }
}
