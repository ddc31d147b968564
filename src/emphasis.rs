// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Keyword emphasis
//!
//! Certain keywords render bold, together with the number which modifies them
//! (`+1 Card`, `Buy +1`, `+Action`). Matching is case-insensitive. Four forms
//! are recognised; matching any one of them is sufficient:
//!
//! 1.  *prefix*: a signed number, whitespace, then a keyword; or `+`
//!     immediately followed by a keyword
//! 2.  *suffix*: a keyword (optionally plural), whitespace, then a signed
//!     number or `+`
//! 3.  *special*: one of the special keywords (`favor`), optionally preceded
//!     by a signed number, an *unsigned* number or `+`
//! 4.  *bare*: a keyword standing alone between whitespace
//!
//! Forms 1–3 match anywhere within the text; keywords need not end at a word
//! boundary.

/// Keywords always emphasised
pub const BASE_KEYWORDS: &[&str] = &[
    "card",
    "buy",
    "action",
    "coffer",
    "villager",
    "קלף",
    "רכישה",
    "פעולה",
    "קלפים",
    "רכישות",
    "פעולות",
    "aktion",
    "aktionen",
    "karte",
    "karten",
    "kauf",
    "käufe",
    "dorfbewohner",
    "münze",
    "münzen",
];

/// Keywords which also accept an unsigned number prefix
pub const SPECIAL_KEYWORDS: &[&str] = &["favor", "gefallen"];

/// Separator of custom keywords
pub const KEYWORD_DELIMITER: char = ';';

/// No-break space, used to bind a number to its keyword
pub const NBSP: char = '\u{00A0}';

/// Whitespace which may separate a number from its keyword
///
/// Line breaks are excluded: a binding never spans lines.
#[inline]
fn is_gap(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

/// Compare chars under simple case folding
#[inline]
fn eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// If `text` starts with `keyword` (case-insensitive), return the rest
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for k in keyword.chars() {
        let (_, c) = chars.next()?;
        if !eq_fold(c, k) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Candidate ends after `keyword` and an optional plural `s`, longest first
fn keyword_ends<'a>(text: &'a str, keyword: &str) -> impl Iterator<Item = &'a str> {
    let rest = strip_keyword(text, keyword);
    let plural = rest.and_then(|r| r.strip_prefix(['s', 'S']));
    plural.into_iter().chain(rest)
}

/// Strip `[-+]digits`
fn strip_signed_number(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(['+', '-'])?;
    strip_digits(rest)
}

/// Strip one or more ASCII digits
fn strip_digits(text: &str) -> Option<&str> {
    let rest = text.trim_start_matches(|c: char| c.is_ascii_digit());
    (rest.len() < text.len()).then_some(rest)
}

/// Strip one or more gap chars
fn strip_gap(text: &str) -> Option<&str> {
    let rest = text.trim_start_matches(is_gap);
    (rest.len() < text.len()).then_some(rest)
}

/// A match of a binding form
///
/// Offsets are relative to the start of the match. `gap` is the whitespace
/// to be replaced by a no-break space (empty if nothing is to be bound).
#[derive(Clone, Copy, Debug, PartialEq)]
struct Binding {
    gap: (usize, usize),
    end: usize,
}

/// Keyword configuration and pattern matching
///
/// This is rebuilt from the user's custom keyword string (see
/// [`EmphasisConfig::rebuild`]) and passed to layout by reference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmphasisConfig {
    keywords: Vec<String>,
    special: Vec<String>,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        EmphasisConfig::new("")
    }
}

impl EmphasisConfig {
    /// Construct from the base keywords plus `custom`
    ///
    /// `custom` is a list of keywords separated by [`KEYWORD_DELIMITER`].
    pub fn new(custom: &str) -> Self {
        let mut config = EmphasisConfig {
            keywords: vec![],
            special: SPECIAL_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        };
        config.rebuild(custom);
        config
    }

    /// Replace custom keywords
    ///
    /// Entries are trimmed; empty entries are ignored. Calling this twice
    /// with the same input yields the same configuration.
    pub fn rebuild(&mut self, custom: &str) {
        self.keywords.clear();
        self.keywords
            .extend(BASE_KEYWORDS.iter().map(|s| s.to_string()));
        self.keywords.extend(
            custom
                .split(KEYWORD_DELIMITER)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
        log::trace!("EmphasisConfig: {} keywords", self.keywords.len());
    }

    /// Iterate over keywords (base and custom)
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Iterate over special keywords
    pub fn special_keywords(&self) -> impl Iterator<Item = &str> {
        self.special.iter().map(String::as_str)
    }

    /// Prefix form at the start of `text`
    fn prefix_at(&self, text: &str) -> Option<Binding> {
        if let Some(after_num) = strip_signed_number(text) {
            if let Some(after_gap) = strip_gap(after_num) {
                for kw in &self.keywords {
                    if let Some(rest) = keyword_ends(after_gap, kw).next() {
                        let gap = (text.len() - after_num.len(), text.len() - after_gap.len());
                        let end = text.len() - rest.len();
                        return Some(Binding { gap, end });
                    }
                }
            }
        }

        let after_plus = text.strip_prefix('+')?;
        self.keywords.iter().find_map(|kw| {
            keyword_ends(after_plus, kw).next().map(|rest| Binding {
                gap: (1, 1),
                end: text.len() - rest.len(),
            })
        })
    }

    /// Suffix form at the start of `text`
    fn suffix_at(&self, text: &str) -> Option<Binding> {
        for kw in &self.keywords {
            for after_kw in keyword_ends(text, kw) {
                let Some(after_gap) = strip_gap(after_kw) else {
                    continue;
                };
                let rest = strip_signed_number(after_gap).or_else(|| after_gap.strip_prefix('+'));
                if let Some(rest) = rest {
                    let gap = (text.len() - after_kw.len(), text.len() - after_gap.len());
                    return Some(Binding {
                        gap,
                        end: text.len() - rest.len(),
                    });
                }
            }
        }
        None
    }

    /// Special form at the start of `text`
    fn special_at(&self, text: &str) -> Option<Binding> {
        let numbered = strip_signed_number(text).or_else(|| strip_digits(text));
        if let Some(after_num) = numbered {
            if let Some(after_gap) = strip_gap(after_num) {
                if let Some(rest) = self.special_keyword_end(after_gap) {
                    let gap = (text.len() - after_num.len(), text.len() - after_gap.len());
                    let end = text.len() - rest.len();
                    return Some(Binding { gap, end });
                }
            }
        }

        let after_plus = text.strip_prefix('+').unwrap_or(text);
        let start = text.len() - after_plus.len();
        self.special_keyword_end(after_plus).map(|rest| Binding {
            gap: (start, start),
            end: text.len() - rest.len(),
        })
    }

    fn special_keyword_end<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.special
            .iter()
            .find_map(|kw| keyword_ends(text, kw).next())
    }

    /// Bare form at the start of `text`, given the preceding char
    fn bare_at(&self, prev: Option<char>, text: &str) -> bool {
        if prev.map(|c| !c.is_whitespace()).unwrap_or(false) {
            return false;
        }
        self.keywords.iter().any(|kw| {
            strip_keyword(text, kw)
                .map(|rest| rest.chars().next().map(char::is_whitespace).unwrap_or(true))
                .unwrap_or(false)
        })
    }

    /// Test form 1 (signed number or `+` before a keyword)
    pub fn matches_prefix_form(&self, text: &str) -> bool {
        char_starts(text).any(|i| self.prefix_at(&text[i..]).is_some())
    }

    /// Test form 2 (keyword before a signed number or `+`)
    pub fn matches_suffix_form(&self, text: &str) -> bool {
        char_starts(text).any(|i| self.suffix_at(&text[i..]).is_some())
    }

    /// Test form 3 (special keywords)
    pub fn matches_special_form(&self, text: &str) -> bool {
        char_starts(text).any(|i| self.special_at(&text[i..]).is_some())
    }

    /// Test form 4 (a keyword standing alone)
    pub fn matches_bare_form(&self, text: &str) -> bool {
        char_starts(text).any(|i| self.bare_at(text[..i].chars().next_back(), &text[i..]))
    }

    /// True if `text` matches any emphasis form
    pub fn is_emphasized(&self, text: &str) -> bool {
        self.matches_prefix_form(text)
            || self.matches_suffix_form(text)
            || self.matches_special_form(text)
            || self.matches_bare_form(text)
    }

    /// Bind numbers to the keywords they modify
    ///
    /// The whitespace between a number and its keyword (forms 1–3) is
    /// replaced by a single no-break space so that the pair is one word for
    /// wrapping and emphasis.
    pub fn bind(&self, text: &str) -> String {
        let text = bind_pass(text, |s| self.prefix_at(s));
        let text = bind_pass(&text, |s| self.suffix_at(s));
        let text = bind_pass(&text, |s| self.special_at(s));
        collapse_after_nbsp(&text)
    }
}

/// Byte offsets of all char starts
fn char_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    text.char_indices().map(|(i, _)| i)
}

/// Apply one binding form globally, left to right without overlap
fn bind_pass(text: &str, find: impl Fn(&str) -> Option<Binding>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        match find(&text[pos..]) {
            Some(binding) if binding.end > 0 => {
                let (gap_start, gap_end) = (pos + binding.gap.0, pos + binding.gap.1);
                out.push_str(&text[copied..gap_start]);
                if gap_end > gap_start {
                    out.push(NBSP);
                }
                copied = gap_end;
                pos += binding.end;
            }
            _ => pos += c.len_utf8(),
        }
    }
    out.push_str(&text[copied..]);
    out
}

/// Remove whitespace following a no-break space
fn collapse_after_nbsp(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_nbsp = false;
    for c in text.chars() {
        if after_nbsp && is_gap(c) {
            continue;
        }
        after_nbsp = c == NBSP;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefix_form() {
        let config = EmphasisConfig::default();
        assert!(config.matches_prefix_form("+1 Card"));
        assert!(config.matches_prefix_form("+2\u{00A0}Actions."));
        assert!(config.matches_prefix_form("+Buy"));
        assert!(config.matches_prefix_form("-1 card"));
        assert!(!config.matches_prefix_form("1 Card"));
        assert!(!config.matches_prefix_form("Card"));
    }

    #[test]
    fn suffix_form() {
        let config = EmphasisConfig::default();
        assert!(config.matches_suffix_form("Cards +1"));
        assert!(config.matches_suffix_form("Karten\u{00A0}+2"));
        assert!(config.matches_suffix_form("buy +"));
        assert!(!config.matches_suffix_form("buy 1"));
    }

    #[test]
    fn special_form_accepts_unsigned_number() {
        let config = EmphasisConfig::default();
        assert!(config.matches_special_form("2 Favors"));
        assert!(config.matches_special_form("Favor"));
        assert!(!config.matches_prefix_form("2 Cards"));
        assert_eq!(config.bind("take 2 Favors"), "take 2\u{00A0}Favors");
        assert_eq!(config.bind("+1 Gefallen"), "+1\u{00A0}Gefallen");
    }

    #[test]
    fn bare_form() {
        let config = EmphasisConfig::default();
        assert!(config.matches_bare_form("Card"));
        assert!(config.matches_bare_form("a card here"));
        assert!(config.matches_bare_form("KÄUFE"));
        assert!(config.matches_bare_form("קלף"));
        assert!(!config.matches_bare_form("Cards"));
        assert!(!config.matches_bare_form("discard"));
        assert!(!config.matches_bare_form("card,"));
    }

    #[test]
    fn custom_keywords() {
        let mut config = EmphasisConfig::new(" Horse ; ;Ticket");
        assert!(config.is_emphasized("+1\u{00A0}Horse"));
        assert!(config.is_emphasized("ticket"));
        let before = config.clone();
        config.rebuild(" Horse ; ;Ticket");
        assert_eq!(config, before);
        config.rebuild("");
        assert!(!config.is_emphasized("ticket"));
    }

    #[test]
    fn binding() {
        let config = EmphasisConfig::default();
        assert_eq!(
            config.bind("+1 Card +1  Action"),
            "+1\u{00A0}Card\u{00A0}+1\u{00A0}Action"
        );
        assert_eq!(config.bind("+2 Cards and"), "+2\u{00A0}Cards and");
        assert_eq!(config.bind("Buy +1"), "Buy\u{00A0}+1");
        assert_eq!(config.bind("+Buy"), "+Buy");
        assert_eq!(config.bind("+1\nCard"), "+1\nCard");
        assert_eq!(config.bind("nothing here"), "nothing here");
    }
}
