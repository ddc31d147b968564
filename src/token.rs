// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Icon token parsing
//!
//! An icon token is written within a single word as
//!
//! ```none
//! token  := [sign] [digits] [sign] symbol suffix
//! suffix := (digit | '?')* ['-' | '+' | '*']
//! ```
//!
//! where `symbol` is any [`Catalog`] symbol. A sign followed by digits forms
//! the numeric prefix (the second sign is then ignored); a sign without digits
//! is a sign-only prefix. Text following the suffix is the *remainder*, which
//! may itself start another token (e.g. `$3%2` is a coin cost followed by a VP
//! token).

use crate::catalog::Catalog;
use smallvec::SmallVec;
use std::borrow::Cow;

/// Text substituted for an icon when measuring width
pub const ICON_PLACEHOLDER: &str = "     ";

/// A sign prefix
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Parse `+` or `-`
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Plus),
            '-' => Some(Sign::Minus),
            _ => None,
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

/// A parsed icon token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconToken {
    pub sign: Option<Sign>,
    pub number: Option<u32>,
    pub symbol: char,
    /// Raw suffix: digits and `?`, optionally ending with `-`, `+` or `*`
    pub suffix: String,
}

impl IconToken {
    /// Text drawn before the icon, if any
    ///
    /// This is the signed number (`"-3"`, `"2"`) or a lone sign (`"+"`).
    pub fn prefix_text(&self) -> Option<String> {
        match (self.sign, self.number) {
            (None, None) => None,
            (Some(sign), None) => Some(sign.as_char().to_string()),
            (None, Some(n)) => Some(n.to_string()),
            (Some(sign), Some(n)) => Some(format!("{}{n}", sign.as_char())),
        }
    }
}

/// Split a leading char satisfying `pred`
fn take_char(s: &str, pred: impl Fn(char) -> bool) -> Option<(char, &str)> {
    let c = s.chars().next()?;
    pred(c).then(|| (c, &s[c.len_utf8()..]))
}

/// Split the longest prefix of chars satisfying `pred`
fn take_while(s: &str, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let end = s.find(|c: char| !pred(c)).unwrap_or(s.len());
    s.split_at(end)
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

/// Split `symbol suffix` from the start of `s`
fn take_symbol_suffix<'a>(s: &'a str, catalog: &Catalog) -> Option<(char, &'a str, &'a str)> {
    let (symbol, rest) = take_char(s, |c| catalog.is_symbol(c))?;
    let (digits, rest) = take_while(rest, |c| c.is_ascii_digit() || c == '?');
    let special_len = take_char(rest, |c| matches!(c, '-' | '+' | '*'))
        .map(|(c, _)| c.len_utf8())
        .unwrap_or(0);
    let suffix_len = digits.len() + special_len;
    let start = s.len() - rest.len() - digits.len();
    Some((symbol, &s[start..start + suffix_len], &s[start + suffix_len..]))
}

/// Parse an icon token from the start of `word`
///
/// Returns the token and the remainder of the word, or `None` if `word` does
/// not start with a token or contains whitespace after it.
pub fn parse_token<'a>(word: &'a str, catalog: &Catalog) -> Option<(IconToken, &'a str)> {
    let lead_sign = word.chars().next().and_then(Sign::from_char);
    let after_sign = match lead_sign {
        Some(_) => &word[1..],
        None => word,
    };

    let (digits, after_digits) = take_while(after_sign, |c| c.is_ascii_digit());
    let (sign, number, rest) = if !digits.is_empty() {
        let number = digits.parse::<u32>().ok()?;
        let rest = take_char(after_digits, is_sign)
            .map(|(_, rest)| rest)
            .unwrap_or(after_digits);
        (lead_sign, Some(number), rest)
    } else {
        (lead_sign, None, after_sign)
    };

    let (symbol, suffix, remainder) = take_symbol_suffix(rest, catalog)?;
    if remainder.contains(char::is_whitespace) {
        return None;
    }

    let token = IconToken {
        sign,
        number,
        symbol,
        suffix: suffix.to_string(),
    };
    Some((token, remainder))
}

/// True if `word` is (or starts with) an icon token
#[inline]
pub fn is_token_word(word: &str, catalog: &Catalog) -> bool {
    parse_token(word, catalog).is_some()
}

/// A word split into icon tokens and trailing text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Word<'a> {
    /// Leading icon tokens, in logical order
    pub tokens: SmallVec<[IconToken; 2]>,
    /// Text after the last token (the whole word when there are no tokens)
    pub tail: &'a str,
}

/// Split a whitespace-free word into chained tokens and a trailing text tail
pub fn tokenize_word<'a>(word: &'a str, catalog: &Catalog) -> Word<'a> {
    let mut tokens = SmallVec::new();
    let mut rest = word;
    while !rest.is_empty() {
        match parse_token(rest, catalog) {
            Some((token, remainder)) => {
                tokens.push(token);
                rest = remainder;
            }
            None => break,
        }
    }
    Word { tokens, tail: rest }
}

/// Replace every `[sign] symbol suffix` occurrence with [`ICON_PLACEHOLDER`]
///
/// Text is measured in this form: an icon occupies the width of the
/// placeholder, not that of its symbol. Number prefixes are kept as text.
pub fn substitute_icons<'a>(text: &'a str, catalog: &Catalog) -> Cow<'a, str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        let start = if is_sign(c) { pos + 1 } else { pos };
        match take_symbol_suffix(&text[start..], catalog) {
            Some((_, _, rest)) => {
                out.push_str(&text[copied..pos]);
                out.push_str(ICON_PLACEHOLDER);
                copied = text.len() - rest.len();
                pos = copied;
            }
            None => pos += c.len_utf8(),
        }
    }

    if copied == 0 {
        Cow::Borrowed(text)
    } else {
        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::catalog::catalog;

    fn parse(word: &str) -> Option<(IconToken, &str)> {
        parse_token(word, catalog())
    }

    #[test]
    fn signed_number_symbol_suffix() {
        for entry in catalog().entries() {
            let word = format!("-3{}2*", entry.symbol);
            let (token, rest) = parse(&word).unwrap();
            assert_eq!(token.sign, Some(Sign::Minus));
            assert_eq!(token.number, Some(3));
            assert_eq!(token.symbol, entry.symbol);
            assert_eq!(token.suffix, "2*");
            assert_eq!(rest, "");
            assert_eq!(token.prefix_text().as_deref(), Some("-3"));
        }
    }

    #[test]
    fn sign_only_prefix() {
        let (token, _) = parse("+$").unwrap();
        assert_eq!(token.sign, Some(Sign::Plus));
        assert_eq!(token.number, None);
        assert_eq!(token.prefix_text().as_deref(), Some("+"));

        let (token, _) = parse("-@").unwrap();
        assert_eq!(token.prefix_text().as_deref(), Some("-"));

        // A sign after the digits is dropped
        let (token, _) = parse("3+$").unwrap();
        assert_eq!((token.sign, token.number), (None, Some(3)));
        assert_eq!(token.prefix_text().as_deref(), Some("3"));
    }

    #[test]
    fn suffix_forms() {
        assert_eq!(parse("$").unwrap().0.suffix, "");
        assert_eq!(parse("$?").unwrap().0.suffix, "?");
        assert_eq!(parse("$10+").unwrap().0.suffix, "10+");
        assert_eq!(parse("$4-").unwrap().0.suffix, "4-");
        // `*` terminates the suffix rather than starting a Sun token
        let (token, rest) = parse("$*").unwrap();
        assert_eq!((token.symbol, token.suffix.as_str(), rest), ('$', "*", ""));
    }

    #[test]
    fn not_tokens() {
        assert!(parse("card").is_none());
        assert!(parse("+1").is_none());
        assert!(parse("+-$").is_none());
        assert!(parse("").is_none());
        assert!(parse("$2\u{00A0}Card").is_none());
        assert!(parse("99999999999$").is_none());
    }

    #[test]
    fn remainder_is_returned() {
        let (token, rest) = parse("$2,").unwrap();
        assert_eq!(token.suffix, "2");
        assert_eq!(rest, ",");
    }

    #[test]
    fn chained_tokens() {
        let word = tokenize_word("$3%2", catalog());
        assert_eq!(word.tokens.len(), 2);
        assert_eq!(word.tokens[0].symbol, '$');
        assert_eq!(word.tokens[0].suffix, "3");
        assert_eq!(word.tokens[1].symbol, '%');
        assert_eq!(word.tokens[1].suffix, "2");
        assert_eq!(word.tail, "");

        let word = tokenize_word("$2.", catalog());
        assert_eq!(word.tokens.len(), 1);
        assert_eq!(word.tail, ".");

        let word = tokenize_word("Gain", catalog());
        assert!(word.tokens.is_empty());
        assert_eq!(word.tail, "Gain");
    }

    #[test]
    fn substitution() {
        let cat = catalog();
        assert!(matches!(substitute_icons("plain text", cat), Cow::Borrowed(_)));
        assert_eq!(substitute_icons("+2$ and a", cat), format!("+2{ICON_PLACEHOLDER} and a"));
        assert_eq!(substitute_icons("-$3%", cat), ICON_PLACEHOLDER.repeat(2));
        assert_eq!(substitute_icons("x$2*y", cat), format!("x{ICON_PLACEHOLDER}y"));
        assert_eq!(substitute_icons("a - b", cat), "a - b");
    }
}
