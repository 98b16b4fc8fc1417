//! Natural ordering for page filenames.
//!
//! Zine pages are numbered by hand (`1.png`, `2.png`, … `10.png`), so plain
//! lexicographic order puts `10.png` before `2.png`. This module splits a
//! filename into alternating text and digit runs and compares digit runs by
//! numeric value:
//!
//! ```text
//! "page10.png" → [Text("page"), Number(10), Text(".png")]
//! "3.png"      → [Text(""),     Number(3),  Text(".png")]
//! "cover.jpg"  → [Text("cover.jpg")]
//! ```
//!
//! ## Key Shape
//!
//! Every key starts with a text run (possibly empty) and then alternates, so
//! two keys never hold a number and a text run at the same position. A name
//! that starts with a digit has an empty leading text run and therefore sorts
//! before any name starting with a letter: `3.png` < `a.jpg` < `b.jpg`.
//!
//! Only ASCII digits `0`-`9` form digit runs. Other Unicode digits, such as
//! Arabic-Indic `٣` or fullwidth `３`, are treated as text and compare by
//! their code points.
//!
//! Digit runs have no length limit. Leading zeros are ignored, so `007` and
//! `7` produce equal tokens. Text runs compare by their lowercase form.
//! [`natural_cmp`] breaks ties between equal keys on the raw name, so the
//! ordering is total and stable across runs.

use std::cmp::Ordering;

/// One run of a [`NaturalKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ASCII digit run, leading zeros stripped (`"0"` for all-zero runs).
    Number(String),
    /// Lowercased non-digit run.
    Text(String),
}

impl Token {
    fn number(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Token::Number("0".to_string())
        } else {
            Token::Number(trimmed.to_string())
        }
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Without leading zeros, a longer digit run is a larger number.
            (Token::Number(a), Token::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Token::Text(a), Token::Text(b)) => a.cmp(b),
            // Unreachable for keys built by `natural_key`, kept total anyway.
            (Token::Number(_), Token::Text(_)) => Ordering::Less,
            (Token::Text(_), Token::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for a filename. Compared element by element; a shorter key that
/// is a prefix of a longer one sorts first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct NaturalKey(pub Vec<Token>);

/// Build the natural sort key for `name`.
pub fn natural_key(name: &str) -> NaturalKey {
    let mut tokens = Vec::new();
    let mut rest = name;
    loop {
        let text_end = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        tokens.push(Token::Text(rest[..text_end].to_lowercase()));
        rest = &rest[text_end..];
        if rest.is_empty() {
            break;
        }
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        tokens.push(Token::number(&rest[..digits_end]));
        rest = &rest[digits_end..];
    }
    NaturalKey(tokens)
}

/// Compare two names in natural order, falling back to the raw names when
/// their keys are equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a)
        .cmp(&natural_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort `names` in place in natural order.
pub fn sort_naturally(names: &mut [String]) {
    names.sort_by_cached_key(|name| (natural_key(name), name.clone()));
}
