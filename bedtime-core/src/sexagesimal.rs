//! `HH:MM` notation for minute counts.
//!
//! Parsing is deliberately forgiving (think microwave oven keypad): every
//! non-digit is dropped, the last two digits are minutes and everything before
//! them is hours. `"12:30"`, `"1230"` and `"h1i2j3k0"` all mean 750 minutes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::iter::FusedIterator;

/// Largest storable minute count, `23:59`.
pub const MAX_MINUTES: u32 = 24 * 60 - 1;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));

/// Notates a length of time in minutes as `"HH:MM"`.
///
/// Padding is a minimum width: 6000 minutes is `"100:00"`.
///
/// # Examples
///
/// ```
/// # use bedtime_core::sexagesimal::encode;
/// assert_eq!(encode(125), "02:05");
/// ```
pub fn encode(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Interprets `input` as `"[hours][MM]"`, ignoring anything that isn't a digit.
///
/// Missing parts count as zero and the result is clamped to `00:00..=23:59`,
/// so this never fails.
///
/// # Examples
///
/// ```
/// # use bedtime_core::sexagesimal::decode;
/// assert_eq!(decode("99"), 99);
/// assert_eq!(decode("130"), 90);
/// assert_eq!(decode("12:30"), 750);
/// assert_eq!(decode("9999"), 1439);
/// ```
pub fn decode(input: &str) -> u32 {
    let digits = NON_DIGITS.replace_all(input, "");
    let (hour_digits, minute_digits) = digits.split_at(digits.len().saturating_sub(2));
    let hours = parse_digits(hour_digits);
    let minutes = parse_digits(minute_digits);
    clamp_to_valid_minutes(hours.saturating_mul(60).saturating_add(minutes))
}

/// Clamps any minute count into `0..=MAX_MINUTES`.
pub fn clamp_to_valid_minutes(minutes: i64) -> u32 {
    minutes.clamp(0, i64::from(MAX_MINUTES)) as u32
}

// Input is ASCII digits only, so the parse can only fail by overflowing.
fn parse_digits(digits: &str) -> i64 {
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(i64::MAX)
}

/// A candidate value offered while the user is typing a cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Normalized `HH:MM` text that replaces the input when picked.
    pub content: String,
    /// Extra hint shown next to the content, may be empty.
    pub annotation: String,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.content, self.annotation)
    }
}

/// Lazily yields the suggestions for one query.
///
/// Clone it to walk the same suggestions again.
#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    query: &'a str,
    position: u8,
}

/// Suggestions for a partially typed cutoff.
///
/// The first suggestion is always the normalized form of `query`, which tells
/// the user how their input is being read. When `query` has no colon and
/// starts with an integer, that integer read as a plain minute count follows,
/// unless it is zero or says the same thing as the first one.
pub fn suggest(query: &str) -> Suggestions<'_> {
    Suggestions { query, position: 0 }
}

impl Suggestions<'_> {
    fn normalized(&self) -> Suggestion {
        Suggestion {
            content: encode(decode(self.query)),
            annotation: String::new(),
        }
    }

    fn as_plain_minutes(&self) -> Option<Suggestion> {
        if self.query.contains(':') {
            return None;
        }
        let minutes = clamp_to_valid_minutes(parse_leading_int(self.query)?);
        if minutes == 0 {
            return None;
        }
        let content = encode(minutes);
        if content == self.normalized().content {
            return None;
        }
        Some(Suggestion {
            content,
            annotation: format!("= {minutes} minutes"),
        })
    }
}

impl Iterator for Suggestions<'_> {
    type Item = Suggestion;

    fn next(&mut self) -> Option<Suggestion> {
        loop {
            let position = self.position;
            self.position = self.position.saturating_add(1);
            match position {
                0 => return Some(self.normalized()),
                1 => {
                    if let Some(s) = self.as_plain_minutes() {
                        return Some(s);
                    }
                }
                _ => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.position {
            0 => (1, Some(2)),
            1 => (0, Some(1)),
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for Suggestions<'_> {}

/// Reads the integer at the start of `s`: leading whitespace, an optional
/// sign, then digits. Anything after the digits is ignored.
/// Values too large for `i64` saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude = parse_digits(&rest[..end]);
    Some(if negative { -magnitude } else { magnitude })
}
