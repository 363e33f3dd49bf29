//! Pure string transforms shared by the rule categories.
//!
//! Every function here is total: empty or malformed input yields an empty
//! result, never a panic.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use passlist_core::BIRTH_DATE_FORMAT;

/// Printable ASCII symbols used by the sensitive and aggressive alphabets.
pub const SPECIAL_CHARACTERS: [&str; 32] = [
    "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "-", "_", "+", "=", "[", "]", "{", "}",
    "|", "\\", ":", ";", "\"", "'", "<", ">", ",", ".", "?", "/", "~", "`",
];

static DIGIT_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[0-9]+").ok());

/// Deterministic spelling variants of a name, first occurrence wins.
///
/// Order: original, lowercase, uppercase, title case, capitalized, reversed,
/// spaces removed, spaces to underscores, spaces to hyphens, vowels removed.
pub fn variations(name: &str) -> Vec<String> {
    if name.is_empty() {
        return Vec::new();
    }

    let lower = name.to_lowercase();
    let candidates = [
        name.to_string(),
        lower.clone(),
        name.to_uppercase(),
        title_case(&lower),
        capitalize(name),
        reverse(name),
        name.replace(' ', ""),
        name.replace(' ', "_"),
        name.replace(' ', "-"),
        strip_vowels(name),
    ];

    let mut out: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !out.contains(&candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Uppercases the first letter of every word and leaves the rest untouched.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    out
}

/// First character uppercased, the remainder lowercased.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

fn strip_vowels(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
        .collect()
}

/// Splits a digit string into the fragments people reuse in passwords.
///
/// Order: full, reversed, each digit, halves (length > 2), thirds
/// (length > 4), first digit, last digit, first two, last two.
pub fn decompose_number(number: &str) -> Vec<String> {
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();
    if len == 0 {
        return Vec::new();
    }

    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    let mut parts = vec![number.to_string(), reverse(number)];
    parts.extend(chars.iter().map(|c| c.to_string()));

    if len > 2 {
        let mid = len / 2;
        parts.push(slice(0, mid));
        parts.push(slice(mid, len));
    }

    if len > 4 {
        let third = len / 3;
        parts.push(slice(0, third));
        parts.push(slice(third, 2 * third));
        parts.push(slice(2 * third, len));
    }

    parts.push(slice(0, 1));
    parts.push(slice(len - 1, len));
    if len >= 2 {
        parts.push(slice(0, 2));
        parts.push(slice(len - 2, len));
    }

    parts
}

/// Calendar pieces of a birth date, zero padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFields {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl DateFields {
    /// Last two digits of the year.
    pub fn short_year(&self) -> &str {
        &self.year[self.year.len().saturating_sub(2)..]
    }

    pub fn month_unpadded(&self) -> &str {
        self.month.strip_prefix('0').unwrap_or(&self.month)
    }

    pub fn day_unpadded(&self) -> &str {
        self.day.strip_prefix('0').unwrap_or(&self.day)
    }
}

/// Parses `YYYY-MM-DD`; anything that does not round-trip exactly is ignored.
pub fn date_fields(value: &str) -> Option<DateFields> {
    let date = NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).ok()?;
    if date.format(BIRTH_DATE_FORMAT).to_string() != value {
        return None;
    }

    Some(DateFields {
        year: format!("{:04}", date.year()),
        month: format!("{:02}", date.month()),
        day: format!("{:02}", date.day()),
    })
}

/// Every maximal run of ASCII digits in `value`.
pub fn digit_runs(value: &str) -> Vec<String> {
    let Some(re) = DIGIT_RUN.as_ref() else {
        return Vec::new();
    };
    re.find_iter(value)
        .map(|run| run.as_str().to_string())
        .collect()
}

/// Replaces a, e, i, o, s, t (any case) with 4, 3, 1, 0, 5, 7.
pub fn leet(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch.to_ascii_lowercase() {
            'a' => '4',
            'e' => '3',
            'i' => '1',
            'o' => '0',
            's' => '5',
            't' => '7',
            _ => ch,
        })
        .collect()
}
