use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::BIRTH_DATE_FORMAT;
use crate::profile::PersonalInfo;

const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=15;

/// Non-fatal problem found in a profile.
///
/// Generation never rejects a profile; issues are surfaced so the operator
/// can tell why some rule categories produced nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ProfileIssue {
    MissingName,
    InvalidBirthDate { value: String },
    UnusualPhoneNumber { field: &'static str, digits: usize },
    DocumentWithoutDigits { kind: String },
}

impl ProfileIssue {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileIssue::MissingName => "missing_name",
            ProfileIssue::InvalidBirthDate { .. } => "invalid_birth_date",
            ProfileIssue::UnusualPhoneNumber { .. } => "unusual_phone_number",
            ProfileIssue::DocumentWithoutDigits { .. } => "document_without_digits",
        }
    }
}

impl fmt::Display for ProfileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileIssue::MissingName => f.write_str("neither first nor last name provided"),
            ProfileIssue::InvalidBirthDate { value } => {
                write!(f, "birth date '{value}' is not in YYYY-MM-DD format")
            }
            ProfileIssue::UnusualPhoneNumber { field, digits } => {
                write!(f, "{field} has {digits} digits (expected 7-15)")
            }
            ProfileIssue::DocumentWithoutDigits { kind } => {
                write!(f, "document '{kind}' contains no digits")
            }
        }
    }
}

pub fn validate_profile(info: &PersonalInfo) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();

    if !info.has_name() {
        issues.push(ProfileIssue::MissingName);
    }

    let birth_date = info.birth_date.trim();
    if !birth_date.is_empty() && !is_exact_date(birth_date) {
        issues.push(ProfileIssue::InvalidBirthDate {
            value: birth_date.to_string(),
        });
    }

    for (field, value) in [
        ("mobile_number", info.mobile_number.as_str()),
        ("home_phone_number", info.home_phone_number.as_str()),
    ] {
        if value.trim().is_empty() {
            continue;
        }
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if !PHONE_DIGITS.contains(&digits) {
            issues.push(ProfileIssue::UnusualPhoneNumber { field, digits });
        }
    }

    for (kind, value) in info.documents() {
        if !value.chars().any(|c| c.is_ascii_digit()) {
            issues.push(ProfileIssue::DocumentWithoutDigits {
                kind: kind.to_string(),
            });
        }
    }

    issues
}

fn is_exact_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
        .map(|date| date.format(BIRTH_DATE_FORMAT).to_string() == value)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_profile_has_no_issues() {
        let mut info = PersonalInfo {
            first_name: "John".to_string(),
            birth_date: "1990-05-15".to_string(),
            mobile_number: "+1 (555) 123-4567".to_string(),
            ..PersonalInfo::default()
        };
        info.documents.insert("ssn".to_string(), "123-45-6789".to_string());

        assert!(validate_profile(&info).is_empty());
    }

    #[test]
    fn reports_each_problem() {
        let mut info = PersonalInfo {
            birth_date: "1990-5-15".to_string(),
            home_phone_number: "12".to_string(),
            ..PersonalInfo::default()
        };
        info.documents.insert("passport".to_string(), "ABC".to_string());

        let codes: Vec<_> = validate_profile(&info).iter().map(ProfileIssue::code).collect();
        assert_eq!(
            codes,
            vec![
                "missing_name",
                "invalid_birth_date",
                "unusual_phone_number",
                "document_without_digits"
            ]
        );
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        assert!(!is_exact_date("1990-02-30"));
        assert!(is_exact_date("2000-02-29"));
    }
}
