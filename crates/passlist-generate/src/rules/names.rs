use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, EXTENDED_NUMBERS, Rule, RuleSet, SENSITIVE_NUMBERS, lower_names};
use crate::transforms::{title_case, variations};

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    rules.push(NameRule { tier });
}

/// First/last name spellings, pairs and numeric suffixes.
#[derive(Debug, Clone, Copy)]
pub struct NameRule {
    tier: ComplexityTier,
}

impl NameRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }
}

impl Rule for NameRule {
    fn id(&self) -> &'static str {
        "names"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        info.has_name()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        match self.tier {
            ComplexityTier::Normal => basic(info),
            ComplexityTier::Sensitive => {
                exhaustive(info, &["", "_", "-", "."], SENSITIVE_NUMBERS, &["", "_"])
            }
            ComplexityTier::Aggressive => exhaustive(
                info,
                &["", "_", "-", ".", " "],
                EXTENDED_NUMBERS,
                &["", "_", "-", "."],
            ),
        }
    }
}

fn basic(info: &PersonalInfo) -> Vec<String> {
    let (first, last) = lower_names(info);
    let (first_title, last_title) = (title_case(&first), title_case(&last));
    let mut out = Candidates::new();

    out.push(&first);
    out.push(&last);
    out.join_both(&first, "", &last);
    for number in ["123", "1234"] {
        out.join(&first, "", number);
        out.join(&last, "", number);
    }
    out.push(&first_title);
    out.push(&last_title);
    out.join_both(&first_title, "", &last_title);

    out.into_vec()
}

fn exhaustive(
    info: &PersonalInfo,
    pair_separators: &[&str],
    numbers: &[&str],
    number_separators: &[&str],
) -> Vec<String> {
    let firsts = variations(info.first_name.trim());
    let lasts = variations(info.last_name.trim());
    let mut out = Candidates::new();

    for variant in firsts.iter().chain(&lasts) {
        out.push(variant);
    }

    for first in &firsts {
        for last in &lasts {
            for sep in pair_separators {
                out.join_both(first, sep, last);
            }
        }
    }

    for variant in firsts.iter().chain(&lasts) {
        for number in numbers {
            for sep in number_separators {
                out.join_both(variant, sep, number);
            }
        }
    }

    out.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john_doe() -> PersonalInfo {
        PersonalInfo {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            ..PersonalInfo::default()
        }
    }

    #[test]
    fn normal_tier_emits_basic_forms_in_order() {
        assert_eq!(
            NameRule::new(ComplexityTier::Normal).expand(&john_doe()),
            vec![
                "john", "doe", "johndoe", "doejohn", "john123", "doe123", "john1234", "doe1234",
                "John", "Doe", "JohnDoe", "DoeJohn",
            ]
        );
    }

    #[test]
    fn single_name_never_produces_dangling_pairs() {
        let info = PersonalInfo {
            first_name: "John".to_string(),
            ..PersonalInfo::default()
        };
        let out = NameRule::new(ComplexityTier::Sensitive).expand(&info);
        assert!(out.contains(&"john_01".to_string()));
        assert!(out.contains(&"123_JOHN".to_string()));
        assert!(!out.iter().any(|c| c == "john_" || c.is_empty()));
    }

    #[test]
    fn aggressive_pairs_include_space_separator() {
        let out = NameRule::new(ComplexityTier::Aggressive).expand(&john_doe());
        assert!(out.contains(&"John Doe".to_string()));
        assert!(out.contains(&"doe.12345678".to_string()));
    }
}
