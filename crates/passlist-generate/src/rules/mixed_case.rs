use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, EXTENDED_NUMBERS, MIXED_CASE_NUMBERS, Rule, RuleSet};
use crate::transforms::title_case;

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    if tier != ComplexityTier::Normal {
        rules.push(MixedCaseRule { tier });
    }
}

/// Upper/lower/title permutations of the full name.
#[derive(Debug, Clone, Copy)]
pub struct MixedCaseRule {
    tier: ComplexityTier,
}

impl MixedCaseRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }
}

impl Rule for MixedCaseRule {
    fn id(&self) -> &'static str {
        "mixed_case"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        full_name(info).is_some()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let Some((first, last)) = full_name(info) else {
            return Vec::new();
        };
        let combos = [
            format!("{}{}", first.to_uppercase(), last.to_lowercase()),
            format!("{}{}", first.to_lowercase(), last.to_uppercase()),
            format!("{}{}", first.to_uppercase(), last.to_uppercase()),
            format!("{}{}", first.to_lowercase(), last.to_lowercase()),
            format!("{}{}", title_case(first), last.to_lowercase()),
            format!("{}{}", first.to_lowercase(), title_case(last)),
        ];

        let aggressive = self.tier == ComplexityTier::Aggressive;
        let numbers = if aggressive {
            EXTENDED_NUMBERS
        } else {
            MIXED_CASE_NUMBERS
        };
        let separators: &[&str] = if aggressive { &["", "_", "-", "."] } else { &[""] };

        let mut out = Candidates::new();
        for combo in &combos {
            out.push(combo);
            for number in numbers {
                for sep in separators {
                    out.join_both(combo, sep, number);
                }
            }
        }
        out.into_vec()
    }
}

fn full_name(info: &PersonalInfo) -> Option<(&str, &str)> {
    let (first, last) = (info.first_name.trim(), info.last_name.trim());
    (!first.is_empty() && !last.is_empty()).then_some((first, last))
}
