use passlist_core::{ComplexityTier, PersonalInfo};

use super::{
    BASIC_NUMBERS, Candidates, EXTENDED_NUMBERS, Rule, RuleSet, SENSITIVE_NUMBERS, joiners,
    lower_names, symbol_alphabet,
};
use crate::transforms::{date_fields, decompose_number, digit_runs};

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    rules.push(NumberRule { tier });
}

/// Seed numbers, birth year and fragments of the phone numbers.
///
/// Above the normal tier, document digits are decomposed alongside the phones.
#[derive(Debug, Clone, Copy)]
pub struct NumberRule {
    tier: ComplexityTier,
}

impl NumberRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }

    fn seeds(&self) -> &'static [&'static str] {
        match self.tier {
            ComplexityTier::Normal => BASIC_NUMBERS,
            ComplexityTier::Sensitive => SENSITIVE_NUMBERS,
            ComplexityTier::Aggressive => EXTENDED_NUMBERS,
        }
    }
}

impl Rule for NumberRule {
    fn id(&self) -> &'static str {
        "numbers"
    }

    fn applies_to(&self, _info: &PersonalInfo) -> bool {
        true
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let mut out = Candidates::new();
        for seed in self.seeds() {
            out.push(seed);
        }

        if let Some(date) = date_fields(info.birth_date.trim()) {
            out.push(&date.year);
            out.push(date.short_year());
        }

        let mut runs: Vec<String> = [&info.mobile_number, &info.home_phone_number]
            .into_iter()
            .flat_map(|phone| digit_runs(phone))
            .collect();

        if self.tier == ComplexityTier::Normal {
            for run in &runs {
                out.push(run);
            }
            return out.into_vec();
        }

        runs.extend(info.documents().flat_map(|(_, value)| digit_runs(value)));

        let (first, last) = lower_names(info);
        let symbols = if self.tier == ComplexityTier::Aggressive {
            symbol_alphabet(self.tier)
        } else {
            Vec::new()
        };

        for run in &runs {
            for part in decompose_number(run) {
                out.push(&part);
                for name in [&first, &last] {
                    for sep in joiners(self.tier) {
                        out.join_both(name, sep, &part);
                    }
                }
                for symbol in &symbols {
                    for sep in ["", "_"] {
                        out.join_both(&part, sep, symbol);
                    }
                }
            }
        }

        out.into_vec()
    }
}
