use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, Rule, RuleSet, lower_names};
use crate::transforms::leet;

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    if tier == ComplexityTier::Aggressive {
        rules.push(LeetRule);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LeetRule;

impl Rule for LeetRule {
    fn id(&self) -> &'static str {
        "leet"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        info.has_name()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let (first, last) = lower_names(info);
        let (first, last) = (leet(&first), leet(&last));
        let mut out = Candidates::new();

        out.push(&first);
        out.push(&last);
        out.join_both(&first, "", &last);
        out.join(&first, "", "123");
        out.join(&last, "", "123");
        out.join("123", "", &first);
        out.join("123", "", &last);

        out.into_vec()
    }
}
