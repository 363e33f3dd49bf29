use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, Rule, RuleSet, lower_names};

const KEYBOARD_PATTERNS: &[&str] = &[
    "qwerty", "asdfgh", "zxcvbn", "qwertyui", "asdfghjk", "zxcvbnm", "123456", "654321", "13579",
    "24680", "qwe123", "asd123", "zxc123", "qwerty123", "asdfgh123", "zxcvbn123", "123qwe",
    "123asd", "123zxc",
];

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    if tier == ComplexityTier::Aggressive {
        rules.push(KeyboardRule);
    }
}

/// Common keyboard walks attached to the names.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardRule;

impl Rule for KeyboardRule {
    fn id(&self) -> &'static str {
        "keyboard"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        info.has_name()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let (first, last) = lower_names(info);
        let mut out = Candidates::new();
        for pattern in KEYBOARD_PATTERNS {
            for sep in ["", "_"] {
                out.join_both(&first, sep, pattern);
                out.join_both(&last, sep, pattern);
            }
        }
        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_wrap_each_name() {
        let info = PersonalInfo {
            first_name: "John".to_string(),
            ..PersonalInfo::default()
        };
        let out = KeyboardRule.expand(&info);
        assert_eq!(out.len(), KEYBOARD_PATTERNS.len() * 4);
        assert_eq!(&out[..4], ["johnqwerty", "qwertyjohn", "john_qwerty", "qwerty_john"]);
    }
}
