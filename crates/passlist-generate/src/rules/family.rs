use passlist_core::{ComplexityTier, PersonalInfo, Relation};

use super::{Candidates, Rule, RuleSet, symbol_alphabet};
use crate::transforms::{title_case, variations};

/// Relations considered by the normal tier.
const CLOSE_RELATIONS: [Relation; 4] = [
    Relation::Father,
    Relation::Mother,
    Relation::Spouse,
    Relation::Pet,
];

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    rules.push(FamilyRule { tier });
}

/// Names of relatives, partners and pets with short numeric affixes.
#[derive(Debug, Clone, Copy)]
pub struct FamilyRule {
    tier: ComplexityTier,
}

impl FamilyRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }

    fn relatives<'a>(&self, info: &'a PersonalInfo) -> Vec<&'a str> {
        info.relatives()
            .filter(|(relation, _)| {
                self.tier != ComplexityTier::Normal || CLOSE_RELATIONS.contains(relation)
            })
            .map(|(_, name)| name)
            .collect()
    }
}

impl Rule for FamilyRule {
    fn id(&self) -> &'static str {
        "family"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        !self.relatives(info).is_empty()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let mut out = Candidates::new();

        if self.tier == ComplexityTier::Normal {
            for name in self.relatives(info) {
                let lower = name.to_lowercase();
                out.push(&lower);
                out.join(&lower, "", "123");
                out.join(&lower, "", "1234");
                out.push(&title_case(&lower));
            }
            return out.into_vec();
        }

        let aggressive = self.tier == ComplexityTier::Aggressive;
        let prefixes: &[&str] = if aggressive {
            &["123", "1234", "12345"]
        } else {
            &["123", "1234"]
        };
        let symbols = if aggressive {
            symbol_alphabet(self.tier)
        } else {
            Vec::new()
        };

        for name in self.relatives(info) {
            for variant in variations(name) {
                out.push(&variant);
                for suffix in ["123", "1234", "12345"] {
                    out.join(&variant, "", suffix);
                }
                for prefix in prefixes {
                    out.join(prefix, "", &variant);
                }
                for symbol in &symbols {
                    out.join_both(&variant, "", symbol);
                    out.join_both(&variant, "_", symbol);
                }
            }
        }

        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_relatives_disable_the_rule() {
        let info = PersonalInfo {
            first_name: "John".to_string(),
            spouse_name: "  ".to_string(),
            ..PersonalInfo::default()
        };
        for tier in ComplexityTier::ALL {
            let rule = FamilyRule::new(tier);
            assert!(!rule.applies_to(&info));
            assert!(rule.expand(&info).is_empty());
        }
    }

    #[test]
    fn normal_tier_ignores_distant_relations() {
        let info = PersonalInfo {
            favorite_person_name: "Alice".to_string(),
            pet_name: "Rex".to_string(),
            ..PersonalInfo::default()
        };
        assert_eq!(
            FamilyRule::new(ComplexityTier::Normal).expand(&info),
            vec!["rex", "rex123", "rex1234", "Rex"]
        );
        assert!(FamilyRule::new(ComplexityTier::Sensitive)
            .expand(&info)
            .contains(&"1234Alice".to_string()));
    }
}
