use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, Rule, RuleSet, SYMBOL_CLUSTERS, joiners, lower_names, symbol_alphabet};

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    rules.push(SymbolRule { tier });
}

#[derive(Debug, Clone, Copy)]
pub struct SymbolRule {
    tier: ComplexityTier,
}

impl SymbolRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }
}

impl Rule for SymbolRule {
    fn id(&self) -> &'static str {
        "symbols"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        info.has_name()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let (first, last) = lower_names(info);
        let mut out = Candidates::new();

        for symbol in symbol_alphabet(self.tier) {
            for sep in joiners(self.tier) {
                out.join_both(&first, sep, symbol);
                out.join_both(&last, sep, symbol);
            }
            out.concat3(&first, symbol, &last);
            out.concat3(&last, symbol, &first);
        }

        if self.tier == ComplexityTier::Aggressive {
            for cluster in SYMBOL_CLUSTERS {
                out.join_both(&first, "", cluster);
                out.join_both(&last, "", cluster);
                out.concat3(&first, cluster, &last);
                out.concat3(&last, cluster, &first);
            }
        }

        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_tier_wraps_names_with_each_symbol() {
        let info = PersonalInfo {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            ..PersonalInfo::default()
        };
        let out = SymbolRule::new(ComplexityTier::Normal).expand(&info);
        assert_eq!(
            &out[..6],
            ["john!", "!john", "doe!", "!doe", "john!doe", "doe!john"]
        );
        assert_eq!(out.len(), 10 * 6);
    }

    #[test]
    fn aggressive_tier_adds_clusters() {
        let info = PersonalInfo {
            last_name: "Doe".to_string(),
            ..PersonalInfo::default()
        };
        let out = SymbolRule::new(ComplexityTier::Aggressive).expand(&info);
        assert!(out.contains(&"doe!@#".to_string()));
        assert!(out.contains(&"~.doe".to_string()));
        assert!(!out.iter().any(|c| c.starts_with("doe") && c.ends_with("doe")));
    }
}
