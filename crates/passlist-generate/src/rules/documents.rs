use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, Rule, RuleSet, lower_names, symbol_alphabet};
use crate::transforms::{decompose_number, digit_runs};

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    if tier != ComplexityTier::Normal {
        rules.push(DocumentRule { tier });
    }
}

/// Digits of identity documents, combined with names and the document type.
///
/// Documents are visited in type order so the output is reproducible.
#[derive(Debug, Clone, Copy)]
pub struct DocumentRule {
    tier: ComplexityTier,
}

impl DocumentRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }
}

impl Rule for DocumentRule {
    fn id(&self) -> &'static str {
        "documents"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        info.documents().next().is_some()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let aggressive = self.tier == ComplexityTier::Aggressive;
        let (first, last) = lower_names(info);
        let separators: &[&str] = if aggressive { &["", "_"] } else { &[""] };
        let symbols = if aggressive {
            symbol_alphabet(self.tier)
        } else {
            Vec::new()
        };
        let mut out = Candidates::new();

        for (kind, value) in info.documents() {
            for run in digit_runs(value) {
                let parts = if aggressive {
                    decompose_number(&run)
                } else {
                    vec![run]
                };

                for part in &parts {
                    out.push(part);
                    for sep in separators {
                        out.join_both(&first, sep, part);
                        out.join_both(&last, sep, part);
                        out.join_both(kind, sep, part);
                    }
                    for symbol in &symbols {
                        out.concat3(&first, part, symbol);
                        out.concat3(&last, part, symbol);
                        out.concat3(symbol, &first, part);
                        out.concat3(symbol, &last, part);
                        out.concat3(kind, part, symbol);
                        out.concat3(symbol, kind, part);
                    }
                }
            }
        }

        out.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_documents(pairs: &[(&str, &str)]) -> PersonalInfo {
        let mut info = PersonalInfo {
            first_name: "John".to_string(),
            ..PersonalInfo::default()
        };
        for (kind, value) in pairs {
            info.documents.insert(kind.to_string(), value.to_string());
        }
        info
    }

    #[test]
    fn normal_tier_has_no_document_rule() {
        let mut rules = RuleSet::empty(ComplexityTier::Normal);
        register(&mut rules, ComplexityTier::Normal);
        assert!(rules.is_empty());
    }

    #[test]
    fn sensitive_tier_visits_documents_in_type_order() {
        let info = with_documents(&[("ssn", "123-45"), ("passport", "X99")]);
        let out = DocumentRule::new(ComplexityTier::Sensitive).expand(&info);
        assert_eq!(
            &out[..5],
            ["99", "john99", "99john", "passport99", "99passport"]
        );
        assert!(out.contains(&"ssn45".to_string()));
    }

    #[test]
    fn documents_without_digits_emit_nothing() {
        let info = with_documents(&[("passport", "ABC")]);
        assert!(DocumentRule::new(ComplexityTier::Aggressive).expand(&info).is_empty());
    }
}
