//! Candidate rules and their per-tier composition.
//!
//! Each category lives in its own module and exposes a `register` function
//! that adds the rule configured for a tier, or nothing when the tier does not
//! include the category. Categories run in a fixed order: names, numbers,
//! symbols, family, dates, documents, mixed case, leet, keyboard.

use std::fmt;

use tracing::debug;

use passlist_core::{ComplexityTier, PersonalInfo};

use crate::sink::{CandidateSink, SinkClosed};
use crate::transforms::SPECIAL_CHARACTERS;

pub mod dates;
pub mod documents;
pub mod family;
pub mod keyboard;
pub mod leet;
pub mod mixed_case;
pub mod names;
pub mod numbers;
pub mod symbols;

/// A named transformation from a profile to candidate strings.
pub trait Rule: Send + Sync {
    fn id(&self) -> &'static str;
    /// Whether the profile carries the fields this rule consumes. Only lets
    /// [`RuleSet::generate`] skip and log the rule early.
    fn applies_to(&self, info: &PersonalInfo) -> bool;
    /// Candidates in a deterministic order.
    ///
    /// Total on its own: when `applies_to` is false the result is empty, and
    /// empty fields never panic.
    fn expand(&self, info: &PersonalInfo) -> Vec<String>;
}

/// Ordered list of rules evaluated for one tier.
pub struct RuleSet {
    tier: ComplexityTier,
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// A rule set with no rules; callers compose it with [`RuleSet::push`].
    pub fn empty(tier: ComplexityTier) -> Self {
        Self {
            tier,
            rules: Vec::new(),
        }
    }

    pub fn for_tier(tier: ComplexityTier) -> Self {
        let mut set = Self::empty(tier);
        names::register(&mut set, tier);
        numbers::register(&mut set, tier);
        symbols::register(&mut set, tier);
        family::register(&mut set, tier);
        dates::register(&mut set, tier);
        documents::register(&mut set, tier);
        mixed_case::register(&mut set, tier);
        leet::register(&mut set, tier);
        keyboard::register(&mut set, tier);
        set
    }

    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn tier(&self) -> ComplexityTier {
        self.tier
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs every applicable rule in order, forwarding non-empty candidates.
    ///
    /// Returns the number of candidates emitted, or [`SinkClosed`] as soon as
    /// the sink stops accepting output.
    pub fn generate(
        &self,
        info: &PersonalInfo,
        sink: &mut dyn CandidateSink,
    ) -> Result<u64, SinkClosed> {
        let mut emitted = 0_u64;
        for rule in &self.rules {
            if !rule.applies_to(info) {
                debug!(rule = rule.id(), "rule skipped");
                continue;
            }

            let mut produced = 0_u64;
            for candidate in rule.expand(info) {
                if candidate.is_empty() {
                    continue;
                }
                sink.emit(candidate)?;
                produced += 1;
            }
            debug!(rule = rule.id(), candidates = produced, "rule expanded");
            emitted += produced;
        }
        Ok(emitted)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("tier", &self.tier)
            .field("rules", &self.ids())
            .finish()
    }
}

pub(crate) const BASIC_NUMBERS: &[&str] = &["123", "1234", "12345", "111", "222", "333", "000", "0000"];

pub(crate) const SENSITIVE_NUMBERS: &[&str] = &[
    "123", "1234", "12345", "111", "222", "333", "000", "0000", "01", "02", "03",
];

pub(crate) const EXTENDED_NUMBERS: &[&str] = &[
    "123", "1234", "12345", "123456", "1234567", "12345678", "111", "222", "333", "444", "555",
    "666", "777", "888", "999", "000", "0000", "00000", "000000", "0000000", "00000000", "01",
    "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36", "37", "38", "39", "40", "50", "60", "70", "80", "90", "100",
    "200", "300", "500", "1000",
];

pub(crate) const MIXED_CASE_NUMBERS: &[&str] = &["123", "1234", "12345", "111", "222", "333"];

const NORMAL_SYMBOLS: &[&str] = &["!", "@", "#", "$", "%", "&", "*", "123", "456", "789"];

const SYMBOL_NUMBER_GROUPS: &[&str] = &["123", "456", "789", "000", "111"];

pub(crate) const SYMBOL_CLUSTERS: &[&str] = &["!@#", "$%^", "&*(", ")_+", "123!", "456@", "789#"];

/// Symbol alphabet of a tier.
pub(crate) fn symbol_alphabet(tier: ComplexityTier) -> Vec<&'static str> {
    match tier {
        ComplexityTier::Normal => NORMAL_SYMBOLS.to_vec(),
        ComplexityTier::Sensitive | ComplexityTier::Aggressive => SPECIAL_CHARACTERS
            .iter()
            .chain(SYMBOL_NUMBER_GROUPS)
            .copied()
            .collect(),
    }
}

/// Separators used when joining a name with a number or a symbol.
pub(crate) fn joiners(tier: ComplexityTier) -> &'static [&'static str] {
    match tier {
        ComplexityTier::Normal => &[""],
        ComplexityTier::Sensitive => &["", "_"],
        ComplexityTier::Aggressive => &["", "_", "-", "."],
    }
}

/// Trimmed, lowercased first and last name.
pub(crate) fn lower_names(info: &PersonalInfo) -> (String, String) {
    (
        info.first_name.trim().to_lowercase(),
        info.last_name.trim().to_lowercase(),
    )
}

/// Candidate accumulator that drops any combination with an empty part.
#[derive(Debug, Default)]
pub(crate) struct Candidates {
    items: Vec<String>,
}

impl Candidates {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, value: &str) {
        if !value.is_empty() {
            self.items.push(value.to_string());
        }
    }

    /// `a + sep + b`, skipped when either side is empty.
    pub(crate) fn join(&mut self, a: &str, sep: &str, b: &str) {
        if !a.is_empty() && !b.is_empty() {
            self.items.push(format!("{a}{sep}{b}"));
        }
    }

    /// Both `a + sep + b` and `b + sep + a`.
    pub(crate) fn join_both(&mut self, a: &str, sep: &str, b: &str) {
        self.join(a, sep, b);
        self.join(b, sep, a);
    }

    /// Plain concatenation of three parts, skipped when any is empty.
    pub(crate) fn concat3(&mut self, a: &str, b: &str, c: &str) {
        if !a.is_empty() && !b.is_empty() && !c.is_empty() {
            self.items.push(format!("{a}{b}{c}"));
        }
    }

    pub(crate) fn into_vec(self) -> Vec<String> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_declare_categories_in_order() {
        assert_eq!(
            RuleSet::for_tier(ComplexityTier::Normal).ids(),
            vec!["names", "numbers", "symbols", "family", "dates"]
        );
        assert_eq!(
            RuleSet::for_tier(ComplexityTier::Sensitive).ids(),
            vec![
                "names",
                "numbers",
                "symbols",
                "family",
                "dates",
                "documents",
                "mixed_case"
            ]
        );
        assert_eq!(RuleSet::for_tier(ComplexityTier::Aggressive).len(), 9);
    }

    #[test]
    fn inapplicable_rules_expand_to_nothing() {
        let bad_date = PersonalInfo {
            birth_date: "15/05/1990".to_string(),
            ..PersonalInfo::default()
        };
        let first_only = PersonalInfo {
            first_name: "John".to_string(),
            ..PersonalInfo::default()
        };
        let relatives_only = PersonalInfo {
            pet_name: "Rex".to_string(),
            mobile_number: "5551234".to_string(),
            ..PersonalInfo::default()
        };

        for tier in ComplexityTier::ALL {
            let set = RuleSet::for_tier(tier);
            for info in [&PersonalInfo::default(), &bad_date, &first_only, &relatives_only] {
                for rule in &set.rules {
                    if !rule.applies_to(info) {
                        assert!(
                            rule.expand(info).is_empty(),
                            "{} expanded an inapplicable profile at {tier}",
                            rule.id()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn number_sets_nest_across_tiers() {
        assert!(BASIC_NUMBERS.iter().all(|n| SENSITIVE_NUMBERS.contains(n)));
        assert!(SENSITIVE_NUMBERS.iter().all(|n| EXTENDED_NUMBERS.contains(n)));
        assert!(MIXED_CASE_NUMBERS.iter().all(|n| EXTENDED_NUMBERS.contains(n)));
        assert_eq!(EXTENDED_NUMBERS.len(), 71);
    }

    #[test]
    fn normal_symbols_are_part_of_full_alphabet() {
        let full = symbol_alphabet(ComplexityTier::Sensitive);
        assert_eq!(full.len(), 37);
        assert!(symbol_alphabet(ComplexityTier::Normal)
            .iter()
            .all(|s| full.contains(s)));
    }

    #[test]
    fn candidates_skip_empty_parts() {
        let mut out = Candidates::new();
        out.push("");
        out.join("john", "_", "");
        out.join_both("john", "_", "doe");
        out.concat3("john", "", "doe");
        assert_eq!(out.into_vec(), vec!["john_doe", "doe_john"]);
    }
}
