use passlist_core::{ComplexityTier, PersonalInfo};

use super::{Candidates, Rule, RuleSet, joiners, lower_names, symbol_alphabet};
use crate::transforms::{DateFields, date_fields};

pub fn register(rules: &mut RuleSet, tier: ComplexityTier) {
    rules.push(DateRule { tier });
}

/// Birth-date pieces joined with names, plus calendar permutations.
#[derive(Debug, Clone, Copy)]
pub struct DateRule {
    tier: ComplexityTier,
}

impl DateRule {
    pub fn new(tier: ComplexityTier) -> Self {
        Self { tier }
    }

    fn pieces<'a>(&self, date: &'a DateFields) -> Vec<&'a str> {
        let mut pieces = vec![
            date.year.as_str(),
            date.month.as_str(),
            date.day.as_str(),
            date.short_year(),
        ];
        if self.tier != ComplexityTier::Normal {
            if date.month_unpadded() != date.month {
                pieces.push(date.month_unpadded());
            }
            if date.day_unpadded() != date.day {
                pieces.push(date.day_unpadded());
            }
        }
        pieces
    }

    fn calendar_forms(&self, date: &DateFields) -> Vec<String> {
        let (y, m, d, yy) = (&date.year, &date.month, &date.day, date.short_year());
        let mut forms = vec![
            format!("{d}{m}{y}"),
            format!("{m}{d}{y}"),
            format!("{y}{m}{d}"),
            format!("{d}{m}{yy}"),
            format!("{m}{d}{yy}"),
        ];

        if self.tier == ComplexityTier::Normal {
            return forms;
        }
        forms.push(format!("{yy}{m}{d}"));

        let delimiters: &[&str] = if self.tier == ComplexityTier::Aggressive {
            &["/", "-", "."]
        } else {
            &["/"]
        };
        for sep in delimiters {
            forms.push(format!("{d}{sep}{m}{sep}{y}"));
            forms.push(format!("{m}{sep}{d}{sep}{y}"));
            forms.push(format!("{y}{sep}{m}{sep}{d}"));
        }
        forms
    }
}

impl Rule for DateRule {
    fn id(&self) -> &'static str {
        "dates"
    }

    fn applies_to(&self, info: &PersonalInfo) -> bool {
        date_fields(info.birth_date.trim()).is_some()
    }

    fn expand(&self, info: &PersonalInfo) -> Vec<String> {
        let Some(date) = date_fields(info.birth_date.trim()) else {
            return Vec::new();
        };
        let (first, last) = lower_names(info);
        let mut out = Candidates::new();

        for piece in self.pieces(&date) {
            for sep in joiners(self.tier) {
                out.join_both(&first, sep, piece);
                out.join_both(&last, sep, piece);
            }
        }

        if self.tier == ComplexityTier::Aggressive {
            let symbols = symbol_alphabet(self.tier);
            for piece in self.pieces(&date) {
                for symbol in &symbols {
                    for name in [&first, &last] {
                        out.concat3(name, piece, symbol);
                        out.concat3(symbol, name, piece);
                        out.concat3(name, symbol, piece);
                    }
                }
            }
        }

        for form in self.calendar_forms(&date) {
            out.push(&form);
        }

        out.into_vec()
    }
}
