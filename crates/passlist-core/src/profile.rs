use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Personal information collected about the target of an authorized audit.
///
/// Every field is optional; empty strings mean "not provided" and are
/// skipped by the generation rules. `documents` maps a document type
/// identifier (see [`crate::catalog`]) to its value and iterates in sorted
/// key order, which keeps document-derived output reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    /// Birth date in `YYYY-MM-DD` form.
    pub birth_date: String,

    pub father_name: String,
    pub mother_name: String,
    pub spouse_name: String,
    pub second_spouse_name: String,
    pub third_spouse_name: String,
    /// Girlfriend or boyfriend name.
    #[serde(alias = "girlfriend_name", alias = "boyfriend_name")]
    pub partner_name: String,
    pub favorite_person_name: String,
    pub pet_name: String,

    pub mobile_number: String,
    pub home_phone_number: String,

    /// Country code the documents were collected for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub documents: BTreeMap<String, String>,
}

/// Relationship fields of a [`PersonalInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Father,
    Mother,
    Spouse,
    SecondSpouse,
    ThirdSpouse,
    Partner,
    Pet,
    FavoritePerson,
}

impl Relation {
    pub const ALL: [Relation; 8] = [
        Relation::Father,
        Relation::Mother,
        Relation::Spouse,
        Relation::SecondSpouse,
        Relation::ThirdSpouse,
        Relation::Partner,
        Relation::Pet,
        Relation::FavoritePerson,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Relation::Father => "father",
            Relation::Mother => "mother",
            Relation::Spouse => "spouse",
            Relation::SecondSpouse => "second spouse",
            Relation::ThirdSpouse => "third spouse",
            Relation::Partner => "girlfriend/boyfriend",
            Relation::Pet => "pet",
            Relation::FavoritePerson => "favorite person",
        }
    }
}

impl PersonalInfo {
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Returns the raw value stored for `relation`.
    pub fn relation(&self, relation: Relation) -> &str {
        match relation {
            Relation::Father => &self.father_name,
            Relation::Mother => &self.mother_name,
            Relation::Spouse => &self.spouse_name,
            Relation::SecondSpouse => &self.second_spouse_name,
            Relation::ThirdSpouse => &self.third_spouse_name,
            Relation::Partner => &self.partner_name,
            Relation::Pet => &self.pet_name,
            Relation::FavoritePerson => &self.favorite_person_name,
        }
    }

    pub fn relation_mut(&mut self, relation: Relation) -> &mut String {
        match relation {
            Relation::Father => &mut self.father_name,
            Relation::Mother => &mut self.mother_name,
            Relation::Spouse => &mut self.spouse_name,
            Relation::SecondSpouse => &mut self.second_spouse_name,
            Relation::ThirdSpouse => &mut self.third_spouse_name,
            Relation::Partner => &mut self.partner_name,
            Relation::Pet => &mut self.pet_name,
            Relation::FavoritePerson => &mut self.favorite_person_name,
        }
    }

    /// Present (non-blank) relationship names in declaration order.
    pub fn relatives(&self) -> impl Iterator<Item = (Relation, &str)> {
        Relation::ALL
            .into_iter()
            .map(|relation| (relation, self.relation(relation).trim()))
            .filter(|(_, name)| !name.is_empty())
    }

    /// Documents with a non-blank value, sorted by type identifier.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(kind, value)| (kind.as_str(), value.trim()))
            .filter(|(_, value)| !value.is_empty())
    }

    pub fn has_name(&self) -> bool {
        !self.first_name.trim().is_empty() || !self.last_name.trim().is_empty()
    }

    /// Display label used for output file names and log lines.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relatives_skip_blank_fields() {
        let info = PersonalInfo {
            father_name: "Robert".to_string(),
            spouse_name: "   ".to_string(),
            pet_name: "Rex".to_string(),
            ..PersonalInfo::default()
        };

        let relatives: Vec<_> = info.relatives().collect();
        assert_eq!(
            relatives,
            vec![(Relation::Father, "Robert"), (Relation::Pet, "Rex")]
        );
    }

    #[test]
    fn documents_iterate_sorted_and_skip_empty() {
        let mut info = PersonalInfo::default();
        info.documents.insert("ssn".to_string(), "123-45-6789".to_string());
        info.documents.insert("passport".to_string(), String::new());
        info.documents.insert("drivers_license".to_string(), "D1234".to_string());

        let kinds: Vec<_> = info.documents().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec!["drivers_license", "ssn"]);
    }

    #[test]
    fn parses_json_with_partner_alias() {
        let info = PersonalInfo::from_json_str(
            r#"{"first_name":"John","girlfriend_name":"Jane","documents":{"ssn":"42"}}"#,
        )
        .expect("profile parses");

        assert_eq!(info.first_name, "John");
        assert_eq!(info.partner_name, "Jane");
        assert_eq!(info.last_name, "");
        assert_eq!(info.documents.get("ssn").map(String::as_str), Some("42"));
    }

    #[test]
    fn parses_toml_profile() {
        let info = PersonalInfo::from_toml_str(
            "first_name = \"John\"\nbirth_date = \"1990-05-15\"\n\n[documents]\nnational_id = \"0012345678\"\n",
        )
        .expect("profile parses");

        assert_eq!(info.birth_date, "1990-05-15");
        assert_eq!(info.documents().count(), 1);
    }
}
