//! Supported countries and the identity documents collected for each.
//!
//! The document `kind` identifiers are the keys stored in
//! [`crate::PersonalInfo::documents`]; the engine treats them as opaque.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentType {
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub documents: &'static [DocumentType],
}

const fn doc(
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    required: bool,
) -> DocumentType {
    DocumentType {
        kind,
        name,
        description,
        required,
    }
}

static COUNTRIES: &[Country] = &[
    Country {
        code: "ir",
        name: "Iran",
        documents: &[
            doc("national_id", "National ID Card", "Iranian National ID Card", true),
            doc("birth_certificate", "Birth Certificate", "Birth certificate or family registry", true),
            doc("passport", "Passport", "Iranian passport", false),
            doc("driving_license", "Driving License", "Iranian driving license", false),
            doc("birth_certificate_number", "Birth Certificate Number", "Birth certificate serial number", false),
            doc("citizenship_card", "Citizenship Card", "Citizenship card number", false),
        ],
    },
    Country {
        code: "us",
        name: "United States",
        documents: &[
            doc("drivers_license", "Driver's License", "State driver's license or state ID", true),
            doc("passport", "Passport", "US passport", false),
            doc("ssn", "Social Security Number", "Social Security Number (SSN)", true),
            doc("birth_certificate", "Birth Certificate", "Birth certificate", false),
            doc("voter_registration", "Voter Registration", "Voter registration card", false),
            doc("tax_id", "Tax ID", "Tax identification number", false),
        ],
    },
    Country {
        code: "uk",
        name: "United Kingdom",
        documents: &[
            doc("passport", "Passport", "UK passport", true),
            doc("driving_license", "Driving Licence", "UK driving licence", false),
            doc("nino", "National Insurance Number", "National Insurance Number (NINO)", true),
            doc("birth_certificate", "Birth Certificate", "Birth certificate", false),
            doc("voter_registration", "Voter Registration", "Voter registration", false),
        ],
    },
    Country {
        code: "de",
        name: "Germany",
        documents: &[
            doc("personalausweis", "Personalausweis", "German national ID card", true),
            doc("passport", "Passport", "German passport", false),
            doc("tax_id", "Tax ID", "Steueridentifikationsnummer (Tax ID)", true),
            doc("registration", "Registration", "Meldebescheinigung (registration)", false),
        ],
    },
    Country {
        code: "fr",
        name: "France",
        documents: &[
            doc("national_id", "Carte Nationale d'Identité", "French national ID card", true),
            doc("passport", "Passport", "French passport", false),
            doc("tax_number", "Tax Number", "Numéro fiscal (tax number)", true),
            doc("family_book", "Family Book", "Livret de famille / Birth certificate", false),
        ],
    },
    Country {
        code: "se",
        name: "Sweden",
        documents: &[
            doc("personnummer", "Personnummer", "Personal identity number", true),
            doc("id_card", "ID Card", "Swedish ID card", false),
            doc("passport", "Passport", "Swedish passport", false),
            doc("bankid", "BankID", "Digital identity (BankID)", false),
        ],
    },
    Country {
        code: "in",
        name: "India",
        documents: &[
            doc("aadhaar", "Aadhaar", "Biometric ID (Aadhaar)", true),
            doc("pan", "PAN", "Permanent Account Number (tax ID)", true),
            doc("passport", "Passport", "Indian passport", false),
            doc("voter_id", "Voter ID", "Voter ID (EPIC)", false),
            doc("driving_license", "Driving Licence", "Indian driving licence", false),
            doc("birth_certificate", "Birth Certificate", "Birth certificate", false),
        ],
    },
    Country {
        code: "jp",
        name: "Japan",
        documents: &[
            doc("my_number", "My Number", "Social ID (My Number)", true),
            doc("passport", "Passport", "Japanese passport", false),
            doc("driving_license", "Driver's Licence", "Japanese driver's licence", false),
            doc("pension_id", "Pension/Tax IDs", "Pension and tax identification", false),
            doc("family_registry", "Family Registry", "Koseki/Juminhyo documents", false),
        ],
    },
    Country {
        code: "ae",
        name: "United Arab Emirates",
        documents: &[
            doc("emirates_id", "Emirates ID", "Biometric Emirates ID", true),
            doc("passport", "Passport", "UAE passport", false),
            doc("driving_license", "Driving Licence", "UAE driving licence", false),
            doc("residence_visa", "Residence Visa", "Residence visa / Unified ID", false),
        ],
    },
    Country {
        code: "ca",
        name: "Canada",
        documents: &[
            doc("drivers_license", "Driver's Licence", "Canadian driver's licence", true),
            doc("passport", "Passport", "Canadian passport", false),
            doc("sin", "Social Insurance Number", "Social Insurance Number (SIN)", true),
            doc("provincial_id", "Provincial ID", "Provincial ID card", false),
            doc("birth_certificate", "Birth Certificate", "Birth certificate", false),
        ],
    },
    Country {
        code: "au",
        name: "Australia",
        documents: &[
            doc("drivers_license", "Driver's Licence", "Australian driver's licence", true),
            doc("passport", "Passport", "Australian passport", false),
            doc("tfn", "Tax File Number", "Tax File Number (TFN)", true),
            doc("medicare_card", "Medicare Card", "Medicare card", false),
            doc("birth_certificate", "Birth Certificate", "Birth certificate", false),
        ],
    },
    Country {
        code: "general",
        name: "General (Other Countries)",
        documents: &[
            doc("national_id", "National ID", "National ID card", true),
            doc("passport", "Passport", "International passport", false),
            doc("tax_id", "Tax ID", "Tax identification number", false),
            doc("social_security", "Social Security", "Social security number", false),
            doc("residence_registration", "Residence Registration", "Local residence registration", false),
        ],
    },
];

pub fn supported_countries() -> &'static [Country] {
    COUNTRIES
}

/// Looks up a country by its code, ignoring case and surrounding whitespace.
pub fn find_country(code: &str) -> Result<&'static Country> {
    let needle = code.trim();
    COUNTRIES
        .iter()
        .find(|country| country.code.eq_ignore_ascii_case(needle))
        .ok_or_else(|| Error::UnknownCountry(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_country_ignoring_case() {
        let country = find_country(" US ").expect("us is supported");
        assert_eq!(country.name, "United States");
        assert!(country.documents.iter().any(|doc| doc.kind == "ssn" && doc.required));
    }

    #[test]
    fn unknown_country_is_an_error() {
        assert!(matches!(find_country("zz"), Err(Error::UnknownCountry(code)) if code == "zz"));
    }

    #[test]
    fn document_kinds_are_unique_per_country() {
        for country in supported_countries() {
            let mut kinds: Vec<_> = country.documents.iter().map(|doc| doc.kind).collect();
            let total = kinds.len();
            kinds.sort_unstable();
            kinds.dedup();
            assert_eq!(kinds.len(), total, "duplicate document kind in {}", country.code);
        }
    }
}
