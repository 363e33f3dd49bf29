use std::io::{self, BufRead, Write};

use passlist_core::{Country, PersonalInfo, Relation, find_country, supported_countries};

use super::Prompter;

/// Asks for a country code until a supported one is given.
///
/// A blank answer or end of input selects the general catalog entry.
pub fn select_country<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> io::Result<&'static Country> {
    prompter.say("Supported countries:")?;
    for country in supported_countries() {
        prompter.say(&format!("  {:<8} {}", country.code, country.name))?;
    }

    loop {
        let answer = prompter.ask("Country code (blank for general)")?.unwrap_or_default();
        let code = if answer.is_empty() { "general" } else { answer.as_str() };
        match find_country(code) {
            Ok(country) => return Ok(country),
            Err(err) => prompter.say(&format!("{err}, try again."))?,
        }
    }
}

/// Collects a profile field by field. Every answer is optional.
pub fn collect_profile<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    country: Option<&Country>,
) -> io::Result<PersonalInfo> {
    let mut info = PersonalInfo {
        first_name: prompter.ask_or_empty("First name")?,
        last_name: prompter.ask_or_empty("Last name")?,
        birth_date: prompter.ask_or_empty("Birth date (YYYY-MM-DD)")?,
        ..PersonalInfo::default()
    };

    for relation in Relation::ALL {
        let answer = prompter.ask_or_empty(&format!("{} name", capitalize(relation.label())))?;
        *info.relation_mut(relation) = answer;
    }

    info.mobile_number = prompter.ask_or_empty("Mobile number")?;
    info.home_phone_number = prompter.ask_or_empty("Home phone number")?;

    if let Some(country) = country {
        info.country = Some(country.code.to_string());
        prompter.say(&format!("Identity documents for {}:", country.name))?;
        for document in country.documents {
            let marker = if document.required { " *" } else { "" };
            let value = prompter.ask_or_empty(&format!(
                "{} ({}){marker}",
                document.name, document.description
            ))?;
            if !value.is_empty() {
                info.documents.insert(document.kind.to_string(), value);
            }
        }
    }

    Ok(info)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_fields_and_country_documents() {
        let country = find_country("se").expect("se is supported");
        let input = [
            "John",
            "Doe",
            "1990-05-15",
            "Robert",
            "",
            "Jane",
            "",
            "",
            "",
            "Rex",
            "",
            "0701234567",
            "",
            "19900515-1234",
            "",
            "",
            "",
        ]
        .join("\n");
        let mut output = Vec::new();
        let mut prompter = Prompter::new(input.as_bytes(), &mut output);

        let info = collect_profile(&mut prompter, Some(country)).expect("io");
        assert_eq!(info.first_name, "John");
        assert_eq!(info.father_name, "Robert");
        assert_eq!(info.spouse_name, "Jane");
        assert_eq!(info.pet_name, "Rex");
        assert_eq!(info.mobile_number, "0701234567");
        assert_eq!(info.country.as_deref(), Some("se"));
        assert_eq!(info.documents.len(), 1);
        assert_eq!(
            info.documents.get("personnummer").map(String::as_str),
            Some("19900515-1234")
        );
    }

    #[test]
    fn country_prompt_retries_unknown_codes() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new("zz\nUK\n".as_bytes(), &mut output);
        let country = select_country(&mut prompter).expect("io");
        assert_eq!(country.code, "uk");

        let mut output = Vec::new();
        let mut prompter = Prompter::new("".as_bytes(), &mut output);
        assert_eq!(select_country(&mut prompter).expect("io").code, "general");
    }
}
