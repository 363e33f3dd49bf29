use std::collections::HashSet;

use passlist_core::{ComplexityTier, PersonalInfo};
use passlist_generate::rules::family::FamilyRule;
use passlist_generate::{Rule, RuleSet};

fn john_doe() -> PersonalInfo {
    PersonalInfo {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        ..PersonalInfo::default()
    }
}

fn full_profile() -> PersonalInfo {
    let mut info = PersonalInfo {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        birth_date: "1990-05-15".to_string(),
        father_name: "Robert".to_string(),
        mother_name: "Mary Ann".to_string(),
        spouse_name: "Jane".to_string(),
        second_spouse_name: "Kate".to_string(),
        third_spouse_name: "Lucy".to_string(),
        partner_name: "Emma".to_string(),
        favorite_person_name: "Alice".to_string(),
        pet_name: "Rex".to_string(),
        mobile_number: "+1 555-123-4567".to_string(),
        home_phone_number: "021-8877".to_string(),
        country: Some("us".to_string()),
        ..PersonalInfo::default()
    };
    info.documents
        .insert("ssn".to_string(), "123-45-6789".to_string());
    info.documents
        .insert("passport".to_string(), "X1234567".to_string());
    info
}

fn generate(tier: ComplexityTier, info: &PersonalInfo) -> Vec<String> {
    let mut out = Vec::new();
    RuleSet::for_tier(tier)
        .generate(info, &mut out)
        .expect("vector sink never closes");
    out
}

fn missing<'a>(subset: &'a HashSet<String>, superset: &'a HashSet<String>) -> Vec<&'a String> {
    let mut missing: Vec<_> = subset.difference(superset).collect();
    missing.sort();
    missing.truncate(10);
    missing
}

#[test]
fn normal_tier_includes_baseline_name_candidates() {
    let out: HashSet<String> = generate(ComplexityTier::Normal, &john_doe())
        .into_iter()
        .collect();
    for expected in [
        "john", "doe", "johndoe", "doejohn", "John", "Doe", "JohnDoe", "DoeJohn", "john123",
        "doe123",
    ] {
        assert!(out.contains(expected), "missing {expected}");
    }
}

#[test]
fn normal_tier_includes_birth_date_permutations() {
    let info = PersonalInfo {
        birth_date: "1990-05-15".to_string(),
        ..john_doe()
    };
    let out: HashSet<String> = generate(ComplexityTier::Normal, &info).into_iter().collect();
    for expected in ["15051990", "05151990", "19900515"] {
        assert!(out.contains(expected), "missing {expected}");
    }
}

#[test]
fn empty_relatives_contribute_nothing() {
    let info = john_doe();
    for tier in ComplexityTier::ALL {
        let family = FamilyRule::new(tier);
        assert!(!family.applies_to(&info));
        assert!(family.expand(&info).is_empty());

        let mut with_pet = info.clone();
        with_pet.pet_name = "Rex".to_string();
        let without: HashSet<String> = generate(tier, &info).into_iter().collect();
        let with: HashSet<String> = generate(tier, &with_pet).into_iter().collect();
        assert!(without.is_subset(&with));
        assert!(!without.iter().any(|c| c.to_lowercase().contains("rex")));
    }
}

#[test]
fn candidates_are_never_empty() {
    let empty = PersonalInfo::default();
    for tier in ComplexityTier::ALL {
        assert!(generate(tier, &full_profile()).iter().all(|c| !c.is_empty()));
        assert!(generate(tier, &empty).iter().all(|c| !c.is_empty()));
    }
}

#[test]
fn tiers_nest_for_a_full_profile() {
    let info = full_profile();
    let normal: HashSet<String> = generate(ComplexityTier::Normal, &info).into_iter().collect();
    let sensitive: HashSet<String> = generate(ComplexityTier::Sensitive, &info)
        .into_iter()
        .collect();
    let aggressive: HashSet<String> = generate(ComplexityTier::Aggressive, &info)
        .into_iter()
        .collect();

    assert!(
        normal.is_subset(&sensitive),
        "normal candidates missing from sensitive: {:?}",
        missing(&normal, &sensitive)
    );
    assert!(
        sensitive.is_subset(&aggressive),
        "sensitive candidates missing from aggressive: {:?}",
        missing(&sensitive, &aggressive)
    );
    assert!(normal.len() < sensitive.len());
    assert!(sensitive.len() < aggressive.len());
}

#[test]
fn output_order_is_reproducible() {
    let info = full_profile();
    assert_eq!(
        generate(ComplexityTier::Sensitive, &info),
        generate(ComplexityTier::Sensitive, &info)
    );
}

#[test]
fn sensitive_tier_uses_documents_and_mixed_case() {
    let out: HashSet<String> = generate(ComplexityTier::Sensitive, &full_profile())
        .into_iter()
        .collect();
    for expected in ["john6789", "ssn123", "1234567passport", "JOHNdoe123"] {
        assert!(out.contains(expected), "missing {expected}");
    }
    assert!(!out.contains("X1234567"));
}

#[test]
fn sensitive_tier_decomposes_document_numbers() {
    let mut info = PersonalInfo {
        first_name: "John".to_string(),
        ..PersonalInfo::default()
    };
    info.documents
        .insert("ssn".to_string(), "123456".to_string());

    let out: HashSet<String> = generate(ComplexityTier::Sensitive, &info)
        .into_iter()
        .collect();
    for expected in ["654321", "123", "john_456"] {
        assert!(out.contains(expected), "missing {expected}");
    }
}

#[test]
fn aggressive_tier_adds_leet_and_keyboard_patterns() {
    let out: HashSet<String> = generate(ComplexityTier::Aggressive, &full_profile())
        .into_iter()
        .collect();
    for expected in ["j0hnd03", "123j0hn", "john_qwerty", "123zxcdoe", "doe.05"] {
        assert!(out.contains(expected), "missing {expected}");
    }
}
