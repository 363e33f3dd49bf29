//! Core contracts for passlist.
//!
//! This crate defines the personal-information record consumed by the
//! generation engine, the complexity tiers, the country/document catalog,
//! and the non-fatal profile validation shared by the engine and the CLI.

pub mod catalog;
pub mod error;
pub mod profile;
pub mod tier;
pub mod validation;

pub use catalog::{Country, DocumentType, find_country, supported_countries};
pub use error::{Error, Result};
pub use profile::{PersonalInfo, Relation};
pub use tier::ComplexityTier;
pub use validation::{ProfileIssue, validate_profile};

/// Calendar format accepted for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
