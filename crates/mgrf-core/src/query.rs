//! # Eligibility Queries
//!
//! A [`Query`] captures what the applicant told us: where their credentials
//! come from, where they want to practise, in which specialty, what they
//! hold, and how long they have practised. It is built per lookup and
//! discarded afterwards.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One eligibility lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Country that issued the applicant's credentials.
    pub incoming_country: String,
    /// Country the applicant wants to practise in.
    pub destination_country: String,
    /// Province within the destination; empty when none was chosen.
    #[serde(default)]
    pub destination_province: String,
    /// Specialty the applicant wants to be licensed for.
    pub specialty: String,
    /// Credentials the applicant holds.
    #[serde(default)]
    pub qualifications: BTreeSet<String>,
    /// Professional experience, in whole months.
    #[serde(default)]
    pub experience_months: u32,
}

impl Query {
    /// Start a query for the given jurisdictions and specialty, with no
    /// qualifications and no experience.
    pub fn new(
        incoming_country: impl Into<String>,
        destination_country: impl Into<String>,
        destination_province: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            incoming_country: incoming_country.into(),
            destination_country: destination_country.into(),
            destination_province: destination_province.into(),
            specialty: specialty.into(),
            qualifications: BTreeSet::new(),
            experience_months: 0,
        }
    }

    /// Add held qualifications.
    pub fn with_qualifications<I, S>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.qualifications
            .extend(qualifications.into_iter().map(Into::into));
        self
    }

    /// Set professional experience in months.
    pub fn with_experience_months(mut self, months: u32) -> Self {
        self.experience_months = months;
        self
    }

    /// Names of the mandatory fields left empty (`incomingCountry`,
    /// `destinationCountry`, `specialty`). Province, qualifications and
    /// experience are optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.incoming_country.trim().is_empty() {
            missing.push("incomingCountry");
        }
        if self.destination_country.trim().is_empty() {
            missing.push("destinationCountry");
        }
        if self.specialty.trim().is_empty() {
            missing.push("specialty");
        }
        missing
    }
}

/// Convert a user-entered number of years into whole months.
///
/// Rounds to the nearest month. Non-numeric, negative, or non-finite input
/// normalizes to zero.
pub fn experience_months_from_years(input: &str) -> u32 {
    let years: f64 = match input.trim().parse() {
        Ok(y) => y,
        Err(_) => return 0,
    };
    if !years.is_finite() || years < 0.0 {
        return 0;
    }
    let months = (years * 12.0).round();
    if months >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        months as u32
    }
}
