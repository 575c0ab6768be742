//! # Route Records
//!
//! A [`Route`] is one complete licensing procedure: a credential held in the
//! incoming country, the destination jurisdiction and specialty it licenses
//! for, the experience floor, and the ordered steps to follow.
//!
//! Routes are keyed two ways:
//!
//! - [`RouteId`] is the stable catalog key, unique across seed and
//!   synthesized entries.
//! - [`DedupKey`] is the logical identity used by synthesis to avoid
//!   generating a second route for the same (specialty, origin, destination).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// Stable catalog key of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u32);

impl RouteId {
    /// Raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One procedural stage of a route (an application, assessment, or
/// registration action).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Short imperative title.
    pub title: String,
    /// What the applicant does at this stage.
    pub description: String,
    /// Labels of the documents required for this stage.
    pub docs: Vec<String>,
    /// Currency-labelled fee, informational only (e.g. `"$500"`, `"AED 100"`).
    pub fee: String,
    /// Expected duration in weeks; may be a range such as `"8-12"`.
    pub time_weeks: String,
}

/// A citation backing a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Human-readable label.
    pub text: String,
    /// Link to the regulator or guidance page.
    pub url: String,
}

/// A licensing route from one jurisdiction's credential to practice rights
/// in another jurisdiction and specialty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Stable catalog key.
    pub id: RouteId,
    /// Country that issued the applicant's credentials.
    pub incoming_country: String,
    /// Country granting practice rights.
    pub destination_country: String,
    /// Sub-national licensing jurisdiction; empty when the destination
    /// licenses nationally.
    #[serde(default)]
    pub destination_province: String,
    /// Specialty this route licenses for.
    pub specialty: String,
    /// Qualifications that must ALL be held.
    pub required_qualifications: Vec<String>,
    /// Inclusive lower bound on professional experience.
    pub min_experience_months: u32,
    /// Steps in the order they must be completed.
    pub steps: Vec<Step>,
    /// Citations; never matched against.
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Date the route was last checked against its sources.
    pub last_verified: NaiveDate,
}

impl Route {
    /// Whether this route only applies to one province of its destination.
    pub fn is_province_specific(&self) -> bool {
        !self.destination_province.is_empty()
    }

    /// Destination as shown to users: `"Canada – Alberta"` or `"Qatar"`.
    pub fn destination_label(&self) -> String {
        if self.is_province_specific() {
            format!("{} – {}", self.destination_country, self.destination_province)
        } else {
            self.destination_country.clone()
        }
    }

    /// Dedup key scoped to the destination province
    /// (`specialty|incomingCountry|destinationProvince`).
    pub fn province_key(&self) -> DedupKey {
        DedupKey::new(
            &self.specialty,
            &self.incoming_country,
            &self.destination_province,
        )
    }

    /// Dedup key scoped to the destination country
    /// (`specialty|incomingCountry|destinationCountry`).
    pub fn country_key(&self) -> DedupKey {
        DedupKey::new(
            &self.specialty,
            &self.incoming_country,
            &self.destination_country,
        )
    }

    /// Check the data-model invariants of this record.
    ///
    /// Returns every defect found, not just the first, so a rejected
    /// dataset can be fixed in one pass.
    pub fn validate(&self) -> Result<(), Vec<RouteError>> {
        let id = self.id;
        let mut errors = Vec::new();

        let required_text = [
            ("incomingCountry", &self.incoming_country),
            ("destinationCountry", &self.destination_country),
            ("specialty", &self.specialty),
        ];
        for (field, value) in required_text {
            if value.trim().is_empty() {
                errors.push(RouteError::EmptyField { id, field });
            }
        }

        if self.required_qualifications.is_empty() {
            errors.push(RouteError::NoQualifications { id });
        }
        for (index, qual) in self.required_qualifications.iter().enumerate() {
            if qual.trim().is_empty() {
                errors.push(RouteError::BlankQualification { id, index });
            }
        }

        if self.steps.is_empty() {
            errors.push(RouteError::NoSteps { id });
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                errors.push(RouteError::UntitledStep { id, index });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Logical identity of a route for duplicate suppression:
/// `specialty|origin|destination`, where destination is either the province
/// or the country depending on the synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey(String);

impl DedupKey {
    /// Build a key from its three components.
    pub fn new(specialty: &str, origin: &str, destination: &str) -> Self {
        Self(format!("{specialty}|{origin}|{destination}"))
    }

    /// The canonical `a|b|c` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DedupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route {
            id: RouteId(1),
            incoming_country: "United Kingdom".to_string(),
            destination_country: "Canada".to_string(),
            destination_province: "Alberta".to_string(),
            specialty: "Family Medicine".to_string(),
            required_qualifications: vec!["MRCGP".to_string(), "CCT".to_string()],
            min_experience_months: 12,
            steps: vec![Step {
                title: "Apply for independent practice".to_string(),
                description: "Submit an application to CPSA.".to_string(),
                docs: vec!["Passport".to_string(), "CV".to_string()],
                fee: "$200".to_string(),
                time_weeks: "2".to_string(),
            }],
            sources: vec![Source {
                text: "CPSA".to_string(),
                url: "https://cpsa.ca".to_string(),
            }],
            last_verified: NaiveDate::from_ymd_opt(2025, 8, 8).unwrap(),
        }
    }

    #[test]
    fn valid_route_passes_validation() {
        assert!(sample_route().validate().is_ok());
    }

    #[test]
    fn empty_qualifications_rejected() {
        let mut route = sample_route();
        route.required_qualifications.clear();
        let errors = route.validate().unwrap_err();
        assert_eq!(errors, vec![RouteError::NoQualifications { id: RouteId(1) }]);
    }

    #[test]
    fn validation_collects_every_defect() {
        let mut route = sample_route();
        route.specialty = "  ".to_string();
        route.incoming_country.clear();
        route.required_qualifications.push(String::new());
        route.steps[0].title.clear();
        let errors = route.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&RouteError::EmptyField {
            id: RouteId(1),
            field: "specialty"
        }));
        assert!(errors.contains(&RouteError::BlankQualification {
            id: RouteId(1),
            index: 2
        }));
        assert!(errors.contains(&RouteError::UntitledStep {
            id: RouteId(1),
            index: 0
        }));
    }

    #[test]
    fn no_steps_rejected() {
        let mut route = sample_route();
        route.steps.clear();
        assert_eq!(
            route.validate().unwrap_err(),
            vec![RouteError::NoSteps { id: RouteId(1) }]
        );
    }

    #[test]
    fn dedup_keys_use_pipe_separated_form() {
        let route = sample_route();
        assert_eq!(
            route.province_key().as_str(),
            "Family Medicine|United Kingdom|Alberta"
        );
        assert_eq!(
            route.country_key().as_str(),
            "Family Medicine|United Kingdom|Canada"
        );
    }

    #[test]
    fn destination_label_includes_province_when_present() {
        let mut route = sample_route();
        assert_eq!(route.destination_label(), "Canada – Alberta");
        route.destination_province.clear();
        assert!(!route.is_province_specific());
        assert_eq!(route.destination_label(), "Canada");
    }

    #[test]
    fn decodes_camel_case_wire_shape() {
        let json = r#"{
            "id": 12,
            "incomingCountry": "South Africa",
            "destinationCountry": "Canada",
            "destinationProvince": "Alberta",
            "specialty": "Family Medicine",
            "requiredQualifications": ["FCFP(SA)"],
            "minExperienceMonths": 24,
            "steps": [{
                "title": "Apply for CPSA eligibility",
                "description": "Submit an eligibility assessment.",
                "docs": ["Passport"],
                "fee": "$300",
                "timeWeeks": "3"
            }],
            "sources": [],
            "lastVerified": "2025-08-08"
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route.id, RouteId(12));
        assert_eq!(route.required_qualifications, vec!["FCFP(SA)"]);
        assert_eq!(route.steps[0].time_weeks, "3");
        assert_eq!(
            route.last_verified,
            NaiveDate::from_ymd_opt(2025, 8, 8).unwrap()
        );
    }

    #[test]
    fn province_and_sources_default_to_empty() {
        let json = r#"{
            "id": 90,
            "incomingCountry": "Australia",
            "destinationCountry": "Ireland",
            "specialty": "Family Medicine",
            "requiredQualifications": ["FRACGP"],
            "minExperienceMonths": 24,
            "steps": [{"title": "t", "description": "d", "docs": [], "fee": "€500", "timeWeeks": "4"}],
            "lastVerified": "2025-08-08"
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert!(route.destination_province.is_empty());
        assert!(route.sources.is_empty());
    }

    #[test]
    fn missing_required_field_fails_decode() {
        let json = r#"{
            "id": 1,
            "incomingCountry": "Ireland",
            "destinationCountry": "Canada",
            "specialty": "Family Medicine",
            "minExperienceMonths": 24,
            "steps": [],
            "lastVerified": "2025-08-08"
        }"#;
        let err = serde_json::from_str::<Route>(json).unwrap_err();
        assert!(err.to_string().contains("requiredQualifications"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_route()).unwrap();
        assert_eq!(value["minExperienceMonths"], 12);
        assert_eq!(value["lastVerified"], "2025-08-08");
        assert_eq!(value["steps"][0]["timeWeeks"], "2");
    }
}
