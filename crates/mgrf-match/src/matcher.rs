//! # Route Matching
//!
//! A route matches a query when all of these hold:
//!
//! | Criterion | Rule |
//! |-----------|------|
//! | Origin | `incoming_country` equal (exact, case-sensitive) |
//! | Destination | `destination_country` equal |
//! | Province | route province empty, or equal to the query's |
//! | Specialty | `specialty` equal |
//! | Credentials | every required qualification held, verbatim or via a synonym |
//! | Experience | `experience_months >= min_experience_months` |
//!
//! The first four criteria pick the *candidates* for a query. The last two
//! decide eligibility, and [`RouteMatcher::assess`] reports why a candidate
//! fails them.
//!
//! Results keep catalog order. Multiple matches are legal and are never
//! re-sorted.

use mgrf_core::{Query, Route};
use serde::Serialize;

use crate::synonyms::QualificationSynonyms;

/// Verdict for one candidate route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    Eligible,
    Ineligible {
        /// Required credentials the applicant does not hold, in route order.
        missing_qualifications: Vec<String>,
        /// Months short of the route's minimum; zero when experience suffices.
        experience_shortfall_months: u32,
    },
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// A candidate route and its verdict.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment<'a> {
    pub route: &'a Route,
    pub eligibility: Eligibility,
}

/// Filters a route slice against queries.
#[derive(Debug, Clone, Copy)]
pub struct RouteMatcher<'a> {
    routes: &'a [Route],
    synonyms: &'a QualificationSynonyms,
}

impl<'a> RouteMatcher<'a> {
    pub fn new(routes: &'a [Route], synonyms: &'a QualificationSynonyms) -> Self {
        Self { routes, synonyms }
    }

    /// Whether `route` is for the query's origin, destination, province
    /// and specialty.
    pub fn is_candidate(route: &Route, query: &Query) -> bool {
        route.incoming_country == query.incoming_country
            && route.destination_country == query.destination_country
            && (route.destination_province.is_empty()
                || route.destination_province == query.destination_province)
            && route.specialty == query.specialty
    }

    /// Whether `route` matches `query` on every criterion.
    pub fn is_match(&self, route: &Route, query: &Query) -> bool {
        Self::is_candidate(route, query)
            && route
                .required_qualifications
                .iter()
                .all(|q| self.synonyms.is_satisfied(q, &query.qualifications))
            && query.experience_months >= route.min_experience_months
    }

    /// Every matching route, in catalog order.
    pub fn find(&self, query: &Query) -> Vec<&'a Route> {
        let matches: Vec<&'a Route> = self
            .routes
            .iter()
            .filter(|r| self.is_match(r, query))
            .collect();
        tracing::debug!(
            from = %query.incoming_country,
            to = %query.destination_country,
            province = %query.destination_province,
            specialty = %query.specialty,
            matches = matches.len(),
            "route lookup"
        );
        matches
    }

    /// Verdicts for every candidate route, in catalog order.
    ///
    /// The eligible subset equals [`find`](Self::find).
    pub fn assess(&self, query: &Query) -> Vec<Assessment<'a>> {
        self.routes
            .iter()
            .filter(|r| Self::is_candidate(r, query))
            .map(|route| Assessment {
                route,
                eligibility: self.verdict(route, query),
            })
            .collect()
    }

    fn verdict(&self, route: &Route, query: &Query) -> Eligibility {
        let missing_qualifications: Vec<String> = route
            .required_qualifications
            .iter()
            .filter(|q| !self.synonyms.is_satisfied(q, &query.qualifications))
            .cloned()
            .collect();
        let experience_shortfall_months = route
            .min_experience_months
            .saturating_sub(query.experience_months);
        if missing_qualifications.is_empty() && experience_shortfall_months == 0 {
            Eligibility::Eligible
        } else {
            Eligibility::Ineligible {
                missing_qualifications,
                experience_shortfall_months,
            }
        }
    }
}

/// Matching routes for `query` over `routes`, in order.
pub fn find_matching_routes<'a>(
    routes: &'a [Route],
    query: &Query,
    synonyms: &'a QualificationSynonyms,
) -> Vec<&'a Route> {
    RouteMatcher::new(routes, synonyms).find(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgrf_core::RouteId;

    fn route(id: u32, province: &str, quals: &[&str], min: u32) -> Route {
        let route: Route = serde_json::from_value(serde_json::json!({
            "id": id,
            "incomingCountry": "United Kingdom",
            "destinationCountry": "Canada",
            "destinationProvince": province,
            "specialty": "Family Medicine",
            "requiredQualifications": quals,
            "minExperienceMonths": min,
            "steps": [{"title": "Apply", "description": "", "docs": [], "fee": "$0", "timeWeeks": "1"}],
            "lastVerified": "2025-08-08"
        }))
        .unwrap();
        assert_eq!(route.id, RouteId(id));
        route
    }

    fn query(province: &str, quals: &[&str], months: u32) -> Query {
        Query::new("United Kingdom", "Canada", province, "Family Medicine")
            .with_qualifications(quals.iter().copied())
            .with_experience_months(months)
    }

    #[test]
    fn experience_is_inclusive_lower_bound() {
        let routes = vec![route(1, "Alberta", &["MRCGP"], 24)];
        let synonyms = QualificationSynonyms::builtin();
        let matcher = RouteMatcher::new(&routes, &synonyms);
        assert!(matcher.find(&query("Alberta", &["MRCGP"], 23)).is_empty());
        assert_eq!(matcher.find(&query("Alberta", &["MRCGP"], 24)).len(), 1);
    }

    #[test]
    fn every_qualification_required() {
        let routes = vec![route(1, "Alberta", &["MRCGP", "CCT"], 0)];
        let synonyms = QualificationSynonyms::builtin();
        let matcher = RouteMatcher::new(&routes, &synonyms);
        assert!(matcher.find(&query("Alberta", &["MRCGP"], 12)).is_empty());
        assert_eq!(matcher.find(&query("Alberta", &["MRCGP", "CCT"], 12)).len(), 1);
    }

    #[test]
    fn province_rules() {
        let routes = vec![route(1, "Alberta", &["MRCGP"], 0), route(2, "", &["MRCGP"], 0)];
        let synonyms = QualificationSynonyms::new();
        let matcher = RouteMatcher::new(&routes, &synonyms);

        let ids = |q: &Query| matcher.find(q).iter().map(|r| r.id.get()).collect::<Vec<_>>();
        assert_eq!(ids(&query("Alberta", &["MRCGP"], 0)), vec![1, 2]);
        assert_eq!(ids(&query("", &["MRCGP"], 0)), vec![2]);
        assert_eq!(ids(&query("Ontario", &["MRCGP"], 0)), vec![2]);
    }

    #[test]
    fn no_qualifications_matches_nothing() {
        let routes = vec![route(1, "", &["MRCGP"], 0)];
        let synonyms = QualificationSynonyms::builtin();
        let matcher = RouteMatcher::new(&routes, &synonyms);
        assert!(matcher.find(&query("", &[], 600)).is_empty());
    }

    #[test]
    fn assess_explains_failures() {
        let routes = vec![
            route(1, "Alberta", &["MRCGP", "CCT"], 24),
            route(2, "Ontario", &["MRCGP"], 0),
        ];
        let synonyms = QualificationSynonyms::builtin();
        let matcher = RouteMatcher::new(&routes, &synonyms);
        let assessments = matcher.assess(&query("Alberta", &["MRCGP"], 20));
        assert_eq!(assessments.len(), 1);
        assert_eq!(
            assessments[0].eligibility,
            Eligibility::Ineligible {
                missing_qualifications: vec!["CCT".to_string()],
                experience_shortfall_months: 4,
            }
        );
    }

    #[test]
    fn free_function_agrees_with_matcher() {
        let routes = vec![route(1, "Alberta", &["FCFP(SA)"], 24)];
        let synonyms = QualificationSynonyms::builtin();
        let q = query("Alberta", &["FCFP"], 24);
        let direct = find_matching_routes(&routes, &q, &synonyms);
        let via = RouteMatcher::new(&routes, &synonyms).find(&q);
        assert_eq!(direct, via);
        assert_eq!(direct.len(), 1);
    }

    #[test]
    fn eligibility_serializes_with_status_tag() {
        let json = serde_json::to_value(Eligibility::Ineligible {
            missing_qualifications: vec!["CCT".to_string()],
            experience_shortfall_months: 0,
        })
        .unwrap();
        assert_eq!(json["status"], "ineligible");
        assert_eq!(json["missing_qualifications"][0], "CCT");
    }
}
