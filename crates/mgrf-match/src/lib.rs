//! # mgrf-match: Eligibility Matching
//!
//! Given a [`Query`](mgrf_core::Query) and the catalog's route slice,
//! [`RouteMatcher`] returns the routes the applicant qualifies for, in
//! catalog order, and can explain why a route for the same jurisdiction
//! and specialty was not a match.
//!
//! Credential labels are compared exactly, except where
//! [`QualificationSynonyms`] declares two labels equivalent.

pub mod matcher;
pub mod synonyms;

pub use matcher::{find_matching_routes, Assessment, Eligibility, RouteMatcher};
pub use synonyms::QualificationSynonyms;
