//! # Route Catalog
//!
//! The authoritative, ordered collection of licensing routes: the
//! hand-authored seed followed by everything the synthesis passes add.
//!
//! A catalog is built once and then only read. The one way to change it is
//! a bulk replacement ([`RouteCatalog::replace_routes`] and friends), which
//! decodes, validates and re-synthesizes the new dataset before swapping it
//! in. A rejected replacement leaves the catalog exactly as it was.
//!
//! ## Digest
//!
//! [`RouteCatalog::digest`] is a SHA-256 over a domain prefix and each
//! route's JSON in catalog order, so two catalogs with the same routes in
//! the same order have the same digest.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use mgrf_core::{Route, RouteId};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::PackResult;
use crate::parser::load_dataset_value;
use crate::seed::seed_routes;
use crate::synthesis::{synthesize, PassReport};
use crate::validation::{check_routes, decode_json, decode_records, decode_yaml};

const CATALOG_DIGEST_PREFIX: &[u8] = b"mgrf-catalog-v1\0";

/// A route attribute that [`RouteCatalog::unique_values`] can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteField {
    IncomingCountry,
    DestinationCountry,
    DestinationProvince,
    Specialty,
}

impl RouteField {
    pub fn value(self, route: &Route) -> &str {
        match self {
            Self::IncomingCountry => &route.incoming_country,
            Self::DestinationCountry => &route.destination_country,
            Self::DestinationProvince => &route.destination_province,
            Self::Specialty => &route.specialty,
        }
    }

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IncomingCountry => "incomingCountry",
            Self::DestinationCountry => "destinationCountry",
            Self::DestinationProvince => "destinationProvince",
            Self::Specialty => "specialty",
        }
    }
}

impl std::fmt::Display for RouteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incomingCountry" | "incoming-country" => Ok(Self::IncomingCountry),
            "destinationCountry" | "destination-country" => Ok(Self::DestinationCountry),
            "destinationProvince" | "destination-province" => Ok(Self::DestinationProvince),
            "specialty" => Ok(Self::Specialty),
            other => Err(format!("unknown route field: {other}")),
        }
    }
}

/// Route counts for a built catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub seed: usize,
    /// `(pass name, routes added)` in pass order.
    pub synthesized: Vec<(&'static str, usize)>,
}

/// Outcome of a successful bulk replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceSummary {
    pub previous_digest: String,
    pub digest: String,
    pub previous_len: usize,
    pub len: usize,
}

impl ReplaceSummary {
    /// Whether the replacement produced a different catalog.
    pub fn changed(&self) -> bool {
        self.previous_digest != self.digest
    }
}

/// The ordered route catalog.
#[derive(Debug, Clone)]
pub struct RouteCatalog {
    routes: Vec<Route>,
    seed_len: usize,
    reports: Vec<PassReport>,
    digest: String,
}

impl RouteCatalog {
    /// Build from the embedded seed.
    pub fn builtin() -> PackResult<Self> {
        Self::from_seed(seed_routes()?)
    }

    /// Build from an already-validated seed list, running all synthesis
    /// passes.
    pub fn from_seed(seed: Vec<Route>) -> PackResult<Self> {
        let seed_len = seed.len();
        let synthesized = synthesize(seed)?;
        let digest = compute_digest(&synthesized.routes)?;
        let catalog = Self {
            routes: synthesized.routes,
            seed_len,
            reports: synthesized.reports,
            digest,
        };
        tracing::info!(
            routes = catalog.len(),
            seed = seed_len,
            digest = %catalog.digest,
            "route catalog built"
        );
        Ok(catalog)
    }

    /// Build from a dataset file (JSON or YAML by extension).
    pub fn from_file(path: &Path) -> PackResult<Self> {
        let value = load_dataset_value(path)?;
        Self::from_seed(decode_records(value)?)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Number of routes that came from the seed (they come first).
    pub fn seed_len(&self) -> usize {
        self.seed_len
    }

    /// The seed routes the catalog was built from, without synthesized
    /// entries. Persisting these and rebuilding reproduces the catalog.
    pub fn seed(&self) -> &[Route] {
        &self.routes[..self.seed_len]
    }

    /// Per-pass synthesis reports from the last build.
    pub fn reports(&self) -> &[PassReport] {
        &self.reports
    }

    /// Hex SHA-256 of the catalog contents.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.len(),
            seed: self.seed_len,
            synthesized: self.reports.iter().map(|r| (r.name, r.added)).collect(),
        }
    }

    /// Sorted distinct non-empty values of `field`.
    pub fn unique_values(&self, field: RouteField) -> Vec<String> {
        self.routes
            .iter()
            .map(|r| field.value(r))
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Destination country → sorted distinct provinces. Countries without
    /// provinces are absent.
    pub fn provinces_by_destination(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for route in self.routes.iter().filter(|r| r.is_province_specific()) {
            grouped
                .entry(&route.destination_country)
                .or_default()
                .insert(&route.destination_province);
        }
        grouped
            .into_iter()
            .map(|(country, provinces)| {
                (
                    country.to_string(),
                    provinces.into_iter().map(str::to_string).collect(),
                )
            })
            .collect()
    }

    /// Sorted union of the qualifications required by routes from
    /// `incoming_country` for `specialty`.
    pub fn qualifications_for(&self, incoming_country: &str, specialty: &str) -> Vec<String> {
        self.routes
            .iter()
            .filter(|r| r.incoming_country == incoming_country && r.specialty == specialty)
            .flat_map(|r| r.required_qualifications.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Every qualification label any route requires, sorted.
    pub fn all_qualifications(&self) -> Vec<String> {
        self.routes
            .iter()
            .flat_map(|r| r.required_qualifications.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Replace the whole catalog with `seed` plus its synthesized routes.
    ///
    /// `seed` is validated as a replacement dataset would be: every record
    /// must pass [`Route::validate`] and ids must be unique. On any failure
    /// `self` is left untouched.
    pub fn replace_routes(&mut self, seed: Vec<Route>) -> PackResult<ReplaceSummary> {
        let checked = check_routes(seed);
        self.swap_in(checked)
    }

    /// Replace the catalog from a JSON array of route records.
    pub fn replace_from_json(&mut self, payload: &str) -> PackResult<ReplaceSummary> {
        self.swap_in(decode_json(payload))
    }

    /// Replace the catalog from a YAML sequence of route records.
    pub fn replace_from_yaml(&mut self, payload: &str) -> PackResult<ReplaceSummary> {
        self.swap_in(decode_yaml(payload))
    }

    /// Replace the catalog from a dataset file (JSON or YAML by extension).
    pub fn replace_from_file(&mut self, path: &Path) -> PackResult<ReplaceSummary> {
        let decoded = load_dataset_value(path).and_then(decode_records);
        self.swap_in(decoded)
    }

    fn swap_in(&mut self, decoded: PackResult<Vec<Route>>) -> PackResult<ReplaceSummary> {
        let rebuilt = decoded.and_then(Self::from_seed);
        let next = match rebuilt {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(error = %e, digest = %self.digest, "route catalog replacement rejected");
                return Err(e);
            }
        };
        let summary = ReplaceSummary {
            previous_digest: self.digest.clone(),
            digest: next.digest.clone(),
            previous_len: self.len(),
            len: next.len(),
        };
        *self = next;
        tracing::info!(
            previous = %summary.previous_digest,
            digest = %summary.digest,
            routes = summary.len,
            "route catalog replaced"
        );
        Ok(summary)
    }
}

fn compute_digest(routes: &[Route]) -> PackResult<String> {
    let mut hasher = Sha256::new();
    hasher.update(CATALOG_DIGEST_PREFIX);
    for route in routes {
        hasher.update(format!("routes/{}\0", route.id).as_bytes());
        hasher.update(serde_json::to_vec(route)?);
        hasher.update(b"\0");
    }
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackError;

    fn catalog() -> RouteCatalog {
        RouteCatalog::builtin().unwrap()
    }

    #[test]
    fn builtin_has_expected_size() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 520);
        assert_eq!(catalog.seed_len(), 108);
        assert_eq!(
            catalog.stats().synthesized,
            vec![("specialist", 345), ("family_medicine", 27), ("gulf", 40)]
        );
    }

    #[test]
    fn unique_values_sorted_and_non_empty() {
        let catalog = catalog();
        let provinces = catalog.unique_values(RouteField::DestinationProvince);
        assert!(!provinces.iter().any(String::is_empty));
        let mut sorted = provinces.clone();
        sorted.sort();
        assert_eq!(provinces, sorted);
        assert!(provinces.contains(&"Manitoba".to_string()));

        let destinations = catalog.unique_values(RouteField::DestinationCountry);
        assert!(destinations.contains(&"Qatar".to_string()));
        assert!(destinations.contains(&"Canada".to_string()));
    }

    #[test]
    fn provinces_grouped_by_country() {
        let grouped = catalog().provinces_by_destination();
        let canada = &grouped["Canada"];
        assert_eq!(
            canada,
            &vec![
                "Alberta".to_string(),
                "British Columbia".to_string(),
                "Manitoba".to_string(),
                "Nova Scotia".to_string(),
                "Ontario".to_string(),
                "Saskatchewan".to_string(),
            ]
        );
        assert!(!grouped.contains_key("Qatar"));
    }

    #[test]
    fn qualifications_for_pair() {
        let catalog = catalog();
        let quals = catalog.qualifications_for("United Kingdom", "Family Medicine");
        assert!(quals.contains(&"MRCGP".to_string()));
        assert!(quals.contains(&"CCT".to_string()));
        assert!(catalog.qualifications_for("Atlantis", "Family Medicine").is_empty());
        let all = catalog.all_qualifications();
        assert!(all.len() > quals.len());
        assert!(all.contains(&"FCFP(SA)".to_string()));
    }

    #[test]
    fn get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.get(RouteId(109)).unwrap().specialty, "Endocrinology");
        assert!(catalog.get(RouteId(9999)).is_none());
    }

    #[test]
    fn digest_is_stable_and_content_sensitive() {
        let a = catalog();
        let b = catalog();
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);

        let mut seed = seed_routes().unwrap();
        seed[0].min_experience_months += 1;
        let c = RouteCatalog::from_seed(seed).unwrap();
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn replace_rejects_and_keeps_catalog() {
        let mut catalog = catalog();
        let digest = catalog.digest().to_string();
        let err = catalog
            .replace_from_json(r#"[{"id": 1, "incomingCountry": "Ireland"}]"#)
            .unwrap_err();
        assert!(matches!(err, PackError::InvalidCatalog { .. }));
        assert_eq!(catalog.digest(), digest);
        assert_eq!(catalog.len(), 520);

        let err = catalog.replace_from_json(r#"{"routes": []}"#).unwrap_err();
        assert!(matches!(err, PackError::NotAList { .. }));
        assert_eq!(catalog.digest(), digest);
    }

    #[test]
    fn replace_routes_rejects_duplicate_ids() {
        let mut catalog = catalog();
        let mut seed = seed_routes().unwrap();
        let dup = seed[0].clone();
        seed.push(dup);
        let err = catalog.replace_routes(seed).unwrap_err();
        match err {
            PackError::InvalidCatalog { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("duplicate id 1"));
            }
            other => panic!("expected InvalidCatalog, got {other:?}"),
        }
        assert_eq!(catalog.len(), 520);
    }

    #[test]
    fn replace_resynthesizes() {
        let mut catalog = catalog();
        let seed: Vec<Route> = seed_routes().unwrap().into_iter().take(1).collect();
        let payload = serde_json::to_string(&seed).unwrap();
        let summary = catalog.replace_from_json(&payload).unwrap();
        assert!(summary.changed());
        assert_eq!(summary.previous_len, 520);
        assert_eq!(catalog.seed_len(), 1);
        // one seed route + every pass target, none pre-existing
        assert_eq!(catalog.len(), 1 + 360 + 27 + 40);
        assert_eq!(catalog.routes()[1].id, RouteId(2));
        assert_eq!(summary.len, catalog.len());
        assert_eq!(summary.digest, catalog.digest());
    }

    #[test]
    fn route_field_parses_wire_names() {
        assert_eq!(
            "destinationProvince".parse::<RouteField>().unwrap(),
            RouteField::DestinationProvince
        );
        assert_eq!("specialty".parse::<RouteField>().unwrap(), RouteField::Specialty);
        assert!("fee".parse::<RouteField>().is_err());
    }
}
