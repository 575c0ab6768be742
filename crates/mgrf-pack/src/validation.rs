//! # Catalog Validation
//!
//! Two layers:
//!
//! - [`decode_records`] is the replacement boundary. It turns a generic
//!   JSON value into `Vec<Route>`, checking shape, every record's
//!   invariants, and id uniqueness. Any defect rejects the whole dataset.
//! - [`audit`] re-checks a built catalog, including the dedup-key
//!   guarantees of the synthesis passes, and reports errors and warnings
//!   without failing.

use std::collections::{BTreeMap, BTreeSet};

use mgrf_core::{DedupKey, Route, RouteId};
use serde_json::Value;

use crate::catalog::RouteCatalog;
use crate::error::{PackError, PackResult};
use crate::parser::{parse_json_str, parse_yaml_str, value_kind};
use crate::synthesis::KeyScope;

/// Result of auditing a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogValidationResult {
    /// Whether the catalog is valid (no errors; warnings allowed).
    pub is_valid: bool,
    /// Defects that violate a catalog invariant.
    pub errors: Vec<String>,
    /// Oddities that do not affect matching.
    pub warnings: Vec<String>,
}

impl CatalogValidationResult {
    /// An empty, valid result.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error and mark the result invalid.
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(msg.into());
    }

    /// Record a warning.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Fold another result into this one.
    pub fn merge(&mut self, other: CatalogValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert into a `PackResult`, failing with
    /// [`PackError::InvalidCatalog`] when any error was recorded.
    pub fn into_result(self) -> PackResult<Vec<String>> {
        if self.is_valid {
            Ok(self.warnings)
        } else {
            Err(PackError::InvalidCatalog {
                errors: self.errors,
            })
        }
    }
}

/// Decode a JSON payload into validated route records.
pub fn decode_json(payload: &str) -> PackResult<Vec<Route>> {
    let value = parse_json_str(payload).map_err(as_catalog_error)?;
    decode_records(value)
}

/// Decode a YAML payload into validated route records.
pub fn decode_yaml(payload: &str) -> PackResult<Vec<Route>> {
    let value = parse_yaml_str(payload).map_err(as_catalog_error)?;
    decode_records(value)
}

/// A payload that is not even well-formed is reported the same way as one
/// with bad records, so callers have one rejection to handle.
fn as_catalog_error(err: PackError) -> PackError {
    PackError::InvalidCatalog {
        errors: vec![err.to_string()],
    }
}

/// Decode a generic value into validated route records.
///
/// The value must be a list. Each element must decode into a [`Route`]
/// with every required field present and pass [`Route::validate`]; ids
/// must be unique across the list. Every defect is reported with its
/// element index.
pub fn decode_records(value: Value) -> PackResult<Vec<Route>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(PackError::NotAList {
                found: value_kind(&other),
            })
        }
    };

    let mut result = CatalogValidationResult::ok();
    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Route>(item) {
            Ok(route) => decoded.push((index, route)),
            Err(e) => result.add_error(format!("routes[{index}]: {e}")),
        }
    }
    result.merge(check_indexed(decoded.iter().map(|(i, r)| (*i, r))));
    result.into_result()?;
    Ok(decoded.into_iter().map(|(_, route)| route).collect())
}

/// Check already-typed routes the way [`decode_records`] checks decoded
/// ones.
pub fn check_routes(routes: Vec<Route>) -> PackResult<Vec<Route>> {
    check_indexed(routes.iter().enumerate()).into_result()?;
    Ok(routes)
}

/// Per-record invariants and id uniqueness, reported against each record's
/// position in the submitted list.
fn check_indexed<'a>(
    routes: impl IntoIterator<Item = (usize, &'a Route)>,
) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::ok();
    let mut first_index: BTreeMap<RouteId, usize> = BTreeMap::new();
    for (index, route) in routes {
        if let Err(defects) = route.validate() {
            for defect in defects {
                result.add_error(format!("routes[{index}]: {defect}"));
            }
        }
        if let Some(first) = first_index.get(&route.id) {
            result.add_error(format!(
                "routes[{index}]: duplicate id {} (first used at routes[{first}])",
                route.id
            ));
        } else {
            first_index.insert(route.id, index);
        }
    }
    result
}

/// Audit a built catalog.
///
/// Errors: duplicate ids, routes without qualifications or steps, a
/// synthesized route whose dedup key already existed when its pass ran, or
/// two routes from the same pass sharing a key. Warnings: a route listing
/// the same qualification label twice.
pub fn audit(catalog: &RouteCatalog) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::ok();
    let routes = catalog.routes();

    let mut ids = BTreeSet::new();
    for route in routes {
        if !ids.insert(route.id) {
            result.add_error(format!("duplicate route id {}", route.id));
        }
        if let Err(defects) = route.validate() {
            for defect in defects {
                result.add_error(defect.to_string());
            }
        }
        let mut seen = BTreeSet::new();
        for qual in &route.required_qualifications {
            if !seen.insert(qual.as_str()) {
                result.add_warning(format!(
                    "route {}: qualification {qual:?} listed more than once",
                    route.id
                ));
            }
        }
    }

    let mut start = catalog.seed_len().min(routes.len());
    for report in catalog.reports() {
        let end = (start + report.added).min(routes.len());
        result.merge(audit_pass(&routes[..start], &routes[start..end], report.name, report.scope));
        start = end;
    }

    result
}

fn audit_pass(
    before: &[Route],
    added: &[Route],
    pass: &str,
    scope: KeyScope,
) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::ok();
    let existing: BTreeSet<DedupKey> = before.iter().map(|r| scope.key(r)).collect();
    let mut generated = BTreeSet::new();
    for route in added {
        let key = scope.key(route);
        if existing.contains(&key) {
            result.add_error(format!(
                "{pass} pass: route {} re-adds existing key {key}",
                route.id
            ));
        }
        if !generated.insert(key.clone()) {
            result.add_error(format!(
                "{pass} pass: route {} duplicates generated key {key}",
                route.id
            ));
        }
    }
    result
}
