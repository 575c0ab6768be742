//! # Route Synthesis
//!
//! The hand-authored seed covers the common routes. Three passes then fill
//! in the regular cross-products of (specialty, origin, destination) that
//! nobody wrote by hand:
//!
//! | Pass | Axes | Key scope | Min experience |
//! |------|------|-----------|----------------|
//! | [`SpecialistPass`] | 15 specialties × 4 origins × 6 provinces | province | 60 months |
//! | [`FamilyMedicinePass`] | 3 provinces × 9 origins | province | 24 months |
//! | [`GulfPass`] | 5 origins × 4 destinations × 2 specialties | country | 36 months |
//!
//! Each pass is a pure transformation over the route list. It never adds a
//! route whose [`DedupKey`] is already present, so running a pass over its
//! own output adds nothing. Ids come from one [`IdAllocator`] threaded
//! through all passes.

mod family_medicine;
mod gulf;
mod specialist;

pub use family_medicine::FamilyMedicinePass;
pub use gulf::GulfPass;
pub use specialist::SpecialistPass;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use mgrf_core::{DedupKey, Route, RouteId};
use serde::Serialize;

use crate::error::{PackError, PackResult};
use crate::templates::RouteTemplate;

/// Verification date stamped on every generated route.
pub fn synthesis_verified_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 8).unwrap_or_default()
}

// ── Ids ──────────────────────────────────────────────────────────────────────

/// Monotonic source of fresh route ids.
///
/// Seeded once from the input list and then only moves forward; ids are
/// never reused and never recomputed by rescanning the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u32>,
}

impl IdAllocator {
    /// Start after the highest id in `routes` (at 1 for an empty list).
    pub fn after(routes: &[Route]) -> Self {
        match routes.iter().map(|r| r.id.get()).max() {
            Some(max) => Self {
                next: max.checked_add(1),
            },
            None => Self::starting_at(1),
        }
    }

    /// Start at an explicit id.
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// The id the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> Option<RouteId> {
        self.next.map(RouteId)
    }

    /// Hand out the next id.
    pub fn allocate(&mut self) -> PackResult<RouteId> {
        let id = self.next.ok_or(PackError::IdSpaceExhausted)?;
        self.next = id.checked_add(1);
        Ok(RouteId(id))
    }
}

// ── Keys ─────────────────────────────────────────────────────────────────────

/// Which destination component a pass uses in its dedup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScope {
    /// `specialty|origin|destinationProvince`
    Province,
    /// `specialty|origin|destinationCountry`
    Country,
}

impl KeyScope {
    /// Dedup key of an existing route under this scope.
    pub fn key(self, route: &Route) -> DedupKey {
        match self {
            Self::Province => route.province_key(),
            Self::Country => route.country_key(),
        }
    }

    /// Dedup key of a not-yet-built target under this scope.
    pub fn target_key(self, target: &Target) -> DedupKey {
        let destination = match self {
            Self::Province => &target.destination_province,
            Self::Country => &target.destination_country,
        };
        DedupKey::new(&target.specialty, &target.origin, destination)
    }
}

/// One point of a pass's cross-product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub specialty: String,
    pub origin: String,
    pub destination_country: String,
    /// Empty for national destinations.
    pub destination_province: String,
}

impl Target {
    pub fn new(specialty: &str, origin: &str, country: &str, province: &str) -> Self {
        Self {
            specialty: specialty.to_string(),
            origin: origin.to_string(),
            destination_country: country.to_string(),
            destination_province: province.to_string(),
        }
    }

    /// Province if present, otherwise country.
    pub fn destination(&self) -> &str {
        if self.destination_province.is_empty() {
            &self.destination_country
        } else {
            &self.destination_province
        }
    }
}

// ── Qualification tables ─────────────────────────────────────────────────────

/// specialty → origin → credentials recognised for that pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualificationTable {
    entries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl QualificationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the credentials for a (specialty, origin) pair, replacing
    /// any earlier entry.
    pub fn insert<I, S>(&mut self, specialty: &str, origin: &str, qualifications: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(specialty.to_string())
            .or_default()
            .insert(
                origin.to_string(),
                qualifications.into_iter().map(Into::into).collect(),
            );
    }

    /// Remove the entry for a (specialty, origin) pair.
    #[cfg(test)]
    pub fn remove(&mut self, specialty: &str, origin: &str) -> Option<Vec<String>> {
        self.entries.get_mut(specialty)?.remove(origin)
    }

    /// Credentials for a pair; a missing or empty entry is an error.
    pub fn lookup(&self, pass: &'static str, specialty: &str, origin: &str) -> PackResult<&[String]> {
        match self.entries.get(specialty).and_then(|m| m.get(origin)) {
            Some(quals) if !quals.is_empty() => Ok(quals),
            _ => Err(PackError::MissingQualification {
                pass,
                specialty: specialty.to_string(),
                origin: origin.to_string(),
            }),
        }
    }
}

// ── Passes ───────────────────────────────────────────────────────────────────

/// What one pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub name: &'static str,
    pub scope: KeyScope,
    /// Routes generated.
    pub added: usize,
    /// Targets whose key already existed.
    pub skipped: usize,
}

/// A templated expansion over a fixed cross-product.
///
/// Implementors describe the cross-product and how to fill one point of
/// it; [`extend`](Self::extend) does the dedup and id bookkeeping.
pub trait SynthesisPass {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    fn scope(&self) -> KeyScope;

    fn min_experience_months(&self) -> u32;

    /// Every point of the cross-product, in declared order.
    fn targets(&self) -> Vec<Target>;

    /// Credentials a generated route for `target` requires.
    fn required_qualifications(&self, target: &Target) -> PackResult<Vec<String>>;

    /// Steps and sources for `target`, or `None` when the destination has
    /// no template.
    fn template(&self, target: &Target, qualifications: &[String]) -> Option<RouteTemplate>;

    /// Append a route for every target whose key is absent.
    fn extend(&self, routes: Vec<Route>, ids: &mut IdAllocator) -> PackResult<Vec<Route>> {
        self.run(routes, ids).map(|(routes, _)| routes)
    }

    /// [`extend`](Self::extend), also reporting what was added and skipped.
    fn run(&self, mut routes: Vec<Route>, ids: &mut IdAllocator) -> PackResult<(Vec<Route>, PassReport)> {
        let scope = self.scope();
        let mut existing: BTreeSet<DedupKey> = routes.iter().map(|r| scope.key(r)).collect();
        let mut report = PassReport {
            name: self.name(),
            scope,
            added: 0,
            skipped: 0,
        };

        for target in self.targets() {
            let key = scope.target_key(&target);
            if existing.contains(&key) {
                report.skipped += 1;
                continue;
            }
            let required_qualifications = self.required_qualifications(&target)?;
            let template = self.template(&target, &required_qualifications).ok_or_else(|| {
                PackError::MissingTemplate {
                    pass: self.name(),
                    destination: target.destination().to_string(),
                }
            })?;
            routes.push(Route {
                id: ids.allocate()?,
                incoming_country: target.origin,
                destination_country: target.destination_country,
                destination_province: target.destination_province,
                specialty: target.specialty,
                required_qualifications,
                min_experience_months: self.min_experience_months(),
                steps: template.steps,
                sources: template.sources,
                last_verified: synthesis_verified_on(),
            });
            existing.insert(key);
            report.added += 1;
        }

        tracing::debug!(
            pass = report.name,
            added = report.added,
            skipped = report.skipped,
            next_id = ?ids.peek(),
            "synthesis pass complete"
        );
        Ok((routes, report))
    }
}

/// Output of the full synthesis run.
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub routes: Vec<Route>,
    pub reports: Vec<PassReport>,
}

/// Run the standard passes over `seed` in their fixed order: specialist,
/// family medicine, Gulf.
pub fn synthesize(seed: Vec<Route>) -> PackResult<Synthesized> {
    let specialist = SpecialistPass::standard();
    let family_medicine = FamilyMedicinePass::standard();
    let gulf = GulfPass::standard();
    synthesize_with(seed, &[&specialist as &dyn SynthesisPass, &family_medicine, &gulf])
}

/// Run `passes` in order over `seed`, threading one id allocator through
/// all of them.
pub fn synthesize_with(seed: Vec<Route>, passes: &[&dyn SynthesisPass]) -> PackResult<Synthesized> {
    let mut ids = IdAllocator::after(&seed);
    let mut routes = seed;
    let mut reports = Vec::with_capacity(passes.len());
    for pass in passes {
        let (next, report) = pass.run(routes, &mut ids)?;
        routes = next;
        reports.push(report);
    }
    Ok(Synthesized { routes, reports })
}
