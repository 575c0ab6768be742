//! # mgrf-pack: Route Catalog and Synthesis
//!
//! Builds the route catalog the matcher reads:
//!
//! - **Seed** ([`seed`]): hand-authored routes, embedded as YAML and decoded
//!   through the same validated path as any replacement dataset.
//!
//! - **Synthesis** ([`synthesis`]): three passes that generate the regular
//!   cross-products of specialty, origin and destination the seed leaves
//!   out, using the step sequences in [`templates`].
//!
//! - **Catalog** ([`catalog`]): the ordered result, its read queries, digest,
//!   and all-or-nothing bulk replacement.
//!
//! ## Data Format
//!
//! Datasets are JSON arrays or YAML sequences of route records with
//! camelCase keys. [`parser`] loads either into a generic value and
//! [`validation`] decodes it, rejecting the whole dataset on any defect.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod seed;
pub mod synthesis;
pub mod templates;
pub mod validation;

pub use catalog::{CatalogStats, ReplaceSummary, RouteCatalog, RouteField};
pub use error::{PackError, PackResult};
pub use synthesis::{
    synthesize, synthesize_with, FamilyMedicinePass, GulfPass, IdAllocator, KeyScope, PassReport,
    QualificationTable, SpecialistPass, SynthesisPass, Synthesized,
};
pub use validation::{audit, CatalogValidationResult};
