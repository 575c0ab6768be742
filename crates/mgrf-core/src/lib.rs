//! # mgrf-core: Foundational Types for the Route Finder
//!
//! Defines the record types every other crate in the workspace exchanges:
//! licensing [`Route`]s with their ordered [`Step`]s and citation
//! [`Source`]s, and the per-lookup [`Query`]. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Records are immutable once built.** The catalog hands out shared
//!    references; nothing downstream mutates a route.
//!
//! 2. **One wire shape.** Routes (de)serialize with camelCase keys so a
//!    replacement dataset exported by the browser tool decodes as-is.
//!
//! 3. **Validation is explicit.** Decoding only checks that fields exist and
//!    have the right type. [`Route::validate`] checks the data-model
//!    invariants (non-empty qualification list, at least one step, …) and is
//!    run at every catalog boundary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mgrf-*` crates.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod query;
pub mod route;

pub use error::RouteError;
pub use query::{experience_months_from_years, Query};
pub use route::{DedupKey, Route, RouteId, Source, Step};
