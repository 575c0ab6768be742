//! # Error Types
//!
//! Structural defects found in a single route record. Every variant carries
//! the route id so a rejected replacement dataset can be traced back to the
//! offending entry.

use thiserror::Error;

use crate::route::RouteId;

/// A data-model invariant violated by a route record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A required text field is empty or whitespace.
    #[error("route {id}: field `{field}` must not be empty")]
    EmptyField {
        /// Route the defect was found in.
        id: RouteId,
        /// camelCase name of the field, as it appears on the wire.
        field: &'static str,
    },

    /// The route requires no qualification at all.
    #[error("route {id}: requiredQualifications must list at least one qualification")]
    NoQualifications {
        /// Route the defect was found in.
        id: RouteId,
    },

    /// A qualification label in the required list is blank.
    #[error("route {id}: requiredQualifications[{index}] is blank")]
    BlankQualification {
        /// Route the defect was found in.
        id: RouteId,
        /// Position within `requiredQualifications`.
        index: usize,
    },

    /// The route has no procedural steps.
    #[error("route {id}: steps must contain at least one step")]
    NoSteps {
        /// Route the defect was found in.
        id: RouteId,
    },

    /// A step has no title.
    #[error("route {id}: steps[{index}] has an empty title")]
    UntitledStep {
        /// Route the defect was found in.
        id: RouteId,
        /// Position within `steps`.
        index: usize,
    },
}
