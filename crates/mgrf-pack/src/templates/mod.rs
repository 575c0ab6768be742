//! # Jurisdiction Step Templates
//!
//! Step sequences and citations used by the synthesis passes, one module
//! per region:
//!
//! | Module | Authorities | Used by |
//! |--------|-------------|---------|
//! | [`canada`] | CPSA, CPSBC, CPSO, CPSNS, CPSS, CPSM | specialist, family medicine |
//! | [`gulf`] | MOHAP, QCHP, SCFHS, Oman licensing exam | Gulf |
//!
//! A template lookup returns `None` for a jurisdiction it has no procedure
//! for; the calling pass turns that into
//! [`PackError::MissingTemplate`](crate::error::PackError::MissingTemplate).

pub mod canada;
pub mod gulf;

use mgrf_core::{Source, Step};

/// Steps and citations for one generated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    pub steps: Vec<Step>,
    pub sources: Vec<Source>,
}

pub(crate) fn step(
    title: impl Into<String>,
    description: impl Into<String>,
    docs: Vec<String>,
    fee: &str,
    time_weeks: &str,
) -> Step {
    Step {
        title: title.into(),
        description: description.into(),
        docs,
        fee: fee.to_string(),
        time_weeks: time_weeks.to_string(),
    }
}

pub(crate) fn docs(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn source(text: &str, url: &str) -> Source {
    Source {
        text: text.to_string(),
        url: url.to_string(),
    }
}
