//! # Usage Counters
//!
//! One counter per executed lookup, keyed `"{origin} | {province} | {specialty}"`
//! and stored as a flat JSON object. A missing file reads as no usage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mgrf_core::Query;

use crate::write_atomic;

#[derive(Debug, Clone)]
pub struct UsageLog {
    path: PathBuf,
    counts: BTreeMap<String, u64>,
}

impl UsageLog {
    pub fn load(path: &Path) -> Result<Self> {
        let counts = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)
                .with_context(|| format!("failed to parse usage log {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read usage log {}", path.display()))
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            counts,
        })
    }

    /// A log at `path` with no counts, without reading what is there.
    pub fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            counts: BTreeMap::new(),
        }
    }

    pub fn key(query: &Query) -> String {
        format!(
            "{} | {} | {}",
            query.incoming_country, query.destination_province, query.specialty
        )
    }

    pub fn record(&mut self, query: &Query) -> u64 {
        let count = self.counts.entry(Self::key(query)).or_insert(0);
        *count += 1;
        *count
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Up to `n` entries, highest count first; ties in key order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> =
            self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.counts)?;
        write_atomic(&self.path, json.as_bytes())
            .with_context(|| format!("failed to write usage log {}", self.path.display()))
    }
}
