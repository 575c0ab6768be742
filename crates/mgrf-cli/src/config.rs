//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! catalog: data/routes-2025-09.json      # dataset loaded at startup
//! catalog_store: .mgrf/catalog.json      # where `update` persists
//! usage_log: .mgrf/usage.json            # usage counters
//! synonyms:
//!   - [CCFP, "CFPC Certification"]
//! ```
//!
//! Every key is optional. Unknown keys are rejected. Relative paths resolve
//! against the directory the CLI runs in.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::resolve_path;

/// Directory for state the CLI writes when no path is configured.
pub const STATE_DIR: &str = ".mgrf";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Replacement dataset (JSON or YAML) used instead of the embedded seed.
    pub catalog: Option<PathBuf>,
    /// Where an accepted `update` is persisted.
    pub catalog_store: Option<PathBuf>,
    /// Usage counter file.
    pub usage_log: Option<PathBuf>,
    /// Extra qualification equivalence groups.
    pub synonyms: Vec<Vec<String>>,
}

impl CliConfig {
    /// Load from `path`, or defaults when no path was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        let problems = config.validate();
        if !problems.is_empty() {
            anyhow::bail!("invalid config {}: {}", path.display(), problems.join("; "));
        }
        Ok(config)
    }

    /// Structural problems a YAML decode cannot catch.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        for (i, group) in self.synonyms.iter().enumerate() {
            if group.len() < 2 {
                problems.push(format!("synonyms[{i}]: a group needs at least two labels"));
            }
            if group.iter().any(|label| label.trim().is_empty()) {
                problems.push(format!("synonyms[{i}]: blank label"));
            }
        }
        problems
    }

    pub fn catalog_store_path(&self, base: &Path) -> PathBuf {
        resolve(base, self.catalog_store.as_deref(), "catalog.json")
    }

    pub fn usage_log_path(&self, base: &Path) -> PathBuf {
        resolve(base, self.usage_log.as_deref(), "usage.json")
    }
}

fn resolve(base: &Path, configured: Option<&Path>, default_name: &str) -> PathBuf {
    match configured {
        Some(p) => resolve_path(p, base),
        None => base.join(STATE_DIR).join(default_name),
    }
}
