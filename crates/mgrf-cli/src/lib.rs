//! # mgrf-cli: Command-Line Route Finder
//!
//! Provides the `mgrf` command-line interface over the route catalog and
//! matcher.
//!
//! ## Subcommands
//!
//! - `mgrf find`: Eligible routes for an applicant, with step checklists.
//! - `mgrf options` / `provinces` / `qualifications`: Catalog vocabulary.
//! - `mgrf validate`: Catalog invariants, stats, and digest.
//! - `mgrf update`: Validated replacement of the route dataset.
//! - `mgrf analytics`: Most frequent lookups.
//!
//! ```bash
//! mgrf find --from "United Kingdom" --to Canada --province Alberta \
//!     --specialty "Family Medicine" --qualification MRCGP --qualification CCT --years 1
//! mgrf update --file routes-2025-09.json
//! ```

pub mod analytics;
pub mod config;
pub mod find;
pub mod options;
pub mod update;
pub mod usage;
pub mod validate;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mgrf_match::QualificationSynonyms;
use mgrf_pack::RouteCatalog;

use crate::config::CliConfig;

/// Everything a subcommand needs: the catalog, the synonym table, and where
/// state lives.
#[derive(Debug)]
pub struct AppContext {
    pub catalog: RouteCatalog,
    pub synonyms: QualificationSynonyms,
    pub catalog_store: PathBuf,
    pub usage_log: PathBuf,
}

impl AppContext {
    /// Build the context for `config`, resolving relative paths against
    /// `base_dir`.
    ///
    /// The catalog comes from the configured dataset if any, else from a
    /// previously persisted update, else from the embedded seed.
    pub fn load(config: &CliConfig, base_dir: &Path) -> Result<Self> {
        let catalog_store = config.catalog_store_path(base_dir);
        let catalog = match &config.catalog {
            Some(path) => {
                let path = resolve_path(path, base_dir);
                RouteCatalog::from_file(&path)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?
            }
            None if catalog_store.is_file() => match RouteCatalog::from_file(&catalog_store) {
                Ok(catalog) => catalog,
                Err(e) => {
                    // A damaged store must not block `update` from replacing it.
                    tracing::warn!(
                        path = %catalog_store.display(),
                        error = %e,
                        "stored catalog unreadable; using built-in catalog"
                    );
                    RouteCatalog::builtin().context("failed to build built-in catalog")?
                }
            },
            None => RouteCatalog::builtin().context("failed to build built-in catalog")?,
        };

        let mut synonyms = QualificationSynonyms::builtin();
        for group in &config.synonyms {
            synonyms.declare_group(group);
        }

        tracing::debug!(
            routes = catalog.len(),
            digest = %catalog.digest(),
            synonym_labels = synonyms.len(),
            "context loaded"
        );

        Ok(Self {
            catalog,
            synonyms,
            catalog_store,
            usage_log: config.usage_log_path(base_dir),
        })
    }
}

/// Replace `path` with `contents` atomically: write a temp file in the same
/// directory, sync it, then rename it over `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write temp file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

/// Absolute paths as-is; relative ones joined onto `base_dir`.
pub fn resolve_path(path: &Path, base_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
