//! # Update: Replace the route dataset.
//!
//! ```bash
//! mgrf update --file routes-2025-09.json
//! mgrf update --file routes.yaml
//! ```
//!
//! The file must be a list of route records. It is decoded, validated and
//! re-synthesized in full before anything changes; one bad record rejects
//! the whole file and the current catalog stays in place. An accepted
//! dataset is written to the catalog store so later runs load it, and the
//! usage counters are reset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use mgrf_core::Route;
use mgrf_pack::PackError;

use crate::usage::UsageLog;
use crate::{resolve_path, write_atomic, AppContext};

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Route dataset to load (JSON or YAML, by extension).
    #[arg(long)]
    pub file: PathBuf,
}

/// Execute the update subcommand.
pub fn run_update(args: &UpdateArgs, ctx: &mut AppContext, base_dir: &Path) -> Result<u8> {
    let path = resolve_path(&args.file, base_dir);
    let summary = match ctx.catalog.replace_from_file(&path) {
        Ok(summary) => summary,
        Err(PackError::InvalidCatalog { errors }) => {
            eprintln!("Rejected {}: {} problem(s)", path.display(), errors.len());
            for error in &errors {
                eprintln!("  {error}");
            }
            return Ok(1);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to update from {}", path.display()))
        }
    };

    // Counters first: a failure here leaves the stored catalog as it was.
    UsageLog::empty(&ctx.usage_log).save()?;
    persist_seed(ctx.catalog.seed(), &ctx.catalog_store)?;

    println!("Previous digest: {}", summary.previous_digest);
    println!("New digest:      {}", summary.digest);
    println!("Routes:          {} -> {}", summary.previous_len, summary.len);
    if !summary.changed() {
        println!("Catalog content unchanged.");
    }
    Ok(0)
}

/// Write the seed routes to `path` as a JSON array, replacing any previous
/// store in one rename.
pub fn persist_seed(seed: &[Route], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(seed)?;
    write_atomic(path, json.as_bytes())
        .with_context(|| format!("failed to write catalog store {}", path.display()))?;
    tracing::info!(path = %path.display(), routes = seed.len(), "catalog stored");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use mgrf_core::Query;

    fn setup() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::load(&CliConfig::default(), dir.path()).unwrap();
        (dir, ctx)
    }

    #[test]
    fn accepted_update_persists_and_clears_usage() {
        let (dir, mut ctx) = setup();
        let mut usage = UsageLog::load(&ctx.usage_log).unwrap();
        usage.record(&Query::new("Ireland", "Canada", "Ontario", "Psychiatry"));
        usage.save().unwrap();

        let seed: Vec<Route> = ctx.catalog.seed()[..20].to_vec();
        std::fs::write(dir.path().join("routes.json"), serde_json::to_string(&seed).unwrap())
            .unwrap();
        let args = UpdateArgs {
            file: PathBuf::from("routes.json"),
        };
        assert_eq!(run_update(&args, &mut ctx, dir.path()).unwrap(), 0);
        assert_eq!(ctx.catalog.seed_len(), 20);
        assert!(UsageLog::load(&ctx.usage_log).unwrap().is_empty());

        let reloaded = AppContext::load(&CliConfig::default(), dir.path()).unwrap();
        assert_eq!(reloaded.catalog.digest(), ctx.catalog.digest());
    }

    #[test]
    fn rejected_update_changes_nothing() {
        let (dir, mut ctx) = setup();
        let digest = ctx.catalog.digest().to_string();
        std::fs::write(dir.path().join("routes.json"), r#"[{"id": 1}]"#).unwrap();
        let args = UpdateArgs {
            file: PathBuf::from("routes.json"),
        };
        assert_eq!(run_update(&args, &mut ctx, dir.path()).unwrap(), 1);
        assert_eq!(ctx.catalog.digest(), digest);
        assert!(!ctx.catalog_store.exists());
    }

    #[test]
    fn corrupt_usage_log_is_reset_on_update() {
        let (dir, mut ctx) = setup();
        std::fs::create_dir_all(ctx.usage_log.parent().unwrap()).unwrap();
        std::fs::write(&ctx.usage_log, "not json").unwrap();

        let seed: Vec<Route> = ctx.catalog.seed()[..20].to_vec();
        std::fs::write(dir.path().join("routes.json"), serde_json::to_string(&seed).unwrap())
            .unwrap();
        let args = UpdateArgs {
            file: PathBuf::from("routes.json"),
        };
        assert_eq!(run_update(&args, &mut ctx, dir.path()).unwrap(), 0);
        assert!(UsageLog::load(&ctx.usage_log).unwrap().is_empty());

        let restarted = AppContext::load(&CliConfig::default(), dir.path()).unwrap();
        assert_eq!(restarted.catalog.seed_len(), 20);
    }

    #[test]
    fn update_replaces_damaged_store() {
        let (dir, _) = setup();
        let store = dir.path().join(".mgrf").join("catalog.json");
        std::fs::create_dir_all(store.parent().unwrap()).unwrap();
        std::fs::write(&store, "[{\"id\": 3, \"incoming").unwrap();

        let mut ctx = AppContext::load(&CliConfig::default(), dir.path()).unwrap();
        let seed: Vec<Route> = ctx.catalog.seed()[..10].to_vec();
        std::fs::write(dir.path().join("routes.json"), serde_json::to_string(&seed).unwrap())
            .unwrap();
        let args = UpdateArgs {
            file: PathBuf::from("routes.json"),
        };
        assert_eq!(run_update(&args, &mut ctx, dir.path()).unwrap(), 0);

        let restarted = AppContext::load(&CliConfig::default(), dir.path()).unwrap();
        assert_eq!(restarted.catalog.seed_len(), 10);
    }

    #[test]
    fn missing_file_is_an_error() {
        let (dir, mut ctx) = setup();
        let args = UpdateArgs {
            file: PathBuf::from("absent.json"),
        };
        assert!(run_update(&args, &mut ctx, dir.path()).is_err());
    }
}
