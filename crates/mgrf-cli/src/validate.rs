//! # Validate: Check the loaded catalog.
//!
//! Runs the catalog audit (unique ids, non-empty qualification lists and
//! steps, no duplicate synthesized keys) and prints per-pass counts and the
//! catalog digest.
//!
//! ```bash
//! mgrf validate
//! mgrf --config mgrf.yaml validate --json
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mgrf_pack::{audit, CatalogStats};

use crate::AppContext;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Emit the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    is_valid: bool,
    digest: &'a str,
    stats: CatalogStats,
    errors: &'a [String],
    warnings: &'a [String],
}

/// Execute the validate subcommand. Exits 1 when the audit finds errors.
pub fn run_validate(args: &ValidateArgs, ctx: &AppContext) -> Result<u8> {
    let result = audit(&ctx.catalog);
    let stats = ctx.catalog.stats();

    if args.json {
        let report = ValidateReport {
            is_valid: result.is_valid,
            digest: ctx.catalog.digest(),
            stats,
            errors: &result.errors,
            warnings: &result.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Routes:  {} ({} seed)", stats.total, stats.seed);
        for (pass, added) in &stats.synthesized {
            println!("  {pass:<16} +{added}");
        }
        println!("Digest:  {}", ctx.catalog.digest());
        for warning in &result.warnings {
            println!("WARN  {warning}");
        }
        for error in &result.errors {
            println!("FAIL  {error}");
        }
        if result.is_valid {
            println!("OK: catalog is valid");
        }
    }

    Ok(if result.is_valid { 0 } else { 1 })
}
