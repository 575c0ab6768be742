//! # Analytics: Most frequent lookups.
//!
//! ```bash
//! mgrf analytics --top 5
//! ```

use anyhow::Result;
use clap::Args;

use crate::usage::UsageLog;
use crate::AppContext;

#[derive(Args, Debug)]
pub struct AnalyticsArgs {
    /// Number of entries to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
}

pub fn run_analytics(args: &AnalyticsArgs, ctx: &AppContext) -> Result<u8> {
    let usage = UsageLog::load(&ctx.usage_log)?;
    if usage.is_empty() {
        println!("No lookups recorded yet.");
        return Ok(0);
    }
    println!("{:>6}  Origin | Province | Specialty", "Count");
    for (key, count) in usage.top(args.top) {
        println!("{count:>6}  {key}");
    }
    Ok(0)
}
