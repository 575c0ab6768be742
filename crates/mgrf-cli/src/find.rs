//! # Find: Eligible routes for an applicant.
//!
//! ```bash
//! mgrf find --from "South Africa" --to Canada --province "British Columbia" \
//!     --specialty "Family Medicine" --qualification FCFP --years 2
//!
//! # Every match, as JSON:
//! mgrf find --from "United Kingdom" --to Qatar --specialty "Family Medicine" \
//!     --qualification MRCGP --years 3 --all --json
//! ```
//!
//! Prints the step checklist of the first matching route (all of them with
//! `--all`). When nothing matches, lists the candidate routes for the same
//! origin, destination and specialty together with what the applicant lacks.
//! Every executed lookup increments the usage counter for its
//! origin, province and specialty.

use std::fmt::{self, Write as _};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use mgrf_core::{experience_months_from_years, Query, Route};
use mgrf_match::{Assessment, Eligibility, QualificationSynonyms, RouteMatcher};

use crate::usage::UsageLog;
use crate::AppContext;

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Country that issued the applicant's credentials.
    #[arg(long = "from")]
    pub from: String,

    /// Destination country.
    #[arg(long = "to")]
    pub to: String,

    /// Destination province, for countries that license provincially.
    #[arg(long, default_value = "")]
    pub province: String,

    /// Specialty to be licensed for.
    #[arg(long)]
    pub specialty: String,

    /// A held qualification, exactly as issued. Repeat for each.
    #[arg(long = "qualification", short = 'q')]
    pub qualifications: Vec<String>,

    /// Years of professional experience (fractions allowed).
    #[arg(long)]
    pub years: Option<String>,

    /// Show every matching route instead of the first.
    #[arg(long)]
    pub all: bool,

    /// Emit JSON instead of a checklist.
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    pub fn query(&self) -> Query {
        let months = self
            .years
            .as_deref()
            .map(experience_months_from_years)
            .unwrap_or(0);
        Query::new(
            self.from.trim(),
            self.to.trim(),
            self.province.trim(),
            self.specialty.trim(),
        )
        .with_qualifications(
            self.qualifications
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty()),
        )
        .with_experience_months(months)
    }
}

#[derive(Serialize)]
struct FindReport<'a> {
    query: &'a Query,
    routes: Vec<&'a Route>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    assessments: Vec<Assessment<'a>>,
}

/// Execute the find subcommand.
pub fn run_find(args: &FindArgs, ctx: &AppContext) -> Result<u8> {
    let query = args.query();
    let missing = query.missing_fields();
    if !missing.is_empty() {
        let flags: Vec<&str> = missing.iter().map(|f| flag_for(f)).collect();
        eprintln!("Please fill in all required fields: {}", flags.join(", "));
        return Ok(2);
    }

    let matcher = RouteMatcher::new(ctx.catalog.routes(), &ctx.synonyms);
    let found = matcher.find(&query);
    let assessments = if found.is_empty() {
        matcher.assess(&query)
    } else {
        Vec::new()
    };

    record_usage(ctx, &query);

    if args.json {
        let shown = if args.all || found.is_empty() {
            found
        } else {
            found[..1].to_vec()
        };
        let report = FindReport {
            query: &query,
            routes: shown,
            assessments,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    if found.is_empty() {
        print!("{}", render_no_match(&query, &assessments, &ctx.synonyms)?);
        return Ok(0);
    }

    let shown = if args.all { found.len() } else { 1 };
    for (i, route) in found.iter().take(shown).enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render_checklist(route)?);
    }
    if found.len() > shown {
        println!();
        println!(
            "{} more matching route(s); use --all to list them.",
            found.len() - shown
        );
    }
    Ok(0)
}

fn flag_for(field: &str) -> &'static str {
    match field {
        "incomingCountry" => "--from",
        "destinationCountry" => "--to",
        _ => "--specialty",
    }
}

fn record_usage(ctx: &AppContext, query: &Query) {
    let saved = UsageLog::load(&ctx.usage_log).and_then(|mut log| {
        log.record(query);
        log.save()
    });
    if let Err(e) = saved {
        tracing::warn!(path = %ctx.usage_log.display(), "usage not recorded: {e:#}");
    }
}

/// The step checklist for one route.
pub fn render_checklist(route: &Route) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "Route {}: {} → {} ({})",
        route.id,
        route.incoming_country,
        route.destination_label(),
        route.specialty
    )?;
    writeln!(
        out,
        "Requires: {}; at least {} months' experience",
        route.required_qualifications.join(", "),
        route.min_experience_months
    )?;
    for (n, step) in route.steps.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {}", n + 1, step.title)?;
        if !step.description.is_empty() {
            writeln!(out, "   {}", step.description)?;
        }
        if !step.docs.is_empty() {
            writeln!(out, "   Documents: {}", step.docs.join(", "))?;
        }
        writeln!(out, "   Fee: {} | Timeline: {} weeks", step.fee, step.time_weeks)?;
    }
    if !route.sources.is_empty() {
        writeln!(out)?;
        writeln!(out, "Sources:")?;
        for source in &route.sources {
            writeln!(out, "  - {} ({})", source.text, source.url)?;
        }
    }
    writeln!(out, "Last verified: {}", route.last_verified)?;
    Ok(out)
}

/// Explanation for a lookup with no eligible route.
pub fn render_no_match(
    query: &Query,
    assessments: &[Assessment<'_>],
    synonyms: &QualificationSynonyms,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    if assessments.is_empty() {
        let destination = if query.destination_province.is_empty() {
            query.destination_country.clone()
        } else {
            format!("{} – {}", query.destination_country, query.destination_province)
        };
        writeln!(
            out,
            "No routes found from {} to {} for {}.",
            query.incoming_country, destination, query.specialty
        )?;
        return Ok(out);
    }

    writeln!(
        out,
        "No matching routes found. {} route(s) exist for this pathway:",
        assessments.len()
    )?;
    for assessment in assessments {
        let route = assessment.route;
        write!(out, "  Route {} ({}):", route.id, route.destination_label())?;
        if let Eligibility::Ineligible {
            missing_qualifications,
            experience_shortfall_months,
        } = &assessment.eligibility
        {
            let mut reasons = Vec::new();
            if !missing_qualifications.is_empty() {
                let missing: Vec<String> = missing_qualifications
                    .iter()
                    .map(|q| with_alternatives(q, synonyms))
                    .collect();
                reasons.push(format!("missing {}", missing.join(", ")));
            }
            if *experience_shortfall_months > 0 {
                reasons.push(format!(
                    "needs {experience_shortfall_months} more months of experience"
                ));
            }
            write!(out, " {}", reasons.join("; "))?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

/// `label`, followed by the other labels accepted in its place.
fn with_alternatives(label: &str, synonyms: &QualificationSynonyms) -> String {
    let others: Vec<String> = synonyms
        .equivalents(label)
        .into_iter()
        .filter(|l| l != label)
        .collect();
    if others.is_empty() {
        label.to_string()
    } else {
        format!("{label} (or {})", others.join(", "))
    }
}
