//! # Catalog vocabulary
//!
//! Lists the values a lookup can use, derived from the loaded catalog.
//!
//! ```bash
//! mgrf options                       # countries and specialties
//! mgrf options --field specialty     # one field only
//! mgrf provinces --country Canada
//! mgrf qualifications --from "South Africa" --specialty "Family Medicine"
//! ```

use anyhow::Result;
use clap::Args;

use mgrf_pack::RouteField;

use crate::AppContext;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Only list this field (incomingCountry, destinationCountry,
    /// destinationProvince, specialty).
    #[arg(long)]
    pub field: Option<RouteField>,
}

#[derive(Args, Debug)]
pub struct ProvincesArgs {
    /// Only list provinces of this destination country.
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Args, Debug)]
pub struct QualificationsArgs {
    /// Country that issued the applicant's credentials.
    #[arg(long = "from")]
    pub from: String,

    /// Specialty to be licensed for.
    #[arg(long)]
    pub specialty: String,
}

const DEFAULT_FIELDS: [RouteField; 3] = [
    RouteField::IncomingCountry,
    RouteField::DestinationCountry,
    RouteField::Specialty,
];

pub fn run_options(args: &OptionsArgs, ctx: &AppContext) -> Result<u8> {
    let fields: Vec<RouteField> = match args.field {
        Some(field) => vec![field],
        None => DEFAULT_FIELDS.to_vec(),
    };
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let values = ctx.catalog.unique_values(*field);
        println!("{field} ({}):", values.len());
        for value in values {
            println!("  {value}");
        }
    }
    Ok(0)
}

pub fn run_provinces(args: &ProvincesArgs, ctx: &AppContext) -> Result<u8> {
    let grouped = ctx.catalog.provinces_by_destination();
    match &args.country {
        Some(country) => {
            // Nationally licensing countries list nothing.
            for province in grouped.get(country.trim()).into_iter().flatten() {
                println!("{province}");
            }
        }
        None => {
            for (country, provinces) in &grouped {
                println!("{country}:");
                for province in provinces {
                    println!("  {province}");
                }
            }
        }
    }
    Ok(0)
}

/// Qualifications to offer for an origin and specialty. Falls back to every
/// label in the catalog when the pair has no routes.
pub fn qualification_choices(ctx: &AppContext, from: &str, specialty: &str) -> Vec<String> {
    let specific = ctx.catalog.qualifications_for(from, specialty);
    if specific.is_empty() {
        ctx.catalog.all_qualifications()
    } else {
        specific
    }
}

pub fn run_qualifications(args: &QualificationsArgs, ctx: &AppContext) -> Result<u8> {
    for label in qualification_choices(ctx, args.from.trim(), args.specialty.trim()) {
        println!("{label}");
    }
    Ok(0)
}
