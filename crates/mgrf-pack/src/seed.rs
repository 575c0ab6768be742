//! Hand-authored seed routes, embedded at compile time.

use mgrf_core::Route;

use crate::error::PackResult;
use crate::parser::parse_yaml_str;
use crate::validation::decode_records;

const SEED_YAML: &str = include_str!("../data/seed_routes.yaml");

/// Decode and validate the embedded seed routes.
pub fn seed_routes() -> PackResult<Vec<Route>> {
    decode_records(parse_yaml_str(SEED_YAML)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mgrf_core::RouteId;

    #[test]
    fn seed_decodes_cleanly() {
        let routes = seed_routes().unwrap();
        assert_eq!(routes.len(), 108);
        assert_eq!(routes.iter().map(|r| r.id).max(), Some(RouteId(108)));
    }

    #[test]
    fn seed_contains_reference_routes() {
        let routes = seed_routes().unwrap();
        let uk_alberta = routes.iter().find(|r| r.id == RouteId(1)).unwrap();
        assert_eq!(uk_alberta.incoming_country, "United Kingdom");
        assert_eq!(uk_alberta.destination_province, "Alberta");
        assert_eq!(uk_alberta.required_qualifications, vec!["MRCGP", "CCT"]);
        assert_eq!(uk_alberta.min_experience_months, 12);

        let sa_bc = routes.iter().find(|r| r.id == RouteId(13)).unwrap();
        assert_eq!(sa_bc.incoming_country, "South Africa");
        assert_eq!(sa_bc.destination_province, "British Columbia");
        assert_eq!(sa_bc.required_qualifications, vec!["FCFP(SA)"]);
    }
}
