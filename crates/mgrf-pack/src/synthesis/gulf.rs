//! Gulf routes (UAE, Qatar, Saudi Arabia, Oman) for family physicians and
//! general specialists. Keys are scoped by destination country since these
//! authorities license nationally.

use super::{KeyScope, QualificationTable, SynthesisPass, Target};
use crate::error::PackResult;
use crate::templates::gulf::gulf_template;
use crate::templates::RouteTemplate;

const NAME: &str = "gulf";

const FAMILY_MEDICINE: &str = "Family Medicine";
const SPECIALIST: &str = "Specialist (General)";

const DESTINATIONS: [&str; 4] = ["United Arab Emirates", "Qatar", "Saudi Arabia", "Oman"];

/// origin, family medicine credential, specialist credential
const CREDENTIALS: [(&str, &str, &str); 5] = [
    ("United Kingdom", "MRCGP", "CCT (Specialty)"),
    ("Canada", "CCFP", "RCPSC (Specialty)"),
    ("United States", "ABFM", "Board Certification (Specialty)"),
    ("Australia", "FRACGP", "FRACP (Specialty)"),
    ("South Africa", "FCFP(SA)", "FCS(SA) (Specialty)"),
];

/// Origins × destinations × {Family Medicine, Specialist (General)}, 36
/// months minimum experience. Each route requires only the first credential
/// listed for its (specialty, origin).
#[derive(Debug, Clone)]
pub struct GulfPass {
    origins: Vec<String>,
    destinations: Vec<String>,
    table: QualificationTable,
}

impl GulfPass {
    pub fn standard() -> Self {
        let mut table = QualificationTable::new();
        for (origin, gp, specialist) in CREDENTIALS {
            table.insert(FAMILY_MEDICINE, origin, [gp]);
            table.insert(SPECIALIST, origin, [specialist]);
        }
        Self {
            origins: CREDENTIALS.iter().map(|(o, _, _)| o.to_string()).collect(),
            destinations: DESTINATIONS.iter().map(|s| s.to_string()).collect(),
            table,
        }
    }

    pub fn with_table(mut self, table: QualificationTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations = destinations.into_iter().map(Into::into).collect();
        self
    }
}

impl SynthesisPass for GulfPass {
    fn name(&self) -> &'static str {
        NAME
    }

    fn scope(&self) -> KeyScope {
        KeyScope::Country
    }

    fn min_experience_months(&self) -> u32 {
        36
    }

    fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        for origin in &self.origins {
            for destination in &self.destinations {
                for specialty in [FAMILY_MEDICINE, SPECIALIST] {
                    targets.push(Target::new(specialty, origin, destination, ""));
                }
            }
        }
        targets
    }

    fn required_qualifications(&self, target: &Target) -> PackResult<Vec<String>> {
        let credentials = self.table.lookup(NAME, &target.specialty, &target.origin)?;
        Ok(credentials[..1].to_vec())
    }

    fn template(&self, target: &Target, _qualifications: &[String]) -> Option<RouteTemplate> {
        gulf_template(&target.destination_country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackError;
    use crate::synthesis::IdAllocator;

    #[test]
    fn targets_alternate_family_and_specialist() {
        let targets = GulfPass::standard().targets();
        assert_eq!(targets.len(), 40);
        assert_eq!(
            targets[0],
            Target::new("Family Medicine", "United Kingdom", "United Arab Emirates", "")
        );
        assert_eq!(targets[1].specialty, "Specialist (General)");
        assert_eq!(targets[2].destination_country, "Qatar");
        assert_eq!(targets[8].origin, "Canada");
    }

    #[test]
    fn only_first_credential_is_required() {
        let mut table = QualificationTable::new();
        for (origin, gp, specialist) in CREDENTIALS {
            table.insert(FAMILY_MEDICINE, origin, [gp, "Extra Credential"]);
            table.insert(SPECIALIST, origin, [specialist]);
        }
        let routes = GulfPass::standard()
            .with_table(table)
            .extend(Vec::new(), &mut IdAllocator::starting_at(1))
            .unwrap();
        assert_eq!(routes[0].required_qualifications, vec!["MRCGP"]);
    }

    #[test]
    fn generated_routes_are_national() {
        let routes = GulfPass::standard()
            .extend(Vec::new(), &mut IdAllocator::starting_at(1))
            .unwrap();
        assert!(routes.iter().all(|r| r.destination_province.is_empty()));
        assert!(routes.iter().all(|r| r.min_experience_months == 36));
        let saudi = routes
            .iter()
            .find(|r| r.destination_country == "Saudi Arabia")
            .unwrap();
        assert_eq!(saudi.steps.len(), 5);
        assert_eq!(saudi.sources.len(), 2);
    }

    #[test]
    fn destination_without_template_fails() {
        let err = GulfPass::standard()
            .with_destinations(["Kuwait"])
            .extend(Vec::new(), &mut IdAllocator::starting_at(1))
            .unwrap_err();
        match err {
            PackError::MissingTemplate { pass, destination } => {
                assert_eq!(pass, "gulf");
                assert_eq!(destination, "Kuwait");
            }
            other => panic!("expected MissingTemplate, got {other:?}"),
        }
    }
}
