//! Family medicine routes into the provinces with practice-ready family
//! assessment programs (Nova Scotia, Saskatchewan, Manitoba).

use super::{KeyScope, QualificationTable, SynthesisPass, Target};
use crate::error::PackResult;
use crate::templates::canada::family_medicine_template;
use crate::templates::RouteTemplate;

const NAME: &str = "family_medicine";
const SPECIALTY: &str = "Family Medicine";

const PROVINCES: [&str; 3] = ["Nova Scotia", "Saskatchewan", "Manitoba"];

const CREDENTIALS: [(&str, &[&str]); 9] = [
    ("United Kingdom", &["MRCGP", "CCT"]),
    ("Ireland", &["MICGP"]),
    ("United States", &["ABFM"]),
    ("Australia", &["FRACGP"]),
    ("South Africa", &["FCFP(SA)"]),
    ("New Zealand", &["New Zealand GP Fellowship"]),
    ("Singapore", &["Singapore Family Medicine Accreditation"]),
    ("Pakistan", &["FCPS Family Medicine"]),
    ("India", &["MD Family Medicine (India)"]),
];

/// Provinces × origins for `Family Medicine`, requiring the origin's full
/// credential list, 24 months minimum experience.
#[derive(Debug, Clone)]
pub struct FamilyMedicinePass {
    provinces: Vec<String>,
    origins: Vec<String>,
    table: QualificationTable,
}

impl FamilyMedicinePass {
    pub fn standard() -> Self {
        let mut table = QualificationTable::new();
        for (origin, credentials) in CREDENTIALS {
            table.insert(SPECIALTY, origin, credentials.iter().copied());
        }
        Self {
            provinces: PROVINCES.iter().map(|s| s.to_string()).collect(),
            origins: CREDENTIALS.iter().map(|(o, _)| o.to_string()).collect(),
            table,
        }
    }

    pub fn with_table(mut self, table: QualificationTable) -> Self {
        self.table = table;
        self
    }
}

impl SynthesisPass for FamilyMedicinePass {
    fn name(&self) -> &'static str {
        NAME
    }

    fn scope(&self) -> KeyScope {
        KeyScope::Province
    }

    fn min_experience_months(&self) -> u32 {
        24
    }

    fn targets(&self) -> Vec<Target> {
        self.provinces
            .iter()
            .flat_map(|province| {
                self.origins
                    .iter()
                    .map(move |origin| Target::new(SPECIALTY, origin, "Canada", province))
            })
            .collect()
    }

    fn required_qualifications(&self, target: &Target) -> PackResult<Vec<String>> {
        Ok(self
            .table
            .lookup(NAME, &target.specialty, &target.origin)?
            .to_vec())
    }

    fn template(&self, target: &Target, qualifications: &[String]) -> Option<RouteTemplate> {
        family_medicine_template(&target.destination_province, qualifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackError;
    use crate::synthesis::IdAllocator;

    #[test]
    fn province_is_the_outer_axis() {
        let targets = FamilyMedicinePass::standard().targets();
        assert_eq!(targets.len(), 27);
        assert_eq!(targets[0].destination_province, "Nova Scotia");
        assert_eq!(targets[0].origin, "United Kingdom");
        assert_eq!(targets[8].origin, "India");
        assert_eq!(targets[9].destination_province, "Saskatchewan");
    }

    #[test]
    fn full_credential_list_is_required() {
        let routes = FamilyMedicinePass::standard()
            .extend(Vec::new(), &mut IdAllocator::starting_at(500))
            .unwrap();
        let uk_ns = &routes[0];
        assert_eq!(uk_ns.required_qualifications, vec!["MRCGP", "CCT"]);
        assert_eq!(uk_ns.min_experience_months, 24);
        assert_eq!(uk_ns.specialty, "Family Medicine");
        assert!(uk_ns.steps[2].description.contains("CFPC"));
    }

    #[test]
    fn existing_key_is_skipped() {
        let pass = FamilyMedicinePass::standard();
        let mut ids = IdAllocator::starting_at(1);
        let first = pass.extend(Vec::new(), &mut ids).unwrap();
        let mut partial = first.clone();
        partial.retain(|r| r.incoming_country != "Pakistan");
        let (refilled, report) = pass.run(partial, &mut ids).unwrap();
        assert_eq!(report.added, 3);
        assert_eq!(report.skipped, 24);
        assert_eq!(refilled.len(), 27);
    }

    #[test]
    fn empty_credential_list_is_rejected() {
        let mut table = QualificationTable::new();
        for (origin, _) in CREDENTIALS {
            table.insert(SPECIALTY, origin, Vec::<String>::new());
        }
        let err = FamilyMedicinePass::standard()
            .with_table(table)
            .extend(Vec::new(), &mut IdAllocator::starting_at(1))
            .unwrap_err();
        assert!(matches!(err, PackError::MissingQualification { .. }));
    }
}
