//! Canadian specialist routes for UK, US, Irish and Australian credentials.

use super::{KeyScope, QualificationTable, SynthesisPass, Target};
use crate::error::PackResult;
use crate::templates::canada::specialist_template;
use crate::templates::RouteTemplate;

const NAME: &str = "specialist";

const SPECIALTIES: [&str; 15] = [
    "Endocrinology",
    "Cardiology",
    "Neurology",
    "Dermatology",
    "Infectious Disease",
    "Internal Medicine",
    "Hematology",
    "Medical Oncology",
    "Nephrology",
    "Nuclear Medicine",
    "Physical Medicine and Rehabilitation",
    "Pathology",
    "Neurosurgery",
    "Plastic Surgery",
    "Preventive Medicine",
];

const ORIGINS: [&str; 4] = ["United Kingdom", "United States", "Ireland", "Australia"];

const PROVINCES: [&str; 6] = [
    "Alberta",
    "British Columbia",
    "Ontario",
    "Nova Scotia",
    "Saskatchewan",
    "Manitoba",
];

/// Credentials per specialty, in `ORIGINS` order.
const CREDENTIALS: [(&str, [&str; 4]); 15] = [
    ("Endocrinology", ["CCT Endocrinology", "ABIM Endocrinology", "CSCST Endocrinology", "FRACP Endocrinology"]),
    ("Cardiology", ["CCT Cardiology", "ABIM Cardiology", "CSCST Cardiology", "FRACP Cardiology"]),
    ("Neurology", ["CCT Neurology", "ABPN Neurology", "CSCST Neurology", "FRACP Neurology"]),
    ("Dermatology", ["CCT Dermatology", "ABD Dermatology", "CSCST Dermatology", "FACD Dermatology"]),
    ("Infectious Disease", ["CCT Infectious Disease", "ABIM Infectious Disease", "CSCST Infectious Disease", "FRACP Infectious Disease"]),
    ("Internal Medicine", ["CCT Internal Medicine", "ABIM Internal Medicine", "CSCST Internal Medicine", "FRACP Internal Medicine"]),
    ("Hematology", ["CCT Hematology", "ABIM Hematology", "CSCST Hematology", "FRACP Hematology"]),
    ("Medical Oncology", ["CCT Medical Oncology", "ABIM Medical Oncology", "CSCST Medical Oncology", "FRACP Oncology"]),
    ("Nephrology", ["CCT Nephrology", "ABIM Nephrology", "CSCST Nephrology", "FRACP Nephrology"]),
    ("Nuclear Medicine", ["CCT Nuclear Medicine", "ABNM Nuclear Medicine", "CSCST Nuclear Medicine", "FRACP Nuclear Medicine"]),
    (
        "Physical Medicine and Rehabilitation",
        [
            "CCT Rehabilitation Medicine",
            "ABPMR Physical Medicine & Rehabilitation",
            "CSCST Rehabilitation Medicine",
            "FAFRM Rehabilitation Medicine",
        ],
    ),
    ("Pathology", ["CCT Pathology", "ABPath Pathology", "CSCST Pathology", "FRCPA Pathology"]),
    ("Neurosurgery", ["CCT Neurosurgery", "ABNS Neurosurgery", "CSCST Neurosurgery", "RACS Neurosurgery"]),
    (
        "Plastic Surgery",
        [
            "CCT Plastic Surgery",
            "ABPS Plastic Surgery",
            "CSCST Plastic Surgery",
            "RACS Plastic and Reconstructive Surgery",
        ],
    ),
    (
        "Preventive Medicine",
        [
            "CCT Public Health Medicine",
            "ABPM Preventive Medicine",
            "CSCST Public Health Medicine",
            "FRACP Public Health Medicine",
        ],
    ),
];

/// Specialties × origins × provinces, one credential per route, 60 months
/// minimum experience.
#[derive(Debug, Clone)]
pub struct SpecialistPass {
    specialties: Vec<String>,
    origins: Vec<String>,
    provinces: Vec<String>,
    table: QualificationTable,
}

impl SpecialistPass {
    /// The built-in axes and credential table.
    pub fn standard() -> Self {
        let mut table = QualificationTable::new();
        for (specialty, credentials) in CREDENTIALS {
            for (origin, credential) in ORIGINS.iter().zip(credentials) {
                table.insert(specialty, origin, [credential]);
            }
        }
        Self {
            specialties: SPECIALTIES.iter().map(|s| s.to_string()).collect(),
            origins: ORIGINS.iter().map(|s| s.to_string()).collect(),
            provinces: PROVINCES.iter().map(|s| s.to_string()).collect(),
            table,
        }
    }

    /// Replace the credential table.
    pub fn with_table(mut self, table: QualificationTable) -> Self {
        self.table = table;
        self
    }

    /// Replace the province axis.
    pub fn with_provinces<I, S>(mut self, provinces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provinces = provinces.into_iter().map(Into::into).collect();
        self
    }

    pub fn table(&self) -> &QualificationTable {
        &self.table
    }
}

impl SynthesisPass for SpecialistPass {
    fn name(&self) -> &'static str {
        NAME
    }

    fn scope(&self) -> KeyScope {
        KeyScope::Province
    }

    fn min_experience_months(&self) -> u32 {
        60
    }

    fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        for specialty in &self.specialties {
            for origin in &self.origins {
                for province in &self.provinces {
                    targets.push(Target::new(specialty, origin, "Canada", province));
                }
            }
        }
        targets
    }

    fn required_qualifications(&self, target: &Target) -> PackResult<Vec<String>> {
        let credentials = self.table.lookup(NAME, &target.specialty, &target.origin)?;
        Ok(credentials[..1].to_vec())
    }

    fn template(&self, target: &Target, qualifications: &[String]) -> Option<RouteTemplate> {
        specialist_template(&target.destination_province, qualifications.first()?)
    }
}
