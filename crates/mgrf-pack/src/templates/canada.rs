//! # Canadian Provincial Licensing Templates
//!
//! Each province licenses through its College of Physicians and Surgeons:
//!
//! | Province | College | Specialist assessment | Family practice assessment |
//! |----------|---------|-----------------------|----------------------------|
//! | Alberta | CPSA | PRA | (seed routes only) |
//! | British Columbia | CPSBC | Clinical fellowship | (seed routes only) |
//! | Ontario | CPSO | Clinical fellowship | (seed routes only) |
//! | Nova Scotia | CPSNS | PACE | PACE |
//! | Saskatchewan | CPSS | SIPPA | SIPPA |
//! | Manitoba | CPSM | PRA MB-SP | PRA MB-FP |
//!
//! Every generated route follows the same three stages: recognition by the
//! college, a practice-ready assessment, and the full licence application.

use super::{docs, source, step, RouteTemplate};
use mgrf_core::{Source, Step};

/// A provincial medical regulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProvincialCollege {
    /// Abbreviation used in step titles (e.g. `CPSA`).
    pub abbr: &'static str,
    /// Province the college licenses for.
    pub province: &'static str,
}

impl ProvincialCollege {
    fn full_name(&self) -> String {
        format!("College of Physicians and Surgeons of {}", self.province)
    }
}

const COLLEGES: [ProvincialCollege; 6] = [
    ProvincialCollege { abbr: "CPSA", province: "Alberta" },
    ProvincialCollege { abbr: "CPSBC", province: "British Columbia" },
    ProvincialCollege { abbr: "CPSO", province: "Ontario" },
    ProvincialCollege { abbr: "CPSNS", province: "Nova Scotia" },
    ProvincialCollege { abbr: "CPSS", province: "Saskatchewan" },
    ProvincialCollege { abbr: "CPSM", province: "Manitoba" },
];

/// Look up the college for a province.
pub fn college(province: &str) -> Option<ProvincialCollege> {
    COLLEGES.iter().copied().find(|c| c.province == province)
}

const MCC_PRA_OVERVIEW: (&str, &str) = (
    "MCC – Practice-Ready Assessment programs overview",
    "https://mcc.ca/examinations-assessments/practice-ready-assessment/",
);

fn mcc_overview() -> Source {
    source(MCC_PRA_OVERVIEW.0, MCC_PRA_OVERVIEW.1)
}

/// The assessment stage of a route and what the final licence step needs
/// from it.
struct AssessmentStage {
    step: Step,
    /// Document proving the assessment was passed.
    evidence: &'static str,
    /// Description of the final licence step, naming the program.
    licence: String,
}

/// Assessment stage of the specialist route.
fn specialist_assessment(college: ProvincialCollege) -> Option<AssessmentStage> {
    let abbr = college.abbr;
    let province = college.province;
    let (assessment, evidence, licence) = match province {
        "Alberta" => (
            step(
                "Practice Readiness Assessment (PRA)",
                "Complete a Practice Readiness Assessment (PRA) in Alberta to demonstrate your \
                 competence. This typically involves a supervised workplace-based assessment.",
                docs(&["PRA application"]),
                "$4,000",
                "12-18",
            ),
            "PRA results",
            format!("Apply for a full licence with {abbr} once the PRA requirements are met."),
        ),
        "British Columbia" | "Ontario" => (
            step(
                "Clinical fellowship or assessment",
                format!(
                    "Complete a clinical fellowship or assessment period in {province} to \
                     demonstrate your competence. This typically involves a supervised clinical \
                     placement."
                ),
                docs(&["Fellowship agreement"]),
                "$10,000",
                "26-52",
            ),
            "Assessment/fellowship report",
            format!("Apply for a full licence with {abbr} once the assessment requirements are met."),
        ),
        "Nova Scotia" => (
            step(
                "Practice Readiness Assessment – PACE",
                "Complete the Physician Assessment Centre of Excellence (PACE) evaluation in Nova \
                 Scotia to demonstrate your competence. PACE is a practice-based assessment \
                 conducted over approximately 12 weeks in a clinical environment.",
                docs(&["PACE application"]),
                "$5,000",
                "12-18",
            ),
            "PACE results",
            format!(
                "Apply for a full licence with {abbr} once you have successfully completed the PACE \
                 assessment."
            ),
        ),
        "Saskatchewan" => (
            step(
                "Saskatchewan International Physician Practice Assessment (SIPPA)",
                "Complete the Saskatchewan International Physician Practice Assessment (SIPPA), a \
                 practice readiness competency assessment program. SIPPA typically involves a \
                 supervised clinical assessment over about 12 weeks to evaluate your readiness to \
                 practise in Saskatchewan.",
                docs(&["SIPPA application"]),
                "$5,000",
                "12-18",
            ),
            "SIPPA results",
            format!("Apply for a full licence with {abbr} once SIPPA requirements are met."),
        ),
        "Manitoba" => (
            step(
                "Practice Ready Assessment – Specialty Practice (PRA MB-SP)",
                "Complete the Practice Ready Assessment – Specialty Practice (PRA MB-SP), a \
                 3-12-month assessment program for eligible specialist physicians. It provides an \
                 accelerated route to licensure in Manitoba and typically involves supervised \
                 clinical placement in rural or underserved communities.",
                docs(&["PRA MB-SP application"]),
                "$6,000",
                "12-52",
            ),
            "Assessment results",
            format!("Apply for a full licence with {abbr} once the PRA MB-SP requirements are met."),
        ),
        _ => return None,
    };
    Some(AssessmentStage {
        step: assessment,
        evidence,
        licence,
    })
}

fn specialist_sources(province: &str) -> Option<Vec<Source>> {
    let sources = match province {
        "Alberta" => vec![
            source(
                "CPSA – Specialist registration for international medical graduates",
                "https://cpsa.ca/physicians/registration/apply-for-registration/additional-route-to-registration-imgs/",
            ),
            source(
                "MCC – Practice Ready Assessment (PRA) information",
                "https://mcc.ca/examinations-assessments/practice-ready-assessment",
            ),
        ],
        "British Columbia" => vec![source(
            "CPSBC – Specialist registration and assessment",
            "https://www.cpsbc.ca/registration-licensing",
        )],
        "Ontario" => vec![source(
            "CPSO – Specialist registration and licensure",
            "https://www.cpso.on.ca/Physicians/Registration",
        )],
        "Nova Scotia" | "Saskatchewan" | "Manitoba" => practice_ready_sources(province)?,
        _ => return None,
    };
    Some(sources)
}

fn practice_ready_sources(province: &str) -> Option<Vec<Source>> {
    let local = match province {
        "Nova Scotia" => source(
            "CPSNS – Practice Ready Assessment policy",
            "https://cpsns.ns.ca/resource-library/policies/practice-ready-assessment-office-based-primary-care/",
        ),
        "Saskatchewan" => source(
            "University of Saskatchewan – Introduction to SIPPA",
            "https://cmelearning.usask.ca/specialized-programs/sippa/Introduction%20to%20SIPPA.php",
        ),
        "Manitoba" => source(
            "University of Manitoba – International Medical Graduate programs",
            "https://umanitoba.ca/explore/programs-of-study/international-medical-graduate-img-programs",
        ),
        _ => return None,
    };
    Some(vec![local, mcc_overview()])
}

/// Three-step specialist route for `province`, recognising `qualification`.
pub fn specialist_template(province: &str, qualification: &str) -> Option<RouteTemplate> {
    let college = college(province)?;
    let stage = specialist_assessment(college)?;
    let steps = vec![
        step(
            format!("Specialist assessment with {}", college.abbr),
            format!(
                "Apply to the {} ({}) for recognition of your {qualification}. Provide proof of \
                 qualifications, training and experience.",
                college.full_name(),
                college.abbr
            ),
            vec![
                "Passport".to_string(),
                "CV".to_string(),
                format!("{qualification} certificate"),
            ],
            "$500",
            "6",
        ),
        stage.step,
        step(
            "Full licence application",
            stage.licence,
            docs(&[stage.evidence, "Licence application"]),
            "$450",
            "4",
        ),
    ];
    Some(RouteTemplate {
        steps,
        sources: specialist_sources(province)?,
    })
}

fn family_practice_assessment(college: ProvincialCollege) -> Option<AssessmentStage> {
    let abbr = college.abbr;
    let (assessment, evidence, completed) = match college.province {
        "Nova Scotia" => (
            step(
                "Practice Readiness Assessment – PACE",
                "Complete the Physician Assessment Centre of Excellence (PACE) evaluation in Nova \
                 Scotia. This practice-based assessment usually takes around 12 weeks and \
                 evaluates your readiness to practise family medicine within the province.",
                docs(&["PACE application"]),
                "$5,000",
                "12-16",
            ),
            "PACE assessment report",
            "Once you successfully complete the PACE assessment",
        ),
        "Saskatchewan" => (
            step(
                "Saskatchewan International Physician Practice Assessment (SIPPA)",
                "Complete the Saskatchewan International Physician Practice Assessment (SIPPA), a \
                 supervised practice readiness program. SIPPA typically involves a \
                 workplace-based assessment lasting about 12 weeks to evaluate your readiness for \
                 independent practice.",
                docs(&["SIPPA application"]),
                "$5,000",
                "12-18",
            ),
            "SIPPA assessment report",
            "After completing SIPPA",
        ),
        "Manitoba" => (
            step(
                "Practice Ready Assessment – Family Practice (PRA MB-FP)",
                "Complete the Practice Ready Assessment – Family Practice (PRA MB-FP), a \
                 three-month workplace-based assessment that provides an accelerated route to \
                 licensure for eligible practice-ready family physicians in rural Manitoba.",
                docs(&["PRA MB-FP application"]),
                "$5,000",
                "12-14",
            ),
            "Assessment report",
            "After completing the PRA MB-FP",
        ),
        _ => return None,
    };
    Some(AssessmentStage {
        step: assessment,
        evidence,
        licence: format!(
            "{completed}, apply for a full licence with {abbr} and register with the College of \
             Family Physicians of Canada (CFPC)."
        ),
    })
}

/// Three-step family medicine route for `province`, citing every credential
/// in `qualifications`. Only provinces with a practice-ready family
/// assessment program have a template.
pub fn family_medicine_template(province: &str, qualifications: &[String]) -> Option<RouteTemplate> {
    let college = college(province)?;
    let stage = family_practice_assessment(college)?;

    let mut eligibility_docs = vec!["Passport".to_string(), "CV".to_string()];
    eligibility_docs.extend(qualifications.iter().map(|q| format!("{q} certificate")));

    let steps = vec![
        step(
            format!("Apply for {} eligibility", college.abbr),
            format!(
                "Submit an eligibility assessment to the {} ({}) with proof of your {} \
                 qualification(s), identity documents and professional references.",
                college.full_name(),
                college.abbr,
                qualifications.join(" and ")
            ),
            eligibility_docs,
            "$300",
            "3",
        ),
        stage.step,
        step(
            "Full licence application",
            stage.licence,
            docs(&[stage.evidence, "Licence application"]),
            "$400",
            "4",
        ),
    ];
    Some(RouteTemplate {
        steps,
        sources: practice_ready_sources(province)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVINCES: [&str; 6] = [
        "Alberta",
        "British Columbia",
        "Ontario",
        "Nova Scotia",
        "Saskatchewan",
        "Manitoba",
    ];

    #[test]
    fn every_province_has_a_specialist_template() {
        for province in PROVINCES {
            let template = specialist_template(province, "CCT Cardiology")
                .unwrap_or_else(|| panic!("no template for {province}"));
            assert_eq!(template.steps.len(), 3);
            assert!(!template.sources.is_empty());
        }
    }

    #[test]
    fn specialist_steps_name_the_college_and_credential() {
        let template = specialist_template("Alberta", "ABIM Cardiology").unwrap();
        assert_eq!(template.steps[0].title, "Specialist assessment with CPSA");
        assert!(template.steps[0].description.contains("ABIM Cardiology"));
        assert!(template.steps[0]
            .docs
            .contains(&"ABIM Cardiology certificate".to_string()));
        assert_eq!(template.steps[1].fee, "$4,000");
        assert_eq!(template.steps[2].docs[0], "PRA results");
    }

    #[test]
    fn manitoba_specialist_uses_pra_mb_sp() {
        let template = specialist_template("Manitoba", "CCT Neurology").unwrap();
        assert!(template.steps[1].title.contains("PRA MB-SP"));
        assert_eq!(template.steps[1].time_weeks, "12-52");
    }

    #[test]
    fn prairie_and_maritime_specialists_cite_local_programs() {
        let template = specialist_template("Saskatchewan", "CCT Pathology").unwrap();
        assert!(template.sources[0].url.contains("usask.ca"));
        assert!(template.sources[1].url.contains("mcc.ca"));
    }

    #[test]
    fn family_medicine_template_only_for_practice_ready_provinces() {
        let quals = vec!["MRCGP".to_string(), "CCT".to_string()];
        assert!(family_medicine_template("Alberta", &quals).is_none());
        assert!(family_medicine_template("Ontario", &quals).is_none());
        let template = family_medicine_template("Nova Scotia", &quals).unwrap();
        assert_eq!(template.steps[0].title, "Apply for CPSNS eligibility");
        assert!(template.steps[0].description.contains("MRCGP and CCT"));
        assert_eq!(
            template.steps[0].docs,
            vec!["Passport", "CV", "MRCGP certificate", "CCT certificate"]
        );
        assert!(template.steps[2].description.contains("CFPC"));
    }

    #[test]
    fn licence_step_names_the_assessment_program() {
        let cases = [
            ("Alberta", "with CPSA once the PRA requirements are met"),
            ("Ontario", "with CPSO once the assessment requirements are met"),
            ("Nova Scotia", "with CPSNS once you have successfully completed the PACE assessment"),
            ("Saskatchewan", "with CPSS once SIPPA requirements are met"),
            ("Manitoba", "with CPSM once the PRA MB-SP requirements are met"),
        ];
        for (province, expected) in cases {
            let template = specialist_template(province, "CCT Neurology").unwrap();
            assert!(
                template.steps[2].description.contains(expected),
                "{province}: {}",
                template.steps[2].description
            );
        }

        let quals = vec!["MRCGP".to_string()];
        let family = [
            ("Nova Scotia", "Once you successfully complete the PACE assessment, apply"),
            ("Saskatchewan", "After completing SIPPA, apply for a full licence with CPSS"),
            ("Manitoba", "After completing the PRA MB-FP, apply for a full licence with CPSM"),
        ];
        for (province, expected) in family {
            let template = family_medicine_template(province, &quals).unwrap();
            assert!(
                template.steps[2].description.starts_with(expected),
                "{province}: {}",
                template.steps[2].description
            );
        }
    }

    #[test]
    fn unknown_province_has_no_template() {
        assert!(specialist_template("Quebec", "CCT Cardiology").is_none());
        assert!(college("Yukon").is_none());
    }
}
