//! # Gulf Health Authority Templates
//!
//! | Destination | Authority | Exam | Verification |
//! |-------------|-----------|------|--------------|
//! | United Arab Emirates | MOHAP | MOHAP licensing exam | DataFlow |
//! | Qatar | QCHP | QCHP exam (Prometric) | DataFlow |
//! | Saudi Arabia | SCFHS (MumarisPlus) | Prometric / Pearson VUE | DataFlow |
//! | Oman | Ministry of Health | Oman Medical Licensing Exam | DataFlow |
//!
//! The same sequence serves both family medicine and general specialist
//! routes; only the credential differs.

use super::{docs, source, step, RouteTemplate};
use mgrf_core::{Source, Step};

const DATAFLOW_DESCRIPTION: &str = "Complete the DataFlow verification (Primary Source \
    Verification) to validate your education, licence and employment documents. This \
    third-party process verifies your credentials with the issuing institutions and produces a \
    report accepted by the health authority.";

fn dataflow(fee: &str, documents: &[&str]) -> Step {
    step("DataFlow verification", DATAFLOW_DESCRIPTION, docs(documents), fee, "4-8")
}

fn uae_steps() -> Vec<Step> {
    vec![
        step(
            "Create MOHAP account and upload documents",
            "Create an account with the Ministry of Health and Prevention (MOHAP) using UAE \
             PASS. Upload required documents including passport, qualifications, proof of \
             experience and a recent photo, and pay the application fee.",
            docs(&["Passport", "Qualification certificates", "Experience certificate", "Photo"]),
            "AED 100 application fee",
            "1",
        ),
        dataflow("AED 1,000-2,000", &["DataFlow report"]),
        step(
            "MOHAP licensing exam or evaluation",
            "Register for and pass the MOHAP licensing exam relevant to your profession. For \
             some specialties the exam may be replaced by an evaluation interview. Upon passing, \
             you receive an eligibility letter to proceed.",
            docs(&["Exam booking confirmation", "Exam results"]),
            "AED 500",
            "4",
        ),
        step(
            "Final licence application",
            "Submit your eligibility letter and DataFlow report through the MOHAP portal, pay \
             the licence fee, and download your UAE professional licence once issued.",
            docs(&["Eligibility letter", "Licence application"]),
            "AED 3,000 licence fee",
            "2",
        ),
    ]
}

fn saudi_steps() -> Vec<Step> {
    vec![
        dataflow(
            "SAR 1,500-3,000",
            &[
                "Passport",
                "Qualification certificates",
                "Licence/registration certificate",
                "Employment letters",
            ],
        ),
        step(
            "MumarisPlus registration and classification",
            "Create an account on MumarisPlus (SCFHS portal) and submit your documents for \
             professional classification. SCFHS will review your qualifications and issue an \
             eligibility number if you are deemed eligible.",
            docs(&["MumarisPlus application"]),
            "SAR 500",
            "2-4",
        ),
        step(
            "Licensing exam",
            "Register for and pass the Prometric or Pearson VUE exam required by the Saudi \
             Commission for Health Specialties. Physicians may be asked to attend an online \
             evaluation session instead of the exam.",
            docs(&["Exam booking confirmation", "Exam results"]),
            "US$289",
            "4",
        ),
        step(
            "Professional classification and registration certificate",
            "After passing the exam, SCFHS completes a final review and issues your \
             professional classification and registration certificate, valid for two years.",
            docs(&["Classification certificate"]),
            "SAR 1,000",
            "4",
        ),
        step(
            "Update MumarisPlus profile after arrival",
            "Once you arrive in Saudi Arabia and obtain your resident permit (iqama), update \
             your MumarisPlus profile with this information to activate your registration.",
            docs(&["Iqama"]),
            "0",
            "1",
        ),
    ]
}

fn qatar_steps() -> Vec<Step> {
    vec![
        dataflow("QAR 1,500-3,000", &["DataFlow report"]),
        step(
            "Register with QCHP",
            "Create an account with the Qatar Council for Healthcare Practitioners (QCHP) and \
             submit your documents for classification. This may occur before or after the exam \
             depending on the authority's rules.",
            docs(&["QCHP application"]),
            "QAR 500",
            "2-4",
        ),
        step(
            "Licensing exam or oral assessment",
            "Register for and pass the QCHP licensing exam (Prometric) or oral assessment. In \
             Qatar, the exam may be taken before DataFlow completion in some cases.",
            docs(&["Exam booking confirmation", "Exam results"]),
            "QAR 1,000",
            "4",
        ),
        step(
            "Final licence application",
            "Submit your eligibility letter, DataFlow report and completed application to \
             obtain your Qatar licence.",
            docs(&["Eligibility letter", "Licence application"]),
            "QAR 3,000",
            "2",
        ),
    ]
}

fn oman_steps() -> Vec<Step> {
    vec![
        step(
            "Register for Oman Medical Licensing Exam",
            "Schedule and take the Oman Medical Licensing Exam via Prometric. You may register \
             and take the exam before completing DataFlow, but you must pass the written exam to \
             proceed.",
            docs(&["Exam booking confirmation", "Exam results"]),
            "OMR 100",
            "4",
        ),
        dataflow("OMR 200-400", &["DataFlow report"]),
        step(
            "Oral assessment and sponsorship",
            "Secure employment with an Oman-licensed facility and complete an oral assessment \
             (clinical interview) if required. Your employer will assist with work visa \
             sponsorship.",
            docs(&["Employment offer", "Oral exam invitation"]),
            "Employer-sponsored",
            "4-12",
        ),
        step(
            "Final licence registration",
            "Submit your DataFlow report, exam results, sponsorship documents and pay the \
             licence fee to obtain your Oman medical licence.",
            docs(&["Licence application"]),
            "OMR 300",
            "2",
        ),
    ]
}

fn sources(destination: &str) -> Vec<Source> {
    let overview = source(
        "Passprometric – Middle East licensing process overview",
        "https://passprometric.com/dataflow_service.php",
    );
    if destination == "Saudi Arabia" {
        vec![
            source(
                "Helen Ziegler & Associates – Getting your Saudi professional health licence",
                "https://www.hziegler.com/articles/saudi-license.html",
            ),
            overview,
        ]
    } else {
        vec![overview]
    }
}

/// Step template for a Gulf destination country.
pub fn gulf_template(destination: &str) -> Option<RouteTemplate> {
    let steps = match destination {
        "United Arab Emirates" => uae_steps(),
        "Qatar" => qatar_steps(),
        "Saudi Arabia" => saudi_steps(),
        "Oman" => oman_steps(),
        _ => return None,
    };
    Some(RouteTemplate {
        steps,
        sources: sources(destination),
    })
}
