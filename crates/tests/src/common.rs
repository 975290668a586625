use chrono::NaiveDate;
use shared_types::{Case, CaseSource, CaseStatus, SampleCaseSource, ServiceType};

pub const YOU: &str = "You";

/// The four bundled sample cases.
pub fn sample_cases() -> Vec<Case> {
    SampleCaseSource.load_cases().expect("bundled sample cases are valid")
}

pub fn make_case(id: &str, owner: &str, status: CaseStatus) -> Case {
    Case {
        id: id.to_string(),
        applicant: format!("Applicant {id}"),
        service_type: ServiceType::NewRegistration,
        status,
        owner: owner.to_string(),
        submitted_at: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        amount: Some(1000),
    }
}

pub fn ids(cases: &[Case]) -> Vec<&str> {
    cases.iter().map(|c| c.id.as_str()).collect()
}
