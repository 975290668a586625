use std::collections::{HashMap, HashSet};

use crate::{AppError, Case};

/// Bundled demo cases in the portal's record shape.
const SAMPLE_CASES_JSON: &str = include_str!("../data/sample_cases.json");

/// Supplier of the case list shown on the dashboard.
///
/// A deployment backed by a case-management service implements this; the
/// dashboard only ever sees validated cases.
pub trait CaseSource {
    fn load_cases(&self) -> Result<Vec<Case>, AppError>;
}

/// Validate every case and reject duplicate ids.
pub fn validate_cases(cases: Vec<Case>) -> Result<Vec<Case>, AppError> {
    let mut seen = HashSet::new();
    for case in &cases {
        case.validate()?;
        if !seen.insert(case.id.clone()) {
            let mut fields = HashMap::new();
            fields.insert("id".to_string(), "duplicate".to_string());
            return Err(AppError::validation(
                format!("Case {} appears more than once", case.id),
                fields,
            ));
        }
    }
    Ok(cases)
}

/// Decode a JSON array of cases and validate it.
pub fn parse_cases_json(json: &str) -> Result<Vec<Case>, AppError> {
    let cases: Vec<Case> = serde_json::from_str(json)?;
    validate_cases(cases)
}

/// The four mocked applications the portal ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCaseSource;

impl CaseSource for SampleCaseSource {
    fn load_cases(&self) -> Result<Vec<Case>, AppError> {
        parse_cases_json(SAMPLE_CASES_JSON)
    }
}

/// An in-memory list, validated on every load.
#[derive(Debug, Clone, Default)]
pub struct StaticCaseSource {
    cases: Vec<Case>,
}

impl StaticCaseSource {
    pub fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }
}

impl CaseSource for StaticCaseSource {
    fn load_cases(&self) -> Result<Vec<Case>, AppError> {
        validate_cases(self.cases.clone())
    }
}
