use pretty_assertions::assert_eq;
use shared_types::{
    parse_cases_json, AppErrorKind, CaseSource, CaseStatus, ServiceType, StaticCaseSource,
};

use crate::common::*;

#[test]
fn sample_fixture_decodes_display_strings() {
    let cases = sample_cases();
    assert_eq!(cases.len(), 4);
    assert_eq!(cases[1].status, CaseStatus::PaymentPending);
    assert_eq!(cases[1].service_type, ServiceType::ChangeOfOwnership);
    assert_eq!(cases[3].submitted_at.to_string(), "2025-12-04");
}

#[test]
fn static_source_returns_its_cases() {
    let cases = vec![
        make_case("APP-1", YOU, CaseStatus::Draft),
        make_case("APP-2", "Officer M. Nawa", CaseStatus::PaymentPending),
        make_case("APP-3", YOU, CaseStatus::Approved),
    ];
    let loaded = StaticCaseSource::new(cases.clone()).load_cases().unwrap();
    assert_eq!(loaded, cases);
}

#[test]
fn static_source_rejects_duplicate_ids() {
    let cases = vec![
        make_case("APP-1", YOU, CaseStatus::Draft),
        make_case("APP-1", YOU, CaseStatus::Approved),
    ];
    let err = StaticCaseSource::new(cases).load_cases().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("id"));
}

#[test]
fn pending_case_without_amount_is_rejected() {
    let mut case = make_case("APP-2", YOU, CaseStatus::PaymentPending);
    case.amount = None;
    let err = StaticCaseSource::new(vec![case]).load_cases().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.friendly_message().contains("amount"));
}

#[test]
fn malformed_json_is_bad_request() {
    let err = parse_cases_json("[{\"id\": 1}]").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}

#[test]
fn unknown_status_string_is_rejected() {
    let json = serde_json::json!([{
        "id": "APP-9",
        "applicant": "Test Ltd",
        "service": "New Registration",
        "status": "Archived",
        "owner": "You",
        "submittedAt": "2025-12-01",
        "amount": null
    }]);
    let err = parse_cases_json(&json.to_string()).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
