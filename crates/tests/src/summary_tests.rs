use pretty_assertions::assert_eq;
use shared_types::{CaseStatus, DashboardSummary, StatTone, ViewerRole, CURRENT_USER};

use crate::common::*;

#[test]
fn stat_labels_and_tones_are_fixed() {
    let summary = DashboardSummary::default();
    let labels: Vec<_> = summary.stats(ViewerRole::Officer).iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["In progress", "Awaiting payment", "Approved this week", "Assigned to you"]);
    let tones: Vec<_> = summary.stats(ViewerRole::Supervisor).iter().map(|s| s.tone).collect();
    assert_eq!(tones, vec![StatTone::Primary, StatTone::Amber, StatTone::Emerald, StatTone::Slate]);
}

#[test]
fn own_case_count_ignores_visible_slice() {
    let all = vec![
        make_case("A", YOU, CaseStatus::Draft),
        make_case("B", YOU, CaseStatus::Approved),
        make_case("C", "Officer M. Nawa", CaseStatus::Approved),
    ];
    let summary = DashboardSummary::compute(&all, &all[2..], CURRENT_USER);
    assert_eq!(summary.total_visible, 1);
    assert_eq!(summary.approved_count, 1);
    assert_eq!(summary.own_case_count, 2);
}

#[test]
fn draft_counts_toward_nothing_but_total() {
    let all = vec![make_case("A", YOU, CaseStatus::Draft)];
    let summary = DashboardSummary::compute(&all, &all, CURRENT_USER);
    assert_eq!(summary.in_progress(), 0);
    assert_eq!(summary.approved_count, 0);
    assert_eq!(summary.pending_payment_count, 0);
    assert_eq!(summary.total_visible, 1);
}
