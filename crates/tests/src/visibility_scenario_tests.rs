use pretty_assertions::assert_eq;
use shared_types::{
    pending_payments, visible_cases, CaseQuery, CaseStatus, DashboardSummary, DashboardView,
    ViewerRole, CURRENT_USER,
};

use crate::common::*;

// ── Officer over the sample list ────────────────────────────────────

#[test]
fn officer_sees_own_two_cases() {
    let cases = sample_cases();
    let visible = visible_cases(&cases, ViewerRole::Officer, CURRENT_USER);
    assert_eq!(ids(&visible), vec!["APP-2412-001", "APP-2412-002"]);
}

#[test]
fn officer_has_one_pending_payment() {
    let cases = sample_cases();
    let visible = visible_cases(&cases, ViewerRole::Officer, CURRENT_USER);
    let pending = pending_payments(&visible);
    assert_eq!(ids(&pending), vec!["APP-2412-002"]);
    assert_eq!(pending[0].amount, Some(4100));
}

#[test]
fn officer_summary_counts() {
    let cases = sample_cases();
    let visible = visible_cases(&cases, ViewerRole::Officer, CURRENT_USER);
    let summary = DashboardSummary::compute(&cases, &visible, CURRENT_USER);
    assert_eq!(
        summary,
        DashboardSummary {
            total_visible: 2,
            in_review_count: 1,
            submitted_count: 0,
            approved_count: 0,
            pending_payment_count: 1,
            own_case_count: 2,
        }
    );
}

// ── Supervisor over the sample list ─────────────────────────────────

#[test]
fn supervisor_sees_all_four_cases() {
    let cases = sample_cases();
    let visible = visible_cases(&cases, ViewerRole::Supervisor, CURRENT_USER);
    assert_eq!(visible, cases);
    assert_eq!(visible.len(), 4);
}

#[test]
fn supervisor_summary_counts() {
    let cases = sample_cases();
    let view = DashboardView::build(&cases, ViewerRole::Supervisor, &CaseQuery::default(), CURRENT_USER);
    assert_eq!(view.summary.approved_count, 1);
    assert_eq!(view.summary.in_progress(), 2);
    assert_eq!(view.summary.pending_payment_count, 1);
    assert_eq!(view.summary.own_case_count, 2);
}

#[test]
fn supervisor_fourth_stat_is_team_total() {
    let cases = sample_cases();
    let view = DashboardView::build(&cases, ViewerRole::Supervisor, &CaseQuery::default(), CURRENT_USER);
    let stats = view.summary.stats(ViewerRole::Supervisor);
    assert_eq!(stats[3].label, "Total across team");
    assert_eq!(stats[3].value, 4);
}

#[test]
fn officer_fourth_stat_is_own_cases() {
    let cases = sample_cases();
    let view = DashboardView::build(&cases, ViewerRole::Officer, &CaseQuery::default(), CURRENT_USER);
    let stats = view.summary.stats(ViewerRole::Officer);
    assert_eq!(stats[3].label, "Assigned to you");
    assert_eq!(stats[3].value, 2);
}

// ── Edge cases ──────────────────────────────────────────────────────

#[test]
fn empty_list_gives_zero_everywhere() {
    for role in [ViewerRole::Officer, ViewerRole::Supervisor] {
        let view = DashboardView::build(&[], role, &CaseQuery::default(), CURRENT_USER);
        assert!(view.cases.is_empty());
        assert!(view.pending_payments.is_empty());
        assert_eq!(view.summary, DashboardSummary::default());
    }
}

#[test]
fn officer_without_own_cases_sees_nothing() {
    let cases = vec![
        make_case("A", "Officer M. Nawa", CaseStatus::Submitted),
        make_case("B", "Officer T. Banda", CaseStatus::PaymentPending),
    ];
    let view = DashboardView::build(&cases, ViewerRole::Officer, &CaseQuery::default(), CURRENT_USER);
    assert!(view.cases.is_empty());
    assert!(view.pending_payments.is_empty());
}

#[test]
fn owner_match_is_exact() {
    let cases = vec![
        make_case("A", "you", CaseStatus::Draft),
        make_case("B", "You ", CaseStatus::Draft),
        make_case("C", "You", CaseStatus::Draft),
    ];
    let visible = visible_cases(&cases, ViewerRole::Officer, CURRENT_USER);
    assert_eq!(ids(&visible), vec!["C"]);
}

#[test]
fn supervisor_keeps_every_pending_payment() {
    let cases = vec![
        make_case("A", YOU, CaseStatus::PaymentPending),
        make_case("B", "Officer M. Nawa", CaseStatus::PaymentPending),
    ];
    let view = DashboardView::build(&cases, ViewerRole::Supervisor, &CaseQuery::default(), CURRENT_USER);
    assert_eq!(ids(&view.pending_payments), vec!["A", "B"]);
}
