//! Properties that hold for any case list. Owners include near-misses of
//! the signed-in identity so the exact-match rule is exercised.

use chrono::NaiveDate;
use proptest::prelude::*;
use shared_types::{
    pending_payments, visible_cases, Case, CaseQuery, CaseStatus, DashboardSummary, DashboardView,
    ViewerRole, ALL_SERVICES, ALL_STATUSES, CURRENT_USER,
};

const OWNERS: &[&str] = &["You", "you", "You ", "", "Officer M. Nawa", "Officer T. Banda"];

fn arb_case() -> impl Strategy<Value = Case> {
    (
        "APP-[0-9]{4}-[0-9]{3}",
        "[A-Za-z ]{0,20}",
        prop::sample::select(ALL_SERVICES),
        prop::sample::select(ALL_STATUSES),
        prop::sample::select(OWNERS),
        0u32..365,
        proptest::option::of(0u64..100_000),
    )
        .prop_map(|(id, applicant, service_type, status, owner, day, amount)| Case {
            id,
            applicant,
            service_type,
            status,
            owner: owner.to_string(),
            submitted_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(day.into()),
            amount,
        })
}

fn arb_cases() -> impl Strategy<Value = Vec<Case>> {
    prop::collection::vec(arb_case(), 0..40)
}

fn arb_role() -> impl Strategy<Value = ViewerRole> {
    prop_oneof![Just(ViewerRole::Officer), Just(ViewerRole::Supervisor)]
}

proptest! {
    /// Supervisors see the list unchanged.
    #[test]
    fn supervisor_visibility_is_identity(cases in arb_cases()) {
        prop_assert_eq!(visible_cases(&cases, ViewerRole::Supervisor, CURRENT_USER), cases);
    }

    /// Officers see exactly the cases whose owner equals the identity.
    #[test]
    fn officer_visibility_is_exact_owner_filter(cases in arb_cases()) {
        let expected: Vec<Case> = cases.iter().filter(|c| c.owner == "You").cloned().collect();
        prop_assert_eq!(visible_cases(&cases, ViewerRole::Officer, CURRENT_USER), expected);
    }

    /// Pending payments come from the visible list and all await payment.
    #[test]
    fn pending_is_subset_of_visible(cases in arb_cases(), role in arb_role()) {
        let visible = visible_cases(&cases, role, CURRENT_USER);
        for case in pending_payments(&visible) {
            prop_assert_eq!(case.status, CaseStatus::PaymentPending);
            prop_assert!(visible.contains(&case));
        }
    }

    #[test]
    fn in_progress_never_exceeds_visible(cases in arb_cases(), role in arb_role()) {
        let visible = visible_cases(&cases, role, CURRENT_USER);
        let summary = DashboardSummary::compute(&cases, &visible, CURRENT_USER);
        prop_assert!(summary.in_review_count + summary.submitted_count <= visible.len());
        prop_assert_eq!(summary.total_visible, visible.len());
    }

    /// Same list and role always give the same view.
    #[test]
    fn building_twice_gives_identical_views(cases in arb_cases(), role in arb_role()) {
        let first = DashboardView::build(&cases, role, &CaseQuery::default(), CURRENT_USER);
        let second = DashboardView::build(&cases, role, &CaseQuery::default(), CURRENT_USER);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn visibility_preserves_input_order(cases in arb_cases(), role in arb_role()) {
        let visible = visible_cases(&cases, role, CURRENT_USER);
        let mut remaining = cases.iter();
        for case in &visible {
            prop_assert!(remaining.any(|c| c == case));
        }
    }
}
