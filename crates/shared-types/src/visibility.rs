//! Role-based case visibility and the summary numbers derived from it.
//!
//! Everything here is pure: the same case list, role and query always give
//! the same output. The dashboard computes one [`DashboardView`] per render
//! and draws every widget from it, so the counts can never drift from the
//! table.

use crate::{Case, CaseStatus, ScopeStat, ServiceType, StatTone, ViewerRole};

/// Owner value the sample data uses for the signed-in officer.
pub const CURRENT_USER: &str = "You";

/// Cases the given role is allowed to see, in their original order.
///
/// Supervisors see the full list; officers see only cases owned by
/// `identity`.
pub fn visible_cases(cases: &[Case], role: ViewerRole, identity: &str) -> Vec<Case> {
    if role.sees_all_cases() {
        return cases.to_vec();
    }
    own_cases(cases, identity).cloned().collect()
}

/// Cases owned by `identity`, independent of role.
pub fn own_cases<'a>(cases: &'a [Case], identity: &'a str) -> impl Iterator<Item = &'a Case> + 'a {
    cases.iter().filter(move |c| c.is_owned_by(identity))
}

/// Cases from `cases` that are waiting on a payment.
pub fn pending_payments(cases: &[Case]) -> Vec<Case> {
    cases.iter().filter(|c| c.is_payment_pending()).cloned().collect()
}

fn count_status(cases: &[Case], status: CaseStatus) -> usize {
    cases.iter().filter(|c| c.status == status).count()
}

/// Aggregate counts shown on the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub total_visible: usize,
    pub in_review_count: usize,
    pub submitted_count: usize,
    pub approved_count: usize,
    pub pending_payment_count: usize,
    /// Cases owned by the current user across the full list.
    pub own_case_count: usize,
}

impl DashboardSummary {
    /// Summarize `visible`. `own_case_count` is taken from `all` so it does
    /// not depend on role or filters.
    pub fn compute(all: &[Case], visible: &[Case], identity: &str) -> Self {
        Self {
            total_visible: visible.len(),
            in_review_count: count_status(visible, CaseStatus::InReview),
            submitted_count: count_status(visible, CaseStatus::Submitted),
            approved_count: count_status(visible, CaseStatus::Approved),
            pending_payment_count: count_status(visible, CaseStatus::PaymentPending),
            own_case_count: own_cases(all, identity).count(),
        }
    }

    /// Cases somewhere between submission and decision.
    pub fn in_progress(&self) -> usize {
        self.in_review_count + self.submitted_count
    }

    /// The four stat pills for the given role.
    pub fn stats(&self, role: ViewerRole) -> [SummaryStat; 4] {
        let view = role.view();
        let scope_value = match view.scope_stat {
            ScopeStat::TotalVisible => self.total_visible,
            ScopeStat::OwnCases => self.own_case_count,
        };
        [
            SummaryStat { label: "In progress", value: self.in_progress(), tone: StatTone::Primary },
            SummaryStat {
                label: "Awaiting payment",
                value: self.pending_payment_count,
                tone: StatTone::Amber,
            },
            SummaryStat {
                label: "Approved this week",
                value: self.approved_count,
                tone: StatTone::Emerald,
            },
            SummaryStat { label: view.scope_stat_label, value: scope_value, tone: StatTone::Slate },
        ]
    }
}

/// One labelled number in the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStat {
    pub label: &'static str,
    pub value: usize,
    pub tone: StatTone,
}

/// Search and filter criteria from the dashboard filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseQuery {
    /// Case-insensitive substring of the id or applicant name.
    pub text: String,
    pub status: Option<CaseStatus>,
    pub service: Option<ServiceType>,
    /// Only honoured for roles that show the owner filter.
    pub owner: Option<String>,
}

impl CaseQuery {
    /// No criterion that `role` would apply is set. An owner left over from
    /// the supervisor view does not count for roles without the owner filter.
    pub fn is_empty_for(&self, role: ViewerRole) -> bool {
        self.text.trim().is_empty()
            && self.status.is_none()
            && self.service.is_none()
            && (self.owner.is_none() || !role.view().show_owner_filter)
    }

    /// Whether `case` passes the query for a viewer with `role`.
    pub fn matches(&self, case: &Case, role: ViewerRole) -> bool {
        let needle = self.text.trim().to_lowercase();
        if !needle.is_empty()
            && !case.id.to_lowercase().contains(&needle)
            && !case.applicant.to_lowercase().contains(&needle)
        {
            return false;
        }
        if self.status.is_some_and(|s| s != case.status) {
            return false;
        }
        if self.service.is_some_and(|s| s != case.service_type) {
            return false;
        }
        if role.view().show_owner_filter {
            if let Some(owner) = &self.owner {
                if &case.owner != owner {
                    return false;
                }
            }
        }
        true
    }
}

/// Distinct owners in first-seen order, for the owner filter options.
pub fn distinct_owners(cases: &[Case]) -> Vec<String> {
    let mut owners: Vec<String> = Vec::new();
    for case in cases {
        if !owners.contains(&case.owner) {
            owners.push(case.owner.clone());
        }
    }
    owners
}

/// Everything the dashboard renders, derived in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub role: ViewerRole,
    /// Rows for the table: role-visible cases that pass the query.
    pub cases: Vec<Case>,
    /// Subset of `cases` waiting on payment.
    pub pending_payments: Vec<Case>,
    pub summary: DashboardSummary,
}

impl DashboardView {
    pub fn build(cases: &[Case], role: ViewerRole, query: &CaseQuery, identity: &str) -> Self {
        let rows: Vec<Case> = visible_cases(cases, role, identity)
            .into_iter()
            .filter(|c| query.matches(c, role))
            .collect();
        let pending_payments = pending_payments(&rows);
        let summary = DashboardSummary::compute(cases, &rows, identity);
        Self {
            role,
            cases: rows,
            pending_payments,
            summary,
        }
    }
}
