mod analytics;
mod case_table;
mod filter_bar;
mod payments;
mod shortcuts;
mod summary;

use dioxus::prelude::*;
use shared_types::{distinct_owners, Case, CaseQuery, DashboardView, PortalSettings, ViewerRole};

use analytics::SummaryAnalytics;
use case_table::RecentApplicationsTable;
use filter_bar::FilterBar;
use payments::PendingPaymentsList;
use shortcuts::QuickActions;
use summary::SummaryPanel;

/// Role-aware overview of applications, payments and team metrics.
///
/// Every widget is drawn from a single [`DashboardView`] so the counts,
/// table and payment list always agree.
#[component]
pub fn Dashboard(cases: Vec<Case>, role: ViewerRole) -> Element {
    let settings = use_context::<PortalSettings>();
    let query = use_signal(CaseQuery::default);

    let view = DashboardView::build(&cases, role, &query.read(), &settings.current_user);
    tracing::debug!(
        role = %role,
        visible = view.cases.len(),
        pending = view.pending_payments.len(),
        filtered = !query.read().is_empty_for(role),
        "dashboard view computed"
    );
    let owners = distinct_owners(&cases);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard",
            section { class: "dashboard-top",
                SummaryPanel { summary: view.summary, role: role }
                QuickActions { role: role }
            }

            FilterBar { query: query, role: role, owners: owners }

            section { class: "dashboard-main",
                RecentApplicationsTable { cases: view.cases.clone(), role: role }
                div { class: "dashboard-side",
                    PendingPaymentsList {
                        cases: view.pending_payments.clone(),
                        currency: settings.currency.clone(),
                    }
                    SummaryAnalytics { role: role }
                }
            }
        }
    }
}

/// Shown in place of the dashboard when the case list could not be loaded.
#[component]
pub fn LoadError(message: String) -> Element {
    use shared_ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

    rsx! {
        Card { class: "dashboard-error",
            CardHeader {
                div {
                    CardTitle { "Error" }
                    CardDescription { "Failed to load applications." }
                }
            }
            CardContent {
                p { class: "dashboard-error-text", "{message}" }
            }
        }
    }
}
