use dioxus::prelude::*;
use shared_types::{DashboardSummary, StatTone, ViewerRole};
use shared_ui::components::{Card, CardContent, CardDescription, CardHeader};

use crate::format_helpers::format_date_human;

/// Greeting, today's date and the four headline numbers.
#[component]
pub fn SummaryPanel(summary: DashboardSummary, role: ViewerRole) -> Element {
    let view = role.view();
    let today = format_date_human(chrono::Local::now().date_naive());

    rsx! {
        Card { class: "summary-panel",
            CardHeader {
                div {
                    h1 { class: "summary-heading", "{view.heading}" }
                    CardDescription { "{view.description}" }
                }
                div { class: "summary-sync",
                    span { "{today}" }
                    span { class: "summary-sync-note", "Last sync: a few seconds ago" }
                }
            }
            CardContent {
                div { class: "stat-grid",
                    for stat in summary.stats(role) {
                        StatPill { key: "{stat.label}", label: stat.label, value: stat.value, tone: stat.tone }
                    }
                }
            }
        }
    }
}

#[component]
fn StatPill(label: String, value: usize, tone: StatTone) -> Element {
    rsx! {
        div { class: "stat-pill", "data-tone": tone.as_str(),
            div { class: "stat-pill-label", "{label}" }
            div { class: "stat-pill-value", "{value}" }
        }
    }
}
