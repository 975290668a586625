use dioxus::prelude::*;
use shared_types::{Metric, ViewerRole, ACTIVITY_BARS};
use shared_ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Fixed weekly metrics plus a seven-day activity sparkline.
#[component]
pub fn SummaryAnalytics(role: ViewerRole) -> Element {
    let view = role.view();

    rsx! {
        Card { class: "summary-analytics",
            CardHeader {
                div {
                    CardTitle { "{view.analytics_title}" }
                    CardDescription { "Last 7 days" }
                }
            }
            CardContent {
                div { class: "metric-grid",
                    for metric in view.metrics.iter().copied() {
                        MiniMetric { key: "{metric.label}", metric: metric }
                    }
                }
                div { class: "sparkline", aria_label: "Activity over the last 7 days",
                    for (day, height) in ACTIVITY_BARS.iter().enumerate() {
                        div { key: "{day}", class: "sparkline-bar", style: "height: {height}%" }
                    }
                }
            }
        }
    }
}

#[component]
fn MiniMetric(metric: Metric) -> Element {
    let trend_class = if metric.is_positive() { "metric-trend positive" } else { "metric-trend negative" };

    rsx! {
        div { class: "mini-metric",
            div { class: "metric-label", "{metric.label}" }
            div { class: "metric-value", "{metric.value}" }
            div { class: trend_class, "{metric.trend_arrow()} {metric.trend}% vs last week" }
        }
    }
}
