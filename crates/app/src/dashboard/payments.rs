use dioxus::prelude::*;
use shared_types::Case;
use shared_ui::components::{Badge, BadgeVariant, Card, CardAction, CardContent, CardHeader, CardTitle};

use crate::format_helpers::{format_date_human, format_money};

/// Visible cases waiting on a payment confirmation.
#[component]
pub fn PendingPaymentsList(cases: Vec<Case>, currency: String) -> Element {
    let count = cases.len();

    rsx! {
        Card { class: "pending-payments",
            CardHeader {
                CardTitle { "Pending payments" }
                CardAction {
                    Badge { variant: BadgeVariant::Warning, "{count} pending" }
                }
            }
            CardContent {
                if cases.is_empty() {
                    p { class: "pending-empty", "No pending payments at the moment." }
                } else {
                    ul { class: "pending-list",
                        for case in cases.iter() {
                            li { key: "{case.id}", class: "pending-item",
                                div { class: "pending-item-main",
                                    div { class: "pending-item-title",
                                        span { class: "mono", "{case.id}" }
                                        span { class: "pending-sep", "•" }
                                        span { "{case.applicant}" }
                                    }
                                    div { class: "pending-item-meta",
                                        "{case.service_type} • Submitted {format_date_human(case.submitted_at)}"
                                    }
                                }
                                div { class: "pending-item-amount",
                                    div { class: "pending-amount",
                                        "{format_money(&currency, case.amount.unwrap_or_default())}"
                                    }
                                    div { class: "pending-note", "Awaiting confirmation" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
