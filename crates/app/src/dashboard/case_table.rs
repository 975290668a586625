use dioxus::prelude::*;
use shared_types::{Case, CaseStatus, ViewerRole};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent,
    CardHeader, CardTitle, ColumnAlign, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow,
};

use crate::format_helpers::format_date_human;

/// Workflow status to pill tone.
pub fn status_variant(status: CaseStatus) -> BadgeVariant {
    match status {
        CaseStatus::Draft => BadgeVariant::Secondary,
        CaseStatus::Submitted => BadgeVariant::Info,
        CaseStatus::InReview => BadgeVariant::Warning,
        CaseStatus::Approved => BadgeVariant::Success,
        CaseStatus::PaymentPending => BadgeVariant::Destructive,
    }
}

/// Table of the cases the current role can see.
#[component]
pub fn RecentApplicationsTable(cases: Vec<Case>, role: ViewerRole) -> Element {
    let show_owner = role.view().show_owner_column;
    let column_count = if show_owner { 6 } else { 5 };

    rsx! {
        Card { class: "applications-table",
            CardHeader {
                CardTitle { "Recent applications" }
                CardAction {
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Small, "View all" }
                }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { "Applicant" }
                        DataTableColumn { "Service" }
                        DataTableColumn { "Status" }
                        if show_owner {
                            DataTableColumn { "Owner" }
                        }
                        DataTableColumn { align: ColumnAlign::End, "Submitted" }
                    }
                    DataTableBody {
                        if cases.is_empty() {
                            DataTableEmpty { colspan: column_count, "No applications match the current filters." }
                        }
                        for case in cases.iter() {
                            DataTableRow { key: "{case.id}",
                                DataTableCell { mono: true, "{case.id}" }
                                DataTableCell { "{case.applicant}" }
                                DataTableCell { "{case.service_type}" }
                                DataTableCell {
                                    Badge { variant: status_variant(case.status), "{case.status}" }
                                }
                                if show_owner {
                                    DataTableCell { "{case.owner}" }
                                }
                                DataTableCell { align: ColumnAlign::End, "{format_date_human(case.submitted_at)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
