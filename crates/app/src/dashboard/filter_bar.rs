use dioxus::prelude::*;
use shared_types::{CaseQuery, CaseStatus, ServiceType, ViewerRole, ALL_SERVICES, ALL_STATUSES};
use shared_ui::components::{
    Button, ButtonSize, ButtonVariant, Card, FormSelect, Input, SearchBar, SelectOption,
};

fn status_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "Status: All")];
    options.extend(ALL_STATUSES.iter().map(|s| SelectOption::new(s.as_str(), s.label())));
    options
}

fn service_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "Service: All")];
    options.extend(ALL_SERVICES.iter().map(|s| SelectOption::new(s.as_str(), s.label())));
    options
}

fn owner_options(owners: &[String]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "Owner: Anyone")];
    options.extend(owners.iter().map(|o| SelectOption::new(o.as_str(), o.as_str())));
    options
}

/// Parse a select value; the empty value means "all".
fn parse_choice<T>(value: &str, parse: fn(&str) -> Result<T, shared_types::AppError>) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    match parse(value) {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unknown filter value");
            None
        }
    }
}

/// Search box plus status, service and (for supervisors) owner filters.
#[component]
pub fn FilterBar(mut query: Signal<CaseQuery>, role: ViewerRole, owners: Vec<String>) -> Element {
    let current = query.read().clone();
    let show_owner = role.view().show_owner_filter;

    rsx! {
        Card { class: "filter-bar",
            SearchBar {
                title: "Search applications",
                description: "Filter by status, service type and owner. Results update instantly.",
                Input {
                    input_type: "search",
                    value: current.text.clone(),
                    placeholder: "Search by application ID or applicant name",
                    on_input: move |evt: FormEvent| query.write().text = evt.value(),
                    on_clear: move |_| query.write().text.clear(),
                }
                FormSelect {
                    label: "Status",
                    value: current.status.map(|s| s.as_str()).unwrap_or_default(),
                    options: status_options(),
                    onchange: move |evt: Event<FormData>| {
                        query.write().status = parse_choice(&evt.value(), CaseStatus::parse);
                    },
                }
                FormSelect {
                    label: "Service",
                    value: current.service.map(|s| s.as_str()).unwrap_or_default(),
                    options: service_options(),
                    onchange: move |evt: Event<FormData>| {
                        query.write().service = parse_choice(&evt.value(), ServiceType::parse);
                    },
                }
                if show_owner {
                    FormSelect {
                        label: "Owner",
                        value: current.owner.clone().unwrap_or_default(),
                        options: owner_options(&owners),
                        onchange: move |evt: Event<FormData>| {
                            let value = evt.value();
                            query.write().owner = if value.is_empty() { None } else { Some(value) };
                        },
                    }
                }
                if !current.is_empty_for(role) {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| query.set(CaseQuery::default()),
                        "Clear"
                    }
                }
            }
        }
    }
}
