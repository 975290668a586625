use dioxus::prelude::*;

/// One entry of a [`FormSelect`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A themed native select for filter dropdowns.
///
/// Options are passed as data; the option whose value equals `value` is
/// marked selected.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    /// Accessible name for the select.
    #[props(default)]
    label: String,
    options: Vec<SelectOption>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            select {
                class: "form-select",
                aria_label: label,
                value: value.clone(),
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                for opt in options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
