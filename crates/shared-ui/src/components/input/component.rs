use dioxus::prelude::*;

/// Text input with an optional label and clear button.
///
/// When `on_clear` is set and the input holds text, a small clear button is
/// rendered inside the field.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_clear: Option<EventHandler<()>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let show_clear = on_clear.is_some() && !value.is_empty();
    let accessible_name = if label.is_empty() { placeholder.clone() } else { label.clone() };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            div { class: "input-field",
                input {
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    aria_label: accessible_name,
                    oninput: move |evt| on_input.call(evt),
                    ..merged,
                }
                if show_clear {
                    button {
                        r#type: "button",
                        class: "input-clear",
                        aria_label: "Clear",
                        onclick: move |_| {
                            if let Some(handler) = &on_clear {
                                handler.call(());
                            }
                        },
                        "×"
                    }
                }
            }
        }
    }
}
