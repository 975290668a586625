use dioxus::prelude::*;

/// Search/filter bar: a title block on the left and the controls passed as
/// children in a flex row on the right.
#[component]
pub fn SearchBar(
    title: String,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-bar-heading",
                h2 { class: "search-bar-title", "{title}" }
                if !description.is_empty() {
                    p { class: "search-bar-description", "{description}" }
                }
            }
            div { class: "search-bar-controls",
                {children}
            }
        }
    }
}
