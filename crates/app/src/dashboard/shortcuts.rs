use dioxus::prelude::*;
use shared_types::{Shortcut, ViewerRole};
use shared_ui::components::{Badge, BadgeVariant, Card, CardAction, CardContent, CardHeader, CardTitle};

/// Role-labelled quick-action shortcuts. The cards have no action yet.
#[component]
pub fn QuickActions(role: ViewerRole) -> Element {
    let view = role.view();

    rsx! {
        Card { class: "quick-actions",
            CardHeader {
                CardTitle { "Quick actions" }
                CardAction {
                    Badge { variant: BadgeVariant::Secondary, "{role.short_label()} view" }
                }
            }
            CardContent {
                div { class: "shortcut-grid",
                    for shortcut in view.shortcuts.iter().copied() {
                        ShortcutCard { key: "{shortcut.title}", shortcut: shortcut }
                    }
                }
            }
        }
    }
}

#[component]
fn ShortcutCard(shortcut: Shortcut) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if shortcut.primary { "shortcut-card primary" } else { "shortcut-card" },
            div { class: "shortcut-title", "{shortcut.title}" }
            p { class: "shortcut-description", "{shortcut.description}" }
            span { class: "shortcut-open", "Open" }
        }
    }
}
