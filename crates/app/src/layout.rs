use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdCreditCard, LdFileText, LdLayoutDashboard};
use dioxus_free_icons::Icon;
use shared_types::{PortalSettings, ViewerRole};
use shared_ui::components::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardTitle};

use crate::components::RoleToggle;

/// Page chrome: header with the role toggle, a sidebar and the main column.
///
/// Sidebar navigation entries are static; only Dashboard exists.
#[component]
pub fn LayoutShell(role: Signal<ViewerRole>, children: Element) -> Element {
    let settings = use_context::<PortalSettings>();

    rsx! {
        div { class: "portal-shell",
            header { class: "portal-header",
                div { class: "portal-header-inner",
                    div { class: "portal-brand",
                        span { class: "portal-title", "{settings.title}" }
                        span { class: "portal-subtitle", "{settings.subtitle}" }
                    }
                    RoleToggle { role: role }
                }
            }

            div { class: "portal-body",
                aside { class: "portal-aside",
                    nav { class: "portal-nav",
                        div { class: "portal-nav-heading", "Navigation" }
                        Button { variant: ButtonVariant::Ghost, class: "portal-nav-item active",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 14, height: 14 }
                            span { "Dashboard" }
                            Badge { variant: BadgeVariant::Primary, "Default" }
                        }
                        Button { variant: ButtonVariant::Ghost, class: "portal-nav-item",
                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 14, height: 14 }
                            span { "Applications" }
                        }
                        Button { variant: ButtonVariant::Ghost, class: "portal-nav-item",
                            Icon::<LdCreditCard> { icon: LdCreditCard, width: 14, height: 14 }
                            span { "Payments" }
                        }
                        Button { variant: ButtonVariant::Ghost, class: "portal-nav-item",
                            Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                            span { "Documents" }
                        }
                    }
                    ScopeNote { role: role() }
                }

                main { class: "portal-main", {children} }
            }
        }
    }
}

/// "What you see here" card explaining the current role's scope.
#[component]
fn ScopeNote(role: ViewerRole) -> Element {
    let view = role.view();

    rsx! {
        Card { class: "scope-note",
            CardTitle { "What you see here" }
            CardContent {
                p {
                    "{view.scope_lead}"
                    span { class: "scope-note-emphasis", "{view.scope_emphasis}" }
                    "{view.scope_tail}"
                }
            }
        }
    }
}
