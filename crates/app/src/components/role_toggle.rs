use dioxus::prelude::*;
use shared_types::{ViewerRole, ALL_ROLES};
use shared_ui::components::{Button, ButtonSize, ButtonVariant};

/// Replace the current viewer role.
///
/// The only writer of the role cell. Switching never touches the case list;
/// readers of the signal recompute their view on the next render.
pub fn switch_role(mut role: Signal<ViewerRole>, next: ViewerRole) {
    let previous = *role.peek();
    if previous == next {
        return;
    }
    tracing::info!(from = %previous, to = %next, "viewer role changed");
    role.set(next);
}

/// Flip to the other role.
pub fn toggle_role(role: Signal<ViewerRole>) {
    let next = role.peek().toggled();
    switch_role(role, next);
}

/// "Viewing as" toggle between the officer and supervisor views.
///
/// Props:
/// - `role`: the writable role cell owned by the app root
///
/// ```rust,ignore
/// let role = use_signal(|| ViewerRole::Officer);
/// rsx! { RoleToggle { role: role } }
/// ```
#[component]
pub fn RoleToggle(role: Signal<ViewerRole>) -> Element {
    let current = role();

    rsx! {
        div { class: "role-toggle",
            span { class: "role-toggle-label", "Viewing as" }
            div {
                class: "role-toggle-group",
                role: "group",
                onkeydown: move |evt: KeyboardEvent| {
                    if matches!(evt.key(), Key::ArrowLeft | Key::ArrowRight) {
                        toggle_role(role);
                    }
                },
                for option in ALL_ROLES.iter().copied() {
                    Button {
                        key: "{option}",
                        size: ButtonSize::Small,
                        variant: if option == current { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                        pressed: option == current,
                        onclick: move |_| switch_role(role, option),
                        {option.toggle_label()}
                    }
                }
            }
        }
    }
}
