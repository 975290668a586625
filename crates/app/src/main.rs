use dioxus::prelude::*;
use shared_types::{CaseSource, SampleCaseSource};

mod components;
mod config;
mod dashboard;
mod format_helpers;
mod layout;

use dashboard::{Dashboard, LoadError};
use layout::LayoutShell;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let rejected = config::load_portal_config();
    let level = config::log_level(config::portal_config());

    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("failed to initialise logger: {e}");
    }
    if let Some(err) = rejected {
        tracing::warn!(error = %err, "config.toml rejected, using defaults");
    }

    let settings = &config::portal_config().portal;
    tracing::info!(
        platform = client_platform(),
        default_role = %settings.default_role,
        "starting ownership portal"
    );

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let settings = use_context_provider(|| config::portal_config().portal.clone());
    let role = use_signal(|| settings.default_role);

    // Sample data is static, so load once per app lifetime.
    let cases = use_hook(|| {
        let loaded = SampleCaseSource.load_cases();
        match &loaded {
            Ok(cases) => tracing::info!(count = cases.len(), "sample cases loaded"),
            Err(err) => tracing::error!(error = %err, "sample cases rejected"),
        }
        loaded
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        LayoutShell { role: role,
            match cases {
                Ok(cases) => rsx! { Dashboard { cases: cases, role: role() } },
                Err(err) => rsx! { LoadError { message: err.friendly_message() } },
            }
        }
    }
}
