use contactsection_core::{ContactClient, ContactConfig};
use dioxus::prelude::*;

use crate::components::ContactSection;
use crate::context::get_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the contact configuration.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_config);

    let content = match config {
        Some(config) => rsx! { ContactPage { config } },
        None => rsx! {
            p { class: "config-error", "Contact configuration is unavailable." }
        },
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {content}
    }
}

/// Page wrapper that puts the configuration and client into context.
#[component]
fn ContactPage(config: ContactConfig) -> Element {
    use_context_provider(|| ContactClient::new(config.endpoint.clone()));
    use_context_provider(|| config);

    rsx! {
        main { class: "page",
            ContactSection {}
        }
    }
}
