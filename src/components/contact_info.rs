//! Contact Info Column
//!
//! Email, phone, postal address and an embedded map.

use dioxus::prelude::*;

use crate::context::use_contact_config;

#[component]
pub fn ContactInfo() -> Element {
    let links = use_contact_config().links;
    let mailto = links.mailto_href();
    let tel = links.tel_href();

    rsx! {
        div { class: "contact-info fade-in-left",
            h3 { "Let's Connect" }
            p {
                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
            }

            div { class: "contact-links",
                a { class: "contact-link", href: "{mailto}",
                    span { class: "contact-icon", "\u{2709}" }
                    span { "{links.email}" }
                }
                a {
                    class: "contact-link",
                    href: "{tel}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { class: "contact-icon", "\u{260E}" }
                    span { "Call {links.phone}" }
                }
                div { class: "contact-link",
                    span { class: "contact-icon", "\u{2302}" }
                    span { "{links.address}" }
                }
                iframe {
                    class: "map",
                    src: "{links.map_url}",
                    title: "Map",
                    "allowfullscreen": "true",
                    "loading": "lazy",
                }
            }
        }
    }
}
