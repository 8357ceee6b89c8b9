//! Contact Section
//!
//! Full-width page section: particle background, title, contact details on
//! the left and the form on the right.

use dioxus::prelude::*;

use super::{ContactFormPanel, ContactInfo, Particles};

#[component]
pub fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact section",
            Particles {}

            div { class: "container",
                h2 { class: "section-title fade-in-up", "Contact Me" }

                div { class: "contact-container",
                    ContactInfo {}
                    ContactFormPanel {}
                }
            }
        }
    }
}
