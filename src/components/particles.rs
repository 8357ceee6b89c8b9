//! Particle Background Component
//!
//! Scatters glowing dots behind the contact section. The field is generated
//! once when the component mounts and cleared when it is dropped.

use contactsection_core::{Particle, ParticleField};
use dioxus::prelude::*;

use crate::context::use_contact_config;

/// Decorative particle layer
///
/// Renders one absolutely positioned `div.particle` per particle inside
/// `div.particles-container`. The `float` keyframes live in the global
/// stylesheet.
#[component]
pub fn Particles() -> Element {
    let config = use_contact_config();
    let mut field = use_signal(ParticleField::new);

    // Mount once
    use_hook(move || {
        field.write().mount(&config.particles, &mut rand::rng());
    });

    use_drop(move || {
        if let Ok(mut field) = field.try_write() {
            field.unmount();
        }
    });

    let styles: Vec<String> = field.read().particles().iter().map(Particle::style).collect();

    rsx! {
        div { class: "particles-container", "aria-hidden": "true",
            for (index, style) in styles.iter().enumerate() {
                div { key: "{index}", class: "particle", style: "{style}" }
            }
        }
    }
}
