//! Contact Section UI Components
//!
//! Dioxus widgets for the contact form: labelled inputs, the submit button
//! and the status banner. Colours come from the CSS custom properties in
//! the application's global stylesheet:
//! - **Cyan (#00f5ff)**: focus rings, links, primary accents
//! - **Violet (#b14aed)**: gradients and secondary accents
//! - **Green (#39ff14)**: success state

pub mod components;

pub use components::*;
