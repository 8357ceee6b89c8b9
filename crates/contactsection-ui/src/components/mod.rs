//! Reusable UI components for the contact section
//!
//! All components use the neon-on-dark palette from the global styles.

mod button;
mod input;
mod status_banner;

pub use button::*;
pub use input::*;
pub use status_banner::*;
