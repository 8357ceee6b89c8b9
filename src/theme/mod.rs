//! Visual theme for the contact section.

mod styles;

pub use styles::GLOBAL_STYLES;
