//! UI Components for the contact section.

mod contact_form;
mod contact_info;
mod contact_section;
mod particles;

pub use contact_form::ContactFormPanel;
pub use contact_info::ContactInfo;
pub use contact_section::ContactSection;
pub use particles::Particles;
