//! Contact Section Core Library
//!
//! Headless logic behind the site's contact section: the form state and
//! its submission lifecycle, the HTTP client for the contact endpoint, the
//! decorative particle field and the static contact details.
//!
//! ## Quick Start
//!
//! ```ignore
//! use contactsection_core::{ContactClient, ContactForm, FormField, contact_endpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ContactClient::new(contact_endpoint("http://localhost:3000")?);
//!
//!     let mut form = ContactForm::new();
//!     form.update(FormField::Name, "Ada");
//!     form.update(FormField::Email, "ada@example.com");
//!     form.update(FormField::Message, "Hello!");
//!
//!     let status = client.submit(&mut form).await?;
//!     println!("{:?}", status);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod links;
pub mod particles;
pub mod types;

// Re-exports
pub use client::ContactClient;
pub use config::{contact_endpoint, ContactConfig, CONTACT_PATH, DEFAULT_BASE_URL};
pub use error::{ContactError, ContactResult};
pub use form::ContactForm;
pub use links::ContactLinks;
pub use particles::{Particle, ParticleConfig, ParticleField, DEFAULT_PARTICLE_COUNT};
pub use types::*;

pub use reqwest::Url;
