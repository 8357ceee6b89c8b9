//! Configuration context for the contact section.
//!
//! Provides the runtime configuration and the HTTP client to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! ContactPage { config }
//!
//! // In child components
//! let client = use_contact_client();
//! ```

use contactsection_core::{ContactClient, ContactConfig};
use dioxus::prelude::*;

/// Get the configuration for the application.
/// Uses the global config set from command line args.
pub fn get_config() -> Option<ContactConfig> {
    crate::get_config()
}

/// Hook to access the contact configuration from context.
pub fn use_contact_config() -> ContactConfig {
    use_context::<ContactConfig>()
}

/// Hook to access the client bound to the contact endpoint.
pub fn use_contact_client() -> ContactClient {
    use_context::<ContactClient>()
}
