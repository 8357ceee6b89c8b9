//! Runtime configuration for the contact section.

use reqwest::Url;

use crate::error::{ContactError, ContactResult};
use crate::links::ContactLinks;
use crate::particles::ParticleConfig;

/// Path of the contact endpoint, relative to the site origin
pub const CONTACT_PATH: &str = "/api/contact";

/// Origin used when none is configured (local dev server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Resolve the contact endpoint against a site origin.
///
/// The path is absolute, so any path already on `base_url` is replaced.
pub fn contact_endpoint(base_url: &str) -> ContactResult<Url> {
    let base = Url::parse(base_url)
        .map_err(|e| ContactError::InvalidEndpoint(format!("{}: {}", base_url, e)))?;
    if base.cannot_be_a_base() {
        return Err(ContactError::InvalidEndpoint(base_url.to_string()));
    }
    base.join(CONTACT_PATH)
        .map_err(|e| ContactError::InvalidEndpoint(format!("{}: {}", base_url, e)))
}

/// Everything the contact section needs at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub endpoint: Url,
    pub links: ContactLinks,
    pub particles: ParticleConfig,
}

impl ContactConfig {
    pub fn new(
        base_url: &str,
        links: ContactLinks,
        particles: ParticleConfig,
    ) -> ContactResult<Self> {
        Ok(Self {
            endpoint: contact_endpoint(base_url)?,
            links,
            particles,
        })
    }

    /// Default origin, bundled link data, default particle field
    pub fn bundled() -> ContactResult<Self> {
        Self::new(DEFAULT_BASE_URL, ContactLinks::bundled()?, ParticleConfig::default())
    }
}
