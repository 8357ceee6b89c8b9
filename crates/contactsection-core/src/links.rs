//! Static contact details shown next to the form.
//!
//! The JSON format uses the site's link data keys
//! (`gamil`, `call`, `address`, `map`); descriptive aliases are accepted too.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContactResult;

const BUNDLED_LINKS: &str = include_str!("../data/link_data.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    #[serde(rename = "gamil", alias = "email")]
    pub email: String,
    #[serde(rename = "call", alias = "phone")]
    pub phone: String,
    pub address: String,
    /// Embed URL for the map iframe
    #[serde(rename = "map", alias = "map_url")]
    pub map_url: String,
}

impl ContactLinks {
    /// Link data compiled into the binary
    pub fn bundled() -> ContactResult<Self> {
        Self::from_json(BUNDLED_LINKS)
    }

    pub fn from_json(json: &str) -> ContactResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ContactResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading link data from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        let number: String = self.phone.split_whitespace().collect();
        format!("tel:{}", number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_links_parse() {
        let links = ContactLinks::bundled().unwrap();
        assert!(links.email.contains('@'));
        assert!(!links.phone.is_empty());
        assert!(!links.address.is_empty());
        assert!(links.map_url.starts_with("https://"));
    }

    #[test]
    fn test_site_keys() {
        let links = ContactLinks::from_json(
            r#"{"gamil": "me@example.com", "call": "+1 555 0100", "address": "Somewhere", "map": "https://maps.example/embed"}"#,
        )
        .unwrap();
        assert_eq!(links.email, "me@example.com");
        assert_eq!(links.phone, "+1 555 0100");
        assert_eq!(links.map_url, "https://maps.example/embed");
    }

    #[test]
    fn test_alias_keys() {
        let links = ContactLinks::from_json(
            r#"{"email": "me@example.com", "phone": "0100", "address": "Somewhere", "map_url": "https://maps.example/embed"}"#,
        )
        .unwrap();
        assert_eq!(links.email, "me@example.com");
        assert_eq!(links.phone, "0100");
    }

    #[test]
    fn test_missing_key_is_error() {
        let result = ContactLinks::from_json(r#"{"gamil": "me@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_hrefs() {
        let links = ContactLinks {
            email: "me@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            address: String::new(),
            map_url: String::new(),
        };
        assert_eq!(links.mailto_href(), "mailto:me@example.com");
        assert_eq!(links.tel_href(), "tel:+15550100");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"gamil": "file@example.com", "call": "1", "address": "A", "map": "https://m"}}"#
        )
        .unwrap();

        let links = ContactLinks::load(file.path()).unwrap();
        assert_eq!(links.email, "file@example.com");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ContactLinks::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(crate::ContactError::Io(_))));
    }
}
