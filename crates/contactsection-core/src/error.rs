//! Error types for the contact section

use thiserror::Error;

use crate::types::FormField;

/// Main error type for contact section operations
#[derive(Error, Debug)]
pub enum ContactError {
    /// A required field was empty when the form was submitted
    #[error("Missing required field: {0}")]
    MissingField(FormField),

    /// A submission is already in flight
    #[error("A message is already being sent")]
    AlreadySubmitting,

    /// The endpoint answered with a non-success status
    #[error("Contact endpoint rejected the message with status {0}")]
    Rejected(u16),

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be turned into an endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Link data file could not be parsed
    #[error("Invalid link data: {0}")]
    LinkData(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ContactError
pub type ContactResult<T> = Result<T, ContactError>;
