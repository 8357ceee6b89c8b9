//! Core types for the contact section

use serde::{Deserialize, Serialize};

/// One of the three contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// All fields in display (and validation) order
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// HTML `id`/`name` attribute, also the JSON key
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    /// Input type attribute; the message field renders as a textarea
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Name | FormField::Message => "text",
            FormField::Email => "email",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Your message here...",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The three-field contact form data
///
/// Serializes to `{"name": ..., "email": ..., "message": ...}`, which is
/// exactly the body POSTed to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// First empty field in display order, if any
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result indicator for the last submit attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet
    #[default]
    None,
    Success,
    Error,
}

impl SubmissionStatus {
    /// User-facing message, if this status shows one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::None => None,
            SubmissionStatus::Success => {
                Some("Message sent successfully! I'll get back to you soon.")
            }
            SubmissionStatus::Error => Some("Something went wrong. Please try again later."),
        }
    }
}
