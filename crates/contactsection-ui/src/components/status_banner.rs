//! Submission status banner
//!
//! Shows the outcome of the last submit attempt under the form.

use contactsection_core::SubmissionStatus;
use dioxus::prelude::*;

/// CSS class for a status, `None` when nothing is shown
pub fn status_class(status: SubmissionStatus) -> Option<&'static str> {
    match status {
        SubmissionStatus::None => None,
        SubmissionStatus::Success => Some("success-message"),
        SubmissionStatus::Error => Some("error-message"),
    }
}

/// Renders the success or error message, or nothing
#[component]
pub fn StatusBanner(status: SubmissionStatus) -> Element {
    match (status_class(status), status.message()) {
        (Some(class), Some(message)) => rsx! {
            div { class: "{class}", role: "status", "{message}" }
        },
        _ => rsx! {},
    }
}
