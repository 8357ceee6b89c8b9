//! Submit Button
//!
//! Gradient neon button that sends the contact form. It is disabled and
//! relabelled while a request is in flight.

use dioxus::prelude::*;

/// CSS class of the submit button
pub const SUBMIT_BUTTON_CLASS: &str = "submit-button";

/// Label of the contact form's submit button
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Sending..."
    } else {
        "Send Message"
    }
}

/// Form submit button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SubmitButton { submitting: form.read().is_submitting() }
/// }
/// ```
#[component]
pub fn SubmitButton(submitting: bool) -> Element {
    let label = submit_label(submitting);

    rsx! {
        button {
            class: SUBMIT_BUTTON_CLASS,
            r#type: "submit",
            disabled: submitting,
            "{label}"
            span { class: "send-icon", "\u{27A4}" }
        }
    }
}
