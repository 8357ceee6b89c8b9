//! Contact Form Panel
//!
//! The form column of the contact section: three required fields, the
//! submit button and the status banner.

use contactsection_core::{ContactForm, FormField};
use contactsection_ui::{Input, StatusBanner, SubmitButton, TextArea};
use dioxus::prelude::*;

use crate::context::use_contact_client;

/// Contact form bound to the configured endpoint
///
/// Submitting prevents the default navigation, sends the fields as JSON and
/// applies the outcome. The fields and the submit button stay disabled while
/// the request is in flight.
#[component]
pub fn ContactFormPanel() -> Element {
    let client = use_contact_client();
    let mut form = use_signal(ContactForm::new);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let payload = match form.write().begin_submit() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!("Submit ignored: {}", err);
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let outcome = client.send(&payload).await;
            form.write().finish(&outcome);
        });
    };

    let snapshot = form.read().clone();
    let submitting = snapshot.is_submitting();
    let status = snapshot.status();

    rsx! {
        form {
            class: "contact-form fade-in-right",
            onsubmit: handle_submit,

            Input {
                field: FormField::Name,
                value: snapshot.field(FormField::Name).to_string(),
                oninput: move |value: String| form.write().update(FormField::Name, value),
                disabled: submitting,
            }

            Input {
                field: FormField::Email,
                value: snapshot.field(FormField::Email).to_string(),
                oninput: move |value: String| form.write().update(FormField::Email, value),
                disabled: submitting,
            }

            TextArea {
                field: FormField::Message,
                value: snapshot.field(FormField::Message).to_string(),
                oninput: move |value: String| form.write().update(FormField::Message, value),
                rows: 12,
                disabled: submitting,
            }

            SubmitButton { submitting }

            StatusBanner { status }
        }
    }
}
