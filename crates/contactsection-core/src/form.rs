//! Contact form submission state machine.
//!
//! Holds the three pieces of local state the contact section needs: the
//! field values, the in-flight flag and the status of the last attempt.
//! Submitting is split in two halves so the UI can await the request
//! between them:
//!
//! ```text
//! idle --begin_submit()--> submitting --finish(Ok)--> idle (Success, fields cleared)
//!                                     --finish(Err)-> idle (Error, fields kept)
//! ```

use crate::error::{ContactError, ContactResult};
use crate::types::{FormField, FormState, SubmissionStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: FormState,
    submitting: bool,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    pub fn field(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// True while a request is in flight; the submit control is disabled
    /// for exactly this window.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace one field's value. Ignored while a request is in flight,
    /// matching the locked inputs.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        if self.submitting {
            return;
        }
        self.fields.set(field, value);
    }

    /// Start a submission and return the payload to send.
    ///
    /// The status of the previous attempt stays visible until
    /// [`finish`](Self::finish) replaces it.
    pub fn begin_submit(&mut self) -> ContactResult<FormState> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.fields.first_missing() {
            return Err(ContactError::MissingField(field));
        }

        self.submitting = true;
        tracing::debug!("Sending contact message");
        Ok(self.fields.clone())
    }

    /// Apply the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, outcome: &ContactResult<()>) {
        match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.status = SubmissionStatus::Success;
                self.fields.clear();
            }
            Err(e) => {
                tracing::error!("Error sending message: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }
        self.submitting = false;
    }
}
