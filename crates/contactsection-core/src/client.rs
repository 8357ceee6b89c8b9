//! HTTP client for the contact endpoint.
//!
//! One POST per submission, JSON body, no retries. Any 2xx response counts
//! as delivered and the response body is ignored.

use reqwest::Url;

use crate::error::{ContactError, ContactResult};
use crate::form::ContactForm;
use crate::types::{FormState, SubmissionStatus};

/// Sends contact messages to a fixed endpoint
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// POST the form as JSON.
    ///
    /// Non-2xx statuses map to [`ContactError::Rejected`], transport
    /// failures to [`ContactError::Http`].
    pub async fn send(&self, payload: &FormState) -> ContactResult<()> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!("Contact endpoint answered {}", status);
            Err(ContactError::Rejected(status.as_u16()))
        }
    }

    /// Run a whole submission against `form`: validate, send, apply outcome.
    ///
    /// Returns the resulting status. Only validation failures are returned
    /// as errors; request failures are folded into [`SubmissionStatus::Error`].
    pub async fn submit(&self, form: &mut ContactForm) -> ContactResult<SubmissionStatus> {
        let payload = form.begin_submit()?;
        let outcome = self.send(&payload).await;
        form.finish(&outcome);
        Ok(form.status())
    }
}
