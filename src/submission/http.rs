//! Delivery of form submissions to the configured endpoint

use async_trait::async_trait;
use reqwest::Method;
use std::time::Duration;

use crate::error::SubmissionError;

/// Sends the collected form fields to the form's action
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver `fields` to `action`; any non-success outcome is an error
    async fn submit(
        &self,
        action: &str,
        method: &str,
        fields: &[(String, String)],
    ) -> Result<(), SubmissionError>;
}

/// Posts form-encoded data over HTTP and only looks at the status
pub struct HttpSubmitter {
    client: reqwest::Client,
}

impl HttpSubmitter {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build a submitter whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Failed(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Default for HttpSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(
        &self,
        action: &str,
        method: &str,
        fields: &[(String, String)],
    ) -> Result<(), SubmissionError> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes())
            .map_err(|e| SubmissionError::Failed(format!("invalid method {:?}: {}", method, e)))?;

        let request = self
            .client
            .request(method.clone(), action)
            .header(reqwest::header::ACCEPT, "application/json");
        let request = if method == Method::GET {
            request.query(fields)
        } else {
            request.form(fields)
        };

        tracing::debug!("{} {} ({} fields)", method, action, fields.len());
        let response = request
            .send()
            .await
            .map_err(|e| SubmissionError::Failed(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Failed(format!("endpoint returned {}", status)))
        }
    }
}
