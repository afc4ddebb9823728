//! Delivery collaborators for contact submissions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiError,
    protocol::{ContactAck, ContactSubmission},
};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::ContactError;

pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);

#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAck, ContactError>;

    fn describe(&self) -> String;
}

/// Waits a fixed delay and acknowledges every submission.
#[derive(Debug, Clone)]
pub struct SimulatedContactGateway {
    delay: Duration,
}

impl SimulatedContactGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedContactGateway {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

#[async_trait]
impl ContactGateway for SimulatedContactGateway {
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAck, ContactError> {
        debug!(submission_id = %submission.id, delay_ms = self.delay.as_millis() as u64, "simulating contact delivery");
        tokio::time::sleep(self.delay).await;
        Ok(ContactAck::for_submission(submission))
    }

    fn describe(&self) -> String {
        format!("simulated ({} ms)", self.delay.as_millis())
    }
}

/// POSTs submissions as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct WebhookContactGateway {
    client: Client,
    endpoint: Url,
}

impl WebhookContactGateway {
    pub fn new(endpoint: Url) -> Result<Self, ContactError> {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|err| ContactError::Delivery(format!("failed to build http client: {err}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn parse(endpoint: &str) -> Result<Self, ContactError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| ContactError::Delivery(format!("invalid endpoint '{endpoint}': {err}")))?;
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for WebhookContactGateway {
    async fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAck, ContactError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, "contact endpoint unreachable: {err}");
                ContactError::Delivery(format!("failed to reach contact endpoint: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(status = status.as_u16(), "failed to read error body: {err}");
                    String::new()
                }
            };
            let parsed = serde_json::from_str::<ApiError>(&body).ok();
            let message = match &parsed {
                Some(api_error) => api_error.message.clone(),
                None if body.trim().is_empty() => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
                None => body.trim().to_string(),
            };
            return Err(ContactError::Rejected {
                status: status.as_u16(),
                code: parsed.map(|api_error| api_error.code),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| ContactError::Delivery(format!("failed to read ack: {err}")))?;
        let ack = if bytes.iter().all(u8::is_ascii_whitespace) {
            ContactAck::for_submission(submission)
        } else {
            serde_json::from_slice::<ContactAck>(&bytes)
                .map_err(|err| ContactError::Delivery(format!("invalid ack payload: {err}")))?
        };
        if ack.submission_id != submission.id {
            return Err(ContactError::Delivery(format!(
                "ack references submission {} instead of {}",
                ack.submission_id, submission.id
            )));
        }
        info!(submission_id = %submission.id, endpoint = %self.endpoint, "contact delivered");
        Ok(ack)
    }

    fn describe(&self) -> String {
        format!("webhook ({})", self.endpoint)
    }
}
