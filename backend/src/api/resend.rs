use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::notification::NotificationConfig;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Invalid request body: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    // The provider's own error detail is logged, never returned
    #[error("Failed to send email")]
    DispatchFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError>;
}

/// Client for the Resend `POST /emails` endpoint.
pub struct ResendClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl EmailDispatcher for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Email API responded with {}: {}", status, detail);
            return Err(NotificationError::DispatchFailed);
        }

        tracing::debug!("Email '{}' accepted by provider", email.subject);
        Ok(())
    }
}
