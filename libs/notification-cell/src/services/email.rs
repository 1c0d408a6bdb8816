use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{EmailMessage, NotificationError};

/// Client for the transactional mail HTTP API. Performs exactly one delivery
/// attempt per call; retries are the caller's decision (the booking workflow
/// never retries).
pub struct EmailSender {
    client: Client,
    api_url: String,
    api_key: String,
    from_address: String,
    configured: bool,
}

impl EmailSender {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from_address: config.mail_from_address.clone(),
            configured: config.is_email_configured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Single delivery attempt. An unconfigured transport fails immediately
    /// without touching the network.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), NotificationError> {
        if !self.configured {
            return Err(NotificationError::NotConfigured);
        }

        let url = format!("{}/messages", self.api_url);
        debug!("Sending email to {} via {}", message.to, url);

        let request_body = json!({
            "from": self.from_address,
            "to": message.to,
            "subject": message.subject,
            "html": message.html_body,
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Mail API rejected message to {}: {} - {}", message.to, status, body);
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("Email sent to {}", message.to);
        Ok(())
    }
}
