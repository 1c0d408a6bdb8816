use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;

use crate::models::{NotificationError, SmsMessage};

/// Client for the SMS gateway's REST API. One delivery attempt per call,
/// account-sid/auth-token basic authentication, form-encoded payload.
pub struct SmsSender {
    client: Client,
    api_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
    configured: bool,
}

impl SmsSender {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.sms_api_url.clone(),
            account_sid: config.sms_account_sid.clone(),
            auth_token: config.sms_auth_token.clone(),
            from_number: config.sms_from_number.clone(),
            configured: config.is_sms_configured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Single delivery attempt. An unconfigured transport fails immediately
    /// without touching the network.
    pub async fn send(&self, message: &SmsMessage) -> Result<(), NotificationError> {
        if !self.configured {
            return Err(NotificationError::NotConfigured);
        }

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        );
        debug!("Sending SMS to {} via {}", message.to, url);

        let params = [
            ("To", message.to.as_str()),
            ("From", self.from_number.as_str()),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("SMS gateway rejected message to {}: {} - {}", message.to, status, body);
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        info!("SMS sent to {}", message.to);
        Ok(())
    }
}
