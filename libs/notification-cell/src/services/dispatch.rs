use tracing::{info, warn};

use shared_config::AppConfig;

use crate::models::{EmailMessage, NotificationError, SmsMessage};
use crate::services::email::EmailSender;
use crate::services::sms::SmsSender;

/// Best-effort fan-out over both notification channels. Every failure is
/// reduced to a `false` outcome for the caller; an unconfigured channel and a
/// transport failure differ only in how they are logged.
pub struct NotificationDispatcher {
    email: EmailSender,
    sms: SmsSender,
}

impl NotificationDispatcher {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            email: EmailSender::new(config),
            sms: SmsSender::new(config),
        }
    }

    pub fn with_senders(email: EmailSender, sms: SmsSender) -> Self {
        Self { email, sms }
    }

    pub async fn send_email(&self, message: EmailMessage) -> bool {
        match self.email.send(&message).await {
            Ok(()) => true,
            Err(NotificationError::NotConfigured) => {
                info!("Email channel not configured, skipping delivery to {}", message.to);
                false
            }
            Err(e) => {
                warn!("Email delivery to {} failed: {}", message.to, e);
                false
            }
        }
    }

    pub async fn send_sms(&self, message: SmsMessage) -> bool {
        match self.sms.send(&message).await {
            Ok(()) => true,
            Err(NotificationError::NotConfigured) => {
                info!("SMS channel not configured, skipping delivery to {}", message.to);
                false
            }
            Err(e) => {
                warn!("SMS delivery to {} failed: {}", message.to, e);
                false
            }
        }
    }
}
