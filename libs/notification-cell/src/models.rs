use serde::{Deserialize, Serialize};

/// Fully rendered email payload handed to the email sender.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Fully rendered SMS payload handed to the SMS sender.
#[derive(Debug, Clone)]
pub struct SmsMessage {
    pub to: String,
    pub body: String,
}

/// Per-channel delivery outcome reported back to the booking caller. A
/// failed channel never fails the booking; the record in the store is the
/// source of truth.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOutcome {
    pub email_sent: bool,
    pub sms_sent: bool,
}

impl NotificationOutcome {
    /// Human-readable confirmation line for the booking response. The
    /// booking itself succeeded in every branch.
    pub fn confirmation_message(&self, subject: &str) -> String {
        match (self.email_sent, self.sms_sent) {
            (true, true) => format!(
                "{} booked successfully! Confirmation sent via email and SMS.",
                subject
            ),
            (true, false) => format!("{} booked successfully! Confirmation sent via email.", subject),
            (false, true) => format!("{} booked successfully! Confirmation sent via SMS.", subject),
            (false, false) => format!("{} booked successfully!", subject),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport is not configured")]
    NotConfigured,

    #[error("transport request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("transport rejected message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}
