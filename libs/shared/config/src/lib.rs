use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub document_store_url: String,
    pub document_store_api_key: String,
    pub document_store_data_source: String,
    pub document_store_database: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from_address: String,
    pub sms_api_url: String,
    pub sms_account_sid: String,
    pub sms_auth_token: String,
    pub sms_from_number: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            document_store_url: env::var("DOCUMENT_STORE_URL")
                .unwrap_or_else(|_| {
                    warn!("DOCUMENT_STORE_URL not set, using empty value");
                    String::new()
                }),
            document_store_api_key: env::var("DOCUMENT_STORE_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("DOCUMENT_STORE_API_KEY not set, using empty value");
                    String::new()
                }),
            document_store_data_source: env::var("DOCUMENT_STORE_DATA_SOURCE")
                .unwrap_or_else(|_| {
                    warn!("DOCUMENT_STORE_DATA_SOURCE not set, using default");
                    "healthconnect-cluster".to_string()
                }),
            document_store_database: env::var("DOCUMENT_STORE_DATABASE")
                .unwrap_or_else(|_| {
                    warn!("DOCUMENT_STORE_DATABASE not set, using default");
                    "healthconnect".to_string()
                }),
            mail_api_url: env::var("MAIL_API_URL").unwrap_or_default(),
            mail_api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
            mail_from_address: env::var("MAIL_FROM_ADDRESS").unwrap_or_default(),
            sms_api_url: env::var("SMS_API_URL").unwrap_or_default(),
            sms_account_sid: env::var("SMS_ACCOUNT_SID").unwrap_or_default(),
            sms_auth_token: env::var("SMS_AUTH_TOKEN").unwrap_or_default(),
            sms_from_number: env::var("SMS_FROM_NUMBER").unwrap_or_default(),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_configured() {
            warn!("Document store not fully configured - missing environment variables");
        }
        if !config.is_email_configured() {
            warn!("Email transport not configured - email notifications disabled");
        }
        if !config.is_sms_configured() {
            warn!("SMS transport not configured - SMS notifications disabled");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.document_store_url.is_empty() && !self.document_store_api_key.is_empty()
    }

    pub fn is_email_configured(&self) -> bool {
        !self.mail_api_url.is_empty()
            && !self.mail_api_key.is_empty()
            && !self.mail_from_address.is_empty()
    }

    pub fn is_sms_configured(&self) -> bool {
        !self.sms_api_url.is_empty()
            && !self.sms_account_sid.is_empty()
            && !self.sms_auth_token.is_empty()
            && !self.sms_from_number.is_empty()
    }
}
