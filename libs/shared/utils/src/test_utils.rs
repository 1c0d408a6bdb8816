use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;

pub struct TestConfig {
    pub document_store_url: String,
    pub document_store_api_key: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub sms_api_url: String,
    pub sms_account_sid: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            document_store_url: "http://localhost:27080".to_string(),
            document_store_api_key: "test-store-key".to_string(),
            mail_api_url: "http://localhost:8025".to_string(),
            mail_api_key: "test-mail-key".to_string(),
            sms_api_url: "http://localhost:8026".to_string(),
            sms_account_sid: "ACtest".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            document_store_url: self.document_store_url.clone(),
            document_store_api_key: self.document_store_api_key.clone(),
            document_store_data_source: "test-cluster".to_string(),
            document_store_database: "healthconnect-test".to_string(),
            mail_api_url: self.mail_api_url.clone(),
            mail_api_key: self.mail_api_key.clone(),
            mail_from_address: "noreply@healthconnect.example".to_string(),
            sms_api_url: self.sms_api_url.clone(),
            sms_account_sid: self.sms_account_sid.clone(),
            sms_auth_token: "test-sms-token".to_string(),
            sms_from_number: "+15550000001".to_string(),
            port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }

    /// Config whose notification channels are disabled, for exercising the
    /// not-configured degradation paths.
    pub fn without_notifications(&self) -> AppConfig {
        let mut config = self.to_app_config();
        config.mail_api_url = String::new();
        config.mail_api_key = String::new();
        config.mail_from_address = String::new();
        config.sms_api_url = String::new();
        config.sms_account_sid = String::new();
        config.sms_auth_token = String::new();
        config.sms_from_number = String::new();
        config
    }
}

/// Canned document-store data API bodies for wiremock.
pub struct MockStoreResponses;

impl MockStoreResponses {
    pub fn insert_one_response() -> Value {
        json!({ "insertedId": Uuid::new_v4().to_string() })
    }

    pub fn find_one_response(document: Value) -> Value {
        json!({ "document": document })
    }

    pub fn find_one_empty() -> Value {
        json!({ "document": null })
    }

    pub fn find_response(documents: Vec<Value>) -> Value {
        json!({ "documents": documents })
    }

    pub fn user_document(username: &str, email: &str, password_hash: &str) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "username": username,
            "email": email,
            "passwordHash": password_hash,
            "createdAt": Utc::now(),
        })
    }

    pub fn doctor_document(name: &str, speciality: &str) -> Value {
        json!({
            "name": name,
            "speciality": speciality,
            "experience": "10+ years",
            "description": format!("{} at HealthConnect+", speciality),
            "available": true,
        })
    }

    pub fn medical_report_document(email: &str, title: &str, report_type: &str) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "patientName": "Test Patient",
            "email": email,
            "title": title,
            "reportType": report_type,
            "date": "2025-01-05",
            "content": "<h3>Report</h3><p>All values within normal range.</p>",
            "createdAt": Utc::now(),
        })
    }
}
