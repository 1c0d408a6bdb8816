use std::sync::Arc;

use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::DocumentStoreClient;

use crate::models::{MedicalReport, ReportError};

const REPORTS_COLLECTION: &str = "medical_reports";

pub struct MedicalReportService {
    store: Arc<DocumentStoreClient>,
}

impl MedicalReportService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: Arc::new(DocumentStoreClient::new(config)),
        }
    }

    pub fn with_store(store: Arc<DocumentStoreClient>) -> Self {
        Self { store }
    }

    /// All reports belonging to `email`, newest first.
    pub async fn list_for_patient(&self, email: &str) -> Result<Vec<MedicalReport>, ReportError> {
        debug!("Listing medical reports for {}", email);

        self.store
            .find(
                REPORTS_COLLECTION,
                json!({ "email": email }),
                Some(json!({ "createdAt": -1 })),
                None,
            )
            .await
            .map_err(|e| ReportError::DatabaseError(e.to_string()))
    }

    /// A single report, only if it belongs to `email`. A report owned by
    /// someone else looks exactly like a missing one.
    pub async fn get_for_patient(
        &self,
        report_id: Uuid,
        email: &str,
    ) -> Result<MedicalReport, ReportError> {
        let report: Option<MedicalReport> = self
            .store
            .find_one(REPORTS_COLLECTION, json!({ "id": report_id }))
            .await
            .map_err(|e| ReportError::DatabaseError(e.to_string()))?;

        match report {
            Some(report) if report.email == email => Ok(report),
            _ => Err(ReportError::NotFound),
        }
    }
}
