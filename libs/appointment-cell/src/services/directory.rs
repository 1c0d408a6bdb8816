use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::DocumentStoreClient;

use crate::models::{AppointmentError, Doctor};

const DOCTORS_COLLECTION: &str = "doctors";

/// Read-only doctor directory backing the booking form's dropdown.
pub struct DoctorDirectoryService {
    store: Arc<DocumentStoreClient>,
}

impl DoctorDirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: Arc::new(DocumentStoreClient::new(config)),
        }
    }

    pub fn with_store(store: Arc<DocumentStoreClient>) -> Self {
        Self { store }
    }

    pub async fn list_available(&self) -> Result<Vec<Doctor>, AppointmentError> {
        debug!("Listing available doctors");

        self.store
            .find(
                DOCTORS_COLLECTION,
                json!({ "available": true }),
                Some(json!({ "name": 1 })),
                None,
            )
            .await
            .map_err(|e| AppointmentError::DatabaseError(e.to_string()))
    }
}
