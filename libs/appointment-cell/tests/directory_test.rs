use std::sync::Arc;

use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::services::directory::DoctorDirectoryService;
use shared_database::DocumentStoreClient;
use shared_utils::test_utils::{MockStoreResponses, TestConfig};

#[tokio::test]
async fn directory_lists_only_available_doctors() {
    let mock_server = MockServer::start().await;

    let documents = vec![
        MockStoreResponses::doctor_document("Dr. Aditi Sharma", "Cardiologist"),
        MockStoreResponses::doctor_document("Dr. Ravi Kumar", "Dermatologist"),
    ];

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_string_contains("doctors"))
        .and(body_string_contains("\"available\":true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockStoreResponses::find_response(documents)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.document_store_url = mock_server.uri();

    let directory = DoctorDirectoryService::with_store(Arc::new(DocumentStoreClient::new(&config)));
    let doctors = directory.list_available().await.unwrap();

    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].name, "Dr. Aditi Sharma");
    assert_eq!(doctors[0].speciality, "Cardiologist");
    assert!(doctors.iter().all(|d| d.available));
}
