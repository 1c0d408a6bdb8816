use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use report_cell::models::{ReportError, ReportType};
use report_cell::services::report::MedicalReportService;
use shared_database::DocumentStoreClient;
use shared_utils::test_utils::{MockStoreResponses, TestConfig};

fn service_for(mock_server: &MockServer) -> MedicalReportService {
    let mut config = TestConfig::default().to_app_config();
    config.document_store_url = mock_server.uri();
    MedicalReportService::with_store(Arc::new(DocumentStoreClient::new(&config)))
}

#[tokio::test]
async fn listing_filters_by_the_patients_email() {
    let mock_server = MockServer::start().await;

    let documents = vec![
        MockStoreResponses::medical_report_document("jane@x.com", "Blood Test Results", "lab"),
        MockStoreResponses::medical_report_document("jane@x.com", "Chest X-Ray Report", "xray"),
    ];

    Mock::given(method("POST"))
        .and(path("/action/find"))
        .and(body_string_contains("medical_reports"))
        .and(body_string_contains("jane@x.com"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockStoreResponses::find_response(documents)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let reports = service.list_for_patient("jane@x.com").await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].title, "Blood Test Results");
    assert_eq!(reports[0].report_type, ReportType::Lab);
    assert_eq!(reports[1].report_type, ReportType::Xray);
}

#[tokio::test]
async fn fetching_a_report_checks_ownership() {
    let mock_server = MockServer::start().await;

    let report_id = Uuid::new_v4();
    let mut document =
        MockStoreResponses::medical_report_document("someone-else@x.com", "Surgery Notes", "surgery");
    document["id"] = json!(report_id);

    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MockStoreResponses::find_one_response(document)),
        )
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);

    // A foreign report reads as missing, not as forbidden.
    let result = service.get_for_patient(report_id, "jane@x.com").await;
    assert_matches!(result, Err(ReportError::NotFound));

    let owned = service
        .get_for_patient(report_id, "someone-else@x.com")
        .await
        .unwrap();
    assert_eq!(owned.title, "Surgery Notes");
}

#[tokio::test]
async fn missing_report_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/action/findOne"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MockStoreResponses::find_one_empty()))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let result = service.get_for_patient(Uuid::new_v4(), "jane@x.com").await;

    assert_matches!(result, Err(ReportError::NotFound));
}
