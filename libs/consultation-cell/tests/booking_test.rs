use std::sync::Arc;

use assert_matches::assert_matches;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use consultation_cell::models::{
    BookConsultationRequest, ConsultationError, ConsultationStatus, ConsultationType, PriceTable,
};
use consultation_cell::services::booking::ConsultationBookingService;
use consultation_cell::services::pricing::{ConsultationPricing, CONSULTATION_AMOUNT_CEILING};
use notification_cell::NotificationDispatcher;
use shared_database::DocumentStoreClient;
use shared_utils::test_utils::{MockStoreResponses, TestConfig};

fn request(consultation_type: &str) -> BookConsultationRequest {
    BookConsultationRequest {
        patient_name: "Arjun Mehta".to_string(),
        patient_email: "Arjun@Example.com".to_string(),
        patient_phone: "+91 98765 43210".to_string(),
        consultation_type: consultation_type.to_string(),
        preferred_date: Some("2025-02-01".to_string()),
        health_concern: "Persistent cough".to_string(),
        medical_history: None,
    }
}

/// Service with a wiremock store and notification channels disabled; the
/// tests here are about persistence and pricing, not transports.
fn service_for(store_server: &MockServer) -> ConsultationBookingService {
    let mut config = TestConfig::default().without_notifications();
    config.document_store_url = store_server.uri();

    ConsultationBookingService::with_dependencies(
        Arc::new(DocumentStoreClient::new(&config)),
        Arc::new(NotificationDispatcher::new(&config)),
        ConsultationPricing::default(),
    )
}

#[tokio::test]
async fn booking_persists_the_configured_amount_for_the_type() {
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/action/insertOne"))
        .and(body_string_contains("consultations"))
        .and(body_string_contains("\"amount\":299"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(MockStoreResponses::insert_one_response()),
        )
        .expect(1)
        .mount(&store_server)
        .await;

    let service = service_for(&store_server);
    let confirmation = service.book(request("scheduled")).await.unwrap();

    let consultation = &confirmation.consultation;
    assert_eq!(consultation.consultation_type, ConsultationType::Scheduled);
    assert_eq!(consultation.amount, 299);
    assert!(consultation.amount <= CONSULTATION_AMOUNT_CEILING);
    assert_eq!(consultation.status, ConsultationStatus::Pending);
    assert_eq!(consultation.patient_email, "arjun@example.com");
    assert!(consultation.consultation_id.starts_with("HC-"));
}

#[tokio::test]
async fn unknown_consultation_type_is_rejected_before_persistence() {
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&store_server)
        .await;

    let service = service_for(&store_server);
    let result = service.book(request("video-call")).await;

    let errors = match result {
        Err(ConsultationError::Validation(errors)) => errors,
        _ => panic!("Expected validation failure"),
    };
    assert!(errors.contains("consultationType"));
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let store_server = MockServer::start().await;

    let service = service_for(&store_server);

    let mut invalid = request("instant");
    invalid.patient_name = String::new();
    invalid.health_concern = "  ".to_string();

    let result = service.book(invalid).await;
    let errors = match result {
        Err(ConsultationError::Validation(errors)) => errors,
        _ => panic!("Expected validation failure"),
    };

    assert_eq!(errors.len(), 2);
    assert!(errors.contains("patientName"));
    assert!(errors.contains("healthConcern"));
}

#[tokio::test]
async fn price_above_the_ceiling_blocks_booking_entirely() {
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&store_server)
        .await;

    let mut config = TestConfig::default().without_notifications();
    config.document_store_url = store_server.uri();

    let service = ConsultationBookingService::with_dependencies(
        Arc::new(DocumentStoreClient::new(&config)),
        Arc::new(NotificationDispatcher::new(&config)),
        ConsultationPricing::with_table(
            PriceTable {
                instant: 2500,
                scheduled: 299,
                emergency: 999,
            },
            CONSULTATION_AMOUNT_CEILING,
        ),
    );

    let result = service.book(request("instant")).await;
    assert_matches!(result, Err(ConsultationError::PriceAboveCeiling { amount: 2500, .. }));
}

#[tokio::test]
async fn notification_outcome_never_blocks_the_consultation() {
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/action/insertOne"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(MockStoreResponses::insert_one_response()),
        )
        .expect(1)
        .mount(&store_server)
        .await;

    // Channels unconfigured: both outcomes false, booking still succeeds.
    let service = service_for(&store_server);
    let confirmation = service.book(request("emergency")).await.unwrap();

    assert!(!confirmation.notifications.email_sent);
    assert!(!confirmation.notifications.sms_sent);
    assert_eq!(confirmation.message(), "Consultation booked successfully!");
    assert_eq!(confirmation.consultation.amount, 999);
}

#[tokio::test]
async fn persistence_failure_is_fatal() {
    let store_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/action/insertOne"))
        .respond_with(ResponseTemplate::new(500).set_body_string("store down"))
        .expect(1)
        .mount(&store_server)
        .await;

    let service = service_for(&store_server);
    let result = service.book(request("instant")).await;

    assert_matches!(result, Err(ConsultationError::DatabaseError(_)));
}
