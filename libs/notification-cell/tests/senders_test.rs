use assert_matches::assert_matches;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use notification_cell::models::{EmailMessage, NotificationError, SmsMessage};
use notification_cell::services::dispatch::NotificationDispatcher;
use notification_cell::services::email::EmailSender;
use notification_cell::services::sms::SmsSender;
use shared_utils::test_utils::TestConfig;

fn email_message() -> EmailMessage {
    EmailMessage {
        to: "jane@x.com".to_string(),
        subject: "Appointment Confirmation".to_string(),
        html_body: "<h2>Confirmed</h2>".to_string(),
    }
}

fn sms_message() -> SmsMessage {
    SmsMessage {
        to: "+15551234567".to_string(),
        body: "Your appointment is confirmed".to_string(),
    }
}

#[tokio::test]
async fn email_sender_delivers_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(header("Authorization", "Bearer test-mail-key"))
        .and(body_string_contains("jane@x.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "m1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.mail_api_url = mock_server.uri();

    let sender = EmailSender::new(&config);
    assert!(sender.is_configured());
    assert!(sender.send(&email_message()).await.is_ok());
}

#[tokio::test]
async fn email_sender_reports_transport_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.mail_api_url = mock_server.uri();

    let sender = EmailSender::new(&config);
    let result = sender.send(&email_message()).await;

    assert_matches!(result, Err(NotificationError::Rejected { status: 500, .. }));
}

#[tokio::test]
async fn unconfigured_email_sender_never_touches_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().without_notifications();
    // Even with a reachable URL, missing credentials must short-circuit.
    config.mail_api_url = mock_server.uri();

    let sender = EmailSender::new(&config);
    assert!(!sender.is_configured());

    let result = sender.send(&email_message()).await;
    assert_matches!(result, Err(NotificationError::NotConfigured));
}

#[tokio::test]
async fn sms_sender_posts_form_encoded_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/ACtest/Messages.json"))
        .and(body_string_contains("To=%2B15551234567"))
        .and(body_string_contains("From=%2B15550000001"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "sid": "SM1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.sms_api_url = mock_server.uri();

    let sender = SmsSender::new(&config);
    assert!(sender.send(&sms_message()).await.is_ok());
}

#[tokio::test]
async fn unconfigured_sms_sender_fails_immediately() {
    let config = TestConfig::default().without_notifications();

    let sender = SmsSender::new(&config);
    assert!(!sender.is_configured());

    let result = sender.send(&sms_message()).await;
    assert_matches!(result, Err(NotificationError::NotConfigured));
}

#[tokio::test]
async fn dispatcher_swallows_transport_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.mail_api_url = mock_server.uri();
    config.sms_api_url = String::new();

    let dispatcher = NotificationDispatcher::new(&config);

    assert!(!dispatcher.send_email(email_message()).await);
    assert!(!dispatcher.send_sms(sms_message()).await);
}

#[tokio::test]
async fn dispatcher_reports_success_per_channel() {
    let mail_server = MockServer::start().await;
    let sms_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "m1" })))
        .mount(&mail_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/ACtest/Messages.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "sid": "SM1" })))
        .mount(&sms_server)
        .await;

    let mut config = TestConfig::default().to_app_config();
    config.mail_api_url = mail_server.uri();
    config.sms_api_url = sms_server.uri();

    let dispatcher = NotificationDispatcher::with_senders(
        EmailSender::new(&config),
        SmsSender::new(&config),
    );

    assert!(dispatcher.send_email(email_message()).await);
    assert!(dispatcher.send_sms(sms_message()).await);
}
