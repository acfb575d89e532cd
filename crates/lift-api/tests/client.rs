//! Client behavior against a mock backend.

use lift_api::{ApiClient, ApiError, ApiSettings};
use lift_model::{ComplaintDraft, ComplaintStatus, Priority, Role, Session};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiSettings::with_base_url(format!("{}/api/v1", server.uri())))
        .expect("client")
}

#[tokio::test]
async fn login_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"email": "owner@tower.in", "otp": "1234"})))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "data": {"id": 12, "username": "Wing B", "email": "owner@tower.in", "userType": "Sub Customer", "customerId": 3}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .await
        .login("owner@tower.in", "1234")
        .await
        .unwrap();

    assert_eq!(session.user_id, "12");
    assert_eq!(session.role, Role::SubCustomer);
    assert_eq!(session.customer_id(), "3");
}

#[tokio::test]
async fn rejected_login_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": false, "message": "Invalid OTP"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .login("owner@tower.in", "0000")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected {
            message: "Invalid OTP".into()
        }
    );
}

#[tokio::test]
async fn complaints_list_is_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/3/complaints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {"id": 1, "ticket_no": "T-1", "subject": "Door jam", "status": "open"},
                {"id": 2, "ticket_no": "T-2", "subject": "Noise", "status": "resolved", "priority": "high"}
            ]
        })))
        .mount(&server)
        .await;

    let complaints = client_for(&server).await.complaints("3").await.unwrap();
    assert_eq!(complaints.len(), 2);
    assert_eq!(complaints[1].status, ComplaintStatus::Resolved);
    assert_eq!(complaints[1].priority, Priority::High);
}

#[tokio::test]
async fn missing_list_data_reads_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/3/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let invoices = client_for(&server).await.invoices("3").await.unwrap();
    assert!(invoices.is_empty());
}

#[tokio::test]
async fn server_error_is_retryable_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/3/quotations"))
        .respond_with(
            ResponseTemplate::new(503)
                .set_body_json(json!({"success": false, "message": "Maintenance window"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).await.quotations("3").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 503,
            message: "Maintenance window".into()
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/3/maintenance"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .maintenance_schedule("3")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn create_complaint_posts_trimmed_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/complaints"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {"id": 77, "ticket_no": "T-77", "subject": "Door jam", "status": "open"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = ComplaintDraft {
        customer_id: "3".into(),
        subject: "  Door jam ".into(),
        description: "Stops between floors".into(),
        ..ComplaintDraft::default()
    };
    let created = client_for(&server)
        .await
        .create_complaint(&draft)
        .await
        .unwrap();
    assert_eq!(created.reference(), "T-77");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["subject"], "Door jam");
}

#[tokio::test]
async fn logout_sends_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(body_json(json!({"user_id": "5"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new("5", "Owner", Role::Customer);
    client_for(&server).await.logout(&session).await.unwrap();
}
