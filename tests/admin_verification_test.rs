use admin_verify::app::scenarios::admin_verification::{
    ADMIN_LOGIN, ADMIN_SIGNUP, API_HEALTH, UNKNOWN_ADMIN_LOGIN, WRONG_PASSWORD_LOGIN,
};
use admin_verify::config::profile_config::default_admin_profile;
use admin_verify::core::CheckStatus;
use admin_verify::{AdminApiClient, AdminVerificationScenario, VerificationRunner};
use anyhow::Result;
use httpmock::prelude::*;

const PENDING_MESSAGE: &str =
    "Your admin account is pending verification. Please wait for approval from an existing admin.";

fn scenario_for(server: &MockServer) -> AdminVerificationScenario {
    let client = AdminApiClient::new(server.url("/api"));
    AdminVerificationScenario::new(client, default_admin_profile())
}

#[tokio::test]
async fn test_unverified_admin_login_is_refused() -> Result<()> {
    let server = MockServer::start();

    let products_mock = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });

    let signup_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/admin/signup")
            .header("Content-Type", "application/json")
            .json_body_partial(
                r#"{"username":"testadmin","upiId":"9976656631@axl","firstName":"Test"}"#,
            );
        then.status(200)
            .json_body(serde_json::json!({"message": "Admin registered successfully"}));
    });

    let login_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/admin/login")
            .json_body(serde_json::json!({
                "username": "testadmin",
                "password": "testpassword123"
            }));
        then.status(400)
            .json_body(serde_json::json!({ "message": PENDING_MESSAGE }));
    });

    let report = VerificationRunner::new(scenario_for(&server)).run().await;

    // 開頭一次、摘要時再一次
    products_mock.assert_hits(2);
    signup_mock.assert();
    login_mock.assert();

    assert!(!report.aborted);
    let summary = report.summary.as_ref().expect("summary should be printed");
    assert_eq!(summary.status_of(API_HEALTH), Some(CheckStatus::Pass));
    assert_eq!(summary.status_of(ADMIN_SIGNUP), Some(CheckStatus::Pass));
    assert_eq!(summary.status_of(ADMIN_LOGIN), Some(CheckStatus::Pass));
    assert_eq!(summary.entries.len(), 3);
    assert_eq!(report.passed_count(), 2);

    Ok(())
}

#[tokio::test]
async fn test_not_verified_wording_is_accepted() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(200).json_body(serde_json::json!({"message": "ok"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(400)
            .json_body(serde_json::json!({"message": "Admin account NOT VERIFIED"}));
    });

    let scenario = scenario_for(&server);
    assert!(scenario.login().await);

    Ok(())
}

#[tokio::test]
async fn test_unhealthy_api_aborts_before_signup() -> Result<()> {
    let server = MockServer::start();

    let products_mock = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(503);
    });
    let signup_mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(200).json_body(serde_json::json!({}));
    });

    let report = VerificationRunner::new(scenario_for(&server)).run().await;

    products_mock.assert_hits(1);
    signup_mock.assert_hits(0);
    assert!(report.aborted);
    assert!(report.summary.is_none());
    assert!(report.records.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_unreachable_api_is_reported_not_raised() {
    // 沒有服務在監聽的埠
    let client = AdminApiClient::new("http://127.0.0.1:9/api");
    let scenario = AdminVerificationScenario::new(client, default_admin_profile());

    let report = VerificationRunner::new(scenario).run().await;

    assert!(report.aborted);
    assert!(report.summary.is_none());
}

#[tokio::test]
async fn test_login_success_and_failed_signup_are_failures() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });
    let signup_mock = server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(400)
            .json_body(serde_json::json!({"message": "Username is already taken"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(200).json_body(serde_json::json!({
            "token": "jwt",
            "username": "testadmin",
            "email": "testadmin@example.com",
            "role": "ADMIN"
        }));
    });

    let report = VerificationRunner::new(scenario_for(&server)).run().await;

    signup_mock.assert();
    let summary = report.summary.as_ref().expect("summary should be printed");
    assert_eq!(summary.status_of(API_HEALTH), Some(CheckStatus::Pass));
    assert_eq!(summary.status_of(ADMIN_SIGNUP), Some(CheckStatus::Fail));
    assert_eq!(summary.status_of(ADMIN_LOGIN), Some(CheckStatus::Fail));

    Ok(())
}

#[tokio::test]
async fn test_unexpected_login_message_is_not_a_pass() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(400)
            .json_body(serde_json::json!({"message": "Invalid credentials"}));
    });

    let scenario = scenario_for(&server);
    assert!(!scenario.login().await);

    Ok(())
}

fn position_of(transcript: &[String], prefix: &str) -> usize {
    transcript
        .iter()
        .position(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?} in {:#?}", prefix, transcript))
}

#[tokio::test]
async fn test_plain_text_signup_success_is_printed_before_the_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(200).body("Admin registered");
    });

    let scenario = scenario_for(&server);
    assert!(scenario.signup().await.is_none());

    let transcript = scenario.transcript();
    let status = position_of(&transcript, "Status Code: 200");
    let body = position_of(&transcript, "Response: Admin registered");
    let error = position_of(&transcript, "❌ Error during admin signup");
    assert!(status < body && body < error);
    assert!(!transcript.iter().any(|line| line.contains("signup successful")));

    Ok(())
}

#[tokio::test]
async fn test_plain_text_login_rejection_is_printed_before_the_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(400).body("Bad Request");
    });

    let scenario = scenario_for(&server);
    assert!(!scenario.login().await);

    let transcript = scenario.transcript();
    let status = position_of(&transcript, "Status Code: 400");
    let body = position_of(&transcript, "Response: Bad Request");
    let error = position_of(&transcript, "❌ Error during admin login");
    assert!(status < body && body < error);

    Ok(())
}

#[tokio::test]
async fn test_non_string_login_message_is_an_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(400).json_body(serde_json::json!({"message": 42}));
    });

    let scenario = scenario_for(&server);
    assert!(!scenario.login().await);

    let transcript = scenario.transcript();
    let error = position_of(&transcript, "❌ Error during admin login");
    assert!(position_of(&transcript, "Response: {\"message\":42}") < error);
    assert!(!transcript.iter().any(|line| line.contains("response unexpected")));

    Ok(())
}

#[tokio::test]
async fn test_empty_signup_payload_counts_as_failure() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(200).json_body(serde_json::json!({}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/login");
        then.status(400)
            .json_body(serde_json::json!({ "message": PENDING_MESSAGE }));
    });

    let scenario = scenario_for(&server);
    let report = VerificationRunner::new(scenario).run().await;

    let summary = report.summary.as_ref().expect("summary should be printed");
    assert_eq!(summary.status_of(ADMIN_SIGNUP), Some(CheckStatus::Fail));
    assert_eq!(summary.status_of(ADMIN_LOGIN), Some(CheckStatus::Pass));

    Ok(())
}

#[tokio::test]
async fn test_health_check_runs_fresh_each_time() -> Result<()> {
    let server = MockServer::start();

    let products_mock = server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });

    let scenario = scenario_for(&server);
    assert!(scenario.health_check().await);
    assert!(scenario.health_check().await);
    products_mock.assert_hits(2);

    Ok(())
}

#[tokio::test]
async fn test_extended_checks_are_appended() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/products");
        then.status(200).json_body(serde_json::json!([]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/admin/signup");
        then.status(200).json_body(serde_json::json!({"message": "ok"}));
    });
    let pending_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/admin/login")
            .json_body(serde_json::json!({
                "username": "testadmin",
                "password": "testpassword123"
            }));
        then.status(400)
            .json_body(serde_json::json!({ "message": PENDING_MESSAGE }));
    });
    let unknown_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/admin/login")
            .json_body_partial(r#"{"username":"testadmin-missing"}"#);
        then.status(400)
            .json_body(serde_json::json!({"message": "Admin not found"}));
    });
    let wrong_password_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/admin/login")
            .json_body(serde_json::json!({
                "username": "testadmin",
                "password": "definitely-not-the-password"
            }));
        then.status(400)
            .json_body(serde_json::json!({"message": "Invalid credentials"}));
    });

    let scenario = scenario_for(&server).with_extended(true);
    let report = VerificationRunner::new(scenario).run().await;

    pending_mock.assert();
    unknown_mock.assert();
    wrong_password_mock.assert();

    let summary = report.summary.as_ref().expect("summary should be printed");
    assert_eq!(summary.entries.len(), 5);
    assert_eq!(summary.status_of(UNKNOWN_ADMIN_LOGIN), Some(CheckStatus::Pass));
    assert_eq!(summary.status_of(WRONG_PASSWORD_LOGIN), Some(CheckStatus::Pass));
    assert_eq!(report.passed_count(), 4);

    Ok(())
}
