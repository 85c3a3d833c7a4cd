use crate::core::client::AdminApiClient;
use crate::core::{
    ApiResponse, LoginAttempt, LoginOutcome, LoginRequest, SignupAttempt, SignupOutcome,
    SignupRequest,
};
use crate::utils::error::{Result, VerifyError};

pub const PRODUCTS_PATH: &str = "/products";
pub const TEST_HEALTH_PATH: &str = "/test/health";
pub const ADMIN_SIGNUP_PATH: &str = "/auth/admin/signup";
pub const ADMIN_LOGIN_PATH: &str = "/auth/admin/login";

/// 服務端不同版本的措辭不一，兩種都接受
pub const VERIFICATION_REQUIRED_PHRASES: &[&str] = &["pending verification", "not verified"];
pub const PENDING_VERIFICATION_PHRASES: &[&str] = &["pending verification"];
pub const UNKNOWN_ADMIN_PHRASES: &[&str] = &["not found"];
pub const INVALID_CREDENTIALS_PHRASES: &[&str] = &["invalid credentials"];

const ALREADY_TAKEN: &str = "already taken";

/// Case-insensitive match of `message` against any of `phrases`.
pub fn message_matches(message: &str, phrases: &[&str]) -> bool {
    let lowered = message.to_lowercase();
    phrases.iter().any(|phrase| lowered.contains(phrase))
}

/// Case-sensitive, unlike the login phrases.
pub fn message_is_already_taken(message: &str) -> bool {
    message.contains(ALREADY_TAKEN)
}

/// Truthiness of a decoded payload: null, false, 0, "" and empty
/// arrays/objects do not count as a successful signup.
pub fn payload_is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        serde_json::Value::Object(map) => !map.is_empty(),
    }
}

pub async fn fetch_status(client: &AdminApiClient, path: &str) -> Result<u16> {
    let response = client.get(path).await?;
    Ok(response.status)
}

/// A 200 is accepted without looking at the body. A 400 must be JSON so the
/// duplicate-username message can be read.
pub fn classify_signup(response: &ApiResponse) -> Result<SignupOutcome> {
    if response.is_status(200) {
        return Ok(SignupOutcome::Created);
    }
    if !response.is_status(400) {
        return Ok(SignupOutcome::Rejected(response.status));
    }

    let body = response.json()?;
    let taken = body
        .get("message")
        .and_then(|m| m.as_str())
        .is_some_and(message_is_already_taken);

    if taken {
        Ok(SignupOutcome::AlreadyTaken)
    } else {
        Ok(SignupOutcome::Rejected(response.status))
    }
}

pub fn classify_login(response: &ApiResponse, phrases: &[&str]) -> Result<LoginOutcome> {
    if !response.is_status(400) {
        return Ok(LoginOutcome::NotRejected(response.status));
    }

    // 400 必須是 JSON，否則視為錯誤
    let body = response.json()?;
    let message = match body.get("message") {
        None => return Ok(LoginOutcome::UnexpectedMessage(None)),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => {
            return Err(VerifyError::ResponseShapeError {
                message: format!("'message' is not a string: {}", other),
            })
        }
    };

    if message_matches(&message, phrases) {
        Ok(LoginOutcome::Rejected)
    } else {
        Ok(LoginOutcome::UnexpectedMessage(Some(message)))
    }
}

/// Only transport failures are returned as `Err`; decode problems stay in
/// `attempt.outcome` next to the response.
pub async fn submit_signup(
    client: &AdminApiClient,
    request: &SignupRequest,
) -> Result<SignupAttempt> {
    tracing::debug!("Submitting admin signup for '{}'", request.username);
    let response = client.post_json(ADMIN_SIGNUP_PATH, request).await?;
    let outcome = classify_signup(&response);
    tracing::debug!("Signup outcome: {:?}", outcome);

    Ok(SignupAttempt { response, outcome })
}

pub async fn submit_login(
    client: &AdminApiClient,
    request: &LoginRequest,
    expected_phrases: &[&str],
) -> Result<LoginAttempt> {
    tracing::debug!("Submitting admin login for '{}'", request.username);
    let response = client.post_json(ADMIN_LOGIN_PATH, request).await?;
    let outcome = classify_login(&response, expected_phrases);
    tracing::debug!("Login outcome: {:?}", outcome);

    Ok(LoginAttempt { response, outcome })
}
