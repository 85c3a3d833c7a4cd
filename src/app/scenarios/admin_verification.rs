use crate::config::profile_config::ScenarioProfile;
use crate::core::checks::{
    self, INVALID_CREDENTIALS_PHRASES, PRODUCTS_PATH, UNKNOWN_ADMIN_PHRASES,
    VERIFICATION_REQUIRED_PHRASES,
};
use crate::core::client::AdminApiClient;
use crate::core::console::Console;
use crate::core::{
    ApiResponse, AuthResponse, CheckRecord, CheckStatus, LoginOutcome, LoginRequest, Scenario,
    ScenarioChecks, SignupOutcome, Summary, SummaryEntry,
};
use async_trait::async_trait;

pub const API_HEALTH: &str = "API Health";
pub const ADMIN_SIGNUP: &str = "Admin Signup";
pub const ADMIN_LOGIN: &str = "Admin Login (Verification Check)";
pub const UNKNOWN_ADMIN_LOGIN: &str = "Unknown Admin Login";
pub const WRONG_PASSWORD_LOGIN: &str = "Wrong Password Login";

const WRONG_PASSWORD: &str = "definitely-not-the-password";

/// Health check, fresh signup, then a login that must be refused until an
/// existing admin approves the account.
pub struct AdminVerificationScenario {
    client: AdminApiClient,
    profile: ScenarioProfile,
    extended: bool,
    console: Console,
}

impl AdminVerificationScenario {
    pub fn new(client: AdminApiClient, profile: ScenarioProfile) -> Self {
        Self {
            client,
            profile,
            extended: false,
            console: Console::new(),
        }
    }

    /// Also run the unknown-user and wrong-password login checks.
    pub fn with_extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    /// Every line printed so far.
    pub fn transcript(&self) -> Vec<String> {
        self.console.lines()
    }

    fn print_exchange(&self, response: &ApiResponse) {
        self.console.say(format!("Status Code: {}", response.status));
        self.console.say(format!("Response: {}", response.body));
    }

    pub async fn health_check(&self) -> bool {
        self.console.say("\n🧪 Testing API Health...");

        match checks::fetch_status(&self.client, PRODUCTS_PATH).await {
            Ok(status) => {
                self.console
                    .say(format!("Products endpoint status: {}", status));
                if status == 200 {
                    self.console.say("✅ API is healthy!");
                    true
                } else {
                    self.console.say("❌ API health check failed!");
                    false
                }
            }
            Err(e) => {
                tracing::debug!("Health check transport error: {:?}", e);
                self.console
                    .say(format!("❌ Error during API health check: {}", e));
                false
            }
        }
    }

    /// Returns the decoded payload on 200, `None` otherwise.
    pub async fn signup(&self) -> Option<serde_json::Value> {
        self.console.say("🧪 Testing Admin Signup...");

        let attempt = match checks::submit_signup(&self.client, &self.profile.signup).await {
            Ok(attempt) => attempt,
            Err(e) => {
                self.console
                    .say(format!("❌ Error during admin signup: {}", e));
                return None;
            }
        };
        self.print_exchange(&attempt.response);

        if !matches!(attempt.outcome, Ok(SignupOutcome::Created)) {
            self.console.say("❌ Admin signup failed!");
            return None;
        }

        match attempt.response.json() {
            Ok(payload) => {
                let reply: Option<AuthResponse> = serde_json::from_value(payload.clone()).ok();
                tracing::debug!("Signup reply message: {:?}", reply.and_then(|r| r.message));
                self.console.say("✅ Admin signup successful!");
                Some(payload)
            }
            Err(e) => {
                self.console
                    .say(format!("❌ Error during admin signup: {}", e));
                None
            }
        }
    }

    pub async fn login(&self) -> bool {
        self.console.say("\n🧪 Testing Admin Login...");

        let request = self.profile.login_request();
        let attempt =
            match checks::submit_login(&self.client, &request, VERIFICATION_REQUIRED_PHRASES).await
            {
                Ok(attempt) => attempt,
                Err(e) => {
                    self.console
                        .say(format!("❌ Error during admin login: {}", e));
                    return false;
                }
            };
        self.print_exchange(&attempt.response);

        match attempt.outcome {
            Ok(LoginOutcome::Rejected) => {
                self.console
                    .say("✅ Admin login correctly shows verification required!");
                true
            }
            Ok(LoginOutcome::UnexpectedMessage(_)) => {
                self.console.say("⚠️ Admin login response unexpected");
                false
            }
            Ok(LoginOutcome::NotRejected(_)) => {
                self.console
                    .say("❌ Admin login should fail for unverified admin!");
                false
            }
            Err(e) => {
                self.console
                    .say(format!("❌ Error during admin login: {}", e));
                false
            }
        }
    }

    pub async fn login_unknown_admin(&self) -> bool {
        self.console.say("\n🧪 Testing Login With Unknown Admin...");

        let request = LoginRequest {
            username: format!("{}-missing", self.profile.signup.username),
            password: self.profile.signup.password.clone(),
        };
        self.expect_login_rejection(&request, UNKNOWN_ADMIN_PHRASES)
            .await
    }

    pub async fn login_wrong_password(&self) -> bool {
        self.console.say("\n🧪 Testing Login With Wrong Password...");

        let request = LoginRequest {
            username: self.profile.login_request().username,
            password: WRONG_PASSWORD.to_string(),
        };
        self.expect_login_rejection(&request, INVALID_CREDENTIALS_PHRASES)
            .await
    }

    async fn expect_login_rejection(&self, request: &LoginRequest, phrases: &[&str]) -> bool {
        let attempt = match checks::submit_login(&self.client, request, phrases).await {
            Ok(attempt) => attempt,
            Err(e) => {
                self.console
                    .say(format!("❌ Error during admin login: {}", e));
                return false;
            }
        };
        self.print_exchange(&attempt.response);

        match attempt.outcome {
            Ok(LoginOutcome::Rejected) => {
                self.console.say("✅ Login rejected as expected");
                true
            }
            Ok(other) => {
                self.console
                    .say(format!("⚠️ Login response unexpected: {:?}", other));
                false
            }
            Err(e) => {
                self.console
                    .say(format!("❌ Error during admin login: {}", e));
                false
            }
        }
    }
}

#[async_trait]
impl Scenario for AdminVerificationScenario {
    fn name(&self) -> &str {
        "admin-verification"
    }

    fn banner(&self) -> &str {
        "Starting Admin Verification Tests"
    }

    fn summary_title(&self) -> &str {
        "Test Summary"
    }

    async fn run_checks(&self) -> ScenarioChecks {
        if !self.health_check().await {
            self.console
                .say("❌ API is not responding. Please check if backend is running.");
            return ScenarioChecks {
                records: Vec::new(),
                aborted: true,
            };
        }

        let signup_result = self.signup().await;
        let login_result = self.login().await;

        // 空的 payload ({} / [] / "") 不算成功
        let signup_passed = signup_result.as_ref().is_some_and(checks::payload_is_truthy);

        let mut records = vec![
            CheckRecord::new(ADMIN_SIGNUP, CheckStatus::pass_or_fail(signup_passed)),
            CheckRecord::new(ADMIN_LOGIN, CheckStatus::pass_or_fail(login_result)),
        ];

        if self.extended {
            let unknown = self.login_unknown_admin().await;
            let wrong_password = self.login_wrong_password().await;
            records.push(CheckRecord::new(
                UNKNOWN_ADMIN_LOGIN,
                CheckStatus::pass_or_fail(unknown),
            ));
            records.push(CheckRecord::new(
                WRONG_PASSWORD_LOGIN,
                CheckStatus::pass_or_fail(wrong_password),
            ));
        }

        ScenarioChecks {
            records,
            aborted: false,
        }
    }

    async fn summarize(&self, records: &[CheckRecord]) -> Summary {
        // 重新打一次健康檢查，不沿用開頭的結果
        let healthy = self.health_check().await;

        let mut entries = vec![SummaryEntry::status(
            API_HEALTH,
            CheckStatus::pass_or_fail(healthy),
        )];
        entries.extend(records.iter().map(SummaryEntry::from));

        Summary {
            entries,
            notes_title: "Notes".to_string(),
            notes: vec![
                "The is_verified field has been converted from boolean to integer".to_string(),
                "0 = not verified, 1 = verified".to_string(),
                "New admin accounts should have is_verified = 0 by default".to_string(),
                "Login should require verification before allowing access".to_string(),
            ],
        }
    }
}
