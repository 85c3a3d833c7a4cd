use crate::core::{LoginRequest, SignupRequest};
use crate::utils::error::{Result, VerifyError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Signup payload plus the credentials used to log in afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProfile {
    pub signup: SignupRequest,
    /// 未指定時沿用 signup 的帳號密碼
    pub login: Option<LoginRequest>,
}

impl ScenarioProfile {
    pub fn login_request(&self) -> LoginRequest {
        self.login.clone().unwrap_or_else(|| LoginRequest {
            username: self.signup.username.clone(),
            password: self.signup.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub admin_verification: Option<ScenarioProfile>,
    pub schema_verification: Option<ScenarioProfile>,
}

impl ProfileConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VerifyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VerifyError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ADMIN_PASSWORD})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VerifyError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn admin_verification(&self) -> ScenarioProfile {
        self.admin_verification
            .clone()
            .unwrap_or_else(default_admin_profile)
    }

    pub fn schema_verification(&self) -> ScenarioProfile {
        self.schema_verification
            .clone()
            .unwrap_or_else(default_schema_profile)
    }
}

const REQUEST_REASON: &str =
    "Testing admin verification functionality with integer field conversion";
const EXPERIENCE: &str =
    "Software testing and development experience for e-commerce applications";

pub fn default_admin_profile() -> ScenarioProfile {
    ScenarioProfile {
        signup: SignupRequest {
            username: "testadmin".to_string(),
            email: "testadmin@example.com".to_string(),
            password: "testpassword123".to_string(),
            first_name: "Test".to_string(),
            last_name: "Admin".to_string(),
            phone_number: "1234567890".to_string(),
            address: "Test Address".to_string(),
            upi_id: "9976656631@axl".to_string(),
            request_reason: REQUEST_REASON.to_string(),
            experience: EXPERIENCE.to_string(),
        },
        login: None,
    }
}

/// Uses a second username so it does not collide with the admin scenario.
pub fn default_schema_profile() -> ScenarioProfile {
    ScenarioProfile {
        signup: SignupRequest {
            username: "testadmin2".to_string(),
            email: "testadmin2@example.com".to_string(),
            password: "testpassword123".to_string(),
            first_name: "Test".to_string(),
            last_name: "Admin2".to_string(),
            phone_number: "1234567891".to_string(),
            address: "Test Address 2".to_string(),
            upi_id: "9976656632@axl".to_string(),
            request_reason: REQUEST_REASON.to_string(),
            experience: EXPERIENCE.to_string(),
        },
        login: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[admin_verification.signup]
username = "qa-admin"
email = "qa-admin@example.com"
password = "${ADMIN_VERIFY_TEST_PASSWORD}"
firstName = "QA"
lastName = "Admin"
phoneNumber = "5550001111"
address = "QA Street"
upiId = "5550001111@axl"
requestReason = "Regression run"
experience = "QA"

[admin_verification.login]
username = "qa-admin"
password = "other-password"
"#;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = ProfileConfig::from_toml_str("").unwrap();

        assert_eq!(config.admin_verification(), default_admin_profile());
        assert_eq!(config.schema_verification().signup.username, "testadmin2");
    }

    #[test]
    fn test_login_falls_back_to_signup_credentials() {
        let login = default_admin_profile().login_request();
        assert_eq!(login.username, "testadmin");
        assert_eq!(login.password, "testpassword123");
    }

    #[test]
    fn test_parses_profile_with_env_substitution() {
        std::env::set_var("ADMIN_VERIFY_TEST_PASSWORD", "from-env-123");
        let config = ProfileConfig::from_toml_str(SAMPLE).unwrap();
        std::env::remove_var("ADMIN_VERIFY_TEST_PASSWORD");

        let profile = config.admin_verification();
        assert_eq!(profile.signup.username, "qa-admin");
        assert_eq!(profile.signup.password, "from-env-123");
        assert_eq!(profile.login_request().password, "other-password");
        assert_eq!(config.schema_verification(), default_schema_profile());
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let content = SAMPLE.replace("ADMIN_VERIFY_TEST_PASSWORD", "ADMIN_VERIFY_UNSET_VAR");
        let config = ProfileConfig::from_toml_str(&content).unwrap();

        assert_eq!(
            config.admin_verification().signup.password,
            "${ADMIN_VERIFY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_incomplete_signup_is_rejected() {
        let result = ProfileConfig::from_toml_str(
            r#"
[schema_verification.signup]
username = "only-a-name"
"#,
        );

        assert!(matches!(
            result,
            Err(VerifyError::ConfigValidationError { .. })
        ));
    }
}
