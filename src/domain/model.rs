use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Admin registration payload sent to `/auth/admin/signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub upi_id: String,
    pub request_reason: String,
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Reply shape of the auth endpoints. Errors only carry `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub token: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Raw status and body of one exchange; the body is decoded on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_status(&self, status: u16) -> bool {
        self.status == status
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Top level `"message"` string, or `None` when the body has no such key.
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value.get("message")?.as_str().map(str::to_string)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
    NeedsCheck,
}

impl CheckStatus {
    pub fn pass_or_fail(passed: bool) -> Self {
        if passed {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    pub fn pass_or_needs_check(passed: bool) -> Self {
        if passed {
            CheckStatus::Pass
        } else {
            CheckStatus::NeedsCheck
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
            CheckStatus::NeedsCheck => "NEEDS_CHECK",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// 200; the body is left undecoded
    Created,
    AlreadyTaken,
    Rejected(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// 400 and the message matched one of the expected phrases
    Rejected,
    /// 400 but the message is missing or says something else
    UnexpectedMessage(Option<String>),
    /// Any status other than 400
    NotRejected(u16),
}

/// The exchange is kept even when the body could not be classified, so
/// callers can print status and body before reporting the error.
#[derive(Debug)]
pub struct SignupAttempt {
    pub response: ApiResponse,
    pub outcome: Result<SignupOutcome>,
}

#[derive(Debug)]
pub struct LoginAttempt {
    pub response: ApiResponse,
    pub outcome: Result<LoginOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub label: String,
    pub status: CheckStatus,
}

impl CheckRecord {
    pub fn new(label: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            label: label.into(),
            status,
        }
    }
}

/// Results of the check phase. `aborted` means the summary is skipped.
#[derive(Debug, Clone, Default)]
pub struct ScenarioChecks {
    pub records: Vec<CheckRecord>,
    pub aborted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryValue {
    Status(CheckStatus),
    Text(String),
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Status(status) => write!(f, "{}", status),
            SummaryValue::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub label: String,
    pub value: SummaryValue,
}

impl SummaryEntry {
    pub fn status(label: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            label: label.into(),
            value: SummaryValue::Status(status),
        }
    }

    pub fn text(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: SummaryValue::Text(text.into()),
        }
    }
}

impl From<&CheckRecord> for SummaryEntry {
    fn from(record: &CheckRecord) -> Self {
        SummaryEntry::status(record.label.clone(), record.status)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub entries: Vec<SummaryEntry>,
    pub notes_title: String,
    pub notes: Vec<String>,
}

impl Summary {
    pub fn status_of(&self, label: &str) -> Option<CheckStatus> {
        self.entries.iter().find_map(|entry| match &entry.value {
            SummaryValue::Status(status) if entry.label == label => Some(*status),
            _ => None,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            // 每一行固定帶 ✅ 前綴，不論結果
            out.push_str(&format!("✅ {}: {}\n", entry.label, entry.value));
        }
        out.push_str(&format!("\n💡 {}:\n", self.notes_title));
        for note in &self.notes {
            out.push_str(&format!("- {}\n", note));
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    pub records: Vec<CheckRecord>,
    pub summary: Option<Summary>,
    pub aborted: bool,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl ScenarioReport {
    pub fn passed_count(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_pass()).count()
    }
}
