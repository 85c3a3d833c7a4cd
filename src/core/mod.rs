pub mod checks;
pub mod client;
pub mod console;
pub mod runner;

pub use crate::domain::model::{
    ApiResponse, AuthResponse, CheckRecord, CheckStatus, LoginAttempt, LoginOutcome,
    LoginRequest, ScenarioChecks, ScenarioReport, SignupAttempt, SignupOutcome, SignupRequest,
    Summary, SummaryEntry, SummaryValue,
};
pub use crate::domain::ports::{ConfigProvider, Scenario};
pub use crate::utils::error::Result;
