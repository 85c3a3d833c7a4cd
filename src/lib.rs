pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{client::AdminApiClient, runner::VerificationRunner};
pub use app::scenarios::{AdminVerificationScenario, SchemaVerificationScenario};
pub use config::{profile_config::ProfileConfig, CliConfig};
pub use utils::error::{Result, VerifyError};
