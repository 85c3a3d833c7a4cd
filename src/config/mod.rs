pub mod profile_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};
use profile_config::ProfileConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Options shared by every verification binary.
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_BASE_URL))]
    pub base_url: String,

    /// TOML file with signup/login profiles
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Per-request timeout; the HTTP client default applies when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub timeout_seconds: Option<u64>,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            config: None,
            timeout_seconds: None,
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn load_profiles(&self) -> Result<ProfileConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading profiles from: {}", path);
                ProfileConfig::from_file(path)
            }
            None => Ok(ProfileConfig::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }

        if let Some(seconds) = self.timeout_seconds {
            validate_range("timeout_seconds", seconds, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}
