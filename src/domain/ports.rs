use crate::domain::model::{CheckRecord, ScenarioChecks, Summary};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// A sequence of checks against the admin API, followed by a printed summary.
#[async_trait]
pub trait Scenario: Send + Sync {
    fn name(&self) -> &str;
    fn banner(&self) -> &str;
    fn summary_title(&self) -> &str;

    async fn run_checks(&self) -> ScenarioChecks;

    /// Called after the summary title is printed, so any output it produces
    /// lands inside the summary block.
    async fn summarize(&self, records: &[CheckRecord]) -> Summary;
}
