use crate::core::{Scenario, ScenarioReport};
use chrono::Utc;
use std::time::Instant;

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub struct VerificationRunner<S: Scenario> {
    scenario: S,
}

impl<S: Scenario> VerificationRunner<S> {
    pub fn new(scenario: S) -> Self {
        Self { scenario }
    }

    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    /// Runs every check and prints the summary. Never fails: check errors are
    /// already reported by the scenario itself.
    pub async fn run(&self) -> ScenarioReport {
        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!("Starting scenario '{}'", self.scenario.name());

        println!("🚀 {}", self.scenario.banner());
        println!("{}", rule());

        let checks = self.scenario.run_checks().await;

        let summary = if checks.aborted {
            tracing::warn!("Scenario '{}' stopped before the summary", self.scenario.name());
            None
        } else {
            println!("\n{}", rule());
            println!("📊 {}:", self.scenario.summary_title());
            let summary = self.scenario.summarize(&checks.records).await;
            print!("{}", summary.render());
            Some(summary)
        };

        let report = ScenarioReport {
            scenario: self.scenario.name().to_string(),
            records: checks.records,
            summary,
            aborted: checks.aborted,
            started_at,
            elapsed: start.elapsed(),
        };

        tracing::info!(
            "Scenario '{}' finished: {}/{} checks passed in {:?} (started {})",
            report.scenario,
            report.passed_count(),
            report.records.len(),
            report.elapsed,
            report.started_at.to_rfc3339()
        );

        report
    }
}
