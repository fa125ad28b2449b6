//! Verification scenarios: seed → interact → capture.
//!
//! Each scenario is a fully independent run against a freshly launched
//! browser; nothing is shared between scenarios. [`run_scenario`] owns the
//! session lifecycle so the browser is released on every exit path,
//! assertion failures and timeouts included.

pub mod analytics;
pub mod boss;
pub mod combo;
pub mod persistence;
pub mod skills;

pub use analytics::AnalyticsScenario;
pub use boss::BossDamageScenario;
pub use combo::ComboScenario;
pub use persistence::PersistenceScenario;
pub use skills::SkillActivationScenario;

use crate::config;
use crate::driver::types::ScenarioResult;
use crate::runner::ScenarioReport;
use crate::session::BrowserSession;

/// One verification scenario
#[allow(async_fn_in_trait)]
pub trait Scenario {
    /// Scenario name, used for reports and CLI dispatch
    fn name(&self) -> &'static str;

    /// Page path appended to the configured base URL
    fn path(&self) -> &'static str {
        "/index.html"
    }

    /// Seed, interact, assert, and capture against an acquired session.
    ///
    /// Artifacts are pushed onto the report as they are captured, so a later
    /// failure still reports the evidence produced before it.
    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> ScenarioResult<()>;
}

/// Acquire a session, run the scenario, and release the session on both the
/// success and failure paths.
///
/// A failure inside the scenario body is recorded on the returned report
/// (`success = false`, `error` set) with any artifacts captured before the
/// failure; only launch/navigation failures, where no report is meaningful,
/// surface as `Err`.
pub async fn run_scenario<S: Scenario>(scenario: &S) -> ScenarioResult<ScenarioReport> {
    let url = scenario_url(&config::base_url(), scenario.path());
    let session = BrowserSession::acquire(&url).await?;

    let mut report = ScenarioReport::new(scenario.name());
    let outcome = scenario.run(&session, &mut report).await;

    // Single release point; failures must not leak browser processes.
    session.close().await;

    Ok(finish(report, outcome))
}

/// Names of all known scenarios, in CLI order
pub fn scenario_names() -> &'static [&'static str] {
    &["analytics", "boss", "combo", "persistence", "skills"]
}

fn finish(mut report: ScenarioReport, outcome: ScenarioResult<()>) -> ScenarioReport {
    match outcome {
        Ok(()) => report.success = true,
        Err(err) => report.error = Some(err.to_string()),
    }
    report
}

fn scenario_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::types::ScenarioError;
    use crate::runner::CaptureArtifact;

    #[test]
    fn test_scenario_url_joins_without_duplicate_slash() {
        assert_eq!(
            scenario_url("http://127.0.0.1:4173", "/index.html"),
            "http://127.0.0.1:4173/index.html"
        );
        assert_eq!(
            scenario_url("http://127.0.0.1:4173/", "index.html"),
            "http://127.0.0.1:4173/index.html"
        );
    }

    #[test]
    fn test_scenario_names_are_stable() {
        assert_eq!(
            scenario_names(),
            &["analytics", "boss", "combo", "persistence", "skills"]
        );
    }

    #[test]
    fn test_successful_run_marks_report() {
        let report = finish(ScenarioReport::new("boss"), Ok(()));
        assert!(report.success);
        assert!(report.error.is_none());
    }

    #[test]
    fn test_failed_run_keeps_artifacts_and_records_error() {
        let mut report = ScenarioReport::new("boss");
        report.artifacts.push(CaptureArtifact {
            name: "boss_initial".to_string(),
            path: "./verification/boss_initial.png".into(),
        });

        let err = ScenarioError::Assertion {
            selector: "#boss-card".to_string(),
            expected: "damaged state visually distinct from baseline".to_string(),
            actual: "captures are pixel-identical".to_string(),
        };
        let report = finish(report, Err(err));

        assert!(!report.success);
        assert!(report.error.as_ref().unwrap().contains("#boss-card"));
        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(report.artifacts[0].name, "boss_initial");
    }
}
