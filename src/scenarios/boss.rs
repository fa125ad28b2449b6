//! Boss damage scenario.
//!
//! Captures the boss card before and after applying damage through the
//! application's exposed global, and requires the two captures to be
//! visually distinct.

use std::time::Duration;

use crate::driver::{self, ScenarioError, WaitCondition};
use crate::runner::ScenarioReport;
use crate::scenarios::Scenario;
use crate::session::BrowserSession;

/// Known duration of the boss card's damage CSS transition
const DAMAGE_TRANSITION: Duration = Duration::from_millis(300);

/// Baseline capture, `BossBattle.damage(5)`, damaged capture
pub struct BossDamageScenario;

impl Scenario for BossDamageScenario {
    fn name(&self) -> &'static str {
        "boss"
    }

    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> crate::driver::ScenarioResult<()> {
        driver::wait(session, &WaitCondition::predicate("window.BossBattle")).await?;

        driver::assert_visible(session, "#boss-card").await?;
        driver::scroll_into_view(session, "#boss-card").await?;

        let baseline = driver::capture(session, "boss_initial").await?;
        report.artifacts.push(baseline);

        // Direct global invocation mutates live state immediately.
        driver::invoke(session, "window.BossBattle.damage(5)").await?;

        // 0.3s transition, padded to 500ms.
        driver::wait(session, &WaitCondition::transition(DAMAGE_TRANSITION)).await?;

        let damaged = driver::capture(session, "boss_damaged").await?;
        report.artifacts.push(damaged);

        let a = &report.artifacts[0].path;
        let b = &report.artifacts[1].path;
        if !driver::artifacts_differ(a, b)? {
            return Err(ScenarioError::Assertion {
                selector: "#boss-card".to_string(),
                expected: "damaged state visually distinct from baseline".to_string(),
                actual: "captures are pixel-identical".to_string(),
            });
        }

        Ok(())
    }
}
