//! Skill activation scenario.
//!
//! Switches the active class to warrior, starts a workout with a reduced
//! countdown, and verifies the skill-trigger button's enabled → disabled
//! transition with a capture of each state.

use std::time::Duration;

use crate::driver::{self, ScenarioError, WaitCondition};
use crate::runner::ScenarioReport;
use crate::scenarios::Scenario;
use crate::seed;
use crate::session::BrowserSession;

/// Settle time for the activation animation frame
const ACTIVATION_SETTLE: Duration = Duration::from_millis(500);

/// Skill button visible-and-enabled, as a page predicate (the reduced
/// countdown still runs before the workout begins)
const SKILL_BUTTON_READY: &str = "(() => { \
    const el = document.querySelector('#skill-trigger-button'); \
    return !!el && !el.disabled && el.getBoundingClientRect().height > 0; \
})()";

/// Warrior class, countdown "3", start workout, activate the skill
pub struct SkillActivationScenario;

impl Scenario for SkillActivationScenario {
    fn name(&self) -> &'static str {
        "skills"
    }

    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> crate::driver::ScenarioResult<()> {
        driver::wait(
            session,
            &WaitCondition::predicate("window.SkillManager && window.ClassManager"),
        )
        .await?;

        seed::seed_global(session, "window.ClassManager.changeClass('warrior')").await?;

        driver::fill(session, "#countdown-duration", "3").await?;
        driver::click(session, "#start-button").await?;

        driver::wait(session, &WaitCondition::predicate(SKILL_BUTTON_READY)).await?;
        driver::assert_enabled(session, "#skill-trigger-button").await?;

        let visible = driver::capture(session, "skill_visible").await?;
        report.artifacts.push(visible);

        driver::click(session, "#skill-trigger-button").await?;
        driver::assert_disabled(session, "#skill-trigger-button").await?;

        driver::wait(session, &WaitCondition::Delay(ACTIVATION_SETTLE)).await?;

        let active = driver::capture(session, "skill_active").await?;
        report.artifacts.push(active);

        let a = &report.artifacts[0].path;
        let b = &report.artifacts[1].path;
        if !driver::artifacts_differ(a, b)? {
            return Err(ScenarioError::Assertion {
                selector: "#skill-trigger-button".to_string(),
                expected: "disabled state visually distinct from enabled state".to_string(),
                actual: "captures are pixel-identical".to_string(),
            });
        }

        Ok(())
    }
}
