//! Combo display scenario.
//!
//! Starts a short workout with every timing input reduced, waits through the
//! countdown and the first few reps, and captures the combo display.

use std::time::Duration;

use crate::driver::{self, WaitCondition};
use crate::runner::ScenarioReport;
use crate::scenarios::Scenario;
use crate::session::BrowserSession;

/// Workout settings that make the first combo appear quickly: one set of
/// five reps with one-second phases and a three-second countdown
const WORKOUT_SETTINGS: &[(&str, &str)] = &[
    ("#set-count", "1"),
    ("#rep-count", "5"),
    ("#down-duration", "1"),
    ("#hold-duration", "1"),
    ("#up-duration", "1"),
    ("#rest-duration", "10"),
    ("#countdown-duration", "3"),
];

/// 3s countdown plus ~3s of reps before the first combo shows, padded
const FIRST_COMBO_WAIT: Duration = Duration::from_millis(7000);

/// Reduced workout settings, start, wait for the first combo, capture
pub struct ComboScenario;

impl Scenario for ComboScenario {
    fn name(&self) -> &'static str {
        "combo"
    }

    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> crate::driver::ScenarioResult<()> {
        for (selector, value) in WORKOUT_SETTINGS {
            driver::fill(session, selector, value).await?;
        }

        driver::assert_enabled(session, "#start-button").await?;
        driver::click(session, "#start-button").await?;

        // The combo counter has no completion event to await.
        driver::wait(session, &WaitCondition::Delay(FIRST_COMBO_WAIT)).await?;

        let artifact = driver::capture(session, "combo-screenshot").await?;
        report.artifacts.push(artifact);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_settings_cover_every_timing_input() {
        let selectors: Vec<&str> = WORKOUT_SETTINGS.iter().map(|(sel, _)| *sel).collect();
        for expected in [
            "#set-count",
            "#rep-count",
            "#down-duration",
            "#hold-duration",
            "#up-duration",
            "#rest-duration",
            "#countdown-duration",
        ] {
            assert!(selectors.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_combo_wait_exceeds_countdown_plus_first_reps() {
        // 3s countdown + 3s of one-second phases, with margin
        assert!(FIRST_COMBO_WAIT > Duration::from_secs(6));
    }
}
