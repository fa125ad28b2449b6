//! Analytics modal scenario.
//!
//! Seeds a week of workout history into persistent storage, reloads so the
//! application picks it up, opens the analytics modal, and captures it.

use std::time::Duration;

use chrono::Utc;

use crate::driver::{self, WaitCondition};
use crate::runner::ScenarioReport;
use crate::scenarios::Scenario;
use crate::seed;
use crate::session::BrowserSession;

/// Days of seeded history, ending at the current date
const HISTORY_DAYS: u32 = 7;

/// Modal open/transition settle time
const MODAL_SETTLE: Duration = Duration::from_millis(1000);

/// Seed 7 daily entries, reload, open analytics, capture the modal
pub struct AnalyticsScenario;

impl Scenario for AnalyticsScenario {
    fn name(&self) -> &'static str {
        "analytics"
    }

    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> crate::driver::ScenarioResult<()> {
        // Storage-based seeding: written state is only observed after reload.
        let entries = seed::daily_history(Utc::now(), HISTORY_DAYS);
        seed::seed_storage(session, seed::HISTORY_STORAGE_KEY, &entries).await?;
        session.reload().await?;

        driver::assert_visible(session, "#open-analytics").await?;
        driver::click(session, "#open-analytics").await?;

        // Modal animation has no completion event.
        driver::wait(session, &WaitCondition::Delay(MODAL_SETTLE)).await?;

        driver::assert_visible(session, "#analytics-modal").await?;
        let artifact = driver::capture(session, "analytics_modal").await?;
        report.artifacts.push(artifact);

        Ok(())
    }
}
