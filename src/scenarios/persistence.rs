//! Settings persistence scenario.
//!
//! Edits the workout settings inputs with change notifications, reloads, and
//! verifies the application restored the edited values from its persistent
//! storage before capturing the settings card.

use crate::driver::{self, ScenarioError};
use crate::runner::ScenarioReport;
use crate::scenarios::Scenario;
use crate::session::BrowserSession;

/// Edited settings expected to survive a reload
const PERSISTED_SETTINGS: &[(&str, &str)] = &[("#set-count", "5"), ("#rep-count", "20")];

/// Edit settings, reload, assert the values persisted, capture
pub struct PersistenceScenario;

impl Scenario for PersistenceScenario {
    fn name(&self) -> &'static str {
        "persistence"
    }

    async fn run(
        &self,
        session: &BrowserSession,
        report: &mut ScenarioReport,
    ) -> crate::driver::ScenarioResult<()> {
        for (selector, value) in PERSISTED_SETTINGS {
            driver::fill(session, selector, value).await?;
        }

        // The application writes settings on change and reads them back at
        // initialization; a reload proves the round trip.
        session.reload().await?;

        driver::scroll_into_view(session, ".control-card").await?;

        for (selector, expected) in PERSISTED_SETTINGS {
            let value = driver::invoke(
                session,
                &format!("document.querySelector({}).value", selector_literal(selector)),
            )
            .await?;

            if value.as_str() != Some(expected) {
                return Err(ScenarioError::Assertion {
                    selector: selector.to_string(),
                    expected: format!("value \"{}\" restored after reload", expected),
                    actual: value.to_string(),
                });
            }
        }

        let artifact = driver::capture(session, "settings_persisted").await?;
        report.artifacts.push(artifact);

        Ok(())
    }
}

fn selector_literal(selector: &str) -> String {
    serde_json::Value::String(selector.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_settings_edit_both_count_inputs() {
        assert_eq!(
            PERSISTED_SETTINGS,
            &[("#set-count", "5"), ("#rep-count", "20")]
        );
    }

    #[test]
    fn test_selector_literal_quotes_for_page_context() {
        assert_eq!(selector_literal("#set-count"), "\"#set-count\"");
    }
}
