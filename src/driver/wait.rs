//! Wait conditions for asynchronous UI effects.
//!
//! Every interaction with asynchronous consequences picks exactly one of
//! these completion signals:
//! - [`WaitCondition::Delay`] when the only known signal is a timed
//!   animation/transition
//! - [`WaitCondition::Load`] after a full page reload
//! - [`WaitCondition::Predicate`] when progress depends on application
//!   globals, polled under a hard budget

use std::time::Duration;

use tokio::time::{Instant, sleep, timeout};

use crate::config;
use crate::driver::types::{ScenarioError, ScenarioResult};
use crate::session::BrowserSession;

/// Margin added on top of a known CSS transition duration.
///
/// Waiting exactly the transition time races the browser's compositor; the
/// padded wait must be strictly longer than the known duration.
pub const TRANSITION_PAD: Duration = Duration::from_millis(200);

/// A completion signal for one asynchronous UI effect
#[derive(Debug, Clone)]
pub enum WaitCondition {
    /// Fixed delay; single-shot, no retry
    Delay(Duration),

    /// The page's load lifecycle event, bounded by the navigation timeout
    Load,

    /// Poll a boolean page expression until true or the budget elapses.
    /// Exceeding the budget is a hard failure, never a silent continue.
    Predicate {
        /// JavaScript expression evaluated in page context
        expr: String,
        /// Upper bound for the poll
        budget: Duration,
    },
}

impl WaitCondition {
    /// Fixed delay padded past a known CSS transition duration.
    ///
    /// A 300ms transition yields a 500ms wait.
    pub fn transition(known_duration: Duration) -> Self {
        WaitCondition::Delay(known_duration + TRANSITION_PAD)
    }

    /// Predicate poll with the configured default budget
    pub fn predicate(expr: impl Into<String>) -> Self {
        WaitCondition::Predicate {
            expr: expr.into(),
            budget: config::get().waits.poll_timeout(),
        }
    }
}

/// Block the scenario until the condition resolves.
///
/// These waits are the only points where real time passes without
/// harness-side computation; the scenario issues no further commands until
/// the condition resolves or fails.
pub async fn wait(session: &BrowserSession, condition: &WaitCondition) -> ScenarioResult<()> {
    match condition {
        WaitCondition::Delay(duration) => {
            sleep(*duration).await;
            Ok(())
        }

        WaitCondition::Load => {
            let budget = config::get().waits.nav_timeout();
            match timeout(budget, session.page().wait_for_navigation()).await {
                Ok(Ok(_)) => Ok(()),
                Ok(Err(e)) => Err(ScenarioError::Navigation {
                    url: session.target_url().to_string(),
                    reason: e.to_string(),
                }),
                Err(_) => Err(ScenarioError::Timeout {
                    what: "page load event".to_string(),
                    budget,
                }),
            }
        }

        WaitCondition::Predicate { expr, budget } => {
            let interval = config::get().waits.poll_interval();
            let deadline = Instant::now() + *budget;

            loop {
                if evaluate_predicate(session, expr).await? {
                    return Ok(());
                }
                if Instant::now() >= deadline {
                    return Err(ScenarioError::Timeout {
                        what: expr.clone(),
                        budget: *budget,
                    });
                }
                sleep(interval).await;
            }
        }
    }
}

/// Evaluate a boolean expression in page context.
///
/// The expression is wrapped in a page-side try/catch, so one that throws
/// (the globals it names do not exist yet) counts as false and the poll
/// keeps going until its budget elapses. Transport errors still abort.
async fn evaluate_predicate(session: &BrowserSession, expr: &str) -> ScenarioResult<bool> {
    let result = session.page().evaluate(predicate_script(expr)).await?;
    Ok(result.into_value::<bool>().unwrap_or(false))
}

fn predicate_script(expr: &str) -> String {
    format!(
        "(() => {{ try {{ return Boolean({}); }} catch (err) {{ return false; }} }})()",
        expr
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_pads_strictly_beyond_known_duration() {
        let known = Duration::from_millis(300);
        match WaitCondition::transition(known) {
            WaitCondition::Delay(padded) => {
                assert!(padded > known);
                assert_eq!(padded, Duration::from_millis(500));
            }
            other => panic!("expected Delay, got {:?}", other),
        }
    }

    #[test]
    fn test_predicate_script_swallows_page_exceptions() {
        let script = predicate_script("window.App.ready");
        assert!(script.contains("try { return Boolean(window.App.ready); }"));
        assert!(script.contains("catch (err) { return false; }"));
    }

    #[test]
    fn test_predicate_carries_default_budget() {
        match WaitCondition::predicate("window.BossBattle") {
            WaitCondition::Predicate { expr, budget } => {
                assert_eq!(expr, "window.BossBattle");
                assert!(budget > Duration::ZERO);
            }
            other => panic!("expected Predicate, got {:?}", other),
        }
    }
}
