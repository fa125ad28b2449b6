//! Deterministic state seeding for the application under test.
//!
//! Two propagation modes exist, and each scenario must know which applies:
//! - Storage-based: write a synthetic dataset into `localStorage`, then
//!   reload, since the application only reads persistent storage at
//!   initialization.
//! - Direct invocation: call an application-exposed global, whose own side
//!   effects mutate live state; the UI may still need a brief settle wait for
//!   its animation-driven re-render.
//!
//! The dataset shape is application-defined and agreed by convention; the
//! harness writes it but never reads it back.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::driver::actions::js_string;
use crate::driver::types::{ScenarioError, ScenarioResult};
use crate::session::BrowserSession;

/// Persistent storage key the application reads workout history from
pub const HISTORY_STORAGE_KEY: &str = "squat-tracker-history-v1";

/// One synthetic workout history entry, in the application's JSON shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Entry id
    pub id: String,
    /// ISO-8601 date of the workout
    pub date: String,
    /// Number of sets
    pub total_sets: u32,
    /// Repetitions per set
    pub reps_per_set: u32,
    /// Total repetitions
    pub total_reps: u32,
    /// Per-phase durations in seconds
    pub durations: PhaseDurations,
    /// Per-rep timeline, unused by seeded data
    pub timeline: Vec<serde_json::Value>,
}

/// Per-phase workout durations in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseDurations {
    pub down: u32,
    pub hold: u32,
    pub up: u32,
    pub rest: u32,
    pub countdown: u32,
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self {
            down: 2,
            hold: 1,
            up: 1,
            rest: 30,
            countdown: 5,
        }
    }
}

/// Build `days` consecutive daily entries ending at `anchor`.
///
/// Entry `i` is dated `anchor - i` days, so the dataset is reproducible
/// relative to any calendar date. Each entry records 3 sets of 10 reps.
pub fn daily_history(anchor: DateTime<Utc>, days: u32) -> Vec<HistoryEntry> {
    (0..days)
        .map(|i| HistoryEntry {
            id: format!("test-{}", i),
            date: (anchor - Duration::days(i64::from(i)))
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            total_sets: 3,
            reps_per_set: 10,
            total_reps: 30,
            durations: PhaseDurations::default(),
            timeline: Vec::new(),
        })
        .collect()
}

/// Write entries into the application's persistent storage.
///
/// Always overwrites the key, never appends, so re-running a scenario against
/// a fresh server is idempotent. The caller must reload afterwards for the
/// application to observe the seeded state.
pub async fn seed_storage(
    session: &BrowserSession,
    key: &str,
    entries: &[HistoryEntry],
) -> ScenarioResult<()> {
    let payload =
        serde_json::to_string(entries).map_err(|e| ScenarioError::Seeding(e.to_string()))?;

    let script = format!(
        r#"(() => {{
            localStorage.setItem({key}, {payload});
            return localStorage.getItem({key}) !== null;
        }})()"#,
        key = js_string(key),
        payload = js_string(&payload)
    );

    let result = session
        .page()
        .evaluate(script)
        .await
        .map_err(|e| ScenarioError::Seeding(e.to_string()))?;

    let stored = result.into_value::<bool>().unwrap_or(false);
    if !stored {
        return Err(ScenarioError::Seeding(format!(
            "storage write for key '{}' was not observed",
            key
        )));
    }
    Ok(())
}

/// Mutate live application state through an exposed global.
///
/// Propagation is the invoked method's own side effects; the scenario picks
/// the settle wait.
pub async fn seed_global(session: &BrowserSession, expr: &str) -> ScenarioResult<()> {
    session
        .page()
        .evaluate(expr)
        .await
        .map_err(|e| ScenarioError::Seeding(format!("'{}' failed: {}", expr, e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_history_counts_back_from_anchor() {
        let entries = daily_history(anchor(), 7);
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].id, "test-0");
        assert_eq!(entries[0].date, "2026-08-26T12:00:00.000Z");
        assert_eq!(entries[6].date, "2026-08-20T12:00:00.000Z");
    }

    #[test]
    fn test_daily_history_is_deterministic() {
        let a = daily_history(anchor(), 7);
        let b = daily_history(anchor(), 7);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_entry_serializes_with_application_field_names() {
        let entries = daily_history(anchor(), 1);
        let value = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(value["totalSets"], 3);
        assert_eq!(value["repsPerSet"], 10);
        assert_eq!(value["totalReps"], 30);
        assert_eq!(value["durations"]["rest"], 30);
        assert_eq!(value["timeline"], serde_json::json!([]));
    }

    #[test]
    fn test_empty_history_is_valid() {
        let entries = daily_history(anchor(), 0);
        assert!(entries.is_empty());
        assert_eq!(serde_json::to_string(&entries).unwrap(), "[]");
    }
}
