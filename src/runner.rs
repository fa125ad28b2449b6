//! Types for scenario run results and artifact paths.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config;

/// A screenshot produced as visual evidence of a UI state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureArtifact {
    /// Logical name of the capture (e.g., "boss_initial")
    pub name: String,

    /// Path to the screenshot file
    pub path: PathBuf,
}

/// Result of a complete scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub scenario: String,

    /// Whether the scenario completed successfully
    pub success: bool,

    /// Error message if failed
    pub error: Option<String>,

    /// All artifacts captured before completion or failure
    pub artifacts: Vec<CaptureArtifact>,
}

impl ScenarioReport {
    /// Create an empty report for a scenario that has not finished yet
    pub fn new(scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            success: false,
            error: None,
            artifacts: Vec::new(),
        }
    }
}

/// Deterministic artifact path for a capture name.
///
/// Artifacts live directly under the configured output directory and are
/// overwritten on each run; there is no versioning or retention.
pub fn artifact_path(name: &str) -> PathBuf {
    PathBuf::from(config::output_dir()).join(format!("{}.png", sanitize_name(name)))
}

/// Sanitize a capture name for use in filenames
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            _ => '_',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("boss_initial"), "boss_initial");
        assert_eq!(sanitize_name("skill visible"), "skill_visible");
        assert_eq!(sanitize_name("a/b\\c"), "a_b_c");
    }

    #[test]
    fn test_artifact_path_is_deterministic() {
        assert_eq!(artifact_path("boss_initial"), artifact_path("boss_initial"));
        assert!(
            artifact_path("analytics modal")
                .to_string_lossy()
                .ends_with("analytics_modal.png")
        );
    }

    #[test]
    fn test_report_starts_unsuccessful() {
        let report = ScenarioReport::new("boss_damage");
        assert_eq!(report.scenario, "boss_damage");
        assert!(!report.success);
        assert!(report.error.is_none());
        assert!(report.artifacts.is_empty());
    }
}
