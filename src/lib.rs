//! Web Vision - Browser-driven UI verification with screenshot evidence.
//!
//! This crate provides:
//! - Headless browser sessions with guaranteed teardown (chromiumoxide/CDP)
//! - Deterministic state seeding via persistent storage or exposed globals
//! - Scripted interactions with explicit per-action wait conditions
//! - Pre/postcondition assertions with descriptive failures
//! - Screenshot artifacts at deterministic paths
//!
//! # Example
//!
//! ```rust,no_run
//! use web_vision::scenarios::{BossDamageScenario, run_scenario};
//!
//! #[tokio::main]
//! async fn main() {
//!     match run_scenario(&BossDamageScenario).await {
//!         Ok(report) => println!("captured {} artifacts", report.artifacts.len()),
//!         Err(e) => eprintln!("scenario failed: {}", e),
//!     }
//! }
//! ```

pub mod config;
pub mod driver;
pub mod runner;
pub mod scenarios;
pub mod seed;
pub mod session;

// Re-export runner types
pub use runner::{CaptureArtifact, ScenarioReport, artifact_path};

// Re-export driver types and operations
pub use driver::{
    ScenarioError, ScenarioResult, WaitCondition, assert_disabled, assert_enabled,
    assert_visible, capture, click, fill, invoke, wait,
};

// Re-export session management
pub use session::BrowserSession;

// Re-export seeding
pub use seed::{HISTORY_STORAGE_KEY, HistoryEntry, daily_history, seed_global, seed_storage};

// Re-export scenarios
pub use scenarios::{
    AnalyticsScenario, BossDamageScenario, ComboScenario, PersistenceScenario, Scenario,
    SkillActivationScenario, run_scenario,
};
