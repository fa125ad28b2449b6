//! Standalone entry point for the skill activation scenario.
//!
//! Assumes the application is already served at `WEB_VISION_BASE_URL`
//! (default `http://127.0.0.1:4173`).

use web_vision::scenarios::{SkillActivationScenario, run_scenario};

#[tokio::main]
async fn main() {
    match run_scenario(&SkillActivationScenario).await {
        Ok(report) => {
            for artifact in &report.artifacts {
                println!("Screenshot saved: {}", artifact.path.display());
            }
            if !report.success {
                let reason = report.error.unwrap_or_else(|| "unknown error".to_string());
                eprintln!("Scenario failed: {}", reason);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Scenario failed: {}", e);
            std::process::exit(1);
        }
    }
}
