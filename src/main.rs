use clap::{Parser, Subcommand};
use std::error::Error;

use web_vision::runner::ScenarioReport;
use web_vision::scenarios::{
    AnalyticsScenario, BossDamageScenario, ComboScenario, PersistenceScenario,
    SkillActivationScenario, run_scenario, scenario_names,
};

/// Web Vision - Browser-driven UI verification with screenshot evidence
#[derive(Parser, Debug)]
#[command(
    name = "web-vision",
    about = "Browser-driven UI verification with deterministic state seeding and screenshot capture",
    after_help = "ENVIRONMENT VARIABLES:\n\
        WEB_VISION_BASE_URL        Base URL of the served application\n\
        WEB_VISION_OUTPUT_DIR      Directory for screenshot artifacts\n\
        WEB_VISION_POLL_INTERVAL   Predicate poll interval (ms)\n\
        WEB_VISION_POLL_TIMEOUT    Predicate poll budget (ms)\n\
        WEB_VISION_NAV_TIMEOUT     Navigation wait budget (ms)\n\
        WEB_VISION_VIEWPORT        Viewport: desktop, tablet, mobile, or WxH"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a verification scenario against the served application
    Run {
        /// Scenario name: analytics, boss, combo, persistence, or skills
        scenario: String,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available scenarios
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Run { scenario, json }) => {
            let report = match scenario.as_str() {
                "analytics" => run_scenario(&AnalyticsScenario).await,
                "boss" => run_scenario(&BossDamageScenario).await,
                "combo" => run_scenario(&ComboScenario).await,
                "persistence" => run_scenario(&PersistenceScenario).await,
                "skills" => run_scenario(&SkillActivationScenario).await,
                other => {
                    return Err(format!(
                        "Unknown scenario '{}'. Available: {}",
                        other,
                        scenario_names().join(", ")
                    )
                    .into());
                }
            };

            match report {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        print_report(&report);
                    }
                    if !report.success {
                        let reason = report.error.unwrap_or_else(|| "unknown error".to_string());
                        return Err(format!("Scenario '{}' failed: {}", scenario, reason).into());
                    }
                }
                Err(e) => {
                    eprintln!("Scenario '{}' failed: {}", scenario, e);
                    return Err(Box::new(e) as Box<dyn Error>);
                }
            }
        }

        Some(Commands::List) => {
            for name in scenario_names() {
                println!("{}", name);
            }
        }

        None => {
            println!("Web Vision - Browser-driven UI verification");
            println!();
            println!("Usage: web-vision <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run   Run a verification scenario (analytics, boss, combo, persistence, skills)");
            println!("  list  List available scenarios");
            println!();
            println!("Run with --help for more information.");
        }
    }

    Ok(())
}

fn print_report(report: &ScenarioReport) {
    let status = if report.success { "completed" } else { "failed" };
    println!(
        "Scenario '{}' {}: {} artifacts captured",
        report.scenario,
        status,
        report.artifacts.len()
    );
    for artifact in &report.artifacts {
        println!("  {}: {}", artifact.name, artifact.path.display());
    }
}
