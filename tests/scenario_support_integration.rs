//! Integration tests for the browser-free parts of the harness:
//! seed payload construction, artifact comparison, and report serialization.
//! Browser-dependent paths are exercised by the `verify_*` binaries against a
//! served build of the application.

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use web_vision::runner::{CaptureArtifact, ScenarioReport, sanitize_name};
use web_vision::seed::daily_history;

#[test]
fn test_seed_payload_matches_application_convention() {
    let anchor = Utc.with_ymd_and_hms(2026, 8, 26, 9, 30, 0).unwrap();
    let entries = daily_history(anchor, 7);

    let payload = serde_json::to_value(&entries).expect("history should serialize");
    let array = payload.as_array().expect("payload should be a JSON array");
    assert_eq!(array.len(), 7);

    // Field names and values the application's analytics view reads.
    for (i, entry) in array.iter().enumerate() {
        assert_eq!(entry["id"], format!("test-{}", i));
        assert_eq!(entry["totalSets"], 3);
        assert_eq!(entry["repsPerSet"], 10);
        assert_eq!(entry["totalReps"], 30);
        assert_eq!(entry["durations"]["down"], 2);
        assert_eq!(entry["durations"]["countdown"], 5);
        assert!(entry["timeline"].as_array().unwrap().is_empty());
    }

    // Consecutive days ending at the anchor.
    assert_eq!(array[0]["date"], "2026-08-26T09:30:00.000Z");
    assert_eq!(array[1]["date"], "2026-08-25T09:30:00.000Z");
    assert_eq!(array[6]["date"], "2026-08-20T09:30:00.000Z");
}

#[test]
fn test_artifacts_differ_on_disk() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let baseline = image::RgbImage::from_pixel(64, 48, image::Rgb([40, 40, 40]));
    let mut damaged = baseline.clone();
    for x in 10..30 {
        damaged.put_pixel(x, 20, image::Rgb([200, 30, 30]));
    }

    let path_a = dir.path().join("boss_initial.png");
    let path_b = dir.path().join("boss_damaged.png");
    let path_c = dir.path().join("boss_initial_copy.png");
    baseline.save(&path_a).expect("Failed to write baseline");
    damaged.save(&path_b).expect("Failed to write damaged");
    baseline.save(&path_c).expect("Failed to write copy");

    assert!(web_vision::driver::artifacts_differ(&path_a, &path_b).unwrap());
    assert!(!web_vision::driver::artifacts_differ(&path_a, &path_c).unwrap());
}

#[test]
fn test_report_json_round_trip() {
    let mut report = ScenarioReport::new("boss");
    report.success = true;
    report.artifacts.push(CaptureArtifact {
        name: "boss_initial".to_string(),
        path: "./verification/boss_initial.png".into(),
    });

    let json = serde_json::to_string(&report).expect("report should serialize");
    let parsed: ScenarioReport = serde_json::from_str(&json).expect("report should deserialize");

    assert_eq!(parsed.scenario, "boss");
    assert!(parsed.success);
    assert!(parsed.error.is_none());
    assert_eq!(parsed.artifacts.len(), 1);
    assert_eq!(parsed.artifacts[0].name, "boss_initial");
}

#[test]
fn test_capture_names_sanitize_to_stable_filenames() {
    assert_eq!(sanitize_name("analytics_modal"), "analytics_modal");
    assert_eq!(sanitize_name("skill visible!"), "skill_visible_");
}
