use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/zorggroep.json");

/// Run `fitc` in an isolated working directory and data dir.
fn fitc(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fitc"))
        .args(args)
        .current_dir(dir)
        .env("FITCHECK_STORE__DATA_DIR", dir.join("data"))
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("FITCHECK_LOG")
        .env_remove("FITCHECK_ADVISORY__ENDPOINT")
        .env_remove("FITCHECK_ADVISORY__API_KEY")
        .output()
        .expect("fitc should run")
}

fn json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "fitc failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn metrics_from_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = json(&fitc(dir.path(), &["--snapshot", FIXTURE, "metrics"]));

    assert_eq!(report["totalFit"], 67);
    assert_eq!(report["domainScore"], 70);
    assert_eq!(report["executionScore"], 55);
    assert_eq!(report["coverageScore"], 75);
    assert_eq!(report["dataConfidence"], 100);
    assert_eq!(report["status"], "Stabiel");
}

#[test]
fn alerts_from_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let alerts = json(&fitc(dir.path(), &["--snapshot", FIXTURE, "alerts"]));

    let ids: Vec<&str> = alerts
        .as_array()
        .unwrap()
        .iter()
        .map(|alert| alert["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["sys-overdue", "sys-domain-resources-1", "sys-kpi-g2"]);
}

#[test]
fn import_then_report_and_history_from_store() {
    let dir = tempfile::tempdir().unwrap();

    let imported = json(&fitc(dir.path(), &["--user", "linde", "snapshot", "import", FIXTURE]));
    assert_eq!(imported["goals"], 2);
    assert!(dir.path().join("data").join("linde.json").is_file());

    let report = json(&fitc(dir.path(), &["--user", "linde", "report"]));
    assert_eq!(report["metrics"]["totalFit"], 67);
    assert_eq!(report["alerts"].as_array().unwrap().len(), 3);

    let history = json(&fitc(dir.path(), &["--user", "linde", "history"]));
    assert_eq!(history["cycles"], 2);
    assert_eq!(history["direction"], "up");
}

#[test]
fn missing_snapshot_fails_with_hint() {
    let dir = tempfile::tempdir().unwrap();
    let output = fitc(dir.path(), &["--user", "nobody", "metrics"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fitc snapshot import"), "stderr: {stderr}");
}

#[test]
fn advisory_without_configuration_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = fitc(dir.path(), &["--snapshot", FIXTURE, "alerts", "--advisory"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("advisory"), "stderr: {stderr}");
}

#[test]
fn validate_reports_dangling_goal_link() {
    let dir = tempfile::tempdir().unwrap();
    let mut snapshot: Value =
        serde_json::from_str(&std::fs::read_to_string(FIXTURE).unwrap()).unwrap();
    snapshot["actions"][0]["linkedGoalId"] = Value::from("ghost");
    let file = dir.path().join("broken.json");
    std::fs::write(&file, serde_json::to_vec(&snapshot).unwrap()).unwrap();

    let output = fitc(
        dir.path(),
        &["--snapshot", file.to_str().unwrap(), "validate"],
    );
    assert!(!output.status.success());

    let response: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(response["valid"], false);
    assert!(response["issues"][0].as_str().unwrap().contains("ghost"));
}

/// Write the fixture with `edit` applied into `dir` and return its path.
fn edited_fixture(dir: &Path, name: &str, edit: impl FnOnce(&mut Value)) -> String {
    let mut snapshot: Value =
        serde_json::from_str(&std::fs::read_to_string(FIXTURE).unwrap()).unwrap();
    edit(&mut snapshot);
    let file = dir.join(name);
    std::fs::write(&file, serde_json::to_vec(&snapshot).unwrap()).unwrap();
    file.to_str().unwrap().to_string()
}

#[test]
fn import_keeps_sloppy_fields_as_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let file = edited_fixture(dir.path(), "sloppy.json", |snapshot| {
        let action = snapshot["actions"][0].as_object_mut().unwrap();
        action.remove("impact");
        action.remove("effort");
        action.insert("deadline".to_string(), Value::from("binnenkort"));
    });

    let imported = json(&fitc(dir.path(), &["--user", "linde", "snapshot", "import", &file]));
    assert_eq!(imported["goals"], 2);
    let warnings = imported["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 3);
    assert!(warnings[0].as_str().unwrap().contains("binnenkort"));
    assert!(dir.path().join("data").join("linde.json").is_file());

    let metrics = json(&fitc(dir.path(), &["--user", "linde", "metrics"]));
    assert!(metrics["totalFit"].is_number());
}

#[test]
fn import_refuses_dangling_goal_link() {
    let dir = tempfile::tempdir().unwrap();
    let file = edited_fixture(dir.path(), "dangling.json", |snapshot| {
        snapshot["actions"][0]["linkedGoalId"] = Value::from("ghost");
    });

    let output = fitc(dir.path(), &["--user", "linde", "snapshot", "import", &file]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("refusing to import"), "stderr: {stderr}");
    assert!(!dir.path().join("data").join("linde.json").exists());
}

#[test]
fn schema_lists_known_types() {
    let dir = tempfile::tempdir().unwrap();
    let schema = json(&fitc(dir.path(), &["schema", "alert"]));
    assert!(schema["properties"]["priority"].is_object());

    let output = fitc(dir.path(), &["schema", "kanban"]);
    assert!(!output.status.success());
}
